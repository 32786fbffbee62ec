use crate::prelude::*;
use crate::{EncodingError, Signer};

/// Types that implement this trait can be carried in a ledger transaction and
/// routed to a message handler.
///
/// The sign-bytes encoding must be deterministic: the same message always
/// yields the same bytes, since those bytes are what the transaction
/// signatures commit to.
pub trait Msg: serde::Serialize {
    /// Stable type tag identifying the message for routing.
    fn type_url(&self) -> &'static str;

    /// The addresses that must have signed the enclosing transaction.
    fn signers(&self) -> Vec<Signer>;

    /// Canonical byte form of the message, used for signing.
    fn sign_bytes(&self) -> Result<Vec<u8>, EncodingError>
    where
        Self: Sized,
    {
        serde_json::to_vec(self).map_err(|e| EncodingError::FailedToEncode {
            description: e.to_string(),
        })
    }
}
