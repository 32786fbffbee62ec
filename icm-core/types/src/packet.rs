//! Defines the packet type and the payload capability trait

use icm_primitives::prelude::*;
use icm_primitives::EncodingError;
use serde::de::DeserializeOwned;

use crate::error::ChannelError;
use crate::identifiers::ChainId;

/// The capability set a cross-chain payload must provide.
///
/// Consuming modules define their payload variants as a tagged union
/// implementing this trait; the type tag is what the router keys module
/// dispatch on. Payloads must carry a deterministic serde encoding since
/// they are persisted verbatim in the channel queues.
pub trait Payload: Clone + core::fmt::Debug + serde::Serialize + DeserializeOwned {
    /// Stable tag identifying the payload family for routing.
    fn type_tag(&self) -> &str;

    /// Stateless well-formedness check, run before a payload is enqueued.
    fn validate_basic(&self) -> Result<(), ChannelError>;
}

/// A piece of data that can be sent between two separate ledgers.
///
/// Immutable once constructed; its identity is the position it takes in the
/// destination's egress queue.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Packet<P> {
    pub payload: P,
    pub src_chain: ChainId,
    pub dest_chain: ChainId,
}

impl<P: Payload> Packet<P> {
    pub fn new(payload: P, src_chain: ChainId, dest_chain: ChainId) -> Self {
        Self {
            payload,
            src_chain,
            dest_chain,
        }
    }

    /// Canonical byte form of the packet, the preimage of its commitment.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, EncodingError> {
        serde_json::to_vec(self).map_err(|e| EncodingError::FailedToEncode {
            description: e.to_string(),
        })
    }
}
