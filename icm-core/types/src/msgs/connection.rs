//! Messages that bootstrap and extend trust in a remote chain

use icm_primitives::prelude::*;
use icm_primitives::{Msg, Signer};

use crate::commitment::Commit;
use crate::identifiers::ChainId;

pub const OPEN_CONNECTION_TYPE_URL: &str = "/icm.core.connection.v1.MsgOpenConnection";
pub const UPDATE_CONNECTION_TYPE_URL: &str = "/icm.core.connection.v1.MsgUpdateConnection";

/// Records the root-of-trust commit for a source chain, establishing the
/// connection over which packets from that chain can later be verified.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MsgOpenConnection {
    pub src_chain: ChainId,
    /// The root-of-trust commit the connection is anchored to.
    pub commit: Commit,
    pub signer: Signer,
}

impl Msg for MsgOpenConnection {
    fn type_url(&self) -> &'static str {
        OPEN_CONNECTION_TYPE_URL
    }

    fn signers(&self) -> Vec<Signer> {
        vec![self.signer.clone()]
    }
}

/// Extends an established connection with a newer commit of the source
/// chain. The validator-set transition between the previously trusted commit
/// and the new one is checked by the host's certifier.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MsgUpdateConnection {
    pub src_chain: ChainId,
    pub commit: Commit,
    pub signer: Signer,
}

impl Msg for MsgUpdateConnection {
    fn type_url(&self) -> &'static str {
        UPDATE_CONNECTION_TYPE_URL
    }

    fn signers(&self) -> Vec<Signer> {
        vec![self.signer.clone()]
    }
}
