//! Messages that prune confirmed-delivered queue entries

use icm_primitives::prelude::*;
use icm_primitives::{Msg, Signer};

use crate::identifiers::{ChainId, ChannelName, Sequence};

pub const RECEIVE_CLEANUP_TYPE_URL: &str = "/icm.core.channel.v1.MsgReceiveCleanup";
pub const RECEIPT_CLEANUP_TYPE_URL: &str = "/icm.core.channel.v1.MsgReceiptCleanup";

/// Requests pruning of the egress queue up to `sequence` once delivery has
/// been confirmed on the counterparty chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MsgReceiveCleanup {
    pub channel: ChannelName,
    pub sequence: Sequence,
    pub src_chain: ChainId,
    pub cleaner: Signer,
}

impl Msg for MsgReceiveCleanup {
    fn type_url(&self) -> &'static str {
        RECEIVE_CLEANUP_TYPE_URL
    }

    fn signers(&self) -> Vec<Signer> {
        vec![self.cleaner.clone()]
    }
}

/// Requests pruning of the receipt queue up to `sequence` once delivery has
/// been confirmed on the counterparty chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MsgReceiptCleanup {
    pub channel: ChannelName,
    pub sequence: Sequence,
    pub src_chain: ChainId,
    pub cleaner: Signer,
}

impl Msg for MsgReceiptCleanup {
    fn type_url(&self) -> &'static str {
        RECEIPT_CLEANUP_TYPE_URL
    }

    fn signers(&self) -> Vec<Signer> {
        vec![self.cleaner.clone()]
    }
}
