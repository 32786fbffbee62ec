//! Messages a relayer uses to deliver packets and receipts

use icm_primitives::prelude::*;
use icm_primitives::{Msg, Signer};

use crate::packet::{Packet, Payload};
use crate::proof::Proof;

pub const RECEIVE_TYPE_URL: &str = "/icm.core.channel.v1.MsgReceive";
pub const RECEIPT_TYPE_URL: &str = "/icm.core.channel.v1.MsgReceipt";

/// Posts a packet observed on the source chain's egress queue to the
/// destination chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MsgReceive<P> {
    pub packet: Packet<P>,
    pub proof: Proof,
    pub relayer: Signer,
}

impl<P: Payload> Msg for MsgReceive<P> {
    fn type_url(&self) -> &'static str {
        RECEIVE_TYPE_URL
    }

    fn signers(&self) -> Vec<Signer> {
        vec![self.relayer.clone()]
    }
}

/// Delivers an acknowledgement packet back to the chain that originated the
/// packet being acknowledged.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MsgReceipt<P> {
    pub packet: Packet<P>,
    pub proof: Proof,
    pub relayer: Signer,
}

impl<P: Payload> Msg for MsgReceipt<P> {
    fn type_url(&self) -> &'static str {
        RECEIPT_TYPE_URL
    }

    fn signers(&self) -> Vec<Signer> {
        vec![self.relayer.clone()]
    }
}
