//! Defines the messages the engine handles, and the envelope that routes them

mod cleanup;
mod connection;
mod packet;

pub use cleanup::*;
pub use connection::*;
use icm_primitives::prelude::*;
pub use packet::*;

use crate::error::RouterError;
use crate::packet::Payload;

/// An opaque, routable message as it arrives from the transaction decoder:
/// a stable type URL plus canonical message bytes.
///
/// Decoding into a [`MsgEnvelope`] is the per-application registry step;
/// there is no process-global type registration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnyMsg {
    pub type_url: String,
    pub value: Vec<u8>,
}

/// Enumeration of all messages that the engine's dispatcher accepts.
#[derive(Clone, Debug)]
pub enum MsgEnvelope<P> {
    OpenConnection(MsgOpenConnection),
    UpdateConnection(MsgUpdateConnection),
    Receive(MsgReceive<P>),
    Receipt(MsgReceipt<P>),
    ReceiveCleanup(MsgReceiveCleanup),
    ReceiptCleanup(MsgReceiptCleanup),
}

impl<P> From<MsgOpenConnection> for MsgEnvelope<P> {
    fn from(msg: MsgOpenConnection) -> Self {
        Self::OpenConnection(msg)
    }
}

impl<P> From<MsgUpdateConnection> for MsgEnvelope<P> {
    fn from(msg: MsgUpdateConnection) -> Self {
        Self::UpdateConnection(msg)
    }
}

impl<P> From<MsgReceive<P>> for MsgEnvelope<P> {
    fn from(msg: MsgReceive<P>) -> Self {
        Self::Receive(msg)
    }
}

impl<P> From<MsgReceipt<P>> for MsgEnvelope<P> {
    fn from(msg: MsgReceipt<P>) -> Self {
        Self::Receipt(msg)
    }
}

impl<P> From<MsgReceiveCleanup> for MsgEnvelope<P> {
    fn from(msg: MsgReceiveCleanup) -> Self {
        Self::ReceiveCleanup(msg)
    }
}

impl<P> From<MsgReceiptCleanup> for MsgEnvelope<P> {
    fn from(msg: MsgReceiptCleanup) -> Self {
        Self::ReceiptCleanup(msg)
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: &[u8]) -> Result<T, RouterError> {
    serde_json::from_slice(value).map_err(|e| RouterError::MalformedMessage {
        description: e.to_string(),
    })
}

impl<P: Payload> TryFrom<AnyMsg> for MsgEnvelope<P> {
    type Error = RouterError;

    fn try_from(any_msg: AnyMsg) -> Result<Self, Self::Error> {
        match any_msg.type_url.as_str() {
            OPEN_CONNECTION_TYPE_URL => {
                let msg: MsgOpenConnection = decode(&any_msg.value)?;
                Ok(MsgEnvelope::OpenConnection(msg))
            }
            UPDATE_CONNECTION_TYPE_URL => {
                let msg: MsgUpdateConnection = decode(&any_msg.value)?;
                Ok(MsgEnvelope::UpdateConnection(msg))
            }
            RECEIVE_TYPE_URL => {
                let msg: MsgReceive<P> = decode(&any_msg.value)?;
                Ok(MsgEnvelope::Receive(msg))
            }
            RECEIPT_TYPE_URL => {
                let msg: MsgReceipt<P> = decode(&any_msg.value)?;
                Ok(MsgEnvelope::Receipt(msg))
            }
            RECEIVE_CLEANUP_TYPE_URL => {
                let msg: MsgReceiveCleanup = decode(&any_msg.value)?;
                Ok(MsgEnvelope::ReceiveCleanup(msg))
            }
            RECEIPT_CLEANUP_TYPE_URL => {
                let msg: MsgReceiptCleanup = decode(&any_msg.value)?;
                Ok(MsgEnvelope::ReceiptCleanup(msg))
            }
            _ => Err(RouterError::UnknownMessageType {
                type_url: any_msg.type_url,
            }),
        }
    }
}
