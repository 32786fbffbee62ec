//! Defines the error taxonomy of the messaging engine.
//!
//! Every variant is a non-fatal, user-reportable rejection; handlers either
//! fully apply their effect or return one of these and apply none.

use displaydoc::Display;
use icm_primitives::prelude::*;
use icm_primitives::EncodingError;

use crate::identifiers::{ChainId, Sequence};

#[derive(Debug, Display)]
pub enum IdentifierError {
    /// identifier `{id}` cannot be empty
    Empty { id: String },
    /// identifier `{id}` must not contain the path separator `/`
    ContainsSeparator { id: String },
}

#[derive(Debug, Display)]
pub enum HeightError {
    /// commit height cannot be zero
    ZeroHeight,
}

#[derive(Debug, Display)]
pub enum ConnectionError {
    /// connection already established with source chain `{chain_id}`
    AlreadyEstablished { chain_id: ChainId },
    /// connection not established with source chain `{chain_id}`
    NotEstablished { chain_id: ChainId },
    /// invalid commit height `{height}`
    InvalidHeight { height: u64 },
    /// commit transition rejected by certifier: `{description}`
    UpdateCommitFailed { description: String },
}

#[derive(Debug, Display)]
pub enum ChannelError {
    /// chain id mismatch: expected `{expected}`, actual `{actual}`
    ChainMismatch { expected: ChainId, actual: ChainId },
    /// mismatched sequences: expected `{expected}`, actual `{actual}`
    InvalidSequence { expected: Sequence, actual: Sequence },
    /// invalid commitment proof: `{description}`
    InvalidProof { description: String },
    /// invalid payload: `{description}`
    InvalidPayload { description: String },
    /// application module error: `{description}`
    AppModule { description: String },
}

#[derive(Debug, Display)]
pub enum RouterError {
    /// unrecognized message type URL `{type_url}`
    UnknownMessageType { type_url: String },
    /// malformed message bytes: `{description}`
    MalformedMessage { description: String },
    /// no module registered for payload type `{type_tag}`
    UnknownPayloadType { type_tag: String },
    /// module not found
    ModuleNotFound,
}

#[derive(Debug, Display)]
pub enum StoreError {
    /// failed to encode value for storage: `{description}`
    FailedToEncode { description: String },
    /// failed to decode stored value: `{description}`
    FailedToDecode { description: String },
}

/// Top-level error type returned by the message handlers.
#[derive(Debug, Display)]
pub enum ContextError {
    /// connection error: `{0}`
    Connection(ConnectionError),
    /// channel error: `{0}`
    Channel(ChannelError),
    /// router error: `{0}`
    Router(RouterError),
    /// store error: `{0}`
    Store(StoreError),
}

impl From<ConnectionError> for ContextError {
    fn from(err: ConnectionError) -> Self {
        Self::Connection(err)
    }
}

impl From<ChannelError> for ContextError {
    fn from(err: ChannelError) -> Self {
        Self::Channel(err)
    }
}

impl From<RouterError> for ContextError {
    fn from(err: RouterError) -> Self {
        Self::Router(err)
    }
}

impl From<StoreError> for ContextError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<EncodingError> for StoreError {
    fn from(err: EncodingError) -> Self {
        match err {
            EncodingError::FailedToEncode { description } => Self::FailedToEncode { description },
        }
    }
}

impl std::error::Error for IdentifierError {}
impl std::error::Error for HeightError {}
impl std::error::Error for ConnectionError {}
impl std::error::Error for ChannelError {}
impl std::error::Error for RouterError {}
impl std::error::Error for StoreError {}

impl std::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Connection(e) => Some(e),
            Self::Channel(e) => Some(e),
            Self::Router(e) => Some(e),
            Self::Store(e) => Some(e),
        }
    }
}
