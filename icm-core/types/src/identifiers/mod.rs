//! Defines identifier types

mod chain_id;
mod channel_name;
mod sequence;

pub use chain_id::ChainId;
pub use channel_name::ChannelName;
pub use sequence::Sequence;
