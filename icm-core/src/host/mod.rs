//! The boundary between the engine and its host ledger: the key-value store
//! abstraction, the execution context, and the store key paths.

pub(crate) mod codec;
mod context;
pub mod path;
mod store;

pub use context::*;
pub use store::*;
