//! The protocol engine of the `icm` inter-chain messaging workspace.
//!
//! Connection bootstrap anchors a root-of-trust commit per source chain;
//! channels move packets through per-destination egress and receipt queues
//! with monotonic sequence numbers; the dispatcher drives the whole state
//! machine from five message kinds.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    warnings,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

extern crate alloc;

pub mod channel;
pub mod handler;
pub mod host;
pub mod keeper;
pub mod router;

/// Re-exports `icm` domain types from the `icm-core-types` crate.
pub mod types {
    #[doc(inline)]
    pub use icm_core_types::*;
}
