//! Domain types for the `icm` inter-chain messaging engine: identifiers,
//! light-client commits, packets, proofs, messages and errors.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    warnings,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

pub mod commitment;
pub mod error;
pub mod height;
pub mod identifiers;
pub mod msgs;
pub mod packet;
pub mod proof;
