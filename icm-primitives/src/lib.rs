//! Contains primitive types and traits common to the `icm` inter-chain
//! messaging crates.
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

pub mod prelude;

mod traits;
pub use traits::*;

mod types;
pub use types::*;
