//! In-memory host implementation and test application for exercising the
//! `icm` engine.
#![forbid(unsafe_code)]
#![deny(
    warnings,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

extern crate alloc;

pub mod context;
pub mod light_client;
pub mod router;
pub mod store;
pub mod testapp;
