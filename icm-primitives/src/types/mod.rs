mod error;
mod signer;

pub use error::*;
pub use signer::*;
