use displaydoc::Display;

use crate::prelude::*;

#[derive(Debug, Display)]
pub enum EncodingError {
    /// failed to encode message to canonical bytes: `{description}`
    FailedToEncode { description: String },
}

impl std::error::Error for EncodingError {}
