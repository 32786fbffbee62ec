use derive_more::Display;

use crate::prelude::*;

/// Represents the address of the signer of the current transaction
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, serde::Serialize, serde::Deserialize,
)]
pub struct Signer(String);

impl Signer {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Signer {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Signer {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
