use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use icm_primitives::prelude::*;

use crate::error::IdentifierError;

/// Defines the domain type for chain identifiers.
///
/// Chain identifiers are spliced into textual store paths, so they must be
/// non-empty and must not contain the path separator.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainId(String);

impl ChainId {
    pub fn new(id: &str) -> Result<Self, IdentifierError> {
        Self::from_str(id)
    }

    /// Get a reference to the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ChainId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_path_segment(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ChainId {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        validate_path_segment(&s)?;
        Ok(Self(s))
    }
}

impl From<ChainId> for String {
    fn from(chain_id: ChainId) -> Self {
        chain_id.0
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

/// Checks that an identifier can be embedded in a store path without
/// colliding with neighbouring key spaces.
pub(crate) fn validate_path_segment(id: &str) -> Result<(), IdentifierError> {
    if id.is_empty() {
        return Err(IdentifierError::Empty { id: id.to_string() });
    }
    if id.contains('/') {
        return Err(IdentifierError::ContainsSeparator { id: id.to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(ChainId::new("chain-a").is_ok());
        assert_eq!(ChainId::new("chain-a").unwrap().as_str(), "chain-a");
    }

    #[test]
    fn rejects_identifiers_unfit_for_paths() {
        assert!(ChainId::new("").is_err());
        assert!(ChainId::new("chain/a").is_err());
    }
}
