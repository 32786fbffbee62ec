use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use icm_primitives::prelude::*;

use super::chain_id::validate_path_segment;
use crate::error::IdentifierError;

/// Names a communication path bound to one key-value namespace.
///
/// A channel owns no data of its own; the name only determines the
/// namespace under which its queues and sequence counters live, so the
/// same path-segment rules as [`super::ChainId`] apply.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelName(String);

impl ChannelName {
    pub fn new(name: &str) -> Result<Self, IdentifierError> {
        Self::from_str(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ChannelName {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_path_segment(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ChannelName {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        validate_path_segment(&s)?;
        Ok(Self(s))
    }
}

impl From<ChannelName> for String {
    fn from(name: ChannelName) -> Self {
        name.0
    }
}

impl Display for ChannelName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}
