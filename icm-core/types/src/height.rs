//! Defines the commit height type

use crate::error::HeightError;

/// The height at which a remote chain produced a light-client commit.
///
/// Heights start at one; zero is reserved as the absent value on the wire,
/// which is where the invalid-height rejection of the connection handlers
/// comes from now that negative heights are unrepresentable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Height(u64);

impl Height {
    pub fn new(height: u64) -> Result<Self, HeightError> {
        if height == 0 {
            return Err(HeightError::ZeroHeight);
        }
        Ok(Self(height))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<Height> for u64 {
    fn from(height: Height) -> u64 {
        height.0
    }
}

impl core::fmt::Display for Height {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_is_invalid() {
        assert!(Height::new(0).is_err());
        assert_eq!(Height::new(7).unwrap().value(), 7);
    }
}
