//! Defines the proof carried by receive and receipt messages

use crate::identifiers::Sequence;

/// Accompanies a receive or receipt message: the sequence the relayer claims
/// for the packet and the commit height that justifies it.
///
/// The claimed sequence must equal the receiver's current expected counter
/// exactly; mismatches are rejected, never reordered or buffered. The
/// structural inclusion check against the commit at `height` is delegated to
/// the host's proof verifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Proof {
    pub height: u64,
    pub sequence: Sequence,
}

impl Proof {
    pub fn new(height: u64, sequence: impl Into<Sequence>) -> Self {
        Self {
            height,
            sequence: sequence.into(),
        }
    }
}
