//! Permissive light-client stand-ins for the host traits

use icm_core::host::{Certifier, ProofVerifier};
use icm_core_types::commitment::{Commit, PacketCommitment};
use icm_core_types::error::{ChannelError, ConnectionError};
use icm_core_types::proof::Proof;
use icm_primitives::prelude::*;

/// A certifier that accepts every validator-set transition.
#[derive(Clone, Debug, Default)]
pub struct MockCertifier;

impl Certifier for MockCertifier {
    fn verify_transition(&self, _trusted: &Commit, _next: &Commit) -> Result<(), ConnectionError> {
        Ok(())
    }
}

/// A proof verifier that accepts every packet proof, with or without a
/// commit on file.
///
/// This is what makes loopback scenarios work: a chain can deliver its own
/// egress queue back to itself without ever opening a connection.
#[derive(Clone, Debug, Default)]
pub struct MockProofVerifier;

impl ProofVerifier for MockProofVerifier {
    fn verify_packet(
        &self,
        _commit: Option<&Commit>,
        _commitment: &PacketCommitment,
        _proof: &Proof,
    ) -> Result<(), ChannelError> {
        Ok(())
    }
}

/// A certifier that requires strictly increasing commit heights, the minimal
/// transition rule a real light client would enforce.
#[derive(Clone, Debug, Default)]
pub struct StrictCertifier;

impl Certifier for StrictCertifier {
    fn verify_transition(&self, trusted: &Commit, next: &Commit) -> Result<(), ConnectionError> {
        if next.height <= trusted.height {
            return Err(ConnectionError::UpdateCommitFailed {
                description: format!(
                    "commit height {} does not extend trusted height {}",
                    next.height, trusted.height
                ),
            });
        }
        Ok(())
    }
}

/// A proof verifier that insists on a commit being on file for the claimed
/// height, the way a production host would.
#[derive(Clone, Debug, Default)]
pub struct StrictProofVerifier;

impl ProofVerifier for StrictProofVerifier {
    fn verify_packet(
        &self,
        commit: Option<&Commit>,
        _commitment: &PacketCommitment,
        proof: &Proof,
    ) -> Result<(), ChannelError> {
        if commit.is_none() {
            return Err(ChannelError::InvalidProof {
                description: format!("no commit on file at height {}", proof.height),
            });
        }
        Ok(())
    }
}
