//! Types and helpers for the light-client commit store and packet commitments

use icm_primitives::prelude::*;
use icm_primitives::EncodingError;
use sha2::{Digest, Sha256};

use crate::packet::{Packet, Payload};

/// A light-client-verifiable snapshot of a remote chain at a given height.
///
/// The commitment data is opaque to the engine: it is produced and consumed
/// by the host's light-client certifier and proof verifier. The engine only
/// indexes commits by source chain and height.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Commit {
    /// Height at which the remote chain produced this commit. Zero is the
    /// absent value on the wire and is rejected by the handlers.
    pub height: u64,
    /// Opaque validator-set-backed header bytes.
    pub data: Vec<u8>,
}

impl Commit {
    pub fn new(height: u64, data: Vec<u8>) -> Self {
        Self { height, data }
    }
}

/// Packet commitment, the value a relayer proves inclusion of.
#[derive(Clone, PartialEq, Eq, derive_more::Into)]
pub struct PacketCommitment(Vec<u8>);

impl PacketCommitment {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl AsRef<[u8]> for PacketCommitment {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl core::fmt::Debug for PacketCommitment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "PacketCommitment({:?})", self.0)
    }
}

/// Compute the commitment for a packet: sha256 over its canonical bytes.
pub fn compute_packet_commitment<P: Payload>(
    packet: &Packet<P>,
) -> Result<PacketCommitment, EncodingError> {
    let bytes = packet.canonical_bytes()?;
    Ok(PacketCommitment(Sha256::digest(&bytes).to_vec()))
}
