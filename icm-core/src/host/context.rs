//! Defines the execution context supplied by the host ledger

use alloc::collections::BTreeMap;
use core::fmt::{Display, Error as FmtError, Formatter};

use icm_core_types::commitment::{Commit, PacketCommitment};
use icm_core_types::error::{ChannelError, ConnectionError};
use icm_core_types::identifiers::ChainId;
use icm_core_types::proof::Proof;
use icm_primitives::prelude::*;

use super::store::Store;

/// Identifies a store mounted by the host application.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoreKey(String);

impl StoreKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

/// Validates the validator-set transition between two commits of the same
/// source chain.
///
/// The algorithm itself belongs to the host's light-client implementation;
/// the engine only consumes the verdict when a connection update is
/// submitted.
pub trait Certifier {
    fn verify_transition(&self, trusted: &Commit, next: &Commit) -> Result<(), ConnectionError>;
}

/// Checks that a packet commitment is backed by the commit recorded for the
/// proof's claimed height.
///
/// The structural inclusion check belongs to the host's storage engine; the
/// engine computes the commitment, looks up the commit (which may be absent
/// when no connection has been opened) and threads both through here.
pub trait ProofVerifier {
    fn verify_packet(
        &self,
        commit: Option<&Commit>,
        commitment: &PacketCommitment,
        proof: &Proof,
    ) -> Result<(), ChannelError>;
}

/// The transaction-scoped environment a message handler executes in.
///
/// Implemented by the host application; all store access is synchronous and
/// rolled back with the surrounding transaction.
pub trait Context {
    /// Identifier of the executing chain.
    fn chain_id(&self) -> &ChainId;

    /// A view of the store mounted at `key`.
    fn kv_store<'a>(&'a mut self, key: &StoreKey) -> Box<dyn Store + 'a>;

    /// The host's light-client certifier.
    fn certifier(&self) -> &dyn Certifier;

    /// The host's commitment proof verifier.
    fn proof_verifier(&self) -> &dyn ProofVerifier;

    /// Emits a line into the host's log sink.
    fn log_message(&mut self, message: String);
}

/// A nested, discardable view over a parent [`Context`].
///
/// Writes performed through it buffer per store key and stay invisible to
/// the parent until [`CacheContext::commit`] flushes them, exactly once;
/// [`CacheContext::discard`] (or dropping) leaves the parent untouched.
/// This is what lets a receive callback fail without unwinding the packet
/// consumption itself.
pub struct CacheContext<'a> {
    parent: &'a mut dyn Context,
    overlays: BTreeMap<StoreKey, BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl<'a> CacheContext<'a> {
    pub fn new(parent: &'a mut dyn Context) -> Self {
        Self {
            parent,
            overlays: BTreeMap::new(),
        }
    }

    /// Flushes all buffered writes into the parent's stores.
    pub fn commit(mut self) {
        for (key, writes) in core::mem::take(&mut self.overlays) {
            let mut store = self.parent.kv_store(&key);
            for (k, v) in writes {
                store.set(&k, &v);
            }
        }
    }

    /// Drops all buffered writes.
    pub fn discard(self) {}
}

struct OverlayStore<'a> {
    parent: Box<dyn Store + 'a>,
    overlay: &'a mut BTreeMap<Vec<u8>, Vec<u8>>,
}

impl Store for OverlayStore<'_> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.overlay.get(key) {
            Some(value) => Some(value.clone()),
            None => self.parent.get(key),
        }
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.overlay.insert(key.to_vec(), value.to_vec());
    }

    fn has(&self, key: &[u8]) -> bool {
        self.overlay.contains_key(key) || self.parent.has(key)
    }
}

impl Context for CacheContext<'_> {
    fn chain_id(&self) -> &ChainId {
        self.parent.chain_id()
    }

    fn kv_store<'b>(&'b mut self, key: &StoreKey) -> Box<dyn Store + 'b> {
        let overlay = self.overlays.entry(key.clone()).or_default();
        let parent = self.parent.kv_store(key);
        Box::new(OverlayStore { parent, overlay })
    }

    fn certifier(&self) -> &dyn Certifier {
        self.parent.certifier()
    }

    fn proof_verifier(&self) -> &dyn ProofVerifier {
        self.parent.proof_verifier()
    }

    fn log_message(&mut self, message: String) {
        self.parent.log_message(message)
    }
}
