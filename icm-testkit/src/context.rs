//! A mock host context built over in-memory stores

use alloc::collections::BTreeMap;

use icm_core::host::{Certifier, Context, ProofVerifier, Store, StoreKey};
use icm_core_types::identifiers::ChainId;
use icm_primitives::prelude::*;

use crate::light_client::{MockCertifier, MockProofVerifier};
use crate::store::MemStore;

/// A host environment whose stores live in memory. The light-client traits
/// accept everything by default and can be swapped for rejecting ones.
pub struct MockContext {
    chain_id: ChainId,
    stores: BTreeMap<StoreKey, MemStore>,
    certifier: Box<dyn Certifier>,
    proof_verifier: Box<dyn ProofVerifier>,
    logs: Vec<String>,
}

impl MockContext {
    pub fn new(chain_id: ChainId) -> Self {
        Self {
            chain_id,
            stores: BTreeMap::new(),
            certifier: Box::new(MockCertifier),
            proof_verifier: Box::new(MockProofVerifier),
            logs: Vec::new(),
        }
    }

    pub fn with_certifier(mut self, certifier: impl Certifier + 'static) -> Self {
        self.certifier = Box::new(certifier);
        self
    }

    pub fn with_proof_verifier(mut self, proof_verifier: impl ProofVerifier + 'static) -> Self {
        self.proof_verifier = Box::new(proof_verifier);
        self
    }

    /// Everything logged through the context so far, in order.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Direct access to the store mounted at `key`, mainly so tests can
    /// inspect raw keys or plant corrupted entries.
    pub fn store_mut(&mut self, key: &StoreKey) -> &mut MemStore {
        self.stores.entry(key.clone()).or_default()
    }
}

impl Context for MockContext {
    fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    fn kv_store<'a>(&'a mut self, key: &StoreKey) -> Box<dyn Store + 'a> {
        Box::new(self.stores.entry(key.clone()).or_default())
    }

    fn certifier(&self) -> &dyn Certifier {
        self.certifier.as_ref()
    }

    fn proof_verifier(&self) -> &dyn ProofVerifier {
        self.proof_verifier.as_ref()
    }

    fn log_message(&mut self, message: String) {
        self.logs.push(message);
    }
}
