//! The keeper persists light-client commits per source chain

use icm_core_types::commitment::Commit;
use icm_core_types::error::StoreError;
use icm_core_types::height::Height;
use icm_core_types::identifiers::{ChainId, ChannelName};
use icm_primitives::prelude::*;

use crate::channel::Channel;
use crate::host::{codec, path, Store, StoreKey};

/// Manages connections between chains.
///
/// A connection with a source chain is established once its latest-height
/// pointer exists; commits are indexed by height underneath it. The keeper
/// enforces no height ordering itself; that belongs to the certifier
/// consulted by the update handler.
#[derive(Clone, Debug)]
pub struct Keeper {
    store_key: StoreKey,
}

impl Keeper {
    pub fn new(store_key: StoreKey) -> Self {
        Self { store_key }
    }

    /// The host store this keeper's state lives in.
    pub fn store_key(&self) -> &StoreKey {
        &self.store_key
    }

    /// Opens a named channel over this keeper's store.
    pub fn channel(&self, name: ChannelName) -> Channel {
        Channel::new(self.clone(), name)
    }

    /// True iff a latest-height pointer exists for `src_chain`.
    pub fn is_connection_established(&self, store: &dyn Store, src_chain: &ChainId) -> bool {
        store.has(path::last_commit_height(src_chain).as_bytes())
    }

    pub fn last_commit_height(
        &self,
        store: &dyn Store,
        src_chain: &ChainId,
    ) -> Result<Option<Height>, StoreError> {
        match store.get(path::last_commit_height(src_chain).as_bytes()) {
            Some(bytes) => {
                let raw = codec::decode_u64(&bytes)?;
                let height = Height::new(raw).map_err(|_| StoreError::FailedToDecode {
                    description: format!("stored latest height for {src_chain} is zero"),
                })?;
                Ok(Some(height))
            }
            None => Ok(None),
        }
    }

    pub fn commit(
        &self,
        store: &dyn Store,
        src_chain: &ChainId,
        height: Height,
    ) -> Result<Option<Commit>, StoreError> {
        store
            .get(path::commit(src_chain, height).as_bytes())
            .map(|bytes| codec::decode(&bytes))
            .transpose()
    }

    /// Writes the commit at `height` and unconditionally moves the
    /// latest-height pointer to it.
    pub fn set_commit(
        &self,
        store: &mut dyn Store,
        src_chain: &ChainId,
        height: Height,
        commit: &Commit,
    ) -> Result<(), StoreError> {
        store.set(
            path::commit(src_chain, height).as_bytes(),
            &codec::encode(commit)?,
        );
        store.set(
            path::last_commit_height(src_chain).as_bytes(),
            &codec::encode_u64(height.value()),
        );
        Ok(())
    }
}
