//! A remote-store application module: peers ask this chain to bind a value
//! under a key, and get a failure receipt back when the key is taken.

use icm_core::host::{Context, Store, StoreKey};
use icm_core::router::Module;
use icm_core_types::error::ChannelError;
use icm_core_types::identifiers::ChannelName;
use icm_core_types::packet::Payload;
use icm_primitives::prelude::*;

/// Payload type tag the router dispatches on.
pub const REMOTE_STORE_TYPE_TAG: &str = "remote-store";

const RECEIPT_COUNT_KEY: &[u8] = b"receipts/count";
const LAST_RECEIPT_KEY: &[u8] = b"receipts/last";

/// The closed set of payloads the remote-store application exchanges.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RemoteStorePayload {
    /// Asks the destination chain to bind `value` under `key`.
    Save { key: Vec<u8>, value: Vec<u8> },
    /// Receipt reporting that a save was rejected at the destination.
    SaveFailed { key: Vec<u8>, value: Vec<u8> },
}

impl Payload for RemoteStorePayload {
    fn type_tag(&self) -> &str {
        REMOTE_STORE_TYPE_TAG
    }

    fn validate_basic(&self) -> Result<(), ChannelError> {
        let (Self::Save { key, .. } | Self::SaveFailed { key, .. }) = self;
        if key.is_empty() {
            return Err(ChannelError::InvalidPayload {
                description: "remote-store key cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// The module side of the remote-store application.
///
/// Saves are first-writer-wins: a key already bound in the application
/// store rejects the packet, and the failed payload travels back to the
/// origin as a receipt.
pub struct RemoteStoreModule {
    store_key: StoreKey,
    channel_name: ChannelName,
}

impl RemoteStoreModule {
    pub fn new(store_key: StoreKey, channel_name: ChannelName) -> Self {
        Self {
            store_key,
            channel_name,
        }
    }

    pub fn store_key(&self) -> &StoreKey {
        &self.store_key
    }
}

impl Module<RemoteStorePayload> for RemoteStoreModule {
    fn on_recv_packet(
        &mut self,
        ctx: &mut dyn Context,
        payload: &RemoteStorePayload,
    ) -> (Option<RemoteStorePayload>, Result<(), ChannelError>) {
        match payload {
            RemoteStorePayload::Save { key, value } => {
                let mut store = ctx.kv_store(&self.store_key);
                if store.has(key) {
                    return (
                        Some(RemoteStorePayload::SaveFailed {
                            key: key.clone(),
                            value: value.clone(),
                        }),
                        Err(ChannelError::AppModule {
                            description: "save rejected: key already bound".to_string(),
                        }),
                    );
                }
                store.set(key, value);
                (None, Ok(()))
            }
            RemoteStorePayload::SaveFailed { .. } => (
                None,
                Err(ChannelError::AppModule {
                    description: "receipt payload cannot travel as a packet".to_string(),
                }),
            ),
        }
    }

    fn on_receipt_packet(&mut self, ctx: &mut dyn Context, payload: &RemoteStorePayload) {
        let mut store = ctx.kv_store(&self.store_key);
        let count = receipt_count(&*store);
        store.set(RECEIPT_COUNT_KEY, &(count + 1).to_be_bytes());
        if let Ok(bytes) = serde_json::to_vec(payload) {
            store.set(LAST_RECEIPT_KEY, &bytes);
        }
    }

    fn channel_name(&self) -> &ChannelName {
        &self.channel_name
    }
}

/// Number of receipts the module has recorded in `store`.
pub fn receipt_count(store: &dyn Store) -> u64 {
    store
        .get(RECEIPT_COUNT_KEY)
        .and_then(|bytes| <[u8; 8]>::try_from(bytes).ok())
        .map(u64::from_be_bytes)
        .unwrap_or(0)
}

/// The most recent receipt payload recorded in `store`, if any.
pub fn last_receipt(store: &dyn Store) -> Option<RemoteStorePayload> {
    store
        .get(LAST_RECEIPT_KEY)
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
}
