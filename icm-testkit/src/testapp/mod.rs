//! A minimal application wired over the engine for tests

pub mod remote_store;

use icm_core::channel::Channel;
use icm_core::handler::{dispatch, dispatch_any, HandlerOutput};
use icm_core::host::{Store, StoreKey};
use icm_core::keeper::Keeper;
use icm_core::router::ModuleId;
use icm_core_types::error::ContextError;
use icm_core_types::identifiers::{ChainId, ChannelName};
use icm_core_types::msgs::{AnyMsg, MsgEnvelope};
use icm_primitives::prelude::*;

use crate::context::MockContext;
use crate::router::MockRouter;
use self::remote_store::{RemoteStoreModule, RemoteStorePayload, REMOTE_STORE_TYPE_TAG};

/// Store key the engine's own state is mounted at.
pub const ENGINE_STORE_KEY: &str = "icm";
/// Store key the remote-store application writes to.
pub const APP_STORE_KEY: &str = "remote-app";
/// Channel the remote-store application sends and receives over.
pub const APP_CHANNEL: &str = "remote";

/// A self-contained chain application: a mock host, the engine keeper, and
/// a router with the remote-store module registered.
pub struct TestApp {
    pub ctx: MockContext,
    pub keeper: Keeper,
    pub router: MockRouter<RemoteStorePayload>,
}

impl TestApp {
    pub fn new(chain_id: &str) -> Self {
        Self::with_context(MockContext::new(
            ChainId::new(chain_id).expect("valid chain id"),
        ))
    }

    /// Builds the application over a caller-configured host, e.g. one with
    /// rejecting light-client implementations.
    pub fn with_context(ctx: MockContext) -> Self {
        let keeper = Keeper::new(StoreKey::new(ENGINE_STORE_KEY));

        let mut router = MockRouter::new();
        let module = RemoteStoreModule::new(
            StoreKey::new(APP_STORE_KEY),
            ChannelName::new(APP_CHANNEL).expect("valid channel name"),
        );
        router.add_route(
            ModuleId::new("remote-store"),
            REMOTE_STORE_TYPE_TAG,
            Box::new(module),
        );

        Self {
            ctx,
            keeper,
            router,
        }
    }

    /// Runs a decoded message through the dispatcher.
    pub fn deliver(
        &mut self,
        msg: impl Into<MsgEnvelope<RemoteStorePayload>>,
    ) -> Result<HandlerOutput, ContextError> {
        dispatch(&mut self.ctx, &mut self.router, &self.keeper, msg.into())
    }

    /// Runs an opaque message through decode-and-dispatch.
    pub fn deliver_any(&mut self, msg: AnyMsg) -> Result<HandlerOutput, ContextError> {
        dispatch_any(&mut self.ctx, &mut self.router, &self.keeper, msg)
    }

    /// The channel the remote-store module is bound to.
    pub fn channel(&self) -> Channel {
        self.keeper
            .channel(ChannelName::new(APP_CHANNEL).expect("valid channel name"))
    }

    /// Enqueues `payload` for `dest_chain` over the application channel.
    pub fn send(
        &mut self,
        payload: RemoteStorePayload,
        dest_chain: &ChainId,
    ) -> Result<(), ContextError> {
        let channel = self.channel();
        channel.send(&mut self.ctx, payload, dest_chain)
    }

    /// The value the remote-store application holds under `key`, if any.
    pub fn saved_value(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        self.ctx.store_mut(&StoreKey::new(APP_STORE_KEY)).get(key)
    }

    /// Number of receipts the remote-store application has seen delivered.
    pub fn receipts_delivered(&mut self) -> u64 {
        remote_store::receipt_count(self.ctx.store_mut(&StoreKey::new(APP_STORE_KEY)))
    }

    /// The most recently delivered receipt payload, if any.
    pub fn last_receipt(&mut self) -> Option<RemoteStorePayload> {
        remote_store::last_receipt(self.ctx.store_mut(&StoreKey::new(APP_STORE_KEY)))
    }
}
