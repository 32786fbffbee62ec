//! Defines the `Router`, which binds application modules to payload types

use core::fmt::{Display, Error as FmtError, Formatter};

use icm_core_types::error::ChannelError;
use icm_core_types::identifiers::ChannelName;
use icm_core_types::packet::Payload;
use icm_primitives::prelude::*;

use crate::host::Context;

/// Identifies an application module registered with the router.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ModuleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

/// The callbacks an application module plugs into the engine.
///
/// These are the only points where consuming modules participate in packet
/// handling.
pub trait Module<P: Payload> {
    /// Handles a packet addressed to this module.
    ///
    /// Runs inside a discard-on-error store overlay. May return a receipt
    /// payload regardless of the result, typically to report failure back
    /// to the packet's origin.
    fn on_recv_packet(
        &mut self,
        ctx: &mut dyn Context,
        payload: &P,
    ) -> (Option<P>, Result<(), ChannelError>);

    /// Handles a receipt addressed to this module. Runs without overlay
    /// isolation.
    fn on_receipt_packet(&mut self, ctx: &mut dyn Context, payload: &P);

    /// The channel this module's packets flow over.
    fn channel_name(&self) -> &ChannelName;
}

/// Binds modules to payload type tags.
///
/// Constructed once per application instance and passed to the dispatcher
/// by reference; there is no process-global registry.
pub trait Router<P: Payload> {
    /// Returns a reference to a `Module` registered against the specified `ModuleId`
    fn get_route(&self, module_id: &ModuleId) -> Option<&dyn Module<P>>;

    /// Returns a mutable reference to a `Module` registered against the specified `ModuleId`
    fn get_route_mut(&mut self, module_id: &ModuleId) -> Option<&mut dyn Module<P>>;

    /// Return the module_id associated with a given payload type tag
    fn lookup_module(&self, type_tag: &str) -> Option<ModuleId>;
}
