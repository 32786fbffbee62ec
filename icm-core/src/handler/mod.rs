//! Message handlers and the dispatch entrypoint

mod cleanup;
mod connection;
mod packet;

pub use cleanup::*;
pub use connection::*;
pub use packet::*;

use icm_core_types::error::ContextError;
use icm_core_types::msgs::{AnyMsg, MsgEnvelope};
use icm_core_types::packet::Payload;
use icm_primitives::prelude::*;

use crate::host::Context;
use crate::keeper::Keeper;
use crate::router::Router;

/// Result of a successfully processed message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandlerOutput {
    /// Carries the destination callback's error when a packet was consumed
    /// but its callback failed; the message itself still succeeded.
    pub log: Option<String>,
}

/// Entrypoint which routes a message to its handler.
///
/// Each handler either fully applies its effect or returns an error and
/// applies none, with the single documented exception of the receive
/// callback overlay.
pub fn dispatch<P: Payload>(
    ctx: &mut dyn Context,
    router: &mut dyn Router<P>,
    keeper: &Keeper,
    msg: MsgEnvelope<P>,
) -> Result<HandlerOutput, ContextError> {
    match msg {
        MsgEnvelope::OpenConnection(msg) => open_connection(ctx, keeper, msg),
        MsgEnvelope::UpdateConnection(msg) => update_connection(ctx, keeper, msg),
        MsgEnvelope::Receive(msg) => receive_packet(ctx, router, keeper, msg),
        MsgEnvelope::Receipt(msg) => receipt_packet(ctx, router, keeper, msg),
        MsgEnvelope::ReceiveCleanup(msg) => receive_cleanup(ctx, keeper, msg),
        MsgEnvelope::ReceiptCleanup(msg) => receipt_cleanup(ctx, keeper, msg),
    }
}

/// Decodes a routable message and dispatches it.
///
/// Unrecognized type URLs are rejected before any state is touched.
pub fn dispatch_any<P: Payload>(
    ctx: &mut dyn Context,
    router: &mut dyn Router<P>,
    keeper: &Keeper,
    any_msg: AnyMsg,
) -> Result<HandlerOutput, ContextError> {
    let msg = MsgEnvelope::<P>::try_from(any_msg)?;
    dispatch(ctx, router, keeper, msg)
}
