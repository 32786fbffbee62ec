//! Protocol logic for relayer-posted packet and receipt messages

use icm_core_types::error::{ContextError, RouterError};
use icm_core_types::msgs::{MsgReceipt, MsgReceive};
use icm_core_types::packet::Payload;
use icm_primitives::prelude::*;

use super::HandlerOutput;
use crate::host::Context;
use crate::keeper::Keeper;
use crate::router::Router;

/// Routes a received packet to the module registered for its payload type
/// and runs it through that module's channel.
pub fn receive_packet<P: Payload>(
    ctx: &mut dyn Context,
    router: &mut dyn Router<P>,
    keeper: &Keeper,
    msg: MsgReceive<P>,
) -> Result<HandlerOutput, ContextError> {
    let type_tag = msg.packet.payload.type_tag().to_string();
    let module_id = router
        .lookup_module(&type_tag)
        .ok_or(RouterError::UnknownPayloadType { type_tag })?;
    let module = router
        .get_route_mut(&module_id)
        .ok_or(RouterError::ModuleNotFound)?;

    let channel = keeper.channel(module.channel_name().clone());
    channel.receive(ctx, &msg, |cctx, payload| {
        module.on_recv_packet(cctx, payload)
    })
}

/// Routes a received receipt to the module registered for its payload type.
pub fn receipt_packet<P: Payload>(
    ctx: &mut dyn Context,
    router: &mut dyn Router<P>,
    keeper: &Keeper,
    msg: MsgReceipt<P>,
) -> Result<HandlerOutput, ContextError> {
    let type_tag = msg.packet.payload.type_tag().to_string();
    let module_id = router
        .lookup_module(&type_tag)
        .ok_or(RouterError::UnknownPayloadType { type_tag })?;
    let module = router
        .get_route_mut(&module_id)
        .ok_or(RouterError::ModuleNotFound)?;

    let channel = keeper.channel(module.channel_name().clone());
    channel.receipt(ctx, &msg, |cctx, payload| {
        module.on_receipt_packet(cctx, payload)
    })
}
