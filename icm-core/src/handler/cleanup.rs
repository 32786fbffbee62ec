//! Protocol logic for the queue cleanup messages
//!
//! Queue entries are never rewritten in place; pruning only advances a
//! confirmed-delivery boundary. No proof format for that confirmation
//! exists yet, so these handlers validate routing and leave the queues
//! untouched.

use icm_core_types::error::ContextError;
use icm_core_types::msgs::{MsgReceiptCleanup, MsgReceiveCleanup};
use icm_primitives::prelude::*;

use super::HandlerOutput;
use crate::host::Context;
use crate::keeper::Keeper;

pub fn receive_cleanup(
    ctx: &mut dyn Context,
    keeper: &Keeper,
    msg: MsgReceiveCleanup,
) -> Result<HandlerOutput, ContextError> {
    let channel = keeper.channel(msg.channel.clone());
    let len = channel.egress_len(ctx, &msg.src_chain)?;

    ctx.log_message(format!(
        "receive_cleanup: channel {} retains {len} egress entries for {} (requested up to {})",
        msg.channel, msg.src_chain, msg.sequence
    ));
    Ok(HandlerOutput::default())
}

pub fn receipt_cleanup(
    ctx: &mut dyn Context,
    keeper: &Keeper,
    msg: MsgReceiptCleanup,
) -> Result<HandlerOutput, ContextError> {
    let channel = keeper.channel(msg.channel.clone());
    let len = channel.receipt_len(ctx, &msg.src_chain)?;

    ctx.log_message(format!(
        "receipt_cleanup: channel {} retains {len} receipt entries for {} (requested up to {})",
        msg.channel, msg.src_chain, msg.sequence
    ));
    Ok(HandlerOutput::default())
}
