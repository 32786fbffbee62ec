//! Protocol logic for the connection bootstrap messages

use icm_core_types::error::{ConnectionError, ContextError};
use icm_core_types::height::Height;
use icm_core_types::msgs::{MsgOpenConnection, MsgUpdateConnection};
use icm_primitives::prelude::*;

use super::HandlerOutput;
use crate::host::Context;
use crate::keeper::Keeper;

/// Records the root-of-trust commit for a source chain.
pub fn open_connection(
    ctx: &mut dyn Context,
    keeper: &Keeper,
    msg: MsgOpenConnection,
) -> Result<HandlerOutput, ContextError> {
    let height = {
        let mut store = ctx.kv_store(keeper.store_key());
        if keeper.is_connection_established(&*store, &msg.src_chain) {
            return Err(ConnectionError::AlreadyEstablished {
                chain_id: msg.src_chain,
            }
            .into());
        }

        let height = Height::new(msg.commit.height).map_err(|_| ConnectionError::InvalidHeight {
            height: msg.commit.height,
        })?;
        keeper.set_commit(&mut *store, &msg.src_chain, height, &msg.commit)?;
        height
    };

    ctx.log_message(format!(
        "success: open_connection: established connection with {} at height {height}",
        msg.src_chain
    ));
    Ok(HandlerOutput::default())
}

/// Extends an established connection with a newer commit, after the host's
/// certifier accepts the validator-set transition from the currently
/// trusted one.
pub fn update_connection(
    ctx: &mut dyn Context,
    keeper: &Keeper,
    msg: MsgUpdateConnection,
) -> Result<HandlerOutput, ContextError> {
    let trusted = {
        let store = ctx.kv_store(keeper.store_key());
        let last = keeper
            .last_commit_height(&*store, &msg.src_chain)?
            .ok_or(ConnectionError::NotEstablished {
                chain_id: msg.src_chain.clone(),
            })?;

        // An established connection always has its latest commit on file;
        // a miss means the store itself is corrupted, not bad input.
        match keeper.commit(&*store, &msg.src_chain, last)? {
            Some(commit) => commit,
            None => core::panic!(
                "commit store corrupted: no commit at height {last} for chain {}",
                msg.src_chain
            ),
        }
    };

    ctx.certifier().verify_transition(&trusted, &msg.commit)?;

    let height = {
        let mut store = ctx.kv_store(keeper.store_key());
        let height = Height::new(msg.commit.height).map_err(|_| ConnectionError::InvalidHeight {
            height: msg.commit.height,
        })?;
        keeper.set_commit(&mut *store, &msg.src_chain, height, &msg.commit)?;
        height
    };

    ctx.log_message(format!(
        "success: update_connection: extended connection with {} to height {height}",
        msg.src_chain
    ));
    Ok(HandlerOutput::default())
}
