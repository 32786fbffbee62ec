//! Channels move packets through per-destination queues
//!
//! A channel owns the namespacing of its queues and counters inside the
//! keeper's store. Queues are append-only and zero-indexed: the length is
//! both the next push index and the basis of the expected-sequence checks.

use icm_core_types::commitment::compute_packet_commitment;
use icm_core_types::error::{ChannelError, ContextError, StoreError};
use icm_core_types::height::Height;
use icm_core_types::identifiers::{ChainId, ChannelName, Sequence};
use icm_core_types::msgs::{MsgReceipt, MsgReceive};
use icm_core_types::packet::{Packet, Payload};
use icm_primitives::prelude::*;

use crate::handler::HandlerOutput;
use crate::host::{codec, path, CacheContext, Context, PrefixStore, Store};
use crate::keeper::Keeper;

/// A named communication path over which one application module's packets
/// and receipts flow.
#[derive(Clone, Debug)]
pub struct Channel {
    keeper: Keeper,
    name: ChannelName,
}

impl Channel {
    pub(crate) fn new(keeper: Keeper, name: ChannelName) -> Self {
        Self { keeper, name }
    }

    pub fn name(&self) -> &ChannelName {
        &self.name
    }

    /// Enqueues `payload` for delivery to `dest_chain`.
    ///
    /// No permission check is made beyond the payload's own validation;
    /// modules are trusted to send only payloads they are authorized to
    /// move.
    pub fn send<P: Payload>(
        &self,
        ctx: &mut dyn Context,
        payload: P,
        dest_chain: &ChainId,
    ) -> Result<(), ContextError> {
        payload.validate_basic()?;

        let packet = Packet::new(payload, ctx.chain_id().clone(), dest_chain.clone());

        let mut store = ctx.kv_store(self.keeper.store_key());
        let mut chan = PrefixStore::new(&mut *store, path::channel_prefix(&self.name));
        queue_push(&mut chan, &path::egress_queue(dest_chain), &packet)?;
        Ok(())
    }

    /// Processes a packet posted by a relayer.
    ///
    /// The destination callback runs inside a nested store overlay: its
    /// writes become visible only if it succeeds, but the packet is
    /// consumed either way and a callback failure is reported as a
    /// non-fatal log in the returned output, optionally alongside a
    /// failure receipt.
    pub fn receive<P: Payload>(
        &self,
        ctx: &mut dyn Context,
        msg: &MsgReceive<P>,
        on_recv: impl FnOnce(&mut dyn Context, &P) -> (Option<P>, Result<(), ChannelError>),
    ) -> Result<HandlerOutput, ContextError> {
        let host_chain = ctx.chain_id().clone();
        if msg.packet.dest_chain != host_chain {
            return Err(ChannelError::ChainMismatch {
                expected: host_chain,
                actual: msg.packet.dest_chain.clone(),
            }
            .into());
        }

        let src_chain = msg.packet.src_chain.clone();
        let (expected, commit) = {
            let mut store = ctx.kv_store(self.keeper.store_key());
            let expected = {
                let chan = PrefixStore::new(&mut *store, path::channel_prefix(&self.name));
                read_sequence(&chan, &path::ingress_sequence(&src_chain))?
            };
            let commit = match Height::new(msg.proof.height) {
                Ok(height) => self.keeper.commit(&*store, &src_chain, height)?,
                Err(_) => None,
            };
            (expected, commit)
        };
        if msg.proof.sequence != expected {
            return Err(ChannelError::InvalidSequence {
                expected,
                actual: msg.proof.sequence,
            }
            .into());
        }
        let commitment = compute_packet_commitment(&msg.packet).map_err(StoreError::from)?;
        ctx.proof_verifier()
            .verify_packet(commit.as_ref(), &commitment, &msg.proof)?;

        let mut cache = CacheContext::new(&mut *ctx);
        let (receipt, result) = on_recv(&mut cache, &msg.packet.payload);
        match &result {
            Ok(()) => cache.commit(),
            Err(_) => cache.discard(),
        }

        // Consumption is final: the counter advances and any receipt is
        // enqueued whether or not the callback succeeded.
        {
            let mut store = ctx.kv_store(self.keeper.store_key());
            let mut chan = PrefixStore::new(&mut *store, path::channel_prefix(&self.name));
            if let Some(receipt_payload) = &receipt {
                receipt_payload.validate_basic()?;
                let packet = Packet::new(receipt_payload.clone(), host_chain, src_chain.clone());
                queue_push(&mut chan, &path::receipt_queue(&src_chain), &packet)?;
            }
            write_sequence(
                &mut chan,
                &path::ingress_sequence(&src_chain),
                expected.increment(),
            );
        }

        match result {
            Ok(()) => {
                ctx.log_message(format!(
                    "success: receive: consumed sequence {expected} from {src_chain}"
                ));
                Ok(HandlerOutput::default())
            }
            Err(e) => Ok(HandlerOutput {
                log: Some(e.to_string()),
            }),
        }
    }

    /// Processes a receipt posted by a relayer. The receipt callback runs
    /// without overlay isolation.
    pub fn receipt<P: Payload>(
        &self,
        ctx: &mut dyn Context,
        msg: &MsgReceipt<P>,
        on_receipt: impl FnOnce(&mut dyn Context, &P),
    ) -> Result<HandlerOutput, ContextError> {
        let src_chain = msg.packet.src_chain.clone();
        let (expected, commit) = {
            let mut store = ctx.kv_store(self.keeper.store_key());
            let expected = {
                let chan = PrefixStore::new(&mut *store, path::channel_prefix(&self.name));
                read_sequence(&chan, &path::ingress_receipt_sequence(&src_chain))?
            };
            let commit = match Height::new(msg.proof.height) {
                Ok(height) => self.keeper.commit(&*store, &src_chain, height)?,
                Err(_) => None,
            };
            (expected, commit)
        };
        if msg.proof.sequence != expected {
            return Err(ChannelError::InvalidSequence {
                expected,
                actual: msg.proof.sequence,
            }
            .into());
        }
        let commitment = compute_packet_commitment(&msg.packet).map_err(StoreError::from)?;
        ctx.proof_verifier()
            .verify_packet(commit.as_ref(), &commitment, &msg.proof)?;

        {
            let mut store = ctx.kv_store(self.keeper.store_key());
            let mut chan = PrefixStore::new(&mut *store, path::channel_prefix(&self.name));
            write_sequence(
                &mut chan,
                &path::ingress_receipt_sequence(&src_chain),
                expected.increment(),
            );
        }

        on_receipt(ctx, &msg.packet.payload);

        ctx.log_message(format!(
            "success: receipt: consumed receipt sequence {expected} from {src_chain}"
        ));
        Ok(HandlerOutput::default())
    }

    /// Number of packets enqueued for `dest_chain`.
    pub fn egress_len(&self, ctx: &mut dyn Context, dest_chain: &ChainId) -> Result<u64, ContextError> {
        self.with_channel_store(ctx, |chan| queue_len(chan, &path::egress_queue(dest_chain)))
    }

    /// The packet at `index` of the egress queue for `dest_chain`.
    pub fn egress_packet<P: Payload>(
        &self,
        ctx: &mut dyn Context,
        dest_chain: &ChainId,
        index: u64,
    ) -> Result<Option<Packet<P>>, ContextError> {
        self.with_channel_store(ctx, |chan| {
            queue_get(chan, &path::egress_queue(dest_chain), index)
        })
    }

    /// Number of receipts enqueued for `dest_chain`.
    pub fn receipt_len(
        &self,
        ctx: &mut dyn Context,
        dest_chain: &ChainId,
    ) -> Result<u64, ContextError> {
        self.with_channel_store(ctx, |chan| queue_len(chan, &path::receipt_queue(dest_chain)))
    }

    /// The receipt packet at `index` of the receipt queue for `dest_chain`.
    pub fn receipt_packet<P: Payload>(
        &self,
        ctx: &mut dyn Context,
        dest_chain: &ChainId,
        index: u64,
    ) -> Result<Option<Packet<P>>, ContextError> {
        self.with_channel_store(ctx, |chan| {
            queue_get(chan, &path::receipt_queue(dest_chain), index)
        })
    }

    /// Next expected inbound packet sequence from `src_chain`.
    pub fn ingress_sequence(
        &self,
        ctx: &mut dyn Context,
        src_chain: &ChainId,
    ) -> Result<Sequence, ContextError> {
        self.with_channel_store(ctx, |chan| {
            read_sequence(chan, &path::ingress_sequence(src_chain))
        })
    }

    /// Next expected inbound receipt sequence from `src_chain`.
    pub fn ingress_receipt_sequence(
        &self,
        ctx: &mut dyn Context,
        src_chain: &ChainId,
    ) -> Result<Sequence, ContextError> {
        self.with_channel_store(ctx, |chan| {
            read_sequence(chan, &path::ingress_receipt_sequence(src_chain))
        })
    }

    fn with_channel_store<T>(
        &self,
        ctx: &mut dyn Context,
        f: impl FnOnce(&dyn Store) -> Result<T, StoreError>,
    ) -> Result<T, ContextError> {
        let mut store = ctx.kv_store(self.keeper.store_key());
        let chan = PrefixStore::new(&mut *store, path::channel_prefix(&self.name));
        Ok(f(&chan)?)
    }
}

fn read_sequence(store: &dyn Store, key: &str) -> Result<Sequence, StoreError> {
    match store.get(key.as_bytes()) {
        Some(bytes) => Ok(Sequence::from(codec::decode_u64(&bytes)?)),
        None => Ok(Sequence::default()),
    }
}

fn write_sequence(store: &mut dyn Store, key: &str, sequence: Sequence) {
    store.set(key.as_bytes(), &sequence.to_vec());
}

fn queue_len(store: &dyn Store, queue: &str) -> Result<u64, StoreError> {
    match store.get(format!("{queue}/len").as_bytes()) {
        Some(bytes) => codec::decode_u64(&bytes),
        None => Ok(0),
    }
}

/// Appends `packet` at the current length of `queue`.
fn queue_push<P: Payload>(
    store: &mut dyn Store,
    queue: &str,
    packet: &Packet<P>,
) -> Result<(), StoreError> {
    let len = queue_len(store, queue)?;
    store.set(format!("{queue}/{len}").as_bytes(), &codec::encode(packet)?);
    store.set(format!("{queue}/len").as_bytes(), &codec::encode_u64(len + 1));
    Ok(())
}

fn queue_get<P: Payload>(
    store: &dyn Store,
    queue: &str,
    index: u64,
) -> Result<Option<Packet<P>>, StoreError> {
    store
        .get(format!("{queue}/{index}").as_bytes())
        .map(|bytes| codec::decode(&bytes))
        .transpose()
}
