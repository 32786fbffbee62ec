//! Store key paths
//!
//! All engine state lives under textual paths inside the keeper's store.
//! Identifiers are validated to contain no `/`, so every path below is
//! collision-free by construction. Channel-scoped paths are relative to the
//! channel's own prefix.

use icm_core_types::height::Height;
use icm_core_types::identifiers::{ChainId, ChannelName};
use icm_primitives::prelude::*;

/// Latest-height pointer for a source chain; its presence is what marks the
/// connection as established.
pub fn last_commit_height(src_chain: &ChainId) -> String {
    format!("connections/{src_chain}")
}

/// A stored commit of `src_chain` at `height`.
pub fn commit(src_chain: &ChainId, height: Height) -> String {
    format!("commits/{src_chain}/{height}")
}

/// Namespace of one channel inside the keeper's store.
pub fn channel_prefix(name: &ChannelName) -> String {
    format!("channels/{name}/")
}

/// Egress queue of packets bound for `dest_chain` (channel-scoped).
pub fn egress_queue(dest_chain: &ChainId) -> String {
    format!("egress/{dest_chain}")
}

/// Queue of receipts bound for `dest_chain` (channel-scoped).
pub fn receipt_queue(dest_chain: &ChainId) -> String {
    format!("receipt/{dest_chain}")
}

/// Next expected inbound packet sequence from `src_chain` (channel-scoped).
pub fn ingress_sequence(src_chain: &ChainId) -> String {
    format!("ingress-seq/{src_chain}")
}

/// Next expected inbound receipt sequence from `src_chain` (channel-scoped).
pub fn ingress_receipt_sequence(src_chain: &ChainId) -> String {
    format!("ingress-receipt-seq/{src_chain}")
}
