//! End-to-end loopback run of the remote-store application: saves, failure
//! receipts, receipt delivery, cleanup, and the opaque-message entrypoint.

use icm_core_types::commitment::Commit;
use icm_core_types::error::{ContextError, RouterError};
use icm_core_types::identifiers::{ChainId, ChannelName, Sequence};
use icm_core_types::msgs::{
    AnyMsg, MsgOpenConnection, MsgReceipt, MsgReceive, MsgReceiptCleanup, MsgReceiveCleanup,
    OPEN_CONNECTION_TYPE_URL,
};
use icm_core_types::packet::Packet;
use icm_core_types::proof::Proof;
use icm_primitives::Signer;
use icm_testkit::testapp::remote_store::RemoteStorePayload;
use icm_testkit::testapp::{TestApp, APP_CHANNEL};
use rstest::rstest;

const HOST: &str = "chain-loop";

fn host() -> ChainId {
    ChainId::new(HOST).unwrap()
}

fn save(key: &str, value: &str) -> RemoteStorePayload {
    RemoteStorePayload::Save {
        key: key.as_bytes().to_vec(),
        value: value.as_bytes().to_vec(),
    }
}

fn receive_msg(packet: Packet<RemoteStorePayload>, sequence: u64) -> MsgReceive<RemoteStorePayload> {
    MsgReceive {
        packet,
        proof: Proof::new(1, sequence),
        relayer: Signer::new("relayer"),
    }
}

fn receipt_msg(packet: Packet<RemoteStorePayload>, sequence: u64) -> MsgReceipt<RemoteStorePayload> {
    MsgReceipt {
        packet,
        proof: Proof::new(1, sequence),
        relayer: Signer::new("relayer"),
    }
}

#[rstest]
fn saves_round_trip_and_conflicts_come_back_as_receipts() {
    let mut app = TestApp::new(HOST);

    // Two saves to ourselves, the second one conflicting on the key.
    app.send(save("name", "alice"), &host()).unwrap();
    app.send(save("name", "bob"), &host()).unwrap();

    let channel = app.channel();
    let first = channel
        .egress_packet::<RemoteStorePayload>(&mut app.ctx, &host(), 0)
        .unwrap()
        .expect("first packet enqueued");
    let second = channel
        .egress_packet::<RemoteStorePayload>(&mut app.ctx, &host(), 1)
        .unwrap()
        .expect("second packet enqueued");

    let output = app.deliver(receive_msg(first, 0)).unwrap();
    assert_eq!(output.log, None);
    assert_eq!(app.saved_value(b"name"), Some(b"alice".to_vec()));

    // The conflicting save is consumed, its write discarded, and the failed
    // payload queued back to the origin as a receipt.
    let output = app.deliver(receive_msg(second, 1)).unwrap();
    let log = output.log.expect("callback failure surfaces in the log");
    assert!(log.contains("key already bound"));
    assert_eq!(app.saved_value(b"name"), Some(b"alice".to_vec()));

    let channel = app.channel();
    assert_eq!(channel.receipt_len(&mut app.ctx, &host()).unwrap(), 1);
    let receipt = channel
        .receipt_packet::<RemoteStorePayload>(&mut app.ctx, &host(), 0)
        .unwrap()
        .expect("failure receipt enqueued");
    assert_eq!(
        receipt.payload,
        RemoteStorePayload::SaveFailed {
            key: b"name".to_vec(),
            value: b"bob".to_vec(),
        }
    );

    // Deliver the receipt back to its origin (ourselves).
    app.deliver(receipt_msg(receipt.clone(), 0)).unwrap();
    assert_eq!(app.receipts_delivered(), 1);
    assert_eq!(app.last_receipt(), Some(receipt.payload.clone()));
    let channel = app.channel();
    assert_eq!(
        channel
            .ingress_receipt_sequence(&mut app.ctx, &host())
            .unwrap(),
        1.into()
    );

    // Replayed receipts hit the same strict sequence check as packets.
    let err = app.deliver(receipt_msg(receipt, 0)).unwrap_err();
    assert!(matches!(err, ContextError::Channel(_)));
    assert_eq!(app.receipts_delivered(), 1);
}

#[rstest]
fn receipt_payload_cannot_travel_as_a_packet() {
    let mut app = TestApp::new(HOST);

    let bogus = RemoteStorePayload::SaveFailed {
        key: b"k".to_vec(),
        value: b"v".to_vec(),
    };
    let packet = Packet::new(bogus, host(), host());

    // The module rejects it, but the packet is still consumed.
    let output = app.deliver(receive_msg(packet, 0)).unwrap();
    assert!(output.log.is_some());
    let channel = app.channel();
    assert_eq!(
        channel.ingress_sequence(&mut app.ctx, &host()).unwrap(),
        1.into()
    );
}

#[rstest]
fn cleanup_messages_validate_routing_and_prune_nothing() {
    let mut app = TestApp::new(HOST);
    app.send(save("k", "v"), &host()).unwrap();

    let channel_name = ChannelName::new(APP_CHANNEL).unwrap();
    app.deliver(MsgReceiveCleanup {
        channel: channel_name.clone(),
        sequence: Sequence::from(1),
        src_chain: host(),
        cleaner: Signer::new("cleaner"),
    })
    .unwrap();
    app.deliver(MsgReceiptCleanup {
        channel: channel_name,
        sequence: Sequence::from(1),
        src_chain: host(),
        cleaner: Signer::new("cleaner"),
    })
    .unwrap();

    // Queues are append-only until a confirmation proof format exists.
    let channel = app.channel();
    assert_eq!(channel.egress_len(&mut app.ctx, &host()).unwrap(), 1);
}

#[rstest]
fn opaque_messages_decode_by_type_url() {
    let mut app = TestApp::new(HOST);

    let msg = MsgOpenConnection {
        src_chain: ChainId::new("chain-remote").unwrap(),
        commit: Commit::new(1, b"header-bytes".to_vec()),
        signer: Signer::new("relayer"),
    };
    let any = AnyMsg {
        type_url: OPEN_CONNECTION_TYPE_URL.to_string(),
        value: serde_json::to_vec(&msg).unwrap(),
    };
    app.deliver_any(any).expect("known type URL dispatches");

    let err = app
        .deliver_any(AnyMsg {
            type_url: "/icm.core.v1.MsgBogus".to_string(),
            value: Vec::new(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ContextError::Router(RouterError::UnknownMessageType { .. })
    ));

    let err = app
        .deliver_any(AnyMsg {
            type_url: OPEN_CONNECTION_TYPE_URL.to_string(),
            value: b"not json".to_vec(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ContextError::Router(RouterError::MalformedMessage { .. })
    ));
}
