//! Delegated verification: a rejecting proof verifier and a rejecting
//! certifier, threaded through the same handlers the permissive mocks use.

use icm_core::host::Context;
use icm_core_types::commitment::Commit;
use icm_core_types::error::{ChannelError, ConnectionError, ContextError};
use icm_core_types::identifiers::ChainId;
use icm_core_types::msgs::{MsgOpenConnection, MsgReceive, MsgUpdateConnection};
use icm_core_types::packet::Packet;
use icm_core_types::proof::Proof;
use icm_primitives::Signer;
use icm_testkit::context::MockContext;
use icm_testkit::light_client::{StrictCertifier, StrictProofVerifier};
use icm_testkit::testapp::remote_store::RemoteStorePayload;
use icm_testkit::testapp::TestApp;
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

fn open_msg(src_chain: ChainId, height: u64) -> MsgOpenConnection {
    MsgOpenConnection {
        src_chain,
        commit: Commit::new(height, b"header-bytes".to_vec()),
        signer: Signer::new("relayer"),
    }
}

fn update_msg(src_chain: ChainId, height: u64) -> MsgUpdateConnection {
    MsgUpdateConnection {
        src_chain,
        commit: Commit::new(height, b"header-bytes".to_vec()),
        signer: Signer::new("relayer"),
    }
}

#[rstest]
fn rejecting_verifier_blocks_receive_until_a_commit_is_on_file() {
    let ctx = MockContext::new(host()).with_proof_verifier(StrictProofVerifier);
    let mut app = TestApp::with_context(ctx);

    app.send(save("hello", "world"), &host()).unwrap();
    let channel = app.channel();
    let packet = channel
        .egress_packet::<RemoteStorePayload>(&mut app.ctx, &host(), 0)
        .unwrap()
        .expect("packet enqueued");

    // No commit on file for the claimed height: the verifier's rejection
    // surfaces as the message error and nothing is consumed.
    let err = app.deliver(receive_msg(packet.clone(), 0)).unwrap_err();
    assert!(matches!(
        err,
        ContextError::Channel(ChannelError::InvalidProof { .. })
    ));
    let channel = app.channel();
    assert_eq!(
        channel.ingress_sequence(&mut app.ctx, &host()).unwrap(),
        0.into()
    );
    assert_eq!(app.saved_value(b"hello"), None);

    // Anchoring a commit at the claimed height satisfies the verifier.
    app.deliver(open_msg(host(), 1)).expect("open succeeds");
    app.deliver(receive_msg(packet, 0))
        .expect("receive succeeds once a commit is on file");
    assert_eq!(app.saved_value(b"hello"), Some(b"world".to_vec()));
}

#[rstest]
fn rejecting_certifier_blocks_non_extending_updates() {
    let remote = ChainId::new("chain-remote").unwrap();
    let ctx = MockContext::new(host()).with_certifier(StrictCertifier);
    let mut app = TestApp::with_context(ctx);

    app.deliver(open_msg(remote.clone(), 5)).expect("open succeeds");

    let err = app.deliver(update_msg(remote.clone(), 3)).unwrap_err();
    assert!(matches!(
        err,
        ContextError::Connection(ConnectionError::UpdateCommitFailed { .. })
    ));

    // The rejected update leaves the trusted commit untouched.
    let keeper = app.keeper.clone();
    let store = app.ctx.kv_store(keeper.store_key());
    let latest = keeper.last_commit_height(&*store, &remote).unwrap();
    assert_eq!(latest.map(u64::from), Some(5));
    drop(store);

    app.deliver(update_msg(remote.clone(), 6))
        .expect("extending update succeeds");
    let keeper = app.keeper.clone();
    let store = app.ctx.kv_store(keeper.store_key());
    let latest = keeper.last_commit_height(&*store, &remote).unwrap();
    assert_eq!(latest.map(u64::from), Some(6));
}
