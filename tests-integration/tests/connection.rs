//! Connection lifecycle: bootstrap, extension, and the rejections around them.

use icm_core::host::{path, Context, Store};
use icm_core_types::commitment::Commit;
use icm_core_types::error::{ConnectionError, ContextError};
use icm_core_types::height::Height;
use icm_core_types::identifiers::ChainId;
use icm_core_types::msgs::{MsgOpenConnection, MsgUpdateConnection};
use icm_primitives::Signer;
use icm_testkit::testapp::TestApp;
use rstest::rstest;

fn remote() -> ChainId {
    ChainId::new("chain-remote").unwrap()
}

fn open_msg(height: u64) -> MsgOpenConnection {
    MsgOpenConnection {
        src_chain: remote(),
        commit: Commit::new(height, b"header-bytes".to_vec()),
        signer: Signer::new("relayer"),
    }
}

fn update_msg(height: u64) -> MsgUpdateConnection {
    MsgUpdateConnection {
        src_chain: remote(),
        commit: Commit::new(height, b"header-bytes".to_vec()),
        signer: Signer::new("relayer"),
    }
}

#[rstest]
fn open_then_update_tracks_latest_commit() {
    let mut app = TestApp::new("chain-local");

    app.deliver(open_msg(1)).expect("open succeeds");
    app.deliver(update_msg(5)).expect("update succeeds");

    let keeper = app.keeper.clone();
    let store = app.ctx.kv_store(keeper.store_key());
    let latest = keeper.last_commit_height(&*store, &remote()).unwrap();
    assert_eq!(latest.map(u64::from), Some(5));

    let commit = keeper
        .commit(&*store, &remote(), Height::new(5).unwrap())
        .unwrap()
        .expect("commit stored at latest height");
    assert_eq!(commit.height, 5);

    // The commit anchored at open stays on file under its own height.
    assert!(keeper
        .commit(&*store, &remote(), Height::new(1).unwrap())
        .unwrap()
        .is_some());
    drop(store);

    assert!(app
        .ctx
        .logs()
        .iter()
        .any(|line| line.contains("update_connection")));
}

#[rstest]
fn update_before_open_is_rejected() {
    let mut app = TestApp::new("chain-local");

    let err = app.deliver(update_msg(3)).unwrap_err();
    assert!(matches!(
        err,
        ContextError::Connection(ConnectionError::NotEstablished { .. })
    ));
}

#[rstest]
fn reopening_an_established_connection_is_rejected() {
    let mut app = TestApp::new("chain-local");
    app.deliver(open_msg(1)).expect("open succeeds");

    let err = app.deliver(open_msg(2)).unwrap_err();
    assert!(matches!(
        err,
        ContextError::Connection(ConnectionError::AlreadyEstablished { .. })
    ));

    // The rejected commit must not have been written.
    let keeper = app.keeper.clone();
    let store = app.ctx.kv_store(keeper.store_key());
    let latest = keeper.last_commit_height(&*store, &remote()).unwrap();
    assert_eq!(latest.map(u64::from), Some(1));
}

#[rstest]
fn zero_height_open_is_rejected() {
    let mut app = TestApp::new("chain-local");

    let err = app.deliver(open_msg(0)).unwrap_err();
    assert!(matches!(
        err,
        ContextError::Connection(ConnectionError::InvalidHeight { height: 0 })
    ));

    // A rejected open establishes nothing.
    let keeper = app.keeper.clone();
    let store = app.ctx.kv_store(keeper.store_key());
    assert!(!keeper.is_connection_established(&*store, &remote()));
}

#[rstest]
fn zero_height_update_is_rejected() {
    let mut app = TestApp::new("chain-local");
    app.deliver(open_msg(1)).expect("open succeeds");

    let err = app.deliver(update_msg(0)).unwrap_err();
    assert!(matches!(
        err,
        ContextError::Connection(ConnectionError::InvalidHeight { height: 0 })
    ));
}

#[rstest]
#[should_panic(expected = "commit store corrupted")]
fn update_with_missing_prior_commit_panics() {
    let mut app = TestApp::new("chain-local");
    app.deliver(open_msg(1)).expect("open succeeds");

    // Plant a latest-height pointer with no commit stored beneath it.
    let store_key = app.keeper.store_key().clone();
    app.ctx.store_mut(&store_key).set(
        path::last_commit_height(&remote()).as_bytes(),
        &9u64.to_be_bytes(),
    );

    let _ = app.deliver(update_msg(10));
}
