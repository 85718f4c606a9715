use tokio::task::{self, LocalSet};

use super::*;

/// Tests two overlapping reloads that settle out of issue order.
///
/// The first reload is issued first but fails after the second has already
/// succeeded. Nothing serializes them, so the late failure overwrites the
/// earlier success.
///
/// Expected: Ok with Ready after the second settles, then Error after the first
#[tokio::test]
async fn last_settled_reload_wins() {
    let (first_tx, first_rx) = oneshot::channel();
    let (second_tx, second_rx) = oneshot::channel();
    let source = ScriptedIndex::default()
        .deferred(first_rx)
        .deferred(second_rx);
    let store = store(&source);

    LocalSet::new()
        .run_until(async move {
            let first = {
                let store = store.clone();
                task::spawn_local(async move { store.reload().await })
            };
            let second = {
                let store = store.clone();
                task::spawn_local(async move { store.reload().await })
            };

            // Both fetches are in flight before either settles
            task::yield_now().await;
            assert_eq!(source.calls(), 2);
            assert_eq!(store.state(), ApiState::Disconnected);

            second_tx.send(Ok(index(Some(alice())))).unwrap();
            assert_eq!(second.await.unwrap(), Some(index(Some(alice()))));
            assert_eq!(store.state(), ApiState::Ready);

            first_tx
                .send(Err(ApiError::transport(Some(500), "Internal Server Error")))
                .unwrap();
            assert_eq!(first.await.unwrap(), None);
            assert_eq!(
                store.snapshot(),
                ConnectionState::Error("Internal Server Error".to_string())
            );
            assert!(store.user().is_none());
        })
        .await;
}

/// Tests overlapping reloads that settle in issue order.
///
/// Expected: Ok with each reload issuing its own fetch and the later success kept
#[tokio::test]
async fn overlapping_reloads_are_not_coalesced() {
    let (first_tx, first_rx) = oneshot::channel();
    let (second_tx, second_rx) = oneshot::channel();
    let source = ScriptedIndex::default()
        .deferred(first_rx)
        .deferred(second_rx);
    let store = store(&source);

    LocalSet::new()
        .run_until(async move {
            let first = {
                let store = store.clone();
                task::spawn_local(async move { store.reload().await })
            };
            let second = {
                let store = store.clone();
                task::spawn_local(async move { store.reload().await })
            };

            task::yield_now().await;
            assert_eq!(source.calls(), 2);

            first_tx.send(Err(unauthorized())).unwrap();
            assert_eq!(first.await.unwrap(), None);
            assert_eq!(store.state(), ApiState::Error);

            second_tx.send(Ok(index(None))).unwrap();
            assert_eq!(second.await.unwrap(), Some(index(None)));
            assert_eq!(store.snapshot(), ConnectionState::Ready(index(None)));
        })
        .await;
}
