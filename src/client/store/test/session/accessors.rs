use super::*;

/// Tests the projections of a store that has never connected.
///
/// Expected: Ok with no user, session or error, and a no-op reloader
#[tokio::test]
async fn disconnected_store_is_anonymous_without_error() {
    let source = ScriptedIndex::default().respond(Ok(index(Some(alice()))));
    let store = store(&source);

    assert_eq!(store.state(), ApiState::Disconnected);
    assert!(store.user().is_none());
    assert!(store.session().is_none());
    assert!(store.error().is_none());

    let reloader = store.reloader();
    assert!(!reloader.is_live());
    assert_eq!(reloader.reload().await, None);
    assert_eq!(source.calls(), 0);
    assert_eq!(store.state(), ApiState::Disconnected);
}

/// Tests that the user projection follows the state variant.
///
/// Verifies that a user is reported only while ready with a user present,
/// and never in the error state.
///
/// Expected: Ok with user present only after the authenticated reload
#[tokio::test]
async fn user_present_only_when_ready_with_user() {
    let source = ScriptedIndex::default()
        .respond(Ok(index(None)))
        .respond(Ok(index(Some(alice()))))
        .respond(Err(unauthorized()));
    let store = store(&source);

    store.reload().await;
    assert_eq!(store.state(), ApiState::Ready);
    assert!(store.session().is_some());
    assert!(store.user().is_none());

    store.reload().await;
    assert_eq!(store.user(), Some(alice()));
    assert_eq!(
        store.session().and_then(|s| s.user).map(|link| link.id),
        Some("u1".to_string())
    );

    store.reload().await;
    assert_eq!(store.state(), ApiState::Error);
    assert!(store.user().is_none());
}

/// Tests that store clones observe the same state.
///
/// Expected: Ok with a reload through one clone visible through the other
#[tokio::test]
async fn clones_share_state() {
    let source = ScriptedIndex::default().respond(Ok(index(Some(alice()))));
    let store = store(&source);
    let view = store.clone();

    store.reload().await;

    assert_eq!(view.user(), Some(alice()));
    assert!(view.reloader().is_live());
}
