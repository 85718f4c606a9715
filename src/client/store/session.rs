//! Session store shared by the whole view tree.
//!
//! The store owns the only writable copy of the [`ConnectionState`]. Views get
//! it from the Dioxus context and read derived projections; the one way to
//! change the state is [`SessionStore::reload`], which replaces it wholesale
//! with the outcome of a single identity fetch.
//!
//! Overlapping reloads are not coalesced or ordered. Each one writes its own
//! outcome when it settles, so whichever settles last decides the final state.

use std::future::Future;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::HttpIndex,
        model::{
            error::ApiError,
            session::{ApiState, ConnectionState},
        },
    },
    model::{
        session::{IndexInfo, Session},
        user::RedactedUser,
    },
};

/// Somewhere the store keeps its [`ConnectionState`].
///
/// In the app this is a Dioxus signal, so every write re-renders the views
/// that read it.
pub trait StateSlot: Clone + 'static {
    fn read_with<R>(&self, f: impl FnOnce(&ConnectionState) -> R) -> R;

    fn replace(&mut self, state: ConnectionState);
}

impl StateSlot for Signal<ConnectionState> {
    fn read_with<R>(&self, f: impl FnOnce(&ConnectionState) -> R) -> R {
        f(&self.read())
    }

    fn replace(&mut self, state: ConnectionState) {
        self.set(state);
    }
}

/// The identity endpoint the store fetches from.
pub trait IndexSource: Clone + 'static {
    fn fetch_index(&self) -> impl Future<Output = Result<IndexInfo, ApiError>>;
}

#[derive(Clone, Copy)]
pub struct SessionStore<S, A> {
    slot: S,
    source: A,
}

impl<S: StateSlot, A: IndexSource> SessionStore<S, A> {
    /// Build a store around an already-initialized slot. Nothing is fetched
    /// until [`reload`](Self::reload) is called.
    pub fn new(slot: S, source: A) -> Self {
        Self { slot, source }
    }

    /// Fetch the identity endpoint once and replace the state with the outcome.
    ///
    /// Never fails: a transport or validation error becomes
    /// [`ConnectionState::Error`] and the call resolves to `None`.
    pub async fn reload(&self) -> Option<IndexInfo> {
        let result = self.source.fetch_index().await;

        match &result {
            Ok(info) => tracing::debug!(
                "Session reloaded (authenticated: {})",
                info.user.is_some()
            ),
            Err(err) => tracing::warn!("Failed to reload session: {}", err),
        }

        let info = result.as_ref().ok().cloned();
        let mut slot = self.slot.clone();
        slot.replace(ConnectionState::from(result));

        info
    }

    /// Clone of the whole current state.
    pub fn snapshot(&self) -> ConnectionState {
        self.slot.read_with(ConnectionState::clone)
    }

    pub fn state(&self) -> ApiState {
        self.slot.read_with(ConnectionState::state)
    }

    pub fn user(&self) -> Option<RedactedUser> {
        self.slot.read_with(|state| state.user().cloned())
    }

    pub fn session(&self) -> Option<Session> {
        self.slot.read_with(|state| state.session().cloned())
    }

    pub fn error(&self) -> Option<String> {
        self.slot.read_with(|state| state.error().map(str::to_string))
    }

    /// Reload handle for consumers. Until the store has connected once, the
    /// handle does nothing and resolves to `None`.
    pub fn reloader(&self) -> Reloader<S, A> {
        match self.state() {
            ApiState::Disconnected => Reloader::Noop,
            ApiState::Ready | ApiState::Error => Reloader::Live(self.clone()),
        }
    }
}

#[derive(Clone, Copy)]
pub enum Reloader<S, A> {
    Noop,
    Live(SessionStore<S, A>),
}

impl<S: StateSlot, A: IndexSource> Reloader<S, A> {
    pub async fn reload(&self) -> Option<IndexInfo> {
        match self {
            Reloader::Noop => None,
            Reloader::Live(store) => store.reload().await,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Reloader::Live(_))
    }
}

/// The store as wired into the running app.
pub type AppSession = SessionStore<Signal<ConnectionState>, HttpIndex>;

impl AppSession {
    /// Fresh, disconnected store backed by a signal in the current scope.
    pub fn new_app() -> Self {
        SessionStore::new(Signal::new(ConnectionState::Disconnected), HttpIndex)
    }
}

/// Session store provided at the root of the app.
pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}
