use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaRotateRight, Icon};

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::session::ApiState,
    router::Route,
    store::session::use_session,
};

/// Gate for routes that need a signed-in user.
///
/// Not yet connected shows a loading page, a failed connection shows the
/// reason with a retry, and an anonymous session is sent to the login page.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let session = use_session();
    let nav = navigator();

    use_effect(move || {
        if session.state() == ApiState::Ready && session.user().is_none() {
            nav.push(Route::Login {});
        }
    });

    let user_logged_in = session.user().is_some();

    match session.state() {
        ApiState::Disconnected => rsx! { LoadingPage {} },
        ApiState::Error => {
            let reason = session.error().unwrap_or_default();
            rsx! {
                ErrorPage {
                    message: reason,
                    RetryButton {}
                }
            }
        }
        ApiState::Ready if user_logged_in => rsx! { Outlet::<Route> {} },
        // Render nothing while redirecting via the use_effect
        ApiState::Ready => rsx! {},
    }
}

#[component]
pub fn RetryButton() -> Element {
    let session = use_session();
    let reloader = session.reloader();

    rsx! {
        button {
            class: "btn",
            disabled: !reloader.is_live(),
            onclick: move |_| async move {
                reloader.reload().await;
            },
            Icon {
                width: 16,
                height: 16,
                icon: FaRotateRight
            }
            "Retry"
        }
    }
}
