use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCube, FaRightFromBracket, FaUser},
    Icon,
};
use dioxus_logger::tracing;

use crate::client::{
    api::logout,
    constant::{SITE_NAME, SITE_TAGLINE},
    router::Route,
    store::session::use_session,
};

#[component]
pub fn Navbar() -> Element {
    let session = use_session();

    let user = session.user();
    let username = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
    let user_is_superuser = user.as_ref().is_some_and(|u| u.superuser);

    let on_logout = move |_: MouseEvent| async move {
        if let Err(err) = logout().await {
            tracing::error!("Failed to log out: {}", err);
        }
        // The server clears the user from the session; pick up the anonymous snapshot
        session.reloader().reload().await;
    };

    rsx!(nav {
        class: "navbar",
        Link {
            to: Route::Dashboard {},
            div {
                class: "navbar-brand card",
                Icon {
                    width: 32,
                    height: 32,
                    icon: FaCube
                }
                div {
                    p { {SITE_NAME} }
                    p {
                        class: "badge",
                        {SITE_TAGLINE}
                    }
                }
            }
        }
        div { class: "navbar-spacer" }
        div {
            class: "navbar-user",
            div {
                class: "navbar-brand",
                Icon {
                    width: 20,
                    height: 20,
                    icon: FaUser
                }
                p { "{username}" }
                if user_is_superuser {
                    span {
                        class: "badge",
                        "superuser"
                    }
                }
            }
            button {
                class: "btn",
                title: "Logout",
                onclick: on_logout,
                Icon {
                    width: 18,
                    height: 18,
                    icon: FaRightFromBracket
                }
            }
        }
    })
}
