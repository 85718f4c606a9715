use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaCrown, Icon};

use crate::{
    client::{component::Page, constant::SITE_NAME, store::session::use_session},
    model::session::Session,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();

    let user = session.user();
    let snapshot = session.session();
    let username = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
    let user_is_superuser = user.as_ref().is_some_and(|u| u.superuser);

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        Page {
            class: "stack",
            h2 { "Welcome back, {username}" }
            if user_is_superuser {
                div {
                    class: "navbar-brand",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaCrown
                    }
                    p { "You have superuser access to every server on this host." }
                }
            }
            if let Some(snapshot) = snapshot {
                SessionCard { snapshot }
            }
        }
    }
}

#[component]
fn SessionCard(snapshot: Session) -> Element {
    let created = snapshot.created.format(TIMESTAMP_FORMAT).to_string();
    let last_connection = snapshot.last_connection.format(TIMESTAMP_FORMAT).to_string();

    rsx! {
        div {
            class: "card stack",
            h3 { "Session" }
            if let Some(id) = snapshot.id.clone() {
                p { "ID: {id}" }
            }
            p { "Started: {created}" }
            p { "Last connection: {last_connection}" }
        }
    }
}
