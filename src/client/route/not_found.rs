use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        Page {
            class: "centered stack",
            h2 { "404" }
            p { "Nothing lives at /{path}" }
            Link {
                to: Route::Dashboard {},
                class: "btn",
                "Back to dashboard"
            }
        }
    }
}
