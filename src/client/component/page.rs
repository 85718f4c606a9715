use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaCircleExclamation, Icon};

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "page {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        div {
            class: "centered",
            p { "Connecting..." }
        }
    )
}

/// Full-page failure message; `children` renders below it, usually a recovery action.
#[component]
pub fn ErrorPage(message: String, children: Element) -> Element {
    rsx!(
        div {
            class: "centered",
            div {
                class: "card stack",
                div {
                    class: "navbar-brand",
                    Icon {
                        width: 32,
                        height: 32,
                        icon: FaCircleExclamation
                    }
                    p { "Unable to reach the server" }
                }
                p { class: "field-error", "{message}" }
                {children}
            }
        }
    )
}
