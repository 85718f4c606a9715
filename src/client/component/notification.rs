use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCircleExclamation, FaXmark},
    Icon,
};

use crate::client::constant::NOTIFICATION_TIMEOUT_MS;

/// Error toast shown while `message` holds a value. Clears itself after a timeout.
#[component]
pub fn Notification(mut message: Signal<Option<String>>) -> Element {
    use_effect(move || {
        if message.read().is_some() {
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
                message.set(None);
            });
        }
    });

    rsx! {
        if let Some(text) = message() {
            div {
                class: "toast navbar-brand",
                role: "alert",
                Icon {
                    width: 20,
                    height: 20,
                    icon: FaCircleExclamation
                }
                p { "{text}" }
                button {
                    class: "btn",
                    onclick: move |_| message.set(None),
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaXmark
                    }
                }
            }
        }
    }
}
