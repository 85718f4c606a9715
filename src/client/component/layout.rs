use dioxus::prelude::*;

use crate::client::{component::Navbar, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "shell",
        Navbar {  }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    })
}
