use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route, store::session::AppSession};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let session = use_context_provider(AppSession::new_app);

    // Identify the session once on first load; no retry, a failure stays in
    // the store until something calls reload again
    use_future(move || async move {
        session.reload().await;
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Management console for Slink Minecraft servers"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
