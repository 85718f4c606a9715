mod client;
mod model;

use client::App;
use dioxus_logger::tracing::{self, Level};

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus_logger::init(level).ok();

    tracing::info!("Starting console");
    dioxus::launch(App);
}
