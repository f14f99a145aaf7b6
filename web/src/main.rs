use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::EduKreasiPage;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus::logger::init(level).expect("failed to initialize logger");
    info!(version = env!("CARGO_PKG_VERSION"), "starting EduKreasi");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "EduKreasi" }
        EduKreasiPage {}
    }
}
