use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Home, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/home")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    // `launch` installs the tracing subscriber (console logger on wasm).
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
