use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use fabric_navbar::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const NAVBAR_CSS: Asset = asset!("/assets/navbar.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to init logger: {err}");
    }
    info!("starting NavBar demo");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let menu = use_menu_state();

    rsx! {
        NavBar {
            id: "main-nav",
            is_menu_open: menu.is_open(),
            open_menu: menu.open_handler(),
            close_menu: menu.close_handler(),
            entries: vec![
                NavBarChild::title(rsx! { "Brand" }),
                NavBarChild::item(rsx! { "Home" }),
                NavBarChild::item(rsx! { "About" }),
                NavBarChild::link("https://example.com/contact", rsx! { "Contact" }),
            ],
        }
        main { class: "demo-content",
            p { "Narrow the window and use the menu icon to open the navigation list." }
        }
    }
}
