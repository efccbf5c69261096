#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::{NavBar, SearchCallback};

mod home;
use home::Home;

mod orders;
use orders::{MyOrders, OrderFilter};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/orders")]
        MyOrders {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(common::nav_config);

    // navbar searches filter the orders page
    let filter = use_context_provider(|| OrderFilter(Signal::new(String::new())));
    use_context_provider(|| SearchCallback::new(move |query: &str| filter.set(query)));

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
