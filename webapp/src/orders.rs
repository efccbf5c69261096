use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

// the last query submitted from the navbar search box
#[derive(Clone, Copy)]
pub struct OrderFilter(pub Signal<String>);

impl OrderFilter {
    pub fn set(self, query: &str) {
        let mut signal = self.0;
        signal.set(query.trim().to_owned());
    }
}

#[component]
pub fn MyOrders() -> Element {
    let filter = use_context::<OrderFilter>();
    let query = filter.0.read().clone();

    rsx! {
        div { class: "page",
            h1 { class: "hero-title", "My Orders" }
            div { class: "empty-state",
                if query.is_empty() {
                    p { "You have not placed any orders yet." }
                } else {
                    p { "No orders matching \"{query}\"." }
                }
                Link { to: Route::Home {}, "Back to the menu" }
            }
        }
    }
}
