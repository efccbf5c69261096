use dioxus::prelude::*;
use dioxus_router::prelude::*;

use ricenow_common::NavConfig;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let config = use_context::<NavConfig>();

    rsx! {
        div { class: "page",
            section { class: "hero",
                h1 { class: "hero-title", "{config.brand}" }
                p { class: "hero-subtitle",
                    "Fresh rice bowls, delivered while they are still steaming"
                }
                Link { to: Route::MyOrders {}, class: "btn", "View my orders" }
            }
        }
    }
}
