use dioxus::prelude::*;

use crate::components::icons::{Glyph, Icon};

#[derive(Clone, PartialEq, Props)]
pub struct NavSearchProps {
    query: String,
    placeholder: String,
    oninput: EventHandler<String>,
    onsubmit: EventHandler<()>,
}

// inline search form
//
// lives inside the nav links panel, so on mobile it slides down with the
// links and clicks on it never count as outside clicks
#[component]
pub fn NavSearch(props: NavSearchProps) -> Element {
    let oninput = props.oninput;
    let onsubmit = props.onsubmit;

    rsx! {
        form {
            class: "nav-search search-bar",
            role: "search",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                onsubmit.call(());
            },
            Icon { glyph: Glyph::Search, class: "search-icon" }
            input {
                name: "search_filter",
                r#type: "search",
                placeholder: "{props.placeholder}",
                aria_label: "Search",
                value: "{props.query}",
                oninput: move |event: FormEvent| oninput.call(event.value()),
            }
        }
    }
}
