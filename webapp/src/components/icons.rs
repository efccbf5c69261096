use dioxus::prelude::*;

use ricenow_common::NavIcon;

// stroke-only 24x24 glyphs, drawn in currentColor so they follow the theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Glyph {
    Nav(NavIcon),
    Sun,
    Moon,
    Menu,
    Close,
    Search,
}

impl Glyph {
    fn path(self) -> &'static str {
        match self {
            Self::Nav(NavIcon::Home) => "M3 10.5 12 3l9 7.5V21h-6v-6H9v6H3z",
            Self::Nav(NavIcon::Info) => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM12 11v6M12 7h.01",
            Self::Nav(NavIcon::Stack) => "M12 2 2 7l10 5 10-5zM2 12l10 5 10-5M2 17l10 5 10-5",
            Self::Nav(NavIcon::Mail) => "M3 5h18v14H3zM3 6l9 7 9-7",
            Self::Sun => {
                "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8zM12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4"
            }
            Self::Moon => "M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z",
            Self::Menu => "M3 6h18M3 12h18M3 18h18",
            Self::Close => "M6 6l12 12M18 6 6 18",
            Self::Search => "M11 4a7 7 0 1 0 0 14 7 7 0 0 0 0-14zM21 21l-5-5",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    glyph: Glyph,
    #[props(default)]
    class: String,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let path = props.glyph.path();

    rsx! {
        svg {
            class: "{props.class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "{path}" }
        }
    }
}
