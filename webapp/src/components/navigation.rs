use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use ricenow_common::{
    LOGO_ID, MENU_TOGGLE_ID, NAV_ITEMS, NAV_LINKS_ID, NavConfig, THEME_TOGGLE_ID, NavItem, NavKey, NavigationController, NavigationSession,
    SearchHandler, SystemColorScheme,
};

use crate::{
    Route,
    common::{
        dom::{
            DocumentClicks, DocumentThemeAttribute, LogoPointer, MediaColorScheme,
            viewport_width,
        },
        storage::BrowserStore,
    },
    components::{
        icons::{Glyph, Icon},
        search_bar::NavSearch,
    },
};

type BrowserSession = NavigationSession<BrowserStore, DocumentThemeAttribute>;

// host-provided search callback
//
// an embedding page wires this up with use_context_provider above the
// router; without one, submissions are only logged
#[derive(Clone)]
pub struct SearchCallback(Rc<SearchHandler>);

impl SearchCallback {
    pub fn new(handler: impl Fn(&str) + 'static) -> Self {
        SearchCallback(Rc::new(handler))
    }
}

// resolves the theme and attaches the document-wide listeners
//
// the logo listener has to wait until the element exists, see NavBarInner
fn mount_session(config: NavConfig) -> Rc<BrowserSession> {
    let update = schedule_update();
    let scheme = MediaColorScheme::new();

    let controller = NavigationController::mount(
        config,
        BrowserStore,
        DocumentThemeAttribute,
        scheme.prefers_dark(),
    );

    let session = NavigationSession::new(controller, move || update());
    session.watch_document_clicks(&DocumentClicks);
    session.watch_system_scheme(&scheme);

    Rc::new(session)
}

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    item: NavItem,
    active: bool,
    onselect: EventHandler<NavKey>,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let item = props.item;
    let onselect = props.onselect;

    rsx! {
        a {
            href: "#",
            class: if props.active { "nav-link active" } else { "nav-link" },
            onclick: move |event: MouseEvent| {
                event.prevent_default();
                onselect.call(item.key);
            },
            i { class: "nav-icon", "aria-hidden": "true",
                Icon { glyph: Glyph::Nav(item.icon) }
            }
            span { class: "nav-label", "{item.label}" }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let config = use_context::<NavConfig>();
    let search_handler = try_use_context::<SearchCallback>();

    let session = use_hook({
        let config = config.clone();
        move || mount_session(config)
    });

    use_drop({
        let session = session.clone();
        move || session.unmount()
    });

    use_effect({
        let session = session.clone();
        move || match LogoPointer::find(LOGO_ID) {
            Ok(logo) => {
                let sink = logo.clone();
                session.watch_logo_pointer(&logo, move |position| sink.set_shine(position));
            }
            Err(err) => debug!("logo shine disabled: {err}"),
        }
    });

    let select_link = use_callback({
        let session = session.clone();
        move |key: NavKey| {
            let width = viewport_width();
            session.update(|c| c.select_link(key, width));
        }
    });

    let toggle_theme = use_callback({
        let session = session.clone();
        move |()| {
            session.update(|c| c.toggle_theme());
        }
    });

    let toggle_menu = use_callback({
        let session = session.clone();
        move |()| {
            session.update(|c| c.toggle_menu());
        }
    });

    let set_query = use_callback({
        let session = session.clone();
        move |query: String| session.update(|c| c.set_query(query))
    });

    let submit_search = use_callback({
        let session = session.clone();
        move |()| {
            let handler = search_handler.as_ref().map(|callback| callback.0.as_ref());
            session.submit_search(handler);
        }
    });

    let state = session.controller().state().clone();

    rsx! {
        nav { class: "premium-nav", role: "navigation", aria_label: "Main navigation",
            div { class: "nav-container",
                a {
                    id: LOGO_ID,
                    class: "nav-logo",
                    href: "#",
                    aria_label: "{config.brand} logo",
                    onclick: move |event: MouseEvent| event.prevent_default(),
                    span { class: "logo-text", "{config.brand}" }
                    div { class: "logo-shine" }
                }

                // becomes the slide-down panel on mobile
                div {
                    id: NAV_LINKS_ID,
                    class: if state.mobile_menu_open { "nav-links active" } else { "nav-links" },
                    for item in NAV_ITEMS {
                        NavLink {
                            key: "{item.key}",
                            item: item,
                            active: state.active_key == item.key,
                            onselect: select_link,
                        }
                    }

                    div { class: "nav-search-wrapper",
                        NavSearch {
                            query: state.search_query.clone(),
                            placeholder: config.search_placeholder.clone(),
                            oninput: set_query,
                            onsubmit: submit_search,
                        }
                    }
                }

                div { class: "nav-actions",
                    button {
                        id: THEME_TOGGLE_ID,
                        class: "theme-toggle",
                        aria_label: "Toggle theme",
                        title: "Toggle theme",
                        onclick: move |_| toggle_theme.call(()),
                        Icon { glyph: Glyph::Sun, class: "sun-icon" }
                        Icon { glyph: Glyph::Moon, class: "moon-icon" }
                    }

                    button {
                        id: MENU_TOGGLE_ID,
                        class: "mobile-menu",
                        aria_label: "Menu",
                        aria_expanded: "{state.mobile_menu_open}",
                        onclick: move |_| toggle_menu.call(()),
                        if state.mobile_menu_open {
                            Icon { glyph: Glyph::Close }
                        } else {
                            Icon { glyph: Glyph::Menu }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        main { Outlet::<Route> {} }
    }
}
