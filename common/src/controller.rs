use tracing::{Level, debug, info, instrument, warn};

use crate::{
    config::NavConfig,
    nav::{ClickRegion, NavKey},
    storage::PreferenceStore,
    theme::{Theme, ThemeAttribute, ThemeSource},
};

/// Host-supplied search callback, called with the submitted query.
pub type SearchHandler = dyn Fn(&str);

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    pub active_key: NavKey,
    pub mobile_menu_open: bool,
    pub search_query: String,
    pub theme: Theme,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Dispatched,
    Logged,
}

// navbar interaction state
//
// the theme has two external projections, the document attribute and the
// persisted preference.  both are written only from apply_theme(), so after
// any theme change the in-memory value, the attribute and the store agree
// (unless the store is unavailable, in which case only the store is stale)
pub struct NavigationController<S, A> {
    state: NavigationState,
    theme_source: ThemeSource,
    config: NavConfig,
    store: S,
    attribute: A,
}

impl<S: PreferenceStore, A: ThemeAttribute> NavigationController<S, A> {
    // resolve the initial theme and project it
    //
    // a stored preference always wins over the system signal.  the resolved
    // theme is persisted even when it was only derived, so the next load is stable
    #[instrument(level=Level::DEBUG, skip(config, store, attribute))]
    pub fn mount(config: NavConfig, store: S, attribute: A, system_prefers_dark: bool) -> Self {
        let (theme, theme_source) = match stored_theme(&store, &config.theme_key) {
            Some(theme) => (theme, ThemeSource::Stored),
            None => (Theme::from_prefers_dark(system_prefers_dark), ThemeSource::System),
        };

        debug!(%theme, ?theme_source, "mounting navigation");

        let mut controller = NavigationController {
            state: NavigationState {
                active_key: NavKey::default(),
                mobile_menu_open: false,
                search_query: String::new(),
                theme,
            },
            theme_source,
            config,
            store,
            attribute,
        };

        controller.apply_theme(theme);
        controller
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn theme_source(&self) -> ThemeSource {
        self.theme_source
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn attribute(&self) -> &A {
        &self.attribute
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.theme.toggled();
        self.theme_source = ThemeSource::Toggled;
        self.apply_theme(theme);
        theme
    }

    // returns true if the theme changed
    pub fn system_scheme_changed(&mut self, prefers_dark: bool) -> bool {
        if self.theme_source != ThemeSource::System {
            debug!(prefers_dark, theme_source = ?self.theme_source, "ignoring system scheme change");
            return false;
        }

        let theme = Theme::from_prefers_dark(prefers_dark);
        if theme == self.state.theme {
            return false;
        }

        self.apply_theme(theme);
        true
    }

    pub fn select_link(&mut self, key: NavKey, viewport_width: f64) {
        self.state.active_key = key;

        if self.config.is_mobile(viewport_width) && self.state.mobile_menu_open {
            debug!(%key, viewport_width, "closing mobile menu after link selection");
            self.state.mobile_menu_open = false;
        }
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
        debug!(open = self.state.mobile_menu_open, "mobile menu toggled");
        self.state.mobile_menu_open
    }

    // returns true if the click closed the menu
    pub fn handle_document_click(&mut self, region: ClickRegion) -> bool {
        if !self.state.mobile_menu_open || !region.dismisses_menu() {
            return false;
        }

        debug!("closing mobile menu on outside click");
        self.state.mobile_menu_open = false;
        true
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
    }

    pub fn submit_search(&self, handler: Option<&SearchHandler>) -> SearchOutcome {
        dispatch_search(&self.state.search_query, handler)
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.state.theme = theme;

        if let Err(err) = self.attribute.set_theme(theme) {
            warn!(%theme, "failed to set theme attribute: {err}");
        }

        // persistence failures only cost us the next load, the session keeps the theme
        if let Err(err) = self.store.set(&self.config.theme_key, theme.as_str()) {
            warn!(%theme, "failed to persist theme: {err}");
        }
    }
}

// hands a query to the host callback, or logs it when there is none
pub fn dispatch_search(query: &str, handler: Option<&SearchHandler>) -> SearchOutcome {
    match handler {
        Some(handler) => {
            handler(query);
            SearchOutcome::Dispatched
        }
        None => {
            info!(query, "search submitted without a handler");
            SearchOutcome::Logged
        }
    }
}

fn stored_theme<S: PreferenceStore>(store: &S, key: &str) -> Option<Theme> {
    match store.get(key) {
        Ok(Some(value)) => match value.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                warn!("ignoring stored theme: {err}");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!("failed to read stored theme: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{storage::MemoryStore, theme::MemoryThemeAttribute};

    type TestController = NavigationController<MemoryStore, MemoryThemeAttribute>;

    fn mount(store: MemoryStore, prefers_dark: bool) -> TestController {
        NavigationController::mount(
            NavConfig::default(),
            store,
            MemoryThemeAttribute::new(),
            prefers_dark,
        )
    }

    #[test]
    fn defaults_after_mount() {
        let controller = mount(MemoryStore::new(), false);
        let state = controller.state();

        assert_eq!(state.active_key, NavKey::Home);
        assert!(!state.mobile_menu_open);
        assert!(state.search_query.is_empty());
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(controller.theme_source(), ThemeSource::System);
    }

    #[test]
    fn derived_theme_is_persisted() {
        let controller = mount(MemoryStore::new(), true);

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.store().peek("theme"), Some("dark"));
        assert_eq!(controller.attribute().current(), Some(Theme::Dark));
    }

    #[test]
    fn garbage_in_store_falls_back_to_system() {
        let controller = mount(MemoryStore::with_value("theme", "sepia"), true);

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.theme_source(), ThemeSource::System);
        assert_eq!(controller.store().peek("theme"), Some("dark"));
    }

    #[test]
    fn custom_theme_key() {
        let config = NavConfig {
            theme_key: String::from("ricenow_theme"),
            ..NavConfig::default()
        };
        let store = MemoryStore::with_value("ricenow_theme", "dark");
        let mut controller =
            NavigationController::mount(config, store, MemoryThemeAttribute::new(), false);

        assert_eq!(controller.theme(), Theme::Dark);
        controller.toggle_theme();
        assert_eq!(controller.store().peek("ricenow_theme"), Some("light"));
        assert_eq!(controller.store().peek("theme"), None);
    }

    #[test]
    fn system_changes_follow_until_toggled() {
        let mut controller = mount(MemoryStore::new(), false);

        assert!(controller.system_scheme_changed(true));
        assert_eq!(controller.theme(), Theme::Dark);
        assert!(!controller.system_scheme_changed(true));

        controller.toggle_theme();
        assert_eq!(controller.theme_source(), ThemeSource::Toggled);
        assert!(!controller.system_scheme_changed(true));
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn stored_choice_ignores_system_changes() {
        let mut controller = mount(MemoryStore::with_value("theme", "light"), false);

        assert!(!controller.system_scheme_changed(true));
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.attribute().writes(), 1);
    }

    #[test]
    fn unavailable_store_still_applies_theme() {
        let mut controller = mount(MemoryStore::unavailable(), true);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.attribute().current(), Some(Theme::Dark));

        controller.toggle_theme();
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.attribute().current(), Some(Theme::Light));
        assert_eq!(controller.store().peek("theme"), None);
    }

    #[test]
    fn closed_menu_ignores_document_clicks() {
        let mut controller = mount(MemoryStore::new(), false);

        assert!(!controller.handle_document_click(ClickRegion::Outside));
        assert!(!controller.state().mobile_menu_open);
    }

    #[test]
    fn theme_toggle_click_keeps_menu_open() {
        let mut controller = mount(MemoryStore::new(), false);
        controller.toggle_menu();

        assert!(!controller.handle_document_click(ClickRegion::ThemeToggle));
        controller.toggle_theme();
        assert!(controller.state().mobile_menu_open);
    }

    #[test]
    fn selecting_with_closed_menu_on_mobile_keeps_it_closed() {
        let mut controller = mount(MemoryStore::new(), false);
        controller.select_link(NavKey::Services, 320.0);

        assert_eq!(controller.state().active_key, NavKey::Services);
        assert!(!controller.state().mobile_menu_open);
    }

    #[test]
    fn search_without_handler_is_logged() {
        let mut controller = mount(MemoryStore::new(), false);
        controller.set_query("jasmine");

        assert_eq!(controller.submit_search(None), SearchOutcome::Logged);
        assert_eq!(controller.state().search_query, "jasmine");
    }

    #[test]
    fn empty_query_is_still_dispatched() {
        let controller = mount(MemoryStore::new(), false);
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let handler = move |query: &str| sink.borrow_mut().push(query.to_owned());

        assert_eq!(controller.submit_search(Some(&handler as &SearchHandler)), SearchOutcome::Dispatched);
        assert_eq!(*calls.borrow(), vec![String::new()]);
    }
}
