use std::{
    cell::{Ref, RefCell},
    rc::{Rc, Weak},
};

use tracing::{debug, warn};

use crate::{
    controller::{NavigationController, SearchHandler, SearchOutcome, dispatch_search},
    nav::ClickRegion,
    shine::{PointerSample, ShinePosition},
    storage::PreferenceStore,
    subscription::{EventSource, Subscription, SystemColorScheme},
    theme::ThemeAttribute,
};

// the controller's mounted lifetime
//
// owns every listener attached on behalf of the navbar and releases all of
// them on unmount() or drop.  handlers only hold a weak reference to the
// controller, so one that somehow outlives the session does nothing.
//
// notify is called after any change that should be re-rendered
pub struct NavigationSession<S, A> {
    controller: Rc<RefCell<NavigationController<S, A>>>,
    notify: Rc<dyn Fn()>,
    subscriptions: RefCell<Vec<Subscription>>,
}

impl<S, A> NavigationSession<S, A> {
    pub fn listener_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    pub fn unmount(&self) {
        let subscriptions = std::mem::take(&mut *self.subscriptions.borrow_mut());
        if !subscriptions.is_empty() {
            debug!(count = subscriptions.len(), "releasing navigation listeners");
        }

        for subscription in subscriptions {
            subscription.release();
        }
    }
}

impl<S: PreferenceStore + 'static, A: ThemeAttribute + 'static> NavigationSession<S, A> {
    pub fn new(controller: NavigationController<S, A>, notify: impl Fn() + 'static) -> Self {
        NavigationSession {
            controller: Rc::new(RefCell::new(controller)),
            notify: Rc::new(notify),
            subscriptions: RefCell::new(Vec::new()),
        }
    }

    pub fn controller(&self) -> Ref<'_, NavigationController<S, A>> {
        self.controller.borrow()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut NavigationController<S, A>) -> R) -> R {
        let result = f(&mut self.controller.borrow_mut());
        (self.notify)();
        result
    }

    // the host callback may well update the navbar itself (closing the menu
    // after a search, say), so it runs with no borrow of the controller held
    pub fn submit_search(&self, handler: Option<&SearchHandler>) -> SearchOutcome {
        let query = self.controller.borrow().state().search_query.clone();
        dispatch_search(&query, handler)
    }

    pub fn watch_document_clicks(&self, source: &dyn EventSource<ClickRegion>) {
        let controller = Rc::downgrade(&self.controller);
        let notify = self.notify.clone();

        self.attach(
            "document click",
            source,
            Box::new(move |region: &ClickRegion| {
                if with_controller(&controller, |c| c.handle_document_click(*region)) == Some(true) {
                    notify();
                }
            }),
        );
    }

    pub fn watch_system_scheme(&self, source: &dyn SystemColorScheme) {
        let controller = Rc::downgrade(&self.controller);
        let notify = self.notify.clone();

        self.attach(
            "color scheme",
            source,
            Box::new(move |prefers_dark: &bool| {
                if with_controller(&controller, |c| c.system_scheme_changed(*prefers_dark)) == Some(true) {
                    notify();
                }
            }),
        );
    }

    // the shine position never touches navigation state, it goes straight to the sink
    pub fn watch_logo_pointer(
        &self,
        source: &dyn EventSource<PointerSample>,
        mut sink: impl FnMut(ShinePosition) + 'static,
    ) {
        self.attach(
            "logo pointer",
            source,
            Box::new(move |sample: &PointerSample| sink(ShinePosition::from_pointer(sample))),
        );
    }

    fn attach<E>(&self, what: &str, source: &dyn EventSource<E>, handler: Box<dyn FnMut(&E)>) {
        match source.subscribe(handler) {
            Ok(subscription) => self.subscriptions.borrow_mut().push(subscription),
            Err(err) => warn!("failed to attach {what} listener: {err}"),
        }
    }
}

impl<S, A> Drop for NavigationSession<S, A> {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn with_controller<S, A, R>(
    controller: &Weak<RefCell<NavigationController<S, A>>>,
    f: impl FnOnce(&mut NavigationController<S, A>) -> R,
) -> Option<R> {
    let controller = controller.upgrade()?;

    // listeners run from the event loop, so a held borrow means we were re-entered
    match controller.try_borrow_mut() {
        Ok(mut controller) => Some(f(&mut controller)),
        Err(_) => {
            debug!("navigation controller busy, dropping event");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        config::NavConfig,
        shine::Bounds,
        storage::MemoryStore,
        subscription::{Dispatcher, MemoryColorScheme},
        theme::{MemoryThemeAttribute, Theme},
    };

    fn session(renders: Rc<Cell<u32>>) -> NavigationSession<MemoryStore, MemoryThemeAttribute> {
        let controller = NavigationController::mount(
            NavConfig::default(),
            MemoryStore::new(),
            MemoryThemeAttribute::new(),
            false,
        );
        NavigationSession::new(controller, move || renders.set(renders.get() + 1))
    }

    #[test]
    fn update_notifies() {
        let renders = Rc::new(Cell::new(0));
        let session = session(renders.clone());

        let open = session.update(|c| c.toggle_menu());
        assert!(open);
        assert_eq!(renders.get(), 1);
        assert!(session.controller().state().mobile_menu_open);
    }

    #[test]
    fn search_handler_may_update_the_navbar() {
        let renders = Rc::new(Cell::new(0));
        let session = Rc::new(session(renders.clone()));
        session.update(|c| {
            c.toggle_menu();
            c.set_query("rice");
        });

        let seen = Rc::new(RefCell::new(Vec::new()));
        let handler = {
            let session = session.clone();
            let seen = seen.clone();
            move |query: &str| {
                seen.borrow_mut().push(query.to_owned());
                session.update(|c| c.toggle_menu());
            }
        };

        let outcome = session.submit_search(Some(&handler as &SearchHandler));

        assert_eq!(outcome, SearchOutcome::Dispatched);
        assert_eq!(*seen.borrow(), vec![String::from("rice")]);
        assert!(!session.controller().state().mobile_menu_open);
        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn search_without_handler_is_logged_through_session() {
        let session = session(Rc::new(Cell::new(0)));
        session.update(|c| c.set_query("jasmine"));

        assert_eq!(session.submit_search(None), SearchOutcome::Logged);
    }

    #[test]
    fn outside_click_notifies_only_when_it_closes() {
        let renders = Rc::new(Cell::new(0));
        let session = session(renders.clone());
        let clicks: Dispatcher<ClickRegion> = Dispatcher::new();
        session.watch_document_clicks(&clicks);

        clicks.dispatch(&ClickRegion::Outside);
        assert_eq!(renders.get(), 0);

        session.update(|c| c.toggle_menu());
        clicks.dispatch(&ClickRegion::Outside);
        assert_eq!(renders.get(), 2);
        assert!(!session.controller().state().mobile_menu_open);
    }

    #[test]
    fn system_scheme_updates_theme() {
        let renders = Rc::new(Cell::new(0));
        let session = session(renders.clone());
        let scheme = MemoryColorScheme::new(false);
        session.watch_system_scheme(&scheme);

        scheme.set(true);
        assert_eq!(session.controller().theme(), Theme::Dark);
        assert_eq!(session.controller().attribute().current(), Some(Theme::Dark));
        assert_eq!(session.controller().store().peek("theme"), Some("dark"));
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn pointer_moves_reach_sink_without_render() {
        let renders = Rc::new(Cell::new(0));
        let session = session(renders.clone());
        let moves: Dispatcher<PointerSample> = Dispatcher::new();
        let last = Rc::new(Cell::new(None));
        let sink = last.clone();
        session.watch_logo_pointer(&moves, move |pos| sink.set(Some(pos)));

        moves.dispatch(&PointerSample {
            client_x: 15.0,
            client_y: 9.0,
            bounds: Bounds {
                left: 10.0,
                top: 4.0,
                width: 120.0,
                height: 40.0,
            },
        });

        assert_eq!(last.get(), Some(ShinePosition { x: 5.0, y: 5.0 }));
        assert_eq!(renders.get(), 0);
    }

    #[test]
    fn dropping_session_releases_listeners() {
        let clicks: Dispatcher<ClickRegion> = Dispatcher::new();
        let scheme = MemoryColorScheme::new(false);
        {
            let session = session(Rc::new(Cell::new(0)));
            session.watch_document_clicks(&clicks);
            session.watch_system_scheme(&scheme);
            assert_eq!(session.listener_count(), 2);
            assert_eq!(clicks.listener_count(), 1);
        }

        assert_eq!(clicks.listener_count(), 0);
        assert_eq!(scheme.listener_count(), 0);
        assert_eq!(clicks.dispatch(&ClickRegion::Outside), 0);
    }

    #[test]
    fn unmount_survives_a_panicking_render() {
        let clicks: Dispatcher<ClickRegion> = Dispatcher::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let session = session(Rc::new(Cell::new(0)));
            session.watch_document_clicks(&clicks);
            panic!("render failed");
        }));

        assert!(result.is_err());
        assert_eq!(clicks.listener_count(), 0);
    }
}
