use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use anyhow::Result;

// scoped listener registration
//
// every listener the navbar attaches (document clicks, logo pointer moves,
// system color scheme changes) hands back one of these.  the teardown runs
// exactly once, either through release() or when the guard is dropped, so a
// panicking or early-returning unmount still detaches everything
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Subscription {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn release(mut self) {
        self.run_teardown();
    }

    fn run_teardown(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_teardown();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}

/// Something that can deliver events of type `E` to registered handlers.
pub trait EventSource<E> {
    fn subscribe(&self, handler: Box<dyn FnMut(&E)>) -> Result<Subscription>;
}

/// The OS/browser "prefers dark color scheme" signal.
///
/// Change notifications carry the new value.
pub trait SystemColorScheme: EventSource<bool> {
    fn prefers_dark(&self) -> bool;
}

type Handler<E> = Rc<RefCell<Box<dyn FnMut(&E)>>>;

struct Registry<E> {
    next_id: u64,
    handlers: Vec<(u64, Handler<E>)>,
}

// in-memory event source
//
// handlers are snapshotted before a dispatch so they can subscribe or release
// while running; a handler released mid-dispatch is skipped
pub struct Dispatcher<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> Dispatcher<E> {
    pub fn new() -> Self {
        Dispatcher {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    // returns how many handlers saw the event
    pub fn dispatch(&self, event: &E) -> usize {
        let snapshot = self.registry.borrow().handlers.clone();

        let mut delivered = 0;
        for (id, handler) in snapshot {
            if !self.is_live(id) {
                continue;
            }

            // a handler that re-dispatches into itself would otherwise panic here
            if let Ok(mut handler) = handler.try_borrow_mut() {
                (*handler)(event);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }

    fn is_live(&self, id: u64) -> bool {
        self.registry
            .borrow()
            .handlers
            .iter()
            .any(|(live, _)| *live == id)
    }
}

impl<E: 'static> Default for Dispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Dispatcher<E> {
    fn clone(&self) -> Self {
        Dispatcher {
            registry: self.registry.clone(),
        }
    }
}

impl<E: 'static> EventSource<E> for Dispatcher<E> {
    fn subscribe(&self, handler: Box<dyn FnMut(&E)>) -> Result<Subscription> {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.push((id, Rc::new(RefCell::new(handler))));
            id
        };

        let registry = Rc::downgrade(&self.registry);
        Ok(Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().handlers.retain(|(live, _)| *live != id);
            }
        }))
    }
}

// in-memory system color scheme, notifies only on an actual change
pub struct MemoryColorScheme {
    dark: Cell<bool>,
    changes: Dispatcher<bool>,
}

impl MemoryColorScheme {
    pub fn new(prefers_dark: bool) -> Self {
        MemoryColorScheme {
            dark: Cell::new(prefers_dark),
            changes: Dispatcher::new(),
        }
    }

    pub fn set(&self, prefers_dark: bool) {
        if self.dark.replace(prefers_dark) != prefers_dark {
            self.changes.dispatch(&prefers_dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.changes.listener_count()
    }
}

impl EventSource<bool> for MemoryColorScheme {
    fn subscribe(&self, handler: Box<dyn FnMut(&bool)>) -> Result<Subscription> {
        self.changes.subscribe(handler)
    }
}

impl SystemColorScheme for MemoryColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }
}
