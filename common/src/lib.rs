pub mod config;
pub mod controller;
pub mod nav;
pub mod session;
pub mod shine;
pub mod storage;
pub mod subscription;
pub mod theme;

pub use config::NavConfig;
pub use controller::{NavigationController, NavigationState, SearchHandler, SearchOutcome};
pub use nav::{
    ClickRegion, LOGO_ID, MENU_TOGGLE_ID, NAV_ITEMS, NAV_LINKS_ID, NavIcon, NavItem, NavKey,
    THEME_TOGGLE_ID,
};
pub use session::NavigationSession;
pub use shine::{Bounds, PointerSample, ShinePosition};
pub use storage::{MemoryStore, PreferenceStore};
pub use subscription::{Dispatcher, EventSource, MemoryColorScheme, Subscription, SystemColorScheme};
pub use theme::{MemoryThemeAttribute, Theme, ThemeAttribute, ThemeSource};
