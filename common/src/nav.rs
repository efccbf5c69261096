use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NavKey {
    #[default]
    Home,
    About,
    Services,
    Contact,
}

impl NavKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// decorative glyphs, the webapp owns the actual svg paths
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    Info,
    Stack,
    Mail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub key: NavKey,
    pub label: &'static str,
    pub icon: NavIcon,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        key: NavKey::Home,
        label: "Home",
        icon: NavIcon::Home,
    },
    NavItem {
        key: NavKey::About,
        label: "About",
        icon: NavIcon::Info,
    },
    NavItem {
        key: NavKey::Services,
        label: "Services",
        icon: NavIcon::Stack,
    },
    NavItem {
        key: NavKey::Contact,
        label: "Contact",
        icon: NavIcon::Mail,
    },
];

// where a document-level click landed, relative to the navbar
//
// the search input sits inside the nav links panel, so clicks on it classify
// as NavLinks and never dismiss the mobile menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickRegion {
    NavLinks,
    MenuToggle,
    ThemeToggle,
    Outside,
}

// element ids shared between the navbar markup and click classification
pub const NAV_LINKS_ID: &str = "nav-links";
pub const MENU_TOGGLE_ID: &str = "mobile-menu-toggle";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const LOGO_ID: &str = "nav-logo";

const CLICK_REGIONS: [(&str, ClickRegion); 3] = [
    (NAV_LINKS_ID, ClickRegion::NavLinks),
    (MENU_TOGGLE_ID, ClickRegion::MenuToggle),
    (THEME_TOGGLE_ID, ClickRegion::ThemeToggle),
];

impl ClickRegion {
    pub fn dismisses_menu(self) -> bool {
        matches!(self, Self::Outside)
    }

    // `contains` answers whether the element with the given id contains the
    // click target; a missing element simply answers false
    pub fn classify(contains: impl Fn(&str) -> bool) -> Self {
        CLICK_REGIONS
            .iter()
            .find(|(id, _)| contains(id))
            .map_or(Self::Outside, |(_, region)| *region)
    }
}
