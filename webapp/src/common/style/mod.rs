use constcat::concat;

mod navbar;
mod pages;
mod variables;

pub use navbar::NAVBAR_STYLES;
pub use pages::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary);
  text-decoration: none;
}

main {
  padding-top: calc(var(--header-height) + var(--space-4));
}
"#,
    CSS_VARIABLES,
    NAVBAR_STYLES,
    PAGE_STYLES
);
