use std::{fmt, str::FromStr};

use anyhow::Result;

// global light/dark mode
//
// the persisted representation is the lowercase name, which is also what gets
// written into the document's data-theme attribute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(anyhow::Error::msg(format!("unknown theme {other:?}"))),
        }
    }
}

// where the current theme came from
//
// only a theme derived from the system signal follows later changes to that
// signal; anything read back from storage or toggled by the user sticks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    System,
    Toggled,
}

/// Writes the theme into the global document attribute.
pub trait ThemeAttribute {
    fn set_theme(&mut self, theme: Theme) -> Result<()>;
}

// in-memory document attribute, remembers the last value written
#[derive(Clone, Debug, Default)]
pub struct MemoryThemeAttribute {
    current: Option<Theme>,
    writes: usize,
}

impl MemoryThemeAttribute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ThemeAttribute for MemoryThemeAttribute {
    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.current = Some(theme);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn parses_only_known_names() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("Dark".parse::<Theme>().is_err());
        assert!("auto".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn system_signal_maps_to_theme() {
        assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
        assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
    }

    #[test]
    fn display_matches_persisted_form() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.to_string(), Theme::Light.as_str());
    }
}
