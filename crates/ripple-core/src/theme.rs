//! # Theme tokens
//!
//! Widgets resolve colors from a `Theme` rather than hard-coding them. The
//! host publishes the active theme through a [`ThemeSource`]; widgets
//! subscribe to it and re-render when it changes.
//!
//! ```rust
//! use ripple_core::*;
//!
//! let source = ThemeSource::new(Theme::dark());
//! let light = Theme {
//!     primary: Color::from_hex("#0061A4"),
//!     ..Theme::light()
//! };
//! source.set(light);
//! assert_eq!(source.get().primary, Color::from_hex("#0061A4"));
//! ```

use crate::{Color, Signal};

pub type ThemeSource = Signal<Theme>;

/// Color roles a widget can be tinted with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorRole {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Error,
}

/// The three colors a role contributes: the fill, content drawn on the fill,
/// and the low-emphasis container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleColors {
    pub color: Color,
    pub on_color: Color,
    pub container: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Window background / app root.
    pub background: Color,
    /// Default container surface.
    pub surface: Color,
    /// Foreground on `surface`; disabled controls are tinted with it.
    pub on_surface: Color,

    pub primary: Color,
    pub on_primary: Color,
    pub primary_container: Color,

    pub secondary: Color,
    pub on_secondary: Color,
    pub secondary_container: Color,

    pub tertiary: Color,
    pub on_tertiary: Color,
    pub tertiary_container: Color,

    pub error: Color,
    pub on_error: Color,
    pub error_container: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::from_hex("#121212"),
            surface: Color::from_hex("#1E1E1E"),
            on_surface: Color::from_hex("#E6E1E5"),
            primary: Color::from_hex("#D0BCFF"),
            on_primary: Color::from_hex("#381E72"),
            primary_container: Color::from_hex("#4F378B"),
            secondary: Color::from_hex("#CCC2DC"),
            on_secondary: Color::from_hex("#332D41"),
            secondary_container: Color::from_hex("#4A4458"),
            tertiary: Color::from_hex("#EFB8C8"),
            on_tertiary: Color::from_hex("#492532"),
            tertiary_container: Color::from_hex("#633B48"),
            error: Color::from_hex("#F2B8B5"),
            on_error: Color::from_hex("#601410"),
            error_container: Color::from_hex("#8C1D18"),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::from_hex("#FFFBFE"),
            surface: Color::from_hex("#FFFBFE"),
            on_surface: Color::from_hex("#1C1B1F"),
            primary: Color::from_hex("#6750A4"),
            on_primary: Color::WHITE,
            primary_container: Color::from_hex("#EADDFF"),
            secondary: Color::from_hex("#625B71"),
            on_secondary: Color::WHITE,
            secondary_container: Color::from_hex("#E8DEF8"),
            tertiary: Color::from_hex("#7D5260"),
            on_tertiary: Color::WHITE,
            tertiary_container: Color::from_hex("#FFD8E4"),
            error: Color::from_hex("#B3261E"),
            on_error: Color::WHITE,
            error_container: Color::from_hex("#F9DEDC"),
        }
    }

    pub fn role(&self, role: ColorRole) -> RoleColors {
        match role {
            ColorRole::Primary => RoleColors {
                color: self.primary,
                on_color: self.on_primary,
                container: self.secondary_container,
            },
            ColorRole::Secondary => RoleColors {
                color: self.secondary,
                on_color: self.on_secondary,
                container: self.secondary_container,
            },
            ColorRole::Tertiary => RoleColors {
                color: self.tertiary,
                on_color: self.on_tertiary,
                container: self.tertiary_container,
            },
            ColorRole::Error => RoleColors {
                color: self.error,
                on_color: self.on_error,
                container: self.error_container,
            },
        }
    }
}
