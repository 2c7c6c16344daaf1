//! Color tokens for the light and dark themes.
//!
//! Views receive a [`Palette`] and forward its values into inline styles
//! without inspecting them.

use serde::Deserialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Used for the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ThemeMode::Light => Palette::LIGHT,
            ThemeMode::Dark => Palette::DARK,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub header_sidebar_bg: &'static str,
    pub primary_blue: &'static str,
    pub secondary_blue: &'static str,
    pub surface: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub inverse_text: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        header_sidebar_bg: "#212B36",
        primary_blue: "#00CFFF",
        secondary_blue: "#007BFF",
        surface: "#FFFFFF",
        background: "#F0F2F5",
        text: "#1F2937",
        muted_text: "#6B7280",
        inverse_text: "#FFFFFF",
        success: "#28A745",
        warning: "#FFC107",
        error: "#DC3545",
    };

    pub const DARK: Palette = Palette {
        header_sidebar_bg: "#1A202C",
        primary_blue: "#00CFFF",
        secondary_blue: "#007BFF",
        surface: "#2D3748",
        background: "#1A202C",
        text: "#E2E8F0",
        muted_text: "#A0AEC0",
        inverse_text: "#FFFFFF",
        success: "#48BB78",
        warning: "#ECC94B",
        error: "#FC8181",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_palette_per_mode() {
        assert_eq!(ThemeMode::Dark.palette(), Palette::DARK);
        assert_ne!(Palette::LIGHT.surface, Palette::DARK.surface);
    }
}
