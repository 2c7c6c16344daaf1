use super::i18n::Language;
use super::palette::ThemeMode;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub stores: StoresConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default)]
    pub default_theme: ThemeMode,
    #[serde(default)]
    pub default_language: Language,
    #[serde(default = "default_true")]
    pub sidebar_open: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoresConfig {
    /// Delay between focus loss and hiding an autocomplete dropdown
    #[serde(default = "default_hide_delay")]
    pub suggestion_hide_delay_ms: u32,
}

fn default_true() -> bool {
    true
}

fn default_hide_delay() -> u32 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeMode::default(),
            default_language: Language::default(),
            sidebar_open: true,
        }
    }
}

impl Default for StoresConfig {
    fn default() -> Self {
        Self {
            suggestion_hide_delay_ms: default_hide_delay(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[ui]
default_theme = "light"
default_language = "en"
sidebar_open = true

[stores]
suggestion_hide_delay_ms = 100
"#;

/// Parse a TOML configuration; missing keys take their defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    toml::from_str::<DashboardConfig>(contents).context("Invalid dashboard configuration")
}

/// Load the embedded default configuration.
pub fn load_config() -> anyhow::Result<DashboardConfig> {
    parse_config(DEFAULT_CONFIG)
}
