//! Theme switching.
//!
//! The active [`ThemeMode`] lives in `AppGlobalContext`; this module only
//! mirrors it onto the document so stylesheets can react to it.

use contracts::shared::palette::ThemeMode;
use web_sys::window;

/// Set `data-theme` on `<body>` for CSS selectors.
pub fn apply_theme(theme: ThemeMode) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}
