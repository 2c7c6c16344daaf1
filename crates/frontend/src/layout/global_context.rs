use crate::routes::routes::Route;
use crate::shared::theme::apply_theme;
use contracts::shared::config::DashboardConfig;
use contracts::shared::i18n::{Labels, Language};
use contracts::shared::palette::{Palette, ThemeMode};
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Query string carried in the address bar, e.g. `?page=stores`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: Option<String>,
}

/// Shell-wide state: active page, sidebar, theme and language.
///
/// Owned by `App` and handed down through context. Views read it and call
/// its methods; nothing else holds this state.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<Route>,
    pub left_open: RwSignal<bool>,
    pub theme: RwSignal<ThemeMode>,
    pub language: RwSignal<Language>,
    pub config: StoredValue<DashboardConfig>,
}

impl AppGlobalContext {
    pub fn new(config: DashboardConfig) -> Self {
        let theme = config.ui.default_theme;
        apply_theme(theme);
        Self {
            route: RwSignal::new(Route::default()),
            left_open: RwSignal::new(config.ui.sidebar_open),
            theme: RwSignal::new(theme),
            language: RwSignal::new(config.ui.default_language),
            config: StoredValue::new(config),
        }
    }

    /// Reads `?page=` once and keeps it in sync with the active route.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: PageQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(key) = query.page {
            self.navigate(Route::from_key(&key));
        }

        let this = *self;
        Effect::new(move |_| {
            let route = this.route.get();
            let query = PageQuery {
                page: Some(route.key().to_string()),
            };
            let new_url = format!("?{}", serde_qs::to_string(&query).unwrap_or_default());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, route: Route) {
        leptos::logging::log!("navigate: '{}'", route.key());
        self.route.set(route);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        leptos::logging::log!("theme: '{}'", next.as_str());
        self.theme.set(next);
        apply_theme(next);
    }

    pub fn set_language(&self, language: Language) {
        leptos::logging::log!("language: '{}'", language.code());
        self.language.set(language);
    }

    /// Tracked: re-runs the caller when the theme changes.
    pub fn palette(&self) -> Palette {
        self.theme.get().palette()
    }

    /// Tracked: re-runs the caller when the language changes.
    pub fn labels(&self) -> &'static Labels {
        self.language.get().labels()
    }

    pub fn suggestion_hide_delay_ms(&self) -> u32 {
        self.config.with_value(|c| c.stores.suggestion_hide_delay_ms)
    }
}

/// Fetch the shell context provided by `App`.
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
