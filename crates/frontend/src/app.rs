use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use contracts::shared::config::{load_config, DashboardConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("{:#}", e);
        DashboardConfig::default()
    });

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(config);
    provide_context(ctx);
    ctx.init_router_integration();

    view! {
        <AppRoutes />
    }
}
