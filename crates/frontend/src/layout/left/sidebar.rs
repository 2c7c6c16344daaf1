//! Sidebar navigation: one item per page.

use crate::layout::global_context::use_global_context;
use crate::routes::routes::Route;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <nav class="app-sidebar__content">
            {Route::all().into_iter().map(|route| {
                let is_active = move || ctx.route.get() == route;
                let item_style = move || {
                    let p = ctx.palette();
                    let bg = if is_active() { p.primary_blue } else { "transparent" };
                    format!("background-color: {}; color: {};", bg, p.inverse_text)
                };

                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=is_active
                        style=item_style
                        on:click=move |_| ctx.navigate(route)
                    >
                        {icon(route.icon())}
                        <span class="app-sidebar__label">
                            {move || route.label(ctx.labels())}
                        </span>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
