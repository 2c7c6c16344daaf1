use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.left_open.get();
    let style = move || format!("background-color: {};", ctx.palette().header_sidebar_bg);

    view! {
        <div data-zone="left" class="left" class:hidden=move || !is_open() style=style>
            {children()}
        </div>
    }
}
