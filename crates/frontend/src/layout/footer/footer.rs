use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_global_context();
    let style = move || {
        let p = ctx.palette();
        format!("background-color: {}; color: {};", p.header_sidebar_bg, p.inverse_text)
    };

    view! {
        <footer data-zone="footer" class="status-bar" style=style>
            <span>{move || ctx.labels().footer}</span>
        </footer>
    }
}
