use crate::layout::global_context::use_global_context;
use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="page">
            <PageHeader
                title=Signal::derive(move || ctx.labels().users.title.to_string())
                color=Signal::derive(move || Some(ctx.palette().text.to_string()))
            />
            <div
                class="card"
                style=move || {
                    let p = ctx.palette();
                    format!("background-color: {}; color: {};", p.surface, p.text)
                }
            >
                <p>{move || ctx.labels().users.description}</p>
            </div>
        </div>
    }
}
