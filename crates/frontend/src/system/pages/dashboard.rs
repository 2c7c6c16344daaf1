use crate::layout::global_context::use_global_context;
use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_global_context();
    let labels = move || &ctx.labels().dashboard;

    let card_style = move || {
        let p = ctx.palette();
        format!("background-color: {}; color: {};", p.surface, p.text)
    };
    let note_style = move || {
        let p = ctx.palette();
        format!("background-color: {}; color: {};", p.primary_blue, p.inverse_text)
    };

    view! {
        <div class="page">
            <PageHeader
                title=Signal::derive(move || labels().title.to_string())
                color=Signal::derive(move || Some(ctx.palette().text.to_string()))
            />
            <div class="card" style=card_style>
                <p class="card__lead">{move || labels().welcome_text}</p>
                <p>{move || labels().instruction_text}</p>
                <div class="card__note" style=note_style>
                    <p>{move || labels().note}</p>
                </div>
            </div>
        </div>
    }
}
