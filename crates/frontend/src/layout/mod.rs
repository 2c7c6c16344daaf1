pub mod center;
pub mod footer;
pub mod global_context;
pub mod header;
pub mod left;

use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |          (Center)            |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_global_context();
    let body_style = move || {
        let p = ctx.palette();
        format!("background-color: {}; color: {};", p.background, p.text)
    };

    view! {
        <div class="app-layout" style=body_style>
            <header::Header />

            <div class="app-body">
                // Left sidebar - uses ctx.left_open for visibility
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    {center()}
                </div>
            </div>

            <footer::Footer />
        </div>
    }
}
