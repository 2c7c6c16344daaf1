use leptos::prelude::*;

/// Store status pill: green when active, red otherwise
#[component]
pub fn StatusBadge(
    #[prop(into)]
    active: Signal<bool>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let status_class = move || {
        if active.get() {
            "badge badge--status badge--status-active"
        } else {
            "badge badge--status badge--status-inactive"
        }
    };

    view! {
        <span class=status_class>
            {children()}
        </span>
    }
}
