use leptos::prelude::*;

/// PageHeader component - title row shared by every page
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: Signal<String>,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Title color
    #[prop(optional, into)]
    color: MaybeProp<String>,

    /// Actions shown on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let title_style = move || {
        color
            .get()
            .map(|c| format!("color: {};", c))
            .unwrap_or_default()
    };

    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title" style=title_style>{move || title.get()}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
