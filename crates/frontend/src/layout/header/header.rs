use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::shared::i18n::Language;
use contracts::shared::palette::ThemeMode;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();

    let header_style = move || {
        let p = ctx.palette();
        format!("background-color: {}; color: {};", p.header_sidebar_bg, p.inverse_text)
    };

    let on_language_change = move |ev: leptos::ev::Event| {
        match Language::from_code(&event_target_value(&ev)) {
            Ok(language) => ctx.set_language(language),
            Err(e) => log::warn!("{}", e),
        }
    };

    view! {
        <header data-zone="header" class="header" style=header_style>
            <div class="header__content">
                <button
                    class="button button--ghost"
                    aria-label=move || ctx.labels().menu.toggle_sidebar
                    on:click=move |_| ctx.toggle_left()
                >
                    {move || if ctx.left_open.get() { icon("x") } else { icon("menu") }}
                </button>
                <span class="header__title">{move || ctx.labels().app_title}</span>
            </div>
            <div class="header__actions">
                <select
                    class="header__language"
                    aria-label=move || ctx.labels().menu.language
                    on:change=on_language_change
                >
                    {Language::all().into_iter().map(|language| {
                        view! {
                            <option
                                value=language.code()
                                selected=move || ctx.language.get() == language
                                title=language.display_name()
                            >
                                {language.short_name()}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <button
                    class="button button--ghost"
                    aria-label=move || ctx.labels().menu.toggle_theme
                    on:click=move |_| ctx.toggle_theme()
                >
                    {move || match ctx.theme.get() {
                        ThemeMode::Light => icon("moon"),
                        ThemeMode::Dark => icon("sun"),
                    }}
                </button>
            </div>
        </header>
    }
}
