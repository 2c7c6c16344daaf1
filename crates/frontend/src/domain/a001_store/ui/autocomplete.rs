use crate::layout::global_context::use_global_context;
use contracts::shared::store_filter::{filter_suggestions, FilterField, StoreFilterState};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Text input with a dropdown of candidates narrowed by what is typed.
///
/// Enter commits the typed text, a press on a dropdown entry commits that
/// entry. Losing focus hides the dropdown after a short delay so the press
/// still lands on the entry.
#[component]
pub fn AutocompleteField(
    field: FilterField,
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    placeholder: Signal<String>,
    /// Values offered in the dropdown
    #[prop(into)]
    candidates: Signal<Vec<String>>,
    filter: RwSignal<StoreFilterState>,
) -> impl IntoView {
    let ctx = use_global_context();
    let input_id = format!("filter-{}", field.as_str());

    let input_text = Memo::new(move |_| filter.with(|f| f.input_text(field).to_string()));
    let visible = Memo::new(move |_| filter.with(|f| f.suggestions_visible(field)));
    let suggestions =
        Memo::new(move |_| candidates.with(|c| filter_suggestions(c, &input_text.get())));

    let on_blur = move |_| {
        let Some(ticket) = filter.try_update(|f| f.focus_lost(field)) else {
            return;
        };
        let delay = ctx.suggestion_hide_delay_ms();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            // The page may be gone by the time the timer fires.
            let _ = filter.try_update(|f| f.hide_timer_elapsed(field, ticket));
        });
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            filter.update(|f| {
                f.commit_input(field);
            });
        }
    };

    let list_style = move || {
        let p = ctx.palette();
        format!(
            "background-color: {}; border: 1px solid {};",
            p.surface, p.muted_text
        )
    };

    view! {
        <div class="form__group autocomplete">
            <label class="form__label" for=input_id.clone()>{move || label.get()}</label>
            <input
                id=input_id
                type="text"
                class="form__input"
                autocomplete="off"
                placeholder=move || placeholder.get()
                prop:value=move || input_text.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    filter.update(|f| f.set_input_text(field, text));
                }
                on:focus=move |_| filter.update(|f| f.focus_gained(field))
                on:blur=on_blur
                on:keydown=on_keydown
            />
            <Show when=move || visible.get()>
                <ul class="autocomplete__list" style=list_style>
                    {move || {
                        let list = suggestions.get();
                        if list.is_no_match() {
                            view! {
                                <li
                                    class="autocomplete__empty"
                                    style=move || format!("color: {};", ctx.palette().muted_text)
                                >
                                    {move || ctx.labels().stores.no_suggestions}
                                </li>
                            }
                            .into_any()
                        } else {
                            list.items()
                                .iter()
                                .cloned()
                                .map(|item| {
                                    let value = item.clone();
                                    view! {
                                        <li
                                            class="autocomplete__item"
                                            on:mousedown=move |ev: ev::MouseEvent| {
                                                // keep focus in the input
                                                ev.prevent_default();
                                                filter.update(|f| {
                                                    f.select_suggestion(field, &value);
                                                });
                                            }
                                        >
                                            {item}
                                        </li>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </ul>
            </Show>
        </div>
    }
}
