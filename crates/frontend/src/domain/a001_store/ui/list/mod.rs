mod state;

use crate::domain::a001_store::ui::autocomplete::AutocompleteField;
use crate::domain::a001_store::ui::details::StoreDetailsModal;
use crate::layout::global_context::use_global_context;
use crate::shared::components::ui::{Checkbox, Select, StatusBadge};
use crate::shared::components::{FilterPanel, FilterTag, PageHeader};
use crate::shared::icons::icon;
use crate::shared::notify::notify;
use contracts::domain::a001_store::{sample_stores, Store};
use contracts::shared::store_filter::{
    filtered_stores, hour_options, is_hour_choice, CatalogIndex, FilterField,
    StoreFilterState,
};
use leptos::children::ToChildren;
use leptos::prelude::*;
use state::{create_state, StoresPageState};
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance};

#[component]
fn ActionCard(
    icon_name: &'static str,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] description: Signal<String>,
    /// Message shown when the card is clicked
    #[prop(into)]
    action: Signal<String>,
) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div
            class="action-card"
            style=move || {
                let p = ctx.palette();
                format!("background-color: {}; color: {};", p.surface, p.text)
            }
            on:click=move |_| notify(&action.get_untracked())
        >
            <span
                class="action-card__icon"
                style=move || format!("color: {};", ctx.palette().primary_blue)
            >
                {icon(icon_name)}
            </span>
            <h2 class="action-card__title">{move || title.get()}</h2>
            <p
                class="action-card__description"
                style=move || format!("color: {};", ctx.palette().muted_text)
            >
                {move || description.get()}
            </p>
        </div>
    }
}

#[component]
fn HourSelect(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    filter: RwSignal<StoreFilterState>,
) -> impl IntoView {
    let ctx = use_global_context();
    let options = Signal::derive(move || {
        let mut opts = vec![(String::new(), ctx.labels().stores.select_hour.to_string())];
        opts.extend(hour_options().into_iter().map(|h| (h.clone(), h)));
        opts
    });

    let guarded = Callback::new(move |v: String| {
        if is_hour_choice(&v) {
            on_change.run(v);
        } else {
            log::warn!("ignoring hour value '{}'", v);
        }
    });

    view! {
        <Select
            label=Signal::derive(move || Some(label.get()))
            value=value
            on_change=guarded
            options=options
            disabled=Signal::derive(move || Some(filter.with(|f| f.hour_inputs_disabled())))
        />
    }
}

#[component]
fn StoreFilters(
    state: StoresPageState,
    #[prop(into)] country_candidates: Signal<Vec<String>>,
    #[prop(into)] city_candidates: Signal<Vec<String>>,
) -> impl IntoView {
    let ctx = use_global_context();
    let filter = state.filter;
    let labels = move || &ctx.labels().stores;

    let active_count = Signal::derive(move || filter.with(|f| f.active_filter_count()));

    let header_actions: ChildrenFn = ToChildren::to_children(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| state.reset_filters()
            >
                {icon("refresh")}
                {move || labels().reset_filters}
            </Button>
        }
    });

    let filter_content: ChildrenFn = ToChildren::to_children(move || {
        view! {
            <div class="filter-panel__grid">
                <AutocompleteField
                    field=FilterField::Country
                    label=Signal::derive(move || labels().country.to_string())
                    placeholder=Signal::derive(move || labels().country_placeholder.to_string())
                    candidates=country_candidates
                    filter=filter
                />
                <AutocompleteField
                    field=FilterField::City
                    label=Signal::derive(move || labels().city.to_string())
                    placeholder=Signal::derive(move || labels().city_placeholder.to_string())
                    candidates=city_candidates
                    filter=filter
                />
                <HourSelect
                    label=Signal::derive(move || labels().opening_hour.to_string())
                    value=Signal::derive(move || filter.with(|f| f.opening_hour_value().to_string()))
                    on_change=Callback::new(move |v: String| filter.update(|f| f.set_opening_hour(v)))
                    filter=filter
                />
                <HourSelect
                    label=Signal::derive(move || labels().closing_hour.to_string())
                    value=Signal::derive(move || filter.with(|f| f.closing_hour_value().to_string()))
                    on_change=Callback::new(move |v: String| filter.update(|f| f.set_closing_hour(v)))
                    filter=filter
                />
                <Checkbox
                    id="filter-all-day-open"
                    label=Signal::derive(move || labels().all_day_open.to_string())
                    checked=Signal::derive(move || filter.with(|f| f.is_all_day_open()))
                    on_change=Callback::new(move |flag: bool| filter.update(|f| f.set_all_day_open(flag)))
                />
            </div>
        }
    });

    let filter_tags: ChildrenFn = ToChildren::to_children(move || {
        let country_style = move || {
            let c = ctx.palette().primary_blue;
            format!("background-color: {}20; color: {};", c, c)
        };
        let city_style = move || {
            let c = ctx.palette().success;
            format!("background-color: {}20; color: {};", c, c)
        };

        view! {
            <For
                each=move || filter.with(|f| f.selected_countries().to_vec())
                key=|country| country.clone()
                children=move |country| {
                    let value = country.clone();
                    view! {
                        <FilterTag
                            label=country
                            style=Signal::derive(move || Some(country_style()))
                            on_remove=Callback::new(move |_| filter.update(|f| {
                                f.remove_country_filter(&value);
                            }))
                        />
                    }
                }
            />
            <For
                each=move || filter.with(|f| f.selected_cities().to_vec())
                key=|city| city.clone()
                children=move |city| {
                    let value = city.clone();
                    view! {
                        <FilterTag
                            label=city
                            style=Signal::derive(move || Some(city_style()))
                            on_remove=Callback::new(move |_| filter.update(|f| {
                                f.remove_city_filter(&value);
                            }))
                        />
                    }
                }
            />
        }
    });

    view! {
        <FilterPanel
            title=Signal::derive(move || labels().filters_title.to_string())
            is_expanded=state.filters_expanded
            active_filters_count=active_count
            header_actions=header_actions
            filter_content=filter_content
            filter_tags=filter_tags
        />
    }
}

#[component]
fn StoresTable(#[prop(into)] stores: Signal<Vec<Store>>, state: StoresPageState) -> impl IntoView {
    let ctx = use_global_context();
    let labels = move || &ctx.labels().stores;
    let head_style = move || {
        let p = ctx.palette();
        format!("background-color: {}; color: {};", p.background, p.muted_text)
    };

    view! {
        <div class="table-wrapper">
            <table class="table">
                <thead style=head_style>
                    <tr>
                        <th>{move || labels().name_header}</th>
                        <th>{move || labels().country_header}</th>
                        <th>{move || labels().city_header}</th>
                        <th>{move || labels().branch_header}</th>
                        <th>{move || labels().status_header}</th>
                        <th>{move || labels().working_hours_header}</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || stores.with(|s| !s.is_empty())
                        fallback=move || view! {
                            <tr>
                                <td
                                    colspan="6"
                                    class="table__empty"
                                    style=move || format!("color: {};", ctx.palette().muted_text)
                                >
                                    {move || labels().no_stores_found}
                                </td>
                            </tr>
                        }
                    >
                        <For
                            each=move || stores.get()
                            key=|store| store.id
                            children=move |store| {
                                let id = store.id;
                                let active = store.status.is_active();
                                view! {
                                    <tr class="table__row--clickable" on:click=move |_| state.open_details(id)>
                                        <td class="table__cell--strong">{store.name.clone()}</td>
                                        <td>{store.country.clone()}</td>
                                        <td>{store.city.clone()}</td>
                                        <td>{store.branch_display().to_string()}</td>
                                        <td>
                                            <StatusBadge active=Signal::derive(move || active)>
                                                {store.status.as_str()}
                                            </StatusBadge>
                                        </td>
                                        <td>{store.working_hours.clone()}</td>
                                    </tr>
                                }
                            }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

/// Stores & Branches page: action cards, filters and the store table.
#[component]
pub fn StoresPage() -> impl IntoView {
    let ctx = use_global_context();
    let labels = move || &ctx.labels().stores;
    let state = create_state();
    let filter = state.filter;

    let (catalog, catalog_error) = match sample_stores() {
        Ok(stores) => {
            log::info!("store catalog: {} stores", stores.len());
            (CatalogIndex::new(stores), None)
        }
        Err(e) => {
            log::error!("store catalog: {:#}", e);
            (CatalogIndex::default(), Some(format!("{:#}", e)))
        }
    };
    let catalog = StoredValue::new(catalog);

    let selected_countries = Memo::new(move |_| filter.with(|f| f.selected_countries().to_vec()));
    let country_candidates =
        Signal::derive(move || catalog.with_value(|c| c.unique_countries().to_vec()));
    // Recomputed only when the country selection changes, not on every keystroke.
    let city_candidates = Memo::new(move |_| {
        selected_countries.with(|selected| catalog.with_value(|c| c.unique_cities(selected)))
    });

    let visible_stores = Memo::new(move |_| {
        filter.with(|f| {
            catalog.with_value(|c| {
                filtered_stores(c.stores(), f)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<Store>>()
            })
        })
    });
    let visible_count = move || visible_stores.with(|s| s.len());

    let selected_store = Memo::new(move |_| {
        state.selected_store.get().and_then(|id| {
            catalog.with_value(|c| c.stores().iter().find(|s| s.id == id).cloned())
        })
    });

    let section_style = move || {
        let p = ctx.palette();
        format!("background-color: {}; color: {};", p.surface, p.text)
    };

    view! {
        <div class="page">
            <PageHeader
                title=Signal::derive(move || labels().title.to_string())
                color=Signal::derive(move || Some(ctx.palette().text.to_string()))
            >
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    <span>{move || visible_count().to_string()}</span>
                </Badge>
            </PageHeader>

            {catalog_error.map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">
                        {move || labels().catalog_error}" "{e}
                    </span>
                </div>
            })}

            <div class="action-cards">
                <ActionCard
                    icon_name="plus-circle"
                    title=Signal::derive(move || labels().create_store_title.to_string())
                    description=Signal::derive(move || labels().create_store_desc.to_string())
                    action=Signal::derive(move || labels().create_store_action.to_string())
                />
                <ActionCard
                    icon_name="edit"
                    title=Signal::derive(move || labels().edit_store_title.to_string())
                    description=Signal::derive(move || labels().edit_store_desc.to_string())
                    action=Signal::derive(move || labels().edit_store_action.to_string())
                />
                <ActionCard
                    icon_name="trash"
                    title=Signal::derive(move || labels().delete_store_title.to_string())
                    description=Signal::derive(move || labels().delete_store_desc.to_string())
                    action=Signal::derive(move || labels().delete_store_action.to_string())
                />
                <ActionCard
                    icon_name="list"
                    title=Signal::derive(move || labels().view_logs_title.to_string())
                    description=Signal::derive(move || labels().view_logs_desc.to_string())
                    action=Signal::derive(move || labels().view_logs_action.to_string())
                />
            </div>

            <section class="card" style=section_style>
                <h2 class="card__title">{move || labels().store_list_title}</h2>
                <StoreFilters
                    state=state
                    country_candidates=country_candidates
                    city_candidates=Signal::from(city_candidates)
                />
                <StoresTable stores=Signal::from(visible_stores) state=state/>
            </section>

            {move || selected_store.get().map(|store| view! {
                <StoreDetailsModal
                    store=store
                    on_close=Callback::new(move |_| state.close_details())
                />
            })}
        </div>
    }
}
