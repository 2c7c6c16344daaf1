use crate::layout::global_context::use_global_context;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notify::notify;
use contracts::domain::a001_store::Store;
use contracts::shared::format::format_datetime;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Read-only card with every field of one store.
#[component]
pub fn StoreDetailsModal(store: Store, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_global_context();
    let labels = move || &ctx.labels().stores;

    let title = {
        let name = store.name.clone();
        Signal::derive(move || format!("{}: {}", labels().details_title, name))
    };
    let surface_style = move || {
        let p = ctx.palette();
        format!("background-color: {}; color: {};", p.surface, p.text)
    };

    let token = store.server_token.clone();
    let copy_token = move |_| {
        let text = token.clone();
        let token = token.clone();
        copy_to_clipboard_with_callback(&text, move |ok| {
            let common = &ctx.language.get_untracked().labels().common;
            if ok {
                notify(&format!("{}: {}", common.copied, token));
            } else {
                notify(common.copy_failed);
            }
        });
    };

    let address = if store.address.is_empty() {
        "-".to_string()
    } else {
        store.address.clone()
    };

    view! {
        <Modal title=title on_close=on_close style=Signal::derive(move || Some(surface_style()))>
            <div class="details-list">
                <p><strong>"ID: "</strong>{store.id.as_string()}</p>
                <p><strong>{move || labels().country_header}": "</strong>{store.country.clone()}</p>
                <p><strong>{move || labels().city_header}": "</strong>{store.city.clone()}</p>
                <p><strong>{move || labels().branch_header}": "</strong>{store.branch_display().to_string()}</p>
                <p><strong>{move || labels().address}": "</strong>{address}</p>
                <p><strong>{move || labels().status_header}": "</strong>{store.status.as_str()}</p>
                <p class="details-list__token">
                    <strong>{move || labels().server_token}": "</strong>
                    <span class="mono">{store.server_token.clone()}</span>
                    <button
                        class="button button--icon"
                        title=move || ctx.labels().common.copy
                        on:click=copy_token
                    >
                        {icon("copy")}
                    </button>
                </p>
                <p><strong>{move || labels().working_hours_header}": "</strong>{store.working_hours.clone()}</p>
                <p><strong>{move || labels().created_at}": "</strong>{format_datetime(&store.created_at)}</p>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                    {move || ctx.labels().common.close}
                </Button>
            </div>
        </Modal>
    }
}
