use contracts::domain::a001_store::StoreId;
use contracts::shared::store_filter::StoreFilterState;
use leptos::prelude::*;

/// Page-local state of the Stores view. Lives as long as the page is
/// mounted; nothing is persisted.
#[derive(Clone, Copy)]
pub struct StoresPageState {
    pub filter: RwSignal<StoreFilterState>,
    pub filters_expanded: RwSignal<bool>,
    /// Store shown in the details modal.
    pub selected_store: RwSignal<Option<StoreId>>,
}

impl StoresPageState {
    pub fn open_details(&self, id: StoreId) {
        log::debug!("store details: open {}", id.as_string());
        self.selected_store.set(Some(id));
    }

    pub fn close_details(&self) {
        self.selected_store.set(None);
    }

    pub fn reset_filters(&self) {
        self.filter.update(|f| f.reset());
    }
}

pub fn create_state() -> StoresPageState {
    StoresPageState {
        filter: RwSignal::new(StoreFilterState::new()),
        filters_expanded: RwSignal::new(true),
        selected_store: RwSignal::new(None),
    }
}
