//! Client-side filtering of the store catalog.
//!
//! ```text
//! user input ──> StoreFilterState ──> filtered_stores(catalog, state) ──> table
//!                      │
//!                      └──> CatalogIndex::unique_cities(selected countries)
//!                                 └──> filter_suggestions(candidates, input) ──> dropdown
//! ```

pub mod catalog_index;
pub mod filter_state;
pub mod hours;
pub mod predicate;
pub mod suggestions;
pub mod visibility;

pub use catalog_index::{unique_cities, unique_countries, CatalogIndex};
pub use filter_state::{FilterField, StoreFilterState};
pub use hours::{format_hour, hour_options, is_hour_choice};
pub use predicate::{filtered_stores, store_matches};
pub use suggestions::{filter_suggestions, SuggestionList};
pub use visibility::{HideTicket, SuggestionVisibility};
