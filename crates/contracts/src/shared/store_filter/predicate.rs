use super::filter_state::StoreFilterState;
use crate::domain::a001_store::Store;

fn matches_selection(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == value)
}

/// With "all day" on only exact `"24/7"` stores pass. Otherwise each set
/// hour must equal the corresponding half of `"HH:MM-HH:MM"`; a store whose
/// hours do not parse as a range fails any set constraint.
fn matches_hours(store: &Store, filter: &StoreFilterState) -> bool {
    if filter.is_all_day_open() {
        return store.is_all_day();
    }

    let hours = store.hours();
    let open_ok = filter
        .opening_hour()
        .map_or(true, |want| hours.opening() == Some(want));
    let close_ok = filter
        .closing_hour()
        .map_or(true, |want| hours.closing() == Some(want));
    open_ok && close_ok
}

pub fn store_matches(store: &Store, filter: &StoreFilterState) -> bool {
    matches_selection(filter.selected_countries(), &store.country)
        && matches_selection(filter.selected_cities(), &store.city)
        && matches_hours(store, filter)
}

/// Stores passing every active filter, in catalog order.
pub fn filtered_stores<'a>(stores: &'a [Store], filter: &StoreFilterState) -> Vec<&'a Store> {
    stores.iter().filter(|s| store_matches(s, filter)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_store::{sample_stores, StoreStatus};
    use chrono::Utc;

    fn ids(stores: &[&Store]) -> Vec<i64> {
        stores.iter().map(|s| s.id.value()).collect()
    }

    fn run(filter: &StoreFilterState) -> Vec<i64> {
        let stores = sample_stores().unwrap();
        ids(&filtered_stores(&stores, filter))
    }

    fn store_with_hours(working_hours: &str) -> Store {
        Store {
            id: crate::domain::a001_store::StoreId(99),
            name: "Test".to_string(),
            country: "Nowhere".to_string(),
            city: "Nowhere".to_string(),
            branch: String::new(),
            address: String::new(),
            status: StoreStatus::Active,
            server_token: "SRV_TEST".to_string(),
            working_hours: working_hours.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_filters_returns_everything_in_order() {
        assert_eq!(run(&StoreFilterState::new()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_country_filter() {
        let mut f = StoreFilterState::new();
        f.add_country_filter("Turkey");
        assert_eq!(run(&f), vec![2, 5]);
    }

    #[test]
    fn test_country_and_city() {
        let mut f = StoreFilterState::new();
        f.add_country_filter("USA");
        f.add_city_filter("Los Angeles");
        assert_eq!(run(&f), vec![6]);
    }

    #[test]
    fn test_multiple_countries_keep_catalog_order() {
        let mut f = StoreFilterState::new();
        f.add_country_filter("USA");
        f.add_country_filter("Germany");
        assert_eq!(run(&f), vec![1, 3, 6]);
    }

    #[test]
    fn test_all_day_open() {
        let mut f = StoreFilterState::new();
        f.set_all_day_open(true);
        assert_eq!(run(&f), vec![6]);
    }

    #[test]
    fn test_all_day_ignores_stored_hours() {
        let mut f = StoreFilterState::new();
        f.set_opening_hour("09:00");
        f.set_all_day_open(true);
        assert_eq!(run(&f), vec![6]);
    }

    #[test]
    fn test_opening_hour() {
        let mut f = StoreFilterState::new();
        f.set_opening_hour("09:00");
        assert_eq!(run(&f), vec![1, 5]);
    }

    #[test]
    fn test_opening_and_closing_hour() {
        let mut f = StoreFilterState::new();
        f.set_opening_hour("08:00");
        f.set_closing_hour("22:00");
        assert_eq!(run(&f), vec![2]);

        f.set_closing_hour("23:00");
        assert!(run(&f).is_empty());
    }

    #[test]
    fn test_closing_hour_excludes_all_day_store() {
        let mut f = StoreFilterState::new();
        f.set_closing_hour("21:00");
        assert_eq!(run(&f), vec![1, 5]);
    }

    #[test]
    fn test_unknown_city() {
        let mut f = StoreFilterState::new();
        f.add_city_filter("Nowhere");
        assert!(run(&f).is_empty());
    }

    #[test]
    fn test_stale_city_still_filters() {
        let mut f = StoreFilterState::new();
        f.add_country_filter("Turkey");
        f.add_city_filter("Ankara");
        f.remove_country_filter("Turkey");
        assert_eq!(run(&f), vec![5]);
    }

    #[test]
    fn test_malformed_hours() {
        let broken = [
            store_with_hours("closed"),
            store_with_hours("09:00-12:00-18:00"),
            store_with_hours("24/7"),
        ];

        let open = StoreFilterState::new();
        assert_eq!(filtered_stores(&broken, &open).len(), 3);

        let mut constrained = StoreFilterState::new();
        constrained.set_opening_hour("09:00");
        assert!(filtered_stores(&broken, &constrained).is_empty());

        let mut closing = StoreFilterState::new();
        closing.set_closing_hour("18:00");
        assert!(filtered_stores(&broken, &closing).is_empty());
    }

    #[test]
    fn test_all_day_requires_exact_sentinel() {
        let stores = [store_with_hours("24/7 "), store_with_hours("open 24/7")];
        let mut f = StoreFilterState::new();
        f.set_all_day_open(true);
        assert!(filtered_stores(&stores, &f).is_empty());
    }

    #[test]
    fn test_transient_input_does_not_filter() {
        let mut f = StoreFilterState::new();
        f.set_country_input_text("Turkey");
        f.set_city_input_text("Ankara");
        assert_eq!(run(&f).len(), 6);
    }
}
