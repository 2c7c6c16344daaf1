use crate::domain::a001_store::Store;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Sorted distinct countries across the whole collection.
pub fn unique_countries(stores: &[Store]) -> Vec<String> {
    stores
        .iter()
        .map(|s| s.country.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Sorted distinct cities, scoped to `selected_countries` unless it is empty.
pub fn unique_cities(stores: &[Store], selected_countries: &[String]) -> Vec<String> {
    stores
        .iter()
        .filter(|s| {
            selected_countries.is_empty() || selected_countries.iter().any(|c| *c == s.country)
        })
        .map(|s| s.city.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Read-only store collection plus the lookups derived from it.
///
/// The collection is shared, not copied, so the predicate and the
/// suggestion lists always read the same records. Countries depend only
/// on the collection and are computed once.
#[derive(Clone, Debug)]
pub struct CatalogIndex {
    stores: Arc<[Store]>,
    countries: Arc<[String]>,
}

impl CatalogIndex {
    pub fn new(stores: Vec<Store>) -> Self {
        let countries = unique_countries(&stores);
        Self {
            stores: stores.into(),
            countries: countries.into(),
        }
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    pub fn unique_countries(&self) -> &[String] {
        &self.countries
    }

    pub fn unique_cities(&self, selected_countries: &[String]) -> Vec<String> {
        unique_cities(&self.stores, selected_countries)
    }
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_store::sample_stores;

    fn catalog() -> CatalogIndex {
        CatalogIndex::new(sample_stores().unwrap())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unique_countries_sorted() {
        assert_eq!(
            catalog().unique_countries(),
            strings(&["Germany", "Poland", "Turkey", "USA"]).as_slice()
        );
    }

    #[test]
    fn test_unique_cities_unscoped() {
        assert_eq!(
            catalog().unique_cities(&[]),
            strings(&[
                "Ankara",
                "Berlin",
                "Istanbul",
                "Los Angeles",
                "New York",
                "Warsaw"
            ])
        );
    }

    #[test]
    fn test_unique_cities_scoped_and_widened() {
        let catalog = catalog();
        assert_eq!(
            catalog.unique_cities(&strings(&["Turkey"])),
            strings(&["Ankara", "Istanbul"])
        );
        // adding a country widens the candidate set again
        assert_eq!(
            catalog.unique_cities(&strings(&["Turkey", "USA"])),
            strings(&["Ankara", "Istanbul", "Los Angeles", "New York"])
        );
    }

    #[test]
    fn test_unknown_country_yields_no_cities() {
        assert!(catalog().unique_cities(&strings(&["Atlantis"])).is_empty());
    }

    #[test]
    fn test_scoped_cities_are_subset_of_all() {
        let catalog = catalog();
        let all = catalog.unique_cities(&[]);
        for country in catalog.unique_countries() {
            for city in catalog.unique_cities(std::slice::from_ref(country)) {
                assert!(all.contains(&city), "{} missing from all cities", city);
            }
        }
        let pair = strings(&["Poland", "Germany"]);
        assert!(catalog.unique_cities(&pair).iter().all(|c| all.contains(c)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CatalogIndex::default();
        assert!(catalog.is_empty());
        assert!(catalog.unique_countries().is_empty());
        assert!(catalog.unique_cities(&[]).is_empty());
    }
}
