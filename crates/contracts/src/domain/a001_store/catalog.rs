use super::aggregate::Store;
use anyhow::Context;

const SAMPLE_STORES_JSON: &str = include_str!("sample_stores.json");

/// Parse a JSON array of store records.
pub fn parse_stores(raw: &str) -> anyhow::Result<Vec<Store>> {
    serde_json::from_str::<Vec<Store>>(raw).context("Failed to parse store catalog")
}

/// The static catalog bundled with the dashboard.
pub fn sample_stores() -> anyhow::Result<Vec<Store>> {
    parse_stores(SAMPLE_STORES_JSON).context("Bundled sample_stores.json is invalid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_store::aggregate::{StoreId, StoreStatus};

    #[test]
    fn test_sample_catalog_loads() {
        let stores = sample_stores().unwrap();
        assert_eq!(stores.len(), 6);

        let ids: Vec<i64> = stores.iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let la = &stores[5];
        assert_eq!(la.id, StoreId(6));
        assert_eq!(la.city, "Los Angeles");
        assert_eq!(la.status, StoreStatus::Inactive);
        assert!(la.is_all_day());
    }

    #[test]
    fn test_created_at_is_utc() {
        let stores = sample_stores().unwrap();
        assert_eq!(
            stores[0].created_at.to_rfc3339(),
            "2023-01-15T10:00:00+00:00"
        );
    }

    #[test]
    fn test_invalid_catalog_is_error() {
        assert!(parse_stores("{}").is_err());
        assert!(parse_stores(r#"[{"id": 1}]"#).is_err());
        assert_eq!(parse_stores("[]").unwrap().len(), 0);
    }
}
