pub mod aggregate;
pub mod catalog;

pub use aggregate::{Store, StoreId, StoreStatus, WorkingHours, ALL_DAY_SENTINEL};
pub use catalog::{parse_stores, sample_stores};
