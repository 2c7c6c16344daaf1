pub mod config;
pub mod format;
pub mod i18n;
pub mod palette;
pub mod store_filter;
