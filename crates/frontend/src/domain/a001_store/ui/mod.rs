pub mod autocomplete;
pub mod details;
pub mod list;
