pub mod dashboard;
pub mod firmware;
pub mod users;
