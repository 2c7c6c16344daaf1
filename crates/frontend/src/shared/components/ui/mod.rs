pub mod badge;
pub mod checkbox;
pub mod select;

pub use badge::StatusBadge;
pub use checkbox::Checkbox;
pub use select::Select;
