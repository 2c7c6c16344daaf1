pub mod clipboard;
pub mod components;
pub mod icons;
pub mod modal;
pub mod notify;
pub mod theme;
