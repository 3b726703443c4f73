//! Platform-agnostic state and layout logic shared by the navigation components.

pub mod layout;
pub mod settings;
pub mod theme;
