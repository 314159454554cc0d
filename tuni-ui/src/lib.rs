pub mod api;
pub mod components;
pub mod config;
pub mod coordinator;
pub mod history;
pub mod interop;
pub mod layout;
pub mod sidebar;
pub mod styles;
pub mod theme;
pub mod transcript;

pub use api::*;
pub use components::*;
pub use config::*;
pub use history::*;
