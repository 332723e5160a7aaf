pub mod components;
pub mod layout;
pub mod screens;
pub mod styles;
pub mod theme;

// Individual re-exports done in components/mod.rs and screens/mod.rs
pub use layout::AppLayout;
pub use styles::Styles;
pub use theme::Theme;
