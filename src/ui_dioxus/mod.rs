// Dioxus UI module
pub mod app;
pub mod components;
pub mod router;
pub mod state;
pub mod views;

pub use app::App;
pub use state::ApiHandle;
