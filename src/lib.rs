pub mod actions;
pub mod api;
pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod ui;

pub use api::ApiClient;
pub use app::router;
pub use state::AppState;
