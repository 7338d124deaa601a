pub mod app;
pub mod config;
pub mod cors;
pub mod db;
pub mod dto;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod seed;
pub mod state;

pub use app::build_router;
pub use config::ServiceConfig;
pub use state::AppState;
