pub mod models;
pub mod errors;
pub mod api;

pub use models::*;
pub use errors::*;
pub use api::*;
