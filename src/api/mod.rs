pub mod crud;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ErrorBody};
pub use routes::create_router;
