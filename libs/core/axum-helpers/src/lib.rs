//! Shared Axum infrastructure: error types, extractors, middleware and
//! server bootstrap helpers used by the API binaries.

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod shutdown;

// Re-export commonly used types
pub use errors::{AppError, ErrorResponse};
pub use extractors::ValidatedJson;
pub use shutdown::{shutdown_signal, ShutdownCoordinator};
