pub mod api;
pub mod store;
pub mod writer;

pub use api::{ApiClient, ApiError, ApiResponse};
pub use store::{OrderStore, StoreError};
pub use writer::FileWriter;

/// Opaque cause raised by an injected capability
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
