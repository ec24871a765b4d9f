// ============================================================================
// SERVICES - HTTP communication only, no business logic
// ============================================================================

pub mod api;
pub mod api_client;
pub mod auth_service;
pub mod error;
pub mod mock_client;

pub use api::{backend, Backend, DashboardApi, MealApi};
pub use api_client::ApiClient;
pub use error::ApiError;
pub use mock_client::MockApi;
