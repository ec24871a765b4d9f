// ============================================================================
// API SEAM - one trait per dashboard, one configurable backend
// ============================================================================
// The old codebase shipped near-identical mock and live file variants; here
// a single seam carries both. `backend()` picks the implementation at
// compile time (APP_DATA_SOURCE=mock).
// ============================================================================

use crate::models::{AttendanceRecord, DashboardSummary, Menu};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::services::mock_client::MockApi;
use crate::utils::constants::USE_MOCK_DATA;

/// Menu + attendance resources consumed by the student dashboard.
#[allow(async_fn_in_trait)]
pub trait MealApi {
    async fn fetch_menus(&self, meal_date: &str) -> Result<Vec<Menu>, ApiError>;
    async fn fetch_attendance(&self, meal_date: &str) -> Result<Vec<AttendanceRecord>, ApiError>;
    async fn create_attendance(&self, menu_id: i64) -> Result<AttendanceRecord, ApiError>;
    async fn delete_attendance(&self, attendance_id: i64) -> Result<(), ApiError>;
}

/// Aggregate summary consumed by the manager dashboard.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn fetch_summary(&self) -> Result<DashboardSummary, ApiError>;
}

/// The one data source the app talks to: live REST backend or in-memory
/// demo data.
#[derive(Clone)]
pub enum Backend {
    Live(ApiClient),
    Mock(MockApi),
}

/// Construct the configured backend.
pub fn backend() -> Backend {
    if USE_MOCK_DATA {
        Backend::Mock(MockApi::shared())
    } else {
        Backend::Live(ApiClient::new())
    }
}

impl MealApi for ApiClient {
    async fn fetch_menus(&self, meal_date: &str) -> Result<Vec<Menu>, ApiError> {
        ApiClient::fetch_menus(self, meal_date).await
    }

    async fn fetch_attendance(&self, meal_date: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        ApiClient::fetch_attendance(self, meal_date).await
    }

    async fn create_attendance(&self, menu_id: i64) -> Result<AttendanceRecord, ApiError> {
        ApiClient::create_attendance(self, menu_id).await
    }

    async fn delete_attendance(&self, attendance_id: i64) -> Result<(), ApiError> {
        ApiClient::delete_attendance(self, attendance_id).await
    }
}

impl DashboardApi for ApiClient {
    async fn fetch_summary(&self) -> Result<DashboardSummary, ApiError> {
        ApiClient::fetch_summary(self).await
    }
}

impl MealApi for MockApi {
    async fn fetch_menus(&self, meal_date: &str) -> Result<Vec<Menu>, ApiError> {
        MockApi::fetch_menus(self, meal_date).await
    }

    async fn fetch_attendance(&self, meal_date: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        MockApi::fetch_attendance(self, meal_date).await
    }

    async fn create_attendance(&self, menu_id: i64) -> Result<AttendanceRecord, ApiError> {
        MockApi::create_attendance(self, menu_id).await
    }

    async fn delete_attendance(&self, attendance_id: i64) -> Result<(), ApiError> {
        MockApi::delete_attendance(self, attendance_id).await
    }
}

impl DashboardApi for MockApi {
    async fn fetch_summary(&self) -> Result<DashboardSummary, ApiError> {
        MockApi::fetch_summary(self).await
    }
}

impl MealApi for Backend {
    async fn fetch_menus(&self, meal_date: &str) -> Result<Vec<Menu>, ApiError> {
        match self {
            Backend::Live(api) => api.fetch_menus(meal_date).await,
            Backend::Mock(api) => api.fetch_menus(meal_date).await,
        }
    }

    async fn fetch_attendance(&self, meal_date: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        match self {
            Backend::Live(api) => api.fetch_attendance(meal_date).await,
            Backend::Mock(api) => api.fetch_attendance(meal_date).await,
        }
    }

    async fn create_attendance(&self, menu_id: i64) -> Result<AttendanceRecord, ApiError> {
        match self {
            Backend::Live(api) => api.create_attendance(menu_id).await,
            Backend::Mock(api) => api.create_attendance(menu_id).await,
        }
    }

    async fn delete_attendance(&self, attendance_id: i64) -> Result<(), ApiError> {
        match self {
            Backend::Live(api) => api.delete_attendance(attendance_id).await,
            Backend::Mock(api) => api.delete_attendance(attendance_id).await,
        }
    }
}

impl DashboardApi for Backend {
    async fn fetch_summary(&self) -> Result<DashboardSummary, ApiError> {
        match self {
            Backend::Live(api) => api.fetch_summary().await,
            Backend::Mock(api) => api.fetch_summary().await,
        }
    }
}
