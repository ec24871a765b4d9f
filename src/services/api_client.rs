// ============================================================================
// API CLIENT - HTTP only, stateless
// ============================================================================
// No business logic here; every method is one request against the REST
// backend. The bearer token is read from localStorage per call so a fresh
// login is picked up without re-wiring anything.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::models::{AttendanceRecord, DashboardSummary, LoginRequest, LoginResponse, Menu};
use crate::services::error::ApiError;
use crate::utils::constants::{ACCESS_TOKEN_KEY, API_BASE_URL};
use crate::utils::storage::load_raw;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Attach the stored access token, if any.
    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match load_raw(ACCESS_TOKEN_KEY) {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Map a settled response: 401 is its own case so the caller can tear
    /// the session down; other non-2xx become `Http`.
    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        if response.status() == 401 {
            return Err(ApiError::Unauthorized);
        }
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| response.status_text());
        Err(ApiError::Http { status, message })
    }

    async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /auth/login/`. Unauthenticated on purpose: a 401 here means
    /// bad credentials, not an expired session, so it surfaces as `Http`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/auth/login/", self.base_url);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Logging in {}", email);

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Login failed. Check email and password.".to_string());
            return Err(ApiError::Http { status, message });
        }

        Self::json_body(response).await
    }

    /// `GET /menus/?meal_date=<ISO date>`
    pub async fn fetch_menus(&self, meal_date: &str) -> Result<Vec<Menu>, ApiError> {
        let url = format!("{}/menus/?meal_date={}", self.base_url, meal_date);
        let response = Self::authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::json_body(Self::check(response).await?).await
    }

    /// `GET /attendance/?menu__meal_date=<ISO date>` — the caller's own
    /// skip records for the day.
    pub async fn fetch_attendance(&self, meal_date: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = format!("{}/attendance/?menu__meal_date={}", self.base_url, meal_date);
        let response = Self::authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::json_body(Self::check(response).await?).await
    }

    /// `POST /attendance/` — create a skip record for a menu.
    pub async fn create_attendance(&self, menu_id: i64) -> Result<AttendanceRecord, ApiError> {
        let url = format!("{}/attendance/", self.base_url);

        log::info!("📝 Creating attendance record for menu {}", menu_id);

        let response = Self::authorize(Request::post(&url))
            .json(&json!({ "menu": menu_id }))
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::json_body(Self::check(response).await?).await
    }

    /// `DELETE /attendance/<id>/` — 204 on success.
    pub async fn delete_attendance(&self, attendance_id: i64) -> Result<(), ApiError> {
        let url = format!("{}/attendance/{}/", self.base_url, attendance_id);

        log::info!("🗑️ Deleting attendance record {}", attendance_id);

        let response = Self::authorize(Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = Self::check(response).await?;
        if response.status() != 204 {
            return Err(ApiError::Http {
                status: response.status(),
                message: "Expected 204 when removing a skip record".to_string(),
            });
        }
        Ok(())
    }

    /// `GET /dashboard/summary/` — manager metrics.
    pub async fn fetch_summary(&self) -> Result<DashboardSummary, ApiError> {
        let url = format!("{}/dashboard/summary/", self.base_url);
        let response = Self::authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::json_body(Self::check(response).await?).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
