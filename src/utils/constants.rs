/// REST backend base URL, fixed at build time (API_BASE_URL env var or
/// .env via build.rs). Default is the local Django dev server.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000/api/v1",
};

/// Build with APP_DATA_SOURCE=mock to run against in-memory demo data
/// instead of the REST backend.
pub const USE_MOCK_DATA: bool = match option_env!("APP_DATA_SOURCE") {
    // `str` equality is not const-stable; compare bytes instead.
    Some(s) => matches!(s.as_bytes(), [b'm', b'o', b'c', b'k']),
    None => false,
};

/// localStorage keys for the persisted session tokens.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Simulated live-headcount refresh period on the manager dashboard.
pub const HEADCOUNT_TICK_MS: u32 = 30_000;

/// Waste reduction is not computed by the backend yet.
/// TODO: replace once /dashboard/summary/ exposes a waste figure.
pub const WASTE_REDUCTION_PLACEHOLDER: &str = "18%";

/// Toast lifetime before auto-dismiss.
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Demo rewards balance granted at login.
pub const FEEDBACK_POINTS_SEED: u32 = 250;
