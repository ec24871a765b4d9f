// ============================================================================
// MODELS - Wire shapes shared with the backend + client-side state types
// ============================================================================

pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod menu;

pub use attendance::{AttendanceRecord, MealAttendanceState, MealStatus, MealType};
pub use auth::{LoginRequest, LoginResponse, Role, Session, TokenClaims};
pub use dashboard::{AiPredictions, DashboardSummary, Financials, LiveData, PrepSheetItem};
pub use menu::{Menu, MenuItem};
