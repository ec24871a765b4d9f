// ============================================================================
// VIEWMODELS - business logic, no DOM
// ============================================================================

pub mod dashboard_viewmodel;
pub mod feedback_viewmodel;
pub mod meal_viewmodel;
pub mod menu_viewmodel;

pub use dashboard_viewmodel::DashboardViewModel;
pub use meal_viewmodel::{MealSyncViewModel, ToggleError};
pub use menu_viewmodel::MenuViewModel;
