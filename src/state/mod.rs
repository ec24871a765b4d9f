// ============================================================================
// STATE - Rc<RefCell> state wrappers shared across views
// ============================================================================

pub mod app_state;
pub mod auth_state;
pub mod meal_state;

pub use app_state::{AppState, ManagerView, Page, StudentView};
pub use auth_state::AuthState;
pub use meal_state::{InFlightGuard, MealState};
