// ============================================================================
// SHARED VIEW PARTS - toast notifications, confirm modal, error reporting
// ============================================================================

pub mod modal;
pub mod notification;

pub use modal::{render_confirm_modal, show_confirm};
pub use notification::{show_toast, ToastKind};

use crate::services::{auth_service, ApiError};
use crate::state::{AppState, Page};

/// Surface an API failure to the user. A 401 tears the session down and
/// routes to login; `AuthState::clear` returning false means another
/// handler already did the teardown, so the toast fires at most once.
pub fn report_api_error(state: &AppState, error: &ApiError) {
    if error.is_unauthorized() {
        if state.auth.clear() {
            log::warn!("🔒 Session expired, logging out");
            auth_service::clear_tokens();
            state.reset_user_state();
            show_toast(&error.to_string(), ToastKind::Error);
            state.show_page(Page::Login);
        }
        return;
    }
    show_toast(&error.to_string(), ToastKind::Error);
}
