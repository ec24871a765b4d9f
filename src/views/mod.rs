// ============================================================================
// VIEWS - DOM construction per page; no business logic
// ============================================================================

pub mod login;
pub mod manager;
pub mod shared;
pub mod student;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::{AppState, Page};

/// Build the tree for the current page. The confirm modal rides along on
/// every page so `show_confirm` always finds it.
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let page = match state.page() {
        Page::Login => login::render_login(state)?,
        Page::StudentDashboard => student::render_student_dashboard(state)?,
        Page::ManagerDashboard => manager::render_manager_dashboard(state)?,
    };
    page.append_child(&shared::render_confirm_modal(state)?.into())?;
    Ok(page)
}
