// ============================================================================
// APP CONTROLLER - owns the state, mounts renders, routes after login
// ============================================================================

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::models::{Role, Session};
use crate::services::{auth_service, backend};
use crate::state::{AppState, Page};
use crate::utils::chart_ffi;
use crate::utils::constants::{FEEDBACK_POINTS_SEED, HEADCOUNT_TICK_MS};
use crate::utils::time::today_iso;
use crate::viewmodels::dashboard_viewmodel::simulated_headcount;
use crate::viewmodels::{DashboardViewModel, MealSyncViewModel};
use crate::views;
use crate::views::shared::report_api_error;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("Missing #app mount point"))?;
        let state = AppState::new();

        // Navigation writes trigger a full re-render, batched through a
        // zero-delay timeout so cascading updates coalesce into one paint.
        state.subscribe_to_changes(|| {
            Timeout::new(0, crate::rerender_app).forget();
        });

        // Meal-state writes patch the cards in place, no re-render.
        {
            let state = state.clone();
            state
                .meals
                .clone()
                .subscribe(move || views::student::refresh_meal_cards(&state));
        }

        if let Some(session) = auth_service::restore_session() {
            enter_dashboard(&state, session);
        }

        Ok(Self { state, root })
    }

    /// Tear down and rebuild the page for the current route.
    pub fn render(&self) -> Result<(), JsValue> {
        chart_ffi::teardown_charts();
        set_inner_html(&self.root, "");
        append_child(&self.root, &views::render_app(&self.state)?)?;

        // Chart.js needs the canvas in the document.
        if self.state.page() == Page::ManagerDashboard {
            views::manager::after_render(&self.state);
        }
        Ok(())
    }
}

/// Post-login / session-restore routing: pick the page for the role and
/// kick off that dashboard's data load.
pub fn enter_dashboard(state: &AppState, session: Session) {
    let role = session.role;
    state.auth.set_session(session);

    match role {
        Role::Student => {
            *state.feedback_points.borrow_mut() = FEEDBACK_POINTS_SEED;
            state.show_page(Page::StudentDashboard);
            load_today_meals(state);
        }
        Role::Manager => {
            state.show_page(Page::ManagerDashboard);
            load_manager_summary(state);
        }
    }
}

pub fn logout(state: &AppState) {
    log::info!("👋 Logging out");
    auth_service::clear_tokens();
    state.auth.clear();
    state.reset_user_state();
    chart_ffi::teardown_charts();
    state.show_page(Page::Login);
}

fn load_today_meals(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        let vm = MealSyncViewModel::new(backend(), state.meals.clone());
        if let Err(e) = vm.load_today_state(&today_iso()).await {
            report_api_error(&state, &e);
        }
    });
}

fn load_manager_summary(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        let vm = DashboardViewModel::new(backend());
        match vm.load_summary().await {
            Ok(summary) => {
                *state.summary.borrow_mut() = Some(summary);
                views::manager::refresh_summary(&state);
                views::manager::dashboard::init_headcount_chart(&state);
                start_headcount_timer(&state);
            }
            Err(e) => report_api_error(&state, &e),
        }
    });
}

/// Random-walk the displayed headcount between backend refreshes, the way
/// a busy mess actually drifts. Dropped by `show_page` on navigation away.
fn start_headcount_timer(state: &AppState) {
    let tick_state = state.clone();
    let interval = Interval::new(HEADCOUNT_TICK_MS, move || tick_headcount(&tick_state));
    *state.headcount_timer.borrow_mut() = Some(interval);
}

fn tick_headcount(state: &AppState) {
    {
        let mut summary = state.summary.borrow_mut();
        let Some(summary) = summary.as_mut() else {
            return;
        };
        let jitter = (js_sys::Math::random() * 5.0).floor() as i64 - 2;
        summary.live_data.live_headcount = simulated_headcount(
            summary.live_data.live_headcount,
            summary.live_data.total_students,
            jitter,
        );
    }
    views::manager::refresh_summary(state);
}
