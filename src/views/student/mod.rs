// ============================================================================
// STUDENT DASHBOARD - shell with tab navigation
// ============================================================================

pub mod feedback;
pub mod home;
pub mod monthly_plan;
pub mod profile;
pub mod weekly_menu;

pub use home::refresh_meal_cards;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::state::{AppState, StudentView};

const TABS: [(StudentView, &str); 5] = [
    (StudentView::Home, "Home"),
    (StudentView::WeeklyMenu, "Weekly Menu"),
    (StudentView::MonthlyPlan, "Monthly Plan"),
    (StudentView::Feedback, "Feedback"),
    (StudentView::Profile, "Profile"),
];

pub fn render_student_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let greeting = state
        .auth
        .get_session()
        .map(|s| format!("Hi, {}", s.display_name()))
        .unwrap_or_default();

    let brand = ElementBuilder::new("span")?
        .class("brand")
        .text("🍛 Annapurna AI")
        .build();
    let who = ElementBuilder::new("span")?
        .class("header-greeting")
        .text(&greeting)
        .build();

    let nav = ElementBuilder::new("nav")?.class("tab-bar").build();
    let active = state.student_view();
    for (view, label) in TABS {
        let tab = ElementBuilder::new("button")?
            .class(if view == active {
                "tab-btn active"
            } else {
                "tab-btn"
            })
            .text(label)
            .build();
        let state = state.clone();
        on_click(&tab, move |_| state.show_student_view(view))?;
        nav.append_child(&tab)?;
    }

    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(brand)?
        .child(who)?
        .child(nav)?
        .build();

    let body = match active {
        StudentView::Home => home::render_home(state)?,
        StudentView::WeeklyMenu => weekly_menu::render_weekly_menu(state)?,
        StudentView::MonthlyPlan => monthly_plan::render_monthly_plan()?,
        StudentView::Feedback => feedback::render_feedback(state)?,
        StudentView::Profile => profile::render_profile(state)?,
    };

    Ok(ElementBuilder::new("div")?
        .class("student-dashboard")
        .child(header)?
        .child(body)?
        .build())
}
