// ============================================================================
// MANAGER DASHBOARD - sidebar shell
// ============================================================================

pub mod analytics;
pub mod dashboard;
pub mod inventory;

pub use dashboard::refresh_summary;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app;
use crate::dom::{on_click, ElementBuilder};
use crate::state::{AppState, ManagerView};

const VIEWS: [ManagerView; 3] = [
    ManagerView::Dashboard,
    ManagerView::Inventory,
    ManagerView::Analytics,
];

pub fn render_manager_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let brand = ElementBuilder::new("span")?
        .class("brand")
        .text("🍛 Annapurna AI · Manager")
        .build();

    let nav = ElementBuilder::new("nav")?.class("sidebar-nav").build();
    let active = state.manager_view();
    for view in VIEWS {
        let item = ElementBuilder::new("button")?
            .class(if view == active {
                "nav-item active"
            } else {
                "nav-item"
            })
            .text(view.nav_label())
            .build();
        let state = state.clone();
        on_click(&item, move |_| state.show_manager_view(view))?;
        nav.append_child(&item)?;
    }

    let logout = ElementBuilder::new("button")?
        .class("nav-item logout")
        .text("Log Out")
        .build();
    {
        let state = state.clone();
        on_click(&logout, move |_| app::logout(&state))?;
    }
    nav.append_child(&logout)?;

    let sidebar = ElementBuilder::new("aside")?
        .class("sidebar")
        .child(brand)?
        .child(nav)?
        .build();

    let body = match active {
        ManagerView::Dashboard => dashboard::render_dashboard(state)?,
        ManagerView::Inventory => inventory::render_inventory()?,
        ManagerView::Analytics => analytics::render_analytics()?,
    };

    let main = ElementBuilder::new("main")?
        .class("manager-content")
        .child(body)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("manager-dashboard")
        .child(sidebar)?
        .child(main)?
        .build())
}

/// Post-attach hook: chart initialisation needs the canvas in the
/// document, so the App calls this after mounting the render tree.
pub fn after_render(state: &AppState) {
    match state.manager_view() {
        ManagerView::Dashboard => dashboard::init_headcount_chart(state),
        ManagerView::Analytics => {
            crate::utils::chart_ffi::render_analytics_chart("analyticsChart", analytics::DEFAULT_TAB)
        }
        ManagerView::Inventory => {}
    }
}
