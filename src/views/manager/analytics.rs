// ============================================================================
// ANALYTICS - tabbed Chart.js views (feedback / waste / consumption)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    add_class, get_element_by_id, on_click, query_selector, remove_class, ElementBuilder,
};
use crate::utils::chart_ffi;

pub const DEFAULT_TAB: &str = "feedback";

const TABS: [(&str, &str); 3] = [
    ("feedback", "Feedback Trends"),
    ("waste", "Waste Analysis"),
    ("consumption", "Consumption"),
];

pub fn render_analytics() -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h2")?.text("Analytics").build();

    let tabs = ElementBuilder::new("div")?.class("tab-bar").build();
    for (key, label) in TABS {
        let tab = ElementBuilder::new("button")?
            .class(if key == DEFAULT_TAB {
                "tab-btn active"
            } else {
                "tab-btn"
            })
            .id(&format!("analyticsTab-{}", key))?
            .text(label)
            .build();
        on_click(&tab, move |_| select_tab(key))?;
        tabs.append_child(&tab)?;
    }

    let chart = ElementBuilder::new("div")?
        .class("chart-card")
        .child(
            ElementBuilder::new("canvas")?
                .id("analyticsChart")?
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("section")?
        .class("analytics-view")
        .child(heading)?
        .child(tabs)?
        .child(chart)?
        .build())
}

fn select_tab(key: &'static str) {
    if let Ok(Some(previous)) = query_selector(".analytics-view .tab-btn.active") {
        let _ = remove_class(&previous, "active");
    }
    if let Some(tab) = get_element_by_id(&format!("analyticsTab-{}", key)) {
        let _ = add_class(&tab, "active");
    }
    chart_ffi::render_analytics_chart("analyticsChart", key);
}
