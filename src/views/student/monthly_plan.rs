// ============================================================================
// MONTHLY PLAN - calendar overview of the current month
// ============================================================================
// Demo content: the backend serves menus per day, not per month, so the
// cells carry the alternating veg/non-veg rotation until a monthly plan
// endpoint exists.
// ============================================================================

use chrono::Datelike;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::utils::time::{month_grid, parse_iso, today_iso};
use crate::views::shared::{show_toast, ToastKind};

const DAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn render_monthly_plan() -> Result<Element, JsValue> {
    let today = parse_iso(&today_iso());

    let month_label = today
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();
    let heading = ElementBuilder::new("h2")?.text("Monthly Plan").build();
    let subheading = ElementBuilder::new("p")?
        .class("section-subtitle")
        .text(&month_label)
        .build();

    let grid = ElementBuilder::new("div")?.class("calendar-grid").build();
    for label in DAY_HEADERS {
        grid.append_child(
            &ElementBuilder::new("div")?
                .class("calendar-header")
                .text(label)
                .build(),
        )?;
    }

    let (offset, days) = today.map(month_grid).unwrap_or((0, 30));
    for _ in 0..offset {
        grid.append_child(
            &ElementBuilder::new("div")?
                .class("calendar-cell empty")
                .build(),
        )?;
    }
    let today_day = today.map(|d| d.day()).unwrap_or(0);
    for day in 1..=days {
        let tag = if day % 2 == 0 { "Veg" } else { "Non-Veg" };
        let cell = ElementBuilder::new("div")?
            .class(if day == today_day {
                "calendar-cell today"
            } else {
                "calendar-cell"
            })
            .child(
                ElementBuilder::new("div")?
                    .class("calendar-day")
                    .text(&day.to_string())
                    .build(),
            )?
            .child(
                ElementBuilder::new("div")?
                    .class("calendar-tag")
                    .text(tag)
                    .build(),
            )?
            .build();
        grid.append_child(&cell)?;
    }

    let download = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .text("⬇ Download Plan")
        .build();
    on_click(&download, move |_| {
        show_toast("Monthly meal plan downloaded!", ToastKind::Success);
    })?;

    Ok(ElementBuilder::new("section")?
        .class("monthly-plan")
        .child(heading)?
        .child(subheading)?
        .child(grid)?
        .child(download)?
        .build())
}
