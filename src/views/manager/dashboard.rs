// ============================================================================
// MANAGER DASHBOARD - live headcount, savings, prep sheet
// ============================================================================
// Metric cards are patched in place (`refresh_summary`) so the 30s
// headcount simulation does not force a full re-render.
// ============================================================================

use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Element, HtmlAnchorElement, Url};

use crate::dom::{
    create_element, on_click, set_inner_html, set_style, window, ElementBuilder,
};
use crate::state::AppState;
use crate::utils::chart_ffi;
use crate::utils::constants::WASTE_REDUCTION_PLACEHOLDER;
use crate::viewmodels::dashboard_viewmodel::{format_rupees, prep_sheet_csv, raw_materials_for};
use crate::views::shared::{show_toast, ToastKind};

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h2")?.text("Operations Dashboard").build();

    // Headcount card with progress bar.
    let headcount_card = ElementBuilder::new("div")?
        .class("metric-card headcount-card")
        .child(ElementBuilder::new("h3")?.text("Live Headcount").build())?
        .child(
            ElementBuilder::new("p")?
                .class("metric-value")
                .child(
                    ElementBuilder::new("span")?
                        .id("headcountValue")?
                        .text("—")
                        .build(),
                )?
                .child(
                    ElementBuilder::new("span")?
                        .class("metric-total")
                        .id("headcountTotal")?
                        .build(),
                )?
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("progress-track")
                .child(
                    ElementBuilder::new("div")?
                        .class("progress-fill")
                        .id("headcountBar")?
                        .build(),
                )?
                .build(),
        )?
        .build();

    let savings_card = metric_card("Projected Savings Today", "savingsValue")?;
    let waste_card = metric_card("Waste Reduction", "wasteValue")?;

    let metrics = ElementBuilder::new("div")?
        .class("metric-grid")
        .child(headcount_card)?
        .child(savings_card)?
        .child(waste_card)?
        .build();

    // Weekly headcount chart (Chart.js glue).
    let chart = ElementBuilder::new("div")?
        .class("chart-card")
        .child(ElementBuilder::new("h3")?.text("Attendance This Week").build())?
        .child(
            ElementBuilder::new("canvas")?
                .id("headcountChart")?
                .build(),
        )?
        .build();

    // Prep sheet table + actions.
    let export_btn = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .text("⬇ Export CSV")
        .build();
    {
        let state = state.clone();
        on_click(&export_btn, move |_| export_prep_sheet(&state))?;
    }
    let print_btn = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .text("🖨 Print")
        .build();
    on_click(&print_btn, move |_| {
        if let Some(window) = window() {
            let _ = window.print();
        }
    })?;

    let table = ElementBuilder::new("table")?
        .class("prep-table")
        .html(
            "<thead><tr><th>Menu Item</th><th>Recommended Quantity</th>\
             <th>Raw Materials</th></tr></thead>",
        )
        .child(ElementBuilder::new("tbody")?.id("prepSheetBody")?.build())?
        .build();

    let prep_card = ElementBuilder::new("div")?
        .class("prep-card")
        .child(
            ElementBuilder::new("div")?
                .class("prep-header")
                .child(
                    ElementBuilder::new("h3")?
                        .text("AI Prep Sheet for Tomorrow")
                        .build(),
                )?
                .child(export_btn)?
                .child(print_btn)?
                .build(),
        )?
        .child(table)?
        .build();

    let root = ElementBuilder::new("section")?
        .class("manager-home")
        .child(heading)?
        .child(metrics)?
        .child(chart)?
        .child(prep_card)?
        .build();

    paint_summary(state, &root)?;
    Ok(root)
}

fn metric_card(title: &str, value_id: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("metric-card")
        .child(ElementBuilder::new("h3")?.text(title).build())?
        .child(
            ElementBuilder::new("p")?
                .class("metric-value")
                .id(value_id)?
                .text("—")
                .build(),
        )?
        .build())
}

/// Patch the metric cards and prep sheet from `state.summary`, searching
/// inside `root` so it also works before the tree is attached.
fn paint_summary(state: &AppState, root: &Element) -> Result<(), JsValue> {
    let summary = state.summary.borrow();
    let Some(summary) = summary.as_ref() else {
        return Ok(());
    };

    let find = |id: &str| root.query_selector(&format!("#{}", id)).ok().flatten();

    if let Some(el) = find("headcountValue") {
        el.set_text_content(Some(&summary.live_data.live_headcount.to_string()));
    }
    if let Some(el) = find("headcountTotal") {
        el.set_text_content(Some(&format!(" / {}", summary.live_data.total_students)));
    }
    if let Some(bar) = find("headcountBar") {
        set_style(
            &bar,
            "width",
            &format!("{:.1}%", summary.live_data.fill_percentage()),
        )?;
    }
    if let Some(el) = find("savingsValue") {
        el.set_text_content(Some(&format_rupees(
            summary.financials.projected_savings_today,
        )));
    }
    if let Some(el) = find("wasteValue") {
        el.set_text_content(Some(WASTE_REDUCTION_PLACEHOLDER));
    }

    if let Some(body) = find("prepSheetBody") {
        set_inner_html(&body, "");
        for item in &summary.ai_predictions.prep_sheet {
            let row = create_element("tr")?;
            for cell_text in [
                item.item.clone(),
                format!("{:.2} kg", item.quantity_kg),
                raw_materials_for(&item.item).to_string(),
            ] {
                let cell = create_element("td")?;
                cell.set_text_content(Some(&cell_text));
                row.append_child(&cell)?;
            }
            body.append_child(&row)?;
        }
    }

    Ok(())
}

/// Patch the live dashboard in place; no-op while another view is active.
pub fn refresh_summary(state: &AppState) {
    if let Some(root) = crate::dom::document().and_then(|doc| doc.document_element()) {
        let _ = paint_summary(state, &root);
    }
}

/// Feed the weekly attendance chart. Historical series are not served by
/// the backend yet, so the week is sketched around today's headcount.
pub fn init_headcount_chart(state: &AppState) {
    let summary = state.summary.borrow();
    let Some(summary) = summary.as_ref() else {
        return;
    };

    let today = summary.live_data.live_headcount;
    let forecast: Vec<i64> = (0..7).map(|d| today - 60 + 20 * (d % 4)).collect();
    let actual: Vec<i64> = forecast.iter().map(|v| v - 25).collect();

    let datasets = json!({
        "labels": ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        "forecast": forecast,
        "actual": actual,
    });
    chart_ffi::init_headcount_chart("headcountChart", &datasets.to_string());
}

fn export_prep_sheet(state: &AppState) {
    let summary = state.summary.borrow();
    let Some(summary) = summary.as_ref() else {
        show_toast("Prep sheet not loaded yet.", ToastKind::Warning);
        return;
    };

    let csv = prep_sheet_csv(&summary.ai_predictions.prep_sheet);
    match download_csv(&csv, "prep_sheet.csv") {
        Ok(()) => {
            log::info!("📄 Prep sheet exported ({} rows)", summary.ai_predictions.prep_sheet.len());
            show_toast("Prep sheet downloaded.", ToastKind::Success);
        }
        Err(e) => {
            log::error!("❌ CSV export failed: {:?}", e);
            show_toast("Could not export the prep sheet.", ToastKind::Error);
        }
    }
}

/// Object-URL download: build a Blob, click a transient anchor, revoke.
fn download_csv(csv: &str, filename: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(csv));

    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url)?;
    Ok(())
}
