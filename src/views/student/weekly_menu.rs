// ============================================================================
// WEEKLY MENU - browse the menu for any day of the current week
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    add_class, get_element_by_id, on_click, query_selector, remove_class, set_inner_html,
    ElementBuilder,
};
use crate::models::{MealType, Menu};
use crate::services::backend;
use crate::state::AppState;
use crate::utils::time::{parse_iso, today_iso, week_of};
use crate::viewmodels::MenuViewModel;
use crate::views::shared::report_api_error;

pub fn render_weekly_menu(state: &AppState) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h2")?.text("Weekly Menu").build();

    let today = today_iso();
    let week = parse_iso(&today)
        .map(week_of)
        .unwrap_or_default();

    let strip = ElementBuilder::new("div")?.class("day-strip").build();
    for (label, date) in &week {
        let button = ElementBuilder::new("button")?
            .class(if *date == today {
                "day-btn active"
            } else {
                "day-btn"
            })
            .id(&format!("dayBtn-{}", date))?
            .text(label)
            .build();

        let state = state.clone();
        let date = date.clone();
        on_click(&button, move |_| select_day(&state, &date))?;
        strip.append_child(&button)?;
    }

    let list = ElementBuilder::new("div")?
        .class("day-menu")
        .id("dayMenuList")?
        .html("<p class=\"empty-hint\">Loading menu…</p>")
        .build();

    // Today is selected by default.
    select_day(state, &today);

    Ok(ElementBuilder::new("section")?
        .class("weekly-menu")
        .child(heading)?
        .child(strip)?
        .child(list)?
        .build())
}

fn select_day(state: &AppState, date: &str) {
    let state = state.clone();
    let date = date.to_string();
    spawn_local(async move {
        let vm = MenuViewModel::new(backend(), state.weekly_menus.clone());
        match vm.menus_for(&date).await {
            Ok(menus) => {
                highlight_day(&date);
                paint_day_menu(&menus);
            }
            Err(e) => report_api_error(&state, &e),
        }
    });
}

fn highlight_day(date: &str) {
    if let Ok(Some(previous)) = query_selector(".day-btn.active") {
        let _ = remove_class(&previous, "active");
    }
    if let Some(button) = get_element_by_id(&format!("dayBtn-{}", date)) {
        let _ = add_class(&button, "active");
    }
}

fn paint_day_menu(menus: &[Menu]) {
    let Some(list) = get_element_by_id("dayMenuList") else {
        return;
    };
    set_inner_html(&list, "");

    for meal in MealType::ALL {
        let menu = menus
            .iter()
            .find(|m| MealType::parse(&m.meal_type) == Some(meal));

        let items = match menu {
            Some(menu) if !menu.items.is_empty() => menu
                .items
                .iter()
                .map(|item| item.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            _ => "Not Available".to_string(),
        };

        let row_html = format!(
            "<div class=\"menu-row\"><span class=\"menu-row-meal\">{}</span>\
             <span class=\"menu-row-items\" id=\"menuRow-{}\"></span></div>",
            meal.label(),
            meal
        );
        let _ = list.insert_adjacent_html("beforeend", &row_html);
        // Item names come from the backend; set as text, not HTML.
        if let Some(cell) = get_element_by_id(&format!("menuRow-{}", meal)) {
            cell.set_text_content(Some(&items));
        }
    }
}
