// ============================================================================
// INVENTORY - current stock and AI purchase orders (demo data)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    add_class, create_element, get_element_by_id, on_click, query_selector, remove_class,
    set_inner_html, ElementBuilder,
};
use crate::views::shared::{show_toast, ToastKind};

// Stock levels come from the purchase module once it ships; until then the
// view runs on a fixed catalogue.
const STOCK: [(&str, &str, &str); 5] = [
    ("Basmati Rice", "240 kg", "ok"),
    ("Toor Dal", "85 kg", "ok"),
    ("Paneer", "12 kg", "low"),
    ("Tomatoes", "8 kg", "low"),
    ("Cooking Oil", "60 L", "ok"),
];

const ORDERS: [(&str, &str); 3] = [
    ("Paneer", "Order 40 kg before Thursday"),
    ("Tomatoes", "Order 50 kg, price dip expected"),
    ("Rice", "No order needed this week"),
];

pub fn render_inventory() -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h2")?.text("Inventory").build();

    let tabs = ElementBuilder::new("div")?.class("tab-bar").build();
    for (key, label) in [("stock", "Current Stock"), ("orders", "AI Purchase Orders")] {
        let tab = ElementBuilder::new("button")?
            .class(if key == "stock" {
                "tab-btn active"
            } else {
                "tab-btn"
            })
            .id(&format!("invTab-{}", key))?
            .text(label)
            .build();
        on_click(&tab, move |_| select_tab(key))?;
        tabs.append_child(&tab)?;
    }

    let panel = ElementBuilder::new("div")?
        .class("inventory-panel")
        .id("inventoryPanel")?
        .build();
    paint_stock(&panel)?;

    Ok(ElementBuilder::new("section")?
        .class("inventory-view")
        .child(heading)?
        .child(tabs)?
        .child(panel)?
        .build())
}

fn select_tab(key: &'static str) {
    if let Ok(Some(previous)) = query_selector(".inventory-view .tab-btn.active") {
        let _ = remove_class(&previous, "active");
    }
    if let Some(tab) = get_element_by_id(&format!("invTab-{}", key)) {
        let _ = add_class(&tab, "active");
    }

    let Some(panel) = get_element_by_id("inventoryPanel") else {
        return;
    };
    let result = match key {
        "orders" => {
            show_toast(
                "Purchase suggestions are demo data for now.",
                ToastKind::Info,
            );
            paint_orders(&panel)
        }
        _ => paint_stock(&panel),
    };
    if result.is_err() {
        show_toast("Could not render inventory.", ToastKind::Error);
    }
}

fn paint_stock(panel: &Element) -> Result<(), JsValue> {
    set_inner_html(panel, "");
    for (item, quantity, level) in STOCK {
        let row = create_element("div")?;
        row.set_class_name(&format!("stock-row stock-{}", level));

        let name = create_element("span")?;
        name.set_text_content(Some(item));
        let amount = create_element("span")?;
        amount.set_text_content(Some(quantity));

        row.append_child(&name)?;
        row.append_child(&amount)?;
        panel.append_child(&row)?;
    }
    Ok(())
}

fn paint_orders(panel: &Element) -> Result<(), JsValue> {
    set_inner_html(panel, "");
    for (item, advice) in ORDERS {
        let row = create_element("div")?;
        row.set_class_name("order-row");

        let name = create_element("strong")?;
        name.set_text_content(Some(item));
        let detail = create_element("span")?;
        detail.set_text_content(Some(advice));

        row.append_child(&name)?;
        row.append_child(&detail)?;
        panel.append_child(&row)?;
    }
    Ok(())
}
