// ============================================================================
// CONFIRM MODAL - one shared dialog gating destructive actions
// ============================================================================
// The dialog holds at most one pending callback (in AppState); showing a
// new confirmation replaces an unconfirmed one. Confirm runs the callback,
// cancel discards it, both close the dialog.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{add_class, get_element_by_id, on_click, remove_class, ElementBuilder};
use crate::state::AppState;

/// Build the (hidden) modal; rendered once per page render, under the root.
pub fn render_confirm_modal(state: &AppState) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h3")?.id("modalTitle")?.build();
    let message = ElementBuilder::new("p")?.id("modalMessage")?.build();

    let cancel_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .id("modalCancel")?
        .text("Cancel")
        .build();
    let confirm_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .id("modalConfirm")?
        .text("Confirm")
        .build();

    {
        let state = state.clone();
        on_click(&cancel_btn, move |_| {
            state.clear_pending_action();
            close_modal();
        })?;
    }
    {
        let state = state.clone();
        on_click(&confirm_btn, move |_| {
            let action = state.take_pending_action();
            close_modal();
            if let Some(action) = action {
                action();
            }
        })?;
    }

    let actions = ElementBuilder::new("div")?
        .class("modal-actions")
        .child(cancel_btn)?
        .child(confirm_btn)?
        .build();

    let dialog = ElementBuilder::new("div")?
        .class("modal-dialog")
        .child(title)?
        .child(message)?
        .child(actions)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("modal-overlay hidden")
        .id("confirmModal")?
        .child(dialog)?
        .build())
}

/// Stash the action and reveal the dialog with the given copy.
pub fn show_confirm<F>(state: &AppState, title: &str, message: &str, action: F)
where
    F: FnOnce() + 'static,
{
    state.set_pending_action(Box::new(action));

    if let Some(el) = get_element_by_id("modalTitle") {
        el.set_text_content(Some(title));
    }
    if let Some(el) = get_element_by_id("modalMessage") {
        el.set_text_content(Some(message));
    }
    if let Some(overlay) = get_element_by_id("confirmModal") {
        let _ = remove_class(&overlay, "hidden");
    }
}

fn close_modal() {
    if let Some(overlay) = get_element_by_id("confirmModal") {
        let _ = add_class(&overlay, "hidden");
    }
}
