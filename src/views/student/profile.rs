// ============================================================================
// PROFILE PANEL
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app;
use crate::dom::{on_click, ElementBuilder};
use crate::state::AppState;

pub fn render_profile(state: &AppState) -> Result<Element, JsValue> {
    let Some(session) = state.auth.get_session() else {
        // Unreachable behind the router, but render something sane.
        return Ok(ElementBuilder::new("section")?
            .class("profile-view")
            .text("Not logged in.")
            .build());
    };

    let heading = ElementBuilder::new("h2")?.text("My Profile").build();

    let card = ElementBuilder::new("div")?
        .class("profile-card")
        .child(profile_row("Name", session.display_name())?)?
        .child(profile_row("Email", &session.email)?)?
        .child(profile_row("Role", session.role.as_str())?)?
        .child(profile_row("Student ID", &session.user_id.to_string())?)?
        .build();

    let logout = ElementBuilder::new("button")?
        .class("btn btn-danger")
        .text("Log Out")
        .build();
    {
        let state = state.clone();
        on_click(&logout, move |_| app::logout(&state))?;
    }

    Ok(ElementBuilder::new("section")?
        .class("profile-view")
        .child(heading)?
        .child(card)?
        .child(logout)?
        .build())
}

fn profile_row(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("profile-row")
        .child(
            ElementBuilder::new("span")?
                .class("profile-label")
                .text(label)
                .build(),
        )?
        .child(
            ElementBuilder::new("span")?
                .class("profile-value")
                .text(value)
                .build(),
        )?
        .build())
}
