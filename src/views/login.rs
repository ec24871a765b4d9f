// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::app;
use crate::dom::{get_element_by_id, on_submit, ElementBuilder};
use crate::services::auth_service;
use crate::state::AppState;
use crate::views::shared::{show_toast, ToastKind};

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h1")?
        .class("login-title")
        .text("🍛 Annapurna AI")
        .build();
    let subtitle = ElementBuilder::new("p")?
        .class("login-subtitle")
        .text("Smart mess management for your campus")
        .build();

    let email = ElementBuilder::new("input")?
        .class("form-input")
        .id("loginEmail")?
        .attr("type", "email")?
        .attr("placeholder", "Email")?
        .attr("autocomplete", "username")?
        .build();
    let password = ElementBuilder::new("input")?
        .class("form-input")
        .id("loginPassword")?
        .attr("type", "password")?
        .attr("placeholder", "Password")?
        .attr("autocomplete", "current-password")?
        .build();
    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary btn-block")
        .attr("type", "submit")?
        .text("Sign In")
        .build();

    let hint = ElementBuilder::new("p")?
        .class("login-hint")
        .text("Demo: any password; use a manager@… email for the manager view")
        .build();

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .id("loginForm")?
        .child(email)?
        .child(password)?
        .child(submit)?
        .build();

    {
        let state = state.clone();
        on_submit(&form, move |event| {
            event.prevent_default();
            submit_login(&state);
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("login-container")
        .child(
            ElementBuilder::new("div")?
                .class("login-card")
                .child(heading)?
                .child(subtitle)?
                .child(form)?
                .child(hint)?
                .build(),
        )?
        .build())
}

fn submit_login(state: &AppState) {
    let email = input_value("loginEmail");
    let password = input_value("loginPassword");

    let state = state.clone();
    spawn_local(async move {
        match auth_service::login(email.trim(), &password).await {
            Ok(session) => {
                show_toast(&format!("Welcome, {}!", session.display_name()), ToastKind::Success);
                app::enter_dashboard(&state, session);
            }
            Err(e) => show_toast(&e.to_string(), ToastKind::Error),
        }
    });
}

fn input_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
