// ============================================================================
// NOTIFICATION - transient toast messages
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, create_element, document, set_class_name, set_style};
use crate::utils::constants::TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "❌",
        }
    }
}

/// Show a toast in the top-right corner; slides in, auto-dismisses.
/// Failures here are swallowed, a lost toast is not worth surfacing.
pub fn show_toast(message: &str, kind: ToastKind) {
    log::info!("🔔 [{}] {}", kind.as_str(), message);
    if let Err(e) = build_toast(message, kind) {
        log::warn!("⚠️ Could not render toast: {:?}", e);
    }
}

fn build_toast(message: &str, kind: ToastKind) -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("No document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body"))?;

    let toast = create_element("div")?;
    set_class_name(&toast, &format!("notification notification-{}", kind.as_str()));
    toast.set_text_content(Some(&format!("{} {}", kind.icon(), message)));

    set_style(&toast, "position", "fixed")?;
    set_style(&toast, "top", "20px")?;
    set_style(&toast, "right", "20px")?;
    set_style(&toast, "z-index", "2000")?;
    set_style(&toast, "max-width", "300px")?;
    set_style(&toast, "transform", "translateX(120%)")?;
    set_style(&toast, "transition", "transform 0.3s ease")?;

    append_child(&body.clone().into(), &toast)?;

    // Slide in on the next tick, slide out and drop after the lifetime.
    {
        let toast = toast.clone();
        Timeout::new(10, move || {
            let _ = set_style(&toast, "transform", "translateX(0)");
        })
        .forget();
    }
    {
        let toast: Element = toast;
        Timeout::new(TOAST_DURATION_MS, move || {
            let _ = set_style(&toast, "transform", "translateX(120%)");
            let inner = toast.clone();
            Timeout::new(300, move || {
                inner.remove();
            })
            .forget();
        })
        .forget();
    }

    Ok(())
}
