// ============================================================================
// FEEDBACK & REWARDS - star ratings earn points, points buy rewards
// ============================================================================
// Demo state only: points live in AppState and reset at logout. The
// backend has no feedback resource yet.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{add_class, get_element_by_id, on_click, remove_class, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::feedback_viewmodel::{can_submit, points_for_rating, redeem};
use crate::views::shared::{show_confirm, show_toast, ToastKind};

const TAGS: [&str; 5] = ["Tasty", "Too Spicy", "Fresh", "Cold", "Portion Size"];
const REWARDS: [(&str, u32); 2] = [("Free Special Meal", 200), ("Canteen Voucher ₹50", 100)];

pub fn render_feedback(state: &AppState) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h2")?.text("Feedback & Rewards").build();

    let points = ElementBuilder::new("div")?
        .class("points-banner")
        .child(
            ElementBuilder::new("span")?
                .class("points-value")
                .id("totalPoints")?
                .text(&state.feedback_points.borrow().to_string())
                .build(),
        )?
        .child(ElementBuilder::new("span")?.text(" reward points").build())?
        .build();

    // Star rating row.
    let stars = ElementBuilder::new("div")?.class("star-row").build();
    for rating in 1u8..=5 {
        let star = ElementBuilder::new("button")?
            .class(star_class(rating, *state.selected_rating.borrow()))
            .id(&format!("starBtn-{}", rating))?
            .text("★")
            .build();
        let state = state.clone();
        on_click(&star, move |_| {
            *state.selected_rating.borrow_mut() = rating;
            repaint_stars(rating);
        })?;
        stars.append_child(&star)?;
    }

    // Tag chips.
    let chips = ElementBuilder::new("div")?.class("tag-row").build();
    for tag in TAGS {
        let selected = state.selected_tags.borrow().iter().any(|t| t == tag);
        let chip = ElementBuilder::new("button")?
            .class(if selected { "tag-chip active" } else { "tag-chip" })
            .text(tag)
            .build();
        let state = state.clone();
        let chip_el = chip.clone();
        on_click(&chip, move |_| toggle_tag(&state, tag, &chip_el))?;
        chips.append_child(&chip)?;
    }

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Submit Feedback")
        .build();
    {
        let state = state.clone();
        on_click(&submit, move |_| submit_feedback(&state))?;
    }

    let form = ElementBuilder::new("div")?
        .class("feedback-card")
        .child(ElementBuilder::new("h3")?.text("Rate today's meal").build())?
        .child(stars)?
        .child(chips)?
        .child(submit)?
        .build();

    // Rewards catalogue.
    let rewards = ElementBuilder::new("div")?.class("rewards-card").build();
    rewards.append_child(&ElementBuilder::new("h3")?.text("Redeem points").build())?;
    for (name, cost) in REWARDS {
        let redeem_btn = ElementBuilder::new("button")?
            .class("btn btn-outline")
            .text(&format!("{} · {} pts", name, cost))
            .build();
        let state = state.clone();
        on_click(&redeem_btn, move |_| request_redeem(&state, name, cost))?;
        rewards.append_child(&redeem_btn)?;
    }

    Ok(ElementBuilder::new("section")?
        .class("feedback-view")
        .child(heading)?
        .child(points)?
        .child(form)?
        .child(rewards)?
        .build())
}

fn star_class(star: u8, selected: u8) -> &'static str {
    if star <= selected {
        "star-btn filled"
    } else {
        "star-btn"
    }
}

fn repaint_stars(selected: u8) {
    for star in 1u8..=5 {
        if let Some(button) = get_element_by_id(&format!("starBtn-{}", star)) {
            if star <= selected {
                let _ = add_class(&button, "filled");
            } else {
                let _ = remove_class(&button, "filled");
            }
        }
    }
}

fn toggle_tag(state: &AppState, tag: &str, chip: &Element) {
    let mut tags = state.selected_tags.borrow_mut();
    if let Some(index) = tags.iter().position(|t| t == tag) {
        tags.remove(index);
        let _ = remove_class(chip, "active");
    } else {
        tags.push(tag.to_string());
        let _ = add_class(chip, "active");
    }
}

fn submit_feedback(state: &AppState) {
    let rating = *state.selected_rating.borrow();
    if !can_submit(rating) {
        show_toast("Please select a star rating first.", ToastKind::Warning);
        return;
    }

    let earned = points_for_rating(rating);
    {
        let mut points = state.feedback_points.borrow_mut();
        *points += earned;
    }
    *state.selected_rating.borrow_mut() = 0;
    state.selected_tags.borrow_mut().clear();

    repaint_stars(0);
    refresh_points(state);
    log::info!("⭐ Feedback submitted: {} stars, +{} points", rating, earned);
    show_toast(
        &format!("Thanks for the feedback! +{} points", earned),
        ToastKind::Success,
    );
}

fn request_redeem(state: &AppState, name: &'static str, cost: u32) {
    let state_for_action = state.clone();
    show_confirm(
        state,
        "Redeem reward?",
        &format!("Spend {} points on {}?", cost, name),
        move || {
            let balance = *state_for_action.feedback_points.borrow();
            match redeem(balance, cost) {
                Some(remaining) => {
                    *state_for_action.feedback_points.borrow_mut() = remaining;
                    refresh_points(&state_for_action);
                    show_toast(&format!("{} redeemed!", name), ToastKind::Success);
                }
                None => show_toast(
                    &format!("Not enough points for {} ({} needed).", name, cost),
                    ToastKind::Warning,
                ),
            }
        },
    );
}

fn refresh_points(state: &AppState) {
    if let Some(el) = get_element_by_id("totalPoints") {
        el.set_text_content(Some(&state.feedback_points.borrow().to_string()));
    }
}
