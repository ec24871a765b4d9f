// ============================================================================
// STUDENT HOME - today's three meal cards with optimistic skip/attend
// ============================================================================
// The cards are painted from MealState at render time and patched in place
// by `refresh_meal_cards`, driven by the MealState subscription registered
// at startup. A full re-render is never needed for a toggle.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{get_element_by_id, on_click, set_class_name, ElementBuilder};
use crate::models::{MealStatus, MealType};
use crate::services::backend;
use crate::state::AppState;
use crate::utils::time::{parse_iso, today_iso};
use crate::viewmodels::{MealSyncViewModel, ToggleError};
use crate::views::shared::{report_api_error, show_confirm, show_toast, ToastKind};

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let date = today_iso();
    let date_label = parse_iso(&date)
        .map(|d| d.format("%A, %e %B").to_string())
        .unwrap_or_else(|| date.clone());

    let heading = ElementBuilder::new("h2")?.text("Today's Meals").build();
    let subheading = ElementBuilder::new("p")?
        .class("section-subtitle")
        .text(&format!(
            "{} · Let the kitchen know if you'll be eating",
            date_label
        ))
        .build();

    let cards = ElementBuilder::new("div")?.class("meal-cards").build();
    for meal in MealType::ALL {
        cards.append_child(&render_meal_card(state, meal)?.into())?;
    }

    Ok(ElementBuilder::new("section")?
        .class("student-home")
        .child(heading)?
        .child(subheading)?
        .child(cards)?
        .build())
}

fn render_meal_card(state: &AppState, meal: MealType) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h3")?
        .class("meal-title")
        .text(meal.label())
        .build();
    let dish = ElementBuilder::new("p")?
        .class("meal-dish")
        .id(&format!("mealDish-{}", meal))?
        .build();
    let badge = ElementBuilder::new("span")?
        .id(&format!("mealBadge-{}", meal))?
        .build();
    let button = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .id(&format!("mealBtn-{}", meal))?
        .build();

    {
        let state = state.clone();
        on_click(&button, move |_| request_toggle(&state, meal))?;
    }

    let card = ElementBuilder::new("div")?
        .id(&format!("mealCard-{}", meal))?
        .child(title)?
        .child(badge.clone())?
        .child(dish.clone())?
        .child(button.clone())?
        .build();

    // Initial paint, before the card is attached anywhere.
    paint_meal_card(state, meal, &card, &badge, &dish, &button);
    Ok(card)
}

/// Confirm-gated toggle. The viewmodel does the optimistic work; this
/// only decides the dialog copy and surfaces the outcome.
fn request_toggle(state: &AppState, meal: MealType) {
    let current = state.meals.get(meal);
    if !current.togglable() {
        show_toast(
            &format!("{} cannot be changed right now.", meal.label()),
            ToastKind::Warning,
        );
        return;
    }

    let (title, message) = if current.status == MealStatus::Skipped {
        (
            format!("Attend {}?", meal.label()),
            format!("You'll be counted back in for {} today.", meal.label()),
        )
    } else {
        (
            format!("Skip {}?", meal.label()),
            format!(
                "The kitchen will prepare less food if you skip {} today.",
                meal.label()
            ),
        )
    };

    let state_for_action = state.clone();
    show_confirm(state, &title, &message, move || {
        spawn_local(async move {
            let vm = MealSyncViewModel::new(backend(), state_for_action.meals.clone());
            match vm.toggle_meal(meal).await {
                Ok(confirmed) => {
                    let verb = if confirmed.status == MealStatus::Skipped {
                        "skipped"
                    } else {
                        "back on"
                    };
                    show_toast(&format!("{} {}!", meal.label(), verb), ToastKind::Success);
                }
                Err(ToggleError::Reverted { cause, .. }) => {
                    if cause.is_unauthorized() {
                        report_api_error(&state_for_action, &cause);
                    } else {
                        show_toast(
                            &format!(
                                "Failed to update {}. Your selection was restored.",
                                meal.label()
                            ),
                            ToastKind::Error,
                        );
                    }
                }
                Err(e) => show_toast(&e.to_string(), ToastKind::Warning),
            }
        });
    });
}

/// Patch the three cards to match MealState. Safe to call when the cards
/// are not in the DOM (other view active); every lookup is optional.
pub fn refresh_meal_cards(state: &AppState) {
    for meal in MealType::ALL {
        let (card, badge, dish, button) = (
            get_element_by_id(&format!("mealCard-{}", meal)),
            get_element_by_id(&format!("mealBadge-{}", meal)),
            get_element_by_id(&format!("mealDish-{}", meal)),
            get_element_by_id(&format!("mealBtn-{}", meal)),
        );
        if let (Some(card), Some(badge), Some(dish), Some(button)) = (card, badge, dish, button) {
            paint_meal_card(state, meal, &card, &badge, &dish, &button);
        }
    }
}

fn paint_meal_card(
    state: &AppState,
    meal: MealType,
    card: &Element,
    badge: &Element,
    dish: &Element,
    button: &Element,
) {
    let attendance = state.meals.get(meal);

    set_class_name(
        card,
        &format!("meal-card status-{}", attendance.status.as_str()),
    );

    badge.set_text_content(Some(attendance.status.badge_text()));
    set_class_name(
        badge,
        &format!("meal-badge badge-{}", attendance.status.as_str()),
    );

    let dish_text = match attendance.status {
        MealStatus::Loading => "Loading…".to_string(),
        MealStatus::Error => "Could not load today's menu".to_string(),
        _ => state
            .meals
            .menu(meal)
            .map(|m| m.headline_dish().to_string())
            .unwrap_or_else(|| "Not Available".to_string()),
    };
    dish.set_text_content(Some(&dish_text));

    let label = match attendance.status {
        MealStatus::Attending => "Skip this meal",
        MealStatus::Skipped => "Attend again",
        MealStatus::Loading | MealStatus::Error => "...",
    };
    button.set_text_content(Some(label));
    if attendance.togglable() && !state.meals.is_in_flight(meal) {
        let _ = button.remove_attribute("disabled");
    } else {
        let _ = button.set_attribute("disabled", "disabled");
    }
}
