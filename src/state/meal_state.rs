// ============================================================================
// MEAL STATE - per-meal attendance map shared between views and viewmodel
// ============================================================================

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::models::{MealAttendanceState, MealType, Menu};

/// Shared per-meal attendance state. Subscribers fire on every write, so
/// the display refreshes on the optimistic apply as well as on
/// commit/revert.
#[derive(Clone)]
pub struct MealState {
    statuses: Rc<RefCell<HashMap<MealType, MealAttendanceState>>>,
    menus: Rc<RefCell<HashMap<MealType, Menu>>>,
    in_flight: Rc<RefCell<HashSet<MealType>>>,
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl MealState {
    pub fn new() -> Self {
        Self {
            statuses: Rc::new(RefCell::new(HashMap::new())),
            menus: Rc::new(RefCell::new(HashMap::new())),
            in_flight: Rc::new(RefCell::new(HashSet::new())),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get(&self, meal: MealType) -> MealAttendanceState {
        self.statuses
            .borrow()
            .get(&meal)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set(&self, meal: MealType, state: MealAttendanceState) {
        self.statuses.borrow_mut().insert(meal, state);
        self.notify();
    }

    /// Write all three slots at once (initial load / failure paths).
    pub fn set_all(&self, make: impl Fn(MealType) -> MealAttendanceState) {
        {
            let mut statuses = self.statuses.borrow_mut();
            for meal in MealType::ALL {
                statuses.insert(meal, make(meal));
            }
        }
        self.notify();
    }

    pub fn menu(&self, meal: MealType) -> Option<Menu> {
        self.menus.borrow().get(&meal).cloned()
    }

    pub fn set_menus(&self, menus: HashMap<MealType, Menu>) {
        *self.menus.borrow_mut() = menus;
    }

    /// Claim the per-meal toggle slot. Returns `None` while another toggle
    /// for the same meal is still in flight; the guard releases the slot
    /// when dropped.
    pub fn begin_toggle(&self, meal: MealType) -> Option<InFlightGuard> {
        if !self.in_flight.borrow_mut().insert(meal) {
            return None;
        }
        Some(InFlightGuard {
            meal,
            in_flight: self.in_flight.clone(),
        })
    }

    pub fn is_in_flight(&self, meal: MealType) -> bool {
        self.in_flight.borrow().contains(&meal)
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    /// Discard everything on logout or page change.
    pub fn reset(&self) {
        self.statuses.borrow_mut().clear();
        self.menus.borrow_mut().clear();
        self.in_flight.borrow_mut().clear();
        self.notify();
    }
}

impl Default for MealState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct InFlightGuard {
    meal: MealType,
    in_flight: Rc<RefCell<HashSet<MealType>>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.borrow_mut().remove(&self.meal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn unknown_meal_defaults_to_loading() {
        let state = MealState::new();
        assert_eq!(state.get(MealType::Lunch), MealAttendanceState::loading());
    }

    #[test]
    fn in_flight_guard_is_exclusive_per_meal() {
        let state = MealState::new();
        let guard = state.begin_toggle(MealType::Dinner).unwrap();
        assert!(state.begin_toggle(MealType::Dinner).is_none());
        // other meals are unaffected
        assert!(state.begin_toggle(MealType::Lunch).is_some());
        drop(guard);
        assert!(state.begin_toggle(MealType::Dinner).is_some());
    }

    #[test]
    fn writes_notify_subscribers() {
        let state = MealState::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        state.subscribe(move || counter.set(counter.get() + 1));

        state.set(MealType::Breakfast, MealAttendanceState::attending(Some(1)));
        state.set_all(|_| MealAttendanceState::error());
        assert_eq!(fired.get(), 2);
    }
}
