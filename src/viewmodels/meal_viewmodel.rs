// ============================================================================
// MEAL SYNC VIEWMODEL - attendance state machine
// ============================================================================
// Keeps the per-meal UI state consistent with the backend attendance
// resource. A toggle is a three-step transition: snapshot, speculative
// apply, commit-or-revert. The MealState subscribers repaint the cards on
// every step, so the optimistic write is visible before the request
// settles.
// ============================================================================

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{MealAttendanceState, MealStatus, MealType, Menu};
use crate::services::{ApiError, MealApi};
use crate::state::MealState;

pub struct MealSyncViewModel<A: MealApi> {
    api: A,
    meals: MealState,
}

/// Why a toggle did not commit. `Reverted` carries the snapshot the UI
/// was rolled back to, the other variants left state untouched.
#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("Menu information not available for {0} today.")]
    MenuUnavailable(MealType),

    #[error("{0} cannot be changed right now.")]
    NotReady(MealType),

    #[error("Still saving your previous change for {0}.")]
    InFlight(MealType),

    #[error("Failed to update {meal}. {cause}")]
    Reverted {
        meal: MealType,
        snapshot: MealAttendanceState,
        cause: ApiError,
    },
}

impl ToggleError {
    /// Precondition failures warrant a warning toast; a revert is an
    /// error toast.
    pub fn is_warning(&self) -> bool {
        !matches!(self, ToggleError::Reverted { .. })
    }
}

impl<A: MealApi> MealSyncViewModel<A> {
    pub fn new(api: A, meals: MealState) -> Self {
        Self { api, meals }
    }

    /// Fetch today's menus and skip records and settle all three meal
    /// slots. On any failure every slot becomes `error` and the cause is
    /// returned for the caller to toast; nothing propagates further.
    pub async fn load_today_state(&self, meal_date: &str) -> Result<(), ApiError> {
        self.meals.set_all(|_| MealAttendanceState::loading());

        match self.fetch_day(meal_date).await {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("❌ Could not load today's meal data: {}", e);
                self.meals.set_menus(HashMap::new());
                self.meals.set_all(|_| MealAttendanceState::error());
                Err(e)
            }
        }
    }

    async fn fetch_day(&self, meal_date: &str) -> Result<(), ApiError> {
        let menus = self.api.fetch_menus(meal_date).await?;

        // Unknown meal slots are ignored.
        let mut todays_menus: HashMap<MealType, Menu> = HashMap::new();
        for menu in menus {
            if let Some(meal) = MealType::parse(&menu.meal_type) {
                todays_menus.insert(meal, menu);
            }
        }

        let records = self.api.fetch_attendance(meal_date).await?;

        self.meals.set_menus(todays_menus.clone());
        self.meals.set_all(|meal| {
            let menu_id = todays_menus.get(&meal).map(|m| m.id);
            // Default attending; a matching skip record overrides below.
            match menu_id.and_then(|id| records.iter().find(|r| r.menu == id)) {
                Some(record) => MealAttendanceState::skipped(record.menu, record.id),
                None => MealAttendanceState::attending(menu_id),
            }
        });

        Ok(())
    }

    /// Flip one meal between attending and skipped, optimistically.
    /// Returns the confirmed state on commit; on failure the pre-toggle
    /// snapshot has already been restored.
    pub async fn toggle_meal(&self, meal: MealType) -> Result<MealAttendanceState, ToggleError> {
        let snapshot = self.meals.get(meal);

        let Some(menu_id) = snapshot.menu_id else {
            return Err(ToggleError::MenuUnavailable(meal));
        };

        let target = match snapshot.status {
            MealStatus::Attending => MealStatus::Skipped,
            MealStatus::Skipped => MealStatus::Attending,
            MealStatus::Loading | MealStatus::Error => {
                return Err(ToggleError::NotReady(meal));
            }
        };

        // Attending again requires the skip record we created earlier.
        // Checked before the optimistic write so state stays untouched.
        if target == MealStatus::Attending && snapshot.attendance_id.is_none() {
            return Err(ToggleError::NotReady(meal));
        }

        // Reject overlapping toggles for the same meal; the guard frees
        // the slot when this call settles.
        let Some(_guard) = self.meals.begin_toggle(meal) else {
            return Err(ToggleError::InFlight(meal));
        };

        // Speculative apply: repaint before the request resolves.
        self.meals.set(
            meal,
            MealAttendanceState {
                status: target,
                ..snapshot.clone()
            },
        );

        let result = match target {
            MealStatus::Skipped => self
                .api
                .create_attendance(menu_id)
                .await
                .map(|record| MealAttendanceState::skipped(menu_id, record.id)),
            MealStatus::Attending => {
                // Checked above.
                let attendance_id = snapshot.attendance_id.unwrap_or_default();
                self.api
                    .delete_attendance(attendance_id)
                    .await
                    .map(|()| MealAttendanceState::attending(Some(menu_id)))
            }
            _ => unreachable!("target is always attending or skipped"),
        };

        match result {
            Ok(confirmed) => {
                self.meals.set(meal, confirmed.clone());
                log::info!("✅ {} is now {}", meal.label(), confirmed.status.as_str());
                Ok(confirmed)
            }
            Err(cause) => {
                // Revert to the snapshot, not to a dedicated error state.
                self.meals.set(meal, snapshot.clone());
                log::error!("❌ Toggle for {} failed, reverted: {}", meal, cause);
                Err(ToggleError::Reverted {
                    meal,
                    snapshot,
                    cause,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceRecord;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Scripted backend: per-call success/failure switches, call counters.
    #[derive(Clone, Default)]
    struct ScriptedApi {
        menus: Rc<RefCell<Vec<Menu>>>,
        records: Rc<RefCell<Vec<AttendanceRecord>>>,
        fail_menus: Rc<Cell<bool>>,
        fail_attendance: Rc<Cell<bool>>,
        fail_create: Rc<Cell<bool>>,
        fail_delete: Rc<Cell<bool>>,
        created_id: Rc<Cell<i64>>,
        deletes: Rc<RefCell<Vec<i64>>>,
    }

    impl ScriptedApi {
        fn with_menus(menus: Vec<Menu>) -> Self {
            let api = Self::default();
            *api.menus.borrow_mut() = menus;
            api.created_id.set(9);
            api
        }
    }

    impl MealApi for ScriptedApi {
        async fn fetch_menus(&self, _meal_date: &str) -> Result<Vec<Menu>, ApiError> {
            if self.fail_menus.get() {
                return Err(ApiError::Network("connection refused".to_string()));
            }
            Ok(self.menus.borrow().clone())
        }

        async fn fetch_attendance(&self, _meal_date: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
            if self.fail_attendance.get() {
                return Err(ApiError::Http {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(self.records.borrow().clone())
        }

        async fn create_attendance(&self, menu_id: i64) -> Result<AttendanceRecord, ApiError> {
            if self.fail_create.get() {
                return Err(ApiError::Http {
                    status: 409,
                    message: "Attendance already marked".to_string(),
                });
            }
            Ok(AttendanceRecord {
                id: self.created_id.get(),
                menu: menu_id,
            })
        }

        async fn delete_attendance(&self, attendance_id: i64) -> Result<(), ApiError> {
            if self.fail_delete.get() {
                return Err(ApiError::Network("timed out".to_string()));
            }
            self.deletes.borrow_mut().push(attendance_id);
            Ok(())
        }
    }

    fn menu(id: i64, meal_type: &str) -> Menu {
        Menu {
            id,
            meal_type: meal_type.to_string(),
            items: vec![],
        }
    }

    fn full_day() -> Vec<Menu> {
        vec![menu(1, "Breakfast"), menu(2, "Lunch"), menu(3, "Dinner")]
    }

    #[test]
    fn load_defaults_every_meal_to_attending() {
        let vm = MealSyncViewModel::new(ScriptedApi::with_menus(full_day()), MealState::new());
        block_on(vm.load_today_state("2026-08-31")).unwrap();

        for meal in MealType::ALL {
            let state = vm.meals.get(meal);
            assert_eq!(state.status, MealStatus::Attending);
            assert_eq!(state.attendance_id, None);
            assert!(state.menu_id.is_some());
        }
    }

    #[test]
    fn load_marks_recorded_meals_as_skipped() {
        let api = ScriptedApi::with_menus(full_day());
        api.records
            .borrow_mut()
            .push(AttendanceRecord { id: 42, menu: 2 });
        let vm = MealSyncViewModel::new(api, MealState::new());
        block_on(vm.load_today_state("2026-08-31")).unwrap();

        // skipped iff attendance_id is set
        for meal in MealType::ALL {
            let state = vm.meals.get(meal);
            assert_eq!(
                state.status == MealStatus::Skipped,
                state.attendance_id.is_some()
            );
        }
        assert_eq!(vm.meals.get(MealType::Lunch), MealAttendanceState::skipped(2, 42));
    }

    #[test]
    fn load_failure_puts_all_meals_in_error() {
        let api = ScriptedApi::with_menus(full_day());
        api.fail_attendance.set(true);
        let vm = MealSyncViewModel::new(api, MealState::new());

        assert!(block_on(vm.load_today_state("2026-08-31")).is_err());
        for meal in MealType::ALL {
            assert_eq!(vm.meals.get(meal), MealAttendanceState::error());
        }
    }

    #[test]
    fn load_ignores_unknown_meal_slots() {
        let mut menus = full_day();
        menus.push(menu(4, "Midnight Snack"));
        let vm = MealSyncViewModel::new(ScriptedApi::with_menus(menus), MealState::new());
        block_on(vm.load_today_state("2026-08-31")).unwrap();
        assert_eq!(vm.meals.get(MealType::Dinner).menu_id, Some(3));
    }

    #[test]
    fn toggle_without_menu_warns_and_leaves_state_alone() {
        let vm = MealSyncViewModel::new(ScriptedApi::default(), MealState::new());
        vm.meals
            .set(MealType::Breakfast, MealAttendanceState::attending(None));

        let err = block_on(vm.toggle_meal(MealType::Breakfast)).unwrap_err();
        assert!(matches!(err, ToggleError::MenuUnavailable(MealType::Breakfast)));
        assert!(err.is_warning());
        assert_eq!(
            vm.meals.get(MealType::Breakfast),
            MealAttendanceState::attending(None)
        );
    }

    #[test]
    fn skip_commit_stores_the_server_id() {
        let vm = MealSyncViewModel::new(ScriptedApi::with_menus(full_day()), MealState::new());
        block_on(vm.load_today_state("2026-08-31")).unwrap();

        let confirmed = block_on(vm.toggle_meal(MealType::Breakfast)).unwrap();
        assert_eq!(confirmed, MealAttendanceState::skipped(1, 9));
        assert_eq!(vm.meals.get(MealType::Breakfast), confirmed);
    }

    #[test]
    fn skip_failure_reverts_to_the_exact_snapshot() {
        let api = ScriptedApi::with_menus(full_day());
        let vm = MealSyncViewModel::new(api.clone(), MealState::new());
        block_on(vm.load_today_state("2026-08-31")).unwrap();
        let before = vm.meals.get(MealType::Breakfast);

        api.fail_create.set(true);
        let err = block_on(vm.toggle_meal(MealType::Breakfast)).unwrap_err();

        match err {
            ToggleError::Reverted { snapshot, cause, .. } => {
                assert_eq!(snapshot, before);
                assert!(matches!(cause, ApiError::Http { status: 409, .. }));
            }
            other => panic!("expected revert, got {:?}", other),
        }
        assert_eq!(vm.meals.get(MealType::Breakfast), before);
    }

    #[test]
    fn attend_commit_clears_the_record_id() {
        let api = ScriptedApi::with_menus(full_day());
        api.records
            .borrow_mut()
            .push(AttendanceRecord { id: 42, menu: 2 });
        let vm = MealSyncViewModel::new(api.clone(), MealState::new());
        block_on(vm.load_today_state("2026-08-31")).unwrap();

        let confirmed = block_on(vm.toggle_meal(MealType::Lunch)).unwrap();
        assert_eq!(confirmed, MealAttendanceState::attending(Some(2)));
        assert_eq!(api.deletes.borrow().as_slice(), &[42]);
    }

    #[test]
    fn attend_failure_restores_the_skip_record() {
        let api = ScriptedApi::with_menus(full_day());
        api.records
            .borrow_mut()
            .push(AttendanceRecord { id: 42, menu: 2 });
        let vm = MealSyncViewModel::new(api.clone(), MealState::new());
        block_on(vm.load_today_state("2026-08-31")).unwrap();

        api.fail_delete.set(true);
        let err = block_on(vm.toggle_meal(MealType::Lunch)).unwrap_err();
        assert!(!err.is_warning());
        assert_eq!(vm.meals.get(MealType::Lunch), MealAttendanceState::skipped(2, 42));
    }

    #[test]
    fn optimistic_write_fires_before_commit() {
        let vm = MealSyncViewModel::new(ScriptedApi::with_menus(full_day()), MealState::new());
        block_on(vm.load_today_state("2026-08-31")).unwrap();

        let observed = Rc::new(RefCell::new(Vec::new()));
        let sink = observed.clone();
        let meals = vm.meals.clone();
        vm.meals.subscribe(move || {
            sink.borrow_mut().push(meals.get(MealType::Breakfast).status);
        });

        block_on(vm.toggle_meal(MealType::Breakfast)).unwrap();
        // speculative apply, then commit
        assert_eq!(
            observed.borrow().as_slice(),
            &[MealStatus::Skipped, MealStatus::Skipped]
        );
    }

    #[test]
    fn overlapping_toggle_for_same_meal_is_rejected() {
        let vm = MealSyncViewModel::new(ScriptedApi::with_menus(full_day()), MealState::new());
        block_on(vm.load_today_state("2026-08-31")).unwrap();

        // Simulate an in-flight toggle holding the slot.
        let guard = vm.meals.begin_toggle(MealType::Dinner).unwrap();
        let before = vm.meals.get(MealType::Dinner);

        let err = block_on(vm.toggle_meal(MealType::Dinner)).unwrap_err();
        assert!(matches!(err, ToggleError::InFlight(MealType::Dinner)));
        assert_eq!(vm.meals.get(MealType::Dinner), before);

        drop(guard);
        assert!(block_on(vm.toggle_meal(MealType::Dinner)).is_ok());
    }

    #[test]
    fn toggle_in_error_state_is_not_ready() {
        let vm = MealSyncViewModel::new(ScriptedApi::default(), MealState::new());
        vm.meals.set(
            MealType::Lunch,
            MealAttendanceState {
                status: MealStatus::Error,
                menu_id: Some(2),
                attendance_id: None,
            },
        );
        let err = block_on(vm.toggle_meal(MealType::Lunch)).unwrap_err();
        assert!(matches!(err, ToggleError::NotReady(MealType::Lunch)));
    }
}
