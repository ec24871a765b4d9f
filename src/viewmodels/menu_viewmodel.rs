// ============================================================================
// MENU VIEWMODEL - weekly menu browsing
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::Menu;
use crate::services::{ApiError, MealApi};

/// Fetches menus per day through the same menus endpoint the student
/// home uses, cached by ISO date for the lifetime of the dashboard.
pub struct MenuViewModel<A: MealApi> {
    api: A,
    cache: Rc<RefCell<HashMap<String, Vec<Menu>>>>,
}

impl<A: MealApi> MenuViewModel<A> {
    pub fn new(api: A, cache: Rc<RefCell<HashMap<String, Vec<Menu>>>>) -> Self {
        Self { api, cache }
    }

    pub async fn menus_for(&self, meal_date: &str) -> Result<Vec<Menu>, ApiError> {
        if let Some(cached) = self.cache.borrow().get(meal_date) {
            return Ok(cached.clone());
        }

        let menus = self.api.fetch_menus(meal_date).await?;
        self.cache
            .borrow_mut()
            .insert(meal_date.to_string(), menus.clone());
        Ok(menus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceRecord;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[derive(Clone, Default)]
    struct CountingApi {
        calls: Rc<Cell<u32>>,
    }

    impl MealApi for CountingApi {
        async fn fetch_menus(&self, _meal_date: &str) -> Result<Vec<Menu>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            Ok(vec![Menu {
                id: 1,
                meal_type: "Lunch".to_string(),
                items: vec![],
            }])
        }

        async fn fetch_attendance(&self, _: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
            Ok(vec![])
        }

        async fn create_attendance(&self, _: i64) -> Result<AttendanceRecord, ApiError> {
            unimplemented!("not used by menu browsing")
        }

        async fn delete_attendance(&self, _: i64) -> Result<(), ApiError> {
            unimplemented!("not used by menu browsing")
        }
    }

    #[test]
    fn second_lookup_hits_the_cache() {
        let api = CountingApi::default();
        let vm = MenuViewModel::new(api.clone(), Rc::new(RefCell::new(HashMap::new())));

        block_on(vm.menus_for("2026-08-31")).unwrap();
        block_on(vm.menus_for("2026-08-31")).unwrap();
        assert_eq!(api.calls.get(), 1);

        block_on(vm.menus_for("2026-09-01")).unwrap();
        assert_eq!(api.calls.get(), 2);
    }
}
