// ============================================================================
// MOCK CLIENT - in-memory demo backend
// ============================================================================
// Stands in for the REST API when the crate is built with
// APP_DATA_SOURCE=mock. Same seam as the live client, deterministic data,
// state kept for the lifetime of the page.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::json;

use crate::models::{
    AiPredictions, AttendanceRecord, DashboardSummary, Financials, LiveData, LoginResponse, Menu,
    MenuItem, PrepSheetItem,
};
use crate::services::error::ApiError;

const TOTAL_STUDENTS: i64 = 2000;
const MEAL_COST_RUPEES: f64 = 50.0;

/// Weekly rotation used to fabricate menus: [breakfast, lunch, dinner] per
/// weekday, Monday first.
const WEEK_DISHES: [[&str; 3]; 7] = [
    ["Poha", "Dal Tadka & Rice", "Paneer Butter Masala"],
    ["Idli Sambar", "Rajma Chawal", "Veg Biryani"],
    ["Aloo Paratha", "Chole Bhature", "Dal Makhani"],
    ["Upma", "Paneer Tikka Bowl", "Veg Pulao"],
    ["Masala Dosa", "Kadhi Chawal", "Malai Kofta"],
    ["Chai & Samosa", "Veg Thali", "Pav Bhaji"],
    ["Puri Bhaji", "Special Thali", "Khichdi"],
];

struct MockState {
    records: RefCell<Vec<AttendanceRecord>>,
    next_id: Cell<i64>,
    offline: Cell<bool>,
}

#[derive(Clone)]
pub struct MockApi {
    inner: Rc<MockState>,
}

thread_local! {
    static SHARED: MockApi = MockApi::new();
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(MockState {
                records: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
                offline: Cell::new(false),
            }),
        }
    }

    /// The page-wide instance, so skip records survive view changes the
    /// way the real backend would.
    pub fn shared() -> Self {
        SHARED.with(|api| api.clone())
    }

    /// Simulate an unreachable backend.
    pub fn set_offline(&self, offline: bool) {
        self.inner.offline.set(offline);
    }

    fn guard(&self) -> Result<(), ApiError> {
        if self.inner.offline.get() {
            Err(ApiError::Network("mock backend is offline".to_string()))
        } else {
            Ok(())
        }
    }

    /// Stable menu id per date + slot.
    fn menu_id(meal_date: &str, slot: usize) -> i64 {
        let seed: i64 = meal_date.bytes().map(|b| b as i64).sum();
        seed * 10 + slot as i64
    }

    fn day_index(meal_date: &str) -> usize {
        chrono::NaiveDate::parse_from_str(meal_date, "%Y-%m-%d")
            .map(|d| d.format("%u").to_string().parse::<usize>().unwrap_or(1) - 1)
            .unwrap_or(0)
    }

    /// Demo login: any non-empty credentials; the role comes from the
    /// email prefix. Returns a token whose payload decodes like the real
    /// JWT would.
    pub fn login(email: &str) -> LoginResponse {
        let role = if email.starts_with("manager") {
            "manager"
        } else {
            "student"
        };
        let user_id = if role == "manager" { 1 } else { 101 };
        LoginResponse {
            access: demo_token(user_id, role, email),
            refresh: Some("demo-refresh".to_string()),
            email: Some(email.to_string()),
            name: None,
        }
    }

    pub async fn fetch_menus(&self, meal_date: &str) -> Result<Vec<Menu>, ApiError> {
        self.guard()?;
        let dishes = WEEK_DISHES[Self::day_index(meal_date)];
        let meal_types = ["Breakfast", "Lunch", "Dinner"];
        Ok(meal_types
            .iter()
            .enumerate()
            .map(|(slot, meal_type)| Menu {
                id: Self::menu_id(meal_date, slot),
                meal_type: meal_type.to_string(),
                items: vec![MenuItem {
                    name: dishes[slot].to_string(),
                }],
            })
            .collect())
    }

    pub async fn fetch_attendance(&self, meal_date: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.guard()?;
        let day_ids: Vec<i64> = (0..3).map(|slot| Self::menu_id(meal_date, slot)).collect();
        Ok(self
            .inner
            .records
            .borrow()
            .iter()
            .filter(|record| day_ids.contains(&record.menu))
            .cloned()
            .collect())
    }

    pub async fn create_attendance(&self, menu_id: i64) -> Result<AttendanceRecord, ApiError> {
        self.guard()?;
        let mut records = self.inner.records.borrow_mut();
        if records.iter().any(|record| record.menu == menu_id) {
            return Err(ApiError::Http {
                status: 409,
                message: "Attendance already marked".to_string(),
            });
        }
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let record = AttendanceRecord { id, menu: menu_id };
        records.push(record.clone());
        Ok(record)
    }

    pub async fn delete_attendance(&self, attendance_id: i64) -> Result<(), ApiError> {
        self.guard()?;
        let mut records = self.inner.records.borrow_mut();
        let before = records.len();
        records.retain(|record| record.id != attendance_id);
        if records.len() == before {
            return Err(ApiError::Http {
                status: 404,
                message: "No attendance record found".to_string(),
            });
        }
        Ok(())
    }

    pub async fn fetch_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.guard()?;
        let skipped = self.inner.records.borrow().len() as i64;
        let live_headcount = (TOTAL_STUDENTS - skipped).max(0);
        let scale = live_headcount as f64 / TOTAL_STUDENTS as f64;
        Ok(DashboardSummary {
            live_data: LiveData {
                live_headcount,
                total_students: TOTAL_STUDENTS,
            },
            financials: Financials {
                projected_savings_today: skipped as f64 * MEAL_COST_RUPEES,
            },
            ai_predictions: AiPredictions {
                prep_sheet: vec![
                    PrepSheetItem {
                        item: "Rice".to_string(),
                        quantity_kg: 120.0 * scale,
                    },
                    PrepSheetItem {
                        item: "Paneer".to_string(),
                        quantity_kg: 45.0 * scale,
                    },
                    PrepSheetItem {
                        item: "Dal".to_string(),
                        quantity_kg: 80.0 * scale,
                    },
                ],
            },
        })
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Unsigned demo token with a JWT-shaped payload so the normal claim
/// decoding path works against mock data too.
fn demo_token(user_id: i64, role: &str, email: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(json!({ "alg": "none", "typ": "JWT" }).to_string());
    let payload = URL_SAFE_NO_PAD.encode(
        json!({ "user_id": user_id, "role": role, "email": email }).to_string(),
    );
    format!("{}.{}.demo", header, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn create_then_delete_roundtrip() {
        let api = MockApi::new();
        let record = block_on(api.create_attendance(31)).unwrap();
        assert_eq!(block_on(api.fetch_attendance("2026-08-31")).is_ok(), true);
        block_on(api.delete_attendance(record.id)).unwrap();
        assert_eq!(
            block_on(api.delete_attendance(record.id)),
            Err(ApiError::Http {
                status: 404,
                message: "No attendance record found".to_string()
            })
        );
    }

    #[test]
    fn duplicate_skip_is_conflict() {
        let api = MockApi::new();
        block_on(api.create_attendance(5)).unwrap();
        let err = block_on(api.create_attendance(5)).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 409, .. }));
    }

    #[test]
    fn offline_mode_fails_every_call() {
        let api = MockApi::new();
        api.set_offline(true);
        assert!(matches!(
            block_on(api.fetch_menus("2026-08-31")),
            Err(ApiError::Network(_))
        ));
    }

    #[test]
    fn menu_ids_are_stable_per_date() {
        let api = MockApi::new();
        let first = block_on(api.fetch_menus("2026-08-31")).unwrap();
        let second = block_on(api.fetch_menus("2026-08-31")).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
