use serde::{Deserialize, Serialize};
use std::fmt;

/// Attendance record as served by the backend. A record exists only for
/// meals the student has decided to skip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub menu: i64,
}

/// The three fixed meal slots of a canteen day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    /// Lowercase identifier, also used as the DOM id of the meal section.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }

    /// Display label ("Breakfast", "Lunch", "Dinner").
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        }
    }

    /// Parse the backend's `meal_type` string (case-insensitive). Unknown
    /// slots are ignored by the caller.
    pub fn parse(value: &str) -> Option<MealType> {
        match value.to_ascii_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            _ => None,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attendance status of one meal slot as shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealStatus {
    /// Initial state while today's data is being fetched.
    Loading,
    /// Default: the student will attend (no skip record exists).
    Attending,
    /// A skip record exists on the backend.
    Skipped,
    /// Today's data could not be loaded at all.
    Error,
}

impl MealStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealStatus::Loading => "loading",
            MealStatus::Attending => "attending",
            MealStatus::Skipped => "skipped",
            MealStatus::Error => "error",
        }
    }

    pub fn badge_text(&self) -> &'static str {
        match self {
            MealStatus::Attending => "Attending",
            MealStatus::Skipped => "Skipped",
            MealStatus::Loading | MealStatus::Error => "...",
        }
    }
}

/// Per-meal attendance state kept by the student dashboard.
///
/// Invariant: `status == Skipped` iff `attendance_id` is `Some`;
/// `status == Attending` implies `attendance_id == None`.
#[derive(Debug, Clone, PartialEq)]
pub struct MealAttendanceState {
    pub status: MealStatus,
    pub menu_id: Option<i64>,
    pub attendance_id: Option<i64>,
}

impl MealAttendanceState {
    pub fn loading() -> Self {
        Self {
            status: MealStatus::Loading,
            menu_id: None,
            attendance_id: None,
        }
    }

    pub fn attending(menu_id: Option<i64>) -> Self {
        Self {
            status: MealStatus::Attending,
            menu_id,
            attendance_id: None,
        }
    }

    pub fn skipped(menu_id: i64, attendance_id: i64) -> Self {
        Self {
            status: MealStatus::Skipped,
            menu_id: Some(menu_id),
            attendance_id: Some(attendance_id),
        }
    }

    pub fn error() -> Self {
        Self {
            status: MealStatus::Error,
            menu_id: None,
            attendance_id: None,
        }
    }

    /// Whether the skip/attend button should be clickable.
    pub fn togglable(&self) -> bool {
        matches!(self.status, MealStatus::Attending | MealStatus::Skipped)
    }
}

impl Default for MealAttendanceState {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_type_parse_is_case_insensitive() {
        assert_eq!(MealType::parse("Lunch"), Some(MealType::Lunch));
        assert_eq!(MealType::parse("BREAKFAST"), Some(MealType::Breakfast));
        assert_eq!(MealType::parse("brunch"), None);
    }

    #[test]
    fn skipped_state_carries_both_ids() {
        let state = MealAttendanceState::skipped(3, 42);
        assert_eq!(state.status, MealStatus::Skipped);
        assert_eq!(state.menu_id, Some(3));
        assert_eq!(state.attendance_id, Some(42));
    }

    #[test]
    fn only_settled_states_are_togglable() {
        assert!(MealAttendanceState::attending(Some(1)).togglable());
        assert!(MealAttendanceState::skipped(1, 2).togglable());
        assert!(!MealAttendanceState::loading().togglable());
        assert!(!MealAttendanceState::error().togglable());
    }
}
