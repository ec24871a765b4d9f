use serde::{Deserialize, Serialize};

/// Aggregate summary served by `GET /dashboard/summary/` for managers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub live_data: LiveData,
    pub financials: Financials,
    pub ai_predictions: AiPredictions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveData {
    pub live_headcount: i64,
    pub total_students: i64,
}

impl LiveData {
    /// Fill percentage for the headcount progress bar, 0..=100.
    pub fn fill_percentage(&self) -> f64 {
        if self.total_students <= 0 {
            return 0.0;
        }
        (self.live_headcount as f64 / self.total_students as f64) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    pub projected_savings_today: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiPredictions {
    #[serde(default)]
    pub prep_sheet: Vec<PrepSheetItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepSheetItem {
    pub item: String,
    pub quantity_kg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_percentage_handles_zero_capacity() {
        let data = LiveData {
            live_headcount: 10,
            total_students: 0,
        };
        assert_eq!(data.fill_percentage(), 0.0);
    }

    #[test]
    fn deserializes_summary_shape() {
        let json = r#"{
            "live_data": {"live_headcount": 1854, "total_students": 2000},
            "financials": {"projected_savings_today": 7300.0},
            "ai_predictions": {"prep_sheet": [{"item": "Rice", "quantity_kg": 120.5}]}
        }"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.live_data.live_headcount, 1854);
        assert_eq!(summary.ai_predictions.prep_sheet.len(), 1);
        assert!((summary.live_data.fill_percentage() - 92.7).abs() < 1e-9);
    }
}
