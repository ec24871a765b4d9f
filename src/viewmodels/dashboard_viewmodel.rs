// ============================================================================
// DASHBOARD VIEWMODEL - manager metrics
// ============================================================================

use crate::models::{DashboardSummary, PrepSheetItem};
use crate::services::{ApiError, DashboardApi};

pub struct DashboardViewModel<A: DashboardApi> {
    api: A,
}

impl<A: DashboardApi> DashboardViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// One request, one response; no retry. The caller surfaces failures
    /// as a single toast.
    pub async fn load_summary(&self) -> Result<DashboardSummary, ApiError> {
        let summary = self.api.fetch_summary().await?;
        log::info!(
            "📊 Summary: {}/{} attending, prep sheet {} items",
            summary.live_data.live_headcount,
            summary.live_data.total_students,
            summary.ai_predictions.prep_sheet.len()
        );
        Ok(summary)
    }
}

/// Client-side random walk for the "live" headcount between refreshes.
/// `jitter` is in [-2, 2]; the result stays within 0..=total.
pub fn simulated_headcount(current: i64, total: i64, jitter: i64) -> i64 {
    (current + jitter).clamp(0, total.max(0))
}

/// Raw-material hint column; the backend does not serve one yet.
pub fn raw_materials_for(item: &str) -> &'static str {
    if item == "Rice" {
        "Basmati Rice"
    } else {
        "Paneer, Tomato, etc."
    }
}

/// Assemble the prep sheet as CSV for the export button.
pub fn prep_sheet_csv(items: &[PrepSheetItem]) -> String {
    let mut csv = String::from("Menu Item,Recommended Quantity,Raw Materials\n");
    for item in items {
        csv.push_str(&format!(
            "\"{}\",\"{:.2} kg\",\"{}\"\n",
            item.item.replace('"', "\"\""),
            item.quantity_kg,
            raw_materials_for(&item.item)
        ));
    }
    csv
}

/// Rupee formatting for the savings metric.
pub fn format_rupees(amount: f64) -> String {
    format!("₹{:.0}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AiPredictions, Financials, LiveData};
    use crate::services::MockApi;
    use futures::executor::block_on;

    #[test]
    fn headcount_walk_is_clamped_to_capacity() {
        assert_eq!(simulated_headcount(1999, 2000, 2), 2000);
        assert_eq!(simulated_headcount(1, 2000, -2), 0);
        assert_eq!(simulated_headcount(1500, 2000, -1), 1499);
    }

    #[test]
    fn csv_has_header_and_quoted_rows() {
        let items = vec![
            PrepSheetItem {
                item: "Rice".to_string(),
                quantity_kg: 120.456,
            },
            PrepSheetItem {
                item: "Paneer".to_string(),
                quantity_kg: 45.0,
            },
        ];
        let csv = prep_sheet_csv(&items);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Menu Item,Recommended Quantity,Raw Materials");
        assert_eq!(lines[1], "\"Rice\",\"120.46 kg\",\"Basmati Rice\"");
        assert_eq!(lines[2], "\"Paneer\",\"45.00 kg\",\"Paneer, Tomato, etc.\"");
    }

    #[test]
    fn csv_escapes_embedded_quotes() {
        let items = vec![PrepSheetItem {
            item: "Aloo \"special\"".to_string(),
            quantity_kg: 1.0,
        }];
        let csv = prep_sheet_csv(&items);
        assert!(csv.contains("\"Aloo \"\"special\"\"\""));
    }

    #[test]
    fn rupees_are_rounded_to_whole_units() {
        assert_eq!(format_rupees(7300.4), "₹7300");
    }

    #[test]
    fn summary_loads_from_the_mock_backend() {
        let vm = DashboardViewModel::new(MockApi::new());
        let summary = block_on(vm.load_summary()).unwrap();
        assert_eq!(
            summary.live_data,
            LiveData {
                live_headcount: 2000,
                total_students: 2000
            }
        );
        assert_eq!(
            summary.financials,
            Financials {
                projected_savings_today: 0.0
            }
        );
        assert!(matches!(
            summary.ai_predictions,
            AiPredictions { ref prep_sheet } if prep_sheet.len() == 3
        ));
    }
}
