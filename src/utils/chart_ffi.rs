// ============================================================================
// CHART FFI - Foreign Function Interface to the Chart.js glue
// ============================================================================
// Thin wrappers over the JS chart helpers - no state, no logic
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Weekly actual-vs-forecast headcount line chart.
    #[wasm_bindgen(js_name = initHeadcountChart)]
    pub fn init_headcount_chart(canvas_id: &str, datasets_json: &str);

    /// Analytics chart for the active tab (feedback / waste / consumption).
    #[wasm_bindgen(js_name = renderAnalyticsChart)]
    pub fn render_analytics_chart(canvas_id: &str, tab: &str);

    #[wasm_bindgen(js_name = destroyCharts)]
    pub fn destroy_charts();
}

/// Helper: destroy charts if the glue is loaded; safe when it is not.
pub fn teardown_charts() {
    if let Some(window) = web_sys::window() {
        let function =
            js_sys::Function::new_no_args("if (window.destroyCharts) window.destroyCharts();");
        let _ = function.call0(&window.into());
    }
}
