//! WebAssembly bindings for the IVR analysis pipeline.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { analyze, analyze_to_json } from './ivr_insights_analysis.js';
//!
//! await init();
//!
//! const report = analyze(transcript, flowchart);
//! console.log(report.summary.ivr_complexity);
//! ```

use crate::{AnalysisOptions, Analyzer};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Analyze a transcript and flowchart, returning the report as a JavaScript object.
#[wasm_bindgen]
pub fn analyze(transcript: &str, flowchart: &str) -> Result<JsValue, JsValue> {
    let report = crate::analyze(transcript, flowchart);
    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Analyze with options given as a JSON document, returning pretty JSON.
#[wasm_bindgen]
pub fn analyze_to_json(transcript: &str, flowchart: &str, options: &str) -> Result<String, JsValue> {
    let options = if options.trim().is_empty() {
        AnalysisOptions::default()
    } else {
        AnalysisOptions::from_json(options).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    let input = crate::AnalysisInput::new(transcript, flowchart);
    Analyzer::new(options)
        .analyze_input(input)
        .and_then(|report| report.to_json())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
