//! WASM bindings for creche-engine.
//!
//! Exposes the staffing checks to JavaScript via `wasm-bindgen`. Plans cross
//! the boundary as JSON strings in the same shape the CLI consumes;
//! diagnostics come back as a JSON array with both the structured violation
//! and a pre-rendered human-readable message.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p creche-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/creche_engine_wasm.wasm
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use creche_engine::{check, ChildPlan, Diagnostic, StaffPlan};

/// Diagnostic DTO crossing the WASM boundary: the structured payload plus a
/// rendered message so the UI does not re-implement formatting.
#[derive(Serialize)]
struct DiagnosticDto {
    week: usize,
    day: usize,
    slot: usize,
    message: String,
    violation: creche_engine::Violation,
}

impl From<&Diagnostic> for DiagnosticDto {
    fn from(d: &Diagnostic) -> Self {
        Self {
            week: d.day.week,
            day: d.day.day,
            slot: d.slot,
            message: d.to_string(),
            violation: d.violation.clone(),
        }
    }
}

/// Run every staffing rule over a pair of plans.
///
/// Both arguments are JSON strings; returns a JSON array of diagnostics
/// (empty when the staffing plan is compliant). Throws a JS string when
/// either plan fails to parse.
#[wasm_bindgen]
pub fn check_plans(children_json: &str, staff_json: &str) -> Result<String, JsValue> {
    let children: ChildPlan = serde_json::from_str(children_json)
        .map_err(|e| JsValue::from_str(&format!("invalid child plan: {}", e)))?;
    let staff: StaffPlan = serde_json::from_str(staff_json)
        .map_err(|e| JsValue::from_str(&format!("invalid staff plan: {}", e)))?;

    let dtos: Vec<DiagnosticDto> = check(&children, &staff).iter().map(Into::into).collect();
    serde_json::to_string(&dtos).map_err(|e| JsValue::from_str(&format!("serialization: {}", e)))
}

/// Number of 5-minute slots in one operating day, for grid-aligned UIs.
#[wasm_bindgen]
pub fn slots_per_day() -> usize {
    creche_engine::grid::SLOTS_PER_DAY
}
