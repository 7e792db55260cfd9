//! # Derived Output
//!
//! [`Output`] is the published result of one recomputation pass: project
//! totals, the certification score, and one emissions entry per row, in
//! row order. It is derived state only; consumers read it, nothing edits
//! it in place.
//!
//! The serialized form IS the export artifact. Field names below are the
//! wire contract, so renames here are breaking changes.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "totalEmissions": 2910.0,
//!   "embodiedCarbonPerGfa": 2.91,
//!   "embodiedCarbonPerGfaComparedToReference": 99.7,
//!   "greenMarkScore": 2,
//!   "rows": [
//!     { "a1a3": 2800.0, "a4": 110.0 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Version tag written into every Output
pub const OUTPUT_VERSION: &str = "1.0.0";

/// Emissions attributed to one row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowOutput {
    /// Product-stage emissions (material manufacture), kgCO2e
    pub a1a3: f64,
    /// Transport-to-site emissions, kgCO2e
    pub a4: f64,
}

impl RowOutput {
    /// Combined emissions for this row, kgCO2e
    pub fn total(&self) -> f64 {
        self.a1a3 + self.a4
    }
}

/// The published results of one recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Schema version of this output shape
    pub version: String,

    /// Sum of all row emissions, kgCO2e
    pub total_emissions: f64,

    /// Total divided by gross floor area, kgCO2e per m2
    pub embodied_carbon_per_gfa: f64,

    /// Reduction against the reference benchmark, percent
    pub embodied_carbon_per_gfa_compared_to_reference: f64,

    /// Certification score, 0 to 2
    pub green_mark_score: u8,

    /// Per-row emissions, parallel to the state's row list
    pub rows: Vec<RowOutput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let output = Output {
            version: OUTPUT_VERSION.to_string(),
            total_emissions: 100.0,
            embodied_carbon_per_gfa: 0.1,
            embodied_carbon_per_gfa_compared_to_reference: 99.99,
            green_mark_score: 2,
            rows: vec![RowOutput { a1a3: 90.0, a4: 10.0 }],
        };

        let value: serde_json::Value = serde_json::to_value(&output).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 6);
        for key in [
            "version",
            "totalEmissions",
            "embodiedCarbonPerGfa",
            "embodiedCarbonPerGfaComparedToReference",
            "greenMarkScore",
            "rows",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }

        let row = &value["rows"][0];
        assert_eq!(row["a1a3"], 90.0);
        assert_eq!(row["a4"], 10.0);
    }

    #[test]
    fn test_row_total() {
        let row = RowOutput { a1a3: 2.5, a4: 1.5 };
        assert_eq!(row.total(), 4.0);
    }

    #[test]
    fn test_roundtrip() {
        let output = Output {
            version: OUTPUT_VERSION.to_string(),
            total_emissions: 42.0,
            embodied_carbon_per_gfa: 0.042,
            embodied_carbon_per_gfa_compared_to_reference: 10.0,
            green_mark_score: 0,
            rows: vec![],
        };
        let json = serde_json::to_string(&output).unwrap();
        let roundtrip: Output = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, output);
    }
}
