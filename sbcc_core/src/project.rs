//! # Project State
//!
//! The [`Project`] struct is the root container for one estimation
//! session: the ordered list of material rows plus the project-level
//! metadata the score is computed against. It serializes to human-readable
//! JSON and is exactly the input shape of
//! [`calculate_green_mark`](crate::compute::calculate_green_mark).
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── rows: Vec<Row>        (ordered line items, position is meaningful)
//! ├── gfa: f64              (gross floor area, m2)
//! └── reference_value: f64  (benchmark kgCO2e per m2)
//! ```
//!
//! Row order is preserved everywhere: rendering, recomputation and export
//! all walk the same sequence. Structural edits with an out-of-range index
//! are no-ops by contract, never panics.
//!
//! ## Example
//!
//! ```rust
//! use sbcc_core::catalogue::Catalogue;
//! use sbcc_core::project::Project;
//!
//! let project = Project::default_with(&Catalogue::builtin());
//! assert_eq!(project.rows.len(), 1);
//!
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("referenceValue"));
//! ```

use serde::{Deserialize, Serialize};

use crate::catalogue::{
    Catalogue, DEFAULT_COUNTRY_ID, DEFAULT_GFA_M2, DEFAULT_MARINE_VEHICLE_ID, DEFAULT_ROAD_VEHICLE_ID,
};
use crate::row::{Row, Units};

/// Quantity preset on new rows, in tonnes
const DEFAULT_QUANTITY_TONNES: f64 = 20.0;

/// Local road leg preset on new rows, km
const DEFAULT_LOCAL_ROAD_KM: f64 = 50.0;

/// Root state container for one estimation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Material line items, in user order
    pub rows: Vec<Row>,

    /// Gross floor area, m2
    pub gfa: f64,

    /// Benchmark embodied carbon per GFA, kgCO2e per m2
    pub reference_value: f64,
}

impl Project {
    /// Starting state: one default row, the catalogue's first reference
    /// benchmark, and the standard GFA.
    pub fn default_with(catalogue: &Catalogue) -> Self {
        Project {
            rows: vec![Self::default_row(catalogue)],
            gfa: DEFAULT_GFA_M2,
            reference_value: catalogue
                .reference_entries()
                .first()
                .map(|e| e.reference_value)
                .unwrap_or(0.0),
        }
    }

    /// A fresh row preset with the catalogue's first component and the
    /// default country and vehicles. The category comes from the same
    /// mapping the component cascade uses.
    pub fn default_row(catalogue: &Catalogue) -> Row {
        let component_id = catalogue.component_ids().into_iter().next().unwrap_or_default();
        let green_mark_category = catalogue.category_for(&component_id);
        Row {
            component_id,
            green_mark_category,
            country_id: DEFAULT_COUNTRY_ID.to_string(),
            quantity: DEFAULT_QUANTITY_TONNES,
            units: Units::Tonne,
            marine_vehicle_id: DEFAULT_MARINE_VEHICLE_ID.to_string(),
            manual_marine_distance: None,
            international_road_vehicle_id: DEFAULT_ROAD_VEHICLE_ID.to_string(),
            local_road_vehicle_id: DEFAULT_ROAD_VEHICLE_ID.to_string(),
            international_road_distance: 0.0,
            local_road_distance: DEFAULT_LOCAL_ROAD_KM,
        }
    }

    /// Append a row at the end. Returns its index.
    pub fn append(&mut self, row: Row) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Append a value-copy of the row at `index` to the end of the list.
    ///
    /// Returns the copy's index, or `None` (state untouched) when `index`
    /// is out of range.
    pub fn duplicate(&mut self, index: usize) -> Option<usize> {
        let copy = self.rows.get(index)?.clone();
        Some(self.append(copy))
    }

    /// Remove and return the row at `index`; later rows shift down.
    ///
    /// Returns `None` (state untouched) when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Row> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    /// Row at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
