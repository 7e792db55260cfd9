//! # Calculator State & Mutations
//!
//! [`Calculator`] owns the whole estimation session: the reference
//! [`Catalogue`], the trusted [`Project`] state, and the [`Output`] derived
//! from it. Every surface (GUI, CLI) goes through the mutators here; nothing
//! else writes the trusted state.
//!
//! ## Mutation discipline
//!
//! Each mutator follows the same three steps:
//!
//! 1. validate the candidate value (field-scoped coercion for text input,
//!    numeric re-checks for typed rows) - a failed validation returns the
//!    error and leaves the trusted state untouched
//! 2. commit the change, running dependent-field cascades inside the same
//!    mutation (a component change re-derives the row's category)
//! 3. recompute and publish a fresh [`Output`]
//!
//! Step 3 is unconditional on every accepted mutation, so a published
//! output is never stale: `output().rows` is always parallel to
//! `project().rows`. Structural edits with an out-of-range index (remove,
//! duplicate, field edits) are no-ops by contract, never errors.
//!
//! ## Example
//!
//! ```rust
//! use sbcc_core::calculator::{Calculator, FieldEdit, MetadataEdit};
//! use sbcc_core::catalogue::Catalogue;
//!
//! let mut calc = Calculator::new(Catalogue::builtin());
//! assert_eq!(calc.output().rows.len(), 1);
//!
//! calc.set_field(0, FieldEdit::Quantity("35".to_string())).unwrap();
//! assert_eq!(calc.project().rows[0].quantity, 35.0);
//!
//! calc.set_metadata(MetadataEdit::Gfa("2500".to_string())).unwrap();
//! assert_eq!(calc.project().gfa, 2500.0);
//! ```

use crate::cascade::apply_component_cascade;
use crate::catalogue::Catalogue;
use crate::compute::calculate_green_mark;
use crate::errors::CarbonResult;
use crate::output::Output;
use crate::project::Project;
use crate::row::{
    check_non_negative, parse_non_negative, parse_optional_non_negative, GreenMarkCategory, Row,
    Units,
};

/// A single-field edit to one row.
///
/// Numeric fields carry the raw control text and are coerced here, so an
/// invalid entry in one field never blocks edits to the others. Selection
/// fields carry typed values and always commit.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    /// Select a component; re-derives the row's category
    ComponentId(String),
    /// Manual category override; cleared or replaced by the next component change
    Category(Option<GreenMarkCategory>),
    /// Select the country of origin
    CountryId(String),
    /// Raw quantity text
    Quantity(String),
    /// Select the quantity unit
    Units(Units),
    /// Select the sea-leg vehicle
    MarineVehicleId(String),
    /// Raw sea-leg distance override text; empty clears the override
    ManualMarineDistance(String),
    /// Select the origin-country road vehicle
    InternationalRoadVehicleId(String),
    /// Select the local road vehicle
    LocalRoadVehicleId(String),
    /// Raw origin-country road distance text
    InternationalRoadDistance(String),
    /// Raw local road distance text
    LocalRoadDistance(String),
}

/// An edit to the project-level metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataEdit {
    /// Raw gross floor area text, m2
    Gfa(String),
    /// Benchmark embodied carbon per GFA, kgCO2e per m2
    ReferenceValue(f64),
}

/// Session state: catalogue, trusted project, and the published output.
#[derive(Debug, Clone)]
pub struct Calculator {
    catalogue: Catalogue,
    project: Project,
    output: Output,
}

impl Calculator {
    /// Start a session with the default project for `catalogue`.
    ///
    /// The output is computed immediately; there is no "not yet calculated"
    /// state.
    pub fn new(catalogue: Catalogue) -> Self {
        let project = Project::default_with(&catalogue);
        Self::with_project(catalogue, project)
    }

    /// Start a session from an existing project (a loaded file, a test
    /// fixture).
    pub fn with_project(catalogue: Catalogue, project: Project) -> Self {
        let output = calculate_green_mark(&project, &catalogue);
        Calculator {
            catalogue,
            project,
            output,
        }
    }

    /// The reference catalogue backing lookups and option lists.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// The trusted state.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The output derived from the current trusted state.
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Append a row at the end. Returns its index.
    ///
    /// The row's numeric fields are re-checked first; a row that fails
    /// leaves the state untouched.
    pub fn append(&mut self, row: Row) -> CarbonResult<usize> {
        row.validate()?;
        let index = self.project.append(row);
        self.sync();
        Ok(index)
    }

    /// Append a fresh default row. Returns its index.
    pub fn append_default(&mut self) -> usize {
        let row = Project::default_row(&self.catalogue);
        let index = self.project.append(row);
        self.sync();
        index
    }

    /// Append a value-copy of the row at `index` to the end of the list.
    ///
    /// The copy holds the trusted values at the time of duplication; edits
    /// to either row afterwards leave the other alone. Returns the copy's
    /// index, or `None` (no-op) when `index` is out of range.
    pub fn duplicate(&mut self, index: usize) -> Option<usize> {
        let new_index = self.project.duplicate(index)?;
        self.sync();
        Some(new_index)
    }

    /// Remove and return the row at `index`.
    ///
    /// Returns `None` (no-op) when `index` is out of range. An empty row
    /// list is legal; the output then carries zero rows and zero totals.
    pub fn remove(&mut self, index: usize) -> Option<Row> {
        let removed = self.project.remove(index)?;
        self.sync();
        Some(removed)
    }

    /// Apply a single-field edit to the row at `index`.
    ///
    /// Coercion happens before anything is written, so an `Err` means the
    /// trusted state and output are exactly as they were. An out-of-range
    /// `index` is a no-op returning `Ok`.
    pub fn set_field(&mut self, index: usize, edit: FieldEdit) -> CarbonResult<()> {
        let Some(row) = self.project.rows.get_mut(index) else {
            return Ok(());
        };

        match edit {
            FieldEdit::ComponentId(id) => {
                row.component_id = id;
                apply_component_cascade(&self.catalogue, row);
            }
            FieldEdit::Category(category) => row.green_mark_category = category,
            FieldEdit::CountryId(id) => row.country_id = id,
            FieldEdit::Quantity(raw) => {
                row.quantity = parse_non_negative("quantity", &raw)?;
            }
            FieldEdit::Units(units) => row.units = units,
            FieldEdit::MarineVehicleId(id) => row.marine_vehicle_id = id,
            FieldEdit::ManualMarineDistance(raw) => {
                row.manual_marine_distance =
                    parse_optional_non_negative("manualMarineDistance", &raw)?;
            }
            FieldEdit::InternationalRoadVehicleId(id) => row.international_road_vehicle_id = id,
            FieldEdit::LocalRoadVehicleId(id) => row.local_road_vehicle_id = id,
            FieldEdit::InternationalRoadDistance(raw) => {
                row.international_road_distance =
                    parse_non_negative("internationalRoadDistance", &raw)?;
            }
            FieldEdit::LocalRoadDistance(raw) => {
                row.local_road_distance = parse_non_negative("localRoadDistance", &raw)?;
            }
        }

        self.sync();
        Ok(())
    }

    /// Apply a metadata edit.
    ///
    /// Same contract as [`set_field`](Self::set_field): an `Err` leaves the
    /// trusted state untouched.
    pub fn set_metadata(&mut self, edit: MetadataEdit) -> CarbonResult<()> {
        match edit {
            MetadataEdit::Gfa(raw) => {
                self.project.gfa = parse_non_negative("gfa", &raw)?;
            }
            MetadataEdit::ReferenceValue(value) => {
                check_non_negative("referenceValue", value)?;
                self.project.reference_value = value;
            }
        }

        self.sync();
        Ok(())
    }

    /// Recompute the output from the trusted state and publish it.
    ///
    /// Runs after every accepted mutation. Recomputation is unconditional;
    /// nothing is cached between calls.
    fn sync(&mut self) {
        self.output = calculate_green_mark(&self.project, &self.catalogue);
    }
}
