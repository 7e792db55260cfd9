//! # Embodied Carbon Calculation
//!
//! The single pure function that turns project state into the published
//! [`Output`]: per-row product-stage (A1-A3) and transport (A4) emissions,
//! the project totals, and the Green Mark score band.
//!
//! ## Assumptions
//!
//! - A1-A3 = material mass x the catalogue emission factor for the row's
//!   component, with country-specific factors taking precedence
//! - A4 covers three legs: sea (origin port to site), international road
//!   and local road, each as tonne-km x the selected vehicle's factor
//! - The sea-leg distance comes from the origin country's port, unless the
//!   row carries a manual override
//! - Identifiers with no catalogue match contribute zero; they never fail
//!   the calculation
//! - Non-positive gfa or reference values zero out the derived ratio
//!   rather than producing NaN or infinities
//!
//! ## Example
//!
//! ```rust
//! use sbcc_core::catalogue::Catalogue;
//! use sbcc_core::compute::calculate_green_mark;
//! use sbcc_core::project::Project;
//!
//! let catalogue = Catalogue::builtin();
//! let project = Project::default_with(&catalogue);
//!
//! let output = calculate_green_mark(&project, &catalogue);
//! assert_eq!(output.rows.len(), project.rows.len());
//! assert!(output.total_emissions > 0.0);
//! ```

use crate::catalogue::Catalogue;
use crate::output::{Output, RowOutput, OUTPUT_VERSION};
use crate::project::Project;
use crate::row::Row;
use crate::units::{KgCo2e, Kilograms, Kilometres, Tonnes};

/// Reduction (percent vs reference) required for the top score band
pub const SCORE_BAND_TWO_PCT: f64 = 40.0;

/// Reduction (percent vs reference) required for the middle score band
pub const SCORE_BAND_ONE_PCT: f64 = 25.0;

/// Compute the full derived output for the given state.
///
/// Pure and total: no caching, no mutation, and every input produces an
/// output. `output.rows` is parallel to `project.rows`.
pub fn calculate_green_mark(project: &Project, catalogue: &Catalogue) -> Output {
    let rows: Vec<RowOutput> = project
        .rows
        .iter()
        .map(|row| row_emissions(row, catalogue))
        .collect();

    let total = rows
        .iter()
        .fold(KgCo2e(0.0), |acc, r| acc + KgCo2e(r.total()));

    let per_gfa = if project.gfa > 0.0 {
        total.value() / project.gfa
    } else {
        0.0
    };

    let compared_to_reference = if project.reference_value > 0.0 {
        (project.reference_value - per_gfa) / project.reference_value * 100.0
    } else {
        0.0
    };

    Output {
        version: OUTPUT_VERSION.to_string(),
        total_emissions: total.value(),
        embodied_carbon_per_gfa: per_gfa,
        embodied_carbon_per_gfa_compared_to_reference: compared_to_reference,
        green_mark_score: score_for_reduction(compared_to_reference),
        rows,
    }
}

/// Score band for a reduction percentage. Monotone non-decreasing.
pub fn score_for_reduction(reduction_pct: f64) -> u8 {
    if reduction_pct >= SCORE_BAND_TWO_PCT {
        2
    } else if reduction_pct >= SCORE_BAND_ONE_PCT {
        1
    } else {
        0
    }
}

/// A1-A3 and A4 emissions for one row.
fn row_emissions(row: &Row, catalogue: &Catalogue) -> RowOutput {
    let mass = Kilograms(row.mass_kg());

    let material_factor = catalogue
        .emission_factor(&row.country_id, &row.component_id)
        .unwrap_or(0.0);
    let a1a3 = KgCo2e(mass.value() * material_factor);

    let tonnes: Tonnes = mass.into();
    let sea_leg = Kilometres(
        row.manual_marine_distance
            .or_else(|| catalogue.sea_distance_km(&row.country_id))
            .unwrap_or(0.0),
    );
    let marine_factor = catalogue.vehicle_factor(&row.marine_vehicle_id).unwrap_or(0.0);
    let intl_factor = catalogue
        .vehicle_factor(&row.international_road_vehicle_id)
        .unwrap_or(0.0);
    let local_factor = catalogue
        .vehicle_factor(&row.local_road_vehicle_id)
        .unwrap_or(0.0);

    let per_tonne = sea_leg.value() * marine_factor
        + row.international_road_distance * intl_factor
        + row.local_road_distance * local_factor;
    let a4 = KgCo2e(tonnes.value() * per_tonne);

    RowOutput {
        a1a3: a1a3.value(),
        a4: a4.value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Units;

    fn china_steel_row() -> Row {
        Row {
            component_id: "reinforcement-steel".to_string(),
            green_mark_category: None,
            country_id: "China".to_string(),
            quantity: 10.0,
            units: Units::Tonne,
            marine_vehicle_id: "bulk-carrier".to_string(),
            manual_marine_distance: None,
            international_road_vehicle_id: "articulated-truck-40t".to_string(),
            local_road_vehicle_id: "rigid-truck-26t".to_string(),
            international_road_distance: 100.0,
            local_road_distance: 30.0,
        }
    }

    #[test]
    fn test_default_scenario() {
        let catalogue = Catalogue::builtin();
        let project = Project::default_with(&catalogue);
        let output = calculate_green_mark(&project, &catalogue);

        // A1-A3: 20 t ready-mix from Singapore at 0.14 kgCO2e/kg = 2800
        assert!((output.rows[0].a1a3 - 2800.0).abs() < 1e-9);
        // A4: sea leg 0 km, intl 0 km, local 50 km * 0.11 * 20 t = 110
        assert!((output.rows[0].a4 - 110.0).abs() < 1e-9);
        assert!((output.total_emissions - 2910.0).abs() < 1e-9);
        // gfa defaults to 1000
        assert!((output.embodied_carbon_per_gfa - output.total_emissions / 1000.0).abs() < 1e-12);
        assert_eq!(output.version, OUTPUT_VERSION);
    }

    #[test]
    fn test_imported_steel_legs() {
        let catalogue = Catalogue::builtin();
        let project = Project {
            rows: vec![china_steel_row()],
            gfa: 1000.0,
            reference_value: 1100.0,
        };
        let output = calculate_green_mark(&project, &catalogue);

        // A1-A3: 10,000 kg * 2.21 (China override) = 22,100
        assert!((output.rows[0].a1a3 - 22_100.0).abs() < 1e-9);
        // A4 per tonne: 4400*0.004 + 100*0.062 + 30*0.11 = 17.6 + 6.2 + 3.3
        // = 27.1; times 10 t = 271
        assert!((output.rows[0].a4 - 271.0).abs() < 1e-9);
    }

    #[test]
    fn test_manual_marine_distance_overrides_port() {
        let catalogue = Catalogue::builtin();
        let mut row = china_steel_row();
        row.manual_marine_distance = Some(1000.0);
        let project = Project {
            rows: vec![row],
            gfa: 1000.0,
            reference_value: 1100.0,
        };
        let output = calculate_green_mark(&project, &catalogue);

        // sea leg now 1000*0.004 = 4 per tonne; 4 + 6.2 + 3.3 = 13.5; x10 t
        assert!((output.rows[0].a4 - 135.0).abs() < 1e-9);
    }

    #[test]
    fn test_kg_units() {
        let catalogue = Catalogue::builtin();
        let mut row = china_steel_row();
        row.quantity = 500.0;
        row.units = Units::Kg;
        let project = Project {
            rows: vec![row],
            gfa: 1000.0,
            reference_value: 1100.0,
        };
        let output = calculate_green_mark(&project, &catalogue);

        // 500 kg * 2.21 = 1105
        assert!((output.rows[0].a1a3 - 1105.0).abs() < 1e-9);
        // transport scales with 0.5 t: 27.1 * 0.5 = 13.55
        assert!((output.rows[0].a4 - 13.55).abs() < 1e-9);
    }

    #[test]
    fn test_unresolved_identifiers_contribute_zero() {
        let catalogue = Catalogue::builtin();
        let mut row = china_steel_row();
        row.component_id = "unobtainium".to_string();
        row.marine_vehicle_id = "hoverboard".to_string();
        let project = Project {
            rows: vec![row],
            gfa: 1000.0,
            reference_value: 1100.0,
        };
        let output = calculate_green_mark(&project, &catalogue);

        assert_eq!(output.rows[0].a1a3, 0.0);
        // sea leg drops out; road legs remain: (6.2 + 3.3) * 10
        assert!((output.rows[0].a4 - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_rows_parallel_and_total_is_sum() {
        let catalogue = Catalogue::builtin();
        let mut project = Project::default_with(&catalogue);
        project.rows.push(china_steel_row());
        project.rows.push(Project::default_row(&catalogue));

        let output = calculate_green_mark(&project, &catalogue);
        assert_eq!(output.rows.len(), 3);

        let sum: f64 = output.rows.iter().map(|r| r.total()).sum();
        assert!((output.total_emissions - sum).abs() < 1e-9);
    }

    #[test]
    fn test_guards_for_degenerate_metadata() {
        let catalogue = Catalogue::builtin();
        let mut project = Project::default_with(&catalogue);

        project.gfa = 0.0;
        let output = calculate_green_mark(&project, &catalogue);
        assert_eq!(output.embodied_carbon_per_gfa, 0.0);
        assert!(output.embodied_carbon_per_gfa_compared_to_reference.is_finite());

        project.gfa = 1000.0;
        project.reference_value = 0.0;
        let output = calculate_green_mark(&project, &catalogue);
        assert_eq!(output.embodied_carbon_per_gfa_compared_to_reference, 0.0);
        assert_eq!(output.green_mark_score, 0);
    }

    #[test]
    fn test_empty_project() {
        let catalogue = Catalogue::builtin();
        let project = Project {
            rows: vec![],
            gfa: 1000.0,
            reference_value: 1100.0,
        };
        let output = calculate_green_mark(&project, &catalogue);
        assert!(output.rows.is_empty());
        assert_eq!(output.total_emissions, 0.0);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(score_for_reduction(-10.0), 0);
        assert_eq!(score_for_reduction(0.0), 0);
        assert_eq!(score_for_reduction(24.999), 0);
        assert_eq!(score_for_reduction(25.0), 1);
        assert_eq!(score_for_reduction(39.999), 1);
        assert_eq!(score_for_reduction(40.0), 2);
        assert_eq!(score_for_reduction(100.0), 2);
    }

    #[test]
    fn test_score_monotone_in_reduction() {
        let mut last = score_for_reduction(-50.0);
        let mut pct = -50.0;
        while pct <= 110.0 {
            let s = score_for_reduction(pct);
            assert!(s >= last);
            last = s;
            pct += 0.5;
        }
    }
}
