//! # Reference Catalogue
//!
//! Read-only lookup tables the estimator draws its options and emission
//! factors from: building components (global and per-country), ports with
//! their sea distances, transport vehicles, and certification reference
//! benchmarks.
//!
//! The tables never change during a session. Everything here is a pure
//! read; an identifier with no match yields `None` and the caller decides
//! what that means (the calculation treats it as a zero factor, the UI
//! shows the raw identifier).
//!
//! ## Derived listings
//!
//! The selectable option sets are derived, not stored:
//! - components: global set ∪ country-specific set, deduplicated
//! - countries: countries with component entries ∪ countries with ports
//! - marine/road vehicles: filtered by transport mode membership
//!
//! ## Example
//!
//! ```rust
//! use sbcc_core::catalogue::Catalogue;
//!
//! let cat = Catalogue::builtin();
//! assert!(cat.component_ids().contains(&"ready-mix-concrete".to_string()));
//! assert!(cat.sea_distance_km("Singapore").is_some());
//! ```

pub mod builtin;

pub use builtin::{DEFAULT_COUNTRY_ID, DEFAULT_GFA_M2, DEFAULT_MARINE_VEHICLE_ID, DEFAULT_ROAD_VEHICLE_ID};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::row::GreenMarkCategory;

/// Transport mode a vehicle operates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    Maritime,
    Road,
}

impl TransportMode {
    /// All modes
    pub const ALL: [TransportMode; 2] = [TransportMode::Maritime, TransportMode::Road];

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            TransportMode::Maritime => "Maritime",
            TransportMode::Road => "Road",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A building material in the global component table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Stable identifier stored in rows
    pub id: String,
    /// Display label
    pub name: String,
    /// Green Mark grouping, absent for uncategorised materials
    pub category: Option<GreenMarkCategory>,
    /// Cradle-to-gate emission factor, kgCO2e per kg of material
    pub factor_kg_co2e_per_kg: f64,
}

/// A country-specific component entry.
///
/// Overrides the global table for the same component id when the row's
/// country matches, and may introduce components that exist only in one
/// country's supply data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryComponent {
    pub country_id: String,
    pub component_id: String,
    /// Display label (kept here so country-only components have one)
    pub name: String,
    pub category: Option<GreenMarkCategory>,
    pub factor_kg_co2e_per_kg: f64,
}

/// A port, keyed by country, with its shipping distance to site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub country_id: String,
    /// Port name, display only
    pub name: String,
    /// Sea distance from this port to the project site, km
    pub sea_distance_km: f64,
}

/// A transport vehicle with its emission intensity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Stable identifier stored in rows
    pub id: String,
    /// Display label
    pub name: String,
    /// Modes this vehicle serves; a vehicle may serve several
    pub modes: Vec<TransportMode>,
    /// Emission factor, kgCO2e per tonne-kilometre
    pub factor_kg_co2e_per_tonne_km: f64,
}

impl Vehicle {
    /// Whether this vehicle serves the given mode
    pub fn serves(&self, mode: TransportMode) -> bool {
        self.modes.contains(&mode)
    }
}

/// A certification benchmark: building type and its reference intensity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Building type label
    pub building_type: String,
    /// Reference embodied carbon per GFA, kgCO2e per m2
    pub reference_value: f64,
}

/// The complete set of reference tables for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogue {
    pub components: Vec<Component>,
    pub country_components: Vec<CountryComponent>,
    pub ports: Vec<Port>,
    pub vehicles: Vec<Vehicle>,
    pub reference_values: Vec<ReferenceEntry>,
}

impl Catalogue {
    /// Selectable component ids: global table followed by country-specific
    /// additions, deduplicated, order preserved.
    pub fn component_ids(&self) -> Vec<String> {
        dedup_preserving_order(
            self.components
                .iter()
                .map(|c| c.id.clone())
                .chain(self.country_components.iter().map(|cc| cc.component_id.clone())),
        )
    }

    /// Selectable country ids: countries with component entries followed by
    /// countries with ports, deduplicated, order preserved.
    pub fn country_ids(&self) -> Vec<String> {
        dedup_preserving_order(
            self.country_components
                .iter()
                .map(|cc| cc.country_id.clone())
                .chain(self.ports.iter().map(|p| p.country_id.clone())),
        )
    }

    /// Ids of vehicles whose mode list contains Maritime
    pub fn marine_vehicle_ids(&self) -> Vec<String> {
        self.vehicles
            .iter()
            .filter(|v| v.serves(TransportMode::Maritime))
            .map(|v| v.id.clone())
            .collect()
    }

    /// Ids of vehicles whose mode list contains Road
    pub fn road_vehicle_ids(&self) -> Vec<String> {
        self.vehicles
            .iter()
            .filter(|v| v.serves(TransportMode::Road))
            .map(|v| v.id.clone())
            .collect()
    }

    /// Green Mark category for a component id.
    ///
    /// Country-specific entries overlay the global table: the most specific
    /// assignment wins, and an entry without a category never erases one.
    pub fn category_for(&self, component_id: &str) -> Option<GreenMarkCategory> {
        self.country_components
            .iter()
            .rev()
            .find_map(|cc| {
                if cc.component_id == component_id {
                    cc.category
                } else {
                    None
                }
            })
            .or_else(|| {
                self.components
                    .iter()
                    .find(|c| c.id == component_id)
                    .and_then(|c| c.category)
            })
    }

    /// Reference benchmarks as (building type, value) pairs
    pub fn reference_entries(&self) -> &[ReferenceEntry] {
        &self.reference_values
    }

    /// Display label for a component id, if the id is known
    pub fn component_label(&self, component_id: &str) -> Option<&str> {
        self.components
            .iter()
            .find(|c| c.id == component_id)
            .map(|c| c.name.as_str())
            .or_else(|| {
                self.country_components
                    .iter()
                    .find(|cc| cc.component_id == component_id)
                    .map(|cc| cc.name.as_str())
            })
    }

    /// Display label for a vehicle id, if the id is known
    pub fn vehicle_label(&self, vehicle_id: &str) -> Option<&str> {
        self.vehicles
            .iter()
            .find(|v| v.id == vehicle_id)
            .map(|v| v.name.as_str())
    }

    /// Material emission factor for a component sourced from a country,
    /// kgCO2e per kg. Country-specific data wins over the global table.
    pub fn emission_factor(&self, country_id: &str, component_id: &str) -> Option<f64> {
        self.country_components
            .iter()
            .find(|cc| cc.country_id == country_id && cc.component_id == component_id)
            .map(|cc| cc.factor_kg_co2e_per_kg)
            .or_else(|| {
                self.components
                    .iter()
                    .find(|c| c.id == component_id)
                    .map(|c| c.factor_kg_co2e_per_kg)
            })
    }

    /// Sea distance from a country's port to the project site, km
    pub fn sea_distance_km(&self, country_id: &str) -> Option<f64> {
        self.ports
            .iter()
            .find(|p| p.country_id == country_id)
            .map(|p| p.sea_distance_km)
    }

    /// Transport emission factor for a vehicle, kgCO2e per tonne-km
    pub fn vehicle_factor(&self, vehicle_id: &str) -> Option<f64> {
        self.vehicles
            .iter()
            .find(|v| v.id == vehicle_id)
            .map(|v| v.factor_kg_co2e_per_tonne_km)
    }
}

/// Deduplicate while preserving first-seen order.
///
/// Set-backed, O(n) over the input.
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Catalogue {
        Catalogue {
            components: vec![
                Component {
                    id: "steel-a".to_string(),
                    name: "Steel A".to_string(),
                    category: Some(GreenMarkCategory::Steel),
                    factor_kg_co2e_per_kg: 2.0,
                },
                Component {
                    id: "glass-b".to_string(),
                    name: "Glass B".to_string(),
                    category: None,
                    factor_kg_co2e_per_kg: 1.5,
                },
            ],
            country_components: vec![
                CountryComponent {
                    country_id: "Xanadu".to_string(),
                    component_id: "steel-a".to_string(),
                    name: "Steel A".to_string(),
                    category: Some(GreenMarkCategory::Glass),
                    factor_kg_co2e_per_kg: 1.8,
                },
                CountryComponent {
                    country_id: "Ytteria".to_string(),
                    component_id: "local-c".to_string(),
                    name: "Local C".to_string(),
                    category: None,
                    factor_kg_co2e_per_kg: 0.5,
                },
            ],
            ports: vec![
                Port {
                    country_id: "Ytteria".to_string(),
                    name: "Port Y".to_string(),
                    sea_distance_km: 700.0,
                },
                Port {
                    country_id: "Zeeland".to_string(),
                    name: "Port Z".to_string(),
                    sea_distance_km: 1200.0,
                },
            ],
            vehicles: vec![
                Vehicle {
                    id: "ship".to_string(),
                    name: "Ship".to_string(),
                    modes: vec![TransportMode::Maritime],
                    factor_kg_co2e_per_tonne_km: 0.01,
                },
                Vehicle {
                    id: "truck".to_string(),
                    name: "Truck".to_string(),
                    modes: vec![TransportMode::Road],
                    factor_kg_co2e_per_tonne_km: 0.1,
                },
                Vehicle {
                    id: "ferry".to_string(),
                    name: "Ferry".to_string(),
                    modes: vec![TransportMode::Maritime, TransportMode::Road],
                    factor_kg_co2e_per_tonne_km: 0.05,
                },
            ],
            reference_values: vec![ReferenceEntry {
                building_type: "Residential".to_string(),
                reference_value: 1000.0,
            }],
        }
    }

    #[test]
    fn test_component_ids_union_dedup() {
        let ids = fixture().component_ids();
        assert_eq!(ids, vec!["steel-a", "glass-b", "local-c"]);
    }

    #[test]
    fn test_country_ids_union_dedup() {
        let ids = fixture().country_ids();
        assert_eq!(ids, vec!["Xanadu", "Ytteria", "Zeeland"]);
    }

    #[test]
    fn test_vehicle_mode_filters() {
        let cat = fixture();
        assert_eq!(cat.marine_vehicle_ids(), vec!["ship", "ferry"]);
        assert_eq!(cat.road_vehicle_ids(), vec!["truck", "ferry"]);
    }

    #[test]
    fn test_category_overlay_country_wins() {
        let cat = fixture();
        // country entry reassigns steel-a
        assert_eq!(cat.category_for("steel-a"), Some(GreenMarkCategory::Glass));
        // no category anywhere
        assert_eq!(cat.category_for("glass-b"), None);
        assert_eq!(cat.category_for("local-c"), None);
        // unknown id
        assert_eq!(cat.category_for("nope"), None);
    }

    #[test]
    fn test_category_overlay_none_does_not_erase() {
        let mut cat = fixture();
        cat.country_components.push(CountryComponent {
            country_id: "Zeeland".to_string(),
            component_id: "steel-a".to_string(),
            name: "Steel A".to_string(),
            category: None,
            factor_kg_co2e_per_kg: 2.2,
        });
        // the later None entry leaves the earlier Some in force
        assert_eq!(cat.category_for("steel-a"), Some(GreenMarkCategory::Glass));
    }

    #[test]
    fn test_emission_factor_country_first() {
        let cat = fixture();
        assert_eq!(cat.emission_factor("Xanadu", "steel-a"), Some(1.8));
        // other countries fall back to the global table
        assert_eq!(cat.emission_factor("Zeeland", "steel-a"), Some(2.0));
        // country-only component resolves through its own country entry
        assert_eq!(cat.emission_factor("Ytteria", "local-c"), Some(0.5));
        // and has no factor anywhere else
        assert_eq!(cat.emission_factor("Xanadu", "local-c"), None);
        assert_eq!(cat.emission_factor("Xanadu", "unknown"), None);
    }

    #[test]
    fn test_sea_distance_and_vehicle_factor() {
        let cat = fixture();
        assert_eq!(cat.sea_distance_km("Ytteria"), Some(700.0));
        assert_eq!(cat.sea_distance_km("Xanadu"), None);
        assert_eq!(cat.vehicle_factor("ferry"), Some(0.05));
        assert_eq!(cat.vehicle_factor("hoverboard"), None);
    }

    #[test]
    fn test_labels() {
        let cat = fixture();
        assert_eq!(cat.component_label("glass-b"), Some("Glass B"));
        assert_eq!(cat.component_label("local-c"), Some("Local C"));
        assert_eq!(cat.component_label("nope"), None);
        assert_eq!(cat.vehicle_label("truck"), Some("Truck"));
    }

    #[test]
    fn test_dedup_preserving_order() {
        let items = vec!["b", "a", "b", "c", "a"].into_iter().map(String::from);
        assert_eq!(dedup_preserving_order(items), vec!["b", "a", "c"]);
    }
}
