//! Built-in reference tables
//!
//! The bundled catalogue used when no external data set is supplied.
//! Material factors are representative cradle-to-gate values in the style
//! of the ICE database, transport factors follow GLEC-style tonne-km
//! intensities, and sea distances are measured to the Singapore site.
//! They are sensible defaults for estimation, not authoritative data.

use once_cell::sync::Lazy;

use super::{Catalogue, Component, CountryComponent, Port, ReferenceEntry, TransportMode, Vehicle};
use crate::row::GreenMarkCategory;

/// Country preselected on new rows
pub const DEFAULT_COUNTRY_ID: &str = "Singapore";

/// Marine vehicle preselected on new rows
pub const DEFAULT_MARINE_VEHICLE_ID: &str = "container-ship-5000-teu";

/// Road vehicle preselected on new rows (both legs)
pub const DEFAULT_ROAD_VEHICLE_ID: &str = "rigid-truck-26t";

/// Gross floor area a fresh session starts with, m2
pub const DEFAULT_GFA_M2: f64 = 1000.0;

fn component(id: &str, name: &str, category: Option<GreenMarkCategory>, factor: f64) -> Component {
    Component {
        id: id.to_string(),
        name: name.to_string(),
        category,
        factor_kg_co2e_per_kg: factor,
    }
}

fn country_component(
    country_id: &str,
    component_id: &str,
    name: &str,
    category: Option<GreenMarkCategory>,
    factor: f64,
) -> CountryComponent {
    CountryComponent {
        country_id: country_id.to_string(),
        component_id: component_id.to_string(),
        name: name.to_string(),
        category,
        factor_kg_co2e_per_kg: factor,
    }
}

fn port(country_id: &str, name: &str, sea_distance_km: f64) -> Port {
    Port {
        country_id: country_id.to_string(),
        name: name.to_string(),
        sea_distance_km,
    }
}

fn vehicle(id: &str, name: &str, modes: &[TransportMode], factor: f64) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        name: name.to_string(),
        modes: modes.to_vec(),
        factor_kg_co2e_per_tonne_km: factor,
    }
}

fn reference(building_type: &str, reference_value: f64) -> ReferenceEntry {
    ReferenceEntry {
        building_type: building_type.to_string(),
        reference_value,
    }
}

static BUILTIN: Lazy<Catalogue> = Lazy::new(|| {
    use GreenMarkCategory::{Concrete, Glass, Steel};
    use TransportMode::{Maritime, Road};

    Catalogue {
        components: vec![
            component("ready-mix-concrete", "Ready-Mix Concrete", Some(Concrete), 0.15),
            component("reinforcement-steel", "Reinforcement Steel", Some(Steel), 1.99),
            component("structural-steel", "Structural Steel", Some(Steel), 2.30),
            component("float-glass", "Float Glass", Some(Glass), 1.44),
            component("curtain-wall-glazing", "Curtain Wall Glazing", None, 1.65),
            component("aluminium-extrusion", "Aluminium Extrusion", None, 13.0),
            component("sawn-timber", "Sawn Timber", None, 0.45),
            component("gypsum-plasterboard", "Gypsum Plasterboard", None, 0.39),
        ],
        country_components: vec![
            country_component("Singapore", "ready-mix-concrete", "Ready-Mix Concrete", Some(Concrete), 0.14),
            country_component("Singapore", "precast-concrete-panel", "Precast Concrete Panel", Some(Concrete), 0.18),
            country_component("Malaysia", "ready-mix-concrete", "Ready-Mix Concrete", Some(Concrete), 0.16),
            country_component("China", "reinforcement-steel", "Reinforcement Steel", Some(Steel), 2.21),
            country_component("China", "curtain-wall-glazing", "Curtain Wall Glazing", Some(Glass), 1.58),
            country_component("Japan", "float-glass", "Float Glass", Some(Glass), 1.38),
            country_component("Australia", "structural-steel", "Structural Steel", Some(Steel), 2.05),
            country_component("Indonesia", "sawn-timber", "Sawn Timber", None, 0.42),
        ],
        ports: vec![
            port("Singapore", "Port of Singapore", 0.0),
            port("Malaysia", "Port Klang", 300.0),
            port("Indonesia", "Tanjung Priok", 900.0),
            port("Vietnam", "Port of Ho Chi Minh City", 1100.0),
            port("Thailand", "Laem Chabang", 1400.0),
            port("India", "Jawaharlal Nehru Port", 3800.0),
            port("China", "Port of Shanghai", 4400.0),
            port("South Korea", "Port of Busan", 4600.0),
            port("Japan", "Port of Yokohama", 5300.0),
            port("Australia", "Port Botany", 6300.0),
        ],
        vehicles: vec![
            vehicle("container-ship-5000-teu", "Container Ship (5,000 TEU)", &[Maritime], 0.008),
            vehicle("container-ship-12000-teu", "Container Ship (12,000 TEU)", &[Maritime], 0.006),
            vehicle("bulk-carrier", "Bulk Carrier", &[Maritime], 0.004),
            vehicle("freight-ferry", "Freight Ferry", &[Maritime, Road], 0.055),
            vehicle("rigid-truck-12t", "Rigid Truck (12t)", &[Road], 0.21),
            vehicle("rigid-truck-26t", "Rigid Truck (26t)", &[Road], 0.11),
            vehicle("articulated-truck-40t", "Articulated Truck (40t)", &[Road], 0.062),
            vehicle("light-goods-van", "Light Goods Van (3.5t)", &[Road], 0.59),
        ],
        reference_values: vec![
            reference("Residential (Non-Landed)", 1100.0),
            reference("Commercial Office", 1200.0),
            reference("Industrial", 950.0),
            reference("Institutional", 1050.0),
        ],
    }
});

impl Catalogue {
    /// The bundled reference tables
    pub fn builtin() -> Catalogue {
        BUILTIN.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults_resolve() {
        let cat = Catalogue::builtin();
        assert!(cat.vehicle_factor(DEFAULT_MARINE_VEHICLE_ID).is_some());
        assert!(cat.vehicle_factor(DEFAULT_ROAD_VEHICLE_ID).is_some());
        assert_eq!(cat.sea_distance_km(DEFAULT_COUNTRY_ID), Some(0.0));
        assert!(!cat.reference_values.is_empty());
    }

    #[test]
    fn test_component_union_includes_country_only_entries() {
        let cat = Catalogue::builtin();
        let ids = cat.component_ids();
        // global first
        assert_eq!(ids[0], "ready-mix-concrete");
        // country-only component appears once
        assert_eq!(ids.iter().filter(|id| *id == "precast-concrete-panel").count(), 1);
        // overlapping ids are not repeated
        assert_eq!(ids.iter().filter(|id| *id == "ready-mix-concrete").count(), 1);
    }

    #[test]
    fn test_country_union_includes_port_only_countries() {
        let cat = Catalogue::builtin();
        let ids = cat.country_ids();
        assert!(ids.contains(&"Singapore".to_string()));
        // Vietnam has a port but no component entries
        assert!(ids.contains(&"Vietnam".to_string()));
        assert_eq!(ids.iter().filter(|id| *id == "Singapore").count(), 1);
    }

    #[test]
    fn test_country_factor_overrides_global() {
        let cat = Catalogue::builtin();
        assert_eq!(cat.emission_factor("Singapore", "ready-mix-concrete"), Some(0.14));
        assert_eq!(cat.emission_factor("Thailand", "ready-mix-concrete"), Some(0.15));
    }

    #[test]
    fn test_category_overlay_from_country_entry() {
        let cat = Catalogue::builtin();
        // global entry has no category, China's does
        assert_eq!(
            cat.category_for("curtain-wall-glazing"),
            Some(GreenMarkCategory::Glass)
        );
        assert_eq!(cat.category_for("sawn-timber"), None);
    }

    #[test]
    fn test_mode_filters_split_the_fleet() {
        let cat = Catalogue::builtin();
        let marine = cat.marine_vehicle_ids();
        let road = cat.road_vehicle_ids();

        assert!(marine.contains(&"bulk-carrier".to_string()));
        assert!(!marine.contains(&"rigid-truck-26t".to_string()));
        assert!(road.contains(&"rigid-truck-26t".to_string()));
        assert!(!road.contains(&"bulk-carrier".to_string()));
        // dual-mode vehicle shows up in both
        assert!(marine.contains(&"freight-ferry".to_string()));
        assert!(road.contains(&"freight-ferry".to_string()));
    }

    #[test]
    fn test_reference_entries_order() {
        let cat = Catalogue::builtin();
        let entries = cat.reference_entries();
        assert_eq!(entries[0].building_type, "Residential (Non-Landed)");
        assert_eq!(entries[0].reference_value, 1100.0);
    }
}
