//! # Row Schema & Validation
//!
//! A [`Row`] is one line item of the estimate: a building material
//! (component, origin country, quantity) plus the transport legs that bring
//! it to site (one sea leg, two road legs). Rows are the unit of editing in
//! every surface; the calculator owns an ordered list of them.
//!
//! Input controls deliver free text, so this module also owns coercion:
//! [`parse_non_negative`] and [`parse_optional_non_negative`] turn raw
//! strings into trusted numbers, and [`RawRow::validate`] checks a whole
//! row at once, collecting one field-scoped error per offending field
//! instead of stopping at the first.
//!
//! ## Example
//!
//! ```rust
//! use sbcc_core::row::{parse_non_negative, Units};
//!
//! let qty = parse_non_negative("quantity", "12.5").unwrap();
//! assert_eq!(qty, 12.5);
//! assert!(parse_non_negative("quantity", "-3").is_err());
//!
//! assert_eq!(Units::Tonne.to_kilograms_factor(), 1000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CarbonError, CarbonResult};

/// Mass units accepted for the quantity field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Metric tonne (1000 kg)
    Tonne,
    /// Kilogram
    Kg,
}

impl Units {
    /// All units in display order
    pub const ALL: [Units; 2] = [Units::Tonne, Units::Kg];

    /// Multiplier that converts a quantity in this unit to kilograms
    pub fn to_kilograms_factor(&self) -> f64 {
        match self {
            Units::Tonne => 1000.0,
            Units::Kg => 1.0,
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Units::Tonne => "tonne",
            Units::Kg => "kg",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CarbonResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "t" | "tonne" | "tonnes" | "ton" => Ok(Units::Tonne),
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Units::Kg),
            _ => Err(CarbonError::invalid_input(
                "units",
                s,
                "Expected 'tonne' or 'kg'",
            )),
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Green Mark material category assigned to a row.
///
/// The category drives how the row is grouped in certification reporting.
/// It is derived from the selected component via the catalogue whenever the
/// component changes, and may afterwards be overridden by hand (until the
/// next component change overwrites it again).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GreenMarkCategory {
    Concrete,
    Steel,
    Glass,
}

impl GreenMarkCategory {
    /// All categories in display order
    pub const ALL: [GreenMarkCategory; 3] = [
        GreenMarkCategory::Concrete,
        GreenMarkCategory::Steel,
        GreenMarkCategory::Glass,
    ];

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            GreenMarkCategory::Concrete => "Concrete",
            GreenMarkCategory::Steel => "Steel",
            GreenMarkCategory::Glass => "Glass",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CarbonResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "concrete" => Ok(GreenMarkCategory::Concrete),
            "steel" => Ok(GreenMarkCategory::Steel),
            "glass" => Ok(GreenMarkCategory::Glass),
            _ => Err(CarbonError::invalid_input(
                "greenMarkCategory",
                s,
                "Expected 'Concrete', 'Steel' or 'Glass'",
            )),
        }
    }
}

impl std::fmt::Display for GreenMarkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One line item of the estimate.
///
/// Identifier fields (`component_id`, `country_id`, the vehicle ids) are
/// free strings into the reference catalogue; an identifier with no
/// catalogue match is legal here and simply contributes nothing when the
/// emissions are computed. Numeric fields are kept non-negative and finite
/// by the coercion layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Selected building material
    pub component_id: String,

    /// Certification grouping, absent when the component maps to none
    #[serde(default)]
    pub green_mark_category: Option<GreenMarkCategory>,

    /// Country of origin for the material (and the sea leg)
    pub country_id: String,

    /// Material quantity, in `units`
    pub quantity: f64,

    /// Mass unit for `quantity`
    pub units: Units,

    /// Vehicle for the sea leg
    pub marine_vehicle_id: String,

    /// Override for the sea-leg distance in km; when absent the port
    /// table's distance for `country_id` is used
    #[serde(default)]
    pub manual_marine_distance: Option<f64>,

    /// Vehicle for the road leg in the origin country
    pub international_road_vehicle_id: String,

    /// Vehicle for the local road leg
    pub local_road_vehicle_id: String,

    /// Road distance in the origin country, km
    pub international_road_distance: f64,

    /// Local road distance, km
    pub local_road_distance: f64,
}

impl Row {
    /// Mass of the row's material in kilograms
    pub fn mass_kg(&self) -> f64 {
        self.quantity * self.units.to_kilograms_factor()
    }

    /// Re-check the numeric invariants of an already typed row.
    ///
    /// Rows built through [`RawRow::validate`] always pass; this guards rows
    /// constructed directly (deserialized files, library callers). Returns
    /// the first offending field.
    pub fn validate(&self) -> CarbonResult<()> {
        check_non_negative("quantity", self.quantity)?;
        if let Some(distance) = self.manual_marine_distance {
            check_non_negative("manualMarineDistance", distance)?;
        }
        check_non_negative("internationalRoadDistance", self.international_road_distance)?;
        check_non_negative("localRoadDistance", self.local_road_distance)?;
        Ok(())
    }
}

/// Check that an already typed number is finite and non-negative.
pub fn check_non_negative(field: &str, value: f64) -> CarbonResult<()> {
    if !value.is_finite() {
        return Err(CarbonError::invalid_input(
            field,
            value.to_string(),
            "Must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(CarbonError::invalid_input(
            field,
            value.to_string(),
            "Must be non-negative",
        ));
    }
    Ok(())
}

/// Parse a required numeric field from raw control text.
///
/// Accepts any finite, non-negative decimal. The returned errors carry the
/// field name so they can be shown inline next to the offending control.
pub fn parse_non_negative(field: &str, raw: &str) -> CarbonResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CarbonError::missing_field(field));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CarbonError::invalid_input(field, raw, "Must be a number"))?;
    if !value.is_finite() {
        return Err(CarbonError::invalid_input(field, raw, "Must be a finite number"));
    }
    if value < 0.0 {
        return Err(CarbonError::invalid_input(field, raw, "Must be non-negative"));
    }
    Ok(value)
}

/// Parse an optional numeric field; empty text clears the value.
pub fn parse_optional_non_negative(field: &str, raw: &str) -> CarbonResult<Option<f64>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_non_negative(field, raw).map(Some)
}

/// A row as delivered by string-typed input controls, before coercion.
///
/// Identifier fields pass through untouched; numeric and enum fields are
/// validated by [`RawRow::validate`].
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub component_id: String,
    /// Empty string means no category
    pub green_mark_category: String,
    pub country_id: String,
    pub quantity: String,
    pub units: String,
    pub marine_vehicle_id: String,
    /// Empty string means no override
    pub manual_marine_distance: String,
    pub international_road_vehicle_id: String,
    pub local_road_vehicle_id: String,
    pub international_road_distance: String,
    pub local_road_distance: String,
}

impl RawRow {
    /// Coerce into a typed [`Row`], collecting every field error rather
    /// than stopping at the first. On any error the input is unusable and
    /// no row is produced.
    pub fn validate(&self) -> Result<Row, Vec<CarbonError>> {
        let mut errors = Vec::new();

        if self.component_id.trim().is_empty() {
            errors.push(CarbonError::missing_field("componentId"));
        }
        if self.country_id.trim().is_empty() {
            errors.push(CarbonError::missing_field("countryId"));
        }

        let green_mark_category = if self.green_mark_category.trim().is_empty() {
            None
        } else {
            match GreenMarkCategory::from_str_flexible(&self.green_mark_category) {
                Ok(cat) => Some(cat),
                Err(e) => {
                    errors.push(e);
                    None
                }
            }
        };

        let quantity = parse_non_negative("quantity", &self.quantity)
            .map_err(|e| errors.push(e))
            .unwrap_or(0.0);
        let units = Units::from_str_flexible(&self.units)
            .map_err(|e| errors.push(e))
            .unwrap_or(Units::Tonne);
        let manual_marine_distance =
            parse_optional_non_negative("manualMarineDistance", &self.manual_marine_distance)
                .map_err(|e| errors.push(e))
                .unwrap_or(None);
        let international_road_distance =
            parse_non_negative("internationalRoadDistance", &self.international_road_distance)
                .map_err(|e| errors.push(e))
                .unwrap_or(0.0);
        let local_road_distance = parse_non_negative("localRoadDistance", &self.local_road_distance)
            .map_err(|e| errors.push(e))
            .unwrap_or(0.0);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Row {
            component_id: self.component_id.trim().to_string(),
            green_mark_category,
            country_id: self.country_id.trim().to_string(),
            quantity,
            units,
            marine_vehicle_id: self.marine_vehicle_id.trim().to_string(),
            manual_marine_distance,
            international_road_vehicle_id: self.international_road_vehicle_id.trim().to_string(),
            local_road_vehicle_id: self.local_road_vehicle_id.trim().to_string(),
            international_road_distance,
            local_road_distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row() -> RawRow {
        RawRow {
            component_id: "ready-mix-concrete".to_string(),
            green_mark_category: "Concrete".to_string(),
            country_id: "singapore".to_string(),
            quantity: "20".to_string(),
            units: "tonne".to_string(),
            marine_vehicle_id: "container-ship-5000-teu".to_string(),
            manual_marine_distance: String::new(),
            international_road_vehicle_id: "rigid-truck-26t".to_string(),
            local_road_vehicle_id: "rigid-truck-26t".to_string(),
            international_road_distance: "0".to_string(),
            local_road_distance: "50".to_string(),
        }
    }

    #[test]
    fn test_units_serialization() {
        assert_eq!(serde_json::to_string(&Units::Tonne).unwrap(), "\"tonne\"");
        assert_eq!(serde_json::to_string(&Units::Kg).unwrap(), "\"kg\"");

        let parsed: Units = serde_json::from_str("\"tonne\"").unwrap();
        assert_eq!(parsed, Units::Tonne);
    }

    #[test]
    fn test_units_conversion() {
        assert_eq!(Units::Tonne.to_kilograms_factor(), 1000.0);
        assert_eq!(Units::Kg.to_kilograms_factor(), 1.0);
    }

    #[test]
    fn test_units_from_str_flexible() {
        assert_eq!(Units::from_str_flexible("Tonnes").unwrap(), Units::Tonne);
        assert_eq!(Units::from_str_flexible(" kg ").unwrap(), Units::Kg);
        assert!(Units::from_str_flexible("pounds").is_err());
    }

    #[test]
    fn test_category_from_str_flexible() {
        assert_eq!(
            GreenMarkCategory::from_str_flexible("steel").unwrap(),
            GreenMarkCategory::Steel
        );
        assert!(GreenMarkCategory::from_str_flexible("timber").is_err());
    }

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("quantity", "12.5").unwrap(), 12.5);
        assert_eq!(parse_non_negative("quantity", " 0 ").unwrap(), 0.0);

        assert!(parse_non_negative("quantity", "-1").is_err());
        assert!(parse_non_negative("quantity", "abc").is_err());
        assert!(parse_non_negative("quantity", "NaN").is_err());
        assert!(parse_non_negative("quantity", "inf").is_err());
        assert!(parse_non_negative("quantity", "").is_err());
    }

    #[test]
    fn test_parse_optional_non_negative() {
        assert_eq!(parse_optional_non_negative("manualMarineDistance", "").unwrap(), None);
        assert_eq!(
            parse_optional_non_negative("manualMarineDistance", "300").unwrap(),
            Some(300.0)
        );
        assert!(parse_optional_non_negative("manualMarineDistance", "-5").is_err());
    }

    #[test]
    fn test_raw_row_validates() {
        let row = raw_row().validate().unwrap();
        assert_eq!(row.component_id, "ready-mix-concrete");
        assert_eq!(row.green_mark_category, Some(GreenMarkCategory::Concrete));
        assert_eq!(row.quantity, 20.0);
        assert_eq!(row.units, Units::Tonne);
        assert_eq!(row.manual_marine_distance, None);
        assert_eq!(row.local_road_distance, 50.0);
        assert_eq!(row.mass_kg(), 20_000.0);
    }

    #[test]
    fn test_raw_row_collects_all_errors() {
        let mut raw = raw_row();
        raw.quantity = "-4".to_string();
        raw.local_road_distance = "fifty".to_string();

        let errors = raw.validate().unwrap_err();
        assert_eq!(errors.len(), 2);

        let fields: Vec<_> = errors.iter().filter_map(|e| e.field()).collect();
        assert!(fields.contains(&"quantity"));
        assert!(fields.contains(&"localRoadDistance"));
    }

    #[test]
    fn test_typed_row_validate() {
        let mut row = raw_row().validate().unwrap();
        assert!(row.validate().is_ok());

        row.quantity = -2.0;
        let err = row.validate().unwrap_err();
        assert_eq!(err.field(), Some("quantity"));

        row.quantity = 2.0;
        row.manual_marine_distance = Some(f64::NAN);
        let err = row.validate().unwrap_err();
        assert_eq!(err.field(), Some("manualMarineDistance"));
    }

    #[test]
    fn test_raw_row_empty_category_is_none() {
        let mut raw = raw_row();
        raw.green_mark_category = String::new();
        let row = raw.validate().unwrap();
        assert_eq!(row.green_mark_category, None);
    }

    #[test]
    fn test_row_serializes_camel_case() {
        let row = raw_row().validate().unwrap();
        let json = serde_json::to_string(&row).unwrap();

        assert!(json.contains("\"componentId\""));
        assert!(json.contains("\"greenMarkCategory\""));
        assert!(json.contains("\"manualMarineDistance\""));
        assert!(json.contains("\"internationalRoadDistance\""));
        assert!(json.contains("\"units\":\"tonne\""));

        let roundtrip: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, row);
    }
}
