// SPDX-License-Identifier: MPL-2.0
//! Crop-condition simulation parameter model.
//!
//! The simulation form edits a fixed, ordered catalog of 13 agronomic
//! parameters. Each parameter carries its own bounds, unit, and input step.
//! While the user is typing, a field may briefly hold a non-numeric value
//! (empty string or a bare minus sign); everything else is committed only
//! when it parses to a number inside the declared range.

use serde_json::{Map, Number, Value};

/// Identifiers of the 13 simulation parameters.
///
/// `as_str` yields the exact wire names the backend expects as keys of the
/// flat request record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamId {
    SoilMoisture,
    SoilTemperature,
    AirTemperature,
    Humidity,
    Rainfall,
    SoilPh,
    Ec,
    Nitrogen,
    Phosphorus,
    Potassium,
    LeafWetness,
    Ndvi,
    PlantColorIndex,
}

impl ParamId {
    /// All parameters in catalog (display) order.
    pub const ALL: [ParamId; 13] = [
        ParamId::SoilMoisture,
        ParamId::SoilTemperature,
        ParamId::AirTemperature,
        ParamId::Humidity,
        ParamId::Rainfall,
        ParamId::SoilPh,
        ParamId::Ec,
        ParamId::Nitrogen,
        ParamId::Phosphorus,
        ParamId::Potassium,
        ParamId::LeafWetness,
        ParamId::Ndvi,
        ParamId::PlantColorIndex,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ParamId::SoilMoisture => "soil_moisture",
            ParamId::SoilTemperature => "soil_temperature",
            ParamId::AirTemperature => "air_temperature",
            ParamId::Humidity => "humidity",
            ParamId::Rainfall => "rainfall",
            ParamId::SoilPh => "soil_ph",
            ParamId::Ec => "ec",
            ParamId::Nitrogen => "nitrogen",
            ParamId::Phosphorus => "phosphorus",
            ParamId::Potassium => "potassium",
            ParamId::LeafWetness => "leaf_wetness",
            ParamId::Ndvi => "ndvi",
            ParamId::PlantColorIndex => "plant_color_index",
        }
    }

    /// Fluent key for the localized display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ParamId::SoilMoisture => "param-soil-moisture",
            ParamId::SoilTemperature => "param-soil-temperature",
            ParamId::AirTemperature => "param-air-temperature",
            ParamId::Humidity => "param-humidity",
            ParamId::Rainfall => "param-rainfall",
            ParamId::SoilPh => "param-soil-ph",
            ParamId::Ec => "param-ec",
            ParamId::Nitrogen => "param-nitrogen",
            ParamId::Phosphorus => "param-phosphorus",
            ParamId::Potassium => "param-potassium",
            ParamId::LeafWetness => "param-leaf-wetness",
            ParamId::Ndvi => "param-ndvi",
            ParamId::PlantColorIndex => "param-plant-color-index",
        }
    }

    /// Input granularity: the fractional parameters step by 0.1, the rest
    /// by whole units.
    #[must_use]
    pub fn step(self) -> f64 {
        match self {
            ParamId::SoilPh | ParamId::Ec | ParamId::LeafWetness | ParamId::Ndvi => 0.1,
            _ => 1.0,
        }
    }
}

/// Current value of a parameter field.
///
/// `Pending` captures the transient states a numeric input passes through
/// while being edited (`""` and `"-"`); it never reaches the backend and
/// fails validation at submit time.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Valid(f64),
    Pending(String),
}

impl ParamValue {
    /// Resolves the stored value to a number, parsing pending text.
    #[must_use]
    pub fn resolve(&self) -> Option<f64> {
        match self {
            ParamValue::Valid(v) => Some(*v),
            ParamValue::Pending(text) => text.parse::<f64>().ok(),
        }
    }

    /// The text to show in the input field.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            ParamValue::Valid(v) => format_number(*v),
            ParamValue::Pending(text) => text.clone(),
        }
    }
}

/// Formats a value the way a numeric input displays it: integers without a
/// decimal point, fractional values as typed.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// One entry of the parameter catalog.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub id: ParamId,
    pub value: ParamValue,
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

impl Parameter {
    fn new(id: ParamId, default: f64, min: f64, max: f64, unit: &'static str) -> Self {
        Self {
            id,
            value: ParamValue::Valid(default),
            default,
            min,
            max,
            unit,
        }
    }

    /// Whether a number is inside this parameter's inclusive bounds.
    #[must_use]
    pub fn in_range(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// `min - max unit` label for the range column.
    #[must_use]
    pub fn range_label(&self) -> String {
        let label = format!("{} - {}", format_number(self.min), format_number(self.max));
        if self.unit.is_empty() {
            label
        } else {
            format!("{} {}", label, self.unit)
        }
    }
}

/// The fixed, ordered set of 13 parameters with their current values.
#[derive(Debug, Clone)]
pub struct Catalog {
    params: Vec<Parameter>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            params: vec![
                Parameter::new(ParamId::SoilMoisture, 18.0, 0.0, 100.0, "%"),
                Parameter::new(ParamId::SoilTemperature, 26.0, 10.0, 50.0, "°C"),
                Parameter::new(ParamId::AirTemperature, 38.0, 10.0, 50.0, "°C"),
                Parameter::new(ParamId::Humidity, 30.0, 0.0, 100.0, "%"),
                Parameter::new(ParamId::Rainfall, 0.0, 0.0, 2000.0, "mm"),
                Parameter::new(ParamId::SoilPh, 8.1, 4.0, 9.0, ""),
                Parameter::new(ParamId::Ec, 1.8, 0.0, 5.0, "dS/m"),
                Parameter::new(ParamId::Nitrogen, 9.0, 0.0, 200.0, "kg/ha"),
                Parameter::new(ParamId::Phosphorus, 7.0, 0.0, 100.0, "kg/ha"),
                Parameter::new(ParamId::Potassium, 80.0, 0.0, 150.0, "kg/ha"),
                Parameter::new(ParamId::LeafWetness, 0.8, 0.0, 1.0, ""),
                Parameter::new(ParamId::Ndvi, 0.3, 0.0, 1.0, ""),
                Parameter::new(ParamId::PlantColorIndex, 25.0, 0.0, 100.0, ""),
            ],
        }
    }
}

impl Catalog {
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    #[must_use]
    pub fn get(&self, id: ParamId) -> Option<&Parameter> {
        self.params.iter().find(|p| p.id == id)
    }

    /// Applies one field edit.
    ///
    /// Commits in-range numbers, stores `""` and `"-"` verbatim as pending
    /// typing states, and silently rejects everything else (out-of-range
    /// numbers, malformed text), leaving the stored value unchanged.
    ///
    /// Returns `true` when the edit was accepted.
    pub fn update_value(&mut self, id: ParamId, raw: &str) -> bool {
        let Some(param) = self.params.iter_mut().find(|p| p.id == id) else {
            return false;
        };

        if let Ok(value) = raw.parse::<f64>() {
            if value >= param.min && value <= param.max {
                param.value = ParamValue::Valid(value);
                return true;
            }
        }

        if raw.is_empty() || raw == "-" {
            param.value = ParamValue::Pending(raw.to_string());
            return true;
        }

        false
    }

    /// Restores every parameter to its default value.
    pub fn reset(&mut self) {
        for param in &mut self.params {
            param.value = ParamValue::Valid(param.default);
        }
    }

    /// Whether every parameter resolves to a number inside its bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.params.iter().all(|param| {
            param
                .value
                .resolve()
                .is_some_and(|value| param.in_range(value))
        })
    }

    /// Builds the flat `{id: number}` request record, or `None` when any
    /// parameter fails validation.
    #[must_use]
    pub fn to_request_record(&self) -> Option<Map<String, Value>> {
        let mut record = Map::with_capacity(self.params.len());
        for param in &self.params {
            let value = param.value.resolve().filter(|v| param.in_range(*v))?;
            let number = Number::from_f64(value)?;
            record.insert(param.id.as_str().to_string(), Value::Number(number));
        }
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_thirteen_parameters_in_wire_order() {
        let catalog = Catalog::default();
        let ids: Vec<&str> = catalog
            .parameters()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "soil_moisture",
                "soil_temperature",
                "air_temperature",
                "humidity",
                "rainfall",
                "soil_ph",
                "ec",
                "nitrogen",
                "phosphorus",
                "potassium",
                "leaf_wetness",
                "ndvi",
                "plant_color_index",
            ]
        );
    }

    #[test]
    fn defaults_are_all_within_bounds() {
        let catalog = Catalog::default();
        for param in catalog.parameters() {
            assert!(
                param.in_range(param.default),
                "{} default out of range",
                param.id.as_str()
            );
        }
        assert!(catalog.is_valid());
    }

    #[test]
    fn fractional_parameters_step_by_tenths() {
        assert_eq!(ParamId::SoilPh.step(), 0.1);
        assert_eq!(ParamId::Ec.step(), 0.1);
        assert_eq!(ParamId::LeafWetness.step(), 0.1);
        assert_eq!(ParamId::Ndvi.step(), 0.1);
        assert_eq!(ParamId::SoilMoisture.step(), 1.0);
        assert_eq!(ParamId::Rainfall.step(), 1.0);
    }

    #[test]
    fn update_accepts_boundary_values() {
        let mut catalog = Catalog::default();
        for id in ParamId::ALL {
            let (min, max) = {
                let param = catalog.get(id).unwrap();
                (param.min, param.max)
            };
            assert!(catalog.update_value(id, &format_number(min)));
            assert_eq!(catalog.get(id).unwrap().value, ParamValue::Valid(min));
            assert!(catalog.update_value(id, &format_number(max)));
            assert_eq!(catalog.get(id).unwrap().value, ParamValue::Valid(max));
        }
    }

    #[test]
    fn update_rejects_values_just_outside_bounds() {
        let mut catalog = Catalog::default();
        for id in ParamId::ALL {
            let (min, max, before) = {
                let param = catalog.get(id).unwrap();
                (param.min, param.max, param.value.clone())
            };
            assert!(!catalog.update_value(id, &format!("{}", min - 0.001)));
            assert!(!catalog.update_value(id, &format!("{}", max + 0.001)));
            assert_eq!(catalog.get(id).unwrap().value, before);
        }
    }

    #[test]
    fn update_rejects_malformed_text_silently() {
        let mut catalog = Catalog::default();
        let before = catalog.get(ParamId::Humidity).unwrap().value.clone();
        assert!(!catalog.update_value(ParamId::Humidity, "abc"));
        assert!(!catalog.update_value(ParamId::Humidity, "12abc"));
        assert!(!catalog.update_value(ParamId::Humidity, "--"));
        assert_eq!(catalog.get(ParamId::Humidity).unwrap().value, before);
    }

    #[test]
    fn empty_and_bare_minus_are_transient_states() {
        let mut catalog = Catalog::default();
        assert!(catalog.update_value(ParamId::Nitrogen, ""));
        assert_eq!(
            catalog.get(ParamId::Nitrogen).unwrap().value,
            ParamValue::Pending(String::new())
        );
        assert!(!catalog.is_valid());

        assert!(catalog.update_value(ParamId::Nitrogen, "-"));
        assert_eq!(
            catalog.get(ParamId::Nitrogen).unwrap().value,
            ParamValue::Pending("-".to_string())
        );
        assert!(catalog.to_request_record().is_none());
    }

    #[test]
    fn reset_restores_defaults_and_is_idempotent() {
        let mut catalog = Catalog::default();
        catalog.update_value(ParamId::SoilMoisture, "55");
        catalog.update_value(ParamId::SoilPh, "");
        catalog.reset();

        let fresh = Catalog::default();
        for (a, b) in catalog.parameters().iter().zip(fresh.parameters()) {
            assert_eq!(a.value, b.value);
        }

        catalog.reset();
        assert_eq!(
            catalog.get(ParamId::SoilMoisture).unwrap().value,
            ParamValue::Valid(18.0)
        );
        assert_eq!(
            catalog.get(ParamId::SoilPh).unwrap().value,
            ParamValue::Valid(8.1)
        );
    }

    #[test]
    fn request_record_maps_every_id_to_its_number() {
        let catalog = Catalog::default();
        let record = catalog.to_request_record().expect("defaults are valid");
        assert_eq!(record.len(), 13);
        assert_eq!(record["soil_moisture"], serde_json::json!(18.0));
        assert_eq!(record["soil_ph"], serde_json::json!(8.1));
        assert_eq!(record["ndvi"], serde_json::json!(0.3));
    }

    #[test]
    fn request_record_resolves_pending_numeric_text() {
        let mut catalog = Catalog::default();
        // A pending state left by typing can still hold a parsable number
        // only via Valid commits; force one through the Pending arm to cover
        // the resolve path.
        catalog.update_value(ParamId::Rainfall, "");
        assert!(catalog.to_request_record().is_none());
        catalog.update_value(ParamId::Rainfall, "120");
        let record = catalog.to_request_record().expect("valid again");
        assert_eq!(record["rainfall"], serde_json::json!(120.0));
    }

    #[test]
    fn format_number_drops_trailing_fraction_for_integers() {
        assert_eq!(format_number(18.0), "18");
        assert_eq!(format_number(8.1), "8.1");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-2.5), "-2.5");
    }

    #[test]
    fn range_label_includes_unit_when_present() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.get(ParamId::SoilMoisture).unwrap().range_label(),
            "0 - 100 %"
        );
        assert_eq!(catalog.get(ParamId::SoilPh).unwrap().range_label(), "4 - 9");
    }
}
