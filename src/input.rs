use serde::{Deserialize, Deserializer, Serialize};
use std::io::{BufReader, Read};
use strum_macros::{Display, EnumIter};

pub fn ingest_for_processing(json: impl Read) -> Result<Input, anyhow::Error> {
    Ok(serde_json::from_reader(BufReader::new(json))?)
}

/// The full set of values a host collects before asking for an estimate.
///
/// Every field falls back to the host's starting value when absent, so `{}` is a
/// valid input document.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(default, deny_unknown_fields)]
pub struct Input {
    /// Floor area of the home, in square feet
    #[serde(deserialize_with = "deserialize_lenient_number")]
    #[cfg_attr(feature = "schemars", schemars(with = "NumericEntry"))]
    pub home_size: f64,
    pub heating_system: HeatingSystem,
    pub cooling_system: CoolingSystem,
    /// Price per kWh of electricity
    #[serde(deserialize_with = "deserialize_lenient_number")]
    #[cfg_attr(feature = "schemars", schemars(with = "NumericEntry"))]
    pub electricity_rate: f64,
    /// Price per litre of heating oil
    #[serde(deserialize_with = "deserialize_lenient_number")]
    #[cfg_attr(feature = "schemars", schemars(with = "NumericEntry"))]
    pub oil_rate: f64,
    /// Price per cubic metre of natural gas
    #[serde(deserialize_with = "deserialize_lenient_number")]
    #[cfg_attr(feature = "schemars", schemars(with = "NumericEntry"))]
    pub gas_rate: f64,
    /// SEER rating of the cooling equipment currently installed
    #[serde(deserialize_with = "deserialize_lenient_number")]
    #[cfg_attr(feature = "schemars", schemars(with = "NumericEntry"))]
    pub current_seer: f64,
    /// When set, the manual annual costs below replace the floor-area based calculation.
    pub manual_mode: bool,
    pub manual_heating_cost: Option<NumericEntry>,
    pub manual_cooling_cost: Option<NumericEntry>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            home_size: 1500.,
            heating_system: Default::default(),
            cooling_system: Default::default(),
            electricity_rate: 0.15,
            oil_rate: 1.20,
            gas_rate: 1.50,
            current_seer: 10.,
            manual_mode: false,
            manual_heating_cost: None,
            manual_cooling_cost: None,
        }
    }
}

impl Input {
    /// Annual heating cost as entered manually, or zero when nothing usable was entered.
    pub fn manual_heating_cost(&self) -> f64 {
        self.manual_heating_cost
            .as_ref()
            .map_or(0., NumericEntry::value)
    }

    /// Annual cooling cost as entered manually, or zero when nothing usable was entered.
    pub fn manual_cooling_cost(&self) -> f64 {
        self.manual_cooling_cost
            .as_ref()
            .map_or(0., NumericEntry::value)
    }
}

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, EnumIter, Eq, Hash, PartialEq, Serialize,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "snake_case")]
pub enum HeatingSystem {
    #[default]
    #[strum(to_string = "Oil Furnace")]
    OilFurnace,
    #[strum(to_string = "Electric Baseboards")]
    ElectricBaseboards,
    #[strum(to_string = "Gas Furnace")]
    GasFurnace,
}

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, EnumIter, Eq, Hash, PartialEq, Serialize,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "snake_case")]
pub enum CoolingSystem {
    #[default]
    #[strum(to_string = "Central AC")]
    CentralAc,
    #[strum(to_string = "Window AC")]
    WindowAc,
    #[strum(to_string = "No Cooling")]
    NoCooling,
}

/// A number as typed into a form: either already numeric, or free text that still
/// needs reading. Any other JSON value (`null`, a boolean, an array or an object) is
/// kept as entered and reads as zero.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(untagged)]
pub enum NumericEntry {
    Number(f64),
    Text(String),
    Other(#[cfg_attr(feature = "arbitrary", arbitrary(default))] serde_json::Value),
}

impl NumericEntry {
    pub fn value(&self) -> f64 {
        match self {
            NumericEntry::Number(number) if number.is_nan() => 0.,
            NumericEntry::Number(number) => *number,
            NumericEntry::Text(text) => parse_lenient_number(text),
            NumericEntry::Other(_) => 0.,
        }
    }
}

impl From<f64> for NumericEntry {
    fn from(value: f64) -> Self {
        NumericEntry::Number(value)
    }
}

impl From<&str> for NumericEntry {
    fn from(value: &str) -> Self {
        NumericEntry::Text(value.to_string())
    }
}

fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumericEntry::deserialize(deserializer).map(|entry| entry.value())
}

/// Read the leading decimal number out of free text, the way form fields are read:
/// whitespace around the text is ignored, anything after the number is ignored, and
/// text that does not start with a number reads as zero.
pub fn parse_lenient_number(text: &str) -> f64 {
    let text = text.trim();
    let bytes = text.as_bytes();
    let count_digits_from =
        |start: usize| bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_digits = count_digits_from(end);
    end += integer_digits;

    let mut mantissa_digits = integer_digits;
    if bytes.get(end) == Some(&b'.') {
        let fraction_digits = count_digits_from(end + 1);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
            mantissa_digits += fraction_digits;
        }
    }
    if mantissa_digits == 0 {
        return 0.;
    }

    // an exponent only counts when at least one digit follows the marker
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign_len = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_digits = count_digits_from(end + 1 + sign_len);
        if exponent_digits > 0 {
            end += 1 + sign_len + exponent_digits;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => 0.,
    }
}

/// Range and granularity a host control offers for a numeric input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputBounds {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const HOME_SIZE_BOUNDS: InputBounds = InputBounds {
    min: 500.,
    max: 4000.,
    step: 100.,
};

pub const SEER_BOUNDS: InputBounds = InputBounds {
    min: 8.,
    max: 16.,
    step: 0.5,
};
