use log::debug;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Target measurement convention for ingredient quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Imperial,
    #[default]
    Metric,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "imperial" => Ok(UnitSystem::Imperial),
            "metric" => Ok(UnitSystem::Metric),
            other => Err(format!("Unknown unit system: {}", other)),
        }
    }
}

/// Canonical measurement units recognised in ingredient quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Teaspoon,
    Tablespoon,
    Cup,
    Ounce,
    Pound,
    Unknown,
}

impl Unit {
    /// Normalize a free-text unit token to its canonical unit.
    pub fn from_token(token: &str) -> Unit {
        match token.to_ascii_lowercase().as_str() {
            "g" | "gram" | "grams" => Unit::Gram,
            "kg" | "kilogram" | "kilograms" => Unit::Kilogram,
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Unit::Milliliter
            }
            "l" | "liter" | "liters" | "litre" | "litres" => Unit::Liter,
            "tsp" | "teaspoon" | "teaspoons" => Unit::Teaspoon,
            "tbsp" | "tablespoon" | "tablespoons" => Unit::Tablespoon,
            "cup" | "cups" => Unit::Cup,
            "oz" | "ounce" | "ounces" => Unit::Ounce,
            "lb" | "lbs" | "pound" | "pounds" => Unit::Pound,
            _ => Unit::Unknown,
        }
    }

    /// Short code used as the rendered label
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Teaspoon => "tsp",
            Unit::Tablespoon => "tbsp",
            Unit::Cup => "cup",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
            Unit::Unknown => "",
        }
    }
}

/// Parsed form of a measurement string such as "300g" or "2 cups chopped onions"
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
    /// Whatever followed the unit token, kept verbatim
    pub trailing_text: String,
}

impl Quantity {
    /// Parse a measurement string.
    ///
    /// Returns `None` when the input is empty, has no unit token, or the
    /// numeral cannot be read. An unrecognised unit still parses, with
    /// `Unit::Unknown`.
    pub fn parse(measure: &str) -> Option<Quantity> {
        let spaced = separate_number_and_unit(measure.trim());
        if spaced.is_empty() {
            return None;
        }

        let (number_token, rest) = spaced.split_once(char::is_whitespace)?;
        let rest = rest.trim_start();
        let (unit_token, trailing) = match rest.split_once(char::is_whitespace) {
            Some((unit, trailing)) => (unit, trailing.trim_start()),
            None => (rest, ""),
        };

        let value = parse_number(number_token)?;

        Some(Quantity {
            value,
            unit: Unit::from_token(unit_token),
            trailing_text: trailing.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Transform {
    Multiply(f64),
    Divide(f64),
}

impl Transform {
    fn apply(&self, value: f64) -> f64 {
        match *self {
            Transform::Multiply(factor) => value * factor,
            Transform::Divide(divisor) => value / divisor,
        }
    }
}

/// How one source unit is expressed in a target unit system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRule {
    transform: Transform,
    pub target: Unit,
}

impl ConversionRule {
    const fn new(transform: Transform, target: Unit) -> Self {
        ConversionRule { transform, target }
    }

    /// Find the rule for `unit` under `system`.
    ///
    /// The tables are asymmetric: a unit without an entry for the requested
    /// system has no rule and is rendered unchanged.
    pub fn lookup(unit: Unit, system: UnitSystem) -> Option<ConversionRule> {
        use Transform::{Divide, Multiply};

        let rule = match (system, unit) {
            (UnitSystem::Imperial, Unit::Gram) => Self::new(Divide(28.0), Unit::Ounce),
            (UnitSystem::Imperial, Unit::Kilogram) => Self::new(Multiply(35.274), Unit::Ounce),
            (UnitSystem::Imperial, Unit::Milliliter) => Self::new(Divide(240.0), Unit::Cup),
            (UnitSystem::Imperial, Unit::Liter) => Self::new(Multiply(4.167), Unit::Cup),
            (UnitSystem::Imperial, Unit::Ounce) => Self::new(Multiply(1.0), Unit::Ounce),
            (UnitSystem::Imperial, Unit::Pound) => Self::new(Multiply(1.0), Unit::Pound),
            (UnitSystem::Imperial, Unit::Teaspoon) => Self::new(Multiply(1.0), Unit::Teaspoon),
            (UnitSystem::Imperial, Unit::Tablespoon) => {
                Self::new(Multiply(1.0), Unit::Tablespoon)
            }
            (UnitSystem::Imperial, Unit::Cup) => Self::new(Multiply(1.0), Unit::Cup),

            (UnitSystem::Metric, Unit::Ounce) => Self::new(Multiply(28.0), Unit::Gram),
            (UnitSystem::Metric, Unit::Pound) => Self::new(Multiply(454.0), Unit::Gram),
            (UnitSystem::Metric, Unit::Teaspoon) => Self::new(Multiply(5.0), Unit::Milliliter),
            (UnitSystem::Metric, Unit::Tablespoon) => Self::new(Multiply(15.0), Unit::Milliliter),
            (UnitSystem::Metric, Unit::Cup) => Self::new(Multiply(240.0), Unit::Milliliter),
            (UnitSystem::Metric, Unit::Liter) => Self::new(Multiply(1000.0), Unit::Milliliter),

            _ => return None,
        };

        Some(rule)
    }

    pub fn apply(&self, value: f64) -> f64 {
        self.transform.apply(value)
    }
}

/// Convert a free-text ingredient measure into `target`.
///
/// Never fails: empty input yields an empty string, and anything that
/// cannot be parsed or has no rule under `target` is returned unchanged.
pub fn convert(measure: &str, target: UnitSystem) -> String {
    if measure.trim().is_empty() {
        return String::new();
    }

    let Some(quantity) = Quantity::parse(measure) else {
        debug!("Leaving unparsable measure as-is: {:?}", measure);
        return measure.to_string();
    };

    let Some(rule) = ConversionRule::lookup(quantity.unit, target) else {
        debug!("No {} rule for measure {:?}", target, measure);
        return measure.to_string();
    };

    let value = rule.apply(quantity.value);
    let formatted = match (target, rule.target) {
        (UnitSystem::Imperial, Unit::Ounce) => format_ounces(value),
        (UnitSystem::Imperial, unit) => format!("{} {}", format_decimal(value, 2), unit.label()),
        (UnitSystem::Metric, unit) => format!("{} {}", format_decimal(value, 0), unit.label()),
    };

    if quantity.trailing_text.is_empty() {
        formatted
    } else {
        format!("{} {}", formatted, quantity.trailing_text)
    }
}

/// Ounces below a pound stay as ounces; from 16 oz upwards they collapse to "N lb M oz".
fn format_ounces(ounces: f64) -> String {
    // round before splitting so a remainder never rounds up to 16 oz
    let ounces = round_to(ounces, 2);
    if ounces < 16.0 {
        return format!("{} oz", format_decimal(ounces, 2));
    }

    let pounds = (ounces / 16.0).floor();
    let remainder = round_to(ounces - pounds * 16.0, 2);
    if remainder == 0.0 {
        format!("{} lb", pounds)
    } else {
        format!("{} lb {} oz", pounds, format_decimal(remainder, 2))
    }
}

/// "300g" -> "300 g"; leaves already spaced or non-numeric input alone.
fn separate_number_and_unit(measure: &str) -> String {
    static GLUED: OnceLock<Option<Regex>> = OnceLock::new();
    match GLUED
        .get_or_init(|| Regex::new(r"^([0-9./]+)([A-Za-z])").ok())
        .as_ref()
    {
        Some(glued) => glued.replace(measure, "$1 $2").into_owned(),
        None => measure.to_string(),
    }
}

/// Decimal or simple "a/b" fraction. Non-finite results count as unparsable.
fn parse_number(token: &str) -> Option<f64> {
    let value = match token.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.parse().ok()?;
            let denominator: f64 = denominator.parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            numerator / denominator
        }
        None => token.parse::<f64>().ok()?,
    };

    value.is_finite().then_some(value)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn format_decimal(value: f64, decimals: usize) -> String {
    let rounded = round_to(value, decimals as i32);
    // -0.0 prints as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{:.*}", decimals, rounded);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
