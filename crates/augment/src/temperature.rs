//! Computed temperature views over `f64`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Adds read-only temperature views to a value in degrees Celsius.
///
/// Every view is a pure function of the receiver.
pub trait TemperatureExt {
    /// The value itself.
    fn celsius(self) -> f64;

    /// `x * 9/5 + 32`
    fn fahrenheit(self) -> f64;

    /// `x + 273.15`
    fn kelvin(self) -> f64;
}

impl TemperatureExt for f64 {
    fn celsius(self) -> f64 {
        self
    }

    fn fahrenheit(self) -> f64 {
        self * 9.0 / 5.0 + 32.0
    }

    fn kelvin(self) -> f64 {
        self + 273.15
    }
}

/// A temperature scale a Celsius value can be viewed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    /// All scales, in display order.
    pub const ALL: [Scale; 3] = [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin];

    /// View a Celsius value in this scale.
    pub fn convert(self, celsius: f64) -> f64 {
        match self {
            Scale::Celsius => celsius.celsius(),
            Scale::Fahrenheit => celsius.fahrenheit(),
            Scale::Kelvin => celsius.kelvin(),
        }
    }

    /// Lowercase name, as accepted in config and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Scale::Celsius => "celsius",
            Scale::Fahrenheit => "fahrenheit",
            Scale::Kelvin => "kelvin",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(Scale::Celsius),
            "f" | "fahrenheit" => Ok(Scale::Fahrenheit),
            "k" | "kelvin" => Ok(Scale::Kelvin),
            _ => Err(Error::UnknownScale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_eighteen_degrees() {
        let t = 18.0_f64;
        assert_eq!(t.celsius(), 18.0);
        assert!(approx(t.fahrenheit(), 64.4));
        assert!(approx(t.kelvin(), 291.15));
    }

    #[test]
    fn test_views_match_formulas() {
        for x in [-273.15, -40.0, 0.0, 0.5, 18.0, 36.6, 100.0, 1.0e6] {
            assert_eq!(x.celsius(), x);
            assert_eq!(x.fahrenheit(), x * 9.0 / 5.0 + 32.0);
            assert_eq!(x.kelvin(), x + 273.15);
        }
    }

    #[test]
    fn test_known_fixed_points() {
        assert_eq!(0.0_f64.fahrenheit(), 32.0);
        assert_eq!(100.0_f64.fahrenheit(), 212.0);
        assert_eq!((-40.0_f64).fahrenheit(), -40.0);
        assert!(approx((-273.15_f64).kelvin(), 0.0));
    }

    #[test]
    fn test_scale_convert_dispatches_to_views() {
        let t = 18.0_f64;
        assert_eq!(Scale::Celsius.convert(t), t.celsius());
        assert_eq!(Scale::Fahrenheit.convert(t), t.fahrenheit());
        assert_eq!(Scale::Kelvin.convert(t), t.kelvin());
    }

    #[test]
    fn test_parse_scale() {
        assert_eq!("celsius".parse::<Scale>().unwrap(), Scale::Celsius);
        assert_eq!("C".parse::<Scale>().unwrap(), Scale::Celsius);
        assert_eq!(" Kelvin ".parse::<Scale>().unwrap(), Scale::Kelvin);
        assert_eq!("f".parse::<Scale>().unwrap(), Scale::Fahrenheit);

        let err = "rankine".parse::<Scale>().unwrap_err();
        assert!(matches!(err, Error::UnknownScale(ref s) if s == "rankine"));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for scale in Scale::ALL {
            assert_eq!(scale.to_string().parse::<Scale>().unwrap(), scale);
        }
    }

    #[test]
    fn test_deserialize_snake_case() {
        #[derive(Deserialize)]
        struct Doc {
            scales: Vec<Scale>,
        }

        let doc: Doc = toml::from_str(r#"scales = ["kelvin", "celsius"]"#).unwrap();
        assert_eq!(doc.scales, vec![Scale::Kelvin, Scale::Celsius]);
    }
}
