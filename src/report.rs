use std::fmt;

use log::trace;
use serde::Serialize;

use crate::model;

/// Rendered in place of a value the model does not define at an altitude.
pub const ABSENT: &str = "None";

/// The eleven quantities the model reports, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Pressure,
    Temperature,
    Density,
    MolarWeight,
    Concentration,
    SoundSpeed,
    FreePath,
    DynamicViscosity,
    KinematicViscosity,
    ThermalConductivity,
    GeopotentialHeight,
}

impl Quantity {
    pub const ALL: [Quantity; 11] = [
        Quantity::Pressure,
        Quantity::Temperature,
        Quantity::Density,
        Quantity::MolarWeight,
        Quantity::Concentration,
        Quantity::SoundSpeed,
        Quantity::FreePath,
        Quantity::DynamicViscosity,
        Quantity::KinematicViscosity,
        Quantity::ThermalConductivity,
        Quantity::GeopotentialHeight,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Quantity::Pressure => "P",
            Quantity::Temperature => "T",
            Quantity::Density => "rho",
            Quantity::MolarWeight => "M",
            Quantity::Concentration => "n",
            Quantity::SoundSpeed => "a",
            Quantity::FreePath => "l",
            Quantity::DynamicViscosity => "mu",
            Quantity::KinematicViscosity => "nu",
            Quantity::ThermalConductivity => "W",
            Quantity::GeopotentialHeight => "H",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Quantity::Pressure => "Pa",
            Quantity::Temperature => "K",
            Quantity::Density => "kg/m^3",
            Quantity::MolarWeight => "kg/mole",
            Quantity::Concentration => "m^-3",
            Quantity::SoundSpeed => "m/s",
            Quantity::FreePath => "m",
            Quantity::DynamicViscosity => "Pa*s",
            Quantity::KinematicViscosity => "m^2/s",
            Quantity::ThermalConductivity => "W/(m*K)",
            Quantity::GeopotentialHeight => "m",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Pressure => "pressure",
            Quantity::Temperature => "temperature",
            Quantity::Density => "density",
            Quantity::MolarWeight => "molar weight",
            Quantity::Concentration => "concentration",
            Quantity::SoundSpeed => "sound speed",
            Quantity::FreePath => "mean free path",
            Quantity::DynamicViscosity => "dynamic viscosity",
            Quantity::KinematicViscosity => "kinematic viscosity",
            Quantity::ThermalConductivity => "thermal conductivity",
            Quantity::GeopotentialHeight => "geopotential height",
        }
    }

    /// Evaluate this quantity at geometric altitude `h` (m).
    pub fn at(self, h: f64) -> Option<f64> {
        match self {
            Quantity::Pressure => Some(model::pressure(h)),
            Quantity::Temperature => Some(model::temperature(h)),
            Quantity::Density => Some(model::density(h)),
            Quantity::MolarWeight => Some(model::molar_weight(h)),
            Quantity::Concentration => Some(model::concentration(h)),
            Quantity::SoundSpeed => Some(model::sound_speed(h)),
            Quantity::FreePath => model::free_path(h),
            Quantity::DynamicViscosity => model::dynamic_viscosity(h),
            Quantity::KinematicViscosity => model::kinematic_viscosity(h),
            Quantity::ThermalConductivity => model::thermal_conductivity(h),
            Quantity::GeopotentialHeight => Some(model::geopotential_height(h)),
        }
    }
}

/// One quantity evaluated at one altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub quantity: Quantity,
    pub value: Option<f64>,
}

impl Reading {
    pub fn symbol(&self) -> &'static str {
        self.quantity.symbol()
    }

    pub fn unit(&self) -> &'static str {
        self.quantity.unit()
    }

    pub fn formatted(&self) -> String {
        format_value(self.value)
    }
}

/// Every quantity of the model at a single altitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub altitude: f64, // m
    pub readings: [Reading; 11],
}

impl Report {
    /// Raw value of one quantity.
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        self.readings
            .iter()
            .find(|r| r.quantity == quantity)
            .and_then(|r| r.value)
    }

    /// `(symbol, formatted value, unit)` in display order.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, String, &'static str)> + '_ {
        self.readings
            .iter()
            .map(|r| (r.symbol(), r.formatted(), r.unit()))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, value, unit) in self.rows() {
            writeln!(f, "{symbol} = {value} {unit}")?;
        }
        Ok(())
    }
}

/// Evaluate every quantity at geometric altitude `h` (m).
///
/// No validation happens here; callers restrict `h` to the model range first
/// (see [`crate::input::parse_altitude`]).
pub fn evaluate(h: f64) -> Report {
    trace!("evaluating atmosphere at {h} m");
    Report {
        altitude: h,
        readings: Quantity::ALL.map(|quantity| Reading {
            quantity,
            value: quantity.at(h),
        }),
    }
}

/// Scientific notation with 3 fractional digits when `|v| < 1e-3` or `|v| > 1e6`, fixed with 3
/// fractional digits otherwise. Absent values render as [`ABSENT`].
pub fn format_value(value: Option<f64>) -> String {
    match value {
        None => ABSENT.to_string(),
        Some(v) if v.abs() < 1e-3 || v.abs() > 1e6 => scientific(v),
        Some(v) => format!("{v:.3}"),
    }
}

/// `{:.3e}` with a signed two-digit exponent, e.g. `2.547e+25`.
fn scientific(v: f64) -> String {
    let raw = format!("{v:.3e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn symbols(report: &Report) -> Vec<&'static str> {
        report.rows().map(|(s, _, _)| s).collect()
    }

    #[test]
    fn rows_in_display_order() {
        let report = evaluate(0.0);
        assert_eq!(
            symbols(&report),
            vec!["P", "T", "rho", "M", "n", "a", "l", "mu", "nu", "W", "H"]
        );
        let units: Vec<&str> = report.rows().map(|(_, _, u)| u).collect();
        assert_eq!(
            units,
            vec![
                "Pa", "K", "kg/m^3", "kg/mole", "m^-3", "m/s", "m", "Pa*s", "m^2/s", "W/(m*K)",
                "m"
            ]
        );
    }

    #[test]
    fn sea_level_report() {
        let report = evaluate(0.0);
        let rows: Vec<(&str, String, &str)> = report.rows().collect();
        assert_eq!(rows[0], ("P", "101324.310".to_string(), "Pa"));
        assert_eq!(rows[1], ("T", "288.150".to_string(), "K"));
        assert_eq!(rows[2], ("rho", "1.225".to_string(), "kg/m^3"));
        assert_eq!(rows[4], ("n", "2.547e+25".to_string(), "m^-3"));
        assert_eq!(rows[6], ("l", "6.633e-08".to_string(), "m"));
        assert_eq!(rows[7], ("mu", "1.789e-05".to_string(), "Pa*s"));
        // A computed zero is a value, not an absent one.
        assert_eq!(rows[10], ("H", "0.000e+00".to_string(), "m"));
        assert_relative_eq!(report.get(Quantity::Pressure).unwrap(), 101_325.0, max_relative = 1e-2);
    }

    #[test]
    fn absent_transport_above_90km() {
        let report = evaluate(95_000.0);
        for q in [
            Quantity::DynamicViscosity,
            Quantity::KinematicViscosity,
            Quantity::ThermalConductivity,
        ] {
            assert_eq!(report.get(q), None);
        }
        let rows: Vec<(&str, String, &str)> = report.rows().collect();
        assert_eq!(rows[7].1, "None");
        assert_eq!(rows[8].1, "None");
        assert_eq!(rows[9].1, "None");
        assert!(report.get(Quantity::FreePath).is_some());
    }

    #[test]
    fn top_of_model() {
        let report = evaluate(1_200_000.0);
        assert_eq!(report.get(Quantity::Temperature), Some(1_000.0));
        let rows: Vec<(&str, String, &str)> = report.rows().collect();
        assert_eq!(rows[0].1, "4.431e-09");
        assert_eq!(rows[1].1, "1000.000");
        assert_eq!(rows[10].1, "1.009e+06");
    }

    #[test]
    fn floor_of_model() {
        let report = evaluate(-2_000.0);
        assert_eq!(report.get(Quantity::Pressure), Some(127_783.0));
        assert_eq!(report.rows().next().unwrap().1, "127783.000");
    }

    #[test]
    fn value_formatting() {
        assert_eq!(format_value(None), "None");
        assert_eq!(format_value(Some(0.0)), "0.000e+00");
        assert_eq!(format_value(Some(0.001)), "0.001");
        assert_eq!(format_value(Some(0.000_999)), "9.990e-04");
        assert_eq!(format_value(Some(1_000_000.0)), "1000000.000");
        assert_eq!(format_value(Some(1_000_001.0)), "1.000e+06");
        assert_eq!(format_value(Some(-3.0e-7)), "-3.000e-07");
        assert_eq!(format_value(Some(5.263_185e6)), "5.263e+06");
        assert_eq!(format_value(Some(2.5e123)), "2.500e+123");
    }

    #[test]
    fn display_lists_every_row() {
        let text = evaluate(30_000.0).to_string();
        assert_eq!(text.lines().count(), 11);
        assert!(text.starts_with("P = 1196.956 Pa\n"));
    }
}
