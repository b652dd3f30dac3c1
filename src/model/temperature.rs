use super::geopotential::geopotential_height;
use super::layer::{self, Layer};
use super::molar_weight::molar_weight;
use crate::constants::{HOMOSPHERE_TOP, MAX_ALTITUDE, MOLAR_MASS_SEA_LEVEL};

/// At or below this geopotential altitude temperature is pinned to [`FLOOR_TEMPERATURE`].
const FLOOR_GEOPOTENTIAL: f64 = -2_000.0; // m
const FLOOR_TEMPERATURE: f64 = 301.15; // K

/// Returned past the top of the model.
const EXOSPHERE_TEMPERATURE: f64 = 1_000.0; // K

/// Linear profile `T = start + rate·(x - lower)` over a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Gradient {
    start: f64, // K
    rate: f64,  // K/m
}

impl Layer<Gradient> {
    fn temperature_at(&self, x: f64) -> f64 {
        self.coeffs.start + self.coeffs.rate * (x - self.lower)
    }
}

const fn gradient(lower: f64, upper: f64, start: f64, rate: f64) -> Layer<Gradient> {
    Layer::new(lower, upper, Gradient { start, rate })
}

/// Molar temperature below 120 km, indexed by geopotential altitude.
const MOLAR_LAYERS: [Layer<Gradient>; 11] = [
    gradient(FLOOR_GEOPOTENTIAL, 0.0, 301.15, -0.0065),
    gradient(0.0, 11_000.0, 288.15, -0.0065),
    gradient(11_000.0, 20_000.0, 216.65, 0.0),
    gradient(20_000.0, 32_000.0, 216.65, 0.0010),
    gradient(32_000.0, 47_000.0, 228.65, 0.0028),
    gradient(47_000.0, 51_000.0, 270.65, 0.0),
    gradient(51_000.0, 71_000.0, 270.65, -0.0028),
    gradient(71_000.0, 85_000.0, 214.65, -0.0020),
    gradient(85_000.0, 94_000.0, 186.65, 0.0),
    gradient(94_000.0, 102_450.0, 186.65, 0.0030),
    // Closed above by the geometric 120 km limit, not by a geopotential bound.
    gradient(102_450.0, f64::INFINITY, 212.00, 0.0110),
];

/// Thermodynamic temperature above 120 km, indexed by geometric altitude.
const THERMO_LAYERS: [Layer<Gradient>; 9] = [
    gradient(HOMOSPHERE_TOP, 140_000.0, 334.42, 0.011259),
    gradient(140_000.0, 160_000.0, 559.60, 0.006800),
    gradient(160_000.0, 200_000.0, 695.60, 0.003970),
    gradient(200_000.0, 250_000.0, 854.40, 0.001750),
    gradient(250_000.0, 325_000.0, 941.90, 0.000570),
    gradient(325_000.0, 400_000.0, 984.65, 0.000150),
    gradient(400_000.0, 600_000.0, 995.90, 0.000020),
    gradient(600_000.0, 800_000.0, 999.90, 0.000_000_5),
    gradient(800_000.0, MAX_ALTITUDE, 1_000.00, 0.0),
];

/// Kinetic temperature (K) at geometric altitude `h` (m).
///
/// Below 120 km the molar temperature follows geopotential lapse-rate layers and is corrected by
/// the molar mass ratio `M(h)/Mc`. Above 120 km the profile is linear in geometric altitude.
pub fn temperature(h: f64) -> f64 {
    if h <= HOMOSPHERE_TOP {
        let big_h = geopotential_height(h);
        if big_h <= FLOOR_GEOPOTENTIAL {
            return FLOOR_TEMPERATURE;
        }
        let molar = layer::find(&MOLAR_LAYERS, big_h)
            .map_or(FLOOR_TEMPERATURE, |layer| layer.temperature_at(big_h));
        return molar * molar_weight(h) / MOLAR_MASS_SEA_LEVEL;
    }
    if h <= MAX_ALTITUDE {
        return layer::find(&THERMO_LAYERS, h)
            .map_or(EXOSPHERE_TEMPERATURE, |layer| layer.temperature_at(h));
    }
    EXOSPHERE_TEMPERATURE
}

/// Geometric altitudes at which temperature changes law.
#[cfg(test)]
pub(crate) fn boundaries() -> Vec<f64> {
    use crate::constants::EARTH_RADIUS;

    // Invert H = R·h/(R + h) for the geopotential breakpoints.
    let geometric = |big_h: f64| EARTH_RADIUS * big_h / (EARTH_RADIUS - big_h);
    let mut b: Vec<f64> = layer::boundaries(&MOLAR_LAYERS).map(geometric).collect();
    b.push(HOMOSPHERE_TOP);
    b.extend(layer::boundaries(&THERMO_LAYERS));
    b
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
