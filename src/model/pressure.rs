use once_cell::sync::Lazy;

use super::concentration::concentration;
use super::geopotential::geopotential_height;
use super::layer::{self, Layer};
use super::temperature::temperature;
use crate::constants::{
    BOLTZMANN_RECIPROCAL, G0, GAS_CONSTANT, HOMOSPHERE_TOP, MAX_ALTITUDE, MOLAR_MASS_SEA_LEVEL,
};

/// At or below this geometric altitude pressure is pinned to [`FLOOR_PRESSURE`].
const FLOOR_ALTITUDE: f64 = -1_999.0; // m
const FLOOR_PRESSURE: f64 = 127_783.0; // Pa

/// Pressure at the lower edge of a barometric layer.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Seed {
    /// Tabulated value, Pa.
    Fixed(f64),
    /// Whatever the layer below yields at the shared boundary.
    Continued,
}

/// Barometric layer: `(H1, P1, T1m, b)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Barometric<P> {
    base: f64,              // geopotential altitude of the lower edge, m
    pressure: P,            // Pa
    molar_temperature: f64, // K
    lapse: f64,             // K/m (geopotential)
}

impl Barometric<f64> {
    /// Pressure at geopotential altitude `big_h` (m).
    fn at(&self, big_h: f64) -> f64 {
        let k = G0 * MOLAR_MASS_SEA_LEVEL / GAS_CONSTANT;
        let ln_p1 = self.pressure.ln();
        if self.lapse == 0.0 {
            // Isothermal
            (ln_p1 - k * (big_h - self.base) / self.molar_temperature).exp()
        } else {
            let ratio = (self.molar_temperature + self.lapse * (big_h - self.base))
                / self.molar_temperature;
            (ln_p1 - k * ratio.ln() / self.lapse).exp()
        }
    }
}

const fn fixed(base: f64, p1: f64, t1m: f64, lapse: f64) -> Barometric<Seed> {
    Barometric {
        base,
        pressure: Seed::Fixed(p1),
        molar_temperature: t1m,
        lapse,
    }
}

const fn continued(base: f64, t1m: f64, lapse: f64) -> Barometric<Seed> {
    Barometric {
        base,
        pressure: Seed::Continued,
        molar_temperature: t1m,
        lapse,
    }
}

/// Layers selected by geometric altitude, each carrying its geopotential base.
const TABLE: [Layer<Barometric<Seed>>; 11] = [
    Layer::new(FLOOR_ALTITUDE, 0.0, fixed(-2_000.0, 127_774.0, 301.15, -0.0065)),
    Layer::new(0.0, 11_019.0, fixed(0.0, 101_325.0, 288.15, -0.0065)),
    Layer::new(11_019.0, 20_063.0, fixed(11_000.0, 22_632.0, 216.65, 0.0)),
    Layer::new(20_063.0, 32_162.0, fixed(20_000.0, 5_474.87, 216.65, 0.0010)),
    Layer::new(32_162.0, 47_350.0, fixed(32_000.0, 868.014, 228.65, 0.0028)),
    Layer::new(47_350.0, 51_412.0, fixed(47_000.0, 110.906, 270.65, 0.0)),
    Layer::new(51_412.0, 71_802.0, fixed(51_000.0, 66.9384, 270.65, -0.0028)),
    Layer::new(71_802.0, 86_152.0, fixed(71_000.0, 3.95639, 214.65, -0.0020)),
    Layer::new(86_152.0, 95_411.0, continued(85_000.0, 186.65, 0.0)),
    Layer::new(95_411.0, 104_128.0, continued(94_000.0, 186.65, 0.0030)),
    Layer::new(104_128.0, HOMOSPHERE_TOP, continued(102_450.0, 212.00, 0.0110)),
];

/// [`TABLE`] with every continued seed replaced by the pressure the layer below produces at
/// the shared boundary. Identical to evaluating `pressure(boundary)` recursively.
static LAYERS: Lazy<Vec<Layer<Barometric<f64>>>> = Lazy::new(|| {
    let mut resolved: Vec<Layer<Barometric<f64>>> = Vec::with_capacity(TABLE.len());
    for layer in &TABLE {
        let seed = match layer.coeffs.pressure {
            Seed::Fixed(p) => p,
            Seed::Continued => resolved
                .last()
                .map_or(FLOOR_PRESSURE, |below| below.coeffs.at(geopotential_height(below.upper))),
        };
        let coeffs = Barometric {
            base: layer.coeffs.base,
            pressure: seed,
            molar_temperature: layer.coeffs.molar_temperature,
            lapse: layer.coeffs.lapse,
        };
        resolved.push(Layer::new(layer.lower, layer.upper, coeffs));
    }
    resolved
});

/// Static pressure (Pa) at geometric altitude `h` (m).
///
/// Barometric layers up to 120 km, `n·k·T` above, and 0 past the top of the model.
pub fn pressure(h: f64) -> f64 {
    if h <= FLOOR_ALTITUDE {
        return FLOOR_PRESSURE;
    }
    if h <= HOMOSPHERE_TOP {
        return layer::find(LAYERS.as_slice(), h)
            .map_or(0.0, |layer| layer.coeffs.at(geopotential_height(h)));
    }
    if h <= MAX_ALTITUDE {
        return concentration(h) * temperature(h) / BOLTZMANN_RECIPROCAL;
    }
    0.0
}

#[cfg(test)]
pub(crate) fn boundaries() -> Vec<f64> {
    let mut b = vec![FLOOR_ALTITUDE];
    b.extend(layer::boundaries(&TABLE));
    b.push(HOMOSPHERE_TOP);
    b
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
