use super::layer::{self, Layer};
use super::pressure::pressure;
use super::temperature::temperature;
use crate::constants::{BOLTZMANN_RECIPROCAL, HOMOSPHERE_TOP, MAX_ALTITUDE};

/// `(A0 + A1·h + A2·h² + A3·h³ + A4·h⁴)·10^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Quartic {
    coeffs: [f64; 5],
    exponent: i32,
}

impl Quartic {
    fn at(&self, h: f64) -> f64 {
        layer::polynomial(&self.coeffs, h) * 10f64.powi(self.exponent)
    }
}

const fn quartic(lower: f64, upper: f64, coeffs: [f64; 5], exponent: i32) -> Layer<Quartic> {
    Layer::new(lower, upper, Quartic { coeffs, exponent })
}

#[rustfmt::skip]
const LAYERS: [Layer<Quartic>; 9] = [
    quartic(HOMOSPHERE_TOP, 150_000.0,
        [0.210005867e+04, -0.561844757e-01, 0.5663986231e-06, -0.2547466858e-11, 0.4309844119e-17], 17),
    quartic(150_000.0, 200_000.0,
        [0.10163937e+04, -0.2119530830e-01, 0.1671627815e-06, -0.5894237068e-12, 0.7826684089e-18], 16),
    quartic(200_000.0, 250_000.0,
        [0.7631575e+03, -0.1150600844e-01, 0.6612598428e-07, -0.1708736137e-12, 0.1669823114e-18], 15),
    quartic(250_000.0, 350_000.0,
        [0.1882203e+03, -0.2265999519e-02, 0.1041726141e-07, -0.2155574922e-13, 0.1687430962e-19], 15),
    quartic(350_000.0, 450_000.0,
        [0.2804823e+03, -0.2432231125e-02, 0.8055024663e-08, -0.1202418519e-13, 0.6805101379e-20], 14),
    quartic(450_000.0, 600_000.0,
        [0.5599362e+03, -0.3714141392e-02, 0.9358870345e-08, -0.1058591881e-13, 0.4525531532e-20], 13),
    quartic(600_000.0, 800_000.0,
        [0.8358756e+03, -0.4265393073e-02, 0.8252842085e-08, -0.7150127437e-14, 0.2335744331e-20], 12),
    quartic(800_000.0, 1_000_000.0,
        [0.8364965e+02, -0.3162492458e-03, 0.4602064246e-09, -0.3021858469e-15, 0.7512304301e-22], 12),
    quartic(1_000_000.0, MAX_ALTITUDE,
        [0.383220e+02, -0.50980e-04, 0.181e-10, 0.0, 0.0], 11),
];

/// Number density of air molecules (m^-3) at geometric altitude `h` (m).
///
/// Ideal gas `n = P/(kT)` up to 120 km, fitted quartics above, flat beyond the top of the model.
pub fn concentration(h: f64) -> f64 {
    if h <= HOMOSPHERE_TOP {
        return BOLTZMANN_RECIPROCAL * pressure(h) / temperature(h);
    }
    if h > MAX_ALTITUDE {
        return concentration(MAX_ALTITUDE);
    }
    match layer::find(&LAYERS, h) {
        Some(layer) => layer.coeffs.at(h),
        None => concentration(MAX_ALTITUDE),
    }
}

#[cfg(test)]
pub(crate) fn boundaries() -> Vec<f64> {
    let mut b = vec![HOMOSPHERE_TOP];
    b.extend(layer::boundaries(&LAYERS));
    b
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sea_level_ideal_gas() {
        assert_relative_eq!(concentration(0.0), 2.547_124_363_134_708e25, max_relative = 1e-9);
    }

    #[test]
    fn thermosphere_fit() {
        assert_relative_eq!(concentration(150_000.0), 5.142_742_437_492_416e16, max_relative = 1e-9);
        assert_relative_eq!(concentration(400_000.0), 1.056_539_222_4e14, max_relative = 1e-8);
        assert_relative_eq!(concentration(MAX_ALTITUDE), 3.21e11, max_relative = 1e-9);
    }

    #[test]
    fn flat_above_model_top() {
        assert_eq!(concentration(2_000_000.0), concentration(MAX_ALTITUDE));
        assert_eq!(concentration(f64::NAN), concentration(MAX_ALTITUDE));
    }

    #[test]
    fn continuous_across_boundaries() {
        // The thermosphere fits join each other to within 1%.
        for b in boundaries() {
            let below = concentration(b);
            let above = concentration(b + 1e-7 * b);
            assert_relative_eq!(below, above, max_relative = 1e-2);
        }
    }

    #[test]
    fn decreases_with_altitude() {
        let mut previous = concentration(-2_000.0);
        let mut h = -1_500.0;
        while h <= MAX_ALTITUDE {
            let n = concentration(h);
            assert!(n <= previous, "concentration rose at {h} m: {previous} -> {n}");
            previous = n;
            h += 500.0;
        }
    }
}
