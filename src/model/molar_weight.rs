use super::layer::{self, Layer};
use crate::constants::{MAX_ALTITUDE, MOLAR_MASS_SEA_LEVEL};

/// Below this altitude air is fully mixed and the molar mass is constant.
const TURBOPAUSE: f64 = 94_000.0; // m

/// Fits are published in g/mol.
const GRAMS_TO_KILOGRAMS: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Fit {
    /// Square-root blend from the mixed value into dissociation:
    /// `base + amplitude·sqrt(1 - curvature·(h - lower)²) - tail·sqrt(upper - h)`.
    Blend {
        base: f64,
        amplitude: f64,
        curvature: f64,
        tail: f64,
    },
    /// `start - slope·(h - lower)`.
    Linear { start: f64, slope: f64 },
    /// Continues from the layer's lower boundary value. The boundary value comes back in kg/mol
    /// and is multiplied by 1000 before the g/mol slope applies.
    Continued { slope: f64 },
    /// `B0 + B1·h + B2·h² + B3·h³`.
    Cubic([f64; 4]),
}

const LAYERS: [Layer<Fit>; 9] = [
    Layer::new(
        94_000.0,
        97_000.0,
        Fit::Blend {
            base: 28.82,
            amplitude: 0.158,
            curvature: 7.5e-8,
            tail: 2.479e-4,
        },
    ),
    Layer::new(97_000.0, 97_500.0, Fit::Linear { start: 28.91, slope: 0.000_12 }),
    Layer::new(97_500.0, 120_000.0, Fit::Continued { slope: 0.000_151_1 }),
    Layer::new(
        120_000.0,
        250_000.0,
        Fit::Cubic([46.9083, -29.71210e-05, 12.08693e-10, -1.85675e-15]),
    ),
    Layer::new(
        250_000.0,
        400_000.0,
        Fit::Cubic([40.4668, -15.52722e-05, 3.55735e-10, -3.02340e-16]),
    ),
    Layer::new(
        400_000.0,
        650_000.0,
        Fit::Cubic([6.3770, 6.25497e-05, -1.10144e-10, 3.36907e-17]),
    ),
    Layer::new(
        650_000.0,
        900_000.0,
        Fit::Cubic([75.6896, -17.61243e-05, 1.33603e-10, -2.87884e-17]),
    ),
    Layer::new(
        900_000.0,
        1_050_000.0,
        Fit::Cubic([112.4838, -30.68086e-05, 2.90329e-10, -9.20616e-17]),
    ),
    Layer::new(
        1_050_000.0,
        1_200_000.0,
        Fit::Cubic([9.89704838, -1.19732e-05, 7.78247e-12, -1.77541e-18]),
    ),
];

/// Molar mass of air (kg/mol) at geometric altitude `h` (m).
///
/// Constant up to the turbopause, fitted above it, flat beyond the top of the model.
pub fn molar_weight(h: f64) -> f64 {
    if h <= TURBOPAUSE {
        return MOLAR_MASS_SEA_LEVEL;
    }
    if h > MAX_ALTITUDE {
        return molar_weight(MAX_ALTITUDE);
    }
    match layer::find(&LAYERS, h) {
        Some(layer) => grams_per_mole(layer, h) * GRAMS_TO_KILOGRAMS,
        None => MOLAR_MASS_SEA_LEVEL,
    }
}

fn grams_per_mole(layer: &Layer<Fit>, h: f64) -> f64 {
    match layer.coeffs {
        Fit::Blend {
            base,
            amplitude,
            curvature,
            tail,
        } => {
            let dh = h - layer.lower;
            base + amplitude * (1.0 - curvature * dh * dh).sqrt() - tail * (layer.upper - h).sqrt()
        }
        Fit::Linear { start, slope } => start - slope * (h - layer.lower),
        Fit::Continued { slope } => 1000.0 * molar_weight(layer.lower) - slope * (h - layer.lower),
        Fit::Cubic(b) => layer::polynomial(&b, h),
    }
}

#[cfg(test)]
pub(crate) fn boundaries() -> Vec<f64> {
    let mut b = vec![TURBOPAUSE];
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
    fn constant_below_turbopause() {
        assert_eq!(molar_weight(-2_000.0), MOLAR_MASS_SEA_LEVEL);
        assert_eq!(molar_weight(50_000.0), MOLAR_MASS_SEA_LEVEL);
        assert_eq!(molar_weight(94_000.0), MOLAR_MASS_SEA_LEVEL);
    }

    #[test]
    fn dissociation_blend_and_linear_layers() {
        assert_relative_eq!(molar_weight(95_500.0), 0.028_954_452_076_262_35, max_relative = 1e-12);
        assert_relative_eq!(molar_weight(97_250.0), 0.028_88, max_relative = 1e-12);
    }

    #[test]
    fn continued_layer_keeps_thousandfold_seed() {
        assert_relative_eq!(molar_weight(97_500.0), 0.028_85, max_relative = 1e-12);
        assert_relative_eq!(molar_weight(120_000.0), 0.025_450_25, max_relative = 1e-9);
    }

    #[test]
    fn continuous_across_boundaries() {
        for b in boundaries() {
            let below = molar_weight(b);
            let above = molar_weight(b + 1e-7 * b);
            assert_relative_eq!(below, above, max_relative = 5e-4);
        }
    }

    #[test]
    fn decreases_through_thermosphere() {
        assert!(molar_weight(150_000.0) < molar_weight(120_000.0));
        assert!(molar_weight(600_000.0) < molar_weight(300_000.0));
        assert!(molar_weight(1_200_000.0) < molar_weight(900_000.0));
    }

    #[test]
    fn flat_above_model_top() {
        assert_eq!(molar_weight(1_500_000.0), molar_weight(MAX_ALTITUDE));
        assert_relative_eq!(molar_weight(MAX_ALTITUDE), 0.003_668_056_7, max_relative = 1e-9);
    }

    #[test]
    fn nan_falls_back_to_sea_level() {
        assert_eq!(molar_weight(f64::NAN), MOLAR_MASS_SEA_LEVEL);
    }
}
