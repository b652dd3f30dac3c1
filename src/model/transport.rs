use super::gas::density;
use super::pressure::pressure;
use super::temperature::temperature;
use crate::constants::{SUTHERLAND_B, SUTHERLAND_S, TRANSPORT_CEILING};

/// `l = FREE_PATH_COEFF·T/P`, m·Pa/K.
const FREE_PATH_COEFF: f64 = 2.332_376e-5;

/// `λ = CONDUCTIVITY_COEFF·T^1.5 / (T + 245.4·10^(-12/T))`, W/(m·K^2.5).
const CONDUCTIVITY_COEFF: f64 = 2.648_151e-3;

fn above_ceiling(h: f64) -> bool {
    h.is_nan() || h > TRANSPORT_CEILING
}

/// Mean free path of air molecules (m). `None` where there is no pressure.
pub fn free_path(h: f64) -> Option<f64> {
    let p = pressure(h);
    if p > 0.0 {
        Some(FREE_PATH_COEFF * temperature(h) / p)
    } else {
        None
    }
}

/// Dynamic viscosity (Pa·s) by Sutherland's law. `None` above 90 km.
pub fn dynamic_viscosity(h: f64) -> Option<f64> {
    if above_ceiling(h) {
        return None;
    }
    let t = temperature(h);
    Some(SUTHERLAND_B * t.powf(1.5) / (t + SUTHERLAND_S))
}

/// Kinematic viscosity (m^2/s), `μ/ρ`. Absent wherever dynamic viscosity is.
pub fn kinematic_viscosity(h: f64) -> Option<f64> {
    dynamic_viscosity(h).map(|mu| mu / density(h))
}

/// Thermal conductivity (W/(m·K)). `None` above 90 km.
pub fn thermal_conductivity(h: f64) -> Option<f64> {
    if above_ceiling(h) {
        return None;
    }
    let t = temperature(h);
    Some(CONDUCTIVITY_COEFF * t.powf(1.5) / (t + 245.4 * 10f64.powf(-12.0 / t)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
