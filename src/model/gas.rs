use super::molar_weight::molar_weight;
use super::pressure::pressure;
use super::temperature::temperature;
use crate::constants::{GAMMA, GAS_CONSTANT};

/// Air density (kg/m^3), `P·M/(R·T)`. Zero wherever the model has no pressure.
pub fn density(h: f64) -> f64 {
    pressure(h) * molar_weight(h) / GAS_CONSTANT / temperature(h)
}

/// Speed of sound (m/s), `sqrt(γ·R·T/M)`.
pub fn sound_speed(h: f64) -> f64 {
    (GAMMA * GAS_CONSTANT * temperature(h) / molar_weight(h)).sqrt()
}
