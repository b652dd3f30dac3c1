use crate::constants::EARTH_RADIUS;

/// Geopotential altitude (m) for a geometric altitude `h` (m).
///
/// `H = R·h / (R + h)`. At `h = -R` the quotient is a removable singularity and `-R` is
/// returned directly.
pub fn geopotential_height(h: f64) -> f64 {
    if h == -EARTH_RADIUS {
        return -EARTH_RADIUS;
    }
    EARTH_RADIUS * h / (EARTH_RADIUS + h)
}
