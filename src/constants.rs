// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.80665; // standard gravity, m/s^2
pub const GAS_CONSTANT: f64 = 8.314; // universal gas constant, J/(mol·K)
pub const MOLAR_MASS_SEA_LEVEL: f64 = 0.028_964_42; // molar mass of air at sea level, kg/mol
pub const EARTH_RADIUS: f64 = 6_356_767.0; // conventional Earth radius, m
pub const GAMMA: f64 = 1.4; // ratio of specific heats

/// Reciprocal Boltzmann constant, 1/(J/K). Turns `P/T` into a number density.
pub const BOLTZMANN_RECIPROCAL: f64 = 7.243_611e22;

// Sutherland's law for dynamic viscosity
pub const SUTHERLAND_B: f64 = 1.458e-6; // Pa·s/K^0.5
pub const SUTHERLAND_S: f64 = 110.4; // K

// ---------------------------------------------------------------------------
// Model range
// ---------------------------------------------------------------------------

pub const MIN_ALTITUDE: f64 = -2_000.0; // m
pub const MAX_ALTITUDE: f64 = 1_200_000.0; // m

/// Top of the barometric (homosphere) regime; above it the model switches to fitted polynomials.
pub const HOMOSPHERE_TOP: f64 = 120_000.0; // m

/// Transport properties (viscosity, conductivity) are not defined above this altitude.
pub const TRANSPORT_CEILING: f64 = 90_000.0; // m
