//! Standard atmosphere from -2 km to 1200 km as pure functions of geometric altitude (m).
//!
//! Every quantity is a piecewise law over an ordered table of `(lower, upper]` layers. Below
//! 120 km pressure and temperature follow the barometric lapse-rate layers; above it the model
//! switches to fitted polynomials in geometric altitude.

pub mod concentration;
pub mod gas;
pub mod geopotential;
pub mod layer;
pub mod molar_weight;
pub mod pressure;
pub mod temperature;
pub mod transport;

pub use concentration::concentration;
pub use gas::{density, sound_speed};
pub use geopotential::geopotential_height;
pub use molar_weight::molar_weight;
pub use pressure::pressure;
pub use temperature::temperature;
pub use transport::{dynamic_viscosity, free_path, kinematic_viscosity, thermal_conductivity};
