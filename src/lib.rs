pub mod config;
pub mod constants;
pub mod input;
pub mod io;
pub mod model;
pub mod profile;
pub mod report;

pub use config::{ConfigError, ProfileConfig};
pub use input::{evaluate_text, parse_altitude, InputError};
pub use profile::profile;
pub use report::{evaluate, Quantity, Reading, Report};

// Flat access to the per-quantity functions.
pub mod atmosphere {
    pub use crate::model::*;
}
