use thiserror::Error;

use crate::constants::{MAX_ALTITUDE, MIN_ALTITUDE};
use crate::report::{self, Report};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Please, enter height in meters.")]
    NotANumber { text: String },

    #[error("Valid height range is [-2000; 1200000] in meter.")]
    OutOfRange { height: f64 },
}

/// Parse user-entered text as a geometric altitude (m) inside the model range.
pub fn parse_altitude(text: &str) -> Result<f64, InputError> {
    let height: f64 = text.trim().parse().map_err(|_| InputError::NotANumber {
        text: text.to_string(),
    })?;
    if !(MIN_ALTITUDE..=MAX_ALTITUDE).contains(&height) {
        return Err(InputError::OutOfRange { height });
    }
    Ok(height)
}

/// Validate `text` and evaluate the model there.
pub fn evaluate_text(text: &str) -> Result<Report, InputError> {
    parse_altitude(text).map(report::evaluate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_in_range() {
        assert_eq!(parse_altitude("0"), Ok(0.0));
        assert_eq!(parse_altitude(" 11000 "), Ok(11_000.0));
        assert_eq!(parse_altitude("-2000"), Ok(-2_000.0));
        assert_eq!(parse_altitude("1.2e6"), Ok(1_200_000.0));
    }

    #[test]
    fn rejects_text() {
        let err = parse_altitude("high").unwrap_err();
        assert!(matches!(err, InputError::NotANumber { .. }));
        assert_eq!(err.to_string(), "Please, enter height in meters.");
        assert!(parse_altitude("").is_err());
    }

    #[test]
    fn rejects_out_of_range() {
        for text in ["-2000.5", "1200001", "inf", "NaN"] {
            let err = parse_altitude(text).unwrap_err();
            assert!(matches!(err, InputError::OutOfRange { .. }), "{text} accepted");
        }
        assert_eq!(
            InputError::OutOfRange { height: 1e7 }.to_string(),
            "Valid height range is [-2000; 1200000] in meter."
        );
    }

    #[test]
    fn evaluates_valid_text() {
        let report = evaluate_text("86152").unwrap();
        assert_eq!(report.altitude, 86_152.0);
        assert!(evaluate_text("abc").is_err());
    }
}
