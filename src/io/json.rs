use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::report::Report;

/// Write one report as pretty-printed JSON. Absent values are `null`.
pub fn write_report<W: Write>(writer: W, report: &Report) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, report)
}

/// Write a whole profile as a JSON array of reports.
pub fn write_profile<W: Write>(writer: W, reports: &[Report]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, reports)
}

/// Write a profile to a JSON file at the given path.
pub fn write_profile_file(path: &Path, reports: &[Report]) -> io::Result<()> {
    debug!("Writing {} reports to '{}'", reports.len(), path.display());
    let mut out = BufWriter::new(File::create(path)?);
    write_profile(&mut out, reports)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::evaluate;

    #[test]
    fn json_output_is_valid() {
        let mut buf = Vec::new();
        write_report(&mut buf, &evaluate(95_000.0)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["altitude"], 95_000.0);
        let readings = value["readings"].as_array().unwrap();
        assert_eq!(readings.len(), 11);
        assert_eq!(readings[0]["quantity"], "pressure");
        assert!(readings[0]["value"].is_f64());
        assert_eq!(readings[7]["quantity"], "dynamic_viscosity");
        assert!(readings[7]["value"].is_null());
    }

    #[test]
    fn profile_is_an_array() {
        let reports = vec![evaluate(0.0), evaluate(1_000.0)];
        let mut buf = Vec::new();
        write_profile(&mut buf, &reports).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn writes_to_file() {
        let path = std::env::temp_dir().join(format!("atmocalc-json-{}.json", std::process::id()));
        write_profile_file(&path, &[evaluate(0.0), evaluate(95_000.0)]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let err = write_profile_file(Path::new("/nonexistent/dir/profile.json"), &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
