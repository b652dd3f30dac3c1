use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::debug;

use crate::report::{Quantity, Report};

/// Write a profile as CSV.
///
/// Columns: altitude, then one column per quantity symbol (P, T, rho, M, n, a, l, mu, nu, W, H).
/// Values are written unformatted; absent values leave an empty cell.
pub fn write_profile<W: Write>(writer: W, reports: &[Report]) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);

    let mut header = vec!["altitude"];
    header.extend(Quantity::ALL.iter().map(|q| q.symbol()));
    out.write_record(&header)?;

    for report in reports {
        let mut record = vec![report.altitude.to_string()];
        record.extend(
            report
                .readings
                .iter()
                .map(|r| r.value.map(|v| v.to_string()).unwrap_or_default()),
        );
        out.write_record(&record)?;
    }

    out.flush()?;
    Ok(())
}

/// Write a profile to a CSV file at the given path.
pub fn write_profile_file(path: &Path, reports: &[Report]) -> io::Result<()> {
    debug!("Writing {} rows to '{}'", reports.len(), path.display());
    let file = File::create(path)?;
    write_profile(file, reports)?;
    Ok(())
}
