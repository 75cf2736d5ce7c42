use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::CellMatchError;
use crate::models::NeighborMatch;

/// Header row of the results file
pub const OUTPUT_HEADER: [&str; 9] = [
    "RNC",
    "utranCell",
    "latitude_Utrancell",
    "longitude_utrancell",
    "Target RNC",
    "Target utranCell",
    "latitude_target",
    "longitude_target",
    "Distance",
];

/// Build the timestamped results file name for the given instant
pub fn output_file_name(now: DateTime<Local>) -> String {
    format!("results_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Write matches to a results CSV
///
/// Source and target coordinates are echoed as their original field text;
/// distances are formatted with exactly two decimal places. Rows are
/// CRLF-terminated, the line ending downstream tooling expects from these
/// exports.
pub fn write_matches(path: &Path, matches: &[NeighborMatch]) -> Result<(), CellMatchError> {
    let to_output = |source: csv::Error| CellMatchError::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .map_err(to_output)?;

    writer.write_record(OUTPUT_HEADER).map_err(to_output)?;

    for m in matches {
        let distance = format!("{:.2}", m.distance_km);
        writer
            .write_record([
                m.source.rnc.as_str(),
                m.source.cell.as_str(),
                m.source.latitude_text.as_str(),
                m.source.longitude_text.as_str(),
                m.target.rnc.as_str(),
                m.target.cell.as_str(),
                m.target.latitude_text.as_str(),
                m.target.longitude_text.as_str(),
                distance.as_str(),
            ])
            .map_err(to_output)?;
    }

    writer
        .flush()
        .map_err(|e| CellMatchError::Output {
            path: path.to_path_buf(),
            source: e.into(),
        })
}
