use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::CellMatchError;
use crate::models::CellSite;

/// Load cell sites from a CSV export
///
/// The header row is discarded unconditionally. Embedded NUL bytes are
/// stripped and invalid UTF-8 is replaced rather than treated as fatal,
/// since these exports routinely come out of tooling with broken encodings.
/// Rows with fewer than five fields or non-numeric coordinates are skipped.
pub fn read_sites(path: &Path) -> Result<Vec<CellSite>, CellMatchError> {
    let bytes = fs::read(path).map_err(|source| CellMatchError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    let cleaned: Vec<u8> = bytes.into_iter().filter(|&b| b != 0).collect();
    let text = String::from_utf8_lossy(&cleaned);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut sites = Vec::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record.map_err(|source| CellMatchError::InputCsv {
            path: path.to_path_buf(),
            source,
        })?;

        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        match CellSite::from_record(&fields) {
            Some(site) => sites.push(site),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("skipped {} malformed records in {}", skipped, path.display());
    }

    Ok(sites)
}
