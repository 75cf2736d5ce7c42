/// Minimum number of populated fields a raw record needs to be usable
pub const MIN_RECORD_FIELDS: usize = 5;

/// A cell site with location and antenna azimuth
///
/// Coordinate fields are kept twice: parsed values drive the matching math,
/// while the original field text is echoed verbatim into the output file.
#[derive(Debug, Clone)]
pub struct CellSite {
    pub rnc: String,
    pub cell: String,
    pub latitude: f64,
    pub longitude: f64,
    pub azimuth_deg: f64,
    pub latitude_text: String,
    pub longitude_text: String,
}

impl CellSite {
    /// Build a cell site from a raw CSV record
    ///
    /// Returns `None` for records with fewer than five fields or with
    /// non-numeric coordinate/azimuth fields; such records act neither as
    /// source nor as target. Fields beyond index 4 are ignored.
    pub fn from_record(fields: &[String]) -> Option<Self> {
        if fields.len() < MIN_RECORD_FIELDS {
            return None;
        }

        let latitude: f64 = fields[2].trim().parse().ok()?;
        let longitude: f64 = fields[3].trim().parse().ok()?;
        let azimuth_deg: f64 = fields[4].trim().parse().ok()?;

        Some(Self {
            rnc: fields[0].clone(),
            cell: fields[1].clone(),
            latitude,
            longitude,
            azimuth_deg,
            latitude_text: fields[2].clone(),
            longitude_text: fields[3].clone(),
        })
    }
}

/// A single matched (source, target) pair with its great-circle distance
#[derive(Debug, Clone)]
pub struct NeighborMatch {
    pub source: CellSite,
    pub target: CellSite,
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_record_parses_all_fields() {
        let record = fields(&["RNC1", "Cell1", "48.8566", "2.3522", "120"]);
        let site = CellSite::from_record(&record).unwrap();

        assert_eq!(site.rnc, "RNC1");
        assert_eq!(site.cell, "Cell1");
        assert!((site.latitude - 48.8566).abs() < 1e-12);
        assert!((site.longitude - 2.3522).abs() < 1e-12);
        assert!((site.azimuth_deg - 120.0).abs() < 1e-12);
        assert_eq!(site.latitude_text, "48.8566");
        assert_eq!(site.longitude_text, "2.3522");
    }

    #[test]
    fn test_from_record_ignores_trailing_fields() {
        let record = fields(&["RNC1", "Cell1", "1.0", "2.0", "90", "extra", "more"]);
        assert!(CellSite::from_record(&record).is_some());
    }

    #[test]
    fn test_from_record_rejects_short_record() {
        let record = fields(&["RNC1", "Cell1", "1.0", "2.0"]);
        assert!(CellSite::from_record(&record).is_none());
    }

    #[test]
    fn test_from_record_rejects_non_numeric_coordinates() {
        let record = fields(&["RNC1", "Cell1", "not-a-number", "2.0", "90"]);
        assert!(CellSite::from_record(&record).is_none());
    }

    #[test]
    fn test_from_record_tolerates_padded_numbers() {
        let record = fields(&["RNC1", "Cell1", " 1.5 ", " 2.5", "90 "]);
        let site = CellSite::from_record(&record).unwrap();
        assert!((site.latitude - 1.5).abs() < 1e-12);
        assert_eq!(site.latitude_text, " 1.5 ");
    }
}
