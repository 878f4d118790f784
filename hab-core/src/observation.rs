//! Lake survey observations and CSV parsing.

use csv::{ReaderBuilder, StringRecord};
use std::fmt;

use crate::labels::{DepthClass, LakeOrigin};

/// Expected number of columns in a lake survey CSV row:
/// SITE_ID, LON_DD, LAT_DD, ECO_NUTA, LAKE_ORIGIN, DEPTH_CLASS, LOG_NTL
pub const CSV_ROW_LENGTH: usize = 7;

/// Errors that can occur when parsing the lake survey dataset.
#[derive(Debug, PartialEq, Clone)]
pub enum DatasetError {
    /// A row had the wrong number of columns.
    WrongColumnCount(usize),
    /// A numeric column failed to parse.
    InvalidNumber { column: &'static str, value: String },
    /// LAKE_ORIGIN held something other than MAN_MADE / NATURAL.
    UnknownOrigin(String),
    /// DEPTH_CLASS held something other than SHALLOW / DEEP.
    UnknownDepth(String),
    /// The CSV reader itself failed on a row.
    Csv(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::WrongColumnCount(n) => {
                write!(f, "expected {} columns, found {}", CSV_ROW_LENGTH, n)
            }
            DatasetError::InvalidNumber { column, value } => {
                write!(f, "invalid number in {}: {:?}", column, value)
            }
            DatasetError::UnknownOrigin(s) => write!(f, "unknown lake origin: {:?}", s),
            DatasetError::UnknownDepth(s) => write!(f, "unknown depth class: {:?}", s),
            DatasetError::Csv(msg) => write!(f, "csv error: {}", msg),
        }
    }
}

impl std::error::Error for DatasetError {}

/// A single lake observation from the national survey.
///
/// Immutable once parsed; every downstream stage reads it, none mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub site_id: String,
    pub longitude: f64,
    pub latitude: f64,
    /// Ecological nutrient region (ECO_NUTA), used for point color.
    pub region: String,
    pub origin: LakeOrigin,
    pub depth: DepthClass,
    /// Total nitrogen as sampled, natural-log scale.
    pub log_nitrogen: f64,
}

fn parse_f64(record: &StringRecord, idx: usize, column: &'static str) -> Result<f64, DatasetError> {
    let raw = record.get(idx).unwrap_or("").trim();
    raw.parse::<f64>().map_err(|_| DatasetError::InvalidNumber {
        column,
        value: raw.to_string(),
    })
}

impl TryFrom<StringRecord> for Observation {
    type Error = DatasetError;

    fn try_from(record: StringRecord) -> Result<Self, Self::Error> {
        if record.len() != CSV_ROW_LENGTH {
            return Err(DatasetError::WrongColumnCount(record.len()));
        }
        let origin_raw = record.get(4).unwrap_or("").trim();
        let origin = LakeOrigin::from_label(origin_raw)
            .ok_or_else(|| DatasetError::UnknownOrigin(origin_raw.to_string()))?;
        let depth_raw = record.get(5).unwrap_or("").trim();
        let depth = DepthClass::from_label(depth_raw)
            .ok_or_else(|| DatasetError::UnknownDepth(depth_raw.to_string()))?;
        Ok(Observation {
            site_id: record.get(0).unwrap_or("").trim().to_string(),
            longitude: parse_f64(&record, 1, "LON_DD")?,
            latitude: parse_f64(&record, 2, "LAT_DD")?,
            region: record.get(3).unwrap_or("").trim().to_string(),
            origin,
            depth,
            log_nitrogen: parse_f64(&record, 6, "LOG_NTL")?,
        })
    }
}

/// Parse the lake survey CSV (with header row) into observations.
pub fn parse_lakes_csv(csv_data: &str) -> Result<Vec<Observation>, DatasetError> {
    // flexible so short rows reach the TryFrom length check instead of
    // failing inside the reader with a less useful message
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());
    let mut observations = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| DatasetError::Csv(e.to_string()))?;
        observations.push(record.try_into()?);
    }
    log::debug!("parsed {} lake observations", observations.len());
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{DepthClass, LakeOrigin};

    const STR_RESULT: &str = "\
SITE_ID,LON_DD,LAT_DD,ECO_NUTA,LAKE_ORIGIN,DEPTH_CLASS,LOG_NTL
NLA06608-0001,-89.6975,45.5268,Upper Midwest,NATURAL,DEEP,6.4615
NLA06608-0002,-114.0292,34.2782,Xeric,MAN_MADE,DEEP,6.1527
NLA06608-0003,-92.6956,33.7341,Coastal Plains,MAN_MADE,SHALLOW,6.9027
";

    #[test]
    fn test_parse_lakes_csv() {
        let observations = parse_lakes_csv(STR_RESULT).unwrap();
        assert_eq!(observations.len(), 3);
        assert_eq!(observations[0].site_id, "NLA06608-0001");
        assert_eq!(observations[0].origin, LakeOrigin::Natural);
        assert_eq!(observations[0].depth, DepthClass::Deep);
        assert_eq!(observations[0].region, "Upper Midwest");
        assert!((observations[0].log_nitrogen - 6.4615).abs() < 1e-9);
        assert_eq!(observations[2].origin, LakeOrigin::ManMade);
        assert_eq!(observations[2].depth, DepthClass::Shallow);
    }

    #[test]
    fn test_unknown_origin_rejected() {
        let bad = "\
SITE_ID,LON_DD,LAT_DD,ECO_NUTA,LAKE_ORIGIN,DEPTH_CLASS,LOG_NTL
NLA06608-0001,-89.7,45.5,Upper Midwest,RESERVOIR,DEEP,6.4
";
        assert_eq!(
            parse_lakes_csv(bad),
            Err(DatasetError::UnknownOrigin("RESERVOIR".to_string()))
        );
    }

    #[test]
    fn test_bad_number_rejected() {
        let bad = "\
SITE_ID,LON_DD,LAT_DD,ECO_NUTA,LAKE_ORIGIN,DEPTH_CLASS,LOG_NTL
NLA06608-0001,west,45.5,Upper Midwest,NATURAL,DEEP,6.4
";
        assert_eq!(
            parse_lakes_csv(bad),
            Err(DatasetError::InvalidNumber {
                column: "LON_DD",
                value: "west".to_string()
            })
        );
    }

    #[test]
    fn test_short_row_rejected() {
        let bad = "\
SITE_ID,LON_DD,LAT_DD,ECO_NUTA,LAKE_ORIGIN,DEPTH_CLASS,LOG_NTL
NLA06608-0001,-89.7,45.5,Upper Midwest,NATURAL
";
        assert_eq!(parse_lakes_csv(bad), Err(DatasetError::WrongColumnCount(5)));
    }
}
