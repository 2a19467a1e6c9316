use crate::base;

/// On-disk dataset encodings, named by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Format {
    /// One JSON object per line.
    Jsonl,
    /// UK road safety accident export.
    Csv,
}

impl Format {
    pub fn from_path(path: &std::path::Path) -> Result<Self, UnsupportedFormat> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        ext.parse().map_err(|_| UnsupportedFormat(ext.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported dataset format '{0}'")]
pub struct UnsupportedFormat(String);

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid record at line {line}")]
    Jsonl {
        line: u64,
        source: serde_json::Error,
    },
    #[error("invalid record at line {line}")]
    Csv { line: u64, source: csv::Error },
    #[error("invalid record at line {line}")]
    Coordinates {
        line: u64,
        source: NonFiniteCoordinates,
    },
}

#[derive(Debug, thiserror::Error)]
#[error("coordinates must be finite, got ({longitude}, {latitude})")]
pub struct NonFiniteCoordinates {
    longitude: f64,
    latitude: f64,
}

/// A row of the CSV export. Columns not listed here are ignored.
#[derive(serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Accident_Index")]
    accident_index: String,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Road_Surface_Conditions")]
    road_surface_conditions: String,
    #[serde(rename = "Weather_Conditions")]
    weather_conditions: String,
    #[serde(rename = "Local_Authority_(District)")]
    local_authority_district: String,
}

impl From<CsvRow> for base::Accident {
    fn from(row: CsvRow) -> Self {
        base::Accident::new(
            row.accident_index,
            row.longitude,
            row.latitude,
            row.road_surface_conditions,
            row.weather_conditions,
            row.local_authority_district,
        )
    }
}

pub fn parse(s: &str, format: Format) -> Result<base::Aggregator, ParseError> {
    let agg = match format {
        Format::Jsonl => parse_jsonl(s)?,
        Format::Csv => parse_csv(s)?,
    };
    log::debug!("parsed {} accidents from {}", agg.len(), format);
    Ok(agg)
}

fn parse_jsonl(s: &str) -> Result<base::Aggregator, ParseError> {
    s.lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, x)| !x.is_empty())
        .map(|(i, x)| {
            x.parse::<base::Accident>()
                .map_err(|e| ParseError::Jsonl {
                    line: i as u64 + 1,
                    source: e,
                })
        })
        .collect()
}

fn parse_csv(s: &str) -> Result<base::Aggregator, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(s.as_bytes());
    let headers = rdr
        .headers()
        .map_err(|e| ParseError::Csv { line: 1, source: e })?
        .clone();
    rdr.records()
        .enumerate()
        .map(|(i, record)| {
            // The header occupies line 1.
            let fallback = i as u64 + 2;
            let record = record.map_err(|e| ParseError::Csv {
                line: e.position().map_or(fallback, csv::Position::line),
                source: e,
            })?;
            let line = record.position().map_or(fallback, csv::Position::line);
            let row = record
                .deserialize::<CsvRow>(Some(&headers))
                .map_err(|e| ParseError::Csv { line, source: e })?;
            if !(row.longitude.is_finite() && row.latitude.is_finite()) {
                return Err(ParseError::Coordinates {
                    line,
                    source: NonFiniteCoordinates {
                        longitude: row.longitude,
                        latitude: row.latitude,
                    },
                });
            }
            Ok(base::Accident::from(row))
        })
        .collect()
}
