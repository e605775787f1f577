use std::fs::File;
use std::io::{BufReader, Read};

use log::{debug, info};

use crate::{LoadError, ObservationPairs, PairLoader};

const UTF8_BOM: char = '\u{feff}';
const DELIMITER: u8 = b',';
const FIELDS_PER_RECORD: usize = 2;

/// Reads `x,y` records, one per line, with no header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvPairLoader;

impl CsvPairLoader {
    pub fn new() -> Self {
        CsvPairLoader
    }

    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<ObservationPairs, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(DELIMITER)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut x = Vec::new();
        let mut y = Vec::new();

        for (index, record) in reader.records().enumerate() {
            let record_number = index + 1;
            let record = record.map_err(|err| LoadError::Parse {
                record: record_number,
                message: err.to_string(),
            })?;

            if record.len() != FIELDS_PER_RECORD {
                return Err(LoadError::Parse {
                    record: record_number,
                    message: format!(
                        "expected {} fields, found {}",
                        FIELDS_PER_RECORD,
                        record.len()
                    ),
                });
            }

            let mut first = &record[0];
            if index == 0 {
                first = strip_utf8_bom(first).trim();
            }

            x.push(parse_field(first, record_number)?);
            y.push(parse_field(&record[1], record_number)?);
        }

        debug!("Parsed {} records", x.len());
        Ok(ObservationPairs::new(x, y))
    }
}

impl PairLoader for CsvPairLoader {
    type Error = LoadError;

    fn load(&self, source: &str) -> Result<ObservationPairs, Self::Error> {
        info!("Loading observation pairs from {}", source);
        let file = File::open(source).map_err(|err| LoadError::SourceUnavailable {
            path: source.to_string(),
            source: err,
        })?;

        let pairs = self.load_from_reader(BufReader::new(file))?;
        info!("Loaded {} observation pairs from {}", pairs.len(), source);
        Ok(pairs)
    }
}

fn strip_utf8_bom(field: &str) -> &str {
    field.strip_prefix(UTF8_BOM).unwrap_or(field)
}

fn parse_field(field: &str, record: usize) -> Result<f64, LoadError> {
    let value = field.parse::<f64>().map_err(|err| LoadError::Parse {
        record,
        message: format!("'{}' is not a number: {}", field, err),
    })?;

    // Rust accepts "NaN" and "inf", neither is a decimal value.
    if !value.is_finite() {
        return Err(LoadError::Parse {
            record,
            message: format!("'{}' is not a finite number", field),
        });
    }

    Ok(value)
}
