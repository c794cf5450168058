//! CSV dump of the care log, one row per saved entry.

use crate::error::AxologError;
use axolog_schemas::Observation;
use chrono::NaiveDate;
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

pub const EXPORT_HEADER: [&str; 7] = ["date", "temp", "ph", "nh3", "no2", "feeding", "health"];

pub const DEFAULT_EXPORT_FILE: &str = "axolotl_care_log.csv";

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    date: NaiveDate,
    temp: f64,
    ph: f64,
    nh3: f64,
    no2: f64,
    feeding: &'a str,
    health: String,
}

impl<'a> From<&'a Observation> for ExportRow<'a> {
    fn from(record: &'a Observation) -> Self {
        Self {
            date: record.date,
            temp: record.temperature,
            ph: record.ph,
            nh3: record.ammonia,
            no2: record.nitrite,
            feeding: record.feeding.label(),
            health: record.health.label(),
        }
    }
}

/// Writes the header eagerly so an empty log still yields a header row.
pub struct CsvExporter<W: io::Write> {
    writer: Writer<W>,
    rows: usize,
}

impl CsvExporter<fs::File> {
    pub fn create(path: &Path) -> Result<Self, AxologError> {
        let file = fs::File::create(path)
            .map_err(|e| AxologError::FileIO(path.display().to_string(), e))?;
        Self::new(file).map_err(|e| AxologError::CsvError(path.display().to_string(), e))
    }
}

impl<W: io::Write> CsvExporter<W> {
    pub fn new(inner: W) -> Result<Self, csv::Error> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(EXPORT_HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write(&mut self, record: &Observation) -> Result<(), csv::Error> {
        self.writer.serialize(ExportRow::from(record))?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes and returns the number of data rows written.
    pub fn finish(mut self) -> Result<usize, csv::Error> {
        self.writer.flush()?;
        Ok(self.rows)
    }

    pub fn into_inner(self) -> Result<W, csv::Error> {
        self.writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }
}

pub fn export_to_string(records: &[Observation]) -> Result<String, csv::Error> {
    let mut exporter = CsvExporter::new(Vec::new())?;
    for record in records {
        exporter.write(record)?;
    }
    let bytes = exporter.into_inner()?;
    // Every field we write is already valid UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn export_to_path(records: &[Observation], path: &Path) -> Result<usize, AxologError> {
    let mut exporter = CsvExporter::create(path)?;
    let csv_err = |e| AxologError::CsvError(path.display().to_string(), e);
    for record in records {
        exporter.write(record).map_err(csv_err)?;
    }
    exporter.finish().map_err(csv_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axolog_schemas::{FeedingType, HealthObservations, HealthTag};

    #[test]
    fn empty_log_is_header_only() {
        let out = export_to_string(&[]).unwrap();
        assert_eq!(out, "date,temp,ph,nh3,no2,feeding,health\n");
    }

    #[test]
    fn rows_follow_header_and_quote_combined_health() {
        let records = vec![
            Observation {
                date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                temperature: 18.0,
                ph: 7.4,
                ammonia: 0.0,
                nitrite: 0.05,
                feeding: FeedingType::Pellets,
                health: HealthObservations::new([HealthTag::Active, HealthTag::GoodAppetite]),
            },
            Observation {
                date: NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
                temperature: 19.5,
                ph: 7.1,
                ammonia: 0.01,
                nitrite: 0.0,
                feeding: FeedingType::SpecialtyMix,
                health: HealthObservations::default(),
            },
        ];

        let out = export_to_string(&records).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,temp,ph,nh3,no2,feeding,health");
        assert_eq!(lines[1], "2024-01-10,18.0,7.4,0.0,0.05,pellets,\"active, good-appetite\"");
        assert_eq!(lines[2], "2024-01-11,19.5,7.1,0.01,0.0,specialty-mix,");
    }
}
