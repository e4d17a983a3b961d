//! CSV export of the session's raw entry log
//!
//! One row per entry in insertion order, one column per appliance category,
//! human-readable header names. [`parse_entries_csv`] re-reads an exported
//! file, so a session can be carried into a later one by hand.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};

use crate::error::{Error, Result};
use crate::models::{Appliance, Entry, HousingType};

const DATE_COLUMN: &str = "Date";
const HOUSING_COLUMN: &str = "Housing Type";
const BASE_COLUMN: &str = "Base (kWh)";
const TOTAL_COLUMN: &str = "Total (kWh)";
const NOTES_COLUMN: &str = "Notes";

fn appliance_column(appliance: Appliance) -> String {
    format!("{} (kWh)", appliance.label())
}

/// Render the entries as CSV text
pub fn export_entries_csv(entries: &[Entry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    let mut header = vec![
        DATE_COLUMN.to_string(),
        HOUSING_COLUMN.to_string(),
        BASE_COLUMN.to_string(),
    ];
    header.extend(Appliance::ALL.iter().map(|a| appliance_column(*a)));
    header.push(TOTAL_COLUMN.to_string());
    header.push(NOTES_COLUMN.to_string());
    writer.write_record(&header)?;

    for entry in entries {
        let mut record = vec![
            entry.date.format("%Y-%m-%d").to_string(),
            entry.housing_type.label().to_string(),
            format!("{:.2}", entry.base_kwh),
        ];
        record.extend(
            Appliance::ALL
                .iter()
                .map(|a| format!("{:.2}", entry.kwh_for(*a))),
        );
        record.push(format!("{:.2}", entry.total_kwh()));
        record.push(entry.notes.clone().unwrap_or_default());
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::InvalidData(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidData(e.to_string()))
}

/// Re-parse a file produced by [`export_entries_csv`]
///
/// Column order does not matter; the derived total column is ignored and
/// zero appliance values are dropped, matching how entries are built.
pub fn parse_entries_csv(data: &str) -> Result<Vec<Entry>> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());

    let headers = reader.headers()?.clone();
    let mut date_idx = None;
    let mut housing_idx = None;
    let mut base_idx = None;
    let mut notes_idx = None;
    let mut appliance_cols: Vec<(usize, Appliance)> = vec![];

    for (idx, name) in headers.iter().enumerate() {
        match name {
            DATE_COLUMN => date_idx = Some(idx),
            HOUSING_COLUMN => housing_idx = Some(idx),
            BASE_COLUMN => base_idx = Some(idx),
            NOTES_COLUMN => notes_idx = Some(idx),
            TOTAL_COLUMN => {}
            other => {
                let label = other.strip_suffix(" (kWh)").unwrap_or(other);
                let appliance = Appliance::from_str(label)
                    .map_err(|_| Error::InvalidData(format!("Unknown column: {}", other)))?;
                appliance_cols.push((idx, appliance));
            }
        }
    }

    let date_idx = date_idx.ok_or_else(|| missing_column(DATE_COLUMN))?;
    let housing_idx = housing_idx.ok_or_else(|| missing_column(HOUSING_COLUMN))?;
    let base_idx = base_idx.ok_or_else(|| missing_column(BASE_COLUMN))?;

    let mut entries = vec![];
    for record in reader.records() {
        let record = record?;

        let date = field(&record, date_idx)?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| Error::InvalidData(format!("Invalid date: {}", date)))?;

        let housing = field(&record, housing_idx)?;
        let housing_type = HousingType::from_str(housing).map_err(Error::InvalidData)?;

        let base_kwh = parse_kwh(field(&record, base_idx)?)?;

        let mut usage = BTreeMap::new();
        for &(idx, appliance) in &appliance_cols {
            let kwh = parse_kwh(field(&record, idx)?)?;
            if kwh > 0.0 {
                usage.insert(appliance, kwh);
            }
        }

        let notes = notes_idx
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);

        entries.push(Entry {
            date,
            housing_type,
            base_kwh,
            usage,
            notes,
            recorded_at: Utc::now(),
        });
    }

    Ok(entries)
}

fn missing_column(name: &str) -> Error {
    Error::InvalidData(format!("Missing column: {}", name))
}

fn field<'a>(record: &'a csv::StringRecord, idx: usize) -> Result<&'a str> {
    record
        .get(idx)
        .ok_or_else(|| Error::InvalidData("Short CSV record".to_string()))
}

fn parse_kwh(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::InvalidData(format!("Invalid kWh value: {}", raw)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidData(format!("Invalid kWh value: {}", raw)));
    }
    Ok(value)
}
