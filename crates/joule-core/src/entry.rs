//! Entry validation - raw form input to an immutable [`Entry`]

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{Appliance, Entry, HousingType};

/// Raw daily-entry form input, not yet validated
///
/// All numeric fields default to zero, matching the form's empty state.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryDraft {
    /// Entry date; the form must supply one
    pub date: Option<NaiveDate>,
    pub housing_type: HousingType,
    /// Base consumption in kWh
    #[serde(default)]
    pub base_kwh: f64,
    /// Per-appliance consumption in kWh
    #[serde(default)]
    pub usage: BTreeMap<Appliance, f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EntryDraft {
    pub fn new(date: NaiveDate, housing_type: HousingType) -> Self {
        Self {
            date: Some(date),
            housing_type,
            base_kwh: 0.0,
            usage: BTreeMap::new(),
            notes: None,
        }
    }

    pub fn with_base_kwh(mut self, base_kwh: f64) -> Self {
        self.base_kwh = base_kwh;
        self
    }

    pub fn with_usage(mut self, appliance: Appliance, kwh: f64) -> Self {
        self.usage.insert(appliance, kwh);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Validate the draft and build an immutable [`Entry`]
    ///
    /// Rejects a missing date and any negative or non-finite value. Zero
    /// appliance values are dropped so the usage map stays sparse. No side
    /// effects: a rejected draft leaves nothing behind.
    pub fn build(self) -> Result<Entry> {
        let date = self
            .date
            .ok_or_else(|| Error::Validation("Entry date is required".to_string()))?;

        check_kwh("base", self.base_kwh)?;

        let mut usage = BTreeMap::new();
        for (appliance, kwh) in self.usage {
            check_kwh(appliance.as_str(), kwh)?;
            if kwh > 0.0 {
                usage.insert(appliance, kwh);
            }
        }

        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Entry {
            date,
            housing_type: self.housing_type,
            base_kwh: self.base_kwh,
            usage,
            notes,
            recorded_at: Utc::now(),
        })
    }
}

fn check_kwh(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::Validation(format!(
            "Energy value for {} must be a finite number",
            field
        )));
    }
    if value < 0.0 {
        return Err(Error::Validation(format!(
            "Energy value for {} cannot be negative",
            field
        )));
    }
    Ok(())
}
