//! Aggregator - derives a [`SummaryView`] from the session's entries
//!
//! Everything here is a pure function of the entry slice it is handed:
//! the view carries no identity of its own and is recomputed on every read.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::estimate::TARIFF_PER_KWH;
use crate::models::{Appliance, Entry};

/// Days used for the monthly projection
const DAYS_PER_MONTH: f64 = 30.0;

/// Window size for the recent-vs-previous trend comparison
const TREND_WINDOW_DAYS: usize = 7;

/// One point of the daily total time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub kwh: f64,
}

/// Mean daily totals of the most recent week against the first tracked week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekComparison {
    pub recent_avg_kwh: f64,
    pub previous_avg_kwh: f64,
}

/// Derived aggregate statistics over the current session
///
/// Always a pure function of the entries it was computed from. An empty
/// session yields the all-zero default rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryView {
    /// Total kWh per appliance category across all entries
    pub appliance_totals: BTreeMap<Appliance, f64>,
    pub base_total_kwh: f64,
    pub appliance_total_kwh: f64,
    pub total_kwh: f64,
    /// One point per distinct date, ascending; duplicate dates are summed
    pub daily_series: Vec<DailyTotal>,
    /// Number of distinct dates tracked
    pub days_tracked: usize,
    /// Running average over the available days
    pub average_per_day_kwh: f64,
    /// Highest-consumption day
    pub peak: Option<DailyTotal>,
    pub monthly_estimate_kwh: f64,
    pub estimated_monthly_cost: f64,
    /// Present once at least one full trend window is tracked
    pub week_comparison: Option<WeekComparison>,
}

impl SummaryView {
    /// Total kWh for one category, zero when never logged
    pub fn total_for(&self, appliance: Appliance) -> f64 {
        self.appliance_totals
            .get(&appliance)
            .copied()
            .unwrap_or(0.0)
    }

    /// Per-tracked-day average for one category
    pub fn daily_average_for(&self, appliance: Appliance) -> f64 {
        if self.days_tracked == 0 {
            0.0
        } else {
            self.total_for(appliance) / self.days_tracked as f64
        }
    }
}

/// Compute the summary view for a sequence of entries
pub fn summarize(entries: &[Entry]) -> SummaryView {
    if entries.is_empty() {
        return SummaryView::default();
    }

    let mut appliance_totals: BTreeMap<Appliance, f64> = BTreeMap::new();
    let mut per_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut base_total_kwh = 0.0;

    for entry in entries {
        base_total_kwh += entry.base_kwh;
        for (&appliance, &kwh) in &entry.usage {
            *appliance_totals.entry(appliance).or_insert(0.0) += kwh;
        }
        *per_date.entry(entry.date).or_insert(0.0) += entry.total_kwh();
    }

    let appliance_total_kwh: f64 = appliance_totals.values().sum();
    let total_kwh = base_total_kwh + appliance_total_kwh;

    let daily_series: Vec<DailyTotal> = per_date
        .into_iter()
        .map(|(date, kwh)| DailyTotal { date, kwh })
        .collect();

    let days_tracked = daily_series.len();
    let average_per_day_kwh = total_kwh / days_tracked as f64;

    let peak = daily_series
        .iter()
        .cloned()
        .max_by(|a, b| a.kwh.total_cmp(&b.kwh));

    let monthly_estimate_kwh = average_per_day_kwh * DAYS_PER_MONTH;

    let week_comparison = compare_weeks(&daily_series);

    SummaryView {
        appliance_totals,
        base_total_kwh,
        appliance_total_kwh,
        total_kwh,
        daily_series,
        days_tracked,
        average_per_day_kwh,
        peak,
        monthly_estimate_kwh,
        estimated_monthly_cost: monthly_estimate_kwh * TARIFF_PER_KWH,
        week_comparison,
    }
}

/// Mean of the last trend window against the first, once a full window
/// exists; with fewer than two full windows the previous week falls back to
/// the recent one, which reads as "no change"
fn compare_weeks(series: &[DailyTotal]) -> Option<WeekComparison> {
    if series.len() < TREND_WINDOW_DAYS {
        return None;
    }

    let mean = |window: &[DailyTotal]| {
        window.iter().map(|d| d.kwh).sum::<f64>() / window.len() as f64
    };

    let recent_avg_kwh = mean(&series[series.len() - TREND_WINDOW_DAYS..]);
    let previous_avg_kwh = if series.len() >= 2 * TREND_WINDOW_DAYS {
        mean(&series[..TREND_WINDOW_DAYS])
    } else {
        recent_avg_kwh
    };

    Some(WeekComparison {
        recent_avg_kwh,
        previous_avg_kwh,
    })
}
