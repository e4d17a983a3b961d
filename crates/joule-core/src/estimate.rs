//! Energy estimation for the entry form's live breakdown
//!
//! Given an apartment size, the appliances used today, and optional usage
//! hours for the hour-adjustable ones, compute the base/appliance/total
//! breakdown shown next to the form before the entry is saved.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{ApartmentSize, Appliance};

/// Flat electricity tariff per kWh used for cost projections
pub const TARIFF_PER_KWH: f64 = 5.0;

/// Usage hours at which an appliance draws exactly its rated kWh
pub const REFERENCE_HOURS: f64 = 8.0;

/// Inputs for one estimation
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateRequest {
    pub apartment_size: ApartmentSize,
    /// Appliances in use today; duplicates count once
    pub appliances: Vec<Appliance>,
    /// Hours of use for hour-adjustable appliances; others ignore this
    #[serde(default)]
    pub usage_hours: BTreeMap<Appliance, f64>,
}

/// Computed daily energy breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyEstimate {
    pub base_kwh: f64,
    pub appliance_kwh: f64,
    pub total_kwh: f64,
    pub estimated_daily_cost: f64,
}

/// Estimate the daily breakdown for a set of appliances
///
/// Hour-adjustable appliances (AC, TV, microwave, water heater) scale
/// linearly against [`REFERENCE_HOURS`]; everything else contributes its
/// rated kWh regardless of hours.
pub fn estimate(request: &EstimateRequest) -> Result<EnergyEstimate> {
    for (appliance, &hours) in &request.usage_hours {
        if !hours.is_finite() || hours < 0.0 {
            return Err(Error::Validation(format!(
                "Usage hours for {} must be non-negative",
                appliance
            )));
        }
        if hours > 24.0 {
            return Err(Error::Validation(format!(
                "Usage hours for {} cannot exceed 24",
                appliance
            )));
        }
    }

    let base_kwh = request.apartment_size.base_load_kwh();

    let selected: BTreeSet<Appliance> = request.appliances.iter().copied().collect();
    let mut appliance_kwh = 0.0;
    for appliance in selected {
        let rated = appliance.rated_kwh();
        let hours = request.usage_hours.get(&appliance).copied();
        appliance_kwh += match (appliance.hour_adjustable(), hours) {
            (true, Some(hours)) => rated * hours / REFERENCE_HOURS,
            _ => rated,
        };
    }

    let total_kwh = base_kwh + appliance_kwh;

    Ok(EnergyEstimate {
        base_kwh,
        appliance_kwh,
        total_kwh,
        estimated_daily_cost: total_kwh * TARIFF_PER_KWH,
    })
}
