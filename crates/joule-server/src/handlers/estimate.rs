//! Appliance catalog and live estimation handlers

use axum::Json;
use joule_core::{estimate, Appliance, EnergyEstimate, EstimateRequest};
use serde::Serialize;

use crate::{core_error, AppError};

/// One appliance category as the entry form renders it
#[derive(Serialize)]
pub struct ApplianceInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub rated_kwh: f64,
    pub hour_adjustable: bool,
}

/// GET /api/appliances - The closed appliance catalog, in display order
pub async fn list_appliances() -> Json<Vec<ApplianceInfo>> {
    let catalog = Appliance::ALL
        .iter()
        .map(|a| ApplianceInfo {
            name: a.as_str(),
            label: a.label(),
            rated_kwh: a.rated_kwh(),
            hour_adjustable: a.hour_adjustable(),
        })
        .collect();
    Json(catalog)
}

/// POST /api/estimate - Daily breakdown for a prospective appliance set
pub async fn post_estimate(
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EnergyEstimate>, AppError> {
    let breakdown = estimate(&request).map_err(core_error)?;
    Ok(Json(breakdown))
}
