//! Built-in tip rules

use crate::models::Appliance;
use crate::summary::SummaryView;

use super::engine::TipRule;
use super::types::{Tip, TipKind};

/// AC kWh per tracked day at or above this fires the high-AC tip
const AC_DAILY_THRESHOLD_KWH: f64 = 4.0;

/// Appliance load more than this multiple of the base load reads as
/// appliance-heavy
const APPLIANCE_HEAVY_RATIO: f64 = 2.0;

/// Daily average above this counts as above the typical household
const ABOVE_AVERAGE_KWH: f64 = 10.0;

/// Week-over-week change beyond ±10% counts as a trend
const TREND_RATIO: f64 = 0.1;

pub struct HighAcUseRule;

impl TipRule for HighAcUseRule {
    fn id(&self) -> TipKind {
        TipKind::HighAcUse
    }

    fn evaluate(&self, summary: &SummaryView) -> Option<Tip> {
        let ac_per_day = summary.daily_average_for(Appliance::Ac);
        if ac_per_day >= AC_DAILY_THRESHOLD_KWH {
            Some(Tip::new(
                self.id(),
                format!(
                    "Reduce AC usage: your AC is averaging {:.1} kWh per day",
                    ac_per_day
                ),
            ))
        } else {
            None
        }
    }
}

pub struct ApplianceHeavyRule;

impl TipRule for ApplianceHeavyRule {
    fn id(&self) -> TipKind {
        TipKind::ApplianceHeavy
    }

    fn evaluate(&self, summary: &SummaryView) -> Option<Tip> {
        if summary.base_total_kwh > 0.0
            && summary.appliance_total_kwh > summary.base_total_kwh * APPLIANCE_HEAVY_RATIO
        {
            Some(Tip::new(
                self.id(),
                "Consider upgrading to energy-efficient appliances",
            ))
        } else {
            None
        }
    }
}

pub struct AboveAverageUseRule;

impl TipRule for AboveAverageUseRule {
    fn id(&self) -> TipKind {
        TipKind::AboveAverageUse
    }

    fn evaluate(&self, summary: &SummaryView) -> Option<Tip> {
        if summary.average_per_day_kwh > ABOVE_AVERAGE_KWH {
            Some(Tip::new(
                self.id(),
                "Your consumption is above average. Try to reduce AC usage during peak hours",
            ))
        } else {
            None
        }
    }
}

pub struct RisingTrendRule;

impl TipRule for RisingTrendRule {
    fn id(&self) -> TipKind {
        TipKind::RisingTrend
    }

    fn evaluate(&self, summary: &SummaryView) -> Option<Tip> {
        let cmp = summary.week_comparison.as_ref()?;
        if cmp.recent_avg_kwh > cmp.previous_avg_kwh * (1.0 + TREND_RATIO) {
            Some(Tip::new(
                self.id(),
                "Your energy consumption has increased recently. Check for any new appliances or increased usage",
            ))
        } else {
            None
        }
    }
}

pub struct FallingTrendRule;

impl TipRule for FallingTrendRule {
    fn id(&self) -> TipKind {
        TipKind::FallingTrend
    }

    fn evaluate(&self, summary: &SummaryView) -> Option<Tip> {
        let cmp = summary.week_comparison.as_ref()?;
        if cmp.recent_avg_kwh < cmp.previous_avg_kwh * (1.0 - TREND_RATIO) {
            Some(Tip::new(
                self.id(),
                "Great job! Your energy consumption has decreased recently",
            ))
        } else {
            None
        }
    }
}

/// A static tip that fires whenever any data is tracked
pub struct EvergreenRule {
    kind: TipKind,
    message: &'static str,
}

impl EvergreenRule {
    pub fn new(kind: TipKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

impl TipRule for EvergreenRule {
    fn id(&self) -> TipKind {
        self.kind
    }

    fn evaluate(&self, summary: &SummaryView) -> Option<Tip> {
        if summary.days_tracked > 0 {
            Some(Tip::new(self.kind, self.message))
        } else {
            None
        }
    }
}
