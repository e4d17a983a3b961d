//! Core types for the tip engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies the rule that produced a tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipKind {
    /// AC draw per tracked day above threshold
    HighAcUse,
    /// Appliance load dominates the base load
    ApplianceHeavy,
    /// Daily average above the typical household
    AboveAverageUse,
    /// Recent week noticeably above the first tracked week
    RisingTrend,
    /// Recent week noticeably below the first tracked week
    FallingTrend,
    NaturalLight,
    AcSetpoint,
    PhantomLoads,
    LedBulbs,
}

impl TipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipKind::HighAcUse => "high_ac_use",
            TipKind::ApplianceHeavy => "appliance_heavy",
            TipKind::AboveAverageUse => "above_average_use",
            TipKind::RisingTrend => "rising_trend",
            TipKind::FallingTrend => "falling_trend",
            TipKind::NaturalLight => "natural_light",
            TipKind::AcSetpoint => "ac_setpoint",
            TipKind::PhantomLoads => "phantom_loads",
            TipKind::LedBulbs => "led_bulbs",
        }
    }
}

impl fmt::Display for TipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TipKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high_ac_use" => Ok(TipKind::HighAcUse),
            "appliance_heavy" => Ok(TipKind::ApplianceHeavy),
            "above_average_use" => Ok(TipKind::AboveAverageUse),
            "rising_trend" => Ok(TipKind::RisingTrend),
            "falling_trend" => Ok(TipKind::FallingTrend),
            "natural_light" => Ok(TipKind::NaturalLight),
            "ac_setpoint" => Ok(TipKind::AcSetpoint),
            "phantom_loads" => Ok(TipKind::PhantomLoads),
            "led_bulbs" => Ok(TipKind::LedBulbs),
            _ => Err(format!("Unknown tip kind: {}", s)),
        }
    }
}

/// One advisory string shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub kind: TipKind,
    pub message: String,
}

impl Tip {
    pub fn new(kind: TipKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Efficiency score banded on the daily average consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyScore {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl EfficiencyScore {
    /// Band an average daily consumption in kWh
    pub fn from_average(avg_kwh_per_day: f64) -> Self {
        if avg_kwh_per_day < 5.0 {
            Self::Excellent
        } else if avg_kwh_per_day < 8.0 {
            Self::Good
        } else if avg_kwh_per_day < 12.0 {
            Self::Average
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::NeedsImprovement => "needs_improvement",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Star rating out of five, for the dashboard badge
    pub fn stars(&self) -> u8 {
        match self {
            Self::Excellent => 5,
            Self::Good => 4,
            Self::Average => 3,
            Self::NeedsImprovement => 2,
        }
    }
}

impl fmt::Display for EfficiencyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
