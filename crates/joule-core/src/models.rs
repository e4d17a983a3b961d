//! Domain models for Joule

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Recognized appliance categories
///
/// The set is closed on purpose: every entry maps each category to a kWh
/// value, and the CSV export emits one column per category in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appliance {
    Ac,
    Refrigerator,
    WashingMachine,
    Tv,
    Microwave,
    WaterHeater,
    Dishwasher,
    CeilingFan,
}

impl Appliance {
    /// All categories, in canonical (export column) order
    pub const ALL: [Appliance; 8] = [
        Self::Ac,
        Self::Refrigerator,
        Self::WashingMachine,
        Self::Tv,
        Self::Microwave,
        Self::WaterHeater,
        Self::Dishwasher,
        Self::CeilingFan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ac => "ac",
            Self::Refrigerator => "refrigerator",
            Self::WashingMachine => "washing_machine",
            Self::Tv => "tv",
            Self::Microwave => "microwave",
            Self::WaterHeater => "water_heater",
            Self::Dishwasher => "dishwasher",
            Self::CeilingFan => "ceiling_fan",
        }
    }

    /// Human-readable name, used for form labels and CSV column headers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Refrigerator => "Refrigerator",
            Self::WashingMachine => "Washing Machine",
            Self::Tv => "TV",
            Self::Microwave => "Microwave",
            Self::WaterHeater => "Water Heater",
            Self::Dishwasher => "Dishwasher",
            Self::CeilingFan => "Ceiling Fan",
        }
    }

    /// Typical daily consumption in kWh at the reference usage
    pub fn rated_kwh(&self) -> f64 {
        match self {
            Self::Ac => 3.0,
            Self::Refrigerator => 3.0,
            Self::WashingMachine => 3.0,
            Self::Tv => 0.5,
            Self::Microwave => 1.5,
            Self::WaterHeater => 2.0,
            Self::Dishwasher => 2.5,
            Self::CeilingFan => 0.3,
        }
    }

    /// Whether the estimate scales this appliance by usage hours
    pub fn hour_adjustable(&self) -> bool {
        matches!(
            self,
            Self::Ac | Self::Tv | Self::Microwave | Self::WaterHeater
        )
    }
}

impl std::str::FromStr for Appliance {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(' ', "_").as_str() {
            "ac" => Ok(Self::Ac),
            "refrigerator" | "fridge" => Ok(Self::Refrigerator),
            "washing_machine" => Ok(Self::WashingMachine),
            "tv" => Ok(Self::Tv),
            "microwave" => Ok(Self::Microwave),
            "water_heater" => Ok(Self::WaterHeater),
            "dishwasher" => Ok(Self::Dishwasher),
            "ceiling_fan" => Ok(Self::CeilingFan),
            _ => Err(format!("Unknown appliance: {}", s)),
        }
    }
}

impl std::fmt::Display for Appliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Housing types offered by the profile selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HousingType {
    Flat,
    Tenement,
}

impl HousingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Tenement => "tenement",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Tenement => "Tenement",
        }
    }
}

impl std::str::FromStr for HousingType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "tenement" => Ok(Self::Tenement),
            _ => Err(format!("Unknown housing type: {}", s)),
        }
    }
}

impl std::fmt::Display for HousingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Apartment sizes, each with a fixed base load for lighting and wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApartmentSize {
    #[serde(rename = "1bhk")]
    OneBhk,
    #[serde(rename = "2bhk")]
    TwoBhk,
    #[serde(rename = "3bhk")]
    ThreeBhk,
}

impl ApartmentSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneBhk => "1bhk",
            Self::TwoBhk => "2bhk",
            Self::ThreeBhk => "3bhk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneBhk => "1BHK",
            Self::TwoBhk => "2BHK",
            Self::ThreeBhk => "3BHK",
        }
    }

    /// Daily base consumption in kWh: lighting plus basic electrical needs,
    /// scaled by room count
    pub fn base_load_kwh(&self) -> f64 {
        match self {
            Self::OneBhk => 2.0 * 0.4 + 2.0 * 0.8,
            Self::TwoBhk => 3.0 * 0.4 + 3.0 * 0.8,
            Self::ThreeBhk => 4.0 * 0.4 + 4.0 * 0.8,
        }
    }
}

impl std::str::FromStr for ApartmentSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1bhk" => Ok(Self::OneBhk),
            "2bhk" => Ok(Self::TwoBhk),
            "3bhk" => Ok(Self::ThreeBhk),
            _ => Err(format!("Unknown apartment size: {}", s)),
        }
    }
}

impl std::fmt::Display for ApartmentSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Session-scoped user profile from the sidebar form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub city: String,
    pub area: String,
    pub housing_type: HousingType,
    pub apartment_size: ApartmentSize,
}

/// One daily energy log record
///
/// Immutable once built by [`crate::entry::EntryDraft::build`]. The usage
/// map only holds non-zero values; absent categories read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub housing_type: HousingType,
    /// Base consumption from lighting and wiring, in kWh
    pub base_kwh: f64,
    /// Per-appliance consumption in kWh
    pub usage: BTreeMap<Appliance, f64>,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl Entry {
    /// Consumption for one category, zero when not logged
    pub fn kwh_for(&self, appliance: Appliance) -> f64 {
        self.usage.get(&appliance).copied().unwrap_or(0.0)
    }

    /// Total appliance consumption in kWh
    pub fn appliance_kwh(&self) -> f64 {
        self.usage.values().sum()
    }

    /// Base plus appliance consumption in kWh
    pub fn total_kwh(&self) -> f64 {
        self.base_kwh + self.appliance_kwh()
    }
}
