//! Joule Core Library
//!
//! Shared functionality for the Joule household energy tracker:
//! - Domain models and entry validation
//! - In-memory session store for the daily log
//! - Aggregator producing the summary view the charts consume
//! - Rule-driven tip engine for energy-saving advice
//! - Energy estimation for the entry form's live breakdown
//! - CSV export and re-parse of the raw log

pub mod entry;
pub mod error;
pub mod estimate;
pub mod export;
pub mod insights;
pub mod models;
pub mod session;
pub mod summary;

pub use entry::EntryDraft;
pub use error::{Error, Result};
pub use estimate::{estimate, EnergyEstimate, EstimateRequest, REFERENCE_HOURS, TARIFF_PER_KWH};
pub use export::{export_entries_csv, parse_entries_csv};
pub use insights::{EfficiencyScore, Tip, TipEngine, TipKind, TipRule};
pub use models::{ApartmentSize, Appliance, Entry, HousingType, UserProfile};
pub use session::SessionState;
pub use summary::{summarize, DailyTotal, SummaryView, WeekComparison};
