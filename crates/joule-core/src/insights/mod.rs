//! Insight Generator - rule-driven energy-saving tips
//!
//! A small pluggable engine maps the aggregated [`crate::summary::SummaryView`]
//! to a fixed set of advisory tips. Rules run in a fixed priority order, each
//! fires at most once, and the output is deterministic for a given summary.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use joule_core::insights::TipEngine;
//!
//! let engine = TipEngine::new();
//! let tips = engine.tips_for(&summary);
//! ```

pub mod engine;
pub mod rules;
pub mod types;

pub use engine::{TipEngine, TipRule};
pub use types::{EfficiencyScore, Tip, TipKind};
