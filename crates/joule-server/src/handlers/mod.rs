//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod entries;
pub mod estimate;
pub mod export;
pub mod profile;
pub mod reports;
pub mod tips;

// Re-export all handlers for use in router
pub use entries::*;
pub use estimate::*;
pub use export::*;
pub use profile::*;
pub use reports::*;
pub use tips::*;
