//! Attribute system module
//!
//! This module contains the attribute taxonomy and the pure rating logic:
//! - AttributeId/Category taxonomy with its static registration table
//! - AttributeSet storage with 0..=99 clamping
//! - Category grouping for display
//! - Overall rating aggregation and strongest/weakest-N queries
//! - Quality band classification

pub mod aggregator;
pub mod grouping;
pub mod quality;
pub mod set;
pub mod taxonomy;

// Re-export main types
pub use aggregator::{bottom_n, overall, top_n};
pub use grouping::{group, GroupedAttributes};
pub use quality::{quality_of, Quality};
pub use set::{Attribute, AttributeSet, MAX_RATING};
pub use taxonomy::{AttributeId, Category};
