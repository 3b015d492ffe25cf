//! Rating quality classification

use serde::{Deserialize, Serialize};

/// Quality band for a single rating. Thresholds are fixed:
/// <40 Poor, 40-54 BelowAverage, 55-69 Average, 70-84 Good, >=85 Excellent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Poor,
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl Quality {
    pub fn display_name(&self) -> &'static str {
        match self {
            Quality::Poor => "Poor",
            Quality::BelowAverage => "Below Average",
            Quality::Average => "Average",
            Quality::Good => "Good",
            Quality::Excellent => "Excellent",
        }
    }
}

/// Classify a rating into its quality band. Pure, total over 0..=99.
pub fn quality_of(rating: u8) -> Quality {
    match rating {
        0..=39 => Quality::Poor,
        40..=54 => Quality::BelowAverage,
        55..=69 => Quality::Average,
        70..=84 => Quality::Good,
        _ => Quality::Excellent,
    }
}
