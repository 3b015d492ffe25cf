//! The fixed attribute taxonomy
//!
//! Every rateable ability a player has is one of the 22 identifiers below.
//! Declaration order is the taxonomy's declared order: grouping preserves it
//! and top/bottom-N queries use it to break rating ties (first-declared wins).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of rateable abilities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AttributeId {
    // Skills
    Passing,
    Shooting,
    Dribbling,
    Crossing,
    Finishing,
    FirstTouch,
    Tackling,
    Technique,

    // Physical
    Pace,
    Acceleration,
    Stamina,
    Strength,
    Agility,
    Jumping,

    // Mental
    Composure,
    Concentration,
    Decisions,
    Determination,
    Leadership,
    Positioning,
    Teamwork,
    Vision,
}

/// Attribute category. Fixed, not user-extensible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Skills,
    Physical,
    Mental,
}

impl AttributeId {
    /// All known attributes in declared order.
    pub const ALL: [AttributeId; 22] = [
        AttributeId::Passing,
        AttributeId::Shooting,
        AttributeId::Dribbling,
        AttributeId::Crossing,
        AttributeId::Finishing,
        AttributeId::FirstTouch,
        AttributeId::Tackling,
        AttributeId::Technique,
        AttributeId::Pace,
        AttributeId::Acceleration,
        AttributeId::Stamina,
        AttributeId::Strength,
        AttributeId::Agility,
        AttributeId::Jumping,
        AttributeId::Composure,
        AttributeId::Concentration,
        AttributeId::Decisions,
        AttributeId::Determination,
        AttributeId::Leadership,
        AttributeId::Positioning,
        AttributeId::Teamwork,
        AttributeId::Vision,
    ];

    /// Number of known attributes.
    pub const COUNT: usize = Self::ALL.len();

    pub fn category(&self) -> Category {
        match self {
            AttributeId::Passing
            | AttributeId::Shooting
            | AttributeId::Dribbling
            | AttributeId::Crossing
            | AttributeId::Finishing
            | AttributeId::FirstTouch
            | AttributeId::Tackling
            | AttributeId::Technique => Category::Skills,

            AttributeId::Pace
            | AttributeId::Acceleration
            | AttributeId::Stamina
            | AttributeId::Strength
            | AttributeId::Agility
            | AttributeId::Jumping => Category::Physical,

            AttributeId::Composure
            | AttributeId::Concentration
            | AttributeId::Decisions
            | AttributeId::Determination
            | AttributeId::Leadership
            | AttributeId::Positioning
            | AttributeId::Teamwork
            | AttributeId::Vision => Category::Mental,
        }
    }

    /// Stable snake_case key, matching the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            AttributeId::Passing => "passing",
            AttributeId::Shooting => "shooting",
            AttributeId::Dribbling => "dribbling",
            AttributeId::Crossing => "crossing",
            AttributeId::Finishing => "finishing",
            AttributeId::FirstTouch => "first_touch",
            AttributeId::Tackling => "tackling",
            AttributeId::Technique => "technique",
            AttributeId::Pace => "pace",
            AttributeId::Acceleration => "acceleration",
            AttributeId::Stamina => "stamina",
            AttributeId::Strength => "strength",
            AttributeId::Agility => "agility",
            AttributeId::Jumping => "jumping",
            AttributeId::Composure => "composure",
            AttributeId::Concentration => "concentration",
            AttributeId::Decisions => "decisions",
            AttributeId::Determination => "determination",
            AttributeId::Leadership => "leadership",
            AttributeId::Positioning => "positioning",
            AttributeId::Teamwork => "teamwork",
            AttributeId::Vision => "vision",
        }
    }

    /// Get attribute display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            AttributeId::Passing => "Passing",
            AttributeId::Shooting => "Shooting",
            AttributeId::Dribbling => "Dribbling",
            AttributeId::Crossing => "Crossing",
            AttributeId::Finishing => "Finishing",
            AttributeId::FirstTouch => "First Touch",
            AttributeId::Tackling => "Tackling",
            AttributeId::Technique => "Technique",
            AttributeId::Pace => "Pace",
            AttributeId::Acceleration => "Acceleration",
            AttributeId::Stamina => "Stamina",
            AttributeId::Strength => "Strength",
            AttributeId::Agility => "Agility",
            AttributeId::Jumping => "Jumping",
            AttributeId::Composure => "Composure",
            AttributeId::Concentration => "Concentration",
            AttributeId::Decisions => "Decisions",
            AttributeId::Determination => "Determination",
            AttributeId::Leadership => "Leadership",
            AttributeId::Positioning => "Positioning",
            AttributeId::Teamwork => "Teamwork",
            AttributeId::Vision => "Vision",
        }
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AttributeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeId::ALL
            .iter()
            .find(|id| id.key() == s)
            .copied()
            .ok_or_else(|| format!("Unknown attribute: {}", s))
    }
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Skills, Category::Physical, Category::Mental];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Skills => "Skills",
            Category::Physical => "Physical",
            Category::Mental => "Mental",
        }
    }

    /// Attributes registered under this category, in declared order.
    pub fn members(&self) -> &'static [AttributeId] {
        let table = &*CATEGORY_TABLE;
        match self {
            Category::Skills => &table.skills,
            Category::Physical => &table.physical,
            Category::Mental => &table.mental,
        }
    }
}

/// Registration table mapping each category to its attributes.
///
/// Built once at first use and read-only afterwards; all grouping goes
/// through this table rather than re-deriving the partition per call.
struct CategoryTable {
    skills: Vec<AttributeId>,
    physical: Vec<AttributeId>,
    mental: Vec<AttributeId>,
}

static CATEGORY_TABLE: Lazy<CategoryTable> = Lazy::new(|| {
    let mut table =
        CategoryTable { skills: Vec::new(), physical: Vec::new(), mental: Vec::new() };
    for id in AttributeId::ALL {
        match id.category() {
            Category::Skills => table.skills.push(id),
            Category::Physical => table.physical.push(id),
            Category::Mental => table.mental.push(id),
        }
    }
    table
});
