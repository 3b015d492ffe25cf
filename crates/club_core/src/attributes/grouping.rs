//! Category grouping for display
//!
//! Partitions a complete attribute set into the three fixed category lists
//! the presentation layer renders. Lists come out in declared taxonomy order;
//! rating-sorted order is opt-in via `GroupedAttributes::sorted_by_rating`.

use crate::attributes::set::{Attribute, AttributeSet};
use crate::attributes::taxonomy::Category;
use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A player's attributes partitioned by category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupedAttributes {
    pub skills: Vec<Attribute>,
    pub physical: Vec<Attribute>,
    pub mental: Vec<Attribute>,
}

impl GroupedAttributes {
    /// Total number of attributes across all three lists.
    pub fn len(&self) -> usize {
        self.skills.len() + self.physical.len() + self.mental.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-sort every list by rating, descending, ties by declared order.
    pub fn sorted_by_rating(mut self) -> Self {
        for list in [&mut self.skills, &mut self.physical, &mut self.mental] {
            list.sort_by_key(|a| (Reverse(a.rating), a.id));
        }
        self
    }
}

/// Partition `set` into category lists in declared taxonomy order.
///
/// The set must cover the whole taxonomy; the first missing attribute (in
/// declared order) is reported otherwise.
pub fn group(set: &AttributeSet) -> Result<GroupedAttributes> {
    if let Some(attribute) = set.first_missing() {
        return Err(RatingError::MissingAttribute { attribute });
    }

    let collect = |category: Category| -> Result<Vec<Attribute>> {
        category
            .members()
            .iter()
            .map(|&id| set.rating(id).map(|rating| Attribute::new(id, rating)))
            .collect()
    };

    Ok(GroupedAttributes {
        skills: collect(Category::Skills)?,
        physical: collect(Category::Physical)?,
        mental: collect(Category::Mental)?,
    })
}
