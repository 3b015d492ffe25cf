//! Player attribute storage
//!
//! An `AttributeSet` is a mapping from attribute id to rating. Complete sets
//! cover every id in the taxonomy; partial sets are legal values while an
//! evaluation is in progress, but grouping rejects them.

use crate::attributes::taxonomy::{AttributeId, Category};
use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Highest rating an attribute can hold.
pub const MAX_RATING: u8 = 99;

/// A single named, numeric ability rating, ready for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub id: AttributeId,
    pub rating: u8,
    pub category: Category,
}

impl Attribute {
    pub fn new(id: AttributeId, rating: u8) -> Self {
        Self { id, rating: rating.min(MAX_RATING), category: id.category() }
    }
}

/// Mapping from attribute id to rating, clamped to 0..=99 on every write.
///
/// Backed by a BTreeMap keyed on `AttributeId` so iteration follows the
/// taxonomy's declared order, never insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AttributeSet {
    ratings: BTreeMap<AttributeId, u8>,
}

impl AttributeSet {
    /// Empty set. Legal as a value, but `group` and `overall` reject it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete set with every attribute at `rating` (clamped to 0..=99).
    pub fn uniform(rating: u8) -> Self {
        let rating = rating.min(MAX_RATING);
        Self { ratings: AttributeId::ALL.iter().map(|&id| (id, rating)).collect() }
    }

    /// Complete set at the baseline rating used for new players.
    pub fn baseline() -> Self {
        Self::uniform(50)
    }

    /// Set a rating, clamping to 0..=99. Returns the previous rating, if any.
    pub fn set(&mut self, id: AttributeId, rating: u8) -> Option<u8> {
        self.ratings.insert(id, rating.min(MAX_RATING))
    }

    pub fn get(&self, id: AttributeId) -> Option<u8> {
        self.ratings.get(&id).copied()
    }

    /// Rating for `id`, failing when the set does not cover it.
    pub fn rating(&self, id: AttributeId) -> Result<u8> {
        self.get(id).ok_or(RatingError::MissingAttribute { attribute: id })
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Whether the set covers the whole taxonomy.
    pub fn is_complete(&self) -> bool {
        self.ratings.len() == AttributeId::COUNT
    }

    /// First attribute (in declared order) the set does not cover.
    pub fn first_missing(&self) -> Option<AttributeId> {
        AttributeId::ALL.iter().find(|id| !self.ratings.contains_key(id)).copied()
    }

    /// Iterate (id, rating) pairs in declared taxonomy order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeId, u8)> + '_ {
        self.ratings.iter().map(|(&id, &rating)| (id, rating))
    }

    /// Display view of every covered attribute, declared order.
    pub fn attributes(&self) -> Vec<Attribute> {
        self.iter().map(|(id, rating)| Attribute::new(id, rating)).collect()
    }
}

impl FromIterator<(AttributeId, u8)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (AttributeId, u8)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (id, rating) in iter {
            set.set(id, rating);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_is_complete() {
        let set = AttributeSet::uniform(50);
        assert!(set.is_complete());
        assert_eq!(set.len(), AttributeId::COUNT);
        assert_eq!(set.get(AttributeId::Passing), Some(50));
        assert_eq!(set.first_missing(), None);
    }

    #[test]
    fn test_set_clamps_to_max() {
        let mut set = AttributeSet::new();
        set.set(AttributeId::Pace, 200);
        assert_eq!(set.get(AttributeId::Pace), Some(MAX_RATING));
        assert_eq!(AttributeSet::uniform(255).get(AttributeId::Vision), Some(MAX_RATING));
    }

    #[test]
    fn test_rating_reports_missing_attribute() {
        let mut set = AttributeSet::new();
        set.set(AttributeId::Passing, 65);
        assert_eq!(set.rating(AttributeId::Passing), Ok(65));
        assert_eq!(
            set.rating(AttributeId::Stamina),
            Err(RatingError::MissingAttribute { attribute: AttributeId::Stamina })
        );
    }

    #[test]
    fn test_first_missing_follows_declared_order() {
        let partial: AttributeSet =
            [(AttributeId::Shooting, 70), (AttributeId::Pace, 80)].into_iter().collect();
        // Passing is declared before Shooting, so it is reported first.
        assert_eq!(partial.first_missing(), Some(AttributeId::Passing));
    }

    #[test]
    fn test_iteration_ignores_insertion_order() {
        let forward: AttributeSet =
            [(AttributeId::Passing, 10), (AttributeId::Vision, 20)].into_iter().collect();
        let reversed: AttributeSet =
            [(AttributeId::Vision, 20), (AttributeId::Passing, 10)].into_iter().collect();
        let order_a: Vec<_> = forward.iter().collect();
        let order_b: Vec<_> = reversed.iter().collect();
        assert_eq!(order_a, order_b);
        assert_eq!(order_a[0].0, AttributeId::Passing);
    }
}
