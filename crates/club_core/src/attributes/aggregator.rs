//! Rating aggregation
//!
//! Reduces an attribute set to a single overall figure and answers
//! strongest/weakest-N queries for reports. Mean and ordering are computed
//! over whatever the set covers, so in-progress partial sets work too.

use crate::attributes::set::{Attribute, AttributeSet};
use crate::error::{RatingError, Result};
use std::cmp::Reverse;

/// Arithmetic mean of every covered rating, rounded to one decimal place.
///
/// Partial sets are averaged over their own entries; callers merging an
/// in-progress evaluation can end up with an empty set, which is rejected.
pub fn overall(set: &AttributeSet) -> Result<f32> {
    if set.is_empty() {
        return Err(RatingError::EmptyAttributeSet);
    }
    let sum: u32 = set.iter().map(|(_, rating)| rating as u32).sum();
    let mean = sum as f32 / set.len() as f32;
    Ok((mean * 10.0).round() / 10.0)
}

/// The `n` highest-rated attributes, descending.
///
/// Ties break by declared taxonomy order (first-declared wins), never by the
/// backing map's iteration order. Returns fewer than `n` for small sets.
pub fn top_n(set: &AttributeSet, n: usize) -> Vec<Attribute> {
    let mut attributes = set.attributes();
    attributes.sort_by_key(|a| (Reverse(a.rating), a.id));
    attributes.truncate(n);
    attributes
}

/// The `n` lowest-rated attributes, ascending. Same tie-break rule as `top_n`.
pub fn bottom_n(set: &AttributeSet, n: usize) -> Vec<Attribute> {
    let mut attributes = set.attributes();
    attributes.sort_by_key(|a| (a.rating, a.id));
    attributes.truncate(n);
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::taxonomy::AttributeId;
    use proptest::prelude::*;

    fn report_set() -> AttributeSet {
        [
            (AttributeId::Passing, 65),
            (AttributeId::Shooting, 72),
            (AttributeId::Dribbling, 58),
            (AttributeId::Stamina, 80),
            (AttributeId::Composure, 66),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_overall_matches_hand_computed_mean() {
        let set: AttributeSet = [
            (AttributeId::Passing, 70),
            (AttributeId::Shooting, 80),
            (AttributeId::Dribbling, 90),
        ]
        .into_iter()
        .collect();
        assert!((overall(&set).unwrap() - 80.0).abs() < 0.05);
    }

    #[test]
    fn test_overall_rounds_to_one_decimal() {
        // (65 + 72 + 58 + 80 + 66) / 5 = 341 / 5 = 68.2
        assert_eq!(overall(&report_set()).unwrap(), 68.2);
    }

    #[test]
    fn test_overall_rejects_empty_set() {
        assert_eq!(overall(&AttributeSet::new()), Err(RatingError::EmptyAttributeSet));
    }

    #[test]
    fn test_top_and_bottom_single() {
        let set = report_set();

        let top = top_n(&set, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id, AttributeId::Stamina);
        assert_eq!(top[0].rating, 80);

        let bottom = bottom_n(&set, 1);
        assert_eq!(bottom.len(), 1);
        assert_eq!(bottom[0].id, AttributeId::Dribbling);
        assert_eq!(bottom[0].rating, 58);
    }

    #[test]
    fn test_top_n_zero_and_oversized() {
        let set = report_set();
        assert!(top_n(&set, 0).is_empty());

        let all = top_n(&set, 100);
        assert_eq!(all.len(), set.len());
        for pair in all.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn test_ties_break_by_declared_order() {
        let set: AttributeSet = [
            (AttributeId::Vision, 70),
            (AttributeId::Passing, 70),
            (AttributeId::Stamina, 70),
        ]
        .into_iter()
        .collect();
        let top = top_n(&set, 3);
        // All tied at 70: declared order decides (Passing < Stamina < Vision).
        let ids: Vec<_> = top.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![AttributeId::Passing, AttributeId::Stamina, AttributeId::Vision]);
    }

    #[test]
    fn test_top_reversed_equals_bottom_when_ratings_distinct() {
        let set = report_set();
        let k = set.len();
        let mut top = top_n(&set, k);
        top.reverse();
        assert_eq!(top, bottom_n(&set, k));
    }

    proptest! {
        #[test]
        fn overall_is_order_independent(entries in proptest::collection::hash_map(0usize..22, 0u8..=99, 1..22)) {
            let pairs: Vec<_> = entries.iter().map(|(&i, &r)| (AttributeId::ALL[i], r)).collect();
            let forward: AttributeSet = pairs.iter().copied().collect();
            let backward: AttributeSet = pairs.iter().rev().copied().collect();
            prop_assert_eq!(overall(&forward).unwrap(), overall(&backward).unwrap());
        }

        #[test]
        fn overall_stays_within_rating_range(ratings in proptest::collection::vec(0u8..=99, 1..22)) {
            let set: AttributeSet = ratings
                .iter()
                .enumerate()
                .map(|(i, &r)| (AttributeId::ALL[i], r))
                .collect();
            let mean = overall(&set).unwrap();
            prop_assert!((0.0..=99.0).contains(&mean));
        }
    }
}
