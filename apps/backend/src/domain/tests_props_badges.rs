//! Property tests for the owed-badge rule (pure domain, no DB).

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::badges::{next_missing_badge, BadgeCatalog};
use crate::domain::test_prelude;

fn owned_strategy() -> impl Strategy<Value = HashSet<String>> {
    let ids = BadgeCatalog::default()
        .badges()
        .iter()
        .map(|b| b.id.clone())
        .collect::<Vec<_>>();
    proptest::sample::subsequence(ids.clone(), 0..=ids.len())
        .prop_map(|v| v.into_iter().collect())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The owed badge is affordable, unowned, and no cheaper one is missing.
    #[test]
    fn prop_missing_badge_is_cheapest_affordable(
        points in 0i64..400,
        owned in owned_strategy(),
    ) {
        let catalog = BadgeCatalog::default();
        let got = next_missing_badge(&catalog, points, &owned);
        let cheapest = catalog
            .badges()
            .iter()
            .filter(|b| !b.is_participation() && b.points_required <= points && !owned.contains(&b.id))
            .map(|b| b.points_required)
            .min();
        prop_assert_eq!(got.map(|b| b.points_required), cheapest);
        if let Some(b) = got {
            prop_assert!(!b.is_participation());
            prop_assert!(!owned.contains(&b.id));
        }
    }

    /// Awarding the owed badge repeatedly terminates and never repeats a badge.
    #[test]
    fn prop_awarding_converges(points in 0i64..400) {
        let catalog = BadgeCatalog::default();
        let mut owned = HashSet::new();
        let mut steps = 0;
        while let Some(b) = next_missing_badge(&catalog, points, &owned) {
            prop_assert!(owned.insert(b.id.clone()));
            steps += 1;
            prop_assert!(steps <= catalog.badges().len());
        }
        let expected = catalog
            .badges()
            .iter()
            .filter(|b| !b.is_participation() && b.points_required <= points)
            .count();
        prop_assert_eq!(owned.len(), expected);
    }
}
