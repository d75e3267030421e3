use std::collections::HashSet;

use crate::domain::badges::{next_missing_badge, Badge, BadgeCatalog, PARTICIPATION_BADGE_ID};

fn owned(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn catalog() -> BadgeCatalog {
    BadgeCatalog::default()
}

#[test]
fn catalog_is_sorted_by_threshold() {
    let c = BadgeCatalog::new(vec![
        Badge::new("oracle", "Oracle", 200),
        Badge::new(PARTICIPATION_BADGE_ID, "Warming Up", 0),
        Badge::new("curious", "Curious", 20),
    ])
    .unwrap();
    let ids: Vec<&str> = c.badges().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec![PARTICIPATION_BADGE_ID, "curious", "oracle"]);
}

#[test]
fn catalog_rejects_duplicate_ids() {
    let err = BadgeCatalog::new(vec![
        Badge::new("curious", "Curious", 20),
        Badge::new("curious", "Curious again", 30),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("duplicate badge id"));
}

#[test]
fn catalog_rejects_participation_badge_with_threshold() {
    assert!(BadgeCatalog::new(vec![Badge::new(PARTICIPATION_BADGE_ID, "Warming Up", 5)]).is_err());
}

#[test]
fn nothing_owed_with_zero_points() {
    assert_eq!(next_missing_badge(&catalog(), 0, &owned(&[])), None);
}

#[test]
fn participation_badge_is_never_reported_missing() {
    let c = catalog();
    let got = next_missing_badge(&c, 0, &owned(&[]));
    assert!(got.is_none());
    let got = next_missing_badge(&c, 19, &owned(&[]));
    assert!(got.is_none());
}

#[test]
fn exact_threshold_qualifies() {
    let c = catalog();
    let got = next_missing_badge(&c, 20, &owned(&[PARTICIPATION_BADGE_ID])).unwrap();
    assert_eq!(got.id, "curious");
}

#[test]
fn lowest_missing_badge_wins_when_several_are_deserved() {
    let c = catalog();
    // 150 points deserve curious, good_listener and mind_reader at once.
    let got = next_missing_badge(&c, 150, &owned(&[])).unwrap();
    assert_eq!(got.id, "curious");

    let got = next_missing_badge(&c, 150, &owned(&["curious"])).unwrap();
    assert_eq!(got.id, "good_listener");

    let got = next_missing_badge(&c, 150, &owned(&["curious", "good_listener"])).unwrap();
    assert_eq!(got.id, "mind_reader");

    assert!(next_missing_badge(&c, 150, &owned(&["curious", "good_listener", "mind_reader"]))
        .is_none());
}

#[test]
fn gap_in_ownership_is_filled_first() {
    // Owning a higher badge does not excuse a missing lower one.
    let c = catalog();
    let got = next_missing_badge(&c, 250, &owned(&["oracle", "mind_reader"])).unwrap();
    assert_eq!(got.id, "curious");
}
