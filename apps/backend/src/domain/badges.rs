//! Badge catalog and the progression rule for which badge is owed next.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Participation badge granted silently on first contact.
pub const PARTICIPATION_BADGE_ID: &str = "warming_up";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub points_required: i64,
}

impl Badge {
    pub fn new(id: impl Into<String>, name: impl Into<String>, points_required: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points_required,
        }
    }

    pub fn is_participation(&self) -> bool {
        self.id == PARTICIPATION_BADGE_ID
    }
}

/// Immutable, ascending-by-threshold list of badges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeCatalog {
    badges: Vec<Badge>,
}

impl BadgeCatalog {
    /// Build a catalog. Badges are sorted by `points_required` (stable, so
    /// equal thresholds keep their listed order).
    pub fn new(mut badges: Vec<Badge>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for badge in &badges {
            if badge.id.trim().is_empty() {
                return Err(DomainError::validation_other("badge id must not be empty"));
            }
            if badge.points_required < 0 {
                return Err(DomainError::validation_other(format!(
                    "badge {} has a negative threshold",
                    badge.id
                )));
            }
            if !seen.insert(badge.id.as_str()) {
                return Err(DomainError::validation_other(format!(
                    "duplicate badge id {}",
                    badge.id
                )));
            }
        }
        if let Some(p) = badges.iter().find(|b| b.is_participation()) {
            if p.points_required != 0 {
                return Err(DomainError::validation_other(format!(
                    "{PARTICIPATION_BADGE_ID} must have a threshold of 0"
                )));
            }
        }
        badges.sort_by_key(|b| b.points_required);
        Ok(Self { badges })
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn get(&self, id: &str) -> Option<&Badge> {
        self.badges.iter().find(|b| b.id == id)
    }

    pub fn participation(&self) -> Option<&Badge> {
        self.get(PARTICIPATION_BADGE_ID)
    }
}

impl Default for BadgeCatalog {
    fn default() -> Self {
        Self {
            badges: vec![
                Badge::new(PARTICIPATION_BADGE_ID, "Warming Up", 0),
                Badge::new("curious", "Curious", 20),
                Badge::new("good_listener", "Good Listener", 50),
                Badge::new("mind_reader", "Mind Reader", 100),
                Badge::new("oracle", "Oracle", 200),
            ],
        }
    }
}

/// The lowest-threshold badge that `total_points` qualifies for and that is
/// not in `owned`. The participation badge never counts.
///
/// Ranks are never skipped: if points qualify for several badges at once,
/// only the cheapest missing one is returned.
pub fn next_missing_badge<'c>(
    catalog: &'c BadgeCatalog,
    total_points: i64,
    owned: &HashSet<String>,
) -> Option<&'c Badge> {
    catalog
        .badges()
        .iter()
        .filter(|b| !b.is_participation())
        .filter(|b| b.points_required <= total_points)
        .filter(|b| !owned.contains(&b.id))
        .min_by_key(|b| b.points_required)
}
