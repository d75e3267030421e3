//! Domain layer: pure progression logic, no I/O.

pub mod badges;
pub mod question;
pub mod rules;
pub mod scoring;
pub mod screen;
pub mod snapshot;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_badges;
#[cfg(test)]
mod tests_props_badges;
#[cfg(test)]
mod tests_rules;
#[cfg(test)]
mod tests_scoring;

pub use badges::{next_missing_badge, Badge, BadgeCatalog, PARTICIPATION_BADGE_ID};
pub use question::{Question, QuestionKind};
pub use rules::{progression_rules, select_rule, EvalContext, Rule, RuleAction, Selection};
pub use screen::{DistributionEntry, Screen, TargetUser};
pub use snapshot::{MetadataKey, MetadataSnapshot, MetadataValue, SeenFlag};
