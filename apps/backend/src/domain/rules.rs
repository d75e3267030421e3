//! Screen selection rule table and its guard interpreter.
//!
//! Rules are evaluated top to bottom and the first rule whose conditions all
//! hold wins. Keys a rule does not mention are wildcards.

use crate::domain::badges::Badge;
use crate::domain::snapshot::{MetadataKey, MetadataSnapshot, MetadataValue, SeenFlag};

/// Number of self-questions in the onboarding sequence.
pub const ONBOARDING_QUESTION_COUNT: i64 = 5;

/// Predicate over one snapshot value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Equals(MetadataValue),
    LessThanOrEqual(i64),
    Wildcard,
}

impl Guard {
    pub fn matches(&self, value: MetadataValue) -> bool {
        match self {
            Guard::Equals(expected) => *expected == value,
            Guard::LessThanOrEqual(limit) => value.as_count() <= *limit,
            Guard::Wildcard => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// A badge is owed to the player.
    MissingBadge,
    Field(MetadataKey, Guard),
}

/// What to do once a rule is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    AwardMissingBadge,
    ShowCreatorGameReady,
    ShowBeforeStartAboutYou,
    ShowCreatorFinishedOnboarding,
    AskNextQuestionAboutMyself,
    ShowEmpty,
}

impl RuleAction {
    /// One-time flag the action marks as seen.
    pub fn flag_to_set(self) -> Option<SeenFlag> {
        match self {
            RuleAction::ShowCreatorGameReady => Some(SeenFlag::GameReady),
            RuleAction::ShowBeforeStartAboutYou => Some(SeenFlag::BeforeAskAboutYou),
            RuleAction::ShowCreatorFinishedOnboarding => {
                Some(SeenFlag::CreatorFinishedOnboarding)
            }
            RuleAction::AwardMissingBadge
            | RuleAction::AskNextQuestionAboutMyself
            | RuleAction::ShowEmpty => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub conditions: Vec<Condition>,
    pub action: RuleAction,
}

/// Inputs a rule can look at.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    pub snapshot: &'a MetadataSnapshot,
    pub missing_badge: Option<&'a Badge>,
}

impl Rule {
    pub fn matches(&self, ctx: &EvalContext<'_>) -> bool {
        self.conditions.iter().all(|c| match c {
            Condition::MissingBadge => ctx.missing_badge.is_some(),
            Condition::Field(key, guard) => guard.matches(ctx.snapshot.get(*key)),
        })
    }
}

/// Outcome of walking the table.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'r> {
    pub rule: &'r Rule,
    /// True when nothing matched and the first rule was used instead.
    pub fell_back: bool,
}

/// Pick the first matching rule. When nothing matches, the first rule of the
/// table is returned with `fell_back` set. Returns `None` only for an empty table.
pub fn select_rule<'r>(rules: &'r [Rule], ctx: &EvalContext<'_>) -> Option<Selection<'r>> {
    if let Some(rule) = rules.iter().find(|r| r.matches(ctx)) {
        return Some(Selection {
            rule,
            fell_back: false,
        });
    }
    rules.first().map(|rule| Selection {
        rule,
        fell_back: true,
    })
}

fn is(key: MetadataKey, value: bool) -> Condition {
    Condition::Field(key, Guard::Equals(MetadataValue::Bool(value)))
}

/// The fixed progression table, highest priority first.
pub fn progression_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "missing_badge",
            conditions: vec![Condition::MissingBadge],
            action: RuleAction::AwardMissingBadge,
        },
        Rule {
            name: "creator_game_ready",
            conditions: vec![
                is(MetadataKey::IsCreator, true),
                is(MetadataKey::SeenGameReady, false),
            ],
            action: RuleAction::ShowCreatorGameReady,
        },
        Rule {
            name: "before_ask_about_you",
            conditions: vec![is(MetadataKey::SeenBeforeAskAboutYou, false)],
            action: RuleAction::ShowBeforeStartAboutYou,
        },
        Rule {
            name: "creator_finished_onboarding",
            conditions: vec![
                is(MetadataKey::IsCreator, true),
                Condition::Field(
                    MetadataKey::AnswerAboutMyself,
                    Guard::Equals(MetadataValue::Count(ONBOARDING_QUESTION_COUNT)),
                ),
                is(MetadataKey::SeenCreatorFinishedOnboarding, false),
            ],
            action: RuleAction::ShowCreatorFinishedOnboarding,
        },
        Rule {
            name: "next_question_about_myself",
            conditions: vec![Condition::Field(
                MetadataKey::AnswerAboutMyself,
                Guard::LessThanOrEqual(ONBOARDING_QUESTION_COUNT),
            )],
            action: RuleAction::AskNextQuestionAboutMyself,
        },
        Rule {
            name: "fallback",
            conditions: vec![],
            action: RuleAction::ShowEmpty,
        },
    ]
}
