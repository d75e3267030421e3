use crate::domain::badges::Badge;
use crate::domain::rules::{
    progression_rules, select_rule, Condition, EvalContext, Guard, Rule, RuleAction,
    ONBOARDING_QUESTION_COUNT,
};
use crate::domain::snapshot::{MetadataKey, MetadataSnapshot, MetadataValue, SeenFlag};

fn action_for(snapshot: MetadataSnapshot, missing: Option<&Badge>) -> RuleAction {
    let rules = progression_rules();
    let ctx = EvalContext {
        snapshot: &snapshot,
        missing_badge: missing,
    };
    let sel = select_rule(&rules, &ctx).expect("table is not empty");
    assert!(!sel.fell_back, "progression table always has a match");
    sel.rule.action
}

fn onboarded(answered: i64) -> MetadataSnapshot {
    MetadataSnapshot {
        seen_before_ask_about_you: true,
        answer_about_myself: answered,
        ..Default::default()
    }
}

#[test]
fn guards_compare_values() {
    assert!(Guard::Equals(MetadataValue::Bool(true)).matches(MetadataValue::Bool(true)));
    assert!(!Guard::Equals(MetadataValue::Count(5)).matches(MetadataValue::Count(4)));
    assert!(Guard::LessThanOrEqual(5).matches(MetadataValue::Count(5)));
    assert!(!Guard::LessThanOrEqual(5).matches(MetadataValue::Count(6)));
    assert!(Guard::Wildcard.matches(MetadataValue::Count(-1)));
}

#[test]
fn missing_badge_outranks_everything() {
    let badge = Badge::new("curious", "Curious", 20);
    let fresh_creator = MetadataSnapshot {
        is_creator: true,
        ..Default::default()
    };
    assert_eq!(
        action_for(fresh_creator, Some(&badge)),
        RuleAction::AwardMissingBadge
    );
}

#[test]
fn fresh_creator_sees_game_ready_first() {
    let s = MetadataSnapshot {
        is_creator: true,
        ..Default::default()
    };
    assert_eq!(action_for(s, None), RuleAction::ShowCreatorGameReady);
}

#[test]
fn fresh_participant_sees_intro() {
    assert_eq!(
        action_for(MetadataSnapshot::default(), None),
        RuleAction::ShowBeforeStartAboutYou
    );
}

#[test]
fn creator_after_game_ready_sees_intro() {
    let s = MetadataSnapshot {
        is_creator: true,
        seen_game_ready: true,
        ..Default::default()
    };
    assert_eq!(action_for(s, None), RuleAction::ShowBeforeStartAboutYou);
}

#[test]
fn onboarding_questions_until_five() {
    for answered in 0..ONBOARDING_QUESTION_COUNT {
        assert_eq!(
            action_for(onboarded(answered), None),
            RuleAction::AskNextQuestionAboutMyself,
            "answered={answered}"
        );
    }
}

#[test]
fn creator_at_five_sees_finished_once() {
    let mut s = onboarded(ONBOARDING_QUESTION_COUNT);
    s.is_creator = true;
    s.seen_game_ready = true;
    assert_eq!(action_for(s, None), RuleAction::ShowCreatorFinishedOnboarding);

    s.seen_creator_finished_onboarding = true;
    // The question rule still matches at the boundary; the action itself
    // decides there is nothing left to ask.
    assert_eq!(action_for(s, None), RuleAction::AskNextQuestionAboutMyself);
}

#[test]
fn non_creator_at_five_skips_finished_screen() {
    assert_eq!(
        action_for(onboarded(ONBOARDING_QUESTION_COUNT), None),
        RuleAction::AskNextQuestionAboutMyself
    );
}

#[test]
fn past_onboarding_hits_wildcard() {
    assert_eq!(
        action_for(onboarded(ONBOARDING_QUESTION_COUNT + 1), None),
        RuleAction::ShowEmpty
    );
}

#[test]
fn no_match_falls_back_to_first_rule() {
    let rules = vec![
        Rule {
            name: "first",
            conditions: vec![Condition::MissingBadge],
            action: RuleAction::AwardMissingBadge,
        },
        Rule {
            name: "second",
            conditions: vec![Condition::Field(
                MetadataKey::IsCreator,
                Guard::Equals(MetadataValue::Bool(true)),
            )],
            action: RuleAction::ShowCreatorGameReady,
        },
    ];
    let snapshot = MetadataSnapshot::default();
    let ctx = EvalContext {
        snapshot: &snapshot,
        missing_badge: None,
    };
    let sel = select_rule(&rules, &ctx).unwrap();
    assert!(sel.fell_back);
    assert_eq!(sel.rule.name, "first");
}

#[test]
fn empty_table_selects_nothing() {
    let snapshot = MetadataSnapshot::default();
    let ctx = EvalContext {
        snapshot: &snapshot,
        missing_badge: None,
    };
    assert!(select_rule(&[], &ctx).is_none());
}

#[test]
fn flag_actions_name_their_flag() {
    assert_eq!(
        RuleAction::ShowCreatorGameReady.flag_to_set(),
        Some(SeenFlag::GameReady)
    );
    assert_eq!(
        RuleAction::ShowBeforeStartAboutYou.flag_to_set(),
        Some(SeenFlag::BeforeAskAboutYou)
    );
    assert_eq!(
        RuleAction::ShowCreatorFinishedOnboarding.flag_to_set(),
        Some(SeenFlag::CreatorFinishedOnboarding)
    );
    assert_eq!(RuleAction::AwardMissingBadge.flag_to_set(), None);
}
