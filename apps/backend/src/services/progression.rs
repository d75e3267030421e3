//! Screen selection: snapshot, rule table, action, transition.

use std::sync::Arc;

use sea_orm::ConnectionTrait;
use tracing::{debug, info, warn};

use crate::domain::badges::{Badge, BadgeCatalog};
use crate::domain::rules::{
    progression_rules, select_rule, EvalContext, Rule, RuleAction, ONBOARDING_QUESTION_COUNT,
};
use crate::domain::scoring::self_answer_points;
use crate::domain::screen::Screen;
use crate::domain::snapshot::MetadataSnapshot;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::realtime::Notifier;
use crate::repos::{answers, flags, games, points, questions};
use crate::services::badges::BadgeService;
use crate::services::game_state::GameStateService;
use crate::services::metadata;
use crate::state::app_state::AppState;

pub struct ProgressionService {
    rules: Vec<Rule>,
    badges: BadgeService,
    states: GameStateService,
}

impl ProgressionService {
    pub fn new(catalog: Arc<BadgeCatalog>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            rules: progression_rules(),
            badges: BadgeService::new(catalog, notifier.clone()),
            states: GameStateService::new(notifier),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.catalog.clone(), state.notifier.clone())
    }

    /// Replace the rule table.
    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    /// Decide, apply, and persist the player's next screen.
    pub async fn get_next_screen<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
        user_id: i64,
    ) -> Result<Screen, DomainError> {
        let mut snapshot = metadata::snapshot(conn, game_id, user_id).await?;
        let missing = self.badges.missing_badge(conn, user_id, game_id).await?;

        let ctx = EvalContext {
            snapshot: &snapshot,
            missing_badge: missing.as_ref(),
        };
        let (rule_name, action) = match select_rule(&self.rules, &ctx) {
            Some(sel) => {
                if sel.fell_back {
                    warn!(game_id, user_id, rule = sel.rule.name, "No rule matched; using first rule");
                }
                (sel.rule.name, sel.rule.action)
            }
            None => ("<empty>", RuleAction::ShowEmpty),
        };
        debug!(game_id, user_id, rule = rule_name, "Rule selected");

        let screen = self
            .run_action(conn, game_id, user_id, action, &mut snapshot, missing.as_ref())
            .await?;

        self.states
            .move_user_to_game_state(conn, game_id, user_id, &screen, Some(&snapshot))
            .await?;
        Ok(screen)
    }

    /// Record a self-answer, pay the onboarding bonus on the fifth, then move on.
    pub async fn submit_self_answer<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
        user_id: i64,
        question_id: i64,
        text: &str,
    ) -> Result<Screen, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyAnswer,
                "Answer must not be empty",
            ));
        }
        games::require_game(conn, game_id).await?;
        questions::require_question(conn, question_id).await?;

        if answers::find_answer(conn, game_id, question_id, user_id, user_id)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyAnswered,
                format!("Question {question_id} already answered"),
            ));
        }
        games::add_participant(conn, game_id, user_id).await?;
        let record = answers::insert_self_answer(conn, game_id, question_id, user_id, text).await?;

        let nth = answers::self_answer_position(conn, &record).await?;
        let earned = self_answer_points(nth);
        points::add_points(conn, user_id, game_id, earned).await?;
        info!(game_id, user_id, question_id, nth, points = earned, "Self-answer recorded");

        self.states.broadcast_answer_counts(conn, game_id).await?;
        self.get_next_screen(conn, game_id, user_id).await
    }

    async fn run_action<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
        user_id: i64,
        action: RuleAction,
        snapshot: &mut MetadataSnapshot,
        missing: Option<&Badge>,
    ) -> Result<Screen, DomainError> {
        if let Some(flag) = action.flag_to_set() {
            flags::set_flag(conn, game_id, user_id, flag).await?;
            flag.apply(snapshot);
        }

        match action {
            RuleAction::AwardMissingBadge => {
                let Some(badge) = missing else {
                    // Reached only through the no-match fallback.
                    return Ok(Screen::EmptyGameState);
                };
                match self.badges.award_badge(conn, user_id, game_id, &badge.id).await {
                    Ok(_) => {}
                    Err(e) if e.is_badge_already_owned() => {
                        warn!(game_id, user_id, badge_id = %badge.id, "Badge already awarded; showing it anyway");
                    }
                    Err(e) => return Err(e),
                }
                Ok(Screen::GotBadge {
                    badge_id: badge.id.clone(),
                })
            }
            RuleAction::ShowCreatorGameReady => Ok(Screen::CreatorGameReady),
            RuleAction::ShowBeforeStartAboutYou => Ok(Screen::BeforeStartAboutYou),
            RuleAction::ShowCreatorFinishedOnboarding => {
                Ok(Screen::CreatorFinishedOnboardingQuestions)
            }
            RuleAction::AskNextQuestionAboutMyself => {
                self.next_self_question(conn, game_id, user_id, snapshot.answer_about_myself)
                    .await
            }
            RuleAction::ShowEmpty => Ok(Screen::EmptyGameState),
        }
    }

    /// Next unanswered question, or the empty screen once onboarding is done
    /// or the bank runs out.
    async fn next_self_question<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
        user_id: i64,
        answered: i64,
    ) -> Result<Screen, DomainError> {
        if answered >= ONBOARDING_QUESTION_COUNT {
            return Ok(Screen::EmptyGameState);
        }
        let done = answers::self_answered_question_ids(conn, game_id, user_id).await?;
        let next = questions::list_questions(conn)
            .await?
            .into_iter()
            .find(|q| !done.contains(&q.id));

        Ok(match next {
            Some(question) => Screen::QuestionAboutMyself {
                question: question.for_display(),
                current_index: answered + 1,
                total_count: ONBOARDING_QUESTION_COUNT,
            },
            None => {
                warn!(game_id, user_id, answered, "Question bank exhausted");
                Screen::EmptyGameState
            }
        })
    }
}
