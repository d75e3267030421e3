//! Answer grading, point rewards and guess distributions.

use std::collections::BTreeMap;

use crate::domain::rules::ONBOARDING_QUESTION_COUNT;
use crate::domain::screen::DistributionEntry;

pub const GUESS_CORRECT_POINTS: i64 = 10;
pub const GUESS_INCORRECT_POINTS: i64 = 2;
pub const ONBOARDING_BONUS_POINTS: i64 = 50;

/// Case-insensitive, whitespace-trimmed form used for comparisons.
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn answers_match(guess: &str, canonical: &str) -> bool {
    normalize_answer(guess) == normalize_answer(canonical)
}

pub fn guess_points(correct: bool) -> i64 {
    if correct {
        GUESS_CORRECT_POINTS
    } else {
        GUESS_INCORRECT_POINTS
    }
}

/// Points for the `nth` (1-based) self-answer in a game. The answer that
/// completes onboarding pays the bonus in place of the regular reward.
pub fn self_answer_points(nth: i64) -> i64 {
    if nth == ONBOARDING_QUESTION_COUNT {
        ONBOARDING_BONUS_POINTS
    } else {
        GUESS_CORRECT_POINTS
    }
}

/// Group answers by exact text. Entries are ordered by count descending, then
/// text ascending. Correctness is judged against `canonical` with the same
/// normalization as grading; without a canonical answer nothing is correct.
pub fn answer_distribution<'a, I>(answers: I, canonical: Option<&str>) -> Vec<DistributionEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for text in answers {
        *counts.entry(text).or_insert(0) += 1;
    }

    let mut entries: Vec<DistributionEntry> = counts
        .into_iter()
        .map(|(text, count)| DistributionEntry {
            text: text.to_string(),
            count,
            correct: canonical.is_some_and(|c| answers_match(text, c)),
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.text.cmp(&b.text)));
    entries
}
