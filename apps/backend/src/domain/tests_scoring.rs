use crate::domain::scoring::{
    answer_distribution, answers_match, guess_points, normalize_answer, self_answer_points,
    GUESS_CORRECT_POINTS, GUESS_INCORRECT_POINTS, ONBOARDING_BONUS_POINTS,
};

#[test]
fn grading_ignores_case_and_surrounding_whitespace() {
    assert!(answers_match("  paris ", "Paris"));
    assert!(answers_match("PARIS", "paris"));
    assert_eq!(normalize_answer("\tNew York \n"), "new york");
}

#[test]
fn grading_does_not_strip_punctuation() {
    assert!(!answers_match("paris!", "Paris"));
    assert!(!answers_match("new  york", "New York"));
}

#[test]
fn guess_rewards() {
    assert_eq!(guess_points(true), GUESS_CORRECT_POINTS);
    assert_eq!(guess_points(false), GUESS_INCORRECT_POINTS);
    assert_eq!(GUESS_CORRECT_POINTS, 10);
    assert_eq!(GUESS_INCORRECT_POINTS, 2);
}

#[test]
fn fifth_self_answer_pays_the_bonus_instead_of_ten() {
    let paid: Vec<i64> = (1..=7).map(self_answer_points).collect();
    assert_eq!(paid, vec![10, 10, 10, 10, ONBOARDING_BONUS_POINTS, 10, 10]);
    assert_eq!(ONBOARDING_BONUS_POINTS, 50);

    let running: Vec<i64> = (1..=5)
        .scan(0, |total, nth| {
            *total += self_answer_points(nth);
            Some(*total)
        })
        .collect();
    assert_eq!(running, vec![10, 20, 30, 40, 90]);
}

#[test]
fn distribution_groups_by_exact_text() {
    let dist = answer_distribution(["Paris", "paris", "Lyon", "Paris"], Some("Paris"));
    assert_eq!(dist.len(), 3);

    assert_eq!(dist[0].text, "Paris");
    assert_eq!(dist[0].count, 2);
    assert!(dist[0].correct);

    // Ties sort by text; "Lyon" < "paris".
    assert_eq!(dist[1].text, "Lyon");
    assert!(!dist[1].correct);
    assert_eq!(dist[2].text, "paris");
    assert_eq!(dist[2].count, 1);
    assert!(dist[2].correct);
}

#[test]
fn distribution_without_canonical_marks_nothing_correct() {
    let dist = answer_distribution(["a", "b"], None);
    assert!(dist.iter().all(|e| !e.correct));
}

#[test]
fn empty_distribution() {
    assert!(answer_distribution(std::iter::empty::<&str>(), Some("x")).is_empty());
}
