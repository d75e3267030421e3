use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    FreeForm,
    ChooseOne,
}

/// A question as shown to players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub kind: QuestionKind,
    pub options: Vec<String>,
    pub allow_other: bool,
    pub sensitivity: i16,
    pub max_options: Option<u16>,
}

impl Question {
    /// Copy of this question with `options` cut down to `max_options`.
    pub fn for_display(&self) -> Question {
        let mut shown = self.clone();
        if let Some(max) = self.max_options {
            shown.options.truncate(usize::from(max));
        }
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choose_one(options: &[&str], max: Option<u16>) -> Question {
        Question {
            id: 1,
            text: "Favourite city?".into(),
            kind: QuestionKind::ChooseOne,
            options: options.iter().map(|s| s.to_string()).collect(),
            allow_other: false,
            sensitivity: 0,
            max_options: max,
        }
    }

    #[test]
    fn display_truncates_to_max_options() {
        let q = choose_one(&["Paris", "Lyon", "Nice"], Some(2));
        assert_eq!(q.for_display().options, vec!["Paris", "Lyon"]);
    }

    #[test]
    fn display_keeps_everything_without_limit() {
        let q = choose_one(&["Paris", "Lyon"], None);
        assert_eq!(q.for_display(), q);
    }
}
