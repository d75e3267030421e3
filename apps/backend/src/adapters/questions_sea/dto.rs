//! DTOs for questions_sea adapter.

use crate::entities::questions::QuestionKind;

#[derive(Debug, Clone)]
pub struct QuestionCreate {
    pub text: String,
    pub kind: QuestionKind,
    pub options: Vec<String>,
    pub allow_other: bool,
    pub sensitivity: i16,
    pub max_options: Option<i16>,
}

impl QuestionCreate {
    pub fn free_form(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: QuestionKind::FreeForm,
            options: Vec::new(),
            allow_other: false,
            sensitivity: 0,
            max_options: None,
        }
    }

    pub fn choose_one<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            kind: QuestionKind::ChooseOne,
            options: options.into_iter().map(Into::into).collect(),
            allow_other: false,
            sensitivity: 0,
            max_options: None,
        }
    }

    pub fn allow_other(mut self) -> Self {
        self.allow_other = true;
        self
    }

    pub fn with_max_options(mut self, max: i16) -> Self {
        self.max_options = Some(max);
        self
    }

    pub fn with_sensitivity(mut self, tier: i16) -> Self {
        self.sensitivity = tier;
        self
    }
}
