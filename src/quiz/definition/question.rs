use serde::Serialize;

use crate::quiz::answer::{self, OptionTexts, Ordinal};
use crate::quiz::definition::columns::{ColumnMap, Field};

pub const DEFAULT_SUBJECT: &str = "General";
pub const DEFAULT_DIFFICULTY: &str = "Medium";

/// One row of the source table, read through a column map but not yet validated.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawQuestion {
    pub text: String,
    pub options: OptionTexts,
    pub correct_answer: String,
    pub subject: Option<String>,
    pub topic: Option<String>,
    pub difficulty: Option<String>,
}

impl RawQuestion {
    pub fn read<S: AsRef<str>>(row: &[S], columns: &ColumnMap) -> RawQuestion {
        let cell = |field: Field| -> Option<String> {
            columns
                .index(field)
                .and_then(|i| row.get(i))
                .map(AsRef::<str>::as_ref)
                .filter(|c| !c.is_empty())
                .map(str::to_owned)
        };
        RawQuestion {
            text: cell(Field::Question).unwrap_or_default(),
            options: [
                cell(Field::OptionA).unwrap_or_default(),
                cell(Field::OptionB).unwrap_or_default(),
                cell(Field::OptionC).unwrap_or_default(),
                cell(Field::OptionD).unwrap_or_default(),
            ],
            correct_answer: cell(Field::CorrectAnswer).unwrap_or_default(),
            subject: cell(Field::Subject),
            topic: cell(Field::Topic),
            difficulty: cell(Field::Difficulty),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.text.is_empty() && self.options.iter().all(|o| !o.is_empty())
    }

    pub fn into_question(self, id: u32) -> Option<Question> {
        if !self.is_valid() {
            return None;
        }
        Some(Question {
            id,
            text: self.text,
            options: self.options,
            correct_answer: self.correct_answer,
            subject: self.subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_owned()),
            topic: self.topic.unwrap_or_default(),
            difficulty: self
                .difficulty
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_owned()),
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: OptionTexts,
    /// Kept exactly as authored; it may be a letter, a number or the text of an option.
    pub correct_answer: String,
    pub subject: String,
    pub topic: String,
    pub difficulty: String,
}

impl Question {
    pub fn option(&self, ordinal: Ordinal) -> &str {
        &self.options[ordinal.index()]
    }

    pub fn correct_ordinal(&self) -> Option<Ordinal> {
        answer::encode(&self.correct_answer, Some(&self.options))
    }
}
