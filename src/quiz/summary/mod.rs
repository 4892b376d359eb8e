use serde::Serialize;

use crate::quiz::answer::{self, OptionTexts};
use crate::quiz::results::{QuestionResult, ResultReport};

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Verdict {
    Correct,
    Incorrect,
    Unattempted,
}

impl Verdict {
    pub fn of(result: &QuestionResult) -> Verdict {
        if result.is_correct {
            Verdict::Correct
        } else if result.is_attempted {
            Verdict::Incorrect
        } else {
            Verdict::Unattempted
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum CorrectAnswer {
    /// Letter of the option the stored answer designates.
    Resolved(char),
    /// Stored answer as authored, when it designates no option.
    Raw(String),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ReviewEntry {
    pub number: usize,
    pub question: String,
    pub options: OptionTexts,
    pub correct_answer: CorrectAnswer,
    pub correct_option_text: Option<String>,
    pub user_answer: Option<String>,
    pub user_option_text: Option<String>,
    pub verdict: Verdict,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub entries: Vec<ReviewEntry>,
    pub unresolved_correct_answers: usize,
}

fn review_entry(position: usize, result: &QuestionResult) -> ReviewEntry {
    let question = &result.question;

    let correct_answer = result
        .correct_ordinal
        .and_then(|ordinal| answer::decode(ordinal.get()).ok())
        .map(CorrectAnswer::Resolved)
        .unwrap_or_else(|| CorrectAnswer::Raw(question.correct_answer.clone()));
    let correct_option_text = result
        .correct_ordinal
        .map(|ordinal| question.option(ordinal).to_owned());
    let user_option_text = result
        .user_ordinal
        .map(|ordinal| question.option(ordinal).to_owned());

    ReviewEntry {
        number: position + 1,
        question: question.text.clone(),
        options: question.options.clone(),
        correct_answer,
        correct_option_text,
        user_answer: result.user_answer.clone(),
        user_option_text,
        verdict: Verdict::of(result),
    }
}

pub fn summarize(report: &ResultReport) -> ReviewSummary {
    ReviewSummary {
        entries: report
            .per_question
            .iter()
            .enumerate()
            .map(|(position, result)| review_entry(position, result))
            .collect(),
        unresolved_correct_answers: report.data_quality_issues,
    }
}
