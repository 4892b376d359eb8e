use serde::Serialize;
use tracing::{debug, info, warn};

use crate::quiz::answer::{self, Ordinal};
use crate::quiz::definition::Question;
use crate::quiz::session::{Answers, QuizSession};


#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct QuestionResult {
    pub question: Question,
    pub user_answer: Option<String>,
    pub correct_ordinal: Option<Ordinal>,
    pub user_ordinal: Option<Ordinal>,
    pub is_attempted: bool,
    pub is_correct: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ResultReport {
    pub total: usize,
    pub attempted: usize,
    pub correct: usize,
    pub percentage: u32,
    /// Questions whose stored correct answer designates no option. They can never be
    /// answered correctly and point at a problem in the source data.
    pub data_quality_issues: usize,
    pub per_question: Vec<QuestionResult>,
}

fn percentage(correct: usize, attempted: usize) -> u32 {
    if attempted == 0 {
        return 0;
    }
    (correct as f64 / attempted as f64 * 100.0).round() as u32
}

fn score_question(position: usize, question: &Question, user_answer: Option<&str>) -> QuestionResult {
    let correct_ordinal = question.correct_ordinal();
    if correct_ordinal.is_none() {
        warn!(
            "Question {} has an unresolvable correct answer {:?}",
            question.id, question.correct_answer
        );
    }

    let user_ordinal = user_answer.and_then(|a| answer::encode(a, None));
    let is_correct = match (correct_ordinal, user_ordinal) {
        (Some(correct), Some(user)) => correct == user,
        _ => false,
    };

    debug!(
        "Question {} (#{}): correct {:?} -> {:?}, user {:?} -> {:?}, correct: {}",
        position + 1,
        question.id,
        question.correct_answer,
        correct_ordinal,
        user_answer,
        user_ordinal,
        is_correct
    );

    QuestionResult {
        question: question.clone(),
        user_answer: user_answer.map(str::to_owned),
        correct_ordinal,
        user_ordinal,
        is_attempted: user_answer.is_some(),
        is_correct,
    }
}

/// Scores every question of the session against the collected answers. The stored
/// correct answer is resolved against the question's own option texts; user answers
/// are resolved as symbols only.
pub fn score(session: &QuizSession, answers: &Answers) -> ResultReport {
    let per_question: Vec<QuestionResult> = session
        .questions()
        .iter()
        .enumerate()
        .map(|(position, question)| {
            score_question(position, question, answers.get(&position).map(String::as_str))
        })
        .collect();

    let attempted = per_question.iter().filter(|r| r.is_attempted).count();
    let correct = per_question.iter().filter(|r| r.is_correct).count();
    let data_quality_issues = per_question
        .iter()
        .filter(|r| r.correct_ordinal.is_none())
        .count();

    let report = ResultReport {
        total: per_question.len(),
        attempted,
        correct,
        percentage: percentage(correct, attempted),
        data_quality_issues,
        per_question,
    };

    info!(
        "Quiz finished: {} correct, {} attempted, {} total ({}%)",
        report.correct, report.attempted, report.total, report.percentage
    );
    if report.data_quality_issues > 0 {
        warn!(
            "{} questions could not be scored because their correct answer matches no option",
            report.data_quality_issues
        );
    }

    report
}
