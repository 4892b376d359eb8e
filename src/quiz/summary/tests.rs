use super::*;
use crate::quiz::definition::Question;
use crate::quiz::results;
use crate::quiz::session::{Answers, QuizSession};

fn question(id: u32, correct_answer: &str) -> Question {
    Question {
        id,
        text: format!("What is {}?", id),
        options: [
            "Newton".to_owned(),
            "Joule".to_owned(),
            "Watt".to_owned(),
            "Pascal".to_owned(),
        ],
        correct_answer: correct_answer.to_owned(),
        subject: "Physics".to_owned(),
        topic: "Units".to_owned(),
        difficulty: "Easy".to_owned(),
    }
}

fn summary(questions: Vec<Question>, answers: &[(usize, &str)]) -> ReviewSummary {
    let session = QuizSession::in_order(questions);
    let answers: Answers = answers
        .iter()
        .map(|(position, answer)| (*position, answer.to_string()))
        .collect();
    summarize(&results::score(&session, &answers))
}

#[test]
fn assigns_verdicts() {
    let summary = summary(
        vec![question(1, "A"), question(2, "Joule"), question(3, "C")],
        &[(0, "A"), (1, "D")],
    );
    let verdicts: Vec<Verdict> = summary.entries.iter().map(|e| e.verdict).collect();
    assert_eq!(
        verdicts,
        vec![Verdict::Correct, Verdict::Incorrect, Verdict::Unattempted]
    );
    let numbers: Vec<usize> = summary.entries.iter().map(|e| e.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn resolves_correct_answer_letter_and_text() {
    let summary = summary(vec![question(1, "Joule")], &[(0, "D")]);
    let entry = &summary.entries[0];
    assert_eq!(entry.question, "What is 1?");
    assert_eq!(entry.correct_answer, CorrectAnswer::Resolved('B'));
    assert_eq!(entry.correct_option_text.as_deref(), Some("Joule"));
    assert_eq!(entry.user_answer.as_deref(), Some("D"));
    assert_eq!(entry.user_option_text.as_deref(), Some("Pascal"));
    assert_eq!(entry.options[3], "Pascal");
}

#[test]
fn falls_back_to_raw_correct_answer() {
    let summary = summary(vec![question(1, "Horsepower")], &[(0, "A")]);
    let entry = &summary.entries[0];
    assert_eq!(
        entry.correct_answer,
        CorrectAnswer::Raw("Horsepower".to_owned())
    );
    assert_eq!(entry.correct_option_text, None);
    assert_eq!(entry.verdict, Verdict::Incorrect);
    assert_eq!(summary.unresolved_correct_answers, 1);
}

#[test]
fn unattempted_entry_has_no_user_answer() {
    let summary = summary(vec![question(1, "A")], &[]);
    let entry = &summary.entries[0];
    assert_eq!(entry.user_answer, None);
    assert_eq!(entry.user_option_text, None);
    assert_eq!(entry.verdict, Verdict::Unattempted);
}
