use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QuizError {
    #[error("Please select a subject")]
    MissingSubject,
    #[error("No questions found for subject {subject:?} and topic {topic:?}")]
    NoMatchingQuestions { subject: String, topic: String },
    #[error("{0} is not a valid option number (expected 1 to 4)")]
    InvalidOrdinal(u8),
    #[error("Question {0} has already been answered")]
    AnswerFrozen(usize),
    #[error("Question {position} is not the active question (active: {active})")]
    InactivePosition { position: usize, active: usize },
    #[error("Question {position} is out of range (quiz has {len} questions)")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("Question table has no header row")]
    MissingHeaderRow,
}
