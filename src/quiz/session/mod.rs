use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::info;

use crate::quiz::definition::Question;
use crate::quiz::error::QuizError;
use crate::quiz::settings::Settings;


/// Raw answers keyed by position within the session. Unattempted questions have no entry.
pub type Answers = BTreeMap<usize, String>;

/// The questions selected for one attempt, in the order they are asked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuizSession {
    subject: String,
    topic: String,
    questions: Vec<Question>,
}

impl QuizSession {
    /// Selects the questions matching `subject` (and `topic`, unless empty), shuffles
    /// them and keeps at most `settings.max_questions`.
    pub fn build<R: Rng + ?Sized>(
        pool: &[Question],
        subject: &str,
        topic: &str,
        settings: &Settings,
        rng: &mut R,
    ) -> Result<QuizSession, QuizError> {
        if subject.is_empty() {
            return Err(QuizError::MissingSubject);
        }

        let mut questions: Vec<Question> = pool
            .iter()
            .filter(|q| q.subject == subject)
            .filter(|q| topic.is_empty() || q.topic == topic)
            .cloned()
            .collect();
        if questions.is_empty() {
            return Err(QuizError::NoMatchingQuestions {
                subject: subject.to_owned(),
                topic: topic.to_owned(),
            });
        }

        questions.shuffle(rng);
        questions.truncate(settings.session_cap());

        info!(
            "Started quiz on {:?} ({:?}) with {} questions",
            subject,
            topic,
            questions.len()
        );

        Ok(QuizSession {
            subject: subject.to_owned(),
            topic: topic.to_owned(),
            questions,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
impl QuizSession {
    /// A session that asks `questions` in the given order.
    pub fn in_order(questions: Vec<Question>) -> QuizSession {
        let subject = questions
            .first()
            .map(|q| q.subject.clone())
            .unwrap_or_default();
        QuizSession {
            subject,
            topic: String::new(),
            questions,
        }
    }
}

/// Answers collected while a session is played. Only the active question accepts an
/// answer; moving past it freezes its entry.
#[derive(Clone, Debug, Default)]
pub struct AnswerSheet {
    answers: Answers,
    active: usize,
    len: usize,
}

impl AnswerSheet {
    pub fn new(session: &QuizSession) -> Self {
        AnswerSheet {
            answers: Answers::new(),
            active: 0,
            len: session.len(),
        }
    }

    pub fn active(&self) -> Option<usize> {
        if self.active < self.len {
            Some(self.active)
        } else {
            None
        }
    }

    pub fn record(&mut self, position: usize, answer: &str) -> Result<(), QuizError> {
        if position >= self.len {
            return Err(QuizError::PositionOutOfRange {
                position,
                len: self.len,
            });
        }
        if position < self.active {
            return Err(QuizError::AnswerFrozen(position));
        }
        if position > self.active {
            return Err(QuizError::InactivePosition {
                position,
                active: self.active,
            });
        }
        self.answers.insert(position, answer.to_owned());
        Ok(())
    }

    pub fn advance(&mut self) {
        if self.active < self.len {
            self.active += 1;
        }
    }

    /// Ends the attempt early; remaining questions stay unattempted.
    pub fn finish(&mut self) {
        self.active = self.len;
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }
}
