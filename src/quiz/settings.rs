/// Upper bound on the number of questions in one session.
pub const MAX_SESSION_QUESTIONS: usize = 20;

#[derive(Clone, Debug)]
pub struct Settings {
    pub max_questions: usize,
}

impl Settings {
    pub fn session_cap(&self) -> usize {
        self.max_questions.min(MAX_SESSION_QUESTIONS)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_questions: MAX_SESSION_QUESTIONS,
        }
    }
}
