pub mod answer;
pub mod definition;
pub mod error;
pub mod results;
pub mod session;
pub mod settings;
pub mod summary;

pub use self::definition::{QuestionPool, RawTable};
pub use self::error::QuizError;
pub use self::results::ResultReport;
pub use self::session::{AnswerSheet, QuizSession};
pub use self::settings::Settings;
