use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

use crate::quiz::answer::{self, Ordinal};
use crate::quiz::results;
use crate::quiz::summary::{self, CorrectAnswer, ReviewEntry, ReviewSummary, Verdict};
use crate::quiz::{AnswerSheet, QuestionPool, QuizError, QuizSession, ResultReport, Settings};


enum Selection {
    Answer(Ordinal),
    Skip,
    Quit,
}

fn pick(choices: &[&str], input: &str) -> String {
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= choices.len() => choices[n - 1].to_owned(),
        _ => input.to_owned(),
    }
}

fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "Correct",
        Verdict::Incorrect => "Incorrect",
        Verdict::Unattempted => "Unattempted",
    }
}

/// Plays quizzes over a line-based text interface.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run<G: Rng + ?Sized>(
        &mut self,
        pool: &QuestionPool,
        settings: &Settings,
        rng: &mut G,
    ) -> Result<()> {
        if pool.is_empty() {
            writeln!(self.output, "No usable questions were loaded.")?;
            return Ok(());
        }

        loop {
            let subject = match self.choose_subject(pool)? {
                Some(subject) => subject,
                None => return Ok(()),
            };
            let topic = match self.choose_topic(pool, &subject)? {
                Some(topic) => topic,
                None => return Ok(()),
            };

            let session =
                match QuizSession::build(pool.questions(), &subject, &topic, settings, rng) {
                    Ok(session) => session,
                    Err(e @ QuizError::NoMatchingQuestions { .. })
                    | Err(e @ QuizError::MissingSubject) => {
                        writeln!(self.output, "{}", e)?;
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };

            let sheet = self.administer(&session)?;
            let report = results::score(&session, sheet.answers());
            self.print_report(&report)?;
            self.print_summary(&summary::summarize(&report))?;

            match self.read_line("\nTake another quiz? [y/N] ")? {
                Some(reply) if reply.eq_ignore_ascii_case("y") || reply.eq_ignore_ascii_case("yes") => {
                    continue
                }
                _ => return Ok(()),
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn choose_subject(&mut self, pool: &QuestionPool) -> Result<Option<String>> {
        let subjects = pool.subjects();
        writeln!(self.output, "\nSubjects:")?;
        for (i, subject) in subjects.iter().enumerate() {
            let count = pool
                .questions()
                .iter()
                .filter(|q| q.subject == *subject)
                .count();
            writeln!(self.output, "  {}. {} ({} questions)", i + 1, subject, count)?;
        }
        let choice = self.read_line("Choose a subject: ")?;
        Ok(choice.map(|c| pick(&subjects, &c)))
    }

    fn choose_topic(&mut self, pool: &QuestionPool, subject: &str) -> Result<Option<String>> {
        let topics = pool.topics(subject);
        if topics.is_empty() {
            return Ok(Some(String::new()));
        }
        writeln!(self.output, "\nTopics:")?;
        writeln!(self.output, "  0. All topics")?;
        for (i, topic) in topics.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, topic)?;
        }
        let choice = self.read_line("Choose a topic (Enter for all): ")?;
        Ok(choice.map(|c| if c == "0" { String::new() } else { pick(&topics, &c) }))
    }

    fn administer(&mut self, session: &QuizSession) -> Result<AnswerSheet> {
        let mut sheet = AnswerSheet::new(session);
        let scope = if session.topic().is_empty() {
            session.subject().to_owned()
        } else {
            format!("{} / {}", session.subject(), session.topic())
        };
        writeln!(self.output, "\n{}: {} questions", scope, session.len())?;
        while let Some(position) = sheet.active() {
            let question = &session.questions()[position];
            writeln!(
                self.output,
                "\nQuestion {}/{} [{}, {}]",
                position + 1,
                session.len(),
                question.subject,
                question.difficulty
            )?;
            writeln!(self.output, "{}", question.text)?;
            for ordinal in Ordinal::all() {
                writeln!(self.output, "  {}. {}", ordinal, question.option(ordinal))?;
            }

            match self.read_selection()? {
                Selection::Answer(ordinal) => {
                    sheet.record(position, &ordinal.letter().to_string())?;
                    sheet.advance();
                }
                Selection::Skip => sheet.advance(),
                Selection::Quit => sheet.finish(),
            }
        }
        Ok(sheet)
    }

    fn read_selection(&mut self) -> Result<Selection> {
        loop {
            let line = match self.read_line("Your answer (A-D, Enter to skip, Q to finish): ")? {
                Some(line) => line,
                None => return Ok(Selection::Quit),
            };
            if line.is_empty() {
                return Ok(Selection::Skip);
            }
            if line.eq_ignore_ascii_case("q") {
                return Ok(Selection::Quit);
            }
            match answer::encode(&line, None) {
                Some(ordinal) => return Ok(Selection::Answer(ordinal)),
                None => writeln!(self.output, "Please answer with A, B, C or D.")?,
            }
        }
    }

    fn print_report(&mut self, report: &ResultReport) -> Result<()> {
        writeln!(self.output, "\nScore: {}%", report.percentage)?;
        writeln!(
            self.output,
            "Correct: {}  Attempted: {}  Total: {}",
            report.correct, report.attempted, report.total
        )?;
        if report.data_quality_issues > 0 {
            writeln!(
                self.output,
                "Warning: {} questions have a correct answer matching none of their options.",
                report.data_quality_issues
            )?;
        }
        Ok(())
    }

    fn print_entry(&mut self, entry: &ReviewEntry) -> Result<()> {
        writeln!(
            self.output,
            "\nQ{}: {} [{}]",
            entry.number,
            entry.question,
            verdict_label(entry.verdict)
        )?;

        let correct_letter = match &entry.correct_answer {
            CorrectAnswer::Resolved(letter) => Some(*letter),
            CorrectAnswer::Raw(_) => None,
        };
        for ordinal in Ordinal::all() {
            let letter = ordinal.letter();
            let mut markers = String::new();
            if correct_letter == Some(letter) {
                markers.push_str(" (correct answer)");
            }
            if entry.user_answer.as_deref() == Some(letter.to_string().as_str()) {
                markers.push_str(" (your answer)");
            }
            writeln!(
                self.output,
                "  {}. {}{}",
                letter,
                entry.options[ordinal.index()],
                markers
            )?;
        }

        let correct_label = match &entry.correct_answer {
            CorrectAnswer::Resolved(letter) => letter.to_string(),
            CorrectAnswer::Raw(raw) => raw.clone(),
        };
        writeln!(
            self.output,
            "  Correct answer: {} - {}",
            correct_label,
            entry.correct_option_text.as_deref().unwrap_or("Not found")
        )?;
        match &entry.user_answer {
            Some(user_answer) => writeln!(
                self.output,
                "  Your answer: {} - {}",
                user_answer,
                entry.user_option_text.as_deref().unwrap_or("Not found")
            )?,
            None => writeln!(self.output, "  Your answer: Not attempted")?,
        }
        Ok(())
    }

    fn print_summary(&mut self, summary: &ReviewSummary) -> Result<()> {
        writeln!(self.output, "\nReview")?;
        for entry in &summary.entries {
            self.print_entry(entry)?;
        }
        Ok(())
    }
}
