use anyhow::Result;
use itertools::Itertools;
use std::io::{Read, Write};
use tracing::{debug, info, warn};

use crate::quiz::error::QuizError;

pub mod columns;
pub mod question;

pub use columns::{ColumnMap, Field};
pub use question::{Question, RawQuestion};


pub type Row = Vec<String>;

/// Rows of strings as delivered by a question source: one header row followed by data
/// rows. Rows may be ragged; missing trailing cells read as empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawTable {
    pub header: Row,
    pub rows: Vec<Row>,
}

impl RawTable {
    pub fn new(header: Row, rows: Vec<Row>) -> RawTable {
        RawTable { header, rows }
    }

    pub fn from_records(mut records: Vec<Row>) -> std::result::Result<RawTable, QuizError> {
        if records.is_empty() {
            return Err(QuizError::MissingHeaderRow);
        }
        let header = records.remove(0);
        Ok(RawTable::new(header, records))
    }

    pub fn read_csv<R: Read>(reader: R) -> Result<RawTable> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            records.push(record.iter().map(str::to_owned).collect());
        }
        Ok(RawTable::from_records(records)?)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
        csv_writer.write_record(&self.header)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Every usable question loaded from one source.
#[derive(Clone, Debug, Default)]
pub struct QuestionPool {
    questions: Vec<Question>,
    discarded: usize,
}

impl QuestionPool {
    /// Reads every data row through the header's column map. Rows missing the question
    /// text or any of the four options are dropped; ids follow row order, starting at 1,
    /// whether or not the row survives.
    pub fn from_table(table: &RawTable) -> QuestionPool {
        let columns = ColumnMap::resolve(&table.header);
        let missing = columns.missing();
        if !missing.is_empty() {
            warn!("Question table has no column for {:?}", missing);
        }

        let mut questions = Vec::with_capacity(table.rows.len());
        let mut discarded = 0;
        for (index, row) in table.rows.iter().enumerate() {
            let id = index as u32 + 1;
            match RawQuestion::read(row, &columns).into_question(id) {
                Some(question) => questions.push(question),
                None => {
                    debug!("Discarding incomplete question row {}", id);
                    discarded += 1;
                }
            }
        }

        if discarded > 0 {
            warn!("Discarded {} incomplete question rows", discarded);
        }
        info!(
            "Loaded {} questions from {} rows",
            questions.len(),
            table.rows.len()
        );

        QuestionPool {
            questions,
            discarded,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn discarded(&self) -> usize {
        self.discarded
    }

    pub fn subjects(&self) -> Vec<&str> {
        self.questions
            .iter()
            .map(|q| q.subject.as_str())
            .unique()
            .sorted()
            .collect()
    }

    pub fn topics(&self, subject: &str) -> Vec<&str> {
        self.questions
            .iter()
            .filter(|q| q.subject == subject && !q.topic.is_empty())
            .map(|q| q.topic.as_str())
            .unique()
            .sorted()
            .collect()
    }
}
