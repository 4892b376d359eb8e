/// Canonical question attributes, independent of how the source labels its columns.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    Question,
    OptionA,
    OptionB,
    OptionC,
    OptionD,
    CorrectAnswer,
    Subject,
    Topic,
    Difficulty,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Question,
        Field::OptionA,
        Field::OptionB,
        Field::OptionC,
        Field::OptionD,
        Field::CorrectAnswer,
        Field::Subject,
        Field::Topic,
        Field::Difficulty,
    ];

    /// Lowercase header names accepted for this field.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Question => &["question", "q", "questions"],
            Field::OptionA => &["option 1", "option a", "a", "optiona", "opt a"],
            Field::OptionB => &["option 2", "option b", "b", "optionb", "opt b"],
            Field::OptionC => &["option 3", "option c", "c", "optionc", "opt c"],
            Field::OptionD => &["option 4", "option d", "d", "optiond", "opt d"],
            Field::CorrectAnswer => &["answer", "correct", "correct answer", "correctanswer"],
            Field::Subject => &["subject", "subjects"],
            Field::Topic => &["topic/chapter", "topic", "topics", "chapter", "chapters"],
            Field::Difficulty => &["difficulty level", "difficulty", "level", "difficult"],
        }
    }

    fn slot(self) -> usize {
        self as usize
    }

    fn accepts(self, header: &str) -> bool {
        let header = header.trim().to_lowercase();
        self.aliases().iter().any(|alias| *alias == header)
    }
}

/// Column index of each canonical field within a header row, if present.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ColumnMap {
    indices: [Option<usize>; 9],
}

impl ColumnMap {
    /// Maps each field to the leftmost header cell matching one of its aliases.
    /// A column claimed by one field is never handed to another.
    pub fn resolve<S: AsRef<str>>(header: &[S]) -> ColumnMap {
        let mut map = ColumnMap::default();
        let mut claimed = vec![false; header.len()];
        for field in Field::ALL.iter() {
            let index = header
                .iter()
                .enumerate()
                .find(|(i, cell)| !claimed[*i] && field.accepts(AsRef::<str>::as_ref(*cell)))
                .map(|(i, _)| i);
            if let Some(i) = index {
                claimed[i] = true;
            }
            map.indices[field.slot()] = index;
        }
        map
    }

    pub fn index(&self, field: Field) -> Option<usize> {
        self.indices[field.slot()]
    }

    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| self.index(*field).is_none())
            .collect()
    }
}
