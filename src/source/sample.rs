use crate::quiz::RawTable;

const HEADER: [&str; 8] = [
    "Question",
    "Option A",
    "Option B",
    "Option C",
    "Option D",
    "Answer",
    "Subject",
    "Difficulty",
];

const QUESTIONS: [[&str; 8]; 5] = [
    [
        "What is the SI unit of force?",
        "Newton",
        "Joule",
        "Watt",
        "Pascal",
        "A",
        "Physics",
        "Easy",
    ],
    [
        "Which of the following is the chemical symbol for Gold?",
        "Go",
        "Au",
        "Ag",
        "Gd",
        "B",
        "Chemistry",
        "Medium",
    ],
    [
        "What is the powerhouse of the cell?",
        "Nucleus",
        "Mitochondria",
        "Ribosome",
        "Endoplasmic reticulum",
        "B",
        "Biology",
        "Easy",
    ],
    [
        "Which law states that energy cannot be created or destroyed?",
        "Newton's First Law",
        "Law of Conservation of Energy",
        "Ohm's Law",
        "Boyle's Law",
        "B",
        "Physics",
        "Medium",
    ],
    [
        "What is the pH of pure water?",
        "6",
        "7",
        "8",
        "14",
        "B",
        "Chemistry",
        "Easy",
    ],
];

fn to_row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Built-in questions used when no source is configured or reachable.
pub fn table() -> RawTable {
    RawTable::new(
        to_row(&HEADER),
        QUESTIONS.iter().map(|row| to_row(row)).collect(),
    )
}
