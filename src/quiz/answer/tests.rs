use super::*;

fn options() -> OptionTexts {
    [
        "Newton".to_owned(),
        " Joule ".to_owned(),
        "Watt".to_owned(),
        "4".to_owned(),
    ]
}

fn ordinal(value: u8) -> Ordinal {
    Ordinal::new(value).unwrap()
}

#[test]
fn empty_answer_is_unresolved() {
    assert_eq!(encode("", None), None);
    assert_eq!(encode("   ", None), None);
    assert_eq!(encode("", Some(&options())), None);
}

#[test]
fn unknown_symbol_is_unresolved() {
    assert_eq!(encode("Z", None), None);
    assert_eq!(encode("5", None), None);
    assert_eq!(encode("Option E", None), None);
    assert_eq!(encode("Option  B", None), None);
    assert_eq!(encode("AB", None), None);
}

#[test]
fn accepts_all_symbol_forms() {
    for answer in &["B", "b", "2", "Option B", "option 2", "OPTION 2", " option b "] {
        assert_eq!(encode(answer, None), Some(ordinal(2)), "{}", answer);
    }
    assert_eq!(encode("a", None), Some(ordinal(1)));
    assert_eq!(encode("Option 3", None), Some(ordinal(3)));
    assert_eq!(encode("D", None), Some(ordinal(4)));
}

#[test]
fn matches_option_text() {
    let options = options();
    assert_eq!(encode("Newton", Some(&options)), Some(ordinal(1)));
    assert_eq!(encode("Joule", Some(&options)), Some(ordinal(2)));
    assert_eq!(encode("  Watt ", Some(&options)), Some(ordinal(3)));
}

#[test]
fn option_text_match_is_case_sensitive() {
    let options = options();
    assert_eq!(encode("newton", Some(&options)), None);
}

#[test]
fn option_text_takes_precedence_over_symbols() {
    let mut options = options();
    options[0] = "C".to_owned();
    assert_eq!(encode("C", Some(&options)), Some(ordinal(1)));
    assert_eq!(encode("C", None), Some(ordinal(3)));
}

#[test]
fn first_matching_option_text_wins() {
    let options = [
        "Same".to_owned(),
        "Other".to_owned(),
        "Same".to_owned(),
        "Last".to_owned(),
    ];
    assert_eq!(encode("Same", Some(&options)), Some(ordinal(1)));
}

#[test]
fn falls_back_to_symbols_without_text_match() {
    assert_eq!(encode("b", Some(&options())), Some(ordinal(2)));
}

#[test]
fn option_text_round_trips_through_decode() {
    let options = options();
    for (k, letter) in ['A', 'B', 'C', 'D'].iter().enumerate() {
        let encoded = encode(&options[k], Some(&options)).unwrap();
        assert_eq!(decode(encoded.get()), Ok(*letter));
    }
}

#[test]
fn decode_rejects_out_of_range_ordinals() {
    assert_eq!(decode(0), Err(QuizError::InvalidOrdinal(0)));
    assert_eq!(decode(5), Err(QuizError::InvalidOrdinal(5)));
    assert_eq!(decode(1), Ok('A'));
    assert_eq!(decode(4), Ok('D'));
}

#[test]
fn ordinal_displays_as_letter() {
    assert_eq!(ordinal(3).to_string(), "C");
    assert_eq!(ordinal(3).index(), 2);
}
