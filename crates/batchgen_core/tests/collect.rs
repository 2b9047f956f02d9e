use batchgen_core::{collect, ValidationError};

#[test]
fn blank_and_whitespace_lines_are_dropped_in_order() {
    let request = collect(
        "  extract metadata  ",
        "Dune.2021.1080p \n\n   \n\tAlien.1979.720p\n\n",
    )
    .expect("valid request");

    assert_eq!(request.system_prompt(), "extract metadata");
    assert_eq!(request.user_inputs(), ["Dune.2021.1080p", "Alien.1979.720p"]);
}

#[test]
fn duplicates_are_kept() {
    let request = collect("p", "a\nb\na\n").unwrap();
    assert_eq!(request.user_inputs(), ["a", "b", "a"]);
}

#[test]
fn crlf_line_endings_are_line_boundaries() {
    let request = collect("p", "first\r\nsecond\r\n\r\n").unwrap();
    assert_eq!(request.user_inputs(), ["first", "second"]);
}

#[test]
fn empty_prompt_is_rejected() {
    assert_eq!(collect("   \n ", "title"), Err(ValidationError::EmptyPrompt));
}

#[test]
fn batch_without_lines_is_rejected() {
    assert_eq!(collect("prompt", ""), Err(ValidationError::EmptyBatch));
    assert_eq!(collect("prompt", " \n\t\n  "), Err(ValidationError::EmptyBatch));
}

#[test]
fn empty_prompt_wins_when_both_are_missing() {
    assert_eq!(collect("", ""), Err(ValidationError::EmptyPrompt));
}

#[test]
fn into_parts_returns_owned_fields() {
    let (prompt, inputs) = collect("p", "x").unwrap().into_parts();
    assert_eq!(prompt, "p");
    assert_eq!(inputs, vec!["x".to_string()]);
}
