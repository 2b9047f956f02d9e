use batchgen_core::{render, try_pretty_print, ResultItem};
use pretty_assertions::assert_eq;

fn item(input: &str, output: &str) -> ResultItem {
    ResultItem {
        input: input.to_string(),
        output: output.to_string(),
    }
}

#[test]
fn json_output_is_pretty_printed_and_text_is_verbatim() {
    let rendered = render(&[item("one", r#"{"a":1}"#), item("two", "not json")]);

    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].input, "one");
    assert_eq!(rendered[0].display, "{\n  \"a\": 1\n}");
    assert!(rendered[0].structured);
    assert_eq!(rendered[1].input, "two");
    assert_eq!(rendered[1].display, "not json");
    assert!(!rendered[1].structured);
}

#[test]
fn nested_json_uses_two_space_indentation() {
    let pretty = try_pretty_print(r#"{"title":"The Matrix","tags":["a",null],"year":1999}"#)
        .expect("valid json");

    assert_eq!(
        pretty,
        "{\n  \"tags\": [\n    \"a\",\n    null\n  ],\n  \"title\": \"The Matrix\",\n  \"year\": 1999\n}"
    );
}

#[test]
fn malformed_output_does_not_affect_siblings() {
    let rendered = render(&[
        item("a", "{\"broken\": "),
        item("b", "[1,2]"),
        item("c", "<html>\n</html>"),
    ]);

    assert_eq!(rendered[0].display, "{\"broken\": ");
    assert_eq!(rendered[1].display, "[\n  1,\n  2\n]");
    assert_eq!(rendered[2].display, "<html>\n</html>");
}

#[test]
fn rendering_is_idempotent() {
    let results = vec![
        item("x", r#"{"b":2,"a":{"c":[true,false]}}"#),
        item("y", "plain"),
    ];

    let first = render(&results);
    let second = render(&results);
    assert_eq!(first, second);

    let reparsed = try_pretty_print(&first[0].display).unwrap();
    assert_eq!(reparsed, first[0].display);
}

#[test]
fn empty_results_render_nothing() {
    assert!(render(&[]).is_empty());
}

#[test]
fn non_json_is_none() {
    assert_eq!(try_pretty_print("Input: The.Matrix"), None);
    assert_eq!(try_pretty_print(""), None);
}
