use reqwest::StatusCode;
use serde_json::Value;

/// Builds the user-facing message for a non-success response.
///
/// A JSON body with a `detail` field yields `"<status>: <detail>"`. Any other
/// body, including an empty one, is appended verbatim, so backend diagnostics
/// (stack traces, HTML error pages) reach the user unmodified.
pub fn describe_http_failure(status: StatusCode, body: &str) -> String {
    let code = status.as_u16();
    match extract_detail(body) {
        Some(detail) => format!("{code}: {detail}"),
        None => format!("{code}: {body}"),
    }
}

/// Message for a non-success response whose body could not be read.
pub fn describe_unreadable_body(status: StatusCode, cause: &str) -> String {
    format!("{}: {cause}", status.as_u16())
}

fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
