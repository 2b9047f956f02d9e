/// Shown before the first submission.
pub const IDLE_PLACEHOLDER: &str = "Results will appear here.";
/// Shown while a submission is in flight.
pub const LOADING_PLACEHOLDER: &str = "Parsing... this may take a moment.";
/// Shown when a submission succeeds with zero results.
pub const EMPTY_RESULTS_PLACEHOLDER: &str = "No results to display.";

/// One generated line as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub input: String,
    /// Raw model output, possibly JSON-encoded.
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub input: String,
    pub display: String,
    /// Whether `display` is pretty-printed JSON rather than the raw output.
    pub structured: bool,
}

/// Re-encodes `raw` as indented JSON, or `None` when it does not parse.
///
/// Object keys are emitted in sorted order, so the same input always yields
/// the same bytes.
pub fn try_pretty_print(raw: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

pub fn render(results: &[ResultItem]) -> Vec<RenderedItem> {
    results
        .iter()
        .map(|item| match try_pretty_print(&item.output) {
            Some(display) => RenderedItem {
                input: item.input.clone(),
                display,
                structured: true,
            },
            None => RenderedItem {
                input: item.input.clone(),
                display: item.output.clone(),
                structured: false,
            },
        })
        .collect()
}
