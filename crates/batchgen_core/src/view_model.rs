use crate::{ColorScheme, ThemePreference, Visibility};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// A submission is in flight; show the pending affordance.
    pub loading: bool,
    pub submit_enabled: bool,
    /// Validation notice from the last rejected submission.
    pub notice: Option<String>,
    /// Failure message of the last submission, shown verbatim.
    pub error: Option<String>,
    pub placeholder: Option<&'static str>,
    pub items: Vec<ResultRowView>,
    pub toggle_all_enabled: bool,
    pub batch_line_count: usize,
    pub theme: ThemePreference,
    pub color_scheme: ColorScheme,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRowView {
    pub index: usize,
    pub input: String,
    pub output: String,
    pub structured: bool,
    pub visibility: Visibility,
    pub toggle_label: &'static str,
}
