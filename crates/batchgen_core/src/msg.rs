#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the system prompt.
    PromptChanged(String),
    /// User edited the batch input (one title per line).
    BatchInputChanged(String),
    /// User activated the submit trigger.
    SubmitClicked,
    /// The in-flight generate call returned results.
    GenerateSucceeded {
        request_id: crate::RequestId,
        results: Vec<crate::ResultItem>,
    },
    /// The in-flight generate call failed; `message` is shown verbatim.
    GenerateFailed {
        request_id: crate::RequestId,
        message: String,
    },
    /// User flipped the visibility of one rendered item.
    ItemToggleClicked { index: usize },
    /// User activated the global show/hide control.
    ToggleAllClicked,
    /// User picked a theme.
    ThemeSelected(crate::ThemePreference),
    /// Apply the persisted theme at startup.
    ThemeRestored(crate::ThemePreference),
    /// The OS colour scheme was detected or changed.
    SystemSchemeChanged(crate::ColorScheme),
    /// Fallback for placeholder wiring.
    NoOp,
}
