use crate::{BatchRequest, RequestId, ThemePreference};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the single generate call for this submission.
    SubmitBatch {
        request_id: RequestId,
        request: BatchRequest,
    },
    /// Write the chosen theme to the preference store.
    PersistTheme(ThemePreference),
}
