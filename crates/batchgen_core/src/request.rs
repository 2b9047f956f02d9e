use crate::ResultItem;

pub type RequestId = u64;

/// Lifecycle of the single batch request.
///
/// Every submission moves to `Loading`, and every `Loading` resolves to
/// exactly one of `Success` or `Failed`. Any state other than `Loading`
/// accepts a new submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
    },
    Success(Vec<ResultItem>),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading { .. })
    }

    /// Id of the call currently in flight, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        match self {
            RequestState::Loading { request_id } => Some(*request_id),
            _ => None,
        }
    }
}
