use thiserror::Error;

/// Notice shown when a submission is rejected before any network call.
pub const VALIDATION_MESSAGE: &str =
    "Please provide a system prompt and at least one torrent title.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("system prompt is empty")]
    EmptyPrompt,
    #[error("batch contains no non-empty lines")]
    EmptyBatch,
}

/// A validated submission: a non-empty prompt and at least one non-empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    system_prompt: String,
    user_inputs: Vec<String>,
}

impl BatchRequest {
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn user_inputs(&self) -> &[String] {
        &self.user_inputs
    }

    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.system_prompt, self.user_inputs)
    }
}

/// Builds a [`BatchRequest`] from the raw prompt and batch text.
///
/// The prompt is trimmed. Batch lines are trimmed individually and blank
/// lines are dropped; order and duplicates are preserved.
pub fn collect(raw_prompt: &str, raw_batch: &str) -> Result<BatchRequest, ValidationError> {
    let system_prompt = raw_prompt.trim();
    if system_prompt.is_empty() {
        return Err(ValidationError::EmptyPrompt);
    }

    let user_inputs = parse_lines(raw_batch);
    if user_inputs.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }

    Ok(BatchRequest {
        system_prompt: system_prompt.to_owned(),
        user_inputs,
    })
}

pub(crate) fn parse_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
