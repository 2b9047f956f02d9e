use std::error::Error as _;
use std::time::Duration;

use batchgen_logging::{batch_debug, batch_info, batch_warn};

use crate::failure::{describe_http_failure, describe_unreadable_body};
use crate::{FailureKind, GenerateError, GenerateRequest, GenerateResponse, GenerateResult, RequestId};

/// Fixed path of the batch generation endpoint.
pub const GENERATE_PATH: &str = "/api/v1/generate";

#[derive(Debug, Clone)]
pub struct GenerateSettings {
    /// Scheme, host and optional path prefix the endpoint path is appended to.
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Whole-request limit; `None` leaves hang behaviour to the HTTP stack.
    pub request_timeout: Option<Duration>,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    /// Performs one generate call. Never retries.
    async fn generate(
        &self,
        request_id: RequestId,
        request: &GenerateRequest,
    ) -> Result<Vec<GenerateResult>, GenerateError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGenerator {
    settings: GenerateSettings,
}

impl ReqwestGenerator {
    pub fn new(settings: GenerateSettings) -> Self {
        Self { settings }
    }

    pub fn endpoint(&self) -> Result<reqwest::Url, GenerateError> {
        let base = self.settings.base_url.trim_end_matches('/');
        reqwest::Url::parse(&format!("{base}{GENERATE_PATH}"))
            .map_err(|err| GenerateError::new(FailureKind::InvalidEndpoint, err.to_string()))
    }

    fn build_client(&self) -> Result<reqwest::Client, GenerateError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| GenerateError::new(FailureKind::Transport, error_chain(&err)))
    }
}

#[async_trait::async_trait]
impl Generator for ReqwestGenerator {
    async fn generate(
        &self,
        request_id: RequestId,
        request: &GenerateRequest,
    ) -> Result<Vec<GenerateResult>, GenerateError> {
        let url = self.endpoint()?;
        let client = self.build_client()?;

        batch_info!(
            "generate request_id={} lines={} prompt_len={} url={}",
            request_id,
            request.user_inputs.len(),
            request.system_prompt.len(),
            url
        );

        let response = client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) if !status.is_success() => {
                let message = describe_unreadable_body(status, &error_chain(&err));
                batch_warn!("generate request_id={} failed: {}", request_id, message);
                return Err(GenerateError::new(
                    FailureKind::HttpStatus(status.as_u16()),
                    message,
                ));
            }
            Err(err) => return Err(map_reqwest_error(err)),
        };
        batch_debug!(
            "generate request_id={} status={} body_len={}",
            request_id,
            status.as_u16(),
            body.len()
        );

        if !status.is_success() {
            let message = describe_http_failure(status, &body);
            batch_warn!("generate request_id={} failed: {}", request_id, message);
            return Err(GenerateError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body).map_err(|err| {
            batch_warn!(
                "generate request_id={} returned a malformed body: {}",
                request_id,
                err
            );
            GenerateError::new(
                FailureKind::MalformedResponse,
                format!("{}: malformed response body: {err}", status.as_u16()),
            )
        })?;

        Ok(parsed.results)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GenerateError {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else {
        FailureKind::Transport
    };
    GenerateError::new(kind, error_chain(&err))
}

/// Joins an error with its sources; reqwest's own message omits the cause.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
