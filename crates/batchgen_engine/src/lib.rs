//! Batchgen engine: the generate call, its failure normalization and effect execution.
mod engine;
mod failure;
mod generate;
mod persist;
mod types;

pub use engine::EngineHandle;
pub use failure::{describe_http_failure, describe_unreadable_body};
pub use generate::{GenerateSettings, Generator, ReqwestGenerator, GENERATE_PATH};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use types::{
    EngineEvent, FailureKind, GenerateError, GenerateRequest, GenerateResponse, GenerateResult,
    RequestId,
};
