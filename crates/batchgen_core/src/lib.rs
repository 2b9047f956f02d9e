//! Batchgen core: pure request-lifecycle state machine and view-model helpers.
mod effect;
mod input;
mod msg;
mod prompt;
mod render;
mod request;
mod state;
mod theme;
mod toggle;
mod update;
mod view_model;

pub use effect::Effect;
pub use input::{collect, BatchRequest, ValidationError, VALIDATION_MESSAGE};
pub use msg::Msg;
pub use prompt::DEFAULT_SYSTEM_PROMPT;
pub use render::{
    render, try_pretty_print, RenderedItem, ResultItem, EMPTY_RESULTS_PLACEHOLDER,
    IDLE_PLACEHOLDER, LOADING_PLACEHOLDER,
};
pub use request::{RequestId, RequestState};
pub use state::AppState;
pub use theme::{resolve, ColorScheme, ThemePreference, UnknownTheme};
pub use toggle::{ToggleSet, Visibility};
pub use update::update;
pub use view_model::{AppViewModel, ResultRowView};
