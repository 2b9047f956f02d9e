mod app;
mod effects;
pub(crate) mod logging;
mod persistence;
mod system_theme;
mod ui;

use std::path::PathBuf;

use batchgen_engine::GenerateSettings;

pub(crate) use app::run_app;

#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub settings: GenerateSettings,
    pub prompt_file: Option<PathBuf>,
    pub batch_file: Option<PathBuf>,
    pub prefs_dir: PathBuf,
    pub log_destination: logging::LogDestination,
    pub color: bool,
    pub once: bool,
}
