mod platform;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use platform::logging::LogDestination;
use platform::AppConfig;

#[derive(Debug, Parser)]
#[command(
    name = "batchgen",
    version,
    about = "Submit a batch of release titles with an instruction prompt and review the generated results."
)]
struct Cli {
    /// Base URL of the generation service; `/api/v1/generate` is appended.
    #[arg(long, env = "BATCHGEN_ENDPOINT", default_value = "http://127.0.0.1:8000")]
    endpoint: String,
    /// File whose contents replace the default system prompt.
    #[arg(long)]
    prompt_file: Option<PathBuf>,
    /// File with one title per line.
    #[arg(long)]
    batch_file: Option<PathBuf>,
    /// Directory holding the preferences file.
    #[arg(long, env = "BATCHGEN_PREFS_DIR", default_value = ".")]
    prefs_dir: PathBuf,
    #[arg(long, default_value_t = 10)]
    connect_timeout_secs: u64,
    /// Overall request limit; unset waits for the server.
    #[arg(long)]
    request_timeout_secs: Option<u64>,
    #[arg(long, value_enum, default_value_t = LogArg::File)]
    log: LogArg,
    /// Disable ANSI colours in the rendered view.
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,
    /// Submit the loaded batch once, print the outcome and exit.
    #[arg(long)]
    once: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogArg {
    File,
    Terminal,
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(value: LogArg) -> Self {
        match value {
            LogArg::File => LogDestination::File,
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::Both => LogDestination::Both,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = AppConfig {
        settings: batchgen_engine::GenerateSettings {
            base_url: cli.endpoint,
            connect_timeout: Duration::from_secs(cli.connect_timeout_secs),
            request_timeout: cli.request_timeout_secs.map(Duration::from_secs),
        },
        prompt_file: cli.prompt_file,
        batch_file: cli.batch_file,
        prefs_dir: cli.prefs_dir,
        log_destination: cli.log.into(),
        color: !cli.no_color,
        once: cli.once,
    };
    platform::run_app(config)
}
