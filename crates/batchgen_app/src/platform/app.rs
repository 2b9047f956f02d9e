use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use batchgen_core::{update, AppState, Msg, RequestState, DEFAULT_SYSTEM_PROMPT};
use batchgen_logging::{batch_debug, batch_info, batch_warn};

use super::effects::EffectRunner;
use super::ui::commands::{self, Command, CommandError};
use super::ui::render::{self, Palette};
use super::{logging, persistence, system_theme, AppConfig};

/// Everything the main loop reacts to.
pub(crate) enum AppEvent {
    Msg(Msg),
    Command(Result<Command, CommandError>),
    InputClosed,
}

pub(crate) fn run_app(config: AppConfig) -> anyhow::Result<ExitCode> {
    logging::initialize(config.log_destination);
    batch_info!("batchgen starting; endpoint={}", config.settings.base_url);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(
        config.settings.clone(),
        config.prefs_dir.clone(),
        event_tx.clone(),
    )
    .context("failed to start the generation engine")?;

    let mut app = App {
        state: AppState::new(),
        effects,
        color: config.color,
    };

    if let Some(theme) = persistence::load_theme(&config.prefs_dir) {
        app.dispatch(Msg::ThemeRestored(theme));
    }
    app.dispatch(Msg::SystemSchemeChanged(system_theme::detect()));
    if let Some(path) = &config.prompt_file {
        app.dispatch(Msg::PromptChanged(read_input(path)?));
    }
    if let Some(path) = &config.batch_file {
        app.dispatch(Msg::BatchInputChanged(read_input(path)?));
    }

    if config.once {
        // Only the engine's event thread may keep the channel open now.
        drop(event_tx);
        return Ok(app.run_once(&event_rx));
    }

    spawn_stdin_reader(event_tx)?;
    app.print_help();
    app.print_view();
    app.run_interactive(&event_rx);
    Ok(ExitCode::SUCCESS)
}

struct App {
    state: AppState,
    effects: EffectRunner,
    color: bool,
}

impl App {
    /// Applies one message and executes its effects. Returns whether the view changed.
    fn dispatch(&mut self, msg: Msg) -> bool {
        batch_debug!("dispatch {}", msg_name(&msg));
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.effects.enqueue(effects);
        was_dirty
    }

    fn run_once(&mut self, event_rx: &mpsc::Receiver<AppEvent>) -> ExitCode {
        self.dispatch(Msg::SubmitClicked);
        while self.state.request().is_loading() {
            match event_rx.recv() {
                Ok(AppEvent::Msg(msg)) => {
                    self.dispatch(msg);
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
        self.print_view();
        match self.state.request() {
            RequestState::Success(_) => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    }

    fn run_interactive(&mut self, event_rx: &mpsc::Receiver<AppEvent>) {
        let mut input_closed = false;
        while let Ok(event) = event_rx.recv() {
            let changed = match event {
                AppEvent::Msg(msg) => self.dispatch(msg),
                AppEvent::Command(Ok(command)) => match self.handle_command(command) {
                    Flow::Continue(changed) => changed,
                    Flow::Quit => break,
                },
                AppEvent::Command(Err(err)) => {
                    println!("{err}");
                    false
                }
                AppEvent::InputClosed => {
                    input_closed = true;
                    false
                }
            };
            if changed {
                self.print_view();
            }
            // An in-flight batch is allowed to finish after stdin closes.
            if input_closed && !self.state.request().is_loading() {
                break;
            }
        }
        batch_info!("batchgen exiting");
    }

    fn handle_command(&mut self, command: Command) -> Flow {
        let msg = match command {
            Command::AddLine(line) => {
                let mut batch = self.state.batch_input().to_string();
                if !batch.is_empty() && !batch.ends_with('\n') {
                    batch.push('\n');
                }
                batch.push_str(&line);
                Msg::BatchInputChanged(batch)
            }
            Command::ClearBatch => Msg::BatchInputChanged(String::new()),
            Command::LoadBatch(path) => match read_input(&path) {
                Ok(text) => Msg::BatchInputChanged(text),
                Err(err) => return report(err),
            },
            Command::LoadPrompt(path) => match read_input(&path) {
                Ok(text) => Msg::PromptChanged(text),
                Err(err) => return report(err),
            },
            Command::ResetPrompt => Msg::PromptChanged(DEFAULT_SYSTEM_PROMPT.to_string()),
            Command::Submit => Msg::SubmitClicked,
            Command::Toggle(index) => Msg::ItemToggleClicked { index },
            Command::ToggleAll => Msg::ToggleAllClicked,
            Command::Theme(theme) => Msg::ThemeSelected(theme),
            Command::Show => return Flow::Continue(true),
            Command::Help => {
                self.print_help();
                return Flow::Continue(false);
            }
            Command::Quit => return Flow::Quit,
        };
        Flow::Continue(self.dispatch(msg))
    }

    fn palette(&self) -> Palette {
        if self.color {
            Palette::for_scheme(self.state.color_scheme())
        } else {
            Palette::plain()
        }
    }

    fn print_view(&self) {
        for line in render::render(&self.state.view(), self.palette()) {
            println!("{line}");
        }
    }

    fn print_help(&self) {
        println!("Commands:\n{}", commands::help_text());
    }
}

enum Flow {
    Continue(bool),
    Quit,
}

fn report(err: anyhow::Error) -> Flow {
    batch_warn!("{:#}", err);
    println!("{err:#}");
    Flow::Continue(false)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("batchgen-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if let Some(command) = commands::parse(&line) {
                    if event_tx.send(AppEvent::Command(command)).is_err() {
                        return;
                    }
                }
            }
            let _ = event_tx.send(AppEvent::InputClosed);
        })?;
    Ok(())
}

/// Message name without its payload; prompts and titles stay out of the log.
fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::PromptChanged(_) => "PromptChanged",
        Msg::BatchInputChanged(_) => "BatchInputChanged",
        Msg::SubmitClicked => "SubmitClicked",
        Msg::GenerateSucceeded { .. } => "GenerateSucceeded",
        Msg::GenerateFailed { .. } => "GenerateFailed",
        Msg::ItemToggleClicked { .. } => "ItemToggleClicked",
        Msg::ToggleAllClicked => "ToggleAllClicked",
        Msg::ThemeSelected(_) => "ThemeSelected",
        Msg::ThemeRestored(_) => "ThemeRestored",
        Msg::SystemSchemeChanged(_) => "SystemSchemeChanged",
        Msg::NoOp => "NoOp",
    }
}
