use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use batchgen_core::{Effect, Msg, ResultItem};
use batchgen_engine::{EngineEvent, EngineHandle, GenerateRequest, GenerateSettings};
use batchgen_logging::{batch_error, batch_info, batch_warn};

use super::app::AppEvent;
use super::persistence;

pub(crate) struct EffectRunner {
    engine: Arc<EngineHandle>,
    prefs_dir: PathBuf,
}

impl EffectRunner {
    pub(crate) fn new(
        settings: GenerateSettings,
        prefs_dir: PathBuf,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> std::io::Result<Self> {
        let engine = Arc::new(EngineHandle::new(settings)?);
        let runner = Self { engine, prefs_dir };
        runner.spawn_event_loop(event_tx)?;
        Ok(runner)
    }

    pub(crate) fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitBatch {
                    request_id,
                    request,
                } => {
                    let (system_prompt, user_inputs) = request.into_parts();
                    batch_info!(
                        "SubmitBatch request_id={} lines={}",
                        request_id,
                        user_inputs.len()
                    );
                    self.engine.submit(
                        request_id,
                        GenerateRequest {
                            system_prompt,
                            user_inputs,
                        },
                    );
                }
                Effect::PersistTheme(theme) => {
                    match persistence::save_theme(&self.prefs_dir, theme) {
                        Ok(path) => batch_info!("Saved theme {} to {:?}", theme, path),
                        Err(err) => batch_error!("Failed to save theme {}: {}", theme, err),
                    }
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<AppEvent>) -> std::io::Result<()> {
        let engine = self.engine.clone();
        thread::Builder::new()
            .name("batchgen-events".to_string())
            .spawn(move || {
                while let Some(event) = engine.recv() {
                    if event_tx.send(AppEvent::Msg(map_event(event))).is_err() {
                        break;
                    }
                }
            })?;
        Ok(())
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::BatchCompleted { request_id, result } => match result {
            Ok(results) => Msg::GenerateSucceeded {
                request_id,
                results: results
                    .into_iter()
                    .map(|result| ResultItem {
                        input: result.input,
                        output: result.output,
                    })
                    .collect(),
            },
            Err(err) => {
                batch_warn!("Batch {} failed ({}): {}", request_id, err.kind, err.message);
                Msg::GenerateFailed {
                    request_id,
                    message: err.message,
                }
            }
        },
    }
}
