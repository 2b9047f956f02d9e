use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use batchgen_logging::{batch_error, batch_info};

use crate::generate::{GenerateSettings, Generator, ReqwestGenerator};
use crate::{EngineEvent, GenerateRequest, RequestId};

enum EngineCommand {
    Submit {
        request_id: RequestId,
        request: GenerateRequest,
    },
}

/// Handle to the worker thread that executes generate calls.
///
/// Commands are processed one at a time, so at most one generate call is
/// ever in flight no matter how many submissions are queued. The handle is
/// `Sync`, so one thread may submit while another waits for events.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: GenerateSettings) -> io::Result<Self> {
        Self::with_generator(Arc::new(ReqwestGenerator::new(settings)))
    }

    pub fn with_generator(generator: Arc<dyn Generator>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("batchgen-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    runtime.block_on(handle_command(generator.as_ref(), command, &event_tx));
                }
                batch_info!("engine command channel closed; worker exiting");
            })?;

        Ok(Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        })
    }

    pub fn submit(&self, request_id: RequestId, request: GenerateRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Submit {
                request_id,
                request,
            })
            .is_err()
        {
            batch_error!("engine worker is gone; request_id={} dropped", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    /// Blocks until the next event, or returns `None` once the worker is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv().ok()
    }
}

async fn handle_command(
    generator: &dyn Generator,
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            request_id,
            request,
        } => {
            let result = generator.generate(request_id, &request).await;
            let _ = event_tx.send(EngineEvent::BatchCompleted { request_id, result });
        }
    }
}
