use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use jobwatch_core::QueryKey;
use jobwatch_logging::{jw_debug, jw_error, jw_info};

use crate::{ApiClient, ClientSettings, DataSource, EngineEvent, NetworkError};

enum RunnerCommand {
    Fetch { key: QueryKey, seq: u64 },
}

type Notify = Arc<dyn Fn() + Send + Sync>;

/// Executes fetches on a tokio runtime owned by a background thread.
///
/// Every fetch runs as its own task, so overlapping requests for different
/// queries never wait on each other. Results are queued as
/// [`EngineEvent`]s for the UI thread to drain. Dropping the runner stops
/// the runtime; requests still in flight are abandoned.
///
/// Every fetch reports exactly one event. Panics in the source and a
/// runtime that never started come back as `Err(NetworkError)`.
pub struct QueryRunner {
    cmd_tx: mpsc::Sender<RunnerCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl QueryRunner {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self::with_notifier(source, || {})
    }

    /// Like [`QueryRunner::new`]; `notify` runs after each queued event so
    /// a UI can wake up and drain it.
    pub fn with_notifier(source: Arc<dyn DataSource>, notify: impl Fn() + Send + Sync + 'static) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let notify: Notify = Arc::new(notify);

        let worker_tx = event_tx.clone();
        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    jw_error!("Failed to start fetch runtime: {}", err);
                    let message = format!("fetch runtime unavailable: {err}");
                    while let Ok(command) = cmd_rx.recv() {
                        report_failure(&worker_tx, &notify, command, &message);
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = worker_tx.clone();
                let notify = notify.clone();
                runtime.spawn(async move {
                    handle_command(source, command, event_tx, notify).await;
                });
            }
            jw_info!("Fetch runtime shutting down");
        });

        Self {
            cmd_tx,
            event_tx,
            event_rx,
        }
    }

    /// Runner backed by the HTTP API client.
    pub fn with_api(
        settings: ClientSettings,
        notify: impl Fn() + Send + Sync + 'static,
    ) -> Result<Self, NetworkError> {
        let client = ApiClient::new(settings)?;
        Ok(Self::with_notifier(Arc::new(client), notify))
    }

    pub fn fetch(&self, key: QueryKey, seq: u64) {
        if let Err(mpsc::SendError(RunnerCommand::Fetch { key, seq })) =
            self.cmd_tx.send(RunnerCommand::Fetch { key, seq })
        {
            jw_error!("Fetch worker stopped; dropping key={} seq={}", key, seq);
            let _ = self.event_tx.send(EngineEvent::QueryCompleted {
                key,
                seq,
                result: Err(NetworkError::new("fetch worker stopped")),
            });
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    source: Arc<dyn DataSource>,
    command: RunnerCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    notify: Notify,
) {
    match command {
        RunnerCommand::Fetch { key, seq } => {
            jw_debug!("Fetch start key={} seq={}", key, seq);
            let task = tokio::spawn(async move { source.fetch(key).await });
            let result = match task.await {
                Ok(result) => result,
                Err(err) => {
                    jw_error!("Fetch task for {} ended abnormally: {}", key, err);
                    Err(NetworkError::new(format!("fetch task failed: {err}")))
                }
            };
            if let Err(err) = &result {
                jw_debug!("Fetch failed key={} seq={}: {}", key, seq, err);
            }
            if event_tx
                .send(EngineEvent::QueryCompleted { key, seq, result })
                .is_ok()
            {
                notify();
            }
        }
    }
}

fn report_failure(
    event_tx: &mpsc::Sender<EngineEvent>,
    notify: &Notify,
    command: RunnerCommand,
    message: &str,
) {
    match command {
        RunnerCommand::Fetch { key, seq } => {
            let result = Err(NetworkError::new(message));
            if event_tx
                .send(EngineEvent::QueryCompleted { key, seq, result })
                .is_ok()
            {
                notify();
            }
        }
    }
}
