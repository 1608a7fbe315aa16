use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use shelf_logging::{shelf_debug, shelf_info};

use crate::catalog::{CatalogClient, CatalogSettings, ReqwestCatalogClient};
use crate::{CatalogError, CatalogEvent, RequestId};

enum EngineCommand {
    Query {
        request_id: RequestId,
        term: String,
        max_results: u32,
    },
}

/// Runs catalog queries on a background tokio runtime.
///
/// Every enqueued query produces exactly one `CatalogEvent::QueryCompleted`.
/// Queries run concurrently, so completions may arrive in any order; callers
/// match them up by request id.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<CatalogEvent>,
}

impl EngineHandle {
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        let client = ReqwestCatalogClient::new(settings)?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn CatalogClient>) -> Result<Self, CatalogError> {
        let runtime = tokio::runtime::Runtime::new().map_err(|err| {
            CatalogError::new(crate::FailureKind::Network, format!("tokio runtime: {err}"))
        })?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
            shelf_info!("Catalog engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, request_id: RequestId, term: impl Into<String>, max_results: u32) {
        let _ = self.cmd_tx.send(EngineCommand::Query {
            request_id,
            term: term.into(),
            max_results,
        });
    }

    pub fn try_recv(&self) -> Option<CatalogEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<CatalogEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn CatalogClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<CatalogEvent>,
) {
    match command {
        EngineCommand::Query {
            request_id,
            term,
            max_results,
        } => {
            let result = client.query(&term, max_results).await;
            shelf_debug!(
                "Catalog request_id={} finished ok={}",
                request_id,
                result.is_ok()
            );
            let _ = event_tx.send(CatalogEvent::QueryCompleted {
                request_id,
                term,
                result,
            });
        }
    }
}
