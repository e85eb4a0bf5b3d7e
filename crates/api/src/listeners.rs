use codeious_site_core::events::{ContentEvent, EventBus};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// Log every content change published on the bus until it closes.
pub fn spawn_content_logger(bus: &EventBus) -> JoinHandle<()> {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => log_event(&event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "content logger lagged behind the event bus");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

fn log_event(event: &ContentEvent) {
    match event {
        ContentEvent::DocumentCreated(e) => match &e.section_id {
            Some(section) => tracing::info!(
                collection = %e.collection,
                id = %e.document_id,
                "created new content for section {section}"
            ),
            None => tracing::info!(collection = %e.collection, id = %e.document_id, "document created"),
        },
        ContentEvent::DocumentUpdated(e) => {
            tracing::info!(collection = %e.collection, id = %e.document_id, "document updated");
        }
        ContentEvent::DocumentDeleted(e) => {
            tracing::info!(collection = %e.collection, id = %e.document_id, "document deleted");
        }
        ContentEvent::ContactReceived { id, .. } => {
            tracing::info!(%id, "contact message received");
        }
    }
}
