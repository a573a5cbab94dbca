use futures_util::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::models::container::ContainerChangeEvent;
use crate::models::translate::parse_event;
use crate::repositories::event_source::EventSource;

pub struct EventWatcher<S: EventSource> {
    pub source: S,
}

impl<S: EventSource> EventWatcher<S> {
    pub fn new(source: S) -> EventWatcher<S> {
        Self { source }
    }

    /// Translates engine events into change events and forwards them until the
    /// stream ends or the receiver is dropped.
    pub async fn run(&self, tx: mpsc::Sender<ContainerChangeEvent>) {
        let mut stream = self.source.events();

        while let Some(message) = stream.next().await {
            let event = match message {
                Ok(event) => event,
                Err(err) => {
                    warn!(error = %err, "Failed to read container event");
                    continue;
                }
            };

            let Some(change) = parse_event(event) else {
                continue;
            };

            debug!(
                docker_id = %change.docker_id,
                status = %change.status,
                "Translated container event"
            );
            if tx.send(change).await.is_err() {
                info!("Change event receiver closed, stopping watcher");
                return;
            }
        }

        info!("Container event stream ended");
    }
}
