use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

// RecordingPublisher keeps published events for assertions; clones share the log.
// A failing recorder rejects every event without recording it.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
    failing: bool,
}

impl RecordingPublisher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self { failing: true, ..Self::default() }
    }

    pub(crate) fn events(&self) -> LibraryResult<Vec<DomainEvent>> {
        Ok(self.events.lock()?.clone())
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        if self.failing {
            return Err(LibraryError::unexpected(
                format!("cannot publish event {}", event.event_id).as_str(), Some("503".to_string())));
        }
        self.events.lock()?.push(event.clone());
        Ok(())
    }
}
