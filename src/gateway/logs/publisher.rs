use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogsPublisher writes domain events to the tracing log and retains nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct LogsPublisher;

impl LogsPublisher {
    pub fn new() -> Self {
        LogsPublisher
    }
}

#[async_trait]
impl EventPublisher for LogsPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        tracing::info!(
            event_id = %event.event_id,
            name = %event.name,
            group = %event.group,
            key = %event.key,
            kind = ?event.kind,
            data = %event.json_data,
            "domain event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogsPublisher;

    #[tokio::test]
    async fn test_should_publish_events() {
        let publisher = LogsPublisher::new();
        let event = DomainEvent::updated("favorites", "catalog", "1", &HashMap::new(), &true).expect("build event");
        publisher.publish(&event).await.expect("should publish");
    }

    #[tokio::test]
    async fn test_should_not_retain_events() {
        let publisher = LogsPublisher::new();
        for i in 0..10_000 {
            let event = DomainEvent::updated("favorites", "catalog", "1", &HashMap::new(), &(i % 2 == 0)).expect("build event");
            publisher.publish(&event).await.expect("should publish");
        }
        assert_eq!(0, std::mem::size_of::<LogsPublisher>());
    }
}
