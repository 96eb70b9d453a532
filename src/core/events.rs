use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// DomainEventType defines type of event for domain changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Updated,
}

// DomainEvent abstracts domain event for data changes
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    pub created_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn updated<T: Serialize>(name: &str, group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, group, key, DomainEventType::Updated, metadata, json))
    }

    fn build(name: &str, group: &str, key: &str, kind: DomainEventType, metadata: &HashMap<String, String>, json: String) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: metadata.clone(),
            json_data: json,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};

    #[tokio::test]
    async fn test_should_build_updated() {
        let data = HashMap::from([("book_id", "3"), ("is_favorite", "true")]);
        let event = DomainEvent::updated("favorites", "catalog", "3", &HashMap::from([("store".to_string(), "test".to_string())]), &data).expect("build event");
        assert_eq!("favorites", event.name.as_str());
        assert_eq!("3", event.key.as_str());
        assert_eq!(DomainEventType::Updated, event.kind);
        assert!(event.json_data.contains("is_favorite"));
    }

    #[tokio::test]
    async fn test_should_build_unique_ids() {
        let first = DomainEvent::updated("n", "g", "k", &HashMap::new(), &1).expect("build event");
        let second = DomainEvent::updated("n", "g", "k", &HashMap::new(), &1).expect("build event");
        assert_ne!(first.event_id, second.event_id);
        assert!(second.created_at >= first.created_at);
    }
}
