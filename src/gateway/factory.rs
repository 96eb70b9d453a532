use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::LogsPublisher;

pub fn create_publisher() -> Box<dyn EventPublisher> {
    Box::new(LogsPublisher::new())
}
