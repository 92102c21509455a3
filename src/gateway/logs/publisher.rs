use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher hands domain events to the tracing subscriber, there is no other consumer
// for them in a console session.
#[derive(Debug)]
pub struct LogPublisher {
    topic: String,
}

impl LogPublisher {
    pub(crate) fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
        }
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let payload = serde_json::to_string(event)?;
        info!(target: "events", topic = self.topic.as_str(), event_id = event.event_id.as_str(),
            name = event.name.as_str(), key = event.key.as_str(), "{}", payload);
        Ok(())
    }
}
