use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines what happened to a catalog entry
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Borrowed,
    Returned,
}

impl DomainEventType {
    pub fn event_name(&self) -> &'static str {
        match self {
            DomainEventType::Added => "book_added",
            DomainEventType::Borrowed => "book_borrowed",
            DomainEventType::Returned => "book_returned",
        }
    }
}

// DomainEvent records a single change of the catalog
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(DomainEventType::Added, group, key, metadata, data)
    }

    pub fn borrowed<T: Serialize>(group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(DomainEventType::Borrowed, group, key, metadata, data)
    }

    pub fn returned<T: Serialize>(group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(DomainEventType::Returned, group, key, metadata, data)
    }

    fn build<T: Serialize>(kind: DomainEventType, group: &str, key: &str,
                           metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: kind.event_name().to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: metadata.clone(),
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}
