use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity after all existing ones, fails if the id is taken
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity in place, the stored version must match
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // all entities in insertion order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;

    async fn count(&self) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    Memory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia  {
        match self {
            RepositoryStore::Memory => {GatewayPublisherVia::Logs},
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_publish_memory_store_via_logs() {
        assert_eq!(GatewayPublisherVia::Logs, RepositoryStore::Memory.gateway_publisher());
    }
}
