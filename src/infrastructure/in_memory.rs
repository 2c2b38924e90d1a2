use crate::domain::order::OrderRecord;
use crate::domain::ports::OrderStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory order log.
///
/// Uses `Arc<RwLock<Vec<OrderRecord>>>` so clones share the same log.
/// Useful for tests and for dry runs where nothing should touch disk.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    records: Arc<RwLock<Vec<OrderRecord>>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, oldest first.
    pub async fn records(&self) -> Vec<OrderRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn append(&self, record: &OrderRecord) -> Result<()> {
        self.records.write().await.push(record.clone());
        Ok(())
    }
}
