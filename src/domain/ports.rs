use super::order::OrderRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Destination for accepted orders.
///
/// Implementations only ever add records; nothing is updated or removed.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn append(&self, record: &OrderRecord) -> Result<()>;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
