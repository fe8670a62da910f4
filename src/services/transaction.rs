use async_trait::async_trait;

use crate::error::Result;

/// Unit of work shared by the gateways of one request.
///
/// Work that is never committed is discarded when the unit of work is dropped.
#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn commit(&self) -> Result<()>;

    async fn flush(&self) -> Result<()>;

    async fn rollback(&self) -> Result<()>;
}
