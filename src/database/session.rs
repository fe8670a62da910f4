use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::services::transaction::TransactionManager;

type Slot = Option<Transaction<'static, Postgres>>;

/// Per-request unit of work.
///
/// The transaction is opened on first use, so requests rejected before
/// touching storage never check out a connection. Dropping the session
/// without committing rolls the transaction back.
#[derive(Clone)]
pub struct PgSession {
    pool: PgPool,
    transaction: Arc<Mutex<Slot>>,
}

impl PgSession {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            transaction: Arc::new(Mutex::new(None)),
        }
    }

    pub(crate) async fn lock(&self) -> Result<MutexGuard<'_, Slot>> {
        let mut guard = self.transaction.lock().await;
        if guard.is_none() {
            *guard = Some(self.pool.begin().await?);
        }
        Ok(guard)
    }

    pub async fn commit(&self) -> Result<()> {
        let transaction = self.transaction.lock().await.take();
        if let Some(transaction) = transaction {
            transaction.commit().await?;
        }
        Ok(())
    }

    pub async fn rollback(&self) -> Result<()> {
        let transaction = self.transaction.lock().await.take();
        if let Some(transaction) = transaction {
            transaction.rollback().await?;
        }
        Ok(())
    }
}

pub(crate) fn connection(slot: &mut Slot) -> Result<&mut PgConnection> {
    slot.as_deref_mut()
        .ok_or_else(|| Error::Internal("Transaction is not open".to_string()))
}

#[derive(Clone)]
pub struct PgTransactionManager {
    session: PgSession,
}

impl PgTransactionManager {
    pub fn new(session: PgSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl TransactionManager for PgTransactionManager {
    async fn commit(&self) -> Result<()> {
        self.session.commit().await
    }

    // statements run eagerly inside the transaction
    async fn flush(&self) -> Result<()> {
        Ok(())
    }

    async fn rollback(&self) -> Result<()> {
        self.session.rollback().await
    }
}
