//! Connection acquisition and scoped transactions.
//!
//! Every transactional write runs through [`with_transaction`], which owns the
//! begin/commit/rollback sequence. The connection belongs to the open
//! [`UnitOfWork`], so it goes back to its source on every exit path,
//! including early returns and cancelled futures (sqlx rolls back on drop).

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::error::StorageError;

/// An open transaction holding one checked-out connection.
#[async_trait]
pub trait UnitOfWork: Send + Sized {
    /// Connection type statements run against.
    type Conn: Send + ?Sized;

    fn connection(&mut self) -> &mut Self::Conn;

    async fn commit(self) -> Result<(), StorageError>;

    async fn rollback(self) -> Result<(), StorageError>;
}

#[async_trait]
impl UnitOfWork for Transaction<'static, Postgres> {
    type Conn = PgConnection;

    fn connection(&mut self) -> &mut PgConnection {
        &mut **self
    }

    async fn commit(self) -> Result<(), StorageError> {
        Ok(Transaction::commit(self).await?)
    }

    async fn rollback(self) -> Result<(), StorageError> {
        Ok(Transaction::rollback(self).await?)
    }
}

/// Source of transactions, one pooled connection each.
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    type Tx: UnitOfWork;

    /// Check out a connection and open a transaction on it.
    async fn begin(&self) -> Result<Self::Tx, StorageError>;
}

#[async_trait]
impl ConnectionSource for PgPool {
    type Tx = Transaction<'static, Postgres>;

    async fn begin(&self) -> Result<Self::Tx, StorageError> {
        Ok(sqlx::Pool::begin(self).await?)
    }
}

/// Run `work` inside one transaction on one connection.
///
/// Commits when `work` succeeds. On failure the transaction is rolled back
/// and the original error is returned; a failed rollback is only logged
/// because the connection is discarded by sqlx in that case anyway.
///
/// ```ignore
/// let id = with_transaction(&pool, |conn: &mut PgConnection| Box::pin(async move {
///     let id: i32 = sqlx::query_scalar("INSERT ... RETURNING id").fetch_one(&mut *conn).await?;
///     Ok(id)
/// }))
/// .await?;
/// ```
pub async fn with_transaction<S, C, T, F>(source: &S, work: F) -> Result<T, StorageError>
where
    S: ConnectionSource + ?Sized,
    S::Tx: UnitOfWork<Conn = C>,
    C: Send + ?Sized,
    T: Send,
    F: for<'c> FnOnce(&'c mut C) -> BoxFuture<'c, Result<T, StorageError>> + Send,
{
    let mut tx = source.begin().await?;
    let outcome = work(tx.connection()).await;
    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        },
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "transaction rollback failed");
            }
            tracing::debug!(error = %err, "transaction rolled back");
            Err(err)
        },
    }
}
