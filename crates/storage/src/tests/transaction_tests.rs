//! `with_transaction` against a one-connection source whose transactions
//! journal staged rows and only publish them on commit.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::{ConnectionSource, StorageError, UnitOfWork, with_transaction};

#[derive(Default)]
struct Ledger {
    committed: Mutex<Vec<i32>>,
    commits: AtomicUsize,
    rollbacks: AtomicUsize,
}

/// Single-connection source: `begin` fails while a transaction is open.
struct OneConnection {
    permits: Arc<Semaphore>,
    ledger: Arc<Ledger>,
}

impl OneConnection {
    fn new() -> Self {
        Self { permits: Arc::new(Semaphore::new(1)), ledger: Arc::default() }
    }

    fn idle(&self) -> bool {
        self.permits.available_permits() == 1
    }
}

struct JournalTx {
    _permit: OwnedSemaphorePermit,
    staged: Vec<i32>,
    ledger: Arc<Ledger>,
}

#[async_trait]
impl UnitOfWork for JournalTx {
    type Conn = Vec<i32>;

    fn connection(&mut self) -> &mut Vec<i32> {
        &mut self.staged
    }

    async fn commit(self) -> Result<(), StorageError> {
        self.ledger.committed.lock().unwrap().extend(&self.staged);
        self.ledger.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(self) -> Result<(), StorageError> {
        self.ledger.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl ConnectionSource for OneConnection {
    type Tx = JournalTx;

    async fn begin(&self) -> Result<JournalTx, StorageError> {
        let permit = Arc::clone(&self.permits)
            .try_acquire_owned()
            .map_err(|_| StorageError::Database(sqlx::Error::PoolTimedOut))?;
        Ok(JournalTx { _permit: permit, staged: Vec::new(), ledger: Arc::clone(&self.ledger) })
    }
}

async fn failing_write(source: &OneConnection, row: i32) -> Result<i32, StorageError> {
    with_transaction(source, move |rows: &mut Vec<i32>| {
        Box::pin(async move {
            rows.push(row);
            Err(StorageError::ForeignKey(format!("category {row} does not exist")))
        })
    })
    .await
}

#[tokio::test]
async fn failed_work_rolls_back_and_releases_connection() {
    let source = OneConnection::new();

    for row in 0..30 {
        let err = failing_write(&source, row).await.unwrap_err();
        assert!(err.is_foreign_key());
        assert!(source.idle(), "connection still held after failure {row}");
    }

    let id = with_transaction(&source, |rows: &mut Vec<i32>| {
        Box::pin(async move {
            rows.push(100);
            rows.push(101);
            Ok(100)
        })
    })
    .await
    .unwrap();

    assert_eq!(id, 100);
    assert_eq!(*source.ledger.committed.lock().unwrap(), vec![100, 101]);
    assert_eq!(source.ledger.commits.load(Ordering::SeqCst), 1);
    assert_eq!(source.ledger.rollbacks.load(Ordering::SeqCst), 30);
    assert!(source.idle());
}

#[tokio::test]
async fn cancelled_work_releases_connection_without_commit() {
    let source = OneConnection::new();

    let pending = with_transaction(&source, |rows: &mut Vec<i32>| {
        Box::pin(async move {
            rows.push(1);
            std::future::pending::<()>().await;
            Ok(())
        })
    });
    assert!(tokio::time::timeout(Duration::from_millis(20), pending).await.is_err());

    assert!(source.idle());
    assert!(source.ledger.committed.lock().unwrap().is_empty());
    assert_eq!(source.ledger.commits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn begin_fails_while_connection_is_checked_out() {
    let source = OneConnection::new();
    let held = source.begin().await.unwrap();

    let err = failing_write(&source, 5).await.unwrap_err();
    assert!(matches!(err, StorageError::Database(sqlx::Error::PoolTimedOut)));
    assert_eq!(source.ledger.rollbacks.load(Ordering::SeqCst), 0);

    drop(held);
    assert!(source.idle());
}
