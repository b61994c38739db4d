use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::catalog;
use crate::error::PmError;
use crate::models::PmTask;

use super::{connection, storage_repo};

/// The last value this store itself wrote under its key, so its own
/// subscribers can tell local writes from external ones.
#[derive(Debug, Clone, PartialEq, Eq)]
enum OwnWrite {
    Nothing,
    Set(String),
    Removed,
}

impl OwnWrite {
    fn matches(&self, value: &Option<String>) -> bool {
        match (self, value) {
            (OwnWrite::Set(own), Some(v)) => own == v,
            (OwnWrite::Removed, None) => true,
            _ => false,
        }
    }
}

/// Repository over the PM task list persisted under a single storage key.
pub struct TaskStore {
    conn: Connection,
    path: PathBuf,
    key: String,
    own_write: Arc<Mutex<OwnWrite>>,
}

impl TaskStore {
    pub fn open(db_path: &Path, key: &str) -> Result<Self, PmError> {
        let conn = connection::open_db(db_path)?;
        Ok(TaskStore {
            conn,
            path: db_path.to_path_buf(),
            key: key.to_string(),
            own_write: Arc::new(Mutex::new(OwnWrite::Nothing)),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current task list. Falls back to the bundled seed when nothing is
    /// stored or the stored value cannot be read.
    pub fn load(&self) -> Vec<PmTask> {
        match storage_repo::get_item(&self.conn, &self.key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!(key = %self.key, error = %e, "stored task list unreadable, using seed");
                    catalog::seed_tasks()
                }
            },
            Ok(None) => {
                debug!(key = %self.key, "no stored task list, using seed");
                catalog::seed_tasks()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "task list read failed, using seed");
                catalog::seed_tasks()
            }
        }
    }

    pub fn try_save(&self, tasks: &[PmTask]) -> Result<(), PmError> {
        let raw = serde_json::to_string(tasks)?;
        self.record_own_write(OwnWrite::Set(raw.clone()));
        storage_repo::set_item(&self.conn, &self.key, &raw)?;
        debug!(key = %self.key, count = tasks.len(), "task list saved");
        Ok(())
    }

    /// Best-effort write: failures are logged and dropped.
    pub fn save(&self, tasks: &[PmTask]) {
        if let Err(e) = self.try_save(tasks) {
            warn!(key = %self.key, error = %e, "task list save failed");
        }
    }

    /// Remove the stored list; the next `load` serves the seed again.
    pub fn clear(&self) -> Result<bool, PmError> {
        self.record_own_write(OwnWrite::Removed);
        let removed = storage_repo::remove_item(&self.conn, &self.key)?;
        info!(key = %self.key, removed, "task list cleared");
        Ok(removed)
    }

    fn record_own_write(&self, write: OwnWrite) {
        let mut guard = self.own_write.lock().unwrap_or_else(|e| e.into_inner());
        *guard = write;
    }

    /// Watch the storage key for writes made by other connections. The
    /// callback receives the new list, or an empty list when the value was
    /// removed or cannot be parsed. Writes through this store are not
    /// reported. Watching stops when the returned `Subscription` is dropped.
    pub fn subscribe<F>(&self, interval: Duration, mut callback: F) -> Result<Subscription, PmError>
    where
        F: FnMut(Vec<PmTask>) + Send + 'static,
    {
        let conn = connection::open_db(&self.path)?;
        let mut version = storage_repo::data_version(&conn)?;
        let mut last_seen = storage_repo::get_item(&conn, &self.key)?;
        let key = self.key.clone();
        let own_write = Arc::clone(&self.own_write);
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("pmtrack-watch".into())
            .spawn(move || loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    _ => break,
                }

                let current = match storage_repo::data_version(&conn) {
                    Ok(v) => v,
                    Err(e) => {
                        warn!(error = %e, "data_version poll failed");
                        continue;
                    }
                };
                if current == version {
                    continue;
                }
                version = current;

                let value = match storage_repo::get_item(&conn, &key) {
                    Ok(v) => v,
                    Err(e) => {
                        warn!(key = %key, error = %e, "watch read failed");
                        continue;
                    }
                };
                if value == last_seen {
                    continue;
                }
                last_seen = value.clone();

                // Each observed change consumes the marker: a later external
                // write of the same value must still be reported.
                let own = {
                    let mut guard = own_write.lock().unwrap_or_else(|e| e.into_inner());
                    std::mem::replace(&mut *guard, OwnWrite::Nothing)
                };
                if own.matches(&value) {
                    continue;
                }

                debug!(key = %key, "external task list change");
                callback(parse_external(&key, value.as_deref()));
            })?;

        Ok(Subscription {
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }
}

fn parse_external(key: &str, value: Option<&str>) -> Vec<PmTask> {
    match value {
        None => Vec::new(),
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!(key = %key, error = %e, "external task list unreadable");
            Vec::new()
        }),
    }
}

/// Handle to a running watch. Dropping it stops the watcher thread.
pub struct Subscription {
    stop: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Subscription {
    /// Consumes the handle; `Drop` stops and joins the watcher thread.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Disconnecting the channel wakes the watcher immediately.
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("watch thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PmStatus;
    use tempfile::TempDir;

    const KEY: &str = "pmScheduleTasks";
    const WAIT: Duration = Duration::from_secs(5);
    const TICK: Duration = Duration::from_millis(10);

    fn setup() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = connection::init_db(dir.path()).unwrap();
        (dir, path)
    }

    fn task(id: &str, status: PmStatus) -> PmTask {
        PmTask {
            ticket_id: id.into(),
            mould_id: "MS-1".into(),
            mould_name: "Blower".into(),
            location: "Bay 2".into(),
            activity: "Clean".into(),
            checksheets: "Mould General PM".into(),
            status,
            assignee: "Asha".into(),
            due_date: "2025-03-08".into(),
            checklist: vec!["a".into(), "b".into()],
        }
    }

    #[test]
    fn test_load_without_value_returns_seed() {
        let (_dir, path) = setup();
        let store = TaskStore::open(&path, KEY).unwrap();
        assert_eq!(store.load(), catalog::seed_tasks());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_dir, path) = setup();
        let store = TaskStore::open(&path, KEY).unwrap();
        let tasks = vec![task("PM-2", PmStatus::Overdue), task("PM-1", PmStatus::Scheduled)];
        store.try_save(&tasks).unwrap();
        assert_eq!(store.load(), tasks);

        let reopened = TaskStore::open(&path, KEY).unwrap();
        assert_eq!(reopened.load(), tasks);
    }

    #[test]
    fn test_saved_empty_list_is_not_replaced_by_seed() {
        let (_dir, path) = setup();
        let store = TaskStore::open(&path, KEY).unwrap();
        store.save(&[]);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_value_falls_back_to_seed() {
        let (_dir, path) = setup();
        let store = TaskStore::open(&path, KEY).unwrap();
        storage_repo::set_item(&store.conn, KEY, "[{broken").unwrap();
        assert_eq!(store.load(), catalog::seed_tasks());
    }

    #[test]
    fn test_clear_restores_seed() {
        let (_dir, path) = setup();
        let store = TaskStore::open(&path, KEY).unwrap();
        store.save(&[task("PM-5", PmStatus::Completed)]);
        assert!(store.clear().unwrap());
        assert_eq!(store.load(), catalog::seed_tasks());
        assert!(!store.clear().unwrap());
    }

    #[test]
    fn test_keys_are_independent() {
        let (_dir, path) = setup();
        let a = TaskStore::open(&path, "a").unwrap();
        let b = TaskStore::open(&path, "b").unwrap();
        a.save(&[task("PM-A", PmStatus::Scheduled)]);
        assert_eq!(b.load(), catalog::seed_tasks());
    }

    #[test]
    fn test_subscriber_sees_external_write_only() {
        let (_dir, path) = setup();
        let local = TaskStore::open(&path, KEY).unwrap();
        let other = TaskStore::open(&path, KEY).unwrap();

        let (tx, rx) = mpsc::channel();
        let sub = local
            .subscribe(TICK, move |tasks| {
                let _ = tx.send(tasks);
            })
            .unwrap();

        local.save(&[task("PM-LOCAL", PmStatus::Scheduled)]);
        thread::sleep(TICK * 5);
        let external = vec![task("PM-EXT", PmStatus::Overdue)];
        other.save(&external);

        let received = rx.recv_timeout(WAIT).unwrap();
        assert_eq!(received, external);
        drop(sub);
    }

    #[test]
    fn test_subscriber_gets_empty_list_on_unparsable_or_removed_value() {
        let (_dir, path) = setup();
        let local = TaskStore::open(&path, KEY).unwrap();
        let other = TaskStore::open(&path, KEY).unwrap();
        other.save(&[task("PM-1", PmStatus::Scheduled)]);

        let (tx, rx) = mpsc::channel();
        let _sub = local
            .subscribe(TICK, move |tasks| {
                let _ = tx.send(tasks);
            })
            .unwrap();

        storage_repo::set_item(&other.conn, KEY, "not json").unwrap();
        assert!(rx.recv_timeout(WAIT).unwrap().is_empty());

        other.save(&[task("PM-2", PmStatus::Scheduled)]);
        assert_eq!(rx.recv_timeout(WAIT).unwrap().len(), 1);

        other.clear().unwrap();
        assert!(rx.recv_timeout(WAIT).unwrap().is_empty());
    }

    #[test]
    fn test_failed_save_is_swallowed() {
        let (_dir, path) = setup();
        let store = TaskStore::open(&path, KEY).unwrap();
        let kept = vec![task("PM-KEEP", PmStatus::Scheduled)];
        store.save(&kept);

        store.conn.execute_batch("PRAGMA query_only = ON").unwrap();
        let err = store.try_save(&[task("PM-LOST", PmStatus::Overdue)]).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::StorageError);
        store.save(&[task("PM-LOST", PmStatus::Overdue)]);
        assert_eq!(store.load(), kept);

        store.conn.execute_batch("PRAGMA query_only = OFF").unwrap();
        let next = vec![task("PM-NEXT", PmStatus::Completed)];
        store.save(&next);
        assert_eq!(store.load(), next);
    }

    #[test]
    fn test_external_write_equal_to_earlier_local_write_is_reported() {
        let (_dir, path) = setup();
        let local = TaskStore::open(&path, KEY).unwrap();
        let other = TaskStore::open(&path, KEY).unwrap();

        let (tx, rx) = mpsc::channel();
        let _sub = local
            .subscribe(TICK, move |tasks| {
                let _ = tx.send(tasks);
            })
            .unwrap();

        let x = vec![task("PM-X", PmStatus::Scheduled)];
        local.save(&x);
        thread::sleep(TICK * 5);
        other.save(&[task("PM-Y", PmStatus::Scheduled)]);
        assert_eq!(rx.recv_timeout(WAIT).unwrap()[0].ticket_id, "PM-Y");

        other.save(&x);
        assert_eq!(rx.recv_timeout(WAIT).unwrap(), x);
    }

    #[test]
    fn test_external_removal_after_local_clear_is_reported() {
        let (_dir, path) = setup();
        let local = TaskStore::open(&path, KEY).unwrap();
        let other = TaskStore::open(&path, KEY).unwrap();
        other.save(&[task("PM-1", PmStatus::Scheduled)]);

        let (tx, rx) = mpsc::channel();
        let _sub = local
            .subscribe(TICK, move |tasks| {
                let _ = tx.send(tasks);
            })
            .unwrap();

        local.clear().unwrap();
        thread::sleep(TICK * 5);
        other.save(&[task("PM-2", PmStatus::Scheduled)]);
        assert_eq!(rx.recv_timeout(WAIT).unwrap()[0].ticket_id, "PM-2");

        other.clear().unwrap();
        assert!(rx.recv_timeout(WAIT).unwrap().is_empty());
    }

    #[test]
    fn test_dropped_subscription_stops_delivering() {
        let (_dir, path) = setup();
        let local = TaskStore::open(&path, KEY).unwrap();
        let other = TaskStore::open(&path, KEY).unwrap();

        let (tx, rx) = mpsc::channel();
        let sub = local
            .subscribe(TICK, move |tasks| {
                let _ = tx.send(tasks);
            })
            .unwrap();
        sub.unsubscribe();

        other.save(&[task("PM-LATE", PmStatus::Scheduled)]);
        // The callback (and its sender) went away with the thread.
        assert!(matches!(
            rx.recv_timeout(TICK * 20),
            Err(RecvTimeoutError::Disconnected)
        ));
    }
}
