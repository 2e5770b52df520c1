/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use std::sync::atomic::{AtomicBool, Ordering};

use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::common::types::*;
use crate::storage::error::StorageError;

#[derive(Default)]
struct Tables {
    drivers: FxHashMap<DriverId, Point>,
    history: FxHashMap<DriverId, Vec<HistoryEntry>>,
    next_sequence_id: u64,
}

/// In-process key-value-with-history store behind a single reader-writer
/// lock.
///
/// Every mutation holds the write guard for the whole driver-write plus
/// history-append unit, so a concurrent reader observes either all of a
/// mutation or none of it. The lock is never held across an await point.
///
/// The handle has an explicit lifecycle: `open` at startup, `close` at
/// shutdown. Operations against a closed handle fail with
/// [`StorageError::Closed`].
pub struct LocationStore {
    tables: RwLock<Tables>,
    open: AtomicBool,
}

/// Result of a committed driver write.
pub struct DriverWrite {
    pub replaced: bool,
    pub sequence_id: SequenceId,
}

impl LocationStore {
    pub fn open() -> LocationStore {
        LocationStore {
            tables: RwLock::new(Tables::default()),
            open: AtomicBool::new(true),
        }
    }

    /// Marks the handle closed. Operations already holding the lock finish;
    /// later ones fail with [`StorageError::Closed`].
    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    fn guard_open(&self) -> Result<(), StorageError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(StorageError::Closed)
        }
    }

    /// Creates or overwrites the driver row and appends one history entry in
    /// the same write-lock critical section. Nothing in the section can fail,
    /// so the pair commits as a unit.
    pub async fn upsert_with_history(
        &self,
        driver_id: &DriverId,
        position: Point,
        recorded_at: TimeStamp,
    ) -> Result<DriverWrite, StorageError> {
        self.guard_open()?;
        let mut tables = self.tables.write().await;

        let replaced = tables
            .drivers
            .insert(driver_id.to_owned(), position)
            .is_some();

        tables.next_sequence_id += 1;
        let sequence_id = SequenceId(tables.next_sequence_id);
        tables
            .history
            .entry(driver_id.to_owned())
            .or_default()
            .push(HistoryEntry {
                sequence_id,
                driver_id: driver_id.to_owned(),
                position,
                recorded_at,
            });

        Ok(DriverWrite {
            replaced,
            sequence_id,
        })
    }

    /// Deletes the driver row and its whole history trail as one unit.
    /// Returns false when no such driver exists; nothing is touched then.
    pub async fn delete_with_history(&self, driver_id: &DriverId) -> Result<bool, StorageError> {
        self.guard_open()?;
        let mut tables = self.tables.write().await;

        if tables.drivers.remove(driver_id).is_none() {
            return Ok(false);
        }
        tables.history.remove(driver_id);

        Ok(true)
    }

    /// Consistent full scan of current driver rows, ordered by driver id so
    /// that every caller walks candidates in the same order.
    pub async fn scan_drivers(&self) -> Result<Vec<Driver>, StorageError> {
        self.guard_open()?;
        let tables = self.tables.read().await;

        let mut drivers = tables
            .drivers
            .iter()
            .map(|(driver_id, position)| Driver {
                driver_id: driver_id.to_owned(),
                position: *position,
            })
            .collect::<Vec<Driver>>();
        drivers.sort_by(|a, b| a.driver_id.cmp(&b.driver_id));

        Ok(drivers)
    }

    /// History entries for one driver in append order. Ids with no surviving
    /// trail read as empty.
    pub async fn history_for(
        &self,
        driver_id: &DriverId,
    ) -> Result<Vec<HistoryEntry>, StorageError> {
        self.guard_open()?;
        let tables = self.tables.read().await;

        Ok(tables.history.get(driver_id).cloned().unwrap_or_default())
    }

    pub async fn driver_count(&self) -> Result<usize, StorageError> {
        self.guard_open()?;
        let tables = self.tables.read().await;

        Ok(tables.drivers.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn now() -> TimeStamp {
        TimeStamp(Utc::now())
    }

    #[tokio::test]
    async fn sequence_ids_increase_across_drivers() {
        let store = LocationStore::open();

        let first = store
            .upsert_with_history(&DriverId("d1".to_string()), Point::new(0, 0), now())
            .await
            .unwrap();
        let second = store
            .upsert_with_history(&DriverId("d2".to_string()), Point::new(1, 1), now())
            .await
            .unwrap();

        assert!(!first.replaced);
        assert!(second.sequence_id > first.sequence_id);
    }

    #[tokio::test]
    async fn history_keeps_append_order() {
        let store = LocationStore::open();
        let driver_id = DriverId("d1".to_string());

        for i in 0..5i64 {
            store
                .upsert_with_history(&driver_id, Point::new(i, i), now())
                .await
                .unwrap();
        }

        let trail = store.history_for(&driver_id).await.unwrap();
        assert_eq!(trail.len(), 5);
        let positions = trail
            .iter()
            .map(|entry| entry.position)
            .collect::<Vec<Point>>();
        assert_eq!(
            positions,
            (0..5i64).map(|i| Point::new(i, i)).collect::<Vec<Point>>()
        );
        assert!(trail.windows(2).all(|w| w[0].sequence_id < w[1].sequence_id));
    }

    #[tokio::test]
    async fn delete_cascades_and_reports_missing() {
        let store = LocationStore::open();
        let driver_id = DriverId("d1".to_string());

        store
            .upsert_with_history(&driver_id, Point::new(2, 3), now())
            .await
            .unwrap();

        assert!(store.delete_with_history(&driver_id).await.unwrap());
        assert!(store.history_for(&driver_id).await.unwrap().is_empty());
        assert_eq!(store.driver_count().await.unwrap(), 0);
        assert!(!store.delete_with_history(&driver_id).await.unwrap());
    }

    #[tokio::test]
    async fn closed_handle_rejects_operations() {
        let store = LocationStore::open();
        store.close();

        let res = store
            .upsert_with_history(&DriverId("d1".to_string()), Point::new(0, 0), now())
            .await;
        assert!(matches!(res, Err(StorageError::Closed)));
        assert!(matches!(store.scan_drivers().await, Err(StorageError::Closed)));
    }
}
