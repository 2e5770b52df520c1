/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
pub mod resolver;

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::common::types::*;
use crate::storage::store::LocationStore;
use crate::tools::error::AppError;

/// Authoritative current-state store for drivers.
///
/// All mutations go through here. The storage handle is injected at
/// construction and shared with [`HistoryLog`], so a position write and its
/// audit append commit as one storage transaction.
pub struct Registry {
    store: Arc<LocationStore>,
}

impl Registry {
    pub fn new(store: Arc<LocationStore>) -> Registry {
        Registry { store }
    }

    /// Creates the driver on its first report, overwrites the position on
    /// every later one. Exactly one history entry is appended per successful
    /// call; on a storage failure neither write is visible.
    ///
    /// The request layer validates ids before calling in; the empty-id check
    /// here is kept so a misbehaving caller cannot create an unkeyable row.
    pub async fn upsert(
        &self,
        driver_id: &DriverId,
        position: Point,
    ) -> Result<UpsertOutcome, AppError> {
        if driver_id.inner().is_empty() {
            return Err(AppError::InvalidRequest(
                "Driver id cannot be empty".to_string(),
            ));
        }

        let write = self
            .store
            .upsert_with_history(driver_id, position, TimeStamp(Utc::now()))
            .await?;

        let outcome = if write.replaced {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Created
        };
        info!(
            tag = "[Registry Upsert]",
            driver_id = %driver_id.inner(),
            sequence_id = write.sequence_id.0,
            outcome = %outcome
        );

        Ok(outcome)
    }

    /// Removes the driver and its whole history trail. An unknown id is a
    /// typed `DriverNotFound`, distinguishable from a storage failure.
    pub async fn remove(&self, driver_id: &DriverId) -> Result<RemovalOutcome, AppError> {
        if self.store.delete_with_history(driver_id).await? {
            info!(tag = "[Registry Remove]", driver_id = %driver_id.inner());
            Ok(RemovalOutcome::Deleted)
        } else {
            Err(AppError::DriverNotFound(driver_id.inner().to_string()))
        }
    }

    /// Every currently tracked driver, ordered by id. The imposed order is
    /// what keeps nearest-neighbor tie-breaks stable across calls.
    pub async fn snapshot(&self) -> Result<Vec<Driver>, AppError> {
        Ok(self.store.scan_drivers().await?)
    }
}

/// Read side of the append-only audit trail.
///
/// Appends happen only inside [`Registry::upsert`]'s storage transaction;
/// there is no independently invocable write path.
pub struct HistoryLog {
    store: Arc<LocationStore>,
}

impl HistoryLog {
    pub fn new(store: Arc<LocationStore>) -> HistoryLog {
        HistoryLog { store }
    }

    /// Entries for one driver in write order. Empty for unknown ids and for
    /// drivers whose trail was cascade-deleted.
    pub async fn entries_for(&self, driver_id: &DriverId) -> Result<Vec<HistoryEntry>, AppError> {
        Ok(self.store.history_for(driver_id).await?)
    }
}
