/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use actix_web::web::Data;
use tracing::info;

use crate::{
    common::types::*,
    domain::types::internal::location::*,
    environment::AppState,
    registry::resolver::{find_nearest, NearestDriver},
    tools::{error::AppError, prometheus::NEAREST_QUERIES},
};

/// Resolves the query point against a consistent, id-ordered snapshot of the
/// registry. An empty registry answers with `driver: null`.
pub async fn get_nearest_driver(
    data: Data<AppState>,
    NearestDriverRequest { position }: NearestDriverRequest,
) -> Result<NearestDriverResponse, AppError> {
    let snapshot = data.registry.snapshot().await?;
    NEAREST_QUERIES.inc();

    let nearest = find_nearest(&position, &snapshot);
    if nearest.is_none() {
        info!(
            tag = "[No Drivers Tracked]",
            "Nearest-driver query served on an empty registry"
        );
    }

    Ok(NearestDriverResponse {
        driver: nearest.map(|NearestDriver { driver, distance }| DriverWithDistance {
            driver_id: driver.driver_id,
            position: driver.position,
            distance,
        }),
    })
}

pub async fn get_driver_history(
    data: Data<AppState>,
    driver_id: DriverId,
) -> Result<DriverHistoryResponse, AppError> {
    let entries = data.history_log.entries_for(&driver_id).await?;

    Ok(DriverHistoryResponse {
        driver_id,
        entries: entries
            .into_iter()
            .map(|entry| HistoryEntryView {
                sequence_id: entry.sequence_id,
                position: entry.position,
                recorded_at: entry.recorded_at,
            })
            .collect(),
    })
}
