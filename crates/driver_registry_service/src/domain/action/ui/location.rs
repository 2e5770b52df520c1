/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use actix_web::web::Data;

use crate::{
    common::types::*,
    domain::types::ui::location::*,
    environment::AppState,
    tools::{error::AppError, prometheus::POSITION_UPDATES},
};

/// Boundary validation happens here; the registry re-checks the id as
/// defense in depth.
pub async fn update_driver_location(
    data: Data<AppState>,
    UpdateDriverPositionRequest {
        driver_id,
        position,
    }: UpdateDriverPositionRequest,
) -> Result<ResponseData, AppError> {
    if driver_id.inner().is_empty() {
        return Err(AppError::InvalidRequest(
            "Driver id cannot be empty".to_string(),
        ));
    }

    let outcome = data.registry.upsert(&driver_id, position).await?;
    POSITION_UPDATES.inc();

    Ok(ResponseData {
        result: outcome.to_string(),
    })
}

pub async fn stop_driver_tracking(
    data: Data<AppState>,
    driver_id: DriverId,
) -> Result<ResponseData, AppError> {
    if driver_id.inner().is_empty() {
        return Err(AppError::InvalidRequest(
            "Driver id cannot be empty".to_string(),
        ));
    }

    let outcome = data.registry.remove(&driver_id).await?;

    Ok(ResponseData {
        result: outcome.to_string(),
    })
}
