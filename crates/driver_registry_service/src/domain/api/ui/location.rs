/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use actix_web::{
    delete, post,
    web::{Data, Json, Path},
};

use crate::{
    common::types::DriverId,
    domain::{action::ui::location, types::ui::location::*},
    environment::AppState,
    tools::error::AppError,
};

#[post("/ui/driver/location")]
pub async fn update_driver_location(
    data: Data<AppState>,
    param_obj: Json<UpdateDriverPositionRequest>,
) -> Result<Json<ResponseData>, AppError> {
    let request_body = param_obj.into_inner();

    Ok(Json(
        location::update_driver_location(data, request_body).await?,
    ))
}

#[delete("/ui/driver/location/{driverId}")]
pub async fn stop_driver_tracking(
    data: Data<AppState>,
    path: Path<String>,
) -> Result<Json<ResponseData>, AppError> {
    let driver_id = DriverId(path.into_inner());

    Ok(Json(
        location::stop_driver_tracking(data, driver_id).await?,
    ))
}
