/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use serde::{Deserialize, Serialize};

use crate::common::types::*;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NearestDriverRequest {
    pub position: Point,
}

/// `driver` is null when the registry tracks nobody; that is a successful,
/// driver-less response rather than an error.
#[derive(Serialize, Deserialize, Debug)]
pub struct NearestDriverResponse {
    pub driver: Option<DriverWithDistance>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DriverWithDistance {
    pub driver_id: DriverId,
    pub position: Point,
    pub distance: Distance,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DriverHistoryResponse {
    pub driver_id: DriverId,
    pub entries: Vec<HistoryEntryView>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryView {
    pub sequence_id: SequenceId,
    pub position: Point,
    pub recorded_at: TimeStamp,
}
