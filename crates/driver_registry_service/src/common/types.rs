/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Deserialize, Serialize, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct DriverId(pub String);

impl DriverId {
    pub fn inner(&self) -> &str {
        &self.0
    }
}

/// Unit-agnostic signed plane coordinate.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Coordinate(pub i64);

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

/// Auto-assigned per history append, unique and monotonically increasing
/// across all drivers.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct SequenceId(pub u64);

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Hash, Ord)]
pub struct TimeStamp(pub DateTime<Utc>);

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Point {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Point {
        Point {
            x: Coordinate(x),
            y: Coordinate(y),
        }
    }
}

/// Current state of a tracked driver. At most one row per id.
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct Driver {
    pub driver_id: DriverId,
    pub position: Point,
}

/// One row of the append-only audit trail. Never mutated; deleted only when
/// its driver is removed.
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct HistoryEntry {
    pub sequence_id: SequenceId,
    pub driver_id: DriverId,
    pub position: Point,
    pub recorded_at: TimeStamp,
}

#[derive(Debug, Clone, Copy, Display, Eq, PartialEq)]
pub enum UpsertOutcome {
    #[strum(serialize = "Driver created")]
    Created,
    #[strum(serialize = "Driver updated")]
    Updated,
}

#[derive(Debug, Clone, Copy, Display, Eq, PartialEq)]
pub enum RemovalOutcome {
    #[strum(serialize = "Driver deleted")]
    Deleted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_serializes_with_plane_axes() {
        let point = Point::new(3, -7);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json, serde_json::json!({"x": 3, "y": -7}));
    }

    #[test]
    fn outcome_messages_are_stable() {
        assert_eq!(UpsertOutcome::Created.to_string(), "Driver created");
        assert_eq!(UpsertOutcome::Updated.to_string(), "Driver updated");
        assert_eq!(RemovalOutcome::Deleted.to_string(), "Driver deleted");
    }
}
