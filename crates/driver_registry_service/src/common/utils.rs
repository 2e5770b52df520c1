/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::common::types::*;

/// Straight-line (Euclidean) distance between two plane points.
///
/// Coordinates are widened to f64 before squaring, so positions near the i64
/// extremes cannot overflow the intermediate terms.
pub fn distance_between(pt1: &Point, pt2: &Point) -> Distance {
    let Coordinate(x1) = pt1.x;
    let Coordinate(y1) = pt1.y;
    let Coordinate(x2) = pt2.x;
    let Coordinate(y2) = pt2.y;

    let sq = |v: f64| v * v;

    Distance((sq(x1 as f64 - x2 as f64) + sq(y1 as f64 - y2 as f64)).sqrt())
}
