/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::common::types::*;
use crate::common::utils::distance_between;

#[derive(Debug, Clone, PartialEq)]
pub struct NearestDriver {
    pub driver: Driver,
    pub distance: Distance,
}

/// Single linear scan over a registry snapshot.
///
/// The snapshot arrives ordered by driver id; the strict `<` comparison keeps
/// the first of any set of equidistant drivers, which pins the tie-break to
/// id-lexicographic order. An empty snapshot resolves to `None`, the
/// driver-less (non-error) outcome.
pub fn find_nearest(query: &Point, drivers: &[Driver]) -> Option<NearestDriver> {
    let mut nearest: Option<NearestDriver> = None;

    for driver in drivers {
        let distance = distance_between(query, &driver.position);
        let closer = nearest
            .as_ref()
            .map_or(true, |current| distance.0 < current.distance.0);
        if closer {
            nearest = Some(NearestDriver {
                driver: driver.to_owned(),
                distance,
            });
        }
    }

    nearest
}
