/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;

///
/// An axis-aligned bounding box
///
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    min: Coord2,
    max: Coord2,
}

impl Bounds {
    ///
    /// Creates a bounding box from two corners (which can be in any order)
    ///
    pub fn from_min_max(p1: Coord2, p2: Coord2) -> Bounds {
        Bounds {
            min: Coord2(p1.0.min(p2.0), p1.1.min(p2.1)),
            max: Coord2(p1.0.max(p2.0), p1.1.max(p2.1)),
        }
    }

    ///
    /// Creates the bounding box enclosing a set of points, or `None` if there are no points
    ///
    pub fn bounds_for_points<Points: IntoIterator<Item = Coord2>>(points: Points) -> Option<Bounds> {
        let mut points = points.into_iter();
        let first = points.next()?;

        Some(points.fold(Bounds::from_min_max(first, first), |bounds, point| {
            bounds.including(point)
        }))
    }

    ///
    /// Returns a bounding box that also encloses the specified point
    ///
    pub fn including(&self, point: Coord2) -> Bounds {
        Bounds {
            min: Coord2(self.min.0.min(point.0), self.min.1.min(point.1)),
            max: Coord2(self.max.0.max(point.0), self.max.1.max(point.1)),
        }
    }

    #[inline]
    pub fn min(&self) -> Coord2 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Coord2 {
        self.max
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.0 - self.min.0
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.1 - self.min.1
    }

    ///
    /// True if this bounding box touches or overlaps another
    ///
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min.0 <= other.max.0
            && self.max.0 >= other.min.0
            && self.min.1 <= other.max.1
            && self.max.1 >= other.min.1
    }
}
