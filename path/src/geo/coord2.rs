/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// Represents a point in the path's coordinate space
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord2(pub f64, pub f64);

impl Coord2 {
    ///
    /// Returns the distance between this point and another
    ///
    #[inline]
    pub fn distance_to(&self, target: &Coord2) -> f64 {
        let offset = *self - *target;
        offset.0.hypot(offset.1)
    }

    ///
    /// True if the distance between this point and another is less than the specified amount
    ///
    #[inline]
    pub fn is_near_to(&self, target: &Coord2, max_distance: f64) -> bool {
        self.distance_to(target) < max_distance
    }

    ///
    /// True if both components are finite numbers
    ///
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}
