/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::geo::*;

///
/// Distance along the tangent (as a fraction of the radius) to place the control points when approximating a
/// quarter of a circle with a single cubic bezier: `4/3 * (sqrt(2) - 1)`
///
pub const KAPPA: f64 = 0.552_284_749_830_793_4;

///
/// Identifies one quarter of an ellipse
///
/// The numbering is fixed: moving clockwise from 12 o'clock (with y increasing downwards) visits the quadrants
/// in the order 1, 4, 3, 2.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    /// Quadrant 1: from the top of the ellipse to its right-hand side
    TopRight = 1,

    /// Quadrant 2: from the left-hand side of the ellipse to its top
    TopLeft = 2,

    /// Quadrant 3: from the bottom of the ellipse to its left-hand side
    BottomLeft = 3,

    /// Quadrant 4: from the right-hand side of the ellipse to its bottom
    BottomRight = 4,
}

impl Quadrant {
    ///
    /// Returns the quadrant with the specified index (1-4)
    ///
    pub fn from_index(index: u8) -> Result<Quadrant, PathError> {
        match index {
            1 => Ok(Quadrant::TopRight),
            2 => Ok(Quadrant::TopLeft),
            3 => Ok(Quadrant::BottomLeft),
            4 => Ok(Quadrant::BottomRight),
            other => Err(PathError::InvalidQuadrant(other)),
        }
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    ///
    /// The quadrant that is visited after this one when moving clockwise around an ellipse
    ///
    pub fn next_clockwise(self) -> Quadrant {
        match self {
            Quadrant::TopRight => Quadrant::BottomRight,
            Quadrant::BottomRight => Quadrant::BottomLeft,
            Quadrant::BottomLeft => Quadrant::TopLeft,
            Quadrant::TopLeft => Quadrant::TopRight,
        }
    }

    ///
    /// The quadrants in the order they're visited by a clockwise traversal starting at 12 o'clock
    ///
    pub fn clockwise() -> [Quadrant; 4] {
        [
            Quadrant::TopRight,
            Quadrant::BottomRight,
            Quadrant::BottomLeft,
            Quadrant::TopLeft,
        ]
    }
}

///
/// Returns the point where a quadrant arc starts
///
pub fn quadrant_start_point(
    center: Coord2,
    half_width: f64,
    half_height: f64,
    quadrant: Quadrant,
    clockwise: bool,
) -> Coord2 {
    let Coord2(cx, cy) = center;

    match (quadrant, clockwise) {
        (Quadrant::TopRight, true) | (Quadrant::TopLeft, false) => Coord2(cx, cy - half_height),
        (Quadrant::BottomRight, true) | (Quadrant::TopRight, false) => {
            Coord2(cx + half_width, cy)
        }
        (Quadrant::BottomLeft, true) | (Quadrant::BottomRight, false) => {
            Coord2(cx, cy + half_height)
        }
        (Quadrant::TopLeft, true) | (Quadrant::BottomLeft, false) => Coord2(cx - half_width, cy),
    }
}

///
/// Computes the control points and end point of the bezier section that covers one quadrant of an ellipse
///
/// The section starts at `quadrant_start_point()` for the same arguments. The result is `((cp1, cp2), end_point)`.
///
pub fn quadrant_arc_points(
    center: Coord2,
    half_width: f64,
    half_height: f64,
    quadrant: Quadrant,
    clockwise: bool,
) -> ((Coord2, Coord2), Coord2) {
    let Coord2(cx, cy) = center;
    let (hw, hh) = (half_width, half_height);
    let (kx, ky) = (KAPPA * half_width, KAPPA * half_height);

    match (quadrant, clockwise) {
        // Clockwise: top -> right -> bottom -> left -> top
        (Quadrant::TopRight, true) => (
            (Coord2(cx + kx, cy - hh), Coord2(cx + hw, cy - ky)),
            Coord2(cx + hw, cy),
        ),
        (Quadrant::BottomRight, true) => (
            (Coord2(cx + hw, cy + ky), Coord2(cx + kx, cy + hh)),
            Coord2(cx, cy + hh),
        ),
        (Quadrant::BottomLeft, true) => (
            (Coord2(cx - kx, cy + hh), Coord2(cx - hw, cy + ky)),
            Coord2(cx - hw, cy),
        ),
        (Quadrant::TopLeft, true) => (
            (Coord2(cx - hw, cy - ky), Coord2(cx - kx, cy - hh)),
            Coord2(cx, cy - hh),
        ),

        // Anticlockwise: the same sections, traversed backwards
        (Quadrant::TopRight, false) => (
            (Coord2(cx + hw, cy - ky), Coord2(cx + kx, cy - hh)),
            Coord2(cx, cy - hh),
        ),
        (Quadrant::BottomRight, false) => (
            (Coord2(cx + kx, cy + hh), Coord2(cx + hw, cy + ky)),
            Coord2(cx + hw, cy),
        ),
        (Quadrant::BottomLeft, false) => (
            (Coord2(cx - hw, cy + ky), Coord2(cx - kx, cy + hh)),
            Coord2(cx, cy + hh),
        ),
        (Quadrant::TopLeft, false) => (
            (Coord2(cx - kx, cy - hh), Coord2(cx - hw, cy - ky)),
            Coord2(cx - hw, cy),
        ),
    }
}
