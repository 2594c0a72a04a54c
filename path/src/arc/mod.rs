/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Approximating elliptical arcs with bezier curves
//!
//! Two approximations are provided. `quadrant_arc_points()` generates the single bezier section that covers
//! exactly 90 degrees of an axis-aligned ellipse: this is what rounded rectangles and ellipses are built from.
//! `bezier_points_from_arc()` handles arcs of any start angle and sweep by splitting them into sections of at
//! most 90 degrees.
//!

mod arc_points;
mod quadrant;

pub use self::arc_points::*;
pub use self::quadrant::*;
