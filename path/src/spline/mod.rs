/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Cardinal splines
//!
//! A cardinal spline passes through every point it is given. Each section between two points becomes one cubic
//! bezier whose control points are offset along the line joining the neighbouring points, scaled by the tension.
//!

mod cardinal;

pub use self::cardinal::*;
