/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic geometric definitions
//!
//! `Coord2` is the point type used throughout the path builder. Coordinates are in the path's own space
//! and have no unit attached: y increases downwards, so 'clockwise' follows the usual screen convention.
//!
//! `Bounds` describes an axis-aligned bounding box.
//!

mod bounds;
mod coord2;

pub use self::bounds::*;
pub use self::coord2::*;
