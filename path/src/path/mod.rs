/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # The canonical path store
//!
//! A `Path` is a list of points with a `PointType` for each one. The type says whether the point starts a new
//! subpath, ends a line, or is one of the three points (two control points then an end point) of a cubic bezier
//! section. The last point of a subpath can also be flagged as closing it. This is the same byte encoding used by
//! the common native rasterizers, so `point_type_bytes()` can be handed straight to them.
//!
//! Paths are only ever extended: the only edit made to an existing point is setting the close flag on the last
//! point. Consumers that don't want to deal with the encoding can `replay()` a path into a `PathSink`, or read it
//! as a list of `PathOp`s.
//!

mod fill_mode;
mod path;
mod path_op;
mod point_type;
mod subpath;
mod svg;

pub use self::fill_mode::*;
pub use self::path::*;
pub use self::path_op::*;
pub use self::point_type::*;
pub use self::subpath::*;
pub use self::svg::*;
