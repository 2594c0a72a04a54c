/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_path
//!
//! `flo_path` turns high-level drawing requests (rectangles, rounded rectangles, ellipses, arcs, pies, polygons,
//! bezier runs and cardinal splines) into a single canonical path: a list of points, each tagged as the start of a
//! subpath, the end of a line or one of the three points of a cubic bezier section, with a flag marking the point
//! that closes its subpath. The encoding is the one used by most native rasterizers, so anything that consumes
//! the path only needs to understand moves, lines, cubic curves and closes.
//!
//! ```
//! # use flo_path::*;
//! #
//! let mut builder = PathBuilder::new();
//!
//! builder.add_rounded_rectangle(0.0, 0.0, 100.0, 50.0, 20.0, 20.0).unwrap();
//! builder.add_ellipse(10.0, 10.0, 30.0, 20.0).unwrap();
//! builder.add_curve(&[Coord2(0.0, 0.0), Coord2(20.0, 40.0), Coord2(60.0, 10.0)]).unwrap();
//!
//! let path = builder.into_path();
//!
//! assert!(path.subpaths().count() == 3);
//! assert!(path.points().len() == path.point_types().len());
//! ```
//!
//! `PathBuilder` provides the shape vocabulary and tracks the 'current figure'. Each closed shape (rectangles,
//! ellipses, polygons, pies, closed curves) always produces exactly one new closed subpath, while the open calls
//! (lines, beziers, open curves and arcs) continue the current figure so they can be chained together.
//!
//! `Path` is the underlying store. It can be extended directly with `move_to()`, `line_to()`, `bezier_to()` and
//! friends, and it can be replayed into any `PathSink` (for example to generate `PathOp`s or SVG path data).
//!

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde_derive;

#[macro_use]
mod test_assert;
mod consts;
mod error;

pub mod arc;
pub mod builder;
pub mod geo;
pub mod path;
pub mod spline;

pub use self::builder::*;
pub use self::consts::*;
pub use self::error::*;
pub use self::geo::*;
pub use self::path::*;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
