/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Building paths from shapes
//!
//! ```
//! # use flo_path::*;
//! #
//! let mut builder = PathBuilder::with_fill_mode(FillMode::NonZero);
//!
//! builder.add_rectangle(0.0, 0.0, 100.0, 100.0).unwrap();
//! builder.add_pie(25.0, 25.0, 50.0, 50.0, 0.0, 90.0).unwrap();
//!
//! // Open shapes chain together into one figure
//! builder.add_line(Coord2(200.0, 0.0), Coord2(250.0, 50.0));
//! builder.add_arc(200.0, 50.0, 100.0, 100.0, 270.0, 90.0).unwrap();
//! builder.close_figure();
//!
//! let path = builder.into_path();
//! assert!(path.subpaths().count() == 3);
//! assert!(path.subpaths().all(|subpath| subpath.is_closed()));
//! ```
//!

mod path_builder;

pub use self::path_builder::*;
