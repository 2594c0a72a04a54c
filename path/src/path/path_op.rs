/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;
use super::point_type::*;
use crate::geo::*;

///
/// Operations that define paths
///
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathOp {
    /// Move to a new point (starting a new subpath)
    Move(Coord2),

    /// Line to point
    Line(Coord2),

    /// Bezier curve to point
    BezierCurve((Coord2, Coord2), Coord2),

    /// Closes the current subpath
    ClosePath,
}

///
/// Trait implemented by anything that can receive the contents of a path, such as a renderer or a serializer
///
/// A consumer only needs to implement this trait to draw any path built with this crate: arcs, rounded corners and
/// splines have all been reduced to lines and cubic bezier curves by the time they get here.
///
pub trait PathSink {
    /// Starts a new subpath at a point
    fn move_to(&mut self, point: Coord2);

    /// Adds a straight line from the current point
    fn line_to(&mut self, point: Coord2);

    /// Adds a cubic bezier section from the current point
    fn bezier_curve_to(&mut self, cp1: Coord2, cp2: Coord2, end_point: Coord2);

    /// Closes the current subpath (after the point that was just added)
    fn close_path(&mut self);
}

impl PathSink for Vec<PathOp> {
    #[inline]
    fn move_to(&mut self, point: Coord2) {
        self.push(PathOp::Move(point));
    }

    #[inline]
    fn line_to(&mut self, point: Coord2) {
        self.push(PathOp::Line(point));
    }

    #[inline]
    fn bezier_curve_to(&mut self, cp1: Coord2, cp2: Coord2, end_point: Coord2) {
        self.push(PathOp::BezierCurve((cp1, cp2), end_point));
    }

    #[inline]
    fn close_path(&mut self) {
        self.push(PathOp::ClosePath);
    }
}

impl Path {
    ///
    /// Sends the contents of this path to a path sink
    ///
    pub fn replay(&self, sink: &mut impl PathSink) {
        let points = self.points();
        let types = self.point_types();
        let mut idx = 0;

        while idx < points.len() {
            let point_type = types[idx];

            // The close flag is always on the last point of a section
            let last_idx = match point_type.kind() {
                PointKind::Start => {
                    sink.move_to(points[idx]);
                    idx
                }

                PointKind::Line => {
                    sink.line_to(points[idx]);
                    idx
                }

                PointKind::Bezier => {
                    test_assert!(idx + 2 < points.len());
                    if idx + 2 >= points.len() {
                        break;
                    }

                    sink.bezier_curve_to(points[idx], points[idx + 1], points[idx + 2]);
                    idx + 2
                }
            };

            if types[last_idx].is_close_subpath() {
                sink.close_path();
            }

            idx = last_idx + 1;
        }
    }

    ///
    /// Returns the contents of this path as a list of path operations
    ///
    pub fn to_path_ops(&self) -> Vec<PathOp> {
        let mut ops = Vec::with_capacity(self.len() + 1);
        self.replay(&mut ops);

        ops
    }
}
