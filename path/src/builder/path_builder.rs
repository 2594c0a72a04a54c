/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::arc::*;
use crate::consts::*;
use crate::error::*;
use crate::geo::*;
use crate::path::*;
use crate::spline::*;

///
/// Builds a path out of shapes, tracking the 'current figure'
///
/// The closed shapes (`add_rectangle()`, `add_rounded_rectangle()`, `add_ellipse()`, `add_polygon()`, `add_pie()`
/// and `add_closed_curve()`) always produce exactly one new, closed figure no matter what came before them. The
/// open shapes (`add_line()`, `add_lines()`, `add_bezier()`, `add_beziers()`, `add_curve()` and `add_arc()`)
/// continue the current figure if it is still open, so they can be chained into a single connected figure.
///
/// Every operation either succeeds completely or leaves the path exactly as it was.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    ///
    /// Creates a builder for a new, empty path
    ///
    pub fn new() -> PathBuilder {
        PathBuilder::default()
    }

    ///
    /// Creates a builder for a new, empty path with the specified fill mode
    ///
    pub fn with_fill_mode(fill_mode: FillMode) -> PathBuilder {
        PathBuilder {
            path: Path::with_fill_mode(fill_mode),
        }
    }

    ///
    /// Creates a builder that extends an existing path
    ///
    pub fn from_path(path: Path) -> PathBuilder {
        PathBuilder { path }
    }

    ///
    /// The path built so far
    ///
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    ///
    /// Finishes building, returning the path
    ///
    #[inline]
    pub fn into_path(self) -> Path {
        self.path
    }

    #[inline]
    pub fn fill_mode(&self) -> FillMode {
        self.path.fill_mode()
    }

    #[inline]
    pub fn set_fill_mode(&mut self, fill_mode: FillMode) {
        self.path.set_fill_mode(fill_mode);
    }

    ///
    /// Removes everything from the path (the fill mode is kept)
    ///
    pub fn reset(&mut self) {
        self.path.reset();
    }

    ///
    /// Ensures that the next shape starts a new figure
    ///
    /// Unlike `close_figure()` this leaves the current figure open. Nothing happens if the current figure is closed
    /// already or if it is just a start point with nothing after it.
    ///
    pub fn start_figure(&mut self) {
        if self.path.is_subpath_open() && self.path.subpath_has_segments() {
            self.path.start_new_subpath();
        }
    }

    ///
    /// Closes the current figure, if it has at least one line or curve
    ///
    pub fn close_figure(&mut self) {
        if self.path.is_subpath_open() && self.path.subpath_has_segments() {
            self.path.close_subpath();
        }
    }

    ///
    /// Adds a line to the current figure
    ///
    pub fn add_line(&mut self, from: Coord2, to: Coord2) {
        self.path.move_or_line_to(from);
        self.path.move_or_line_to(to);
    }

    ///
    /// Adds a series of connected lines to the current figure
    ///
    pub fn add_lines(&mut self, points: &[Coord2]) -> Result<(), PathError> {
        if points.is_empty() {
            return Err(rejected(
                "add_lines",
                PathError::TooFewPoints {
                    required: 1,
                    actual: 0,
                },
            ));
        }
        check_finite_points("add_lines", points)?;

        for point in points {
            self.path.move_or_line_to(*point);
        }

        Ok(())
    }

    ///
    /// Adds a single bezier section to the current figure
    ///
    pub fn add_bezier(
        &mut self,
        start_point: Coord2,
        cp1: Coord2,
        cp2: Coord2,
        end_point: Coord2,
    ) -> Result<(), PathError> {
        self.path.add_beziers(&[start_point, cp1, cp2, end_point])
    }

    ///
    /// Adds a run of connected bezier sections to the current figure: a start point followed by three points
    /// (two control points and an end point) for each section
    ///
    pub fn add_beziers(&mut self, points: &[Coord2]) -> Result<(), PathError> {
        self.path.add_beziers(points)
    }

    ///
    /// Adds an open cardinal spline with the default tension to the current figure
    ///
    pub fn add_curve(&mut self, points: &[Coord2]) -> Result<(), PathError> {
        self.path.add_curve(points, DEFAULT_TENSION)
    }

    ///
    /// Adds an open cardinal spline to the current figure
    ///
    pub fn add_curve_with_tension(&mut self, points: &[Coord2], tension: f64) -> Result<(), PathError> {
        self.path.add_curve(points, tension)
    }

    ///
    /// Adds some of the sections of an open cardinal spline to the current figure
    ///
    /// The spline is worked out for all of the points, so the neighbours of the first and last section that's added
    /// still affect its shape: only sections `offset..(offset+num_segments)` are added to the path.
    ///
    pub fn add_curve_segments(
        &mut self,
        points: &[Coord2],
        offset: usize,
        num_segments: usize,
        tension: f64,
    ) -> Result<(), PathError> {
        if points.len() < 2 {
            return Err(rejected(
                "add_curve_segments",
                PathError::TooFewPoints {
                    required: 2,
                    actual: points.len(),
                },
            ));
        }

        check_finite_points("add_curve_segments", points)?;
        check_finite("add_curve_segments", &[tension])?;

        let available = points.len() - 1;
        let in_range = offset
            .checked_add(num_segments)
            .map(|end| end <= available)
            .unwrap_or(false);
        if num_segments == 0 || !in_range {
            return Err(rejected(
                "add_curve_segments",
                PathError::SegmentRangeOutOfBounds {
                    offset,
                    segments: num_segments,
                    available,
                },
            ));
        }

        let sections = cardinal_spline_sections(points, tension);

        self.path.move_or_line_to(points[offset]);
        for ((cp1, cp2), end_point) in sections.into_iter().skip(offset).take(num_segments) {
            self.path.bezier_to(cp1, cp2, end_point, false)?;
        }

        Ok(())
    }

    ///
    /// Adds an arc of the ellipse that fits in the specified bounding box to the current figure
    ///
    /// Angles are in degrees, measured clockwise from the positive x-axis.
    ///
    pub fn add_arc(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Result<(), PathError> {
        self.path.add_arc(x, y, width, height, start_angle, sweep_angle)
    }

    ///
    /// Adds an arc of the ellipse with the specified center and radii to the current figure
    ///
    pub fn add_arc_center(
        &mut self,
        center: Coord2,
        radius_x: f64,
        radius_y: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Result<(), PathError> {
        check_dimensions("add_arc_center", radius_x, radius_y)?;
        check_finite_points("add_arc_center", &[center])?;

        self.path.add_arc(
            center.0 - radius_x,
            center.1 - radius_y,
            radius_x * 2.0,
            radius_y * 2.0,
            start_angle,
            sweep_angle,
        )
    }

    ///
    /// Adds a rectangle as a new closed figure, running clockwise from the top-left corner
    ///
    pub fn add_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), PathError> {
        check_dimensions("add_rectangle", width, height)?;
        check_finite("add_rectangle", &[x, y])?;

        self.start_figure();
        self.path.move_to(Coord2(x, y));
        self.path.line_to(Coord2(x + width, y), false)?;
        self.path.line_to(Coord2(x + width, y + height), false)?;
        self.path.line_to(Coord2(x, y + height), false)?;
        self.path.line_to(Coord2(x, y), true)?;
        self.close_figure();

        Ok(())
    }

    ///
    /// Adds a rectangle with rounded corners as a new closed figure
    ///
    /// Each corner is a quarter of an ellipse of size `ellipse_width` by `ellipse_height`. The figure starts where the
    /// top edge meets the top-right corner and runs clockwise. Corners larger than the rectangle are not reduced, so
    /// they overlap and the straight edges run backwards.
    ///
    pub fn add_rounded_rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        ellipse_width: f64,
        ellipse_height: f64,
    ) -> Result<(), PathError> {
        check_dimensions("add_rounded_rectangle", width, height)?;
        check_dimensions("add_rounded_rectangle", ellipse_width, ellipse_height)?;
        check_finite("add_rounded_rectangle", &[x, y])?;

        let arc_width = ellipse_width / 2.0;
        let arc_height = ellipse_height / 2.0;
        let (left, top) = (x, y);
        let (right, bottom) = (x + width, y + height);

        // Corner centers, in the order the corners are visited
        let corners = [
            (Coord2(right - arc_width, top + arc_height), Quadrant::TopRight),
            (Coord2(right - arc_width, bottom - arc_height), Quadrant::BottomRight),
            (Coord2(left + arc_width, bottom - arc_height), Quadrant::BottomLeft),
            (Coord2(left + arc_width, top + arc_height), Quadrant::TopLeft),
        ];

        let (first_center, first_quadrant) = corners[0];
        let first_point = quadrant_start_point(first_center, arc_width, arc_height, first_quadrant, true);

        self.start_figure();
        self.path.move_to(first_point);

        for (idx, (center, quadrant)) in corners.iter().enumerate() {
            self.path
                .quadrant_arc_to(*center, arc_width, arc_height, quadrant.index(), true)?;

            // Straight edge to the start of the next corner
            let (next_center, next_quadrant) = corners[(idx + 1) % corners.len()];
            let next_start = quadrant_start_point(next_center, arc_width, arc_height, next_quadrant, true);
            let is_last = idx == corners.len() - 1;

            self.path.line_to(next_start, is_last)?;
        }

        self.close_figure();

        Ok(())
    }

    ///
    /// Adds the ellipse that fits in the specified bounding box as a new closed figure
    ///
    /// The figure starts at the top of the ellipse and runs clockwise through the four quadrants.
    ///
    pub fn add_ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), PathError> {
        check_dimensions("add_ellipse", width, height)?;
        check_finite("add_ellipse", &[x, y])?;

        let half_width = width / 2.0;
        let half_height = height / 2.0;
        let center = Coord2(x + half_width, y + half_height);

        self.start_figure();
        self.path.move_to(quadrant_start_point(
            center,
            half_width,
            half_height,
            Quadrant::TopRight,
            true,
        ));

        for quadrant in Quadrant::clockwise().iter() {
            self.path
                .quadrant_arc_to(center, half_width, half_height, quadrant.index(), true)?;
        }

        self.close_figure();

        Ok(())
    }

    ///
    /// Adds a polygon through the specified points as a new closed figure
    ///
    pub fn add_polygon(&mut self, points: &[Coord2]) -> Result<(), PathError> {
        if points.len() < 3 {
            return Err(rejected(
                "add_polygon",
                PathError::TooFewPoints {
                    required: 3,
                    actual: points.len(),
                },
            ));
        }
        check_finite_points("add_polygon", points)?;

        let last_idx = points.len() - 1;

        self.start_figure();
        self.path.move_to(points[0]);
        for (idx, point) in points.iter().enumerate().skip(1) {
            self.path.line_to(*point, idx == last_idx)?;
        }
        self.path.close_subpath();
        self.close_figure();

        Ok(())
    }

    ///
    /// Adds a pie slice (an arc joined to the center of its ellipse) as a new closed figure
    ///
    pub fn add_pie(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Result<(), PathError> {
        check_dimensions("add_pie", width, height)?;
        check_finite("add_pie", &[x, y, start_angle, sweep_angle])?;

        self.start_figure();
        self.path.move_to(Coord2(x + width / 2.0, y + height / 2.0));
        self.path.add_arc(x, y, width, height, start_angle, sweep_angle)?;
        self.close_figure();

        Ok(())
    }

    ///
    /// Adds a closed cardinal spline with the default tension as a new closed figure
    ///
    pub fn add_closed_curve(&mut self, points: &[Coord2]) -> Result<(), PathError> {
        self.add_closed_curve_with_tension(points, DEFAULT_TENSION)
    }

    ///
    /// Adds a closed cardinal spline as a new closed figure
    ///
    /// The spline wraps around, so the first and last points are treated as neighbours and a final section joins
    /// the last point back to the first.
    ///
    pub fn add_closed_curve_with_tension(&mut self, points: &[Coord2], tension: f64) -> Result<(), PathError> {
        if points.len() < 2 {
            return Err(rejected(
                "add_closed_curve",
                PathError::TooFewPoints {
                    required: 2,
                    actual: points.len(),
                },
            ));
        }
        check_finite_points("add_closed_curve", points)?;
        check_finite("add_closed_curve", &[tension])?;

        self.start_figure();
        self.path.move_to(points[0]);
        for ((cp1, cp2), end_point) in closed_cardinal_spline_sections(points, tension) {
            self.path.bezier_to(cp1, cp2, end_point, false)?;
        }
        self.close_figure();

        Ok(())
    }

    ///
    /// Appends the figures from another path
    ///
    /// If `connect` is true and the current figure is open, the first figure of the other path continues it.
    ///
    pub fn add_path(&mut self, path: &Path, connect: bool) {
        self.path.append(path, connect);
    }
}
