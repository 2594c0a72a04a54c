/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::fill_mode::*;
use super::point_type::*;
use crate::arc::*;
use crate::error::*;
use crate::geo::*;
use crate::spline::*;

#[cfg(feature = "serde")]
use std::convert::TryFrom;

///
/// A path stored as a list of points and the type of each point
///
/// Index 0 (if present) is always a `Start` point, and bezier points always come in groups of three (control point 1,
/// control point 2, end point). A subpath runs from one `Start` point up to the point before the next one.
///
/// ```
/// # use flo_path::*;
/// #
/// let mut path = Path::new();
///
/// path.move_to(Coord2(10.0, 10.0));
/// path.line_to(Coord2(20.0, 10.0), false).unwrap();
/// path.bezier_to(Coord2(25.0, 10.0), Coord2(30.0, 15.0), Coord2(30.0, 20.0), true).unwrap();
///
/// assert!(path.point_type_bytes().collect::<Vec<_>>() == vec![0, 1, 3, 3, 0x83]);
/// ```
///
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "SerializedPath", into = "SerializedPath")
)]
pub struct Path {
    /// The points making up this path
    points: Vec<Coord2>,

    /// The type of each point in `points`
    types: Vec<PointType>,

    /// The winding rule for the whole path
    fill_mode: FillMode,

    /// Set when the next point added by `move_or_line_to()` must start a new subpath even though the current one is open
    new_subpath: bool,
}

impl Path {
    ///
    /// Creates a new, empty path
    ///
    pub fn new() -> Path {
        Path::default()
    }

    ///
    /// Creates a new, empty path with a particular fill mode
    ///
    pub fn with_fill_mode(fill_mode: FillMode) -> Path {
        Path {
            fill_mode,
            ..Path::default()
        }
    }

    ///
    /// Creates a path from a list of points and type bytes, checking that they use the canonical encoding
    ///
    pub fn from_raw(
        points: Vec<Coord2>,
        type_bytes: Vec<u8>,
        fill_mode: FillMode,
    ) -> Result<Path, PathError> {
        if points.len() != type_bytes.len() {
            return Err(rejected(
                "from_raw",
                PathError::MalformedEncoding(points.len().min(type_bytes.len())),
            ));
        }

        let mut types = Vec::with_capacity(type_bytes.len());
        let mut bezier_run = 0;

        for (idx, byte) in type_bytes.iter().enumerate() {
            let malformed = || rejected("from_raw", PathError::MalformedEncoding(idx));
            let point_type = PointType::from_byte(*byte).ok_or_else(malformed)?;

            match point_type.kind() {
                PointKind::Bezier => bezier_run += 1,
                PointKind::Start | PointKind::Line => {
                    if bezier_run % 3 != 0 {
                        return Err(malformed());
                    }
                    bezier_run = 0;
                }
            }

            if idx == 0 && point_type.kind() != PointKind::Start {
                return Err(malformed());
            }

            if point_type.is_close_subpath() {
                // Only the last point of a subpath can close it, and never the middle of a bezier section
                let ends_subpath = type_bytes
                    .get(idx + 1)
                    .map(|next| next & PointType::KIND_MASK == PointKind::Start as u8)
                    .unwrap_or(true);

                if !ends_subpath || bezier_run % 3 != 0 {
                    return Err(malformed());
                }
            }

            types.push(point_type);
        }

        if bezier_run % 3 != 0 {
            return Err(rejected(
                "from_raw",
                PathError::MalformedEncoding(type_bytes.len()),
            ));
        }

        Ok(Path {
            points,
            types,
            fill_mode,
            new_subpath: false,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    ///
    /// The points making up this path
    ///
    #[inline]
    pub fn points(&self) -> &[Coord2] {
        &self.points
    }

    ///
    /// The type of each point in this path (this always has the same length as `points()`)
    ///
    #[inline]
    pub fn point_types(&self) -> &[PointType] {
        &self.types
    }

    ///
    /// The type of each point in this path as bytes (kind in the low 3 bits, `0x80` if the point closes a subpath)
    ///
    pub fn point_type_bytes(&self) -> impl '_ + Iterator<Item = u8> {
        self.types.iter().map(|point_type| point_type.to_byte())
    }

    ///
    /// The most recently added point, if there is one
    ///
    #[inline]
    pub fn last_point(&self) -> Option<Coord2> {
        self.points.last().copied()
    }

    #[inline]
    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    #[inline]
    pub fn set_fill_mode(&mut self, fill_mode: FillMode) {
        self.fill_mode = fill_mode;
    }

    ///
    /// Removes every point from this path (the fill mode is left unchanged)
    ///
    pub fn reset(&mut self) {
        self.points.clear();
        self.types.clear();
        self.new_subpath = false;
    }

    ///
    /// Returns the bounding box of all the points in this path, including bezier control points
    ///
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::bounds_for_points(self.points.iter().copied())
    }

    ///
    /// True if the last subpath has not been closed (false for an empty path)
    ///
    pub fn is_subpath_open(&self) -> bool {
        self.types
            .last()
            .map(|point_type| !point_type.is_close_subpath())
            .unwrap_or(false)
    }

    ///
    /// The index of the point that starts the last subpath
    ///
    pub fn last_subpath_start(&self) -> Option<usize> {
        self.types
            .iter()
            .rposition(|point_type| point_type.kind() == PointKind::Start)
    }

    ///
    /// True if the last subpath has at least one line or curve after its start point
    ///
    pub fn subpath_has_segments(&self) -> bool {
        match self.last_subpath_start() {
            Some(start) => start + 1 < self.points.len(),
            None => false,
        }
    }

    ///
    /// True if the next point added by `move_or_line_to()` will start a new subpath
    ///
    pub fn needs_new_subpath(&self) -> bool {
        self.new_subpath || !self.is_subpath_open()
    }

    ///
    /// Causes the next `move_or_line_to()` to begin a new subpath even if the current one is still open
    ///
    /// Any point that's added to the path clears this request.
    ///
    pub fn start_new_subpath(&mut self) {
        self.new_subpath = !self.is_empty();
    }

    #[inline]
    fn push(&mut self, point: Coord2, point_type: PointType) {
        self.points.push(point);
        self.types.push(point_type);
        self.new_subpath = false;
    }

    fn push_line(&mut self, point: Coord2, close_subpath: bool) {
        if self.last_point() == Some(point) {
            log::trace!("line_to: dropped zero-length line to {:?}", point);
            return;
        }

        self.push(point, PointType::new(PointKind::Line, close_subpath));
    }

    fn push_bezier(&mut self, cp1: Coord2, cp2: Coord2, end_point: Coord2, close_subpath: bool) {
        self.push(cp1, PointType::BEZIER);
        self.push(cp2, PointType::BEZIER);
        self.push(end_point, PointType::new(PointKind::Bezier, close_subpath));
    }

    fn check_current_point(&self, operation: &'static str) -> Result<(), PathError> {
        if self.is_empty() {
            Err(rejected(operation, PathError::NoCurrentPoint))
        } else {
            Ok(())
        }
    }

    ///
    /// Starts a new subpath at the specified point
    ///
    pub fn move_to(&mut self, point: Coord2) {
        self.push(point, PointType::START);
    }

    ///
    /// Continues the current subpath with a line to the specified point, or starts a new subpath there if the
    /// path is empty, the last subpath was closed or `start_new_subpath()` was called
    ///
    pub fn move_or_line_to(&mut self, point: Coord2) {
        if self.needs_new_subpath() {
            self.move_to(point);
        } else {
            self.push_line(point, false);
        }
    }

    ///
    /// Adds a line from the current point, optionally closing the subpath
    ///
    /// A line to the point the path is already at is dropped entirely: no point is added and the close flag is
    /// not applied either.
    ///
    pub fn line_to(&mut self, point: Coord2, close_subpath: bool) -> Result<(), PathError> {
        self.check_current_point("line_to")?;
        check_finite_points("line_to", &[point])?;
        self.push_line(point, close_subpath);

        Ok(())
    }

    ///
    /// Adds a cubic bezier section from the current point, optionally closing the subpath
    ///
    pub fn bezier_to(
        &mut self,
        cp1: Coord2,
        cp2: Coord2,
        end_point: Coord2,
        close_subpath: bool,
    ) -> Result<(), PathError> {
        self.check_current_point("bezier_to")?;
        check_finite_points("bezier_to", &[cp1, cp2, end_point])?;
        self.push_bezier(cp1, cp2, end_point, close_subpath);

        Ok(())
    }

    ///
    /// Marks the last point in the path as closing its subpath (does nothing to an empty path)
    ///
    pub fn close_subpath(&mut self) {
        if let Some(last) = self.types.last_mut() {
            *last = last.closed();
        }
    }

    ///
    /// Adds the bezier section covering one quadrant (1 = top-right, 2 = top-left, 3 = bottom-left, 4 = bottom-right)
    /// of an axis-aligned ellipse
    ///
    /// The current point is expected to be the start of the quadrant (see `quadrant_start_point()`): only the
    /// control points and end point are added.
    ///
    pub fn quadrant_arc_to(
        &mut self,
        center: Coord2,
        half_width: f64,
        half_height: f64,
        quadrant: u8,
        clockwise: bool,
    ) -> Result<(), PathError> {
        check_dimensions("quadrant_arc_to", half_width, half_height)?;
        check_finite_points("quadrant_arc_to", &[center])?;
        let quadrant =
            Quadrant::from_index(quadrant).map_err(|err| rejected("quadrant_arc_to", err))?;
        self.check_current_point("quadrant_arc_to")?;

        let ((cp1, cp2), end_point) =
            quadrant_arc_points(center, half_width, half_height, quadrant, clockwise);
        self.push_bezier(cp1, cp2, end_point, false);

        Ok(())
    }

    ///
    /// Adds an arc of the ellipse that fits in the specified bounding box
    ///
    /// Angles are in degrees, clockwise from the positive x-axis. The arc continues the current subpath with a line
    /// to its first point unless a new subpath is needed, in which case the arc starts one.
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
        check_dimensions("add_arc", width, height)?;
        check_finite("add_arc", &[x, y, start_angle, sweep_angle])?;

        let arc_points = bezier_points_from_arc(x, y, width, height, start_angle, sweep_angle);
        test_assert!(arc_points.len() % 3 == 1);

        if let Some((first, sections)) = arc_points.split_first() {
            self.move_or_line_to(*first);

            for section in sections.chunks_exact(3) {
                self.push_bezier(section[0], section[1], section[2], false);
            }
        }

        Ok(())
    }

    ///
    /// Adds a run of bezier sections: a start point followed by three points for each section (`4+3n` points)
    ///
    pub fn add_beziers(&mut self, points: &[Coord2]) -> Result<(), PathError> {
        if points.len() < 4 || (points.len() - 1) % 3 != 0 {
            return Err(rejected(
                "add_beziers",
                PathError::InvalidBezierPointCount(points.len()),
            ));
        }
        check_finite_points("add_beziers", points)?;

        self.move_or_line_to(points[0]);
        for section in points[1..].chunks_exact(3) {
            self.push_bezier(section[0], section[1], section[2], false);
        }

        Ok(())
    }

    ///
    /// Adds an open cardinal spline passing through the specified points
    ///
    pub fn add_curve(&mut self, points: &[Coord2], tension: f64) -> Result<(), PathError> {
        if points.len() < 2 {
            return Err(rejected(
                "add_curve",
                PathError::TooFewPoints {
                    required: 2,
                    actual: points.len(),
                },
            ));
        }
        check_finite_points("add_curve", points)?;
        check_finite("add_curve", &[tension])?;

        self.move_or_line_to(points[0]);
        for ((cp1, cp2), end_point) in cardinal_spline_sections(points, tension) {
            self.push_bezier(cp1, cp2, end_point, false);
        }

        Ok(())
    }

    ///
    /// Appends the points from another path to this one
    ///
    /// If `connect` is true and this path has an open subpath, the first point of the other path becomes a line
    /// continuing that subpath rather than the start of a new one. That line is left out if it would have zero
    /// length, in which case a close flag on the first point is applied to the current point instead.
    ///
    pub fn append(&mut self, other: &Path, connect: bool) {
        let connect = connect && !self.needs_new_subpath();

        self.points.reserve(other.len());
        self.types.reserve(other.len());

        for (idx, (point, point_type)) in other.points.iter().zip(other.types.iter()).enumerate() {
            if idx == 0 && connect {
                // The joining line may be dropped as zero-length, but a closed first subpath still closes
                self.push_line(*point, false);
                if point_type.is_close_subpath() {
                    self.close_subpath();
                }
            } else {
                self.push(*point, *point_type);
            }
        }
    }
}

impl PartialEq for Path {
    ///
    /// Paths are equal if they have the same points, point types and fill mode (a pending `start_new_subpath()`
    /// is not part of the path's contents)
    ///
    fn eq(&self, other: &Path) -> bool {
        self.points == other.points && self.types == other.types && self.fill_mode == other.fill_mode
    }
}

///
/// The form a path takes when it is serialized: the type bytes are checked when it is read back in
///
#[cfg(feature = "serde")]
#[derive(Clone, Serialize, Deserialize)]
struct SerializedPath {
    points: Vec<Coord2>,
    types: Vec<u8>,
    fill_mode: FillMode,
}

#[cfg(feature = "serde")]
impl From<Path> for SerializedPath {
    fn from(path: Path) -> SerializedPath {
        SerializedPath {
            types: path.point_type_bytes().collect(),
            points: path.points,
            fill_mode: path.fill_mode,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<SerializedPath> for Path {
    type Error = PathError;

    fn try_from(serialized: SerializedPath) -> Result<Path, PathError> {
        Path::from_raw(serialized.points, serialized.types, serialized.fill_mode)
    }
}
