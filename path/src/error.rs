/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

use std::error::Error;
use std::fmt;

///
/// Reasons a path operation can be rejected
///
/// A rejected operation never changes the path: everything is checked before the first point is added.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathError {
    /// A bounding box or radius was given a negative width or height
    NegativeDimension { width: f64, height: f64 },

    /// A quadrant index other than 1, 2, 3 or 4 was supplied
    InvalidQuadrant(u8),

    /// Not enough points were supplied to build the requested shape
    TooFewPoints { required: usize, actual: usize },

    /// A list of bezier points must contain a start point followed by groups of three (ie, `4+3n` points)
    InvalidBezierPointCount(usize),

    /// The requested window of spline segments extends past the end of the points that were supplied
    SegmentRangeOutOfBounds {
        offset: usize,
        segments: usize,
        available: usize,
    },

    /// A line or curve was added to a path that has no current point
    NoCurrentPoint,

    /// A raw point/type list does not follow the canonical encoding (the index is the first invalid point)
    MalformedEncoding(usize),

    /// A coordinate, dimension, angle or tension was infinite or NaN
    NonFiniteValue,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathError::NegativeDimension { width, height } => write!(
                f,
                "dimensions must not be negative (width {}, height {})",
                width, height
            ),
            PathError::InvalidQuadrant(quadrant) => {
                write!(f, "quadrant must be between 1 and 4 (was {})", quadrant)
            }
            PathError::TooFewPoints { required, actual } => write!(
                f,
                "at least {} points are required ({} were supplied)",
                required, actual
            ),
            PathError::InvalidBezierPointCount(count) => write!(
                f,
                "bezier point lists must have 4+3n points ({} were supplied)",
                count
            ),
            PathError::SegmentRangeOutOfBounds {
                offset,
                segments,
                available,
            } => write!(
                f,
                "segments {}..{} are outside the {} segments available",
                offset,
                offset.saturating_add(*segments),
                available
            ),
            PathError::NoCurrentPoint => write!(f, "the path has no current point"),
            PathError::MalformedEncoding(index) => {
                write!(f, "point {} breaks the path encoding", index)
            }
            PathError::NonFiniteValue => write!(f, "coordinates and angles must be finite numbers"),
        }
    }
}

impl Error for PathError {}

///
/// Logs that an operation was rejected and passes the error on
///
pub(crate) fn rejected(operation: &'static str, error: PathError) -> PathError {
    log::debug!("{}: rejected ({})", operation, error);

    error
}

///
/// Checks that a width and height are usable as the size of a bounding box or the radii of an ellipse
///
pub(crate) fn check_dimensions(
    operation: &'static str,
    width: f64,
    height: f64,
) -> Result<(), PathError> {
    check_finite(operation, &[width, height])?;

    if width < 0.0 || height < 0.0 {
        Err(rejected(
            operation,
            PathError::NegativeDimension { width, height },
        ))
    } else {
        Ok(())
    }
}

///
/// Checks that none of a set of scalar arguments (positions, angles, tensions) is infinite or NaN
///
pub(crate) fn check_finite(operation: &'static str, values: &[f64]) -> Result<(), PathError> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(rejected(operation, PathError::NonFiniteValue))
    }
}

///
/// Checks that every point in a list has finite coordinates
///
pub(crate) fn check_finite_points(operation: &'static str, points: &[Coord2]) -> Result<(), PathError> {
    if points.iter().all(|point| point.is_finite()) {
        Ok(())
    } else {
        Err(rejected(operation, PathError::NonFiniteValue))
    }
}
