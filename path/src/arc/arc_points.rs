/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::geo::*;

use smallvec::*;

use std::f64::consts::PI;

///
/// Points making up a flattened arc: a start point followed by groups of three points for each bezier section
///
/// A full ellipse needs four sections, so this never has to spill onto the heap.
///
pub type ArcPoints = SmallVec<[Coord2; 13]>;

///
/// Converts an angle measured around an ellipse (in radians) to the corresponding parameter of the ellipse
///
/// `x = cx + rx*cos(t)`, `y = cy + ry*sin(t)` only passes through the geometric angle `t` when `rx == ry`, so
/// angles must be corrected for stretched ellipses. The result stays in the same revolution as the original angle,
/// so sweeps of a full turn are preserved.
///
fn ellipse_parameter(angle: f64, radius_x: f64, radius_y: f64) -> f64 {
    if radius_x == 0.0 || radius_y == 0.0 {
        return angle;
    }

    let (sin, cos) = angle.sin_cos();
    let stretched = f64::atan2(sin / radius_y, cos / radius_x);

    // The parameter is always in the same quadrant as the angle, so the nearest whole revolution is the right one
    let revolutions = ((angle - stretched) / (2.0 * PI)).round();

    stretched + revolutions * 2.0 * PI
}

///
/// Returns the point and the tangent (derivative) of an ellipse at a parameter value
///
#[inline]
fn ellipse_point_tangent(center: Coord2, radius_x: f64, radius_y: f64, t: f64) -> (Coord2, Coord2) {
    let (sin, cos) = t.sin_cos();

    (
        Coord2(center.0 + radius_x * cos, center.1 + radius_y * sin),
        Coord2(-radius_x * sin, radius_y * cos),
    )
}

///
/// Generates the bezier points approximating an arc of the ellipse that fits in the specified bounding box
///
/// Angles are in degrees, measured clockwise from the positive x-axis (y increasing downwards). The start angle is
/// reduced modulo 360 degrees and the sweep is limited to a full turn in either direction. The arc is split into
/// equal sections of no more than 90 degrees, and the result always contains `3k+1` points for some `k >= 1`: a
/// sweep of 0 produces a single degenerate section.
///
pub fn bezier_points_from_arc(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    start_angle: f64,
    sweep_angle: f64,
) -> ArcPoints {
    let radius_x = width / 2.0;
    let radius_y = height / 2.0;
    let center = Coord2(x + radius_x, y + radius_y);

    // A NaN sweep stays NaN
    let sweep_angle = sweep_angle.clamp(-360.0, 360.0);
    let start_angle = start_angle % 360.0;
    let start = ellipse_parameter(start_angle.to_radians(), radius_x, radius_y);
    let end = ellipse_parameter((start_angle + sweep_angle).to_radians(), radius_x, radius_y);
    let total = end - start;

    let num_sections = ((total.abs() / MAX_ARC_SECTION) - SMALL_ANGLE).ceil().max(1.0) as usize;
    let section = total / (num_sections as f64);
    let control_length = 4.0 / 3.0 * (section / 4.0).tan();

    let mut points = ArcPoints::new();
    let (mut last_point, mut last_tangent) = ellipse_point_tangent(center, radius_x, radius_y, start);
    points.push(last_point);

    for section_idx in 1..=num_sections {
        let t = if section_idx == num_sections {
            end
        } else {
            start + section * (section_idx as f64)
        };
        let (point, tangent) = ellipse_point_tangent(center, radius_x, radius_y, t);

        points.push(last_point + last_tangent * control_length);
        points.push(point - tangent * control_length);
        points.push(point);

        last_point = point;
        last_tangent = tangent;
    }

    points
}
