/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::geo::*;

use itertools::*;

///
/// One section of a spline: the two control points and the end point (the start point is the end of the
/// previous section)
///
pub type SplineSection = ((Coord2, Coord2), Coord2);

///
/// Works out the control points for the section from `p1` to `p2`, where `p0` and `p3` are the neighbouring points
///
#[inline]
fn cardinal_section(p0: Coord2, p1: Coord2, p2: Coord2, p3: Coord2, scaled_tension: f64) -> SplineSection {
    let cp1 = p1 + (p2 - p0) * scaled_tension;
    let cp2 = p2 - (p3 - p1) * scaled_tension;

    ((cp1, cp2), p2)
}

///
/// Computes the bezier sections of an open cardinal spline through the specified points
///
/// There is one section for every pair of adjacent points, so this returns `points.len()-1` sections (and nothing
/// if fewer than 2 points are supplied). At the two ends of the spline, where there is no neighbouring point, the
/// end point itself is used as the neighbour.
///
pub fn cardinal_spline_sections(points: &[Coord2], tension: f64) -> Vec<SplineSection> {
    if points.len() < 2 {
        return vec![];
    }

    let scaled_tension = tension / TENSION_DIVISOR;
    let first = points[0];
    let last = points[points.len() - 1];

    // Pad the list with a copy of each end point so every section has two neighbours
    Some(first)
        .into_iter()
        .chain(points.iter().copied())
        .chain(Some(last))
        .tuple_windows()
        .map(|(p0, p1, p2, p3)| cardinal_section(p0, p1, p2, p3, scaled_tension))
        .collect()
}

///
/// Computes the bezier sections of a closed cardinal spline through the specified points
///
/// The neighbours wrap around, and a final section joins the last point back to the first, so this returns
/// `points.len()` sections (nothing if fewer than 2 points are supplied). The end point of the final section is a
/// copy of `points[0]`.
///
pub fn closed_cardinal_spline_sections(points: &[Coord2], tension: f64) -> Vec<SplineSection> {
    let num_points = points.len();
    if num_points < 2 {
        return vec![];
    }

    let scaled_tension = tension / TENSION_DIVISOR;

    (0..num_points)
        .map(|idx| {
            let p0 = points[(idx + num_points - 1) % num_points];
            let p1 = points[idx];
            let p2 = points[(idx + 1) % num_points];
            let p3 = points[(idx + 2) % num_points];

            cardinal_section(p0, p1, p2, p3, scaled_tension)
        })
        .collect()
}
