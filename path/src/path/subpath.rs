/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;
use super::point_type::*;
use crate::geo::*;

use std::ops::Range;

///
/// A subpath (figure) within a path: the points from one `Start` point up to the next
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Subpath<'a> {
    /// The index of the start point within the path
    start: usize,

    points: &'a [Coord2],
    types: &'a [PointType],
}

impl<'a> Subpath<'a> {
    ///
    /// The range of indexes covered by this subpath within the path it came from
    ///
    pub fn range(&self) -> Range<usize> {
        self.start..(self.start + self.points.len())
    }

    #[inline]
    pub fn points(&self) -> &'a [Coord2] {
        self.points
    }

    #[inline]
    pub fn point_types(&self) -> &'a [PointType] {
        self.types
    }

    #[inline]
    pub fn start_point(&self) -> Coord2 {
        self.points[0]
    }

    ///
    /// True if the last point of this subpath is flagged as closing it
    ///
    pub fn is_closed(&self) -> bool {
        self.types
            .last()
            .map(|point_type| point_type.is_close_subpath())
            .unwrap_or(false)
    }

    ///
    /// The number of bezier sections in this subpath
    ///
    pub fn num_bezier_sections(&self) -> usize {
        self.types
            .iter()
            .filter(|point_type| point_type.kind() == PointKind::Bezier)
            .count()
            / 3
    }

    ///
    /// The number of lines in this subpath
    ///
    pub fn num_lines(&self) -> usize {
        self.types
            .iter()
            .filter(|point_type| point_type.kind() == PointKind::Line)
            .count()
    }
}

///
/// Iterator that returns the subpaths making up a path
///
pub struct SubpathIterator<'a> {
    path: &'a Path,
    pos: usize,
}

impl<'a> Iterator for SubpathIterator<'a> {
    type Item = Subpath<'a>;

    fn next(&mut self) -> Option<Subpath<'a>> {
        let types = self.path.point_types();
        let start = self.pos;

        if start >= types.len() {
            return None;
        }

        // The subpath runs until the next start point
        let end = types[(start + 1)..]
            .iter()
            .position(|point_type| point_type.kind() == PointKind::Start)
            .map(|offset| start + 1 + offset)
            .unwrap_or(types.len());
        self.pos = end;

        Some(Subpath {
            start,
            points: &self.path.points()[start..end],
            types: &types[start..end],
        })
    }
}

impl Path {
    ///
    /// Returns an iterator over the subpaths in this path
    ///
    pub fn subpaths(&self) -> SubpathIterator<'_> {
        SubpathIterator { path: self, pos: 0 }
    }
}
