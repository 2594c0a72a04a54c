/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;
use super::path_op::*;
use crate::geo::*;

use std::fmt::Write;

///
/// Path sink that generates SVG path data (the value of the `d` attribute of a `<path>` element)
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SvgPathData(String);

impl SvgPathData {
    pub fn new() -> SvgPathData {
        SvgPathData(String::new())
    }

    pub fn as_str(&self) -> &str {
        self.0.trim_end()
    }

    pub fn into_string(self) -> String {
        self.as_str().to_string()
    }
}

impl PathSink for SvgPathData {
    fn move_to(&mut self, Coord2(x, y): Coord2) {
        write!(self.0, "M {} {} ", x, y).ok();
    }

    fn line_to(&mut self, Coord2(x, y): Coord2) {
        write!(self.0, "L {} {} ", x, y).ok();
    }

    fn bezier_curve_to(&mut self, cp1: Coord2, cp2: Coord2, end_point: Coord2) {
        write!(
            self.0,
            "C {} {} {} {} {} {} ",
            cp1.0, cp1.1, cp2.0, cp2.1, end_point.0, end_point.1
        )
        .ok();
    }

    fn close_path(&mut self) {
        self.0.push_str("Z ");
    }
}

impl Path {
    ///
    /// Writes this path out as SVG path data
    ///
    /// The fill mode is not part of the path data: it corresponds to the `fill-rule` property.
    ///
    pub fn to_svg_path_data(&self) -> String {
        let mut svg = SvgPathData::new();
        self.replay(&mut svg);

        svg.into_string()
    }
}
