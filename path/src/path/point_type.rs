/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// What a point in a path represents
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PointKind {
    /// The first point of a subpath
    Start = 0,

    /// The end of a straight line from the previous point
    Line = 1,

    /// One of the three points (control point 1, control point 2, end point) of a cubic bezier section
    Bezier = 3,
}

///
/// The type byte stored alongside each point of a path
///
/// The low 3 bits hold the `PointKind` and the high bit marks the point that closes its subpath.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct PointType(u8);

impl PointType {
    /// Bits that hold the `PointKind`
    pub const KIND_MASK: u8 = 0x07;

    /// Set on the last point of a closed subpath
    pub const CLOSE_SUBPATH: u8 = 0x80;

    pub const START: PointType = PointType(PointKind::Start as u8);
    pub const LINE: PointType = PointType(PointKind::Line as u8);
    pub const BEZIER: PointType = PointType(PointKind::Bezier as u8);

    ///
    /// Creates a point type
    ///
    #[inline]
    pub fn new(kind: PointKind, close_subpath: bool) -> PointType {
        let close = if close_subpath { Self::CLOSE_SUBPATH } else { 0 };

        PointType(kind as u8 | close)
    }

    ///
    /// Reads a type byte, returning `None` if it uses an unknown kind or any flag other than the close flag
    ///
    pub fn from_byte(byte: u8) -> Option<PointType> {
        if byte & !(Self::KIND_MASK | Self::CLOSE_SUBPATH) != 0 {
            return None;
        }

        match byte & Self::KIND_MASK {
            0 | 1 | 3 => Some(PointType(byte)),
            _ => None,
        }
    }

    #[inline]
    pub fn to_byte(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn kind(self) -> PointKind {
        match self.0 & Self::KIND_MASK {
            0 => PointKind::Start,
            1 => PointKind::Line,
            _ => PointKind::Bezier,
        }
    }

    #[inline]
    pub fn is_close_subpath(self) -> bool {
        (self.0 & Self::CLOSE_SUBPATH) != 0
    }

    ///
    /// Returns this type with the close flag set
    ///
    #[inline]
    pub fn closed(self) -> PointType {
        PointType(self.0 | Self::CLOSE_SUBPATH)
    }
}

impl From<PointType> for u8 {
    #[inline]
    fn from(point_type: PointType) -> u8 {
        point_type.0
    }
}
