/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// The winding rule used to decide which parts of a path are inside it when it's filled
///
/// This applies to the whole path rather than to individual subpaths.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FillMode {
    /// A point is inside the path if a ray from it crosses an odd number of edges
    EvenOdd,

    /// A point is inside the path if the edges crossed by a ray from it don't wind to zero
    NonZero,
}

impl Default for FillMode {
    fn default() -> FillMode {
        FillMode::EvenOdd
    }
}
