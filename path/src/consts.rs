/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Tension used by the curve functions that don't take an explicit tension
pub const DEFAULT_TENSION: f64 = 0.5;

/// The caller's tension is divided by this before it is used to offset the control points of a cardinal spline
pub const TENSION_DIVISOR: f64 = 3.0;

/// Largest sweep (in radians) that is approximated by a single bezier section when flattening an arc
pub const MAX_ARC_SECTION: f64 = std::f64::consts::FRAC_PI_2;

/// Amount an arc may exceed a multiple of `MAX_ARC_SECTION` by before an extra section is generated
pub const SMALL_ANGLE: f64 = 1e-9;
