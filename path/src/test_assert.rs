/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! `test_assert!()` checks invariants that can only be broken by a defect inside this crate (for instance,
//! an arc that flattens to a point count that isn't `3k+1`). The checks are compiled out of release builds
//! unless the `extra_checks` feature is turned on.
//!

#[cfg(not(any(test, feature = "extra_checks")))]
macro_rules! test_assert {
    ($cond:expr) => {{}};
    ($cond:expr,) => {{}};
    ($cond:expr, $($arg:tt)+) => {{}};
}

#[cfg(any(test, feature = "extra_checks"))]
macro_rules! test_assert {
    ($cond:expr) => ({ assert!($cond, "path invariant violated"); });
    ($cond:expr,) => ({ assert!($cond, "path invariant violated"); });
    ($cond:expr, $($arg:tt)+) => ({ assert!($cond, $($arg)*); });
}
