/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_path::spline::*;
use flo_path::*;

fn cross(origin: Coord2, a: Coord2, b: Coord2) -> f64 {
    let (a, b) = (a - origin, b - origin);
    a.0 * b.1 - a.1 * b.0
}

#[test]
fn two_points_make_one_straight_section() {
    let p0 = Coord2(10.0, 20.0);
    let p1 = Coord2(70.0, -5.0);

    for tension in [0.0, 0.5, 1.0, 2.5].iter() {
        let sections = cardinal_spline_sections(&[p0, p1], *tension);
        assert!(sections.len() == 1);

        let ((cp1, cp2), end) = sections[0];
        assert!(end == p1);
        assert!(cross(p0, p1, cp1).abs() < 1e-9);
        assert!(cross(p0, p1, cp2).abs() < 1e-9);
    }
}

#[test]
fn two_points_with_default_tension() {
    let sections = cardinal_spline_sections(&[Coord2(0.0, 0.0), Coord2(60.0, 0.0)], DEFAULT_TENSION);
    let ((cp1, cp2), _) = sections[0];

    // 0.5/3 of the way along the line from each end
    assert!(cp1.distance_to(&Coord2(10.0, 0.0)) < 1e-9);
    assert!(cp2.distance_to(&Coord2(50.0, 0.0)) < 1e-9);
}

#[test]
fn control_points_use_neighbours() {
    let points = [Coord2(0.0, 0.0), Coord2(10.0, 0.0), Coord2(10.0, 10.0)];
    let sections = cardinal_spline_sections(&points, 1.5);

    assert!(sections.len() == 2);
    assert!(sections[0] == ((Coord2(5.0, 0.0), Coord2(5.0, -5.0)), Coord2(10.0, 0.0)));
    assert!(sections[1] == ((Coord2(15.0, 5.0), Coord2(10.0, 5.0)), Coord2(10.0, 10.0)));
}

#[test]
fn zero_tension_gives_straight_lines() {
    let points = [Coord2(0.0, 0.0), Coord2(10.0, 3.0), Coord2(-4.0, 10.0), Coord2(7.0, 7.0)];
    let sections = cardinal_spline_sections(&points, 0.0);

    assert!(sections.len() == 3);
    for (idx, ((cp1, cp2), end)) in sections.iter().enumerate() {
        assert!(*cp1 == points[idx]);
        assert!(*cp2 == points[idx + 1]);
        assert!(*end == points[idx + 1]);
    }
}

#[test]
fn open_spline_tangents_are_continuous() {
    let points = [Coord2(0.0, 0.0), Coord2(10.0, 3.0), Coord2(-4.0, 10.0), Coord2(7.0, 7.0), Coord2(1.0, 1.0)];
    let sections = cardinal_spline_sections(&points, 0.7);

    for idx in 0..(sections.len() - 1) {
        let ((_, incoming), join) = sections[idx];
        let ((outgoing, _), _) = sections[idx + 1];

        assert!(join == points[idx + 1]);
        assert!((join - incoming).distance_to(&(outgoing - join)) < 1e-9);
    }
}

#[test]
fn too_few_points_make_no_sections() {
    assert!(cardinal_spline_sections(&[], 0.5).is_empty());
    assert!(cardinal_spline_sections(&[Coord2(1.0, 1.0)], 0.5).is_empty());
    assert!(closed_cardinal_spline_sections(&[Coord2(1.0, 1.0)], 0.5).is_empty());
}

#[test]
fn closed_spline_returns_to_first_point() {
    let points = [Coord2(0.0, 0.0), Coord2(10.0, 1.0), Coord2(11.0, 9.0), Coord2(-1.0, 10.0)];
    let sections = closed_cardinal_spline_sections(&points, 0.5);

    assert!(sections.len() == 4);

    let (_, last_end) = sections[3];
    assert!(last_end.0.to_bits() == points[0].0.to_bits());
    assert!(last_end.1.to_bits() == points[0].1.to_bits());
}

#[test]
fn closed_spline_tangents_wrap_around() {
    let points = [Coord2(0.0, 0.0), Coord2(10.0, 1.0), Coord2(11.0, 9.0), Coord2(-1.0, 10.0)];
    let sections = closed_cardinal_spline_sections(&points, 0.5);

    for idx in 0..sections.len() {
        let ((_, incoming), join) = sections[idx];
        let ((outgoing, _), _) = sections[(idx + 1) % sections.len()];

        assert!(join == points[(idx + 1) % points.len()]);
        assert!((join - incoming).distance_to(&(outgoing - join)) < 1e-9);
    }
}

#[test]
fn closed_spline_first_section_uses_last_point() {
    let points = [Coord2(0.0, 0.0), Coord2(30.0, 0.0), Coord2(30.0, 30.0)];
    let sections = closed_cardinal_spline_sections(&points, 3.0);

    // Tension 3 divides down to 1, so the control point is offset by the whole of (p1 - p_last)
    let ((cp1, cp2), _) = sections[0];
    assert!(cp1 == Coord2(0.0, 0.0) + (Coord2(30.0, 0.0) - Coord2(30.0, 30.0)));
    assert!(cp2 == Coord2(30.0, 0.0) - (Coord2(30.0, 30.0) - Coord2(0.0, 0.0)));
}
