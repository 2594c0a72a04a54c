/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_path::spline::*;
use flo_path::*;

fn bytes(path: &Path) -> Vec<u8> {
    path.point_type_bytes().collect()
}

#[test]
fn two_point_curve_is_one_section() {
    let p0 = Coord2(0.0, 0.0);
    let p1 = Coord2(30.0, 40.0);

    let mut builder = PathBuilder::new();
    builder.add_curve(&[p0, p1]).unwrap();
    let path = builder.into_path();

    assert!(bytes(&path) == vec![0, 3, 3, 3]);

    // Both control points are on the line between the two points
    for cp in path.points()[1..3].iter() {
        let offset = *cp - p0;
        let cross = offset.0 * p1.1 - offset.1 * p1.0;
        assert!(cross.abs() < 1e-9);
    }
}

#[test]
fn curve_uses_default_tension() {
    let points = [Coord2(0.0, 0.0), Coord2(10.0, 5.0), Coord2(20.0, 0.0), Coord2(30.0, 10.0)];

    let mut default_tension = PathBuilder::new();
    default_tension.add_curve(&points).unwrap();

    let mut explicit_tension = PathBuilder::new();
    explicit_tension.add_curve_with_tension(&points, 0.5).unwrap();

    assert!(default_tension == explicit_tension);
}

#[test]
fn curve_points_match_spline_sections() {
    let points = [Coord2(0.0, 0.0), Coord2(10.0, 5.0), Coord2(20.0, 0.0), Coord2(30.0, 10.0)];

    let mut builder = PathBuilder::new();
    builder.add_curve_with_tension(&points, 0.8).unwrap();
    let path = builder.into_path();

    let sections = cardinal_spline_sections(&points, 0.8);
    assert!(path.len() == 1 + sections.len() * 3);

    for (idx, ((cp1, cp2), end)) in sections.iter().enumerate() {
        assert!(path.points()[idx * 3 + 1] == *cp1);
        assert!(path.points()[idx * 3 + 2] == *cp2);
        assert!(path.points()[idx * 3 + 3] == *end);
    }
}

#[test]
fn curve_segments_use_whole_curve() {
    let points = [
        Coord2(0.0, 0.0),
        Coord2(10.0, 5.0),
        Coord2(20.0, 0.0),
        Coord2(30.0, 10.0),
        Coord2(40.0, 0.0),
    ];

    let mut builder = PathBuilder::new();
    builder.add_curve_segments(&points, 1, 2, 0.5).unwrap();
    let path = builder.into_path();

    let sections = cardinal_spline_sections(&points, 0.5);

    assert!(bytes(&path) == vec![0, 3, 3, 3, 3, 3, 3]);
    assert!(path.points()[0] == points[1]);
    assert!(path.points()[1] == (sections[1].0).0);
    assert!(path.points()[2] == (sections[1].0).1);
    assert!(path.points()[3] == sections[1].1);
    assert!(path.points()[4] == (sections[2].0).0);
    assert!(path.points()[6] == points[3]);
}

#[test]
fn curve_segments_covering_everything_match_add_curve() {
    let points = [Coord2(0.0, 0.0), Coord2(10.0, 5.0), Coord2(20.0, 0.0)];

    let mut segments = PathBuilder::new();
    segments.add_curve_segments(&points, 0, 2, 0.5).unwrap();

    let mut curve = PathBuilder::new();
    curve.add_curve(&points).unwrap();

    assert!(segments == curve);
}

#[test]
fn curve_segments_out_of_range() {
    let points = [Coord2(0.0, 0.0), Coord2(10.0, 5.0), Coord2(20.0, 0.0)];
    let mut builder = PathBuilder::new();

    assert!(
        builder.add_curve_segments(&points, 1, 2, 0.5)
            == Err(PathError::SegmentRangeOutOfBounds {
                offset: 1,
                segments: 2,
                available: 2
            })
    );
    assert!(builder.add_curve_segments(&points, 0, 0, 0.5).is_err());
    assert!(builder.add_curve_segments(&points, usize::MAX, 2, 0.5).is_err());
    assert!(builder.add_curve_segments(&points[0..1], 0, 1, 0.5).is_err());
    assert!(builder.path().is_empty());
}

#[test]
fn zero_tension_curve_is_straight() {
    let points = [Coord2(0.0, 0.0), Coord2(10.0, 5.0), Coord2(20.0, 0.0)];

    let mut builder = PathBuilder::new();
    builder.add_curve_with_tension(&points, 0.0).unwrap();
    let path = builder.into_path();

    assert!(path.points()[1] == points[0]);
    assert!(path.points()[2] == points[1]);
    assert!(path.points()[4] == points[1]);
    assert!(path.points()[5] == points[2]);
}

#[test]
fn closed_curve_tension() {
    let points = [Coord2(0.0, 0.0), Coord2(10.0, 0.0), Coord2(10.0, 10.0), Coord2(0.0, 10.0)];

    let mut builder = PathBuilder::new();
    builder.add_closed_curve_with_tension(&points, 1.5).unwrap();
    let path = builder.into_path();

    let sections = closed_cardinal_spline_sections(&points, 1.5);
    assert!(path.len() == 13);
    assert!(path.points()[1] == (sections[0].0).0);
    assert!(path.points()[1] == Coord2(5.0, -5.0));
}
