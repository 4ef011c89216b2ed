// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use orthos_core::math::{degrees_to_radians, FRAC_PI_4};
use orthos_core::{Obb, Quaternion, Ternion, Tolerances};

fn unit_cube() -> Obb {
    Obb::from_corners(Ternion::ZERO, Ternion::ONE, None)
}

fn assert_symmetric(first: &Obb, second: &Obb) -> bool {
    let forward = first.intersects(second);
    assert_eq!(
        forward,
        second.intersects(first),
        "intersection must not depend on argument order:\n{first:?}\n{second:?}"
    );
    forward
}

#[test]
fn test_axis_aligned_separation_along_each_axis() {
    for axis in Ternion::BASIS {
        let cube = unit_cube();
        assert!(!assert_symmetric(&cube, &cube.offset(axis * 2.0)), "apart along {axis}");
        assert!(!assert_symmetric(&cube, &cube.offset(axis * -1.5)), "apart along -{axis}");
        assert!(assert_symmetric(&cube, &cube.offset(axis * 0.5)), "overlapping along {axis}");
        assert!(assert_symmetric(&cube, &cube.offset(axis)), "touching along {axis}");
    }
}

#[test]
fn test_containment_intersects() {
    let outer = Obb::from_centre_and_extent(Ternion::ZERO, Ternion::splat(10.0), None);
    let inner = Obb::from_centre_and_extent(
        Ternion::new(1.0, -1.0, 2.0),
        Ternion::new(1.0, 2.0, 0.5),
        Some(Quaternion::euler(0.4, 1.1, -0.3)),
    );
    assert!(assert_symmetric(&outer, &inner));
}

#[test]
fn test_rotated_cube_against_measured_box() {
    // Edges measured by hand are only orthogonal to about a quarter of a
    // percent, hence the loose tolerance set.
    let cube = Obb::from_corners(
        Ternion::ZERO,
        Ternion::ONE,
        Some(Quaternion::euler(degrees_to_radians(-45.0), 0.0, 0.0)),
    );
    let measured = Obb::with_tolerances(
        Ternion::new(0.91, 1.31, 0.9),
        Ternion::new(-0.01, -0.61, 0.0),
        Ternion::new(-0.1, 0.0, 0.6),
        Ternion::new(0.6, -0.01, 0.1),
        &Tolerances::LOOSE,
    )
    .expect("measured box is orthogonal within the loose tolerance");

    assert!(assert_symmetric(&cube, &measured));
    assert!(!assert_symmetric(&cube, &measured.offset(Ternion::new(0.0, 0.0, 2.0))));
}

#[test]
fn test_diamond_beside_cube() {
    let cube = unit_cube();
    let diamond = Obb::from_centre_and_extent(
        Ternion::new(1.6, 0.5, 0.5),
        Ternion::ONE,
        Some(Quaternion::from_axis_angle(Ternion::Z, FRAC_PI_4)),
    );
    assert!(assert_symmetric(&cube, &diamond));
    assert!(!assert_symmetric(&cube, &diamond.offset(Ternion::new(0.2, 0.0, 0.0))));
}

#[test]
fn test_orbiting_box_leaves_and_returns() {
    let central = Obb::from_centre_and_extent(Ternion::ZERO, Ternion::new(100.0, 30.0, 45.0), None);
    let other = Obb::from_corners(Ternion::ZERO, Ternion::new(69.0, 27.0, 30.0), None);
    assert!(assert_symmetric(&central, &other));

    let far = other.centred(Ternion::new(120.0, 0.0, 0.0));
    assert!(!assert_symmetric(&central, &far));

    let turned = central.rotate(Quaternion::from_axis_angle(Ternion::Y, degrees_to_radians(10.0)));
    assert!(!assert_symmetric(&turned, &far));
    let closer = other.centred(Ternion::new(80.0, 0.0, 0.0));
    assert!(assert_symmetric(&turned, &closer));
}

#[test]
fn test_parallel_tolerance_changes_axis_set_not_answer_for_aligned_boxes() {
    let cube = unit_cube();
    let twisted = cube
        .offset(Ternion::new(0.5, 0.5, 3.0))
        .rotate(Quaternion::from_axis_angle(Ternion::Z, 1e-8));
    let permissive = Tolerances::default().with_parallel_axis(0.1);

    assert!(!cube.intersects(&twisted));
    assert!(!cube.intersects_with(&twisted, &permissive));
}

#[test]
fn test_degenerate_boxes() {
    let cube = unit_cube();
    let point_inside = Obb::empty().offset(Ternion::splat(0.5));
    let point_outside = Obb::empty().offset(Ternion::splat(1.5));
    assert!(assert_symmetric(&cube, &point_inside));
    assert!(!assert_symmetric(&cube, &point_outside));

    let sheet = Obb::from_corners(Ternion::new(0.2, 0.2, 0.5), Ternion::new(0.8, 0.8, 0.5), None);
    assert!(assert_symmetric(&cube, &sheet));
    assert!(!assert_symmetric(&cube, &sheet.offset(Ternion::new(0.0, 0.0, 0.6))));

    let tilted_sheet = sheet.rotate(Quaternion::from_axis_angle(Ternion::X, 0.3));
    assert!(tilted_sheet.volume().abs() < 1e-12);
    assert!(assert_symmetric(&cube, &tilted_sheet));
}

#[test]
fn test_degenerate_pairs_far_apart() {
    for axis in Ternion::BASIS {
        let point = Obb::empty();
        assert!(!assert_symmetric(&point, &point.offset(axis * 100.0)), "points apart along {axis}");
        assert!(assert_symmetric(&point, &point));
    }

    let rotation = Quaternion::euler(0.4, -0.9, 1.3);
    let segment = Obb::from_corners(Ternion::ZERO, Ternion::new(10.0, 0.0, 0.0), None).rotate(rotation);
    let beside = segment.offset(rotation.rotate(Ternion::new(0.0, 50.0, 0.0)));
    assert!(!assert_symmetric(&segment, &beside));

    let point_on_segment = Obb::empty().centred(segment.centre());
    let point_off_segment = point_on_segment.offset(rotation.rotate(Ternion::new(0.0, 0.0, 1.0)));
    assert!(assert_symmetric(&segment, &point_on_segment));
    assert!(!assert_symmetric(&segment, &point_off_segment));
}
