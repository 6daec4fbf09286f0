//! Behavioural properties of the box overlap test.

use std::f64::consts::{FRAC_PI_4, TAU};

use draftcull_math::{Point3, Transform, Vec3};
use draftcull_obb::{intersects, separated_by_faces, BoundingBox, LocalBounds};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn aabb(min: [f64; 3], max: [f64; 3]) -> BoundingBox {
    BoundingBox::from_bounds(
        Point3::new(min[0], min[1], min[2]),
        Point3::new(max[0], max[1], max[2]),
    )
}

fn unit() -> BoundingBox {
    aabb([0.0; 3], [1.0; 3])
}

fn centered(half: [f64; 3], transform: &Transform) -> BoundingBox {
    let h = Point3::new(half[0], half[1], half[2]);
    BoundingBox::from_local(&LocalBounds::new(-h, h), transform)
}

/// Largest gap between the projections of the two boxes over every face
/// normal and edge cross product, skipping near-zero axes. Positive when the
/// hulls are apart.
fn separation_gap(a: &BoundingBox, b: &BoundingBox) -> f64 {
    let mut axes: Vec<Vec3> = Vec::with_capacity(156);
    for f in a.faces().iter().chain(b.faces()) {
        axes.push(f.normal);
    }
    for ea in a.edges() {
        for eb in b.edges() {
            axes.push(ea.direction.cross(&eb.direction));
        }
    }

    let span = |bbox: &BoundingBox, axis: &Vec3| {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in bbox.vertices() {
            let t = axis.dot(&v.coords);
            lo = lo.min(t);
            hi = hi.max(t);
        }
        (lo, hi)
    };

    let mut gap = f64::NEG_INFINITY;
    for axis in &axes {
        let len = axis.norm();
        if len < 1e-9 {
            continue;
        }
        let (a_lo, a_hi) = span(a, axis);
        let (b_lo, b_hi) = span(b, axis);
        gap = gap.max((b_lo - a_hi) / len).max((a_lo - b_hi) / len);
    }
    gap
}

fn random_box(rng: &mut StdRng) -> BoundingBox {
    let half = [
        rng.gen_range(0.2..1.5),
        rng.gen_range(0.2..1.5),
        rng.gen_range(0.2..1.5),
    ];
    let place = Transform::translation(
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-3.0..3.0),
    )
    .then(&Transform::rotation_z(rng.gen_range(0.0..TAU)))
    .then(&Transform::rotation_y(rng.gen_range(0.0..TAU)))
    .then(&Transform::rotation_x(rng.gen_range(0.0..TAU)));
    centered(half, &place)
}

fn assert_symmetric(a: &BoundingBox, b: &BoundingBox) -> bool {
    let ab = intersects(a, b);
    assert_eq!(ab, intersects(b, a), "verdict depends on argument order");
    ab
}

#[test]
fn test_disjoint_cubes() {
    let b = aabb([2.0; 3], [3.0; 3]);
    assert!(!assert_symmetric(&unit(), &b));
}

#[test]
fn test_small_overlap() {
    let b = aabb([0.9; 3], [1.9; 3]);
    assert!(assert_symmetric(&unit(), &b));
}

#[test]
fn test_separated_along_single_axis() {
    // overlapping in y and z, apart in x
    let b = aabb([1.01, 0.2, 0.2], [2.0, 0.8, 0.8]);
    assert!(!assert_symmetric(&unit(), &b));
}

#[test]
fn test_contained_box() {
    let inner = aabb([0.25; 3], [0.75; 3]);
    assert!(assert_symmetric(&unit(), &inner));
}

#[test]
fn test_shared_face_counts_as_overlap() {
    let b = aabb([1.0, 0.0, 0.0], [2.0, 1.0, 1.0]);
    assert!(assert_symmetric(&unit(), &b));
}

#[test]
fn test_shared_edge_counts_as_overlap() {
    let b = aabb([1.0, 1.0, 0.0], [2.0, 2.0, 1.0]);
    assert!(assert_symmetric(&unit(), &b));
}

#[test]
fn test_shared_vertex_counts_as_overlap() {
    let b = aabb([1.0; 3], [2.0; 3]);
    assert!(assert_symmetric(&unit(), &b));
}

#[test]
fn test_reflexive() {
    assert!(intersects(&unit(), &unit()));
    let tilted = centered(
        [0.5, 1.0, 1.5],
        &Transform::translation(3.0, -2.0, 1.0)
            .then(&Transform::rotation_z(0.4))
            .then(&Transform::rotation_x(1.1)),
    );
    assert!(intersects(&tilted, &tilted));
}

/// A cube tipped 45 degrees about y and then turned 45 degrees about z, so
/// one of its edges points straight at a vertical edge of an axis-aligned
/// cube. Their AABBs overlap and no face normal separates them; only the
/// cross product of the two edges does.
#[test]
fn test_edge_axis_needed_for_rotated_box() {
    let a = centered([1.0; 3], &Transform::identity());
    let offset = 3.2 / 2f64.sqrt();
    let b = centered(
        [1.0; 3],
        &Transform::translation(offset, offset, 0.0)
            .then(&Transform::rotation_z(FRAC_PI_4))
            .then(&Transform::rotation_y(FRAC_PI_4)),
    );

    // the axis-aligned bounds of b reach into a
    let (mut b_min_x, mut b_min_y) = (f64::INFINITY, f64::INFINITY);
    for v in b.vertices() {
        b_min_x = b_min_x.min(v.x);
        b_min_y = b_min_y.min(v.y);
    }
    assert!(b_min_x < 1.0 && b_min_y < 1.0);

    assert!(!separated_by_faces(&a, &b));
    assert!(!assert_symmetric(&a, &b));

    // pushed closer along the same diagonal the hulls do meet
    let offset = 2.4 / 2f64.sqrt();
    let closer = centered(
        [1.0; 3],
        &Transform::translation(offset, offset, 0.0)
            .then(&Transform::rotation_z(FRAC_PI_4))
            .then(&Transform::rotation_y(FRAC_PI_4)),
    );
    assert!(assert_symmetric(&a, &closer));
}

#[test]
fn test_single_axis_rotation_is_decided_by_faces() {
    let a = centered([1.0; 3], &Transform::identity());
    let b = centered(
        [1.0; 3],
        &Transform::translation(2.6, 2.6, 0.0).then(&Transform::rotation_z(FRAC_PI_4)),
    );
    assert!(separated_by_faces(&a, &b));
    assert!(!assert_symmetric(&a, &b));
}

#[test]
fn test_symmetry_over_rotated_placements() {
    let a = centered([1.0; 3], &Transform::identity());
    let mut overlaps = 0;
    let mut disjoint = 0;
    for k in 0..5 {
        let turn = Transform::rotation_z(0.3 * k as f64 + 0.1)
            .then(&Transform::rotation_x(0.5 * k as f64 + 0.2));
        for distance in [0.5, 1.5, 2.5, 3.5] {
            for dir in [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]] {
                let norm: f64 = dir[0] * dir[0] + dir[1] * dir[1] + dir[2] * dir[2];
                let s = distance / norm.sqrt();
                let place = Transform::translation(dir[0] * s, dir[1] * s, dir[2] * s).then(&turn);
                let b = centered([0.5, 1.0, 1.5], &place);
                if assert_symmetric(&a, &b) {
                    overlaps += 1;
                } else {
                    disjoint += 1;
                }
                assert!(intersects(&b, &b));
            }
        }
    }
    assert!(overlaps > 0 && disjoint > 0);
}

#[test]
fn test_collapsed_boxes() {
    let inside = BoundingBox::new([Point3::new(0.2, 0.3, 0.1); 8]);
    assert!(assert_symmetric(&unit(), &inside));

    let outside = BoundingBox::new([Point3::new(5.0, 0.0, 0.0); 8]);
    assert!(!assert_symmetric(&unit(), &outside));

    let flat_inside = aabb([0.25, 0.25, 0.5], [0.75, 0.75, 0.5]);
    assert!(assert_symmetric(&unit(), &flat_inside));

    let flat_outside = aabb([3.0, 0.0, 0.5], [4.0, 1.0, 0.5]);
    assert!(!assert_symmetric(&unit(), &flat_outside));
}

#[test]
fn test_mirrored_placement_behaves_like_plain() {
    let bounds = LocalBounds::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    let mirrored = BoundingBox::from_local(
        &bounds,
        &Transform::translation(3.0, 0.0, 0.0).then(&Transform::scale(-1.0, 1.0, 1.0)),
    );
    // mirrored box spans x in [2, 3]
    assert!(mirrored.validate().is_ok());
    assert!(!assert_symmetric(&unit(), &mirrored));
    assert!(assert_symmetric(&aabb([2.5, 0.0, 0.0], [4.0, 1.0, 1.0]), &mirrored));
}

#[test]
fn test_random_rotated_pairs() {
    let mut rng = StdRng::seed_from_u64(0x0bb5_5a7e);
    let samples = 2000;
    let mut order_dependent = 0;
    let mut false_overlaps = 0;
    for _ in 0..samples {
        let a = random_box(&mut rng);
        let b = random_box(&mut rng);
        let ab = intersects(&a, &b);
        let ba = intersects(&b, &a);
        let gap = separation_gap(&a, &b);

        // a separation verdict is never wrong
        if !ab || !ba {
            assert!(gap > -1e-9, "overlapping pair reported apart, gap {gap}");
        }
        if ab != ba {
            order_dependent += 1;
        }
        if (ab || ba) && gap > 1e-6 {
            false_overlaps += 1;
        }
    }
    assert!(
        order_dependent * 100 <= samples * 3,
        "{order_dependent} of {samples} pairs depend on argument order"
    );
    assert!(
        false_overlaps * 100 <= samples * 3,
        "{false_overlaps} of {samples} pairs reported overlapping while apart"
    );
}

#[rustfmt::skip]
const NEAR_EDGE_A: [[f64; 3]; 8] = [
    [1.0631352279788464, 3.2495725278964454, 0.1981238699274921],
    [-0.7082390982662032, 3.9847742725042736, 0.1838570854870616],
    [-1.2170582099376919, 2.761392095727832, 0.31537939434090667],
    [0.5543161163073578, 2.026190351120004, 0.3296461787813372],
    [0.9827682094843748, 3.0059264864799284, -2.379115705799701],
    [-0.7886061167606748, 3.7411282310877567, -2.3933824902401315],
    [-1.2974252284321635, 2.5177460543113153, -2.2618601813862864],
    [0.4739490978128862, 1.782544309703487, -2.247593396945856],
];

#[rustfmt::skip]
const NEAR_EDGE_B: [[f64; 3]; 8] = [
    [-2.5817690948693532, 0.4428135581172694, -1.2190490696743104],
    [-1.805978558287408, 0.6086251430086638, -0.5034958150379799],
    [-3.063099039446757, 1.3930099908586235, 0.677691011188573],
    [-3.838889576028702, 1.2271984059672292, -0.03786224344775746],
    [-2.166787182198793, 2.505023025000903, -2.146830833621306],
    [-1.3909966456168483, 2.6708346098922977, -1.4312775789849752],
    [-2.648117126776197, 3.4552194577422575, -0.2500907527584225],
    [-3.4239076633581425, 3.2894078728508633, -0.9656440073947529],
];

fn from_coords(coords: [[f64; 3]; 8]) -> BoundingBox {
    BoundingBox::new(coords.map(|c| Point3::new(c[0], c[1], c[2])))
}

/// Two rotated boxes about 0.13 apart that only an edge axis separates. With
/// the arguments swapped, rounding along the edge of the first argument hides
/// that axis and the pair is reported as overlapping.
#[test]
fn test_order_dependent_pair() {
    let a = from_coords(NEAR_EDGE_A);
    let b = from_coords(NEAR_EDGE_B);
    assert!(a.validate().is_ok());
    assert!(b.validate().is_ok());
    assert!(separation_gap(&a, &b) > 0.13);
    assert!(!separated_by_faces(&a, &b));

    assert!(!intersects(&a, &b));
    assert!(intersects(&b, &a));
}
