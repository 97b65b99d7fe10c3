// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Digital space primitives: voxel coordinates, the six axis directions and
//! Khalimsky (doubled) coordinates.
//!
//! In Khalimsky coordinates a voxel `v` sits at `2v + 1` (all odd), and its
//! boundary elements are reached by adding unit offsets: a surfel has one
//! even coordinate, a linel two, a pointel three. Two neighbouring voxels
//! therefore compute the same coordinates for the boundary elements they
//! share, which makes these coordinates a canonical, un-oriented key.

use nalgebra::{Point3, Vector3};

/// Integer voxel position.
pub type Voxel = Point3<i64>;

/// Doubled (Khalimsky) coordinates of a cubical cell of any dimension.
pub type KCoords = Point3<i64>;

/// One of the six signed axis directions of the cubical grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    NegX,
    PosX,
    NegY,
    PosY,
    NegZ,
    PosZ,
}

impl Direction {
    /// All directions, in axis order with the negative side first.
    pub const ALL: [Direction; 6] = [
        Direction::NegX,
        Direction::PosX,
        Direction::NegY,
        Direction::PosY,
        Direction::NegZ,
        Direction::PosZ,
    ];

    /// Builds the direction along `axis` (0, 1 or 2) with the given sign.
    ///
    /// # Panics
    ///
    /// Panics if `axis > 2`.
    pub fn new(axis: usize, positive: bool) -> Self {
        match (axis, positive) {
            (0, false) => Direction::NegX,
            (0, true) => Direction::PosX,
            (1, false) => Direction::NegY,
            (1, true) => Direction::PosY,
            (2, false) => Direction::NegZ,
            (2, true) => Direction::PosZ,
            _ => panic!("axis {axis} out of range for a 3D grid"),
        }
    }

    #[inline]
    pub fn axis(self) -> usize {
        self as usize / 2
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self as usize % 2 == 1
    }

    /// `+1` for a positive direction, `-1` otherwise.
    #[inline]
    pub fn sign(self) -> i64 {
        if self.is_positive() {
            1
        } else {
            -1
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        Direction::new(self.axis(), !self.is_positive())
    }

    /// Unit offset vector.
    pub fn offset(self) -> Vector3<i64> {
        let mut v = Vector3::zeros();
        v[self.axis()] = self.sign();
        v
    }

    /// The voxel one step away in this direction.
    #[inline]
    pub fn step(self, voxel: &Voxel) -> Voxel {
        *voxel + self.offset()
    }

    /// The four directions orthogonal to this one.
    pub fn perpendicular(self) -> [Direction; 4] {
        let a = (self.axis() + 1) % 3;
        let b = (self.axis() + 2) % 3;
        [
            Direction::new(a, false),
            Direction::new(a, true),
            Direction::new(b, false),
            Direction::new(b, true),
        ]
    }

    /// The remaining axis when `self` and `other` lie on two distinct axes.
    pub fn third_axis(self, other: Direction) -> Option<usize> {
        if self.axis() == other.axis() {
            return None;
        }
        Some(3 - self.axis() - other.axis())
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::NegX => "-x",
            Direction::PosX => "+x",
            Direction::NegY => "-y",
            Direction::PosY => "+y",
            Direction::NegZ => "-z",
            Direction::PosZ => "+z",
        };
        f.write_str(name)
    }
}

/// Khalimsky coordinates of a voxel.
#[inline]
pub fn voxel_kcoords(voxel: &Voxel) -> KCoords {
    Point3::new(2 * voxel.x + 1, 2 * voxel.y + 1, 2 * voxel.z + 1)
}

/// Khalimsky coordinates of the boundary element of `voxel` reached by
/// moving half a step along each of `directions`.
///
/// One direction gives a surfel, two a linel, three a pointel.
pub fn boundary_kcoords(voxel: &Voxel, directions: &[Direction]) -> KCoords {
    directions
        .iter()
        .fold(voxel_kcoords(voxel), |k, d| k + d.offset())
}

/// Topological dimension of a Khalimsky cell: the number of odd coordinates.
pub fn kcell_dimension(k: &KCoords) -> usize {
    k.iter().filter(|c| **c % 2 != 0).count()
}

/// Grid corner of a pointel, or `None` if `k` is not a pointel.
pub fn pointel_corner(k: &KCoords) -> Option<Point3<i64>> {
    if kcell_dimension(k) != 0 {
        return None;
    }
    Some(Point3::new(k.x / 2, k.y / 2, k.z / 2))
}

/// Component-wise minimum (lattice meet).
pub fn inf(a: &Point3<i64>, b: &Point3<i64>) -> Point3<i64> {
    Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

/// Component-wise maximum (lattice join).
pub fn sup(a: &Point3<i64>, b: &Point3<i64>) -> Point3<i64> {
    Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

/// `true` if `a` is below `b` on every axis.
pub fn is_lower(a: &Point3<i64>, b: &Point3<i64>) -> bool {
    a.x <= b.x && a.y <= b.y && a.z <= b.z
}

/// L1 norm of an integer vector.
pub fn norm1(v: &Vector3<i64>) -> i64 {
    v.x.abs() + v.y.abs() + v.z.abs()
}

/// L-infinity norm of an integer vector.
pub fn norm_infinity(v: &Vector3<i64>) -> i64 {
    v.x.abs().max(v.y.abs()).max(v.z.abs())
}

/// Squared L2 norm of an integer vector, exact.
pub fn norm2_squared(v: &Vector3<i64>) -> i64 {
    v.x * v.x + v.y * v.y + v.z * v.z
}
