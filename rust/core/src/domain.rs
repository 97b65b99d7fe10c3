// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned box domains of voxels with raster enumeration.

use nalgebra::Point3;

use crate::error::{Error, Result};
use crate::space::{inf, is_lower, sup, Voxel};

/// A box of voxels between two corners, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    lower: Voxel,
    upper: Voxel,
}

impl Domain {
    /// Creates the domain spanned by `lower` and `upper` (inclusive).
    ///
    /// Fails with [`Error::EmptyDomain`] if `lower` is above `upper` on any axis.
    pub fn new(lower: Voxel, upper: Voxel) -> Result<Self> {
        for axis in 0..3 {
            if lower[axis] > upper[axis] {
                return Err(Error::EmptyDomain(axis));
            }
        }
        Ok(Self { lower, upper })
    }

    /// Creates the domain `[0, sx) x [0, sy) x [0, sz)`.
    pub fn from_size(sx: usize, sy: usize, sz: usize) -> Result<Self> {
        let extent = [sx, sy, sz];
        if let Some(axis) = extent.iter().position(|&s| s == 0) {
            return Err(Error::EmptyDomain(axis));
        }
        Self::new(
            Point3::origin(),
            Point3::new(sx as i64 - 1, sy as i64 - 1, sz as i64 - 1),
        )
    }

    pub fn lower(&self) -> &Voxel {
        &self.lower
    }

    pub fn upper(&self) -> &Voxel {
        &self.upper
    }

    /// Number of voxels along each axis.
    pub fn extent(&self) -> [usize; 3] {
        [
            (self.upper.x - self.lower.x + 1) as usize,
            (self.upper.y - self.lower.y + 1) as usize,
            (self.upper.z - self.lower.z + 1) as usize,
        ]
    }

    /// Total number of voxels.
    pub fn size(&self) -> usize {
        self.extent().iter().product()
    }

    #[inline]
    pub fn contains(&self, voxel: &Voxel) -> bool {
        is_lower(&self.lower, voxel) && is_lower(voxel, &self.upper)
    }

    /// Linear raster index of a voxel (x fastest, then y, then z).
    pub fn index(&self, voxel: &Voxel) -> Option<usize> {
        if !self.contains(voxel) {
            return None;
        }
        let [ex, ey, _] = self.extent();
        let local = *voxel - self.lower;
        Some(local.x as usize + ex * (local.y as usize + ey * local.z as usize))
    }

    /// Voxel at a linear raster index.
    pub fn voxel_at(&self, index: usize) -> Option<Voxel> {
        if index >= self.size() {
            return None;
        }
        let [ex, ey, _] = self.extent();
        let x = index % ex;
        let y = (index / ex) % ey;
        let z = index / (ex * ey);
        Some(self.lower + nalgebra::Vector3::new(x as i64, y as i64, z as i64))
    }

    /// Smallest domain containing both `self` and `other`.
    pub fn union(&self, other: &Domain) -> Domain {
        Domain {
            lower: inf(&self.lower, &other.lower),
            upper: sup(&self.upper, &other.upper),
        }
    }

    /// Voxels in raster order.
    pub fn iter(&self) -> DomainIter<'_> {
        DomainIter {
            domain: self,
            next: 0,
            size: self.size(),
        }
    }
}

/// Raster-order iterator over the voxels of a [`Domain`].
pub struct DomainIter<'a> {
    domain: &'a Domain,
    next: usize,
    size: usize,
}

impl Iterator for DomainIter<'_> {
    type Item = Voxel;

    fn next(&mut self) -> Option<Voxel> {
        if self.next >= self.size {
            return None;
        }
        let voxel = self.domain.voxel_at(self.next);
        self.next += 1;
        voxel
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DomainIter<'_> {}
