// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Labeled voxel images.
//!
//! [`VoxelImage`] is the read-only interface a map extraction consumes: a
//! finite raster enumeration of labeled voxels plus a 6-neighbour query.
//! [`LabeledImage`] is the dense, box-shaped implementation.

use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::space::{Direction, Voxel};

/// Result of a neighbour query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Neighbor<L> {
    /// An adjacent voxel with its label.
    Voxel { position: Voxel, label: L },
    /// The query stepped outside the image.
    Boundary,
}

impl<L> Neighbor<L> {
    /// The neighbour's label, or `None` at the image boundary.
    pub fn label(&self) -> Option<&L> {
        match self {
            Neighbor::Voxel { label, .. } => Some(label),
            Neighbor::Boundary => None,
        }
    }

    pub fn position(&self) -> Option<&Voxel> {
        match self {
            Neighbor::Voxel { position, .. } => Some(position),
            Neighbor::Boundary => None,
        }
    }
}

/// A finite set of labeled voxels.
pub trait VoxelImage {
    /// Region label. Only equality and ordering are used.
    type Label: Clone + Ord + Debug;

    /// All voxels with their labels, in a fixed raster order.
    fn voxels(&self) -> Box<dyn Iterator<Item = (Voxel, Self::Label)> + '_>;

    /// The face-adjacent voxel of `voxel` in `direction`.
    fn neighbor(&self, voxel: &Voxel, direction: Direction) -> Neighbor<Self::Label>;

    /// Label of an arbitrary voxel, `None` outside the image.
    fn label_at(&self, voxel: &Voxel) -> Option<Self::Label>;

    /// Number of voxels enumerated by [`VoxelImage::voxels`].
    fn voxel_count(&self) -> usize {
        self.voxels().count()
    }
}

/// A dense image: one label per voxel of a [`Domain`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledImage<L> {
    domain: Domain,
    labels: Vec<L>,
}

impl<L: Clone> LabeledImage<L> {
    /// Creates an image over `domain` with every voxel set to `fill`.
    pub fn new(domain: Domain, fill: L) -> Self {
        let labels = vec![fill; domain.size()];
        Self { domain, labels }
    }

    /// Creates an image from raster-ordered labels.
    pub fn from_labels(domain: Domain, labels: Vec<L>) -> Result<Self> {
        if labels.len() != domain.size() {
            return Err(Error::SizeMismatch {
                expected: domain.size(),
                got: labels.len(),
            });
        }
        Ok(Self { domain, labels })
    }

    /// Creates an image by evaluating `f` at every voxel.
    pub fn from_fn(domain: Domain, mut f: impl FnMut(&Voxel) -> L) -> Self {
        let labels = domain.iter().map(|v| f(&v)).collect();
        Self { domain, labels }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn get(&self, voxel: &Voxel) -> Option<&L> {
        self.domain.index(voxel).map(|i| &self.labels[i])
    }

    /// Sets the label of a voxel.
    pub fn set(&mut self, voxel: &Voxel, label: L) -> Result<()> {
        let index = self.domain.index(voxel).ok_or(Error::OutOfDomain(*voxel))?;
        self.labels[index] = label;
        Ok(())
    }

    /// Sets `label` on every voxel for which `inside` holds and returns how
    /// many were written.
    pub(crate) fn relabel_where(
        &mut self,
        label: L,
        mut inside: impl FnMut(&Voxel) -> bool,
    ) -> usize {
        let mut written = 0;
        for (slot, voxel) in self.labels.iter_mut().zip(self.domain.iter()) {
            if inside(&voxel) {
                *slot = label.clone();
                written += 1;
            }
        }
        written
    }

    /// Sets every voxel to `label`.
    pub fn fill(&mut self, label: L) {
        self.labels.iter_mut().for_each(|l| *l = label.clone());
    }

    /// Labels in raster order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }
}

impl<L: Clone + Ord> LabeledImage<L> {
    /// The distinct labels present in the image.
    pub fn distinct_labels(&self) -> BTreeSet<L> {
        self.labels.iter().cloned().collect()
    }
}

impl<L: Clone + Ord + Debug> VoxelImage for LabeledImage<L> {
    type Label = L;

    fn voxels(&self) -> Box<dyn Iterator<Item = (Voxel, L)> + '_> {
        Box::new(self.domain.iter().zip(self.labels.iter().cloned()))
    }

    fn neighbor(&self, voxel: &Voxel, direction: Direction) -> Neighbor<L> {
        let position = direction.step(voxel);
        match self.get(&position) {
            Some(label) => Neighbor::Voxel {
                position,
                label: label.clone(),
            },
            None => Neighbor::Boundary,
        }
    }

    fn label_at(&self, voxel: &Voxel) -> Option<L> {
        self.get(voxel).cloned()
    }

    fn voxel_count(&self) -> usize {
        self.labels.len()
    }
}
