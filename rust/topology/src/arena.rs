// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based dart storage.
//!
//! The [`GMap`] is the central owner of all topology data. Each dart lives in
//! a slot map with a stable, generational key and carries its `n + 1`
//! involution images. A dart whose β_i image is itself is *free* on
//! dimension `i`; a freshly allocated dart is free on every dimension.
//!
//! ## Cells
//!
//! Nothing here stores vertices, edges or faces. An `i`-cell is the orbit of
//! a dart under every β_j with `j != i` (see [`crate::traversal`]), so cells
//! appear, merge and split implicitly as links change. Attributes attached
//! to cells are stored alongside the darts and follow those changes.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::{smallvec, SmallVec};

use crate::attributes::AttributeValue;
use crate::error::{Error, Result};
use crate::keys::DartId;

/// Data stored for a dart: its image under each involution.
#[derive(Debug, Clone)]
pub struct DartData {
    pub(crate) beta: SmallVec<[DartId; 4]>,
}

/// An n-dimensional generalized map with label type `L` for its attributes.
///
/// # Example
///
/// ```
/// use topomap_topology::GMap;
///
/// let mut map: GMap = GMap::new(2);
/// let a = map.allocate();
/// let b = map.allocate();
/// map.link(0, a, b).unwrap();
///
/// assert_eq!(map.dart_count(), 2);
/// assert_eq!(map.image(0, a), b);
/// assert_eq!(map.image(1, a), a);
/// ```
#[derive(Debug, Clone)]
pub struct GMap<L = u32> {
    pub(crate) dimension: usize,
    pub(crate) darts: SlotMap<DartId, DartData>,
    // One table per cell dimension, keyed by the cell's smallest dart.
    pub(crate) attributes: Vec<FxHashMap<DartId, AttributeValue<L>>>,
}

impl<L> GMap<L> {
    /// Creates an empty map of the given dimension (3 for volumes).
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            darts: SlotMap::with_key(),
            attributes: (0..=dimension).map(|_| FxHashMap::default()).collect(),
        }
    }

    /// Highest involution index.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    // --- Dart operations ---

    /// Adds a dart that is free on every dimension.
    pub fn allocate(&mut self) -> DartId {
        let slots = self.dimension + 1;
        self.darts.insert_with_key(|key| DartData {
            beta: smallvec![key; slots],
        })
    }

    /// Removes a dart.
    ///
    /// The dart must be alive and free on every dimension; otherwise the
    /// call fails with [`Error::InvalidDart`] and nothing changes.
    pub fn free(&mut self, dart: DartId) -> Result<()> {
        let data = self.darts.get(dart).ok_or(Error::InvalidDart(dart))?;
        if data.beta.iter().any(|&b| b != dart) {
            return Err(Error::InvalidDart(dart));
        }
        self.darts.remove(dart);
        for table in &mut self.attributes {
            table.remove(&dart);
        }
        Ok(())
    }

    /// Returns `true` if the dart is alive.
    #[inline]
    pub fn contains(&self, dart: DartId) -> bool {
        self.darts.contains_key(dart)
    }

    /// Returns the number of live darts.
    pub fn dart_count(&self) -> usize {
        self.darts.len()
    }

    /// Returns `true` if the map has no darts.
    pub fn is_empty(&self) -> bool {
        self.darts.is_empty()
    }

    /// Iterates over the live darts in storage order.
    pub fn darts(&self) -> impl Iterator<Item = DartId> + '_ {
        self.darts.keys()
    }

    // --- Precondition helpers ---

    pub(crate) fn check_dart(&self, dart: DartId) -> Result<()> {
        if self.darts.contains_key(dart) {
            Ok(())
        } else {
            Err(Error::InvalidDart(dart))
        }
    }

    pub(crate) fn check_dim(&self, dim: usize) -> Result<()> {
        if dim <= self.dimension {
            Ok(())
        } else {
            Err(Error::InvalidDimension {
                dim,
                max: self.dimension,
            })
        }
    }
}

impl<L> Default for GMap<L> {
    /// A 3-map, the dimension used for volume images.
    fn default() -> Self {
        Self::new(3)
    }
}
