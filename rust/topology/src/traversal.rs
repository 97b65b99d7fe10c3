// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Orbit traversal and cell enumeration.
//!
//! An orbit is the set of darts reachable from a seed through a chosen set
//! of involutions. Orbits are produced lazily in breadth-first order; each
//! dart is yielded once and the seed comes first. Cells are orbits, and a
//! cell's representative is its smallest dart.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::arena::{DartData, GMap};
use crate::involution::Involutions;
use crate::keys::{cell_dims, DartId, DimSet};

/// Lazy breadth-first orbit of a dart.
pub struct Orbit<'a, M: ?Sized> {
    map: &'a M,
    dims: DimSet,
    queue: VecDeque<DartId>,
    visited: FxHashSet<DartId>,
}

impl<'a, M: Involutions + ?Sized> Orbit<'a, M> {
    /// Starts the orbit of `seed` under the involutions in `dims`.
    pub fn new(map: &'a M, seed: DartId, dims: &[usize]) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(seed);
        Self {
            map,
            dims: dims.iter().copied().collect(),
            queue: VecDeque::from([seed]),
            visited,
        }
    }
}

impl<M: Involutions + ?Sized> Iterator for Orbit<'_, M> {
    type Item = DartId;

    fn next(&mut self) -> Option<DartId> {
        let dart = self.queue.pop_front()?;
        for &i in &self.dims {
            let next = self.map.beta(i, dart);
            if self.visited.insert(next) {
                self.queue.push_back(next);
            }
        }
        Some(dart)
    }
}

/// Smallest dart of an orbit.
pub(crate) fn orbit_min<M: Involutions + ?Sized>(map: &M, seed: DartId, dims: &[usize]) -> DartId {
    Orbit::new(map, seed, dims).min().unwrap_or(seed)
}

impl<L> GMap<L> {
    /// Lazily enumerates the orbit of `seed` under the given involutions.
    ///
    /// A dead seed yields only itself.
    pub fn orbit(&self, seed: DartId, dims: &[usize]) -> Orbit<'_, Self> {
        Orbit::new(self, seed, dims)
    }

    /// The darts of the `i`-cell containing `dart`.
    pub fn cell(&self, dart: DartId, i: usize) -> Orbit<'_, Self> {
        Orbit::new(self, dart, &cell_dims(i, self.dimension))
    }

    /// Returns `true` if `d2` lies in the orbit of `d1` under `dims`.
    pub fn same_orbit(&self, d1: DartId, d2: DartId, dims: &[usize]) -> bool {
        d1 == d2 || self.orbit(d1, dims).any(|d| d == d2)
    }

    /// Returns `true` if both darts belong to the same `i`-cell.
    pub fn same_cell(&self, d1: DartId, d2: DartId, i: usize) -> bool {
        self.same_orbit(d1, d2, &cell_dims(i, self.dimension))
    }

    /// Canonical representative (smallest dart) of an orbit.
    pub fn representative(&self, dart: DartId, dims: &[usize]) -> DartId {
        orbit_min(self, dart, dims)
    }

    /// Canonical representative of the `i`-cell containing `dart`.
    pub fn cell_representative(&self, dart: DartId, i: usize) -> DartId {
        self.representative(dart, &cell_dims(i, self.dimension))
    }

    /// Lazily enumerates the `i`-cells, yielding one representative each.
    ///
    /// Yields nothing when `i` exceeds the map dimension.
    pub fn cells(&self, i: usize) -> Cells<'_, L> {
        Cells {
            map: self,
            dims: (i <= self.dimension).then(|| cell_dims(i, self.dimension)),
            keys: self.darts.keys(),
            seen: FxHashSet::default(),
        }
    }
}

/// Iterator over the cells of one dimension.
pub struct Cells<'a, L> {
    map: &'a GMap<L>,
    dims: Option<DimSet>,
    keys: slotmap::basic::Keys<'a, DartId, DartData>,
    seen: FxHashSet<DartId>,
}

impl<L> Iterator for Cells<'_, L> {
    type Item = DartId;

    fn next(&mut self) -> Option<DartId> {
        let dims = self.dims.as_ref()?;
        for dart in self.keys.by_ref() {
            if self.seen.contains(&dart) {
                continue;
            }
            let mut rep = dart;
            for d in Orbit::new(self.map, dart, dims) {
                rep = rep.min(d);
                self.seen.insert(d);
            }
            return Some(rep);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A square face of a 2-map: four edges, two darts each.
    fn square() -> (GMap, Vec<DartId>) {
        let mut map: GMap = GMap::new(2);
        let darts: Vec<DartId> = (0..8).map(|_| map.allocate()).collect();
        for k in 0..4 {
            map.link(0, darts[2 * k], darts[2 * k + 1]).unwrap();
            map.link(1, darts[2 * k + 1], darts[(2 * k + 2) % 8]).unwrap();
        }
        (map, darts)
    }

    #[test]
    fn orbit_contains_seed_first() {
        let (map, darts) = square();
        let orbit: Vec<DartId> = map.orbit(darts[3], &[0, 1]).collect();
        assert_eq!(orbit[0], darts[3]);
        assert_eq!(orbit.len(), 8);
    }

    #[test]
    fn orbit_is_idempotent() {
        let (map, darts) = square();
        let first: FxHashSet<DartId> = map.orbit(darts[0], &[0]).collect();
        for &d in &first {
            let again: FxHashSet<DartId> = map.orbit(d, &[0]).collect();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn cells_of_a_square() {
        let (map, darts) = square();
        assert_eq!(map.cells(0).count(), 4);
        assert_eq!(map.cells(1).count(), 4);
        assert_eq!(map.cells(2).count(), 1);
        assert_eq!(map.cells(3).count(), 0);
        assert!(map.same_cell(darts[0], darts[1], 1));
        assert!(!map.same_cell(darts[0], darts[2], 1));
        assert!(map.same_cell(darts[1], darts[2], 0));
    }

    #[test]
    fn representative_is_orbit_minimum() {
        let (map, darts) = square();
        let edge_rep = map.cell_representative(darts[5], 1);
        assert_eq!(edge_rep, darts[4].min(darts[5]));
        let reps: Vec<DartId> = map.cells(2).collect();
        assert_eq!(reps, vec![darts.iter().copied().min().unwrap()]);
    }

    #[test]
    fn dead_seed_yields_itself() {
        let mut map: GMap = GMap::new(1);
        let d = map.allocate();
        map.free(d).unwrap();
        assert_eq!(map.orbit(d, &[0, 1]).collect::<Vec<_>>(), vec![d]);
    }

    #[test]
    fn orbit_over_empty_dims_is_singleton() {
        let (map, darts) = square();
        assert_eq!(map.orbit(darts[2], &[]).count(), 1);
        assert!(map.same_orbit(darts[2], darts[2], &[]));
    }
}
