// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Euler operators: checked edits that keep the map a valid G-map.
//!
//! Every operator validates all of its preconditions before touching a
//! link, so a failed call leaves the map exactly as it was. Attributes of
//! cells that merge or lose darts are moved to the new representatives.
//!
//! ## Removal and contraction
//!
//! Removing an `i`-cell `C` deletes its darts and reconnects each outside
//! dart `b` that was β_i-linked into `C` with
//! `β'_i(b) = (β_i β_{i+1})^k β_i(b)`, the first image that leaves `C`.
//! The two `(i+1)`-cells on either side of `C` become one. Contraction is
//! the dual edit: the same walk with β_{i-1}, merging the two `(i-1)`-cells
//! at the ends of `C`.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::arena::GMap;
use crate::error::{Error, Result};
use crate::involution::Involutions;
use crate::keys::{cell_dims, cell_name, distant_dims, DartId};
use crate::traversal::Orbit;

/// Read-through view of a map with planned β_dim links applied.
struct PlannedLinks<'a, M: ?Sized> {
    map: &'a M,
    dim: usize,
    plan: &'a FxHashMap<DartId, DartId>,
}

impl<M: Involutions + ?Sized> Involutions for PlannedLinks<'_, M> {
    fn dimension(&self) -> usize {
        self.map.dimension()
    }

    fn beta(&self, i: usize, dart: DartId) -> DartId {
        if i == self.dim {
            if let Some(&target) = self.plan.get(&dart) {
                return target;
            }
        }
        self.map.beta(i, dart)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Splice {
    Removal,
    Contraction,
}

impl<L: Clone + PartialEq> GMap<L> {
    /// Sews the orbit of `d1` to the orbit of `d2` on dimension `i`.
    ///
    /// Both orbits are taken under the β_j with `|i - j| >= 2` and walked in
    /// parallel from `d1` and `d2`; every pair of corresponding darts gets
    /// β_i-linked, so the commutation law holds once the sew completes.
    /// Fails with [`Error::NotFree`] if a dart of either orbit is already
    /// β_i-linked, with [`Error::InvariantViolation`] if the two orbits are
    /// not isomorphic (including which darts are β_j-free), and with
    /// [`Error::AttributeConflict`] if two merging cells carry different
    /// values. Nothing is changed on failure.
    pub fn sew(&mut self, i: usize, d1: DartId, d2: DartId) -> Result<()> {
        self.check_dim(i)?;
        self.check_dart(d1)?;
        self.check_dart(d2)?;
        if d1 == d2 {
            return Err(Error::InvalidDart(d1));
        }
        if !self.is_free(i, d1) {
            return Err(Error::NotFree { dim: i, dart: d1 });
        }
        if !self.is_free(i, d2) {
            return Err(Error::NotFree { dim: i, dart: d2 });
        }
        let pairs = self.sewing_pairs(i, d1, d2)?;
        for k in 0..=self.dimension {
            if k == i || self.attributes[k].is_empty() {
                continue;
            }
            for &(x, y) in &pairs {
                let (rx, ry) = (self.cell_representative(x, k), self.cell_representative(y, k));
                self.check_merge(k, rx, ry)?;
            }
        }

        let touched: Vec<DartId> = pairs.iter().flat_map(|&(x, y)| [x, y]).collect();
        let pending = self.detach_attributes(&touched, &FxHashSet::default());
        for &(x, y) in &pairs {
            self.link(i, x, y)?;
        }
        self.reattach_attributes(pending);
        tracing::trace!(dim = i, %d1, %d2, links = pairs.len(), "sewed darts");
        Ok(())
    }

    /// Pairs the orbits of `d1` and `d2` under the β_j with `|i - j| >= 2`,
    /// each link listed once.
    fn sewing_pairs(&self, i: usize, d1: DartId, d2: DartId) -> Result<Vec<(DartId, DartId)>> {
        let dims = distant_dims(i, self.dimension);
        let mismatch = |x: DartId, y: DartId| {
            Error::InvariantViolation(format!(
                "sewing {d1} to {d2} on dimension {i}: orbits differ at {x} and {y}"
            ))
        };
        let mut forward: FxHashMap<DartId, DartId> = FxHashMap::default();
        let mut backward: FxHashMap<DartId, DartId> = FxHashMap::default();
        forward.insert(d1, d2);
        backward.insert(d2, d1);
        let mut stack = vec![(d1, d2)];
        while let Some((x, y)) = stack.pop() {
            if x == y {
                return Err(mismatch(x, y));
            }
            for dart in [x, y] {
                if !self.is_free(i, dart) {
                    return Err(Error::NotFree { dim: i, dart });
                }
            }
            for &j in &dims {
                let (xj, yj) = (self.beta(j, x), self.beta(j, y));
                if (xj == x) != (yj == y) {
                    return Err(mismatch(x, y));
                }
                match (forward.get(&xj), backward.get(&yj)) {
                    (None, None) => {
                        forward.insert(xj, yj);
                        backward.insert(yj, xj);
                        stack.push((xj, yj));
                    }
                    (Some(&fx), Some(&by)) if fx == yj && by == xj => {}
                    _ => return Err(mismatch(xj, yj)),
                }
            }
        }
        // Overlapping orbits must pair up symmetrically.
        let mut pairs = Vec::with_capacity(forward.len());
        for (&x, &y) in &forward {
            match forward.get(&y) {
                Some(&back) if back != x => return Err(mismatch(y, back)),
                Some(_) if y < x => {}
                _ => pairs.push((x, y)),
            }
        }
        pairs.sort_unstable();
        Ok(pairs)
    }

    /// Breaks the β_i links around `dart`.
    ///
    /// Every dart of the orbit of `dart` under the β_j with `|i - j| >= 2`
    /// is unlinked from its β_i partner, so both sides remain valid maps.
    /// In particular `sew(i, a, b)` followed by `unsew(i, a)` frees both.
    pub fn unsew(&mut self, i: usize, dart: DartId) -> Result<()> {
        self.check_dim(i)?;
        self.check_dart(dart)?;
        if self.is_free(i, dart) {
            return Err(Error::AlreadyFree { dim: i, dart });
        }
        let orbit: Vec<DartId> = self.orbit(dart, &distant_dims(i, self.dimension)).collect();
        let mut touched = Vec::with_capacity(orbit.len() * 2);
        for &d in &orbit {
            let partner = self.beta(i, d);
            if partner != d {
                touched.push(d);
                touched.push(partner);
            }
        }

        let pending = self.detach_attributes(&touched, &FxHashSet::default());
        for &d in &orbit {
            if !self.is_free(i, d) {
                self.unlink(i, d)?;
            }
        }
        self.reattach_attributes(pending);
        tracing::trace!(dim = i, %dart, links = touched.len() / 2, "unsewed darts");
        Ok(())
    }

    /// Creates a free-standing minimal `i`-cell and returns its
    /// representative.
    ///
    /// The cell has `2^i` darts: a single dart for a vertex, two β_0-linked
    /// darts for an edge, a two-sided polygon for a face, and so on, each
    /// level doubling the previous one and linking the copies by β_{i-1}.
    pub fn insert_cell(&mut self, i: usize) -> Result<DartId> {
        self.check_dim(i)?;
        let first = self.allocate();
        let mut darts = vec![first];
        for k in 0..i {
            let copies: Vec<DartId> = darts.iter().map(|_| self.allocate()).collect();
            let index: FxHashMap<DartId, usize> =
                darts.iter().enumerate().map(|(p, &d)| (d, p)).collect();
            for (p, &d) in darts.iter().enumerate() {
                for j in 0..k {
                    let partner = self.beta(j, d);
                    if let Some(&q) = index.get(&partner) {
                        if p < q {
                            self.link(j, copies[p], copies[q])?;
                        }
                    }
                }
                self.link(k, d, copies[p])?;
            }
            darts.extend(copies);
        }
        let rep = darts.iter().copied().min().unwrap_or(first);
        tracing::trace!(dim = i, darts = darts.len(), "inserted cell");
        Ok(rep)
    }

    /// Creates a closed polygon with `edges` edges, two darts per edge.
    ///
    /// Returns the first dart; walking β_0 then β_1 from it visits the
    /// edges in order.
    pub fn make_polygon(&mut self, edges: usize) -> Result<DartId> {
        self.check_dim(1)?;
        if edges == 0 {
            return Err(Error::InvariantViolation(
                "a polygon needs at least one edge".into(),
            ));
        }
        let darts: Vec<DartId> = (0..2 * edges).map(|_| self.allocate()).collect();
        for k in 0..edges {
            self.link(0, darts[2 * k], darts[2 * k + 1])?;
            self.link(1, darts[2 * k + 1], darts[(2 * k + 2) % darts.len()])?;
        }
        Ok(darts[0])
    }

    /// Removes the `i`-cell of `dart`, splicing its neighbours together.
    ///
    /// For `i < n` the two `(i+1)`-cells incident to the cell merge (or a
    /// dangling cell is pruned from the one cell it hangs in). For `i = n`
    /// the cell's darts are deleted and its neighbours become β_n-free. A
    /// cell that forms a whole connected component is simply deleted.
    ///
    /// Fails with [`Error::AmbiguousRemoval`] when the cell does not have a
    /// local degree of two, or when removing it would leave anything other
    /// than exactly one incident `(i+1)`-cell, and with
    /// [`Error::AttributeConflict`] when the merging cells carry different
    /// attributes.
    ///
    /// A cell with fewer than two incident `(i+1)`-cells is not refused:
    /// a dangling cell (both sides in the same `(i+1)`-cell) is pruned from
    /// it, and a cell whose darts are β_{i+1}-free (a face bounding a
    /// single volume, say) is removed leaving its neighbours β_i-free along
    /// its border. Only a split into several cells counts as ambiguous.
    pub fn remove_cell(&mut self, dart: DartId, i: usize) -> Result<()> {
        self.splice_out(dart, i, Splice::Removal)
    }

    /// Contracts the `i`-cell of `dart`, merging the two `(i-1)`-cells at
    /// its ends. Contracting a vertex is rejected with
    /// [`Error::InvalidDimension`].
    pub fn contract_cell(&mut self, dart: DartId, i: usize) -> Result<()> {
        self.splice_out(dart, i, Splice::Contraction)
    }

    fn splice_out(&mut self, dart: DartId, i: usize, mode: Splice) -> Result<()> {
        self.check_dim(i)?;
        self.check_dart(dart)?;
        let n = self.dimension;
        // Partner dimension walked with β_i, and the one that must commute with it.
        let (p, q) = match mode {
            Splice::Removal => ((i < n).then(|| i + 1), (i + 2 <= n).then(|| i + 2)),
            Splice::Contraction => {
                if i == 0 {
                    return Err(Error::InvalidDimension { dim: 0, max: n });
                }
                (Some(i - 1), i.checked_sub(2))
            }
        };
        let ambiguous = || Error::AmbiguousRemoval { dim: i, dart };

        let cell: Vec<DartId> = self.cell(dart, i).collect();
        let doomed: FxHashSet<DartId> = cell.iter().copied().collect();

        if let (Some(p), Some(q)) = (p, q) {
            let commutes = cell
                .iter()
                .all(|&d| self.beta(p, self.beta(q, d)) == self.beta(q, self.beta(p, d)));
            if !commutes {
                return Err(ambiguous());
            }
        }

        let mut plan: FxHashMap<DartId, DartId> = FxHashMap::default();
        for &d in &cell {
            let outside = self.beta(i, d);
            if doomed.contains(&outside) {
                continue;
            }
            let mut target = outside;
            if let Some(p) = p {
                target = d;
                let mut steps = 0;
                while doomed.contains(&target) {
                    if steps == cell.len() {
                        return Err(ambiguous());
                    }
                    target = self.beta(i, self.beta(p, target));
                    steps += 1;
                }
            }
            plan.insert(outside, target);
        }
        if plan
            .iter()
            .any(|(&b, &t)| t != b && plan.get(&t) != Some(&b))
        {
            return Err(ambiguous());
        }

        if let Some(p) = p {
            let p_dims = cell_dims(p, n);
            let mut seen = FxHashSet::default();
            let mut reps = Vec::new();
            for &d in &cell {
                if seen.contains(&d) {
                    continue;
                }
                let mut rep = d;
                for e in self.orbit(d, &p_dims) {
                    rep = rep.min(e);
                    seen.insert(e);
                }
                reps.push(rep);
            }
            let survivors: FxHashSet<DartId> = seen.difference(&doomed).copied().collect();
            if let Some(&start) = survivors.iter().min() {
                if reps.len() > 2 {
                    return Err(ambiguous());
                }
                let overlay = PlannedLinks {
                    map: &*self,
                    dim: i,
                    plan: &plan,
                };
                let reached: FxHashSet<DartId> = Orbit::new(&overlay, start, &p_dims).collect();
                if reached != survivors {
                    return Err(ambiguous());
                }
                if reps.len() == 2 {
                    self.check_merge(p, reps[0], reps[1])?;
                }
            }
        }

        let mut touched = cell.clone();
        touched.extend(plan.keys().copied());
        let pending = self.detach_attributes(&touched, &doomed);

        let mut links: Vec<(DartId, DartId)> = plan.into_iter().collect();
        links.sort_unstable();
        for &(b, _) in &links {
            self.unlink(i, b)?;
        }
        for &(b, t) in &links {
            if b < t {
                self.link(i, b, t)?;
            }
        }
        for &d in &cell {
            for j in 0..=n {
                if !self.is_free(j, d) {
                    self.unlink(j, d)?;
                }
            }
        }
        for &d in &cell {
            self.free(d)?;
        }
        self.reattach_attributes(pending);

        tracing::trace!(
            dim = i,
            cell = cell_name(i),
            ?mode,
            darts = cell.len(),
            relinked = links.len(),
            "spliced out cell"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeValue;

    /// Darts of a new polygon in walk order: β_0 from even to odd
    /// positions, β_1 from odd to the next even one.
    fn polygon(map: &mut GMap<u8>, edges: usize) -> Vec<DartId> {
        let start = map.make_polygon(edges).unwrap();
        polygon_darts(map, start)
    }

    fn polygon_darts(map: &GMap<u8>, start: DartId) -> Vec<DartId> {
        let mut darts = vec![start];
        loop {
            let dim = if darts.len() % 2 == 1 { 0 } else { 1 };
            let next = map.image(dim, darts[darts.len() - 1]);
            if next == start {
                return darts;
            }
            darts.push(next);
        }
    }

    /// Two squares of a 2-map glued along their first edge.
    fn glued_squares() -> (GMap<u8>, Vec<DartId>, Vec<DartId>) {
        let mut map = GMap::new(2);
        let a = polygon(&mut map, 4);
        let b = polygon(&mut map, 4);
        map.sew(2, a[0], b[0]).unwrap();
        (map, a, b)
    }

    #[test]
    fn polygon_walk_order() {
        let mut map = GMap::new(2);
        let a = polygon(&mut map, 3);
        assert_eq!(a.len(), 6);
        assert_eq!(map.image(0, a[0]), a[1]);
        assert_eq!(map.image(1, a[1]), a[2]);
        assert_eq!(map.image(1, a[5]), a[0]);
        assert_eq!(map.cells(1).count(), 3);
        assert!(map.is_valid());
    }

    #[test]
    fn sew_then_unsew_restores_free_darts() {
        let mut map: GMap<u8> = GMap::new(2);
        let d1 = map.allocate();
        let d2 = map.allocate();
        map.sew(1, d1, d2).unwrap();
        assert_eq!(map.image(1, d1), d2);
        map.unsew(1, d1).unwrap();
        assert!(map.is_free(1, d1));
        assert!(map.is_free(1, d2));
        assert_eq!(map.unsew(1, d1), Err(Error::AlreadyFree { dim: 1, dart: d1 }));
    }

    #[test]
    fn second_sew_fails_and_map_stays_valid() {
        let mut map: GMap<u8> = GMap::new(2);
        let d1 = map.allocate();
        let d2 = map.allocate();
        map.sew(0, d1, d2).unwrap();
        assert_eq!(map.sew(0, d1, d2), Err(Error::NotFree { dim: 0, dart: d1 }));
        assert!(map.is_valid());
    }

    #[test]
    fn sew_links_the_whole_edge() {
        let (map, a, b) = glued_squares();
        assert_eq!(map.image(2, a[0]), b[0]);
        assert_eq!(map.image(2, a[1]), b[1]);
        assert!(map.is_free(2, a[2]));
        assert!(map.is_valid());
    }

    #[test]
    fn sew_rejects_an_edge_against_a_lone_dart() {
        let mut map = GMap::new(2);
        let a = polygon(&mut map, 4);
        let lone = map.allocate();
        let err = map.sew(2, a[0], lone).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
        assert!(map.is_free(2, a[0]));
        assert!(map.is_free(2, lone));
        assert!(map.is_valid());
    }

    #[test]
    fn sew_glues_whole_faces_in_three_dimensions() {
        let mut map: GMap<u8> = GMap::new(3);
        let a = polygon(&mut map, 4);
        let b = polygon(&mut map, 4);
        map.sew(3, a[0], b[0]).unwrap();
        for k in 0..8 {
            assert_eq!(map.image(3, a[k]), b[k]);
        }
        assert!(map.is_valid());
        assert_eq!(map.cells(2).count(), 1);
    }

    #[test]
    fn sew_rejects_faces_of_different_shape() {
        let mut map: GMap<u8> = GMap::new(3);
        let square = polygon(&mut map, 4);
        let triangle = polygon(&mut map, 3);
        let err = map.sew(3, square[0], triangle[0]).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
        assert!(map.darts().all(|d| map.is_free(3, d)));
        assert!(map.is_valid());
    }

    #[test]
    fn glued_squares_cell_counts() {
        let (map, a, b) = glued_squares();
        assert_eq!(map.cells(0).count(), 6);
        assert_eq!(map.cells(1).count(), 7);
        assert_eq!(map.cells(2).count(), 2);
        assert!(map.same_cell(a[0], b[0], 1));
        assert!(!map.same_cell(a[0], b[0], 2));
    }

    #[test]
    fn unsew_splits_the_whole_edge() {
        let (mut map, a, b) = glued_squares();
        map.unsew(2, a[0]).unwrap();
        assert!(map.is_free(2, a[1]));
        assert!(map.is_free(2, b[1]));
        assert_eq!(map.cells(1).count(), 8);
        assert!(map.is_valid());
    }

    #[test]
    fn sew_detects_attribute_conflict() {
        let mut map = GMap::new(2);
        let a = polygon(&mut map, 4);
        let b = polygon(&mut map, 4);
        map.set_attribute(a[0], 1, AttributeValue::Region(1)).unwrap();
        map.set_attribute(b[0], 1, AttributeValue::Region(2)).unwrap();
        assert_eq!(
            map.sew(2, a[0], b[0]),
            Err(Error::AttributeConflict { dim: 1 })
        );
        assert!(map.is_free(2, a[0]));
    }

    #[test]
    fn removing_a_shared_edge_merges_faces() {
        let (mut map, a, b) = glued_squares();
        map.set_attribute(a[4], 2, AttributeValue::Region(7)).unwrap();
        map.remove_cell(a[0], 1).unwrap();

        assert_eq!(map.dart_count(), 12);
        assert_eq!(map.cells(2).count(), 1);
        assert_eq!(map.cells(1).count(), 6);
        assert_eq!(map.cells(0).count(), 6);
        assert_eq!(map.image(1, a[7]), b[7]);
        assert_eq!(map.image(1, a[2]), b[2]);
        assert_eq!(map.attribute(b[4], 2), Some(&AttributeValue::Region(7)));
        assert!(map.is_valid());
    }

    #[test]
    fn removal_refuses_conflicting_faces() {
        let (mut map, a, b) = glued_squares();
        map.set_attribute(a[4], 2, AttributeValue::Region(1)).unwrap();
        map.set_attribute(b[4], 2, AttributeValue::Region(2)).unwrap();
        assert_eq!(
            map.remove_cell(a[0], 1),
            Err(Error::AttributeConflict { dim: 2 })
        );
        assert_eq!(map.dart_count(), 16);
        assert_eq!(map.cells(2).count(), 2);
    }

    #[test]
    fn removing_a_degree_two_vertex_joins_edges() {
        let mut map = GMap::new(2);
        let a = polygon(&mut map, 4);
        map.remove_cell(a[1], 0).unwrap();
        assert_eq!(map.image(0, a[0]), a[3]);
        assert_eq!(map.cells(1).count(), 3);
        assert_eq!(map.cells(0).count(), 3);
        assert!(map.is_valid());
    }

    #[test]
    fn removing_a_degree_three_vertex_is_ambiguous() {
        let (mut map, a, _) = glued_squares();
        assert_eq!(
            map.remove_cell(a[0], 0),
            Err(Error::AmbiguousRemoval { dim: 0, dart: a[0] })
        );
        assert_eq!(map.dart_count(), 16);
        assert!(map.is_valid());
    }

    #[test]
    fn pruning_a_dangling_edge() {
        // A square with an edge hanging into it from the corner a[7] / a[0].
        let mut map = GMap::new(2);
        let a = polygon(&mut map, 4);
        let e = map.insert_cell(1).unwrap();
        let e_tip = map.image(0, e);
        let f = map.insert_cell(1).unwrap();
        let f_tip = map.image(0, f);
        map.unlink(1, a[7]).unwrap();
        map.link(1, a[7], e).unwrap();
        map.link(1, e_tip, f_tip).unwrap();
        map.link(1, f, a[0]).unwrap();
        map.link(2, e, f).unwrap();
        map.link(2, e_tip, f_tip).unwrap();
        assert!(map.is_valid());
        assert_eq!(map.cells(2).count(), 1);
        assert_eq!(map.cells(1).count(), 5);
        assert_eq!(map.cells(0).count(), 5);

        map.remove_cell(e_tip, 1).unwrap();
        assert_eq!(map.image(1, a[7]), a[0]);
        assert_eq!(map.dart_count(), 8);
        assert!(map.is_valid());
    }

    #[test]
    fn removal_that_splits_a_face_is_ambiguous() {
        // Roll a square into a tube by gluing two opposite edges.
        let mut map = GMap::new(2);
        let a = polygon(&mut map, 4);
        map.sew(2, a[2], a[7]).unwrap();
        assert_eq!(map.image(2, a[3]), a[6]);
        assert!(map.is_valid());
        assert_eq!(
            map.remove_cell(a[2], 1),
            Err(Error::AmbiguousRemoval { dim: 1, dart: a[2] })
        );
        assert_eq!(map.dart_count(), 8);
    }

    #[test]
    fn insert_then_remove_leaves_empty_map() {
        for i in 0..=3 {
            let mut map: GMap<u8> = GMap::new(3);
            let rep = map.insert_cell(i).unwrap();
            assert_eq!(map.dart_count(), 1 << i);
            assert!(map.is_valid());
            assert_eq!(map.cells(i).count(), 1);
            map.remove_cell(rep, i).unwrap();
            assert_eq!(map.dart_count(), 0);
        }
    }

    #[test]
    fn insert_cell_checks_dimension() {
        let mut map: GMap<u8> = GMap::new(2);
        assert_eq!(
            map.insert_cell(3),
            Err(Error::InvalidDimension { dim: 3, max: 2 })
        );
        let rep = map.insert_cell(2).unwrap();
        assert_eq!(map.cells(1).count(), 2);
        assert_eq!(map.cells(0).count(), 2);
        assert_eq!(map.cell_representative(rep, 2), rep);
    }

    #[test]
    fn contracting_an_edge_merges_its_vertices() {
        let mut map = GMap::new(2);
        let a = polygon(&mut map, 4);
        map.contract_cell(a[0], 1).unwrap();
        assert_eq!(map.image(1, a[7]), a[2]);
        assert_eq!(map.cells(1).count(), 3);
        assert_eq!(map.cells(0).count(), 3);
        assert!(map.is_valid());
        assert_eq!(
            map.contract_cell(a[2], 0),
            Err(Error::InvalidDimension { dim: 0, max: 2 })
        );
    }

    #[test]
    fn removing_a_volume_frees_its_neighbour() {
        let mut map: GMap<u8> = GMap::new(3);
        let a = map.make_polygon(4).unwrap();
        let b = map.make_polygon(4).unwrap();
        let db = polygon_darts(&map, b);
        map.sew(3, a, b).unwrap();
        assert!(map.is_valid());
        map.set_attribute(a, 2, AttributeValue::Region(5)).unwrap();
        assert_eq!(map.cells(3).count(), 2);

        map.remove_cell(a, 3).unwrap();
        assert_eq!(map.dart_count(), 8);
        assert!(db.iter().all(|&d| map.is_free(3, d)));
        assert_eq!(map.attribute(b, 2), Some(&AttributeValue::Region(5)));
        assert!(map.is_valid());
    }
}
