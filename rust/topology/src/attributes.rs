// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed values attached to cells.
//!
//! An attribute belongs to a whole `i`-cell and is stored under the cell's
//! representative. Since representatives move when links change, every
//! operator that may merge, split or shrink a cell detaches the affected
//! attributes first and re-attaches them under the new representatives once
//! the links are in place.

use nalgebra::Point3;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::arena::GMap;
use crate::error::{Error, Result};
use crate::keys::{cell_dims, DartId};

/// Supporting plane of an axis-aligned face, in Khalimsky coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plane {
    /// Axis of the face normal.
    pub axis: usize,
    /// Doubled coordinate of the plane along `axis` (always even).
    pub coordinate: i64,
}

/// A typed value stored on a cell.
///
/// `None` inside a label list stands for the exterior of the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue<L> {
    /// Region label of a volume.
    Region(L),
    /// The two regions separated by a face, in ascending order, and the
    /// plane the face lies in.
    Interface { labels: [Option<L>; 2], plane: Plane },
    /// Sorted, deduplicated regions around an edge.
    Labels(Vec<Option<L>>),
    /// Sorted, deduplicated regions around a vertex and, when embedded,
    /// its position.
    Vertex {
        labels: Vec<Option<L>>,
        position: Option<Point3<f64>>,
    },
}

impl<L: Ord> AttributeValue<L> {
    /// Interface value with its labels in canonical order.
    pub fn interface(a: Option<L>, b: Option<L>, plane: Plane) -> Self {
        let labels = if a <= b { [a, b] } else { [b, a] };
        AttributeValue::Interface { labels, plane }
    }

    /// Label-set value, sorted and deduplicated.
    pub fn labels(labels: impl IntoIterator<Item = Option<L>>) -> Self {
        AttributeValue::Labels(canonical(labels))
    }

    /// Vertex value with its labels sorted and deduplicated.
    pub fn vertex(
        labels: impl IntoIterator<Item = Option<L>>,
        position: Option<Point3<f64>>,
    ) -> Self {
        AttributeValue::Vertex {
            labels: canonical(labels),
            position,
        }
    }
}

fn canonical<L: Ord>(labels: impl IntoIterator<Item = Option<L>>) -> Vec<Option<L>> {
    let mut labels: Vec<Option<L>> = labels.into_iter().collect();
    labels.sort();
    labels.dedup();
    labels
}

/// An attribute lifted off the map while an operator rewires links.
pub(crate) struct PendingAttribute<L> {
    dim: usize,
    anchors: Vec<DartId>,
    value: AttributeValue<L>,
}

impl<L> GMap<L> {
    /// Attaches a value to the `dim`-cell of `dart`, replacing and returning
    /// any value the cell already had.
    pub fn set_attribute(
        &mut self,
        dart: DartId,
        dim: usize,
        value: AttributeValue<L>,
    ) -> Result<Option<AttributeValue<L>>> {
        self.check_dim(dim)?;
        self.check_dart(dart)?;
        let rep = self.cell_representative(dart, dim);
        Ok(self.attributes[dim].insert(rep, value))
    }

    /// Returns the value attached to the `dim`-cell of `dart`, if any.
    pub fn attribute(&self, dart: DartId, dim: usize) -> Option<&AttributeValue<L>> {
        if dim > self.dimension || !self.contains(dart) {
            return None;
        }
        let rep = self.cell_representative(dart, dim);
        self.attributes[dim].get(&rep)
    }

    /// Detaches the value from the `dim`-cell of `dart`.
    pub fn remove_attribute(&mut self, dart: DartId, dim: usize) -> Option<AttributeValue<L>> {
        if dim > self.dimension || !self.contains(dart) {
            return None;
        }
        let rep = self.cell_representative(dart, dim);
        self.attributes[dim].remove(&rep)
    }

    /// Iterates over the attributed `dim`-cells as (representative, value).
    pub fn attributes(&self, dim: usize) -> impl Iterator<Item = (DartId, &AttributeValue<L>)> {
        self.attributes
            .get(dim)
            .into_iter()
            .flat_map(|table| table.iter().map(|(&rep, value)| (rep, value)))
    }

    /// Total number of attributed cells over all dimensions.
    pub fn attribute_count(&self) -> usize {
        self.attributes.iter().map(|table| table.len()).sum()
    }
}

impl<L: Clone + PartialEq> GMap<L> {
    /// Fails with [`Error::AttributeConflict`] if the `dim`-cells represented
    /// by `a` and `b` are distinct and carry different values.
    pub(crate) fn check_merge(&self, dim: usize, a: DartId, b: DartId) -> Result<()> {
        if a == b {
            return Ok(());
        }
        match (self.attributes[dim].get(&a), self.attributes[dim].get(&b)) {
            (Some(x), Some(y)) if x != y => Err(Error::AttributeConflict { dim }),
            _ => Ok(()),
        }
    }

    /// Lifts the attributes of every cell containing a `touched` dart.
    ///
    /// Each lifted value remembers surviving darts of its old cell; darts in
    /// `doomed` are about to be deleted and never serve as anchors. A cell
    /// made only of doomed darts loses its value.
    pub(crate) fn detach_attributes(
        &mut self,
        touched: &[DartId],
        doomed: &FxHashSet<DartId>,
    ) -> Vec<PendingAttribute<L>> {
        let touched_set: FxHashSet<DartId> = touched.iter().copied().collect();
        let mut pending = Vec::new();
        for dim in 0..=self.dimension {
            if self.attributes[dim].is_empty() {
                continue;
            }
            let dims = cell_dims(dim, self.dimension);
            let mut seen = FxHashSet::default();
            for &t in touched {
                if seen.contains(&t) {
                    continue;
                }
                let orbit: Vec<DartId> = self.orbit(t, &dims).collect();
                seen.extend(orbit.iter().copied());
                let Some(&rep) = orbit.iter().min() else {
                    continue;
                };
                let Some(value) = self.attributes[dim].remove(&rep) else {
                    continue;
                };
                let mut anchors: Vec<DartId> = orbit
                    .iter()
                    .copied()
                    .filter(|d| touched_set.contains(d) && !doomed.contains(d))
                    .collect();
                if anchors.is_empty() {
                    anchors.extend(orbit.iter().copied().find(|d| !doomed.contains(d)));
                }
                if !anchors.is_empty() {
                    pending.push(PendingAttribute {
                        dim,
                        anchors,
                        value,
                    });
                }
            }
        }
        pending
    }

    /// Stores lifted values under the representatives of their anchors'
    /// current cells. A cell that already has a value keeps it.
    pub(crate) fn reattach_attributes(&mut self, pending: Vec<PendingAttribute<L>>) {
        for PendingAttribute {
            dim,
            anchors,
            value,
        } in pending
        {
            let dims = cell_dims(dim, self.dimension);
            let mut seen = FxHashSet::default();
            for anchor in anchors {
                if seen.contains(&anchor) || !self.contains(anchor) {
                    continue;
                }
                let mut rep = anchor;
                for d in self.orbit(anchor, &dims) {
                    rep = rep.min(d);
                    seen.insert(d);
                }
                self.attributes[dim]
                    .entry(rep)
                    .or_insert_with(|| value.clone());
            }
        }
    }
}
