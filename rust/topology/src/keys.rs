// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dart handles and cell dimension sets.
//!
//! Darts live in a `slotmap::SlotMap`; their keys stay valid while the dart
//! is alive and are never confused with a later dart reusing the same slot
//! (generational indices). Keys are totally ordered, which gives every orbit
//! a canonical representative: its smallest dart.

use slotmap::{new_key_type, Key};
use smallvec::SmallVec;

new_key_type! {
    /// Handle of a dart, the atomic element of a generalized map.
    pub struct DartId;
}

impl std::fmt::Display for DartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Low half of the FFI value is the slot index.
        write!(f, "d{}", self.data().as_ffi() & 0xffff_ffff)
    }
}

/// A set of involution indices, small enough to stay on the stack.
pub type DimSet = SmallVec<[usize; 4]>;

/// Involutions generating an `i`-cell of an `n`-map: every β_j except β_i.
pub fn cell_dims(i: usize, n: usize) -> DimSet {
    (0..=n).filter(|&j| j != i).collect()
}

/// Every involution of an `n`-map; its orbits are connected components.
pub fn all_dims(n: usize) -> DimSet {
    (0..=n).collect()
}

/// Involutions whose orbit is used to unsew along `i`: every β_j with
/// `|i - j| >= 2`.
pub fn distant_dims(i: usize, n: usize) -> DimSet {
    (0..=n).filter(|&j| j.abs_diff(i) >= 2).collect()
}

/// Conventional name of an `i`-cell.
pub fn cell_name(i: usize) -> &'static str {
    match i {
        0 => "vertex",
        1 => "edge",
        2 => "face",
        3 => "volume",
        _ => "cell",
    }
}
