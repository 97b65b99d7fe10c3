// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw involution links.
//!
//! `link` and `unlink` are the only writers of β images; they keep each β_i
//! an involution but do not check commutation between dimensions. The
//! checked operators in [`crate::construction`] are built on top of them.

use crate::arena::GMap;
use crate::error::{Error, Result};
use crate::keys::DartId;

/// Read access to involution images.
///
/// Orbit traversal is written against this trait so that operators can
/// explore a planned edit through an overlay before applying it.
pub trait Involutions {
    /// Highest involution index.
    fn dimension(&self) -> usize;

    /// β_i(dart). Total: returns `dart` itself when it is free on `i`, not
    /// alive, or `i` exceeds the dimension.
    fn beta(&self, i: usize, dart: DartId) -> DartId;
}

impl<L> Involutions for GMap<L> {
    fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    fn beta(&self, i: usize, dart: DartId) -> DartId {
        self.darts
            .get(dart)
            .and_then(|data| data.beta.get(i).copied())
            .unwrap_or(dart)
    }
}

impl<L> GMap<L> {
    /// β_i(dart); see [`Involutions::beta`].
    #[inline]
    pub fn image(&self, i: usize, dart: DartId) -> DartId {
        self.beta(i, dart)
    }

    /// Returns `true` if the dart has no partner on dimension `i`.
    #[inline]
    pub fn is_free(&self, i: usize, dart: DartId) -> bool {
        self.beta(i, dart) == dart
    }

    /// Links two distinct free darts on dimension `i`.
    ///
    /// Fails without changes if either dart is dead, `i` is out of range or
    /// either dart is already linked on `i`.
    pub fn link(&mut self, i: usize, d1: DartId, d2: DartId) -> Result<()> {
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
        self.darts[d1].beta[i] = d2;
        self.darts[d2].beta[i] = d1;
        Ok(())
    }

    /// Breaks the β_i link of `dart` and returns its former partner, which
    /// becomes free as well.
    pub fn unlink(&mut self, i: usize, dart: DartId) -> Result<DartId> {
        self.check_dim(i)?;
        self.check_dart(dart)?;
        let partner = self.beta(i, dart);
        if partner == dart {
            return Err(Error::AlreadyFree { dim: i, dart });
        }
        self.darts[dart].beta[i] = dart;
        self.darts[partner].beta[i] = partner;
        Ok(partner)
    }
}
