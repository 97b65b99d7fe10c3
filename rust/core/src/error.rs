// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for digital space and image operations.

use crate::space::Voxel;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by domains, images and embeddings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A voxel position lies outside the image domain.
    #[error("voxel ({}, {}, {}) is outside the domain", .0.x, .0.y, .0.z)]
    OutOfDomain(Voxel),

    /// The lower corner of a domain is above its upper corner on some axis.
    #[error("empty domain: lower corner is above upper corner on axis {0}")]
    EmptyDomain(usize),

    /// A grid spacing component is zero, negative or not finite.
    #[error("invalid grid spacing on axis {axis}: {value}")]
    InvalidSpacing { axis: usize, value: f64 },

    /// Raw label data does not match the domain size.
    #[error("label buffer has {got} values, domain holds {expected} voxels")]
    SizeMismatch { expected: usize, got: usize },
}
