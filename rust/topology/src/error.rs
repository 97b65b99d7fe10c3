// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for generalized map operations and extraction.

use crate::keys::DartId;

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during map edits, queries and extraction.
///
/// Every operator checks its preconditions before mutating, so any error
/// other than the two extraction failures leaves the map untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The dart is not alive in the map, or cannot be freed while linked.
    #[error("invalid dart: {0}")]
    InvalidDart(DartId),

    /// The involution index exceeds the map dimension.
    #[error("invalid dimension {dim} (map dimension is {max})")]
    InvalidDimension { dim: usize, max: usize },

    /// The dart is already linked on this dimension.
    #[error("dart {dart} is not free on dimension {dim}")]
    NotFree { dim: usize, dart: DartId },

    /// The dart has no link to undo on this dimension.
    #[error("dart {dart} is already free on dimension {dim}")]
    AlreadyFree { dim: usize, dart: DartId },

    /// The edit would break the involution or commutation laws.
    #[error("generalized map invariant violated: {0}")]
    InvariantViolation(String),

    /// The cell does not have a well-defined pair of incident cells to splice.
    #[error("ambiguous removal of the {dim}-cell of dart {dart}")]
    AmbiguousRemoval { dim: usize, dart: DartId },

    /// Two merged cells carry different attributes.
    #[error("attribute conflict while merging {dim}-cells")]
    AttributeConflict { dim: usize },

    /// The extracted map failed its validity check.
    #[error("corrupt extraction: {0}")]
    CorruptExtraction(String),

    /// The image reported labels or neighbours that contradict each other.
    #[error("inconsistent labeling: {0}")]
    InconsistentLabeling(String),

    /// Error from the digital-space collaborators.
    #[error(transparent)]
    Core(#[from] topomap_core::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
