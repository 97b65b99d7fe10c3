// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Topomap Core
//!
//! The digital-space side of topological map extraction: integer voxel
//! coordinates and the six grid directions, Khalimsky coordinates for the
//! faces, edges and corners voxels share, box domains with raster
//! enumeration, labeled images, shape painters and geometric embeddings.
//!
//! ## Quick Start
//!
//! ```rust
//! use nalgebra::Point3;
//! use topomap_core::{shapes, Direction, Domain, LabeledImage, Neighbor, VoxelImage};
//!
//! let mut image = LabeledImage::new(Domain::from_size(5, 5, 5).unwrap(), 0u8);
//! shapes::add_norm1_ball(&mut image, &Point3::new(2, 2, 2), 1, 1);
//!
//! let center = Point3::new(2, 2, 2);
//! assert_eq!(image.label_at(&center), Some(1));
//! assert!(matches!(
//!     image.neighbor(&center, Direction::PosX),
//!     Neighbor::Voxel { label: 1, .. }
//! ));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for directions, domains and grids

pub mod domain;
pub mod embedding;
pub mod error;
pub mod image;
pub mod shapes;
pub mod space;

pub use domain::{Domain, DomainIter};
pub use embedding::{EmbeddingProvider, UnitGrid};
pub use error::{Error, Result};
pub use image::{LabeledImage, Neighbor, VoxelImage};
pub use space::{
    boundary_kcoords, inf, is_lower, kcell_dimension, norm1, norm2_squared, norm_infinity,
    pointel_corner, sup, voxel_kcoords, Direction, KCoords, Voxel,
};
