// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Topomap Topology
//!
//! Generalized maps (n-G-maps) and their extraction from labeled 3D images.
//!
//! A G-map represents a subdivided space with *darts* and involutions
//! β_0..β_n: β_i pairs darts that are adjacent along dimension `i`. Cells
//! are never stored; an `i`-cell is the orbit of a dart under every β_j
//! with `j != i`. Darts live in a slot map with generational keys, and all
//! edits go through checked Euler operators (sew, unsew, insert, remove,
//! contract) that keep the involution and commutation laws intact.
//!
//! ## Quick Start
//!
//! ```rust
//! use nalgebra::Point3;
//! use topomap_core::{Domain, LabeledImage};
//! use topomap_topology::{build_from_image, AttributeValue};
//!
//! // Two face-adjacent voxels with different labels.
//! let mut image = LabeledImage::new(Domain::from_size(2, 1, 1).unwrap(), 1u8);
//! image.set(&Point3::new(1, 0, 0), 2).unwrap();
//!
//! let map = build_from_image(&image).unwrap();
//! assert_eq!(map.cell_count(3), 2);
//! assert!(map.is_valid());
//!
//! let shared = map
//!     .cells(2)
//!     .filter(|&f| matches!(
//!         map.attribute(f, 2),
//!         Some(AttributeValue::Interface { labels: [Some(1), Some(2)], .. })
//!     ))
//!     .count();
//! assert_eq!(shared, 1);
//! ```

pub mod arena;
pub mod attributes;
pub mod builders;
pub mod construction;
pub mod error;
pub mod involution;
pub mod keys;
pub mod query;
pub mod traversal;

pub use arena::GMap;
pub use attributes::{AttributeValue, Plane};
pub use builders::{build_from_image, ExtractionConfig, ExtractionReport, MapBuilder};
pub use error::{Error, Result};
pub use involution::Involutions;
pub use keys::{all_dims, cell_dims, cell_name, distant_dims, DartId, DimSet};
pub use query::MapStatistics;
pub use traversal::{Cells, Orbit};
