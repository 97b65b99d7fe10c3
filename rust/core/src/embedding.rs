// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric embedding of grid corners.

use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};

/// Maps an integer grid corner to its position in space.
pub trait EmbeddingProvider {
    fn embed(&self, corner: &Point3<i64>) -> Point3<f64>;
}

/// Regular grid with an origin and a per-axis spacing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitGrid {
    origin: Point3<f64>,
    spacing: Vector3<f64>,
}

impl UnitGrid {
    /// Creates a grid; every spacing component must be finite and positive.
    pub fn new(origin: Point3<f64>, spacing: Vector3<f64>) -> Result<Self> {
        for axis in 0..3 {
            let value = spacing[axis];
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidSpacing { axis, value });
            }
        }
        Ok(Self { origin, spacing })
    }

    pub fn origin(&self) -> &Point3<f64> {
        &self.origin
    }

    pub fn spacing(&self) -> &Vector3<f64> {
        &self.spacing
    }
}

impl Default for UnitGrid {
    fn default() -> Self {
        Self {
            origin: Point3::origin(),
            spacing: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl EmbeddingProvider for UnitGrid {
    fn embed(&self, corner: &Point3<i64>) -> Point3<f64> {
        let c = Vector3::new(corner.x as f64, corner.y as f64, corner.z as f64);
        self.origin + c.component_mul(&self.spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_grid_is_identity() {
        let p = UnitGrid::default().embed(&Point3::new(2, -1, 3));
        assert_relative_eq!(p, Point3::new(2.0, -1.0, 3.0));
    }

    #[test]
    fn anisotropic_spacing() {
        let grid = UnitGrid::new(Point3::new(10.0, 0.0, 0.0), Vector3::new(0.5, 1.0, 2.5)).unwrap();
        let p = grid.embed(&Point3::new(4, 3, 2));
        assert_relative_eq!(p, Point3::new(12.0, 3.0, 5.0));
    }

    #[test]
    fn rejects_degenerate_spacing() {
        let err = UnitGrid::new(Point3::origin(), Vector3::new(1.0, 0.0, 1.0)).unwrap_err();
        assert_eq!(err, Error::InvalidSpacing { axis: 1, value: 0.0 });
        assert!(UnitGrid::new(Point3::origin(), Vector3::new(f64::NAN, 1.0, 1.0)).is_err());
    }
}
