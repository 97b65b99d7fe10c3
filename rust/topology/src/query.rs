// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Map-wide queries: cell counts, Euler characteristic, validity and
//! summary statistics.

use serde::{Deserialize, Serialize};

use crate::arena::GMap;
use crate::error::{Error, Result};
use crate::involution::Involutions;

/// Summary of a map, serializable for downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStatistics {
    pub dimension: usize,
    pub darts: usize,
    /// Number of `i`-cells at index `i`.
    pub cells: Vec<usize>,
    pub euler_characteristic: i64,
    pub attributes: usize,
}

impl MapStatistics {
    /// Serializes the statistics to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl<L> GMap<L> {
    /// Number of `i`-cells.
    pub fn cell_count(&self, i: usize) -> usize {
        self.cells(i).count()
    }

    /// Alternating sum of the cell counts over every dimension.
    pub fn euler_characteristic(&self) -> i64 {
        (0..=self.dimension)
            .map(|i| {
                let count = self.cell_count(i) as i64;
                if i % 2 == 0 {
                    count
                } else {
                    -count
                }
            })
            .sum()
    }

    /// Returns `true` if every β_i is an involution over the live darts and
    /// β_i β_j = β_j β_i whenever `|i - j| >= 2`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Like [`GMap::is_valid`], reporting the first broken law.
    pub fn validate(&self) -> Result<()> {
        let n = self.dimension;
        for dart in self.darts() {
            for i in 0..=n {
                let partner = self.beta(i, dart);
                if !self.contains(partner) {
                    return Err(self.violation(format!(
                        "β{i}({dart}) points to a dead dart"
                    )));
                }
                if self.beta(i, partner) != dart {
                    return Err(self.violation(format!("β{i} is not an involution at {dart}")));
                }
                for j in i + 2..=n {
                    if self.beta(i, self.beta(j, dart)) != self.beta(j, self.beta(i, dart)) {
                        return Err(self.violation(format!(
                            "β{i} and β{j} do not commute at {dart}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn violation(&self, message: String) -> Error {
        tracing::warn!(darts = self.dart_count(), %message, "invalid generalized map");
        Error::InvariantViolation(message)
    }

    /// Counts darts, cells and attributes.
    pub fn statistics(&self) -> MapStatistics {
        let cells: Vec<usize> = (0..=self.dimension).map(|i| self.cell_count(i)).collect();
        let euler_characteristic = cells
            .iter()
            .enumerate()
            .map(|(i, &c)| if i % 2 == 0 { c as i64 } else { -(c as i64) })
            .sum();
        MapStatistics {
            dimension: self.dimension,
            darts: self.dart_count(),
            cells,
            euler_characteristic,
            attributes: self.attribute_count(),
        }
    }
}
