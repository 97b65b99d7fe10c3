// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extraction of a 3-map from a labeled voxel image.
//!
//! Voxels are scanned in raster order. Each face separating a voxel from a
//! voxel of another label, or from the outside of the image, is emitted as
//! one square made of eight darts, one per *flag*: the face, one of its four
//! edges and one end of that edge, seen from the voxel that owns the face.
//! A flag table keyed by Khalimsky coordinates finds the darts of earlier
//! faces. Each new square is closed, then sewn edge by edge and face to
//! face to the squares already emitted:
//!
//! - β_0 and β_1 stay inside the square (other end, other edge);
//! - β_2 crosses the edge to the next boundary face of the same region,
//!   which is the coplanar square, the square around a concave corner or
//!   the perpendicular face of the same voxel, whichever bounds the region;
//! - β_3 crosses the face to the dart of the voxel on the other side. The
//!   outside of the image has no darts, so those faces stay β_3-free.
//!
//! The squares are then merged into maximal faces by removing edges between
//! coplanar squares that separate the same two regions, and edge chains
//! are merged by removing vertices of degree two. Finally every cell gets
//! its attribute and the map is checked.

use std::fmt;
use std::time::Instant;

use nalgebra::{Point3, Vector3};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use topomap_core::{
    boundary_kcoords, pointel_corner, Direction, EmbeddingProvider, KCoords, Neighbor, UnitGrid,
    Voxel, VoxelImage,
};

use crate::arena::GMap;
use crate::attributes::{AttributeValue, Plane};
use crate::error::{Error, Result};
use crate::keys::DartId;
use crate::query::MapStatistics;

/// Options for [`MapBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Merge coplanar squares separating the same two regions into faces.
    pub simplify_faces: bool,
    /// Merge edges joined by a vertex of degree two.
    pub simplify_edges: bool,
    /// Store each vertex position in its `Vertex` attribute.
    pub embed_vertices: bool,
    /// Run the full validity check on the result; a failure is fatal.
    pub validate: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            simplify_faces: true,
            simplify_edges: true,
            embed_vertices: true,
            validate: true,
        }
    }
}

/// Summary of one extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub voxels: usize,
    /// Boundary squares emitted, counting each side of an interface.
    pub faces_emitted: usize,
    pub darts_created: usize,
    pub edges_removed: usize,
    pub vertices_removed: usize,
    pub elapsed_ms: u64,
    pub statistics: Option<MapStatistics>,
}

impl ExtractionReport {
    /// Serializes the report to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

/// Stage of an extraction, reported in corruption errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuildPhase {
    Scanning,
    FaceEmission,
    Sewing,
    Simplifying,
    Done,
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildPhase::Scanning => "scanning",
            BuildPhase::FaceEmission => "face emission",
            BuildPhase::Sewing => "sewing",
            BuildPhase::Simplifying => "simplifying",
            BuildPhase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Builds generalized maps from labeled images.
///
/// # Example
///
/// ```
/// use topomap_core::{Domain, LabeledImage};
/// use topomap_topology::MapBuilder;
///
/// let image = LabeledImage::new(Domain::from_size(3, 3, 3).unwrap(), 1u8);
/// let (map, report) = MapBuilder::new().build(&image).unwrap();
///
/// assert_eq!(map.cell_count(3), 1);
/// assert_eq!(map.cell_count(2), 6);
/// assert_eq!(map.euler_characteristic(), 1);
/// assert_eq!(report.voxels, 27);
/// ```
#[derive(Debug, Clone)]
pub struct MapBuilder<P = UnitGrid> {
    config: ExtractionConfig,
    embedding: P,
}

impl MapBuilder<UnitGrid> {
    /// Builder with default options and unit voxels at the origin.
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
            embedding: UnitGrid::default(),
        }
    }

    /// Builder embedding vertices on a regular grid.
    pub fn with_grid(origin: Point3<f64>, spacing: Vector3<f64>) -> Result<Self> {
        Ok(Self {
            config: ExtractionConfig::default(),
            embedding: UnitGrid::new(origin, spacing)?,
        })
    }
}

impl Default for MapBuilder<UnitGrid> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: EmbeddingProvider> MapBuilder<P> {
    /// Replaces the vertex embedding.
    pub fn with_embedding<Q: EmbeddingProvider>(self, embedding: Q) -> MapBuilder<Q> {
        MapBuilder {
            config: self.config,
            embedding,
        }
    }

    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extracts the map of `image`.
    ///
    /// Fails with [`Error::InconsistentLabeling`] when the image enumerates a
    /// voxel twice or answers neighbour queries against its own enumeration,
    /// and with [`Error::CorruptExtraction`] when the result is not a valid
    /// map.
    pub fn build<I: VoxelImage>(&self, image: &I) -> Result<(GMap<I::Label>, ExtractionReport)> {
        let start = Instant::now();
        let mut extraction = Extraction::new(&self.config, &self.embedding);
        let order = extraction.index_labels(image)?;
        tracing::info!(voxels = order.len(), "Starting topological map extraction");

        for (voxel, label) in &order {
            extraction.emit_voxel(image, voxel, label)?;
        }
        tracing::debug!(
            faces = extraction.report.faces_emitted,
            darts = extraction.report.darts_created,
            "Boundary faces emitted and sewn"
        );

        extraction.tag_interfaces()?;
        extraction.enter(BuildPhase::Simplifying);
        if self.config.simplify_faces {
            extraction.report.edges_removed = extraction.simplify(1)?;
            tracing::debug!(
                edges_removed = extraction.report.edges_removed,
                "Merged coplanar faces"
            );
        }
        if self.config.simplify_edges {
            extraction.report.vertices_removed = extraction.simplify(0)?;
            tracing::debug!(
                vertices_removed = extraction.report.vertices_removed,
                "Merged edge chains"
            );
        }
        extraction.tag_cells()?;

        if self.config.validate {
            extraction
                .map
                .validate()
                .map_err(|e| extraction.corrupt(e))?;
        }
        extraction.enter(BuildPhase::Done);

        let Extraction {
            map, mut report, ..
        } = extraction;
        let statistics = map.statistics();
        report.elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            darts = statistics.darts,
            vertices = statistics.cells[0],
            edges = statistics.cells[1],
            faces = statistics.cells[2],
            volumes = statistics.cells[3],
            euler = statistics.euler_characteristic,
            elapsed_ms = report.elapsed_ms,
            "Extraction complete"
        );
        report.statistics = Some(statistics);
        Ok((map, report))
    }
}

/// Extracts the map of `image` with default options.
pub fn build_from_image<I: VoxelImage>(image: &I) -> Result<GMap<I::Label>> {
    MapBuilder::new().build(image).map(|(map, _)| map)
}

/// A flag seen from the voxel owning the face: the face direction, the
/// direction of the edge from the face centre, and the end of that edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flag {
    voxel: Voxel,
    face: Direction,
    edge: Direction,
    vertex: Direction,
}

/// Position-based identity of a flag, shared by every face that meets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FlagKey {
    surfel: KCoords,
    linel: KCoords,
    pointel: KCoords,
    /// Direction from the surfel to the owning voxel.
    side: Direction,
}

impl Flag {
    fn key(&self) -> FlagKey {
        FlagKey {
            surfel: boundary_kcoords(&self.voxel, &[self.face]),
            linel: boundary_kcoords(&self.voxel, &[self.face, self.edge]),
            pointel: boundary_kcoords(&self.voxel, &[self.face, self.edge, self.vertex]),
            side: self.face.opposite(),
        }
    }

    fn beta0(self) -> Flag {
        Flag {
            vertex: self.vertex.opposite(),
            ..self
        }
    }

    fn beta1(self) -> Flag {
        Flag {
            edge: self.vertex,
            vertex: self.edge,
            ..self
        }
    }

    fn beta3(self) -> Flag {
        Flag {
            voxel: self.face.step(&self.voxel),
            face: self.face.opposite(),
            ..self
        }
    }
}

struct DartOrigin<L> {
    label: L,
    pointel: KCoords,
}

/// State of one extraction; the flag table dies with it.
struct Extraction<'a, L, P: ?Sized> {
    config: &'a ExtractionConfig,
    embedding: &'a P,
    map: GMap<L>,
    labels: FxHashMap<Voxel, L>,
    flags: FxHashMap<FlagKey, DartId>,
    origins: FxHashMap<DartId, DartOrigin<L>>,
    interfaces: Vec<(DartId, AttributeValue<L>)>,
    phase: BuildPhase,
    report: ExtractionReport,
}

impl<'a, L, P> Extraction<'a, L, P>
where
    L: Clone + Ord + fmt::Debug,
    P: EmbeddingProvider + ?Sized,
{
    fn new(config: &'a ExtractionConfig, embedding: &'a P) -> Self {
        Self {
            config,
            embedding,
            map: GMap::new(3),
            labels: FxHashMap::default(),
            flags: FxHashMap::default(),
            origins: FxHashMap::default(),
            interfaces: Vec::new(),
            phase: BuildPhase::Scanning,
            report: ExtractionReport::default(),
        }
    }

    fn enter(&mut self, phase: BuildPhase) {
        if self.phase != phase {
            tracing::trace!(from = %self.phase, to = %phase, "extraction phase");
            self.phase = phase;
        }
    }

    fn corrupt(&self, err: Error) -> Error {
        Error::CorruptExtraction(format!("{} phase: {err}", self.phase))
    }

    /// Records every label, rejecting voxels enumerated twice. Returns the
    /// voxels in enumeration order.
    fn index_labels<I: VoxelImage<Label = L>>(&mut self, image: &I) -> Result<Vec<(Voxel, L)>> {
        let mut order = Vec::with_capacity(image.voxel_count());
        for (voxel, label) in image.voxels() {
            if self.labels.insert(voxel, label.clone()).is_some() {
                return Err(Error::InconsistentLabeling(format!(
                    "voxel {voxel} enumerated twice"
                )));
            }
            order.push((voxel, label));
        }
        self.report.voxels = order.len();
        Ok(order)
    }

    fn emit_voxel<I: VoxelImage<Label = L>>(
        &mut self,
        image: &I,
        voxel: &Voxel,
        label: &L,
    ) -> Result<()> {
        self.enter(BuildPhase::Scanning);
        for face in Direction::ALL {
            let adjacent = face.step(voxel);
            let other = match image.neighbor(voxel, face) {
                Neighbor::Boundary => {
                    if self.labels.contains_key(&adjacent) {
                        return Err(Error::InconsistentLabeling(format!(
                            "voxel {adjacent} is enumerated but reported outside the image"
                        )));
                    }
                    None
                }
                Neighbor::Voxel {
                    position,
                    label: neighbor,
                } => {
                    if position != adjacent || self.labels.get(&position) != Some(&neighbor) {
                        return Err(Error::InconsistentLabeling(format!(
                            "neighbour {face} of voxel {voxel} reported as {position} with label {neighbor:?}"
                        )));
                    }
                    if neighbor == *label {
                        continue;
                    }
                    Some(neighbor)
                }
            };
            self.emit_face(voxel, label, face, other)?;
        }
        Ok(())
    }

    /// Emits the eight darts of one boundary square, closes the square and
    /// sews it to every neighbouring square that already exists.
    fn emit_face(&mut self, voxel: &Voxel, label: &L, face: Direction, other: Option<L>) -> Result<()> {
        self.enter(BuildPhase::FaceEmission);
        let mut darts: SmallVec<[(Flag, DartId); 8]> = SmallVec::new();
        for edge in face.perpendicular() {
            let Some(axis) = face.third_axis(edge) else {
                continue;
            };
            for positive in [false, true] {
                let flag = Flag {
                    voxel: *voxel,
                    face,
                    edge,
                    vertex: Direction::new(axis, positive),
                };
                let key = flag.key();
                let dart = self.map.allocate();
                if self.flags.insert(key, dart).is_some() {
                    return Err(self.corrupt(Error::InvariantViolation(format!(
                        "flag of voxel {voxel} emitted twice"
                    ))));
                }
                self.origins.insert(
                    dart,
                    DartOrigin {
                        label: label.clone(),
                        pointel: key.pointel,
                    },
                );
                darts.push((flag, dart));
            }
        }
        self.report.faces_emitted += 1;
        self.report.darts_created += darts.len();

        // The square is closed first so the sews below see whole orbits.
        for &(flag, dart) in &darts {
            for (dim, partner) in [(0, flag.beta0()), (1, flag.beta1())] {
                let Some(&target) = self.flags.get(&partner.key()) else {
                    return Err(self.corrupt(Error::InvariantViolation(format!(
                        "square of voxel {voxel} is missing a flag"
                    ))));
                };
                if self.map.is_free(dim, dart) {
                    self.map
                        .link(dim, dart, target)
                        .map_err(|e| self.corrupt(e))?;
                }
            }
        }

        self.enter(BuildPhase::Sewing);
        let has_neighbor = other.is_some();
        for &(flag, dart) in &darts {
            let partners = [
                (2, Some(self.beta2(flag, label))),
                (3, has_neighbor.then(|| flag.beta3())),
            ];
            for (dim, partner) in partners {
                let Some(partner) = partner else {
                    continue;
                };
                let Some(&target) = self.flags.get(&partner.key()) else {
                    continue;
                };
                if !self.map.is_free(dim, dart) {
                    continue;
                }
                self.map
                    .sew(dim, dart, target)
                    .map_err(|e| self.corrupt(e))?;
            }
        }

        let coordinate = boundary_kcoords(voxel, &[face])[face.axis()];
        let plane = Plane {
            axis: face.axis(),
            coordinate,
        };
        let first = darts[0].1;
        self.interfaces
            .push((first, AttributeValue::interface(Some(label.clone()), other, plane)));
        Ok(())
    }

    /// The flag across the edge, on the next boundary face of the same
    /// region: around a concave corner, straight on, or around the voxel.
    fn beta2(&self, flag: Flag, label: &L) -> Flag {
        let inside = |v: &Voxel| self.labels.get(v) == Some(label);
        let Flag {
            voxel,
            face,
            edge,
            vertex,
        } = flag;
        let side = edge.step(&voxel);
        if inside(&side) {
            let diagonal = face.step(&side);
            if inside(&diagonal) {
                Flag {
                    voxel: diagonal,
                    face: edge.opposite(),
                    edge: face.opposite(),
                    vertex,
                }
            } else {
                Flag {
                    voxel: side,
                    face,
                    edge: edge.opposite(),
                    vertex,
                }
            }
        } else {
            Flag {
                voxel,
                face: edge,
                edge: face,
                vertex,
            }
        }
    }

    fn tag_interfaces(&mut self) -> Result<()> {
        for (dart, value) in std::mem::take(&mut self.interfaces) {
            self.map.set_attribute(dart, 2, value)?;
        }
        Ok(())
    }

    /// Removes `dim`-cells until a full pass removes none. Refused removals
    /// are expected: they keep the cells that carry geometry or topology.
    fn simplify(&mut self, dim: usize) -> Result<usize> {
        let mut removed = 0;
        loop {
            let candidates: Vec<DartId> = self.map.cells(dim).collect();
            let mut pass = 0;
            for dart in candidates {
                if !self.map.contains(dart) {
                    continue;
                }
                match self.map.remove_cell(dart, dim) {
                    Ok(()) => pass += 1,
                    Err(Error::AmbiguousRemoval { .. } | Error::AttributeConflict { .. }) => {}
                    Err(e) => return Err(self.corrupt(e)),
                }
            }
            if pass == 0 {
                return Ok(removed);
            }
            removed += pass;
        }
    }

    /// Attaches region labels to volumes, and incident labels to edges and
    /// vertices. Vertices also get their position when embedding is on.
    fn tag_cells(&mut self) -> Result<()> {
        let volumes: Vec<DartId> = self.map.cells(3).collect();
        for rep in volumes {
            if let Some(origin) = self.origins.get(&rep) {
                let value = AttributeValue::Region(origin.label.clone());
                self.map.set_attribute(rep, 3, value)?;
            }
        }

        let edges: Vec<DartId> = self.map.cells(1).collect();
        for rep in edges {
            let labels = self.incident_labels(rep, 1);
            self.map
                .set_attribute(rep, 1, AttributeValue::labels(labels))?;
        }

        let vertices: Vec<DartId> = self.map.cells(0).collect();
        for rep in vertices {
            let position = if self.config.embed_vertices {
                self.origins
                    .get(&rep)
                    .and_then(|origin| pointel_corner(&origin.pointel))
                    .map(|corner| self.embedding.embed(&corner))
            } else {
                None
            };
            let labels = self.incident_labels(rep, 0);
            self.map
                .set_attribute(rep, 0, AttributeValue::vertex(labels, position))?;
        }
        Ok(())
    }

    /// Labels of the regions around the `dim`-cell of `rep`, with `None`
    /// for the outside of the image.
    fn incident_labels(&self, rep: DartId, dim: usize) -> Vec<Option<L>> {
        let mut labels = Vec::new();
        for dart in self.map.cell(rep, dim) {
            if let Some(origin) = self.origins.get(&dart) {
                labels.push(Some(origin.label.clone()));
            }
            if self.map.is_free(3, dart) {
                labels.push(None);
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use topomap_core::{Domain, LabeledImage};

    fn unsimplified() -> ExtractionConfig {
        ExtractionConfig {
            simplify_faces: false,
            simplify_edges: false,
            ..ExtractionConfig::default()
        }
    }

    #[test]
    fn single_voxel_is_a_cube() {
        let image = LabeledImage::new(Domain::from_size(1, 1, 1).unwrap(), 4u8);
        let (map, report) = MapBuilder::new().build(&image).unwrap();
        assert_eq!(report.faces_emitted, 6);
        assert_eq!(report.darts_created, 48);
        assert_eq!(report.edges_removed, 0);
        assert_eq!(report.vertices_removed, 0);
        assert_eq!(map.dart_count(), 48);
        assert_eq!(map.cell_count(0), 8);
        assert_eq!(map.cell_count(1), 12);
        assert_eq!(map.cell_count(2), 6);
        assert_eq!(map.cell_count(3), 1);
        assert_eq!(map.euler_characteristic(), 1);
        assert!(map.darts().all(|d| map.is_free(3, d)));
    }

    #[test]
    fn unsimplified_box_keeps_every_square() {
        let image = LabeledImage::new(Domain::from_size(2, 1, 1).unwrap(), 1u8);
        let (map, _) = MapBuilder::new()
            .with_config(unsimplified())
            .build(&image)
            .unwrap();
        assert_eq!(map.cell_count(2), 10);
        assert_eq!(map.cell_count(1), 20);
        assert_eq!(map.cell_count(0), 12);
        assert_eq!(map.euler_characteristic(), 1);
    }

    #[test]
    fn simplified_box_is_a_hexahedron() {
        let image = LabeledImage::new(Domain::from_size(2, 1, 1).unwrap(), 1u8);
        let (map, report) = MapBuilder::new().build(&image).unwrap();
        assert_eq!(report.edges_removed, 4);
        assert_eq!(report.vertices_removed, 4);
        assert_eq!(map.cell_count(2), 6);
        assert_eq!(map.cell_count(1), 12);
        assert_eq!(map.cell_count(0), 8);
    }

    #[test]
    fn cells_carry_attributes() {
        let image = LabeledImage::new(Domain::from_size(1, 1, 1).unwrap(), 4u8);
        let map = build_from_image(&image).unwrap();
        let volume = map.cells(3).next().unwrap();
        assert_eq!(map.attribute(volume, 3), Some(&AttributeValue::Region(4)));
        for face in map.cells(2) {
            match map.attribute(face, 2) {
                Some(AttributeValue::Interface { labels, plane }) => {
                    assert_eq!(labels, &[None, Some(4)]);
                    assert!(plane.coordinate == 0 || plane.coordinate == 2);
                }
                other => panic!("unexpected face attribute {other:?}"),
            }
        }
        for edge in map.cells(1) {
            assert_eq!(
                map.attribute(edge, 1),
                Some(&AttributeValue::Labels(vec![None, Some(4)]))
            );
        }
        assert_eq!(map.attributes(0).count(), 8);
        for vertex in map.cells(0) {
            match map.attribute(vertex, 0) {
                Some(AttributeValue::Vertex { labels, position }) => {
                    assert_eq!(labels, &vec![None, Some(4)]);
                    assert!(position.is_some());
                }
                other => panic!("unexpected vertex attribute {other:?}"),
            }
        }
    }

    #[test]
    fn vertices_list_every_incident_region() {
        let mut image = LabeledImage::new(Domain::from_size(2, 1, 1).unwrap(), 1u8);
        image.set(&Point3::new(1, 0, 0), 2).unwrap();
        let map = build_from_image(&image).unwrap();
        let shared = map
            .attributes(0)
            .filter(|(_, value)| {
                matches!(value, AttributeValue::Vertex { labels, .. }
                    if labels == &vec![None, Some(1), Some(2)])
            })
            .count();
        // The corners of the interface square touch both voxels.
        assert_eq!(shared, 4);
        assert_eq!(map.attributes(0).count(), 12);
    }

    #[test]
    fn vertices_follow_the_grid() {
        let image = LabeledImage::new(Domain::from_size(1, 1, 1).unwrap(), 0u8);
        let builder =
            MapBuilder::with_grid(Point3::new(1.0, 0.0, 0.0), Vector3::new(2.0, 2.0, 2.0)).unwrap();
        let (map, _) = builder.build(&image).unwrap();
        let positions: Vec<Point3<f64>> = map
            .attributes(0)
            .filter_map(|(_, value)| match value {
                AttributeValue::Vertex { position, .. } => *position,
                _ => None,
            })
            .collect();
        assert_eq!(positions.len(), 8);
        let min_x = positions.iter().map(|p| p.x).fold(f64::MAX, f64::min);
        let max_x = positions.iter().map(|p| p.x).fold(f64::MIN, f64::max);
        let max_z = positions.iter().map(|p| p.z).fold(f64::MIN, f64::max);
        assert_relative_eq!(min_x, 1.0);
        assert_relative_eq!(max_x, 3.0);
        assert_relative_eq!(max_z, 2.0);
    }

    #[test]
    fn embedding_can_be_skipped() {
        let image = LabeledImage::new(Domain::from_size(1, 1, 1).unwrap(), 0u8);
        let config = ExtractionConfig {
            embed_vertices: false,
            ..ExtractionConfig::default()
        };
        let (map, _) = MapBuilder::new().with_config(config).build(&image).unwrap();
        assert_eq!(map.attributes(0).count(), 8);
        for (_, value) in map.attributes(0) {
            assert_eq!(value, &AttributeValue::vertex([None, Some(0)], None));
        }
    }

    #[test]
    fn config_from_partial_json() {
        let config: ExtractionConfig = serde_json::from_str(r#"{"validate": false}"#).unwrap();
        assert!(!config.validate);
        assert!(config.simplify_faces);
        assert_eq!(
            serde_json::from_str::<ExtractionConfig>("{}").unwrap(),
            ExtractionConfig::default()
        );
    }

    #[test]
    fn report_serializes() {
        let image = LabeledImage::new(Domain::from_size(1, 1, 1).unwrap(), 0u8);
        let (_, report) = MapBuilder::new().build(&image).unwrap();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"faces_emitted\": 6"));
        assert_eq!(report.statistics.map(|s| s.cells), Some(vec![8, 12, 6, 1]));
    }

    #[test]
    fn flag_moves_are_involutions() {
        let flag = Flag {
            voxel: Point3::new(2, 0, -1),
            face: Direction::PosZ,
            edge: Direction::NegX,
            vertex: Direction::PosY,
        };
        assert_eq!(flag.beta0().beta0(), flag);
        assert_eq!(flag.beta1().beta1(), flag);
        assert_eq!(flag.beta3().beta3(), flag);
        assert_eq!(flag.beta3().key().linel, flag.key().linel);
        assert_ne!(flag.beta3().key(), flag.key());
    }
}
