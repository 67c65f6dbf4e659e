//! Geometric checks over a generated mesh.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::triangulate::triangle_winds_outward;
use crate::uv::uv_to_direction;
use crate::{CubesphereMesh, FaceSelection};

/// Distance under which two positions count as the same point when welding.
pub const WELD_TOLERANCE: f32 = 1e-5;

/// Summary of [`validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshReport {
    /// Largest `| |p| − 1 |` over all vertices.
    pub max_unit_deviation: f32,
    /// Triangles whose normal points toward the sphere center.
    pub inward_triangles: usize,
    /// Positions left after welding within [`WELD_TOLERANCE`].
    pub distinct_positions: usize,
    /// Distinct positions a seamless mesh of this shape has.
    pub expected_distinct_positions: usize,
    /// Largest position error after reconstructing from UV, if UVs exist.
    pub max_uv_round_trip_error: Option<f32>,
}

impl MeshReport {
    /// True when every check holds within `tolerance`.
    pub fn is_valid(&self, tolerance: f32) -> bool {
        self.max_unit_deviation < tolerance
            && self.inward_triangles == 0
            && self.distinct_positions == self.expected_distinct_positions
            && self.max_uv_round_trip_error.is_none_or(|e| e < tolerance)
    }
}

/// Count positions that remain distinct after welding within `tolerance`.
///
/// Points are bucketed on a `tolerance`-sized grid and compared against the
/// 27 surrounding cells.
pub fn count_distinct_positions(points: impl IntoIterator<Item = Vec3>, tolerance: f32) -> usize {
    let mut cells: FxHashMap<[i64; 3], Vec<Vec3>> = FxHashMap::default();
    let mut distinct = 0;

    for p in points {
        let key = (p / tolerance).floor().as_i64vec3().to_array();
        let mut seen = false;
        'search: for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let neighbor = [key[0] + dx, key[1] + dy, key[2] + dz];
                    if let Some(bucket) = cells.get(&neighbor)
                        && bucket.iter().any(|q| q.distance(p) <= tolerance)
                    {
                        seen = true;
                        break 'search;
                    }
                }
            }
        }
        if !seen {
            cells.entry(key).or_default().push(p);
            distinct += 1;
        }
    }
    distinct
}

/// Distinct points of a seamless mesh: interior grids, shared edges, and
/// the eight cube corners for a full sphere; the whole grid for one face.
fn expected_distinct(rows: usize, faces: FaceSelection) -> usize {
    match faces {
        FaceSelection::All => {
            let inner = rows - 2;
            6 * inner * inner + 12 * inner + 8
        }
        FaceSelection::Single(_) => rows * rows,
    }
}

/// Run all geometric checks over `mesh`.
pub fn validate(mesh: &CubesphereMesh) -> MeshReport {
    let max_unit_deviation = mesh
        .positions()
        .map(|p| (p.length() - 1.0).abs())
        .fold(0.0_f32, f32::max);

    let inward_triangles = mesh
        .triangles()
        .filter(|tri| {
            let [a, b, c] = tri.map(|i| mesh.position(i as usize).as_dvec3());
            !triangle_winds_outward(a, b, c)
        })
        .count();

    let max_uv_round_trip_error = mesh.layout().has_uv().then(|| {
        (0..mesh.vertex_count())
            .filter_map(|i| mesh.uv(i).map(|uv| (i, uv)))
            .map(|(i, uv)| {
                let back = uv_to_direction(uv.as_dvec2()).as_vec3();
                back.distance(mesh.position(i))
            })
            .fold(0.0_f32, f32::max)
    });

    MeshReport {
        max_unit_deviation,
        inward_triangles,
        distinct_positions: count_distinct_positions(mesh.positions(), WELD_TOLERANCE),
        expected_distinct_positions: expected_distinct(mesh.rows() as usize, mesh.selection()),
        max_uv_round_trip_error,
    }
}
