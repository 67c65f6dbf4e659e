//! Index generation for face grids, with outward counter-clockwise winding.

use glam::DVec3;

use crate::MeshError;
use crate::projection::check_rows;

/// Check if a triangle has outward-facing winding order.
///
/// Returns `true` if the triangle's normal (via cross product) has a
/// positive dot product with the centroid direction from the sphere center.
#[must_use]
pub fn triangle_winds_outward(v0: DVec3, v1: DVec3, v2: DVec3) -> bool {
    let face_normal = (v1 - v0).cross(v2 - v0);
    let centroid = (v0 + v1 + v2) / 3.0;
    face_normal.dot(centroid) > 0.0
}

/// Write the indices of one face grid into `out`.
///
/// `out` must hold exactly `(rows − 1)² · 6` entries.
pub(crate) fn fill_face_indices(rows: u32, face_offset: u32, out: &mut [u32]) {
    let mut k = 0;
    for i in 0..rows - 1 {
        for j in 0..rows - 1 {
            let tl = j + i * rows + face_offset;
            let tr = tl + 1;
            let bl = tl + rows;
            let br = bl + 1;

            // Rows run down the face and columns run right, so (tl, bl, tr)
            // and (tr, bl, br) are both counter-clockwise from outside.
            out[k..k + 6].copy_from_slice(&[tl, bl, tr, tr, bl, br]);
            k += 6;
        }
    }
    debug_assert_eq!(k, out.len());
}

/// Build the index list for one `rows × rows` face grid.
///
/// `face_offset` is added to every index so several faces can share one
/// vertex buffer. Two triangles are emitted per cell, `(rows − 1)² · 6`
/// indices in total.
pub fn build_indices(rows: u32, face_offset: u32) -> Result<Vec<u32>, MeshError> {
    check_rows(rows)?;
    let cells = u64::from(rows - 1);
    let len = cells
        .checked_mul(cells)
        .and_then(|n| n.checked_mul(6))
        .and_then(|n| usize::try_from(n).ok())
        .ok_or(MeshError::GridOverflow { rows })?;

    let mut indices = Vec::new();
    indices.try_reserve_exact(len)?;
    indices.resize(len, 0);
    fill_face_indices(rows, face_offset, &mut indices);
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CubeFace, project_face};

    #[test]
    fn test_single_cell_indices() {
        assert_eq!(build_indices(2, 0).unwrap(), vec![0, 2, 1, 1, 2, 3]);
    }

    #[test]
    fn test_face_offset_shifts_every_index() {
        let base = build_indices(3, 0).unwrap();
        let shifted = build_indices(3, 9).unwrap();
        assert_eq!(base.len(), 24);
        for (a, b) in base.iter().zip(&shifted) {
            assert_eq!(a + 9, *b);
        }
    }

    #[test]
    fn test_index_count_and_range() {
        for rows in [2u32, 3, 5, 9, 17] {
            let indices = build_indices(rows, 0).unwrap();
            assert_eq!(indices.len() as u32, (rows - 1) * (rows - 1) * 6);
            assert!(indices.iter().all(|&i| i < rows * rows));
        }
    }

    #[test]
    fn test_every_triangle_winds_outward_on_every_face() {
        let rows = 5;
        let indices = build_indices(rows, 0).unwrap();
        for face in CubeFace::ALL {
            let points = project_face(rows, face).unwrap();
            for tri in indices.chunks_exact(3) {
                let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| points[i as usize]);
                assert!(
                    triangle_winds_outward(a, b, c),
                    "triangle {tri:?} on {face:?} winds inward"
                );
            }
        }
    }

    #[test]
    fn test_no_degenerate_triangles() {
        for tri in build_indices(4, 0).unwrap().chunks_exact(3) {
            assert_ne!(tri[0], tri[1]);
            assert_ne!(tri[1], tri[2]);
            assert_ne!(tri[0], tri[2]);
        }
    }

    #[test]
    fn test_degenerate_rows_rejected() {
        assert!(matches!(
            build_indices(1, 0),
            Err(MeshError::InvalidRows { rows: 1 })
        ));
    }

    #[test]
    fn test_oversized_grid_overflows() {
        assert!(matches!(
            build_indices(u32::MAX, 0),
            Err(MeshError::GridOverflow { rows: u32::MAX })
        ));
    }

    #[test]
    fn test_reversed_triangle_winds_inward() {
        let p = project_face(2, CubeFace::PosZ).unwrap();
        assert!(triangle_winds_outward(p[0], p[2], p[1]));
        assert!(!triangle_winds_outward(p[0], p[1], p[2]));
    }
}
