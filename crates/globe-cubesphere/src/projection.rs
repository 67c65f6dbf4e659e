//! Face grid projection by plane-normal intersection.
//!
//! Each grid point is the direction shared by two planes through the sphere
//! center: a latitudinal plane rotating from +45° to −45° down the rows, and
//! a longitudinal plane rotating from −45° to +45° across the columns. Their
//! normals' cross product is the intersection line, which spaces points by
//! equal angle across the face instead of bunching them at the poles.

use glam::DVec3;

use crate::{CubeFace, MeshError};

/// Reject grids that cannot be divided into cells.
pub(crate) fn check_rows(rows: u32) -> Result<(), MeshError> {
    if rows < 2 {
        return Err(MeshError::InvalidRows { rows });
    }
    Ok(())
}

/// Normal of the latitudinal plane for row `i`.
///
/// At latitude 0 the normal is `(0, 1, 0)`; it is rotated by `a2` about z.
#[inline]
fn latitude_normal(rows: u32, i: u32) -> DVec3 {
    let a2 = (45.0 - 90.0 * f64::from(i) / f64::from(rows - 1)).to_radians();
    DVec3::new(-a2.sin(), a2.cos(), 0.0)
}

/// Normal of the longitudinal plane for column `j`.
///
/// At longitude 0 the normal is `(0, 0, −1)`; it is rotated by `a1` about y.
#[inline]
fn longitude_normal(rows: u32, j: u32) -> DVec3 {
    let a1 = (-45.0 + 90.0 * f64::from(j) / f64::from(rows - 1)).to_radians();
    DVec3::new(-a1.sin(), 0.0, -a1.cos())
}

/// Unit direction of grid point `(row i, column j)` on the reference `+X` face.
///
/// Caller guarantees `rows >= 2` and `i, j < rows`.
#[inline]
#[must_use]
pub fn grid_direction(rows: u32, i: u32, j: u32) -> DVec3 {
    debug_assert!(rows >= 2, "grid needs at least 2 rows, got {rows}");
    longitude_normal(rows, j)
        .cross(latitude_normal(rows, i))
        .normalize()
}

/// Visit every grid point of `face` in row-major order (rows outer).
pub(crate) fn for_each_grid_point(rows: u32, face: CubeFace, mut visit: impl FnMut(DVec3)) {
    for i in 0..rows {
        let n2 = latitude_normal(rows, i);
        for j in 0..rows {
            let v = longitude_normal(rows, j).cross(n2).normalize();
            visit(face.map_direction(v));
        }
    }
}

/// Project a `rows × rows` grid onto the unit sphere for one face.
///
/// Points are returned row-major; point `(i, j)` sits at `j + i * rows`,
/// which is the numbering the triangulator assumes.
pub fn project_face(rows: u32, face: CubeFace) -> Result<Vec<DVec3>, MeshError> {
    check_rows(rows)?;
    let count = usize::try_from(u64::from(rows) * u64::from(rows))
        .map_err(|_| MeshError::GridOverflow { rows })?;

    let mut points = Vec::new();
    points.try_reserve_exact(count)?;
    for_each_grid_point(rows, face, |p| points.push(p));
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_center_point_is_face_normal() {
        for face in CubeFace::ALL {
            let points = project_face(5, face).unwrap();
            let center = points[2 + 2 * 5];
            assert!(
                (center - face.normal()).length() < EPSILON,
                "center of {face:?} is {center:?}"
            );
        }
    }

    #[test]
    fn test_all_points_on_unit_sphere() {
        for face in CubeFace::ALL {
            for p in project_face(17, face).unwrap() {
                assert!((p.length() - 1.0).abs() < EPSILON, "{face:?}: |p| = {}", p.length());
            }
        }
    }

    #[test]
    fn test_reference_corners_are_cube_corners() {
        let k = 1.0 / 3.0_f64.sqrt();
        let points = project_face(2, CubeFace::PosX).unwrap();
        let expected = [
            DVec3::new(k, k, k),
            DVec3::new(k, k, -k),
            DVec3::new(k, -k, k),
            DVec3::new(k, -k, -k),
        ];
        for (p, e) in points.iter().zip(expected) {
            assert!((*p - e).length() < EPSILON, "got {p:?}, expected {e:?}");
        }
    }

    #[test]
    fn test_rows_go_down_and_columns_go_right() {
        // Viewed from outside +X with +Y up, "right" is −Z.
        let rows = 9;
        let top = grid_direction(rows, 0, 4);
        let bottom = grid_direction(rows, rows - 1, 4);
        let left = grid_direction(rows, 4, 0);
        let right = grid_direction(rows, 4, rows - 1);
        assert!(top.y > 0.0 && bottom.y < 0.0);
        assert!(left.z > 0.0 && right.z < 0.0);
    }

    #[test]
    fn test_row_major_order() {
        let rows = 4;
        let points = project_face(rows, CubeFace::NegY).unwrap();
        assert_eq!(points.len(), 16);
        for i in 0..rows {
            for j in 0..rows {
                let expected = CubeFace::NegY.map_direction(grid_direction(rows, i, j));
                assert_eq!(points[(j + i * rows) as usize], expected);
            }
        }
    }

    #[test]
    fn test_degenerate_rows_rejected() {
        for rows in [0, 1] {
            let err = project_face(rows, CubeFace::PosX).unwrap_err();
            assert!(matches!(err, MeshError::InvalidRows { rows: r } if r == rows));
        }
    }

    #[test]
    fn test_equal_angle_spacing_along_center_row() {
        let rows = 9;
        let step = 90.0_f64.to_radians() / f64::from(rows - 1);
        for j in 0..rows - 1 {
            let a = grid_direction(rows, 4, j);
            let b = grid_direction(rows, 4, j + 1);
            let angle = a.dot(b).clamp(-1.0, 1.0).acos();
            assert!((angle - step).abs() < 1e-9, "uneven spacing at column {j}");
        }
    }
}
