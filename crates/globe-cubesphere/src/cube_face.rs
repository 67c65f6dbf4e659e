//! The six faces of a cubesphere and the axis remapping that orients each one.

use glam::DVec3;

/// The six faces of the cube that forms the cubesphere.
///
/// Each variant corresponds to a face whose outward normal points
/// along the named axis direction. The discriminant is the face's position
/// in generated buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

/// One output axis of a face mapping: which input axis to read, and its sign.
#[derive(Clone, Copy, Debug)]
struct AxisSource {
    axis: usize,
    sign: f64,
}

const fn src(axis: usize, sign: f64) -> AxisSource {
    AxisSource { axis, sign }
}

/// Per-face `(x-out, y-out, z-out)` sources, indexed by `CubeFace as usize`.
///
/// Every row is a proper rotation of the `+X` grid, so winding and seams
/// survive the remap on all six faces.
const AXIS_TABLE: [[AxisSource; 3]; 6] = [
    // +X: ( x,  y,  z)
    [src(0, 1.0), src(1, 1.0), src(2, 1.0)],
    // −X: (−x,  y, −z)
    [src(0, -1.0), src(1, 1.0), src(2, -1.0)],
    // +Y: (−z,  x, −y)
    [src(2, -1.0), src(0, 1.0), src(1, -1.0)],
    // −Y: ( z, −x, −y)
    [src(2, 1.0), src(0, -1.0), src(1, -1.0)],
    // +Z: (−z,  y,  x)
    [src(2, -1.0), src(1, 1.0), src(0, 1.0)],
    // −Z: ( z,  y, −x)
    [src(2, 1.0), src(1, 1.0), src(0, -1.0)],
];

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Position of this face in [`CubeFace::ALL`].
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            CubeFace::PosX => DVec3::X,
            CubeFace::NegX => DVec3::NEG_X,
            CubeFace::PosY => DVec3::Y,
            CubeFace::NegY => DVec3::NEG_Y,
            CubeFace::PosZ => DVec3::Z,
            CubeFace::NegZ => DVec3::NEG_Z,
        }
    }

    /// Short label used in logs and exported group names.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CubeFace::PosX => "+X",
            CubeFace::NegX => "-X",
            CubeFace::PosY => "+Y",
            CubeFace::NegY => "-Y",
            CubeFace::PosZ => "+Z",
            CubeFace::NegZ => "-Z",
        }
    }

    /// Value placed at output `axis` (0 = x, 1 = y, 2 = z) of a vertex on
    /// this face, given a direction computed on the reference `+X` grid.
    ///
    /// # Panics
    ///
    /// Panics if `axis > 2`.
    #[inline]
    #[must_use]
    pub fn map_axis(self, direction: DVec3, axis: usize) -> f64 {
        let source = AXIS_TABLE[self.index()][axis];
        source.sign * direction[source.axis]
    }

    /// Remap a reference `+X` direction onto this face.
    #[inline]
    #[must_use]
    pub fn map_direction(self, direction: DVec3) -> DVec3 {
        DVec3::new(
            self.map_axis(direction, 0),
            self.map_axis(direction, 1),
            self.map_axis(direction, 2),
        )
    }
}

/// Free-function form of [`CubeFace::map_axis`].
#[inline]
#[must_use]
pub fn map_axis(direction: DVec3, face: CubeFace, axis: usize) -> f64 {
    face.map_axis(direction, axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DMat3;

    #[test]
    fn test_all_six_face_variants_exist() {
        assert_eq!(CubeFace::ALL.len(), 6);
        for (i, face) in CubeFace::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_map_axis_matches_table() {
        let d = DVec3::new(0.2, 0.3, 0.5);
        let expected = [
            (CubeFace::PosX, DVec3::new(0.2, 0.3, 0.5)),
            (CubeFace::NegX, DVec3::new(-0.2, 0.3, -0.5)),
            (CubeFace::PosY, DVec3::new(-0.5, 0.2, -0.3)),
            (CubeFace::NegY, DVec3::new(0.5, -0.2, -0.3)),
            (CubeFace::PosZ, DVec3::new(-0.5, 0.3, 0.2)),
            (CubeFace::NegZ, DVec3::new(0.5, 0.3, -0.2)),
        ];
        for (face, want) in expected {
            for axis in 0..3 {
                assert_eq!(
                    map_axis(d, face, axis),
                    want[axis],
                    "{face:?} axis {axis} mismatch"
                );
            }
            assert_eq!(face.map_direction(d), want);
        }
    }

    #[test]
    fn test_reference_normal_maps_to_face_normal() {
        for face in CubeFace::ALL {
            let mapped = face.map_direction(DVec3::X);
            assert!(
                (mapped - face.normal()).length() < 1e-12,
                "+X does not map onto the {face:?} normal: {mapped:?}"
            );
        }
    }

    #[test]
    fn test_every_mapping_is_a_rotation() {
        for face in CubeFace::ALL {
            let m = DMat3::from_cols(
                face.map_direction(DVec3::X),
                face.map_direction(DVec3::Y),
                face.map_direction(DVec3::Z),
            );
            assert!(
                (m.determinant() - 1.0).abs() < 1e-12,
                "{face:?} mapping is not a proper rotation (det = {})",
                m.determinant()
            );
        }
    }

    #[test]
    fn test_opposite_face_normals_are_antiparallel() {
        for face in CubeFace::ALL {
            let n = face.normal();
            let opp_n = face.opposite().normal();
            assert!((n + opp_n).length() < 1e-12);
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_axis_panics() {
        let _ = CubeFace::PosX.map_axis(DVec3::X, 3);
    }
}
