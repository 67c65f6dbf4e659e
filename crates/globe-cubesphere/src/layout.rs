//! Vertex layout and face selection for generated meshes.

use crate::CubeFace;

/// Interleaved float layout of one vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VertexLayout {
    /// `x, y, z`
    Position,
    /// `x, y, z, u, v` with equirectangular UVs.
    #[default]
    PositionUv,
}

impl VertexLayout {
    /// Number of `f32` values per vertex.
    #[inline]
    #[must_use]
    pub fn floats_per_vertex(self) -> usize {
        match self {
            VertexLayout::Position => 3,
            VertexLayout::PositionUv => 5,
        }
    }

    /// Byte stride of one vertex.
    #[inline]
    #[must_use]
    pub fn stride_bytes(self) -> usize {
        self.floats_per_vertex() * std::mem::size_of::<f32>()
    }

    /// Whether vertices carry texture coordinates.
    #[inline]
    #[must_use]
    pub fn has_uv(self) -> bool {
        matches!(self, VertexLayout::PositionUv)
    }
}

/// Which faces a mesh covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FaceSelection {
    /// All six faces, in [`CubeFace::ALL`] order.
    #[default]
    All,
    /// One face on its own, indexed from zero.
    Single(CubeFace),
}

impl FaceSelection {
    /// The selected faces in buffer order.
    #[must_use]
    pub fn faces(&self) -> &[CubeFace] {
        match self {
            FaceSelection::All => &CubeFace::ALL,
            FaceSelection::Single(face) => std::slice::from_ref(face),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_strides() {
        assert_eq!(VertexLayout::Position.floats_per_vertex(), 3);
        assert_eq!(VertexLayout::PositionUv.floats_per_vertex(), 5);
        assert_eq!(VertexLayout::PositionUv.stride_bytes(), 20);
        assert!(!VertexLayout::Position.has_uv());
    }

    #[test]
    fn test_face_selection() {
        assert_eq!(FaceSelection::All.faces(), &CubeFace::ALL);
        assert_eq!(
            FaceSelection::Single(CubeFace::NegZ).faces(),
            &[CubeFace::NegZ]
        );
    }
}
