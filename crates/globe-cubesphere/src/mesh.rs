//! Cubesphere mesh assembly into flat vertex and index buffers.

use std::ops::Range;

use glam::{Vec2, Vec3};
use tracing::debug;

use crate::projection::for_each_grid_point;
use crate::triangulate::fill_face_indices;
use crate::uv::spherical_uv;
use crate::{CubeFace, FaceSelection, MeshError, SubdivisionLevel, VertexLayout};

/// Parameters for [`generate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshOptions {
    /// Subdivision level; validated by [`SubdivisionLevel::new`].
    pub subdivision: i32,
    /// Per-vertex float layout.
    pub layout: VertexLayout,
    /// Faces to generate.
    pub faces: FaceSelection,
    /// Fill each face on its own thread.
    pub parallel: bool,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            subdivision: 6,
            layout: VertexLayout::PositionUv,
            faces: FaceSelection::All,
            parallel: false,
        }
    }
}

/// A generated cubesphere: interleaved `f32` vertices and `u32` triangle indices.
///
/// Faces occupy consecutive, equally sized ranges of both buffers in the
/// order given by [`CubesphereMesh::faces`]. Vertices on face seams are
/// duplicated, one copy per face.
#[derive(Clone, Debug, PartialEq)]
pub struct CubesphereMesh {
    level: SubdivisionLevel,
    layout: VertexLayout,
    faces: FaceSelection,
    vertices: Vec<f32>,
    indices: Vec<u32>,
}

impl CubesphereMesh {
    /// Subdivision level the mesh was built at.
    pub fn level(&self) -> SubdivisionLevel {
        self.level
    }

    /// Vertex layout of [`Self::vertices`].
    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    /// Which faces the mesh covers.
    pub fn selection(&self) -> FaceSelection {
        self.faces
    }

    /// Faces in buffer order.
    pub fn faces(&self) -> &[CubeFace] {
        self.faces.faces()
    }

    /// Vertices per face row.
    pub fn rows(&self) -> u32 {
        self.level.rows()
    }

    /// Floats per vertex.
    pub fn stride(&self) -> usize {
        self.layout.floats_per_vertex()
    }

    /// Flat interleaved vertex data.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Flat triangle index data.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.stride()
    }

    /// Number of indices, as passed to an indexed draw call.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.vertex_count()`.
    pub fn position(&self, i: usize) -> Vec3 {
        let base = i * self.stride();
        Vec3::from_slice(&self.vertices[base..base + 3])
    }

    /// Texture coordinate of vertex `i`, if the layout has one.
    ///
    /// # Panics
    ///
    /// Panics if the layout has UVs and `i >= self.vertex_count()`.
    pub fn uv(&self, i: usize) -> Option<Vec2> {
        self.layout.has_uv().then(|| {
            let base = i * self.stride() + 3;
            Vec2::from_slice(&self.vertices[base..base + 2])
        })
    }

    /// Iterate over all positions in buffer order.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices
            .chunks_exact(self.stride())
            .map(Vec3::from_slice)
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Vertex index range of the `slot`-th face in [`Self::faces`].
    pub fn face_vertex_range(&self, slot: usize) -> Range<usize> {
        let per_face = self.vertex_count() / self.faces().len();
        slot * per_face..(slot + 1) * per_face
    }

    /// Index buffer range of the `slot`-th face in [`Self::faces`].
    pub fn face_index_range(&self, slot: usize) -> Range<usize> {
        let per_face = self.index_count() / self.faces().len();
        slot * per_face..(slot + 1) * per_face
    }

    /// Vertex data as bytes, ready for a GPU buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes, ready for a GPU buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Take ownership of the vertex and index buffers.
    pub fn into_buffers(self) -> (Vec<f32>, Vec<u32>) {
        (self.vertices, self.indices)
    }
}

/// Reserve a zeroed buffer of exactly `len` elements, failing instead of aborting.
fn zeroed<T: Copy + Default>(len: usize) -> Result<Vec<T>, MeshError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)?;
    buf.resize(len, T::default());
    Ok(buf)
}

/// Fill one face's vertex and index slices.
fn fill_face(
    rows: u32,
    face: CubeFace,
    layout: VertexLayout,
    face_offset: u32,
    vertices: &mut [f32],
    indices: &mut [u32],
) {
    let stride = layout.floats_per_vertex();
    let mut k = 0;
    for_each_grid_point(rows, face, |p| {
        let pos = p.as_vec3();
        vertices[k..k + 3].copy_from_slice(&pos.to_array());
        if layout.has_uv() {
            let uv = spherical_uv(p).as_vec2();
            vertices[k + 3..k + 5].copy_from_slice(&uv.to_array());
        }
        k += stride;
    });
    debug_assert_eq!(k, vertices.len());

    fill_face_indices(rows, face_offset, indices);
}

/// Generate a cubesphere mesh.
///
/// Sizes are checked and both buffers reserved before any vertex is
/// computed, so an oversized request fails up front.
pub fn generate(options: &MeshOptions) -> Result<CubesphereMesh, MeshError> {
    let level = SubdivisionLevel::new(options.subdivision)?;
    let rows = level.rows();
    let layout = options.layout;
    let faces = options.faces.faces();
    let stride = layout.floats_per_vertex();

    let vertex_len = level.buffer_len(level.vertices_per_face(), faces.len(), stride)?;
    let index_len = level.buffer_len(level.indices_per_face(), faces.len(), 1)?;
    let face_vertices = u32::try_from(level.vertices_per_face())
        .map_err(|_| MeshError::CapacityOverflow { level: level.get() })?;

    let mut vertices = zeroed::<f32>(vertex_len)?;
    let mut indices = zeroed::<u32>(index_len)?;

    let jobs = faces
        .iter()
        .zip(vertices.chunks_exact_mut(vertex_len / faces.len()))
        .zip(indices.chunks_exact_mut(index_len / faces.len()))
        .zip((0..).map(|slot: u32| slot * face_vertices));

    if options.parallel && faces.len() > 1 {
        std::thread::scope(|s| {
            for (((&face, v), i), offset) in jobs {
                s.spawn(move || fill_face(rows, face, layout, offset, v, i));
            }
        });
    } else {
        for (((&face, v), i), offset) in jobs {
            fill_face(rows, face, layout, offset, v, i);
        }
    }

    debug!(
        "Generated cubesphere {level}: {} face(s), {} vertices, {} indices, parallel={}",
        faces.len(),
        vertex_len / stride,
        index_len,
        options.parallel
    );

    Ok(CubesphereMesh {
        level,
        layout,
        faces: options.faces,
        vertices,
        indices,
    })
}

/// Six-face, UV-mapped cubesphere at `subdivision`.
pub fn generate_cubesphere(subdivision: i32) -> Result<CubesphereMesh, MeshError> {
    generate(&MeshOptions {
        subdivision,
        ..MeshOptions::default()
    })
}
