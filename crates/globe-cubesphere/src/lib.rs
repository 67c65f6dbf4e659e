//! Cubesphere mesh generation: a UV-mapped unit sphere built from six
//! subdivided cube faces, plus the index buffer that triangulates it.
//!
//! Each face is a `(2^n + 1)²` grid projected by plane-normal intersection,
//! remapped onto its cube face, and triangulated with outward
//! counter-clockwise winding.

mod cube_face;
mod error;
mod export;
mod layout;
mod mesh;
mod projection;
mod subdivision;
mod triangulate;
mod uv;
mod validate;

pub use cube_face::{CubeFace, map_axis};
pub use error::MeshError;
pub use export::{export_obj, write_obj};
pub use layout::{FaceSelection, VertexLayout};
pub use mesh::{CubesphereMesh, MeshOptions, generate, generate_cubesphere};
pub use projection::{grid_direction, project_face};
pub use subdivision::{MAX_SUBDIVISION, SubdivisionLevel};
pub use triangulate::{build_indices, triangle_winds_outward};
pub use uv::{spherical_uv, uv_to_direction};
pub use validate::{MeshReport, WELD_TOLERANCE, count_distinct_positions, validate};
