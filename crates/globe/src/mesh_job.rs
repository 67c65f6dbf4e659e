//! One generation run: config → mesh → validation → optional OBJ export.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use globe_config::{Config, FaceSetting, MeshConfig};
use globe_cubesphere::{
    CubeFace, CubesphereMesh, FaceSelection, MeshError, MeshOptions, MeshReport, VertexLayout,
    generate, validate, write_obj,
};
use tracing::{info, warn};

/// Failures of a generation run.
#[derive(Debug, thiserror::Error)]
pub(crate) enum JobError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("failed to export OBJ to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("generated mesh failed validation: {0:?}")]
    Invalid(MeshReport),
}

/// Tolerance for the post-generation checks.
const VALIDATION_TOLERANCE: f32 = 1e-5;

fn face_selection(setting: FaceSetting) -> FaceSelection {
    match setting {
        FaceSetting::All => FaceSelection::All,
        FaceSetting::PosX => FaceSelection::Single(CubeFace::PosX),
        FaceSetting::NegX => FaceSelection::Single(CubeFace::NegX),
        FaceSetting::PosY => FaceSelection::Single(CubeFace::PosY),
        FaceSetting::NegY => FaceSelection::Single(CubeFace::NegY),
        FaceSetting::PosZ => FaceSelection::Single(CubeFace::PosZ),
        FaceSetting::NegZ => FaceSelection::Single(CubeFace::NegZ),
    }
}

/// Translate mesh settings into generator options.
pub(crate) fn mesh_options(mesh: &MeshConfig) -> MeshOptions {
    MeshOptions {
        subdivision: mesh.subdivision,
        layout: if mesh.uv {
            VertexLayout::PositionUv
        } else {
            VertexLayout::Position
        },
        faces: face_selection(mesh.faces),
        parallel: mesh.parallel,
    }
}

fn log_summary(mesh: &CubesphereMesh) {
    info!(
        "Cubesphere {}: {} rows/face, {} vertices, {} indices ({} triangles), {} vertex bytes",
        mesh.level(),
        mesh.rows(),
        mesh.vertex_count(),
        mesh.index_count(),
        mesh.triangle_count(),
        mesh.vertex_bytes().len()
    );
    for (slot, face) in mesh.faces().iter().enumerate() {
        let verts = mesh.face_vertex_range(slot);
        let idx = mesh.face_index_range(slot);
        info!(
            "  face {}: vertices {}..{}, indices {}..{}",
            face.label(),
            verts.start,
            verts.end,
            idx.start,
            idx.end
        );
    }
}

fn check(mesh: &CubesphereMesh) -> Result<MeshReport, JobError> {
    let report = validate(mesh);
    info!(
        "Validation: max |p|-1 = {:.2e}, inward triangles = {}, distinct positions = {}/{}",
        report.max_unit_deviation,
        report.inward_triangles,
        report.distinct_positions,
        report.expected_distinct_positions
    );
    if let Some(err) = report.max_uv_round_trip_error {
        info!("Validation: max UV round-trip error = {err:.2e}");
    }
    if !report.is_valid(VALIDATION_TOLERANCE) {
        warn!("Mesh failed validation");
        return Err(JobError::Invalid(report));
    }
    Ok(report)
}

/// Generate, validate, and export according to `config`.
///
/// Nothing is written unless generation and validation both succeed.
pub(crate) fn run(config: &Config) -> Result<CubesphereMesh, JobError> {
    let options = mesh_options(&config.mesh);
    info!(
        "Generating cubesphere: subdivision={}, layout={:?}, faces={:?}, parallel={}",
        options.subdivision, options.layout, options.faces, options.parallel
    );

    let mesh = generate(&options)?;
    log_summary(&mesh);

    if config.mesh.validate {
        check(&mesh)?;
    }

    if let Some(path) = &config.export.obj_path {
        let export_err = |source: std::io::Error| JobError::Export {
            path: path.clone(),
            source,
        };
        let file = File::create(path).map_err(export_err)?;
        write_obj(&mesh, BufWriter::new(file)).map_err(export_err)?;
        info!("Wrote OBJ to {}", path.display());
    }

    Ok(mesh)
}
