//! Mesh generation error types.

use std::collections::TryReserveError;

/// Errors that can occur while generating a cubesphere mesh.
///
/// Every variant is raised before a mesh is returned; callers never see a
/// partially filled buffer.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// Subdivision level is negative or beyond what `u32` indices can address.
    #[error("invalid subdivision level {level}: expected 0..={max}")]
    InvalidSubdivision {
        /// The rejected level.
        level: i64,
        /// Largest accepted level.
        max: u32,
    },

    /// A face grid needs at least two vertices per row.
    #[error("invalid grid resolution: {rows} vertices per row (need at least 2)")]
    InvalidRows {
        /// The rejected row count.
        rows: u32,
    },

    /// A face grid's buffer length does not fit in `usize` on this target.
    #[error("a {rows}x{rows} face grid exceeds addressable memory")]
    GridOverflow {
        /// Vertices per row of the oversized grid.
        rows: u32,
    },

    /// A buffer length does not fit in `usize` on this target.
    #[error("mesh buffers for subdivision level {level} exceed addressable memory")]
    CapacityOverflow {
        /// Level whose buffers overflowed.
        level: u32,
    },

    /// Reserving the vertex or index buffer failed.
    #[error("failed to allocate mesh buffers: {0}")]
    AllocationFailure(#[from] TryReserveError),
}
