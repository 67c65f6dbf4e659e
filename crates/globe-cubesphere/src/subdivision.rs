//! Validated subdivision levels and the buffer sizes they imply.

use crate::MeshError;

/// Highest accepted subdivision level.
///
/// At level 15 a six-face mesh has `6 * 32769²` vertices, which no longer
/// fits in a `u32` index.
pub const MAX_SUBDIVISION: u32 = 14;

/// A subdivision level in `0..=MAX_SUBDIVISION`.
///
/// Level `n` gives `2^n + 1` vertices per face row. Level 0 is the bare cube
/// with 2 rows; from level 1 on the row count is odd, so every face has a
/// center row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubdivisionLevel(u32);

impl SubdivisionLevel {
    /// Validate a raw level.
    pub fn new(level: i32) -> Result<Self, MeshError> {
        match u32::try_from(level) {
            Ok(l) if l <= MAX_SUBDIVISION => Ok(Self(l)),
            _ => Err(MeshError::InvalidSubdivision {
                level: i64::from(level),
                max: MAX_SUBDIVISION,
            }),
        }
    }

    /// The raw level.
    #[inline]
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Vertices per face row: `2^n + 1`.
    #[inline]
    #[must_use]
    pub fn rows(self) -> u32 {
        (1u32 << self.0) + 1
    }

    /// Vertices on one face: `rows²`.
    #[inline]
    #[must_use]
    pub fn vertices_per_face(self) -> u64 {
        let rows = u64::from(self.rows());
        rows * rows
    }

    /// Indices on one face: `(rows − 1)² · 6`.
    #[inline]
    #[must_use]
    pub fn indices_per_face(self) -> u64 {
        let cells = u64::from(self.rows() - 1);
        cells * cells * 6
    }

    /// Convert a per-face count times `faces` into a `usize` buffer length.
    pub(crate) fn buffer_len(
        self,
        per_face: u64,
        faces: usize,
        stride: usize,
    ) -> Result<usize, MeshError> {
        usize::try_from(per_face)
            .ok()
            .and_then(|n| n.checked_mul(faces))
            .and_then(|n| n.checked_mul(stride))
            .ok_or(MeshError::CapacityOverflow { level: self.0 })
    }
}

impl TryFrom<i32> for SubdivisionLevel {
    type Error = MeshError;

    fn try_from(level: i32) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl std::fmt::Display for SubdivisionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}
