//! Equirectangular texture coordinates for unit-sphere positions.
//!
//! `θ = atan2(−z, x)` and `φ = acos(−y)`, mapped linearly onto `[0, 1]²`.
//! The negated `z` and `y` match the orientation of standard world maps
//! loaded bottom-up; flipping either sign mirrors the texture.

use std::f64::consts::{PI, TAU};

use glam::{DVec2, DVec3};

/// Texture coordinate for a unit-sphere position.
///
/// `u` wraps once around the y axis; `v` runs from the south pole (`0`) to
/// the north pole (`1`).
#[inline]
#[must_use]
pub fn spherical_uv(position: DVec3) -> DVec2 {
    let theta = (-position.z).atan2(position.x);
    let phi = (-position.y).clamp(-1.0, 1.0).acos();
    DVec2::new((theta + PI) / TAU, phi / PI)
}

/// Unit direction for a texture coordinate; inverse of [`spherical_uv`].
#[inline]
#[must_use]
pub fn uv_to_direction(uv: DVec2) -> DVec3 {
    let theta = uv.x * TAU - PI;
    let phi = uv.y * PI;
    let ring = phi.sin();
    DVec3::new(ring * theta.cos(), -phi.cos(), -ring * theta.sin())
}
