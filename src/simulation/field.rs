//! Field evaluation at arbitrary points.
//!
//! Electric field/potential from the charge set and the point-dipole field
//! from magnets, all sharing the same softened squared distance
//! `r2 = |d|^2 + softening^2`. Pure functions: callers decide self-exclusion,
//! and with zero softening a query exactly on top of a source produces a
//! singular value rather than an error.

use crate::body::{Charge, Magnet};
use crate::config::SimConfig;
use ultraviolet::Vec2;

/// Result of sampling the field solver at a single point.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldSample {
    pub pos: Vec2,
    pub field: Vec2,
    pub potential: f32,
}

/// Electric field at `pos`: sum of `k * q * d / r2^1.5` over every charge,
/// `d = pos - charge.pos`.
pub fn electric_field_at(pos: Vec2, charges: &[Charge], k: f32, softening: f32) -> Vec2 {
    let eps_sq = softening * softening;
    let mut field = Vec2::zero();
    for c in charges {
        let d = pos - c.pos;
        let r2 = d.mag_sq() + eps_sq;
        field += d * (k * c.charge / (r2 * r2.sqrt()));
    }
    field
}

/// Electric potential at `pos`: sum of `k * q / r2^0.5` over every charge.
pub fn potential_at(pos: Vec2, charges: &[Charge], k: f32, softening: f32) -> f32 {
    let eps_sq = softening * softening;
    let mut potential = 0.0f32;
    for c in charges {
        let d = pos - c.pos;
        let r2 = d.mag_sq() + eps_sq;
        potential += k * c.charge / r2.sqrt();
    }
    potential
}

/// Standalone field query with the same constants the force computation uses.
/// Intended for rendering layers drawing field-direction glyphs.
pub fn electric_field(pos: Vec2, charges: &[Charge], cfg: &SimConfig) -> Vec2 {
    electric_field_at(pos, charges, cfg.k, cfg.softening)
}

/// Point-dipole field of one magnet at `pos`:
/// `B = 3 * (m . d) * d / r2^2.5 - m / r2^1.5`, `d = pos - magnet.pos`.
pub fn magnetic_field_at(pos: Vec2, magnet: &Magnet, softening: f32) -> Vec2 {
    let m = magnet.moment();
    let d = pos - magnet.pos;
    let r2 = d.mag_sq() + softening * softening;
    let r = r2.sqrt();
    let r3 = r2 * r;
    let r5 = r2 * r3;
    d * (3.0 * m.dot(d) / r5) - m / r3
}

/// Linear superposition of every magnet's dipole field at `pos`.
pub fn total_magnetic_field_at(pos: Vec2, magnets: &[Magnet], softening: f32) -> Vec2 {
    let mut field = Vec2::zero();
    for magnet in magnets {
        field += magnetic_field_at(pos, magnet, softening);
    }
    field
}

/// Sample field and potential over an `nx` x `ny` grid spanning `min..=max`.
/// Convenience for renderers drawing glyph grids or isolines.
pub fn sample_field_grid(
    min: Vec2,
    max: Vec2,
    nx: usize,
    ny: usize,
    charges: &[Charge],
    cfg: &SimConfig,
) -> Vec<FieldSample> {
    let nx = nx.max(2);
    let ny = ny.max(2);
    let span = max - min;
    let mut samples = Vec::with_capacity(nx * ny);
    for iy in 0..ny {
        for ix in 0..nx {
            let pos = min
                + Vec2::new(
                    span.x * ix as f32 / (nx - 1) as f32,
                    span.y * iy as f32 / (ny - 1) as f32,
                );
            samples.push(FieldSample {
                pos,
                field: electric_field(pos, charges, cfg),
                potential: potential_at(pos, charges, cfg.k, cfg.softening),
            });
        }
    }
    samples
}
