use crate::body::{Charge, Magnet};
use ultraviolet::Vec2;

/// Scatter `n` unit charges over a disc of the given radius, positive on the
/// left half and negative on the right. Seeded, so repeated calls build the
/// same scene.
pub fn scattered_charges(n: usize, radius: f32) -> Vec<Charge> {
    fastrand::seed(0);
    let mut charges = Vec::with_capacity(n);
    while charges.len() < n {
        let a = fastrand::f32() * std::f32::consts::TAU;
        let (sin, cos) = a.sin_cos();
        let r = radius * fastrand::f32().sqrt();
        let pos = Vec2::new(cos, sin) * r;
        let charge = if pos.x < 0.0 { 1.0 } else { -1.0 };
        charges.push(Charge::new(pos, charge, 1.0));
    }
    charges
}

/// Lay out `n` equally spaced bar magnets along the x axis, all pointing +x.
pub fn magnet_row(n: usize, spacing: f32, strength: f32) -> Vec<Magnet> {
    (0..n)
        .map(|i| Magnet::new(Vec2::new(i as f32 * spacing, 0.0), 0.0, strength))
        .collect()
}
