//! Force accumulation for the charge set.
//!
//! Overwrites every charge's acceleration from pairwise Coulomb forces and an
//! approximate magnetic coupling. Positions, velocities and magnets are never
//! mutated here; integrators consume the accelerations afterwards.

use crate::body::{Charge, Magnet};
use crate::config::SimConfig;
use crate::simulation::field;
use ultraviolet::Vec2;

/// Clamp a vector's magnitude to `max`, preserving direction.
fn clamp_mag(v: Vec2, max: f32) -> Vec2 {
    let mag = v.mag();
    if mag > max {
        v * (max / mag)
    } else {
        v
    }
}

/// Recompute every charge's acceleration in place.
///
/// Coulomb term: for each unordered pair, `F = k * q_i * q_j * d / r2^1.5`
/// with `d = pos_i - pos_j` and `r2 = |d|^2 + softening^2`. Each side's
/// acceleration increment `F / m` is clamped to `max_accel` independently,
/// per contribution. The clamp is NOT applied to the summed total, so a dense
/// cluster of sub-threshold contributions can still exceed `max_accel`.
///
/// Magnetic term: an approximation of `q * v x B` that rotates the velocity
/// 90 degrees and scales by `q * |B| * |v|`. The force direction depends only
/// on the rotation convention, not on the field's sign. Skipped when either
/// `|v|` or `|B|` is zero, and never clamped.
pub fn accumulate(charges: &mut [Charge], magnets: &[Magnet], cfg: &SimConfig) {
    for c in charges.iter_mut() {
        c.acc = Vec2::zero();
    }

    let eps_sq = cfg.softening * cfg.softening;
    for j in 1..charges.len() {
        let (head, tail) = charges.split_at_mut(j);
        let b = &mut tail[0];
        for a in head.iter_mut() {
            let d = a.pos - b.pos;
            let r2 = d.mag_sq() + eps_sq;
            let force = d * (cfg.k * a.charge * b.charge / (r2 * r2.sqrt()));
            a.acc += clamp_mag(force / a.mass, cfg.max_accel);
            b.acc -= clamp_mag(force / b.mass, cfg.max_accel);
        }
    }

    for c in charges.iter_mut() {
        let b = field::total_magnetic_field_at(c.pos, magnets, cfg.softening);
        let b_mag = b.mag();
        let v_mag = c.vel.mag();
        if b_mag > 0.0 && v_mag > 0.0 {
            let perp_unit = Vec2::new(-c.vel.y, c.vel.x) / v_mag;
            let force = perp_unit * (c.charge * b_mag * v_mag);
            c.acc += force / c.mass;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unclamped() -> SimConfig {
        SimConfig {
            max_accel: f32::INFINITY,
            ..SimConfig::default()
        }
    }

    #[test]
    fn equal_mass_pair_obeys_newtons_third_law_pre_clamp() {
        let mut charges = vec![
            Charge::new(Vec2::new(-1.5, 2.0), 1.0, 3.0),
            Charge::new(Vec2::new(4.0, -0.5), 1.0, 3.0),
        ];
        accumulate(&mut charges, &[], &unclamped());
        assert_eq!(charges[0].acc.x, -charges[1].acc.x);
        assert_eq!(charges[0].acc.y, -charges[1].acc.y);
    }

    #[test]
    fn pair_acceleration_matches_softened_coulomb_magnitude() {
        let d = 5.0f32;
        let s = 0.7f32;
        let mass = 2.0f32;
        let cfg = SimConfig {
            k: 3.0,
            softening: s,
            max_accel: f32::INFINITY,
            ..SimConfig::default()
        };
        let mut charges = vec![
            Charge::new(Vec2::zero(), 1.0, mass),
            Charge::new(Vec2::new(d, 0.0), 1.0, mass),
        ];
        accumulate(&mut charges, &[], &cfg);
        let r2 = d * d + s * s;
        let expected = cfg.k * 1.0 * 1.0 / (r2 * r2.sqrt()) / mass;
        assert!((charges[0].acc.mag() - expected).abs() < 1e-6);
        // Like charges repel: the origin charge is pushed toward -x.
        assert!(charges[0].acc.x < 0.0);
        assert!(charges[1].acc.x > 0.0);
    }

    #[test]
    fn close_pair_is_clamped_per_side() {
        let cfg = SimConfig {
            softening: 0.0,
            max_accel: 10.0,
            ..SimConfig::default()
        };
        // Separation 0.01 would give |a| = 1e6 unclamped.
        let mut charges = vec![
            Charge::new(Vec2::zero(), 1.0, 1.0),
            Charge::new(Vec2::new(0.01, 0.0), 1.0, 4.0),
        ];
        accumulate(&mut charges, &[], &cfg);
        assert!((charges[0].acc.mag() - 10.0).abs() < 1e-3);
        assert!((charges[1].acc.mag() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn clamp_exceeds_bound_in_aggregate() {
        // Known stability gap: the clamp applies per pairwise contribution,
        // so several clamped neighbors still sum past max_accel.
        let cfg = SimConfig {
            softening: 0.0,
            max_accel: 10.0,
            ..SimConfig::default()
        };
        let mut charges = vec![
            Charge::new(Vec2::zero(), 1.0, 1.0),
            Charge::new(Vec2::new(0.01, 0.0), 1.0, 1.0),
            Charge::new(Vec2::new(0.01, 0.01), 1.0, 1.0),
            Charge::new(Vec2::new(0.0, 0.01), 1.0, 1.0),
        ];
        accumulate(&mut charges, &[], &cfg);
        assert!(
            charges[0].acc.mag() > cfg.max_accel,
            "aggregate {} should exceed the per-pair clamp",
            charges[0].acc.mag()
        );
    }

    #[test]
    fn accelerations_are_rezeroed_each_call() {
        let mut charges = vec![Charge::new(Vec2::zero(), 1.0, 1.0)];
        charges[0].acc = Vec2::new(100.0, -100.0);
        accumulate(&mut charges, &[], &SimConfig::default());
        assert_eq!(charges[0].acc, Vec2::zero());
    }

    #[test]
    fn magnetic_coupling_is_perpendicular_with_scalar_magnitude() {
        let cfg = SimConfig::default();
        let magnets = vec![Magnet::new(Vec2::new(0.0, 5.0), 1.2, 8.0)];
        let mass = 2.0f32;
        let q = 1.5f32;
        let vel = Vec2::new(3.0, 0.0);
        let mut charges = vec![Charge::with_vel(Vec2::zero(), vel, q, mass)];
        accumulate(&mut charges, &magnets, &cfg);

        let b_mag = field::total_magnetic_field_at(Vec2::zero(), &magnets, cfg.softening).mag();
        let acc = charges[0].acc;
        assert!(acc.dot(vel).abs() < 1e-5, "coupling must be perpendicular to v");
        assert!((acc.mag() - q * b_mag * vel.mag() / mass).abs() < 1e-4);
        // The rotation convention fixes the sign: v = +x with q > 0 always
        // deflects toward +y, whatever direction B points. This is the
        // specified approximation, not the true cross product.
        assert!(acc.y > 0.0);
    }

    #[test]
    fn magnetic_coupling_skipped_at_rest() {
        let magnets = vec![Magnet::new(Vec2::new(1.0, 1.0), 0.0, 10.0)];
        let mut charges = vec![Charge::new(Vec2::zero(), 1.0, 1.0)];
        accumulate(&mut charges, &magnets, &SimConfig::default());
        assert_eq!(charges[0].acc, Vec2::zero());
    }

    #[test]
    fn summation_follows_collection_order() {
        // Iteration order is the collection order; same inputs give bitwise
        // identical results across calls.
        let mut a = crate::utils::scattered_charges(12, 30.0);
        let mut b = a.clone();
        let cfg = SimConfig::default();
        accumulate(&mut a, &[], &cfg);
        accumulate(&mut b, &[], &cfg);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.acc.x.to_bits(), y.acc.x.to_bits());
            assert_eq!(x.acc.y.to_bits(), y.acc.y.to_bits());
        }
    }
}
