// body.rs
// Defines the Charge and Magnet structs that the physics kernel mutates.
// Charges move under Coulomb and magnetic forces; magnets are fixed field
// sources positioned by the embedding layer (dragging) and never move here.

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

use std::sync::atomic::{AtomicU64, Ordering};
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A point charge. `acc` is scratch state overwritten on every step; only
/// `pos` and `vel` carry meaning across steps.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Charge {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Signed charge magnitude.
    pub charge: f32,
    /// Must be > 0; the kernel divides by it without checking.
    pub mass: f32,
    /// True while the embedding layer holds this charge (e.g. a drag).
    /// Integrators never write pos/vel of a pinned charge.
    pub pinned: bool,
    pub id: u64,
}

impl Charge {
    pub fn new(pos: Vec2, charge: f32, mass: f32) -> Self {
        Self {
            pos,
            vel: Vec2::zero(),
            acc: Vec2::zero(),
            charge,
            mass,
            pinned: false,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn with_vel(pos: Vec2, vel: Vec2, charge: f32, mass: f32) -> Self {
        Self {
            vel,
            ..Self::new(pos, charge, mass)
        }
    }
}

/// A bar magnet modeled as an ideal point dipole. Experiences no feedback
/// force or torque from the simulation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Magnet {
    pub pos: Vec2,
    /// Orientation of the dipole moment, radians.
    pub angle: f32,
    pub strength: f32,
    pub pinned: bool,
    pub id: u64,
}

impl Magnet {
    pub fn new(pos: Vec2, angle: f32, strength: f32) -> Self {
        Self {
            pos,
            angle,
            strength,
            pinned: false,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Dipole moment vector, `strength * (cos angle, sin angle)`.
    pub fn moment(&self) -> Vec2 {
        let (sin, cos) = self.angle.sin_cos();
        Vec2::new(cos, sin) * self.strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_charge_starts_at_rest_and_unpinned() {
        let c = Charge::new(Vec2::new(3.0, -2.0), -1.0, 2.5);
        assert_eq!(c.vel, Vec2::zero());
        assert_eq!(c.acc, Vec2::zero());
        assert!(!c.pinned);
    }

    #[test]
    fn ids_are_unique() {
        let a = Charge::new(Vec2::zero(), 1.0, 1.0);
        let b = Charge::new(Vec2::zero(), 1.0, 1.0);
        let m = Magnet::new(Vec2::zero(), 0.0, 1.0);
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, m.id);
    }

    #[test]
    fn moment_follows_orientation() {
        let m = Magnet::new(Vec2::zero(), std::f32::consts::FRAC_PI_2, 3.0);
        let mom = m.moment();
        assert!(mom.x.abs() < 1e-6);
        assert!((mom.y - 3.0).abs() < 1e-6);
    }
}
