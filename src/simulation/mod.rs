// simulation/mod.rs
// Submodule declarations and the single stepping entry point.

pub mod field;
pub mod forces;
pub mod integrator;

pub use integrator::{step_euler, step_rk4};

use crate::body::{Charge, Magnet};
use crate::config::SimConfig;
use serde::{Deserialize, Serialize};

/// Which integration scheme a step should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Integrator {
    SemiImplicitEuler,
    Rk4,
}

impl Default for Integrator {
    fn default() -> Self {
        Integrator::SemiImplicitEuler
    }
}

/// Advance the system by `dt` with the selected integrator. Mutates `charges`
/// in place; `dt` is taken as given, without clamping.
pub fn step(
    charges: &mut [Charge],
    magnets: &[Magnet],
    dt: f32,
    cfg: &SimConfig,
    method: Integrator,
) {
    match method {
        Integrator::SemiImplicitEuler => integrator::step_euler(charges, magnets, dt, cfg),
        Integrator::Rk4 => integrator::step_rk4(charges, magnets, dt, cfg),
    }
}
