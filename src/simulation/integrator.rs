//! Time integrators for the charge set.
//!
//! Both schemes recompute forces through [`forces::accumulate`] and mutate
//! positions/velocities in place. Pinned charges (held by the embedding
//! layer, e.g. during a drag) are never written: Euler skips them outright
//! and RK4 restores them from its snapshot so the four speculative stage
//! evaluations cannot make them drift.
//!
//! Neither scheme clamps `dt`; callers deriving dt from wall-clock time
//! should cap it (see [`crate::config::DT_MAX_HINT`]).

use crate::body::{Charge, Magnet};
use crate::config::SimConfig;
use crate::simulation::forces;
use ultraviolet::Vec2;

/// Advance one semi-implicit Euler step: one force evaluation, then for each
/// non-pinned charge `v += a * dt`, `v *= damping`, `x += v * dt`.
pub fn step_euler(charges: &mut [Charge], magnets: &[Magnet], dt: f32, cfg: &SimConfig) {
    forces::accumulate(charges, magnets, cfg);
    for c in charges.iter_mut() {
        if c.pinned {
            continue;
        }
        c.vel += c.acc * dt;
        c.vel *= cfg.damping;
        c.pos += c.vel * dt;
    }
}

/// Position/velocity derivative of every charge at the state it currently
/// holds: dx/dt = v, dv/dt = a.
struct Derivative {
    dpos: Vec<Vec2>,
    dvel: Vec<Vec2>,
}

fn derivative(charges: &mut [Charge], magnets: &[Magnet], cfg: &SimConfig) -> Derivative {
    forces::accumulate(charges, magnets, cfg);
    Derivative {
        dpos: charges.iter().map(|c| c.vel).collect(),
        dvel: charges.iter().map(|c| c.acc).collect(),
    }
}

/// Move every non-pinned charge to `state0 + h * k` ahead of the next stage
/// evaluation. Pinned charges keep whatever state they hold, so their stage
/// derivatives are taken at that state.
fn apply_stage(charges: &mut [Charge], state0: &[(Vec2, Vec2)], k: &Derivative, h: f32) {
    for (i, c) in charges.iter_mut().enumerate() {
        if c.pinned {
            continue;
        }
        c.pos = state0[i].0 + k.dpos[i] * h;
        c.vel = state0[i].1 + k.dvel[i] * h;
    }
}

/// Advance one classical fourth-order Runge-Kutta step (four force
/// evaluations). Damping is applied once, to the weighted velocity
/// combination. Pinned charges are restored to their snapshot at the end.
pub fn step_rk4(charges: &mut [Charge], magnets: &[Magnet], dt: f32, cfg: &SimConfig) {
    let state0: Vec<(Vec2, Vec2)> = charges.iter().map(|c| (c.pos, c.vel)).collect();

    let k1 = derivative(charges, magnets, cfg);
    apply_stage(charges, &state0, &k1, 0.5 * dt);
    let k2 = derivative(charges, magnets, cfg);
    apply_stage(charges, &state0, &k2, 0.5 * dt);
    let k3 = derivative(charges, magnets, cfg);
    apply_stage(charges, &state0, &k3, dt);
    let k4 = derivative(charges, magnets, cfg);

    let sixth = dt / 6.0;
    for (i, c) in charges.iter_mut().enumerate() {
        if c.pinned {
            c.pos = state0[i].0;
            c.vel = state0[i].1;
            continue;
        }
        c.pos = state0[i].0
            + (k1.dpos[i] + (k2.dpos[i] + k3.dpos[i]) * 2.0 + k4.dpos[i]) * sixth;
        c.vel = (state0[i].1
            + (k1.dvel[i] + (k2.dvel[i] + k3.dvel[i]) * 2.0 + k4.dvel[i]) * sixth)
            * cfg.damping;
    }
}
