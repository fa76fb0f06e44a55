pub mod body;
pub mod config;
pub mod simulation;
pub mod utils;

pub use body::{Charge, Magnet};
pub use config::SimConfig;
pub use simulation::field::{electric_field, sample_field_grid, total_magnetic_field_at};
pub use simulation::{step, step_euler, step_rk4, Integrator};
