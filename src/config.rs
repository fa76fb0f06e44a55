// Centralized configuration for simulation parameters

// ====================
// Force Parameters
// ====================
/// Electrostatic constant in simulation units.
pub const DEFAULT_K: f32 = 1.0;
/// Softening length added in quadrature to squared separations.
/// Keeps close-range forces finite; zero softening permits singular values.
pub const DEFAULT_SOFTENING: f32 = 0.1;
/// Magnitude clamp applied to each pairwise acceleration contribution.
pub const DEFAULT_MAX_ACCEL: f32 = 2000.0;

// ====================
// Integration Parameters
// ====================
/// Velocity multiplier applied after each integration sub-step.
pub const DEFAULT_DAMPING: f32 = 1.0;
/// Observed safe upper bound for wall-clock-derived dt. Advisory only:
/// callers clamp before stepping, the kernel integrates whatever it is given.
pub const DT_MAX_HINT: f32 = 0.03;

use serde::{Deserialize, Serialize};

/// Per-step simulation options. Passed by reference into every step and
/// field-query call; the kernel holds no configuration state of its own.
///
/// Deserialization is lenient to match what embedding layers hand over:
/// missing keys take the documented defaults and unrecognized keys are
/// ignored. `max_accel` also accepts the camelCase `maxAccel` spelling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Electrostatic constant `k` in Coulomb's law.
    pub k: f32,
    /// Softening length scale, expected >= 0.
    pub softening: f32,
    /// Velocity damping factor, expected in (0, 1].
    pub damping: f32,
    /// Per-pairwise-contribution acceleration clamp.
    #[serde(alias = "maxAccel")]
    pub max_accel: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            softening: DEFAULT_SOFTENING,
            damping: DEFAULT_DAMPING,
            max_accel: DEFAULT_MAX_ACCEL,
        }
    }
}

impl SimConfig {
    /// Parse options from a flat JSON object, e.g. `{"k": 2.0, "maxAccel": 500}`.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
