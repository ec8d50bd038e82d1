//! Destiny bias.
//!
//! Each agent carries a fixed destiny seed (plus a per-month blessing set by
//! overrides). Scaled by the run-wide destiny strength, it yields a bias
//! that nudges desire rankings and interaction chemistry up or down.
//!
//! The strength is an explicit value owned by the world and threaded into
//! every call -- there is no process-wide destiny state.

use kismet_types::clamp_score;
use serde::{Deserialize, Serialize};

use crate::agent::Agent;

/// Upper bound of the destiny bias.
const BIAS_MAX: f64 = 1.5;

/// Scale applied to `(bias - 0.5)` when nudging a value.
const NUDGE_SCALE: f64 = 8.0;

/// Default destiny strength.
pub const DEFAULT_DESTINY_STRENGTH: f64 = 50.0;

/// Run-wide destiny strength in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Destiny {
    strength: f64,
}

impl Destiny {
    /// Create a destiny setting, clamping the strength to `[0, 100]`.
    pub fn new(strength: f64) -> Self {
        Self {
            strength: clamp_score(strength),
        }
    }

    /// The configured strength.
    pub const fn strength(self) -> f64 {
        self.strength
    }

    /// Agent-specific bias: `clamp(seed + blessing, 0, 1) * strength / 100`,
    /// clamped to `[0, 1.5]`.
    pub fn bias(self, agent: &Agent) -> f64 {
        let base = (agent.destiny_seed + agent.destiny_blessing).clamp(0.0, 1.0);
        let bias = base * (self.strength / 100.0);
        bias.clamp(0.0, BIAS_MAX)
    }

    /// Nudge a 0-100 value by `(bias - 0.5) * 8`, clamped to `[0, 100]`.
    pub fn apply(self, agent: &Agent, value: f64) -> f64 {
        let adjustment = (self.bias(agent) - 0.5) * NUDGE_SCALE;
        clamp_score(value + adjustment)
    }
}

impl Default for Destiny {
    fn default() -> Self {
        Self::new(DEFAULT_DESTINY_STRENGTH)
    }
}
