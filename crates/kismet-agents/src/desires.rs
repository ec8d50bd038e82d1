//! The desire engine.
//!
//! Each month every desire is recomputed from scratch as a linear
//! combination of a trait pull, the deficit of the matching state scalar,
//! energy, trauma, and the month's theme:
//!
//! ```text
//! love     = love_orientation*5 + (100-love)*0.3 - trauma_factor*20
//! career   = drive*5            + (100-career)*0.3
//! social   = sociability*5      + (100-social)*0.3
//! physical =                      (100-physical)*0.4
//! learning = curiosity*5        + (100-intelligence)*0.3
//! rest     = energy_factor*40 + trauma_factor*30 + stability_factor*20
//! ```
//!
//! The theme bonus is added before clamping to `[0, 100]`. There is no
//! randomness and no memory of previous desires.

use kismet_types::{Desires, LifeState, Theme, Traits};

use crate::agent::Agent;

/// Bonus granted to the desire(s) matching the month's theme.
pub const THEME_BONUS: f64 = 15.0;

/// Weight of a trait in its desire.
const TRAIT_WEIGHT: f64 = 5.0;

/// Weight of a state deficit in its desire.
const DEFICIT_WEIGHT: f64 = 0.3;

/// Weight of the physical deficit (no trait pull).
const PHYSICAL_DEFICIT_WEIGHT: f64 = 0.4;

/// Deficit of a state scalar below 100, never negative.
fn deficit(value: f64) -> f64 {
    (100.0 - value).max(0.0)
}

/// Per-desire bonus vector for a theme. Unknown themes grant nothing.
pub fn theme_bonus(theme: &Theme) -> Desires {
    match theme {
        Theme::Romance => Desires {
            love: THEME_BONUS,
            ..Desires::default()
        },
        Theme::Career | Theme::CareerHustle => Desires {
            career: THEME_BONUS,
            ..Desires::default()
        },
        Theme::Chaos => Desires {
            love: THEME_BONUS * 0.5,
            career: THEME_BONUS * 0.5,
            social: THEME_BONUS * 0.5,
            rest: THEME_BONUS * 0.7,
            ..Desires::default()
        },
        Theme::SelfHelp => Desires {
            learning: THEME_BONUS,
            physical: THEME_BONUS,
            ..Desires::default()
        },
        Theme::Science | Theme::Curiosity => Desires {
            learning: THEME_BONUS,
            ..Desires::default()
        },
        Theme::Other(_) => Desires::default(),
    }
}

/// Compute all six desires from traits, state, trauma, and theme.
pub fn compute_desires(traits: &Traits, state: &LifeState, trauma_level: f64, theme: &Theme) -> Desires {
    let energy_factor = (100.0 - state.energy) / 100.0;
    let trauma_factor = trauma_level / 100.0;
    let stability_factor = (10.0 - traits.stability) / 10.0;

    let bonus = theme_bonus(theme);

    let mut desires = Desires {
        love: traits.love_orientation * TRAIT_WEIGHT + deficit(state.love) * DEFICIT_WEIGHT
            - trauma_factor * 20.0
            + bonus.love,
        career: traits.drive * TRAIT_WEIGHT + deficit(state.career) * DEFICIT_WEIGHT + bonus.career,
        social: traits.sociability * TRAIT_WEIGHT
            + deficit(state.social) * DEFICIT_WEIGHT
            + bonus.social,
        physical: deficit(state.physical) * PHYSICAL_DEFICIT_WEIGHT + bonus.physical,
        learning: traits.curiosity * TRAIT_WEIGHT
            + deficit(state.intelligence) * DEFICIT_WEIGHT
            + bonus.learning,
        rest: energy_factor * 40.0 + trauma_factor * 30.0 + stability_factor * 20.0 + bonus.rest,
    };
    desires.clamp_all();
    desires
}

/// Recompute an agent's desires in place for the given theme.
pub fn update_agent_desires(agent: &mut Agent, theme: &Theme) {
    agent.desires = compute_desires(&agent.traits, &agent.state, agent.trauma_level, theme);
}
