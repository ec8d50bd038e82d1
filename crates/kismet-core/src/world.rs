//! The simulated world: population, calendar, themes, and overrides.

use std::collections::{BTreeMap, BTreeSet};

use kismet_agents::{Agent, AgentError, Destiny, archetype_by_label, default_archetypes};
use kismet_events::EventsFeed;
use kismet_types::{AgentLabel, Domain, Theme};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ConfigError, SimulationConfig};

/// Blessing added to an agent's destiny seed while an override blesses it.
pub const BLESSING: f64 = 0.2;

/// Default simulation horizon in months.
pub const DEFAULT_TOTAL_MONTHS: u32 = 12;

/// Errors that can occur when building a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The configuration failed validation.
    #[error("invalid configuration: {source}")]
    InvalidConfig {
        /// The underlying configuration error.
        #[from]
        source: ConfigError,
    },

    /// The population could not be assembled.
    #[error("agent error: {source}")]
    Agent {
        /// The underlying agent error.
        #[from]
        source: AgentError,
    },
}

/// Manual per-agent adjustments, consumed at the start of every month.
///
/// Domain names stay as free-form strings until they are applied; a name
/// that does not parse as a [`Domain`] is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentOverride {
    /// Added to trauma each month; a negative value eases trauma.
    pub trauma_increase: f64,
    /// Desire domain to boost after desires are recomputed.
    pub desire_boost_domain: Option<String>,
    /// Amount added to the boosted desire.
    pub desire_boost_value: f64,
    /// Grants the destiny blessing.
    pub bless: bool,
    /// Forces the big action into `lock_domain`.
    pub lock_choice: bool,
    /// Domain the big action is locked to.
    pub lock_domain: Option<String>,
}

impl AgentOverride {
    /// Destiny blessing granted by this override.
    pub const fn blessing(&self) -> f64 {
        if self.bless { BLESSING } else { 0.0 }
    }

    /// Locked big-action domain, if locking is on and the domain is valid.
    pub fn locked_domain(&self) -> Option<Domain> {
        if !self.lock_choice {
            return None;
        }
        parse_domain(self.lock_domain.as_deref())
    }

    /// Boosted desire domain, if one is named and valid.
    pub fn boosted_domain(&self) -> Option<Domain> {
        parse_domain(self.desire_boost_domain.as_deref())
    }

    /// Trauma change for the month, if the override sets a nonzero one.
    pub fn trauma_change(&self) -> Option<f64> {
        (self.trauma_increase.abs() > 0.0).then_some(self.trauma_increase)
    }
}

fn parse_domain(name: Option<&str>) -> Option<Domain> {
    let name = name?;
    match name.parse() {
        Ok(domain) => Some(domain),
        Err(err) => {
            debug!(%err, "Ignoring override domain");
            None
        }
    }
}

/// The complete state of one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct World {
    /// Display name of the run.
    pub name: String,
    /// The population, in roster order.
    pub agents: Vec<Agent>,
    /// Months completed so far (0 before the first month).
    pub current_month: u32,
    /// Simulation horizon.
    pub total_months: u32,
    /// Theme rotation; month `m` uses entry `(m - 1) % len`.
    pub global_themes: Vec<Theme>,
    /// Run-wide destiny strength.
    pub destiny: Destiny,
    /// Manual adjustments keyed by agent label.
    pub agent_overrides: BTreeMap<AgentLabel, AgentOverride>,
    /// Narrative events emitted so far.
    pub events_feed: EventsFeed,
}

impl World {
    /// Build a world from an explicit population.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Agent`] if two agents share a label.
    pub fn new(
        agents: Vec<Agent>,
        total_months: u32,
        global_themes: Vec<Theme>,
        destiny: Destiny,
    ) -> Result<Self, WorldError> {
        let mut seen = BTreeSet::new();
        for agent in &agents {
            if !seen.insert(agent.label.clone()) {
                return Err(AgentError::DuplicateLabel(agent.label.clone()).into());
            }
        }
        Ok(Self {
            name: "Kismet".to_owned(),
            agents,
            current_month: 0,
            total_months,
            global_themes,
            destiny,
            agent_overrides: BTreeMap::new(),
            events_feed: EventsFeed::new(),
        })
    }

    /// The default world: all ten archetypes, the five-theme rotation, a
    /// twelve-month horizon, and default destiny strength.
    pub fn initialize_default_world() -> Self {
        Self {
            name: "Kismet".to_owned(),
            agents: default_archetypes().iter().map(Agent::from_archetype).collect(),
            current_month: 0,
            total_months: DEFAULT_TOTAL_MONTHS,
            global_themes: Theme::default_rotation(),
            destiny: Destiny::default(),
            agent_overrides: BTreeMap::new(),
            events_feed: EventsFeed::new(),
        }
    }

    /// Build a world from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfig`] if validation fails, or
    /// [`WorldError::Agent`] if the roster repeats a label.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, WorldError> {
        config.validate()?;

        let archetypes = if config.population.roster.is_empty() {
            default_archetypes()
        } else {
            config
                .population
                .roster
                .iter()
                .map(|label| archetype_by_label(label.as_str()))
                .collect::<Result<Vec<_>, _>>()?
        };

        let agents = archetypes
            .iter()
            .map(|archetype| {
                let mut agent = Agent::from_archetype(archetype);
                agent.luck_enabled = config.population.luck_enabled;
                agent
            })
            .collect();

        let mut world = Self::new(
            agents,
            config.world.total_months,
            config.world.themes.clone(),
            Destiny::new(config.world.destiny_strength),
        )?;
        world.name.clone_from(&config.world.name);
        world.agent_overrides.clone_from(&config.overrides);
        Ok(world)
    }

    /// Whether the horizon has been reached.
    pub const fn is_finished(&self) -> bool {
        self.current_month >= self.total_months
    }

    /// Advance the calendar by one month and return the month's theme.
    ///
    /// Returns `None` without advancing once the horizon is reached. An
    /// empty theme rotation advances the calendar but yields no theme.
    pub fn advance_month(&mut self) -> Option<Theme> {
        if self.is_finished() {
            return None;
        }
        self.current_month = self.current_month.saturating_add(1);

        let len = self.global_themes.len();
        let index = usize::try_from(self.current_month.saturating_sub(1))
            .ok()?
            .checked_rem(len)?;
        self.global_themes.get(index).cloned()
    }

    /// Set (or replace) the override for an agent.
    pub fn set_override(&mut self, label: impl Into<AgentLabel>, adjustment: AgentOverride) {
        self.agent_overrides.insert(label.into(), adjustment);
    }

    /// Look up an agent by label.
    pub fn agent(&self, label: &str) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.label.as_str() == label)
    }

    /// Position of an agent in the population.
    pub fn agent_index(&self, label: &str) -> Option<usize> {
        self.agents.iter().position(|agent| agent.label.as_str() == label)
    }
}
