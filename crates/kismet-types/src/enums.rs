//! Enumeration types for the Kismet simulation.
//!
//! Life domains, action tags, monthly themes, and interaction outcome
//! classes. Every enum that crosses the configuration or history boundary
//! serializes to the same upper- or lower-case tags used in YAML files.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain
// ---------------------------------------------------------------------------

/// One of the six life domains an agent can desire and act upon.
///
/// The declaration order is the canonical ranking order: when two desires
/// tie, the domain declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Romance and intimate relationships.
    Love,
    /// Work, ambition, and professional standing.
    Career,
    /// Friendship and social standing.
    Social,
    /// Health and fitness.
    Physical,
    /// Study and intellectual growth.
    Learning,
    /// Recovery of energy and emotional balance.
    Rest,
}

impl Domain {
    /// All six domains in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Love,
        Self::Career,
        Self::Social,
        Self::Physical,
        Self::Learning,
        Self::Rest,
    ];

    /// Lowercase tag used in configuration and overrides.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Career => "career",
            Self::Social => "social",
            Self::Physical => "physical",
            Self::Learning => "learning",
            Self::Rest => "rest",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name one of the six domains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown life domain: {name}")]
pub struct ParseDomainError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for Domain {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|domain| domain.as_str() == lowered)
            .ok_or_else(|| ParseDomainError { name: s.to_owned() })
    }
}

// ---------------------------------------------------------------------------
// ActionType
// ---------------------------------------------------------------------------

/// The twelve monthly action tags: six big actions and six small ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    // --- Big ---
    /// Focused career push.
    DeepWork,
    /// Serious romantic investment in one partner.
    DeepRelationship,
    /// Gathering with a small group of peers.
    BigSocialEvent,
    /// Sustained study.
    DeepStudy,
    /// Extended recovery.
    MajorRest,
    /// Intensive fitness effort.
    HealthPush,

    // --- Small ---
    /// Brief social contact with one peer.
    LightSocial,
    /// Short workout.
    LightExercise,
    /// Low-stakes date with one peer.
    CasualDate,
    /// Light reading or a short course.
    CasualLearning,
    /// Side project with minor career and social upside.
    Hobby,
    /// Short break.
    MinorRest,
}

impl ActionType {
    /// Upper-case tag, as stored in memory records and events.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeepWork => "DEEP_WORK",
            Self::DeepRelationship => "DEEP_RELATIONSHIP",
            Self::BigSocialEvent => "BIG_SOCIAL_EVENT",
            Self::DeepStudy => "DEEP_STUDY",
            Self::MajorRest => "MAJOR_REST",
            Self::HealthPush => "HEALTH_PUSH",
            Self::LightSocial => "LIGHT_SOCIAL",
            Self::LightExercise => "LIGHT_EXERCISE",
            Self::CasualDate => "CASUAL_DATE",
            Self::CasualLearning => "CASUAL_LEARNING",
            Self::Hobby => "HOBBY",
            Self::MinorRest => "MINOR_REST",
        }
    }

    /// Human-readable title, e.g. `Deep Relationship`.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::DeepWork => "Deep Work",
            Self::DeepRelationship => "Deep Relationship",
            Self::BigSocialEvent => "Big Social Event",
            Self::DeepStudy => "Deep Study",
            Self::MajorRest => "Major Rest",
            Self::HealthPush => "Health Push",
            Self::LightSocial => "Light Social",
            Self::LightExercise => "Light Exercise",
            Self::CasualDate => "Casual Date",
            Self::CasualLearning => "Casual Learning",
            Self::Hobby => "Hobby",
            Self::MinorRest => "Minor Rest",
        }
    }

    /// Title-cased tag used in interaction logs, e.g. `Casual_Date`.
    pub const fn log_name(self) -> &'static str {
        match self {
            Self::DeepWork => "Deep_Work",
            Self::DeepRelationship => "Deep_Relationship",
            Self::BigSocialEvent => "Big_Social_Event",
            Self::DeepStudy => "Deep_Study",
            Self::MajorRest => "Major_Rest",
            Self::HealthPush => "Health_Push",
            Self::LightSocial => "Light_Social",
            Self::LightExercise => "Light_Exercise",
            Self::CasualDate => "Casual_Date",
            Self::CasualLearning => "Casual_Learning",
            Self::Hobby => "Hobby",
            Self::MinorRest => "Minor_Rest",
        }
    }

    /// Romantic actions: `DEEP_RELATIONSHIP` and `CASUAL_DATE`.
    pub const fn is_romantic(self) -> bool {
        matches!(self, Self::DeepRelationship | Self::CasualDate)
    }

    /// Actions that need one or more target agents.
    pub const fn is_social(self) -> bool {
        matches!(
            self,
            Self::DeepRelationship | Self::BigSocialEvent | Self::CasualDate | Self::LightSocial
        )
    }

    /// Actions that only affect the actor's own state.
    pub const fn is_solo(self) -> bool {
        !self.is_social()
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A month-level global modifier that boosts specific desires.
///
/// Themes are read from configuration as free-form tags. Tags that are not
/// recognized are preserved in [`Theme::Other`] and grant no bonus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    /// Boosts love.
    Romance,
    /// Boosts career.
    Career,
    /// Alias of [`Theme::Career`].
    CareerHustle,
    /// Partial boost to love, career, social, and a larger one to rest.
    Chaos,
    /// Boosts learning and physical.
    SelfHelp,
    /// Boosts learning.
    Science,
    /// Alias of [`Theme::Science`].
    Curiosity,
    /// Any unrecognized tag.
    Other(String),
}

impl Theme {
    /// Upper-case tag for this theme.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Romance => "ROMANCE",
            Self::Career => "CAREER",
            Self::CareerHustle => "CAREER_HUSTLE",
            Self::Chaos => "CHAOS",
            Self::SelfHelp => "SELF_HELP",
            Self::Science => "SCIENCE",
            Self::Curiosity => "CURIOSITY",
            Self::Other(tag) => tag,
        }
    }

    /// The default five-theme rotation.
    pub fn default_rotation() -> Vec<Self> {
        vec![
            Self::Romance,
            Self::Career,
            Self::Chaos,
            Self::SelfHelp,
            Self::Science,
        ]
    }
}

impl From<&str> for Theme {
    fn from(tag: &str) -> Self {
        match tag {
            "ROMANCE" => Self::Romance,
            "CAREER" => Self::Career,
            "CAREER_HUSTLE" => Self::CareerHustle,
            "CHAOS" => Self::Chaos,
            "SELF_HELP" => Self::SelfHelp,
            "SCIENCE" => Self::Science,
            "CURIOSITY" => Self::Curiosity,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Theme {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OutcomeQuality
// ---------------------------------------------------------------------------

/// Classification of an accepted interaction by its chemistry score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeQuality {
    /// Chemistry strictly above 70.
    Positive,
    /// Chemistry in `[30, 70]`.
    Neutral,
    /// Chemistry strictly below 30.
    Negative,
}

impl OutcomeQuality {
    /// Classify a chemistry score. Both thresholds are strict.
    pub fn classify(chemistry: f64) -> Self {
        if chemistry > 70.0 {
            Self::Positive
        } else if chemistry < 30.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Lowercase tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for OutcomeQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
