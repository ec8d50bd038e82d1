//! Agent identifier.
//!
//! Agents are keyed by a short lowercase label (e.g. `vayu`) that is unique
//! within a world. Peer memory, overrides, proposals, and snapshots all refer
//! to agents through this label; nothing holds a reference to another agent.

use core::borrow::Borrow;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Unique label identifying an agent within a world.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentLabel(String);

impl AgentLabel {
    /// Create a label from any string-like value.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Borrow the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for AgentLabel {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl Borrow<str> for AgentLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
