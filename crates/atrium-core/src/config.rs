use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::person::{Person, PersonKind};

/// Root of the `atrium.toml` configuration file.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ConfigRoot {
    #[serde(default)]
    pub operator: OperatorConfig,
}

impl ConfigRoot {
    /// Parses a configuration document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

/// The active operator identity: default message sender and fallback task
/// assignee. Injected into the composer, never hard-coded at use sites.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OperatorConfig {
    pub name: String,
    pub avatar: String,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            name: "Jeremy Bailey".to_string(),
            avatar: "JB".to_string(),
        }
    }
}

impl OperatorConfig {
    pub fn to_person(&self) -> Person {
        Person::new(
            "operator",
            self.name.clone(),
            self.avatar.clone(),
            PersonKind::Staff,
        )
    }
}
