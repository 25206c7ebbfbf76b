//! Projection profiles - declarative, YAML-loadable projection settings.
//!
//! A profile captures the name-based part of a projection so it can live in
//! configuration instead of code:
//!
//! ```yaml
//! insert_user:
//!   omit: [id, created_at]
//!   filter_zero: true
//! api_view:
//!   tag: json
//!   use: [userId, displayName]
//! ```
//!
//! Closures (value predicates, mappers) stay in code.

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Declarative projection settings, applied with `Params::apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectionProfile {
    /// Tag key; the builder's current key is kept when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Whitelist. Absent means no whitelist; an empty list selects nothing.
    #[serde(default, rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_cols: Option<Vec<String>>,

    /// Blacklist.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub omit: Vec<String>,

    /// Drop zero-valued fields.
    #[serde(default)]
    pub filter_zero: bool,
}

impl ProjectionProfile {
    /// Parse a single profile document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a single profile from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_yaml_str(&read_profile_file(path.as_ref())?)
    }
}

/// Named collection of profiles, keyed by profile name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileSet {
    profiles: BTreeMap<String, ProjectionProfile>,
}

impl ProfileSet {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let set = Self::from_yaml_str(&read_profile_file(path)?)?;
        debug!(path = %path.display(), profiles = set.len(), "loaded projection profiles");
        Ok(set)
    }

    /// Look up a profile by name.
    ///
    /// # Errors
    /// Returns [`ProjectionError::UnknownProfile`] if no profile has that name.
    pub fn get(&self, name: &str) -> Result<&ProjectionProfile> {
        self.profiles
            .get(name)
            .ok_or_else(|| ProjectionError::UnknownProfile {
                name: name.to_string(),
            })
    }

    pub fn insert(&mut self, name: impl Into<String>, profile: ProjectionProfile) {
        self.profiles.insert(name.into(), profile);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn read_profile_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ProjectionError::ProfileIo {
        path: path.to_path_buf(),
        source,
    })
}
