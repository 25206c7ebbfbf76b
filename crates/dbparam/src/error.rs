//! Projection error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = ProjectionError> = std::result::Result<T, E>;

/// Errors raised while evaluating a projection or loading a projection profile.
///
/// Filtering never fails: unmatched `use_cols`/`omit` names, absent tags and
/// rejecting predicates all produce empty results instead.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The record could not describe its fields (e.g. a `None` indirection).
    #[error("Invalid record: {reason}")]
    InvalidRecord {
        /// What made the record unusable.
        reason: String,
    },

    /// A profile file could not be read.
    #[error("Failed to read projection profile '{}': {source}", .path.display())]
    ProfileIo {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// A profile document is not valid YAML for the profile schema.
    #[error("Malformed projection profile: {source}")]
    ProfileParse {
        /// Underlying parse failure.
        #[from]
        source: serde_yaml::Error,
    },

    /// A named profile was requested from a set that does not define it.
    #[error("Unknown projection profile '{name}'")]
    UnknownProfile {
        /// Requested profile name.
        name: String,
    },
}

impl ProjectionError {
    /// Shorthand for an [`ProjectionError::InvalidRecord`].
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            reason: reason.into(),
        }
    }

    /// Get an error code for this error type.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRecord { .. } => "INVALID_RECORD",
            Self::ProfileIo { .. } => "PROFILE_IO",
            Self::ProfileParse { .. } => "PROFILE_PARSE",
            Self::UnknownProfile { .. } => "UNKNOWN_PROFILE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_message() {
        let err = ProjectionError::invalid_record("null record reference");
        assert_eq!(err.to_string(), "Invalid record: null record reference");
        assert_eq!(err.code(), "INVALID_RECORD");
    }

    #[test]
    fn test_parse_error_converts() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{not: a list}").unwrap_err();
        let err: ProjectionError = yaml_err.into();
        assert_eq!(err.code(), "PROFILE_PARSE");
        assert!(err.to_string().starts_with("Malformed projection profile"));
    }
}
