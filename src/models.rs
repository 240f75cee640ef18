//! The dependency record shared by the parser and the XML emitter.

use serde::Deserialize;
use std::fmt;

/// A single `groupId` / `artifactId` / `version` triple.
///
/// Records only exist in a valid state: every field is non-empty. Two
/// records are equal when their field values are equal; duplicates are
/// kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl Dependency {
    /// Build a record, or `None` if any field is empty.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Option<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        let version = version.into();

        if !Self::is_valid(&group_id, &artifact_id, &version) {
            return None;
        }

        Some(Self {
            group_id,
            artifact_id,
            version,
        })
    }

    /// Check that none of the fields are empty.
    pub fn is_valid(group_id: &str, artifact_id: &str, version: &str) -> bool {
        !group_id.is_empty() && !artifact_id.is_empty() && !version.is_empty()
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.group_id, self.artifact_id, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_all_fields() {
        let dep = Dependency::new("org.example", "mylib", "1.2.3").unwrap();
        assert_eq!(dep.group_id(), "org.example");
        assert_eq!(dep.artifact_id(), "mylib");
        assert_eq!(dep.version(), "1.2.3");
    }

    #[test]
    fn test_new_rejects_empty_fields() {
        assert!(Dependency::new("", "mylib", "1.2.3").is_none());
        assert!(Dependency::new("org.example", "", "1.2.3").is_none());
        assert!(Dependency::new("org.example", "mylib", "").is_none());
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = Dependency::new("g", "a", "1").unwrap();
        let b = Dependency::new("g", "a", "1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let dep = Dependency::new("g", "a", "1").unwrap();
        assert_eq!(dep.to_string(), "g, a, 1");
    }
}
