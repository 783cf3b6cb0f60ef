/*!
# Versions CSV Schema

Row type for `versions.csv`. Every column deserializes as an optional string:
an absent column and an empty cell both become `None`, and presence of the
required columns is checked by [`crate::validation`], not at read time.
*/

use serde::{Deserialize, Serialize};

/// Column names recognised in versions.csv, in canonical order
pub const VERSIONS_CSV_HEADERS: &[&str] =
    &["version", "dockerfile_path", "base_image", "additional_deps"];

/// Row structure for versions.csv
///
/// Columns not listed here are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VersionRow {
    /// Solana CLI release, e.g. "1.14.23"
    pub version: Option<String>,

    /// Required by the schema; its value is not interpreted
    pub dockerfile_path: Option<String>,

    /// Container base image for the `FROM` line
    pub base_image: Option<String>,

    /// Extra Dockerfile instructions, inserted as-is
    pub additional_deps: Option<String>,
}

impl VersionRow {
    pub fn new(version: impl Into<String>, dockerfile_path: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            dockerfile_path: Some(dockerfile_path.into()),
            ..Default::default()
        }
    }

    pub fn with_base_image(mut self, base_image: impl Into<String>) -> Self {
        self.base_image = Some(base_image.into());
        self
    }

    pub fn with_additional_deps(mut self, additional_deps: impl Into<String>) -> Self {
        self.additional_deps = Some(additional_deps.into());
        self
    }

    pub fn version(&self) -> Option<&str> {
        non_empty(&self.version)
    }

    pub fn dockerfile_path(&self) -> Option<&str> {
        non_empty(&self.dockerfile_path)
    }

    pub fn base_image(&self) -> Option<&str> {
        non_empty(&self.base_image)
    }

    /// Empty string when the column is absent.
    pub fn additional_deps(&self) -> &str {
        self.additional_deps.as_deref().unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// ================================================================================================
// Tests
// ================================================================================================
