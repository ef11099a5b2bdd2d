//! Four-part version numbers (`major.minor[.build[.revision]]`).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A version number with two to four non-negative components.
///
/// Ordering compares components left to right; an absent component sorts
/// before any present one, so `1.2 < 1.2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    major: u32,
    minor: u32,
    build: Option<u32>,
    revision: Option<u32>,
}

impl Version {
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            build: None,
            revision: None,
        }
    }

    pub fn with_build(mut self, build: u32) -> Self {
        self.build = Some(build);
        self
    }

    /// Set the revision component. Implies a build component of 0 if none was set.
    pub fn with_revision(mut self, revision: u32) -> Self {
        self.build = Some(self.build.unwrap_or(0));
        self.revision = Some(revision);
        self
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn build(&self) -> Option<u32> {
        self.build
    }

    pub fn revision(&self) -> Option<u32> {
        self.revision
    }

    /// Number of components present (2 to 4).
    pub fn component_count(&self) -> usize {
        2 + usize::from(self.build.is_some()) + usize::from(self.revision.is_some())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{}", build)?;
        }
        if let Some(revision) = self.revision {
            write!(f, ".{}", revision)?;
        }
        Ok(())
    }
}

/// Why a version string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("expected 2 to 4 components, found {0}")]
    ComponentCount(usize),

    #[error("component '{0}' is not a non-negative decimal number")]
    InvalidComponent(String),

    #[error("component '{0}' is too large")]
    ComponentOverflow(String),
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if !(2..=4).contains(&parts.len()) {
            return Err(VersionParseError::ComponentCount(parts.len()));
        }

        let mut components = [0u32; 4];
        for (slot, part) in components.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionParseError::InvalidComponent(part.to_string()));
            }
            *slot = part
                .parse()
                .map_err(|_| VersionParseError::ComponentOverflow(part.to_string()))?;
        }

        let mut version = Version::new(components[0], components[1]);
        if parts.len() > 2 {
            version = version.with_build(components[2]);
        }
        if parts.len() > 3 {
            version = version.with_revision(components[3]);
        }
        Ok(version)
    }
}
