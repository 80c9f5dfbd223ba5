//! Numeric version triples

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version string \"{0}\": version is empty")]
    Empty(String),
    #[error("Invalid version string \"{0}\": expected at most three components")]
    TooManyComponents(String),
    #[error("Invalid version string \"{version}\": \"{component}\" is not a non-negative integer")]
    InvalidComponent { version: String, component: String },
}

/// A `major.minor.patch` version.
///
/// Ordering is the integer triple ordering on `(major, minor, patch)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Maximum number of dotted components accepted by the parser.
    const MAX_COMPONENTS: usize = 3;

    /// Create a new version
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version { major, minor, patch }
    }

    /// Parse `int ('.' int){0,2}`, with an optional leading `v`.
    ///
    /// Components that are not written default to 0, so `"1.4"` is `1.4.0`
    /// and `"2"` is `2.0.0`.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(VersionError::Empty(input.to_string()));
        }

        let mut components = [0u64; Self::MAX_COMPONENTS];
        for (i, part) in digits.split('.').enumerate() {
            if i >= Self::MAX_COMPONENTS {
                return Err(VersionError::TooManyComponents(input.to_string()));
            }
            components[i] = parse_component(input, part)?;
        }

        let [major, minor, patch] = components;
        Ok(Version::new(major, minor, patch))
    }
}

// u64::from_str accepts a leading '+', so check the digits ourselves.
fn parse_component(version: &str, part: &str) -> Result<u64, VersionError> {
    let invalid = || VersionError::InvalidComponent {
        version: version.to_string(),
        component: part.to_string(),
    };

    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    part.parse::<u64>().map_err(|_| invalid())
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Version::new(major, minor, patch)
    }
}
