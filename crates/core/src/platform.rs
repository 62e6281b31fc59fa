//! Social platforms a testimonial can be sourced from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Platform a testimonial post was published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    X,
}

/// Wire names of every supported platform.
pub const VALID_PLATFORMS: &[&str] = &["instagram", "x"];

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::X => "x",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instagram" => Ok(Platform::Instagram),
            "x" => Ok(Platform::X),
            other => Err(CoreError::Validation(format!(
                "Invalid platform '{other}'. Must be one of: {VALID_PLATFORMS:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_valid_platform() {
        for name in VALID_PLATFORMS {
            let platform: Platform = name.parse().unwrap();
            assert_eq!(platform.as_str(), *name);
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_names() {
        assert!("twitter".parse::<Platform>().is_err());
        assert!("X".parse::<Platform>().is_err());
        assert!("".parse::<Platform>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Platform::X).unwrap(), "\"x\"");
    }
}
