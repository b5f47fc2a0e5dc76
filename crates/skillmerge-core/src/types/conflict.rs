//! Conflict records and resolution strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How competing candidate values are reduced to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategy {
    /// First non-empty candidate wins (default).
    #[default]
    KeepFirst,
    /// Last non-empty candidate wins.
    KeepLast,
    /// Longest candidate wins; the earliest one on ties.
    KeepLonger,
    /// Distinct non-empty candidates joined with a blank line.
    Combine,
}

impl ResolutionStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::KeepFirst => "keep_first",
            Self::KeepLast => "keep_last",
            Self::KeepLonger => "keep_longer",
            Self::Combine => "combine",
        }
    }
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResolutionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "keep_first" | "first" => Ok(Self::KeepFirst),
            "keep_last" | "last" => Ok(Self::KeepLast),
            "keep_longer" | "longer" => Ok(Self::KeepLonger),
            "combine" => Ok(Self::Combine),
            other => Err(format!("unknown resolution strategy '{other}'")),
        }
    }
}

/// A field on which the input documents disagree.
///
/// Purely informational: conflicts never block a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// `name`, `version`, or `section:<title>` using the first-seen title casing.
    pub field: String,
    /// Distinct non-empty values in first-seen order.
    pub values: Vec<String>,
    /// The value the configured strategy would pick.
    pub resolved: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} distinct values, resolved to {:?}",
            self.field,
            self.values.len(),
            self.resolved
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strategy_is_keep_first() {
        assert_eq!(ResolutionStrategy::default(), ResolutionStrategy::KeepFirst);
    }

    #[test]
    fn strategy_parses_snake_and_kebab_case() {
        assert_eq!("keep-longer".parse::<ResolutionStrategy>(), Ok(ResolutionStrategy::KeepLonger));
        assert_eq!("Combine".parse::<ResolutionStrategy>(), Ok(ResolutionStrategy::Combine));
        assert!("newest".parse::<ResolutionStrategy>().is_err());
    }

    #[test]
    fn strategy_serializes_snake_case() {
        let json = serde_json::to_string(&ResolutionStrategy::KeepLast).unwrap();
        assert_eq!(json, "\"keep_last\"");
    }
}
