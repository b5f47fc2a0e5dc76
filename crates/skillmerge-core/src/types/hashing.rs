//! Base hash selection for shingle fingerprinting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Non-cryptographic 64-bit hash applied to each shingle before seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    /// FNV-1a 64-bit.
    #[default]
    Fnv1a,
    /// XXH3 64-bit.
    Xxh3,
}

impl HashAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fnv1a => "fnv1a",
            Self::Xxh3 => "xxh3",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fnv1a" | "fnv-1a" => Ok(Self::Fnv1a),
            "xxh3" => Ok(Self::Xxh3),
            other => Err(format!("unknown hash algorithm '{other}' (expected fnv1a or xxh3)")),
        }
    }
}
