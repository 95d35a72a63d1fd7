//! Output configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the resolved order is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `base > ... > most-derived`
    #[default]
    Chain,
    /// `most-derived < ... < base`
    Deps,
    Json,
    Dot,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [Self::Chain, Self::Deps, Self::Json, Self::Dot];

    pub fn name(self) -> &'static str {
        match self {
            Self::Chain => "chain",
            Self::Deps => "deps",
            Self::Json => "json",
            Self::Dot => "dot",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|f| f.name()).collect();
                format!("unknown output format '{s}', expected one of: {}", known.join(", "))
            })
    }
}

/// Configuration for rendering results.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Default: `chain`.
    pub format: Option<OutputFormat>,
}

impl OutputConfig {
    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}
