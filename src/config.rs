//! Engine configuration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dict::{FamilyDict, NameOverride, Region};
use crate::resolver::Resolver;
use crate::{Error, Result};

/// Deepest summary the recomputation will produce.
pub const MAX_SUMMARY_GENERATIONS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Regional naming used for label text.
    pub region: Region,
    /// Generations of ancestors and descendants kept per summary.
    pub summary_generations: usize,
    /// Load families reachable over active links.
    pub follow_links: bool,
    pub name_overrides: Vec<NameOverride>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            region: Region::North,
            summary_generations: 3,
            follow_links: true,
            name_overrides: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SUMMARY_GENERATIONS).contains(&self.summary_generations) {
            return Err(Error::Config(format!(
                "summary_generations must be within 1..={MAX_SUMMARY_GENERATIONS}, got {}",
                self.summary_generations
            )));
        }
        Ok(())
    }

    /// A resolver for this configuration. Shares the process-wide table
    /// unless overrides are set.
    pub fn resolver(&self) -> Resolver {
        let dict = if self.name_overrides.is_empty() {
            FamilyDict::shared()
        } else {
            Arc::new(FamilyDict::with_overrides(self.name_overrides.iter().cloned()))
        };
        Resolver::new(dict, self.region)
    }
}
