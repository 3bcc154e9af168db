//! # FamilyDict: the kinship naming table
//!
//! Maps a [`Term`] to its classification and its display name in each
//! region. The built-in table is an exhaustive `match`, so every term has a
//! name; collaborators may layer overrides on top (e.g. a family that says
//! "Tía" instead of "Ba").
//!
//! The table is process-wide read-only state: [`FamilyDict::shared`] builds
//! it once and hands out `Arc` clones.

mod names;
pub mod term;

use std::sync::{Arc, LazyLock};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::Classification;
use crate::Result;

pub use term::Term;

/// Regional naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    North,
    Central,
    South,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::North, Region::Central, Region::South];
}

/// One name per region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalNames {
    pub north: String,
    pub central: String,
    pub south: String,
}

impl RegionalNames {
    pub fn get(&self, region: Region) -> &str {
        match region {
            Region::North => &self.north,
            Region::Central => &self.central,
            Region::South => &self.south,
        }
    }
}

/// A name override as supplied by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOverride {
    pub term: Term,
    #[serde(flatten)]
    pub names: RegionalNames,
}

/// Everything the table knows about one term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub term: Term,
    pub classification: Classification,
    pub lineage_sensitive: bool,
    pub special: bool,
    pub names: RegionalNames,
    pub gloss: String,
}

#[derive(Debug, Clone, Default)]
pub struct FamilyDict {
    overrides: HashMap<Term, RegionalNames>,
}

static SHARED: LazyLock<Arc<FamilyDict>> = LazyLock::new(|| Arc::new(FamilyDict::builtin()));

impl FamilyDict {
    /// The built-in table without overrides.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// The process-wide built-in table.
    pub fn shared() -> Arc<FamilyDict> {
        Arc::clone(&SHARED)
    }

    pub fn with_overrides(overrides: impl IntoIterator<Item = NameOverride>) -> Self {
        Self {
            overrides: overrides.into_iter().map(|o| (o.term, o.names)).collect(),
        }
    }

    /// Parse a JSON array of overrides.
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: Vec<NameOverride> = serde_json::from_str(json)?;
        Ok(Self::with_overrides(overrides))
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Display name of `term` in `region`.
    pub fn name(&self, term: &Term, region: Region) -> String {
        match self.overrides.get(term) {
            Some(names) => names.get(region).to_string(),
            None => names::builtin_name(term, region),
        }
    }

    pub fn entry(&self, term: &Term) -> DictEntry {
        DictEntry {
            term: *term,
            classification: term.classification(),
            lineage_sensitive: term.lineage_sensitive(),
            special: term.is_special(),
            names: RegionalNames {
                north: self.name(term, Region::North),
                central: self.name(term, Region::Central),
                south: self.name(term, Region::South),
            },
            gloss: term.to_string(),
        }
    }
}
