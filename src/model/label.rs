//! RelationshipLabel: the named answer to "how are these two related?".

use serde::{Deserialize, Serialize};
use crate::dict::Term;
use super::SpecialRelation;

/// Broad class of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Blood,
    ByMarriage,
    Special,
}

/// Which parent's side a relative is reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lineage {
    /// Father's side (Nội).
    Paternal,
    /// Mother's side (Ngoại).
    Maternal,
    #[default]
    Neutral,
}

/// How member B relates to member A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipLabel {
    /// Regional display name, e.g. `"Ông nội"`.
    pub text: String,
    /// English gloss, e.g. `"paternal grandfather"`.
    pub gloss: String,
    pub term: Term,
    pub classification: Classification,
    /// Generations from A to B; ancestors negative, descendants positive.
    pub generation_delta: i32,
    pub lineage: Lineage,
    pub special: Option<SpecialRelation>,
    /// The path between A and B passes through a linked family.
    pub cross_family: bool,
}

impl RelationshipLabel {
    pub fn is_self(&self) -> bool {
        self.term == Term::Myself
    }
}

impl std::fmt::Display for RelationshipLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.text, self.gloss)
    }
}
