//! Relationship (edge) between two family members.
//!
//! An edge reads "source is the `<type>` of target": a `Father` edge from
//! A to B says A is B's father. Only one direction needs to be stored; the
//! graph builder adds the implied inverse.

use serde::{Deserialize, Serialize};
use super::{FamilyId, Gender, MemberId, Seniority, StepKind};

/// Opaque relationship identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RelId(pub u64);

impl std::fmt::Display for RelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of stored relationship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    Father,
    Mother,
    Parent,
    Son,
    Daughter,
    Child,
    Husband,
    Wife,
    Spouse,
    OlderBrother,
    OlderSister,
    YoungerBrother,
    YoungerSister,
    Sibling,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 14] = [
        Self::Father, Self::Mother, Self::Parent,
        Self::Son, Self::Daughter, Self::Child,
        Self::Husband, Self::Wife, Self::Spouse,
        Self::OlderBrother, Self::OlderSister,
        Self::YoungerBrother, Self::YoungerSister,
        Self::Sibling,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Father => "father",
            Self::Mother => "mother",
            Self::Parent => "parent",
            Self::Son => "son",
            Self::Daughter => "daughter",
            Self::Child => "child",
            Self::Husband => "husband",
            Self::Wife => "wife",
            Self::Spouse => "spouse",
            Self::OlderBrother => "older_brother",
            Self::OlderSister => "older_sister",
            Self::YoungerBrother => "younger_brother",
            Self::YoungerSister => "younger_sister",
            Self::Sibling => "sibling",
        }
    }

    /// The step from target to source, i.e. what the source is to the target.
    ///
    /// `Seniority::Unknown` for generic siblings; the builder fills it from
    /// member data.
    pub fn step_to_source(self) -> (StepKind, Seniority) {
        match self {
            Self::Father | Self::Mother | Self::Parent => (StepKind::Up, Seniority::Unknown),
            Self::Son | Self::Daughter | Self::Child => (StepKind::Down, Seniority::Unknown),
            Self::Husband | Self::Wife | Self::Spouse => (StepKind::Spouse, Seniority::Unknown),
            Self::OlderBrother | Self::OlderSister => (StepKind::Sibling, Seniority::Elder),
            Self::YoungerBrother | Self::YoungerSister => (StepKind::Sibling, Seniority::Younger),
            Self::Sibling => (StepKind::Sibling, Seniority::Unknown),
        }
    }

    /// Gender the type implies for the source member.
    pub fn source_gender(self) -> Gender {
        match self {
            Self::Father | Self::Son | Self::Husband
            | Self::OlderBrother | Self::YoungerBrother => Gender::Male,
            Self::Mother | Self::Daughter | Self::Wife
            | Self::OlderSister | Self::YoungerSister => Gender::Female,
            Self::Parent | Self::Child | Self::Spouse | Self::Sibling => Gender::Unknown,
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|t| t.code() == normalized)
            .ok_or_else(|| format!("unknown relationship type '{s}'"))
    }
}

/// Relations that do not follow the regular blood/generation naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialRelation {
    Adoptive,
    Step,
    InLaw,
}

impl SpecialRelation {
    /// Precedence when several special edges share one path.
    pub fn precedence(self) -> u8 {
        match self {
            Self::InLaw => 3,
            Self::Step => 2,
            Self::Adoptive => 1,
        }
    }
}

/// A stored relationship edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelId,
    pub family_id: FamilyId,
    pub source: MemberId,
    pub target: MemberId,
    pub rel_type: RelationshipType,
    #[serde(default)]
    pub special: Option<SpecialRelation>,
}

impl Relationship {
    pub fn new(
        id: RelId,
        family_id: FamilyId,
        source: MemberId,
        target: MemberId,
        rel_type: RelationshipType,
    ) -> Self {
        Self { id, family_id, source, target, rel_type, special: None }
    }

    pub fn with_special(mut self, special: SpecialRelation) -> Self {
        self.special = Some(special);
        self
    }

    /// The "other" end of the relationship from the given member.
    pub fn other_member(&self, from: MemberId) -> Option<MemberId> {
        if from == self.source { Some(self.target) }
        else if from == self.target { Some(self.source) }
        else { None }
    }
}
