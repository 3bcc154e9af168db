//! Families, the links between them, and fetched family snapshots.

use serde::{Deserialize, Serialize};
use super::{Member, Relationship};

/// Opaque family identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FamilyId(pub u64);

impl std::fmt::Display for FamilyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque family-link identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LinkId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub id: FamilyId,
    pub name: String,
}

impl Family {
    pub fn new(id: FamilyId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    Pending,
    Active,
}

/// A link between two families. Only active links are traversable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyLink {
    pub id: LinkId,
    pub families: (FamilyId, FamilyId),
    pub status: LinkStatus,
}

impl FamilyLink {
    pub fn new(id: LinkId, a: FamilyId, b: FamilyId, status: LinkStatus) -> Self {
        Self { id, families: (a, b), status }
    }

    pub fn active(id: LinkId, a: FamilyId, b: FamilyId) -> Self {
        Self::new(id, a, b, LinkStatus::Active)
    }

    pub fn is_active(&self) -> bool {
        self.status == LinkStatus::Active
    }

    /// The family on the other side of the link from `from`.
    pub fn other_family(&self, from: FamilyId) -> Option<FamilyId> {
        let (a, b) = self.families;
        if from == a { Some(b) }
        else if from == b { Some(a) }
        else { None }
    }
}

/// Everything the store holds for one family, fetched in one go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilySnapshot {
    pub family: Family,
    pub members: Vec<Member>,
    pub relationships: Vec<Relationship>,
    pub links: Vec<FamilyLink>,
}

impl FamilySnapshot {
    /// Families reachable in one hop over active links.
    pub fn linked_families(&self) -> impl Iterator<Item = FamilyId> + '_ {
        self.links
            .iter()
            .filter(|l| l.is_active())
            .filter_map(|l| l.other_family(self.family.id))
    }
}
