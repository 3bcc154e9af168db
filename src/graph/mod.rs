//! # Kinship Graph
//!
//! Per-call, arena-indexed view of one family and every family reachable
//! from it over active links. Member ids map to dense `usize` indices for
//! the lifetime of the graph; adjacency is a plain vector of small vectors.
//!
//! The graph is immutable once built. Rebuilding is cheap and expected per
//! request; nothing here is long-lived.

pub mod builder;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::*;

pub use builder::build;

/// A traversable edge from one arena slot to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    pub to: usize,
    pub kind: StepKind,
    /// Seniority of `to` relative to the owner of this adjacency list.
    pub seniority: Seniority,
    pub special: Option<SpecialRelation>,
    pub edge: RelId,
}

impl Adjacent {
    pub fn step(&self) -> Step {
        Step {
            kind: self.kind,
            seniority: self.seniority,
            special: self.special,
            edge: self.edge,
        }
    }
}

/// Arena slot for one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberNode {
    pub member: Member,
}

pub type Neighbors = SmallVec<[Adjacent; 6]>;

#[derive(Debug, Clone)]
pub struct KinshipGraph {
    family_id: FamilyId,
    nodes: Vec<MemberNode>,
    index: HashMap<MemberId, usize>,
    adjacency: Vec<Neighbors>,
    edge_count: usize,
}

impl KinshipGraph {
    /// The family this graph was built for.
    pub fn family_id(&self) -> FamilyId {
        self.family_id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of stored edges the graph was built from.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn index_of(&self, id: MemberId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn member(&self, idx: usize) -> &Member {
        &self.nodes[idx].member
    }

    pub fn member_by_id(&self, id: MemberId) -> Option<&Member> {
        self.index_of(id).map(|idx| self.member(idx))
    }

    /// Outgoing adjacency, sorted by (step rank, neighbour id).
    pub fn neighbors(&self, idx: usize) -> &[Adjacent] {
        &self.adjacency[idx]
    }

    pub fn path_node(&self, idx: usize) -> PathNode {
        let m = self.member(idx);
        PathNode {
            id: m.id,
            family_id: m.family_id,
            gender: m.gender,
            birth_date: m.birth_date,
            birth_order: m.birth_order,
        }
    }

    /// Arena indices of the owning family's members, in member id order.
    pub fn home_members(&self) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..self.nodes.len())
            .filter(|&i| self.nodes[i].member.family_id == self.family_id)
            .collect();
        idx.sort_by_key(|&i| self.nodes[i].member.id);
        idx
    }

    /// Families that contributed members to this graph.
    pub fn families(&self) -> Vec<FamilyId> {
        let mut fams: Vec<FamilyId> = self.nodes.iter().map(|n| n.member.family_id).collect();
        fams.sort();
        fams.dedup();
        fams
    }
}
