//! Path: a sequence of alternating members and kinship steps.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::{FamilyId, Gender, MemberId, RelId, SpecialRelation};

/// One hop in the kinship graph, seen from the member it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// To a parent.
    Up,
    /// To a child.
    Down,
    /// To a brother or sister.
    Sibling,
    /// To a husband or wife.
    Spouse,
}

impl StepKind {
    /// Preference among equally short paths: blood lines before marriage lines.
    pub fn rank(self) -> u8 {
        match self {
            StepKind::Up | StepKind::Down => 0,
            StepKind::Sibling => 1,
            StepKind::Spouse => 2,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            StepKind::Up => StepKind::Down,
            StepKind::Down => StepKind::Up,
            other => other,
        }
    }

    /// Generation change along this step (ancestors negative).
    pub fn generation_delta(self) -> i32 {
        match self {
            StepKind::Up => -1,
            StepKind::Down => 1,
            StepKind::Sibling | StepKind::Spouse => 0,
        }
    }
}

/// Relative age of the member a step reaches, compared to where it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Elder,
    Younger,
    #[default]
    Unknown,
}

impl Seniority {
    pub fn inverse(self) -> Self {
        match self {
            Seniority::Elder => Seniority::Younger,
            Seniority::Younger => Seniority::Elder,
            Seniority::Unknown => Seniority::Unknown,
        }
    }

    /// Seniority of `other` relative to `this`: recorded birth order first,
    /// then birth date. Ties stay unknown.
    pub fn between(
        this: (Option<u32>, Option<NaiveDate>),
        other: (Option<u32>, Option<NaiveDate>),
    ) -> Self {
        use std::cmp::Ordering;

        let ordering = match (this, other) {
            ((Some(a), _), (Some(b), _)) => b.cmp(&a),
            ((_, Some(a)), (_, Some(b))) => b.cmp(&a),
            _ => return Seniority::Unknown,
        };
        match ordering {
            Ordering::Less => Seniority::Elder,
            Ordering::Greater => Seniority::Younger,
            Ordering::Equal => Seniority::Unknown,
        }
    }
}

/// A member as seen along a path: just the attributes naming needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathNode {
    pub id: MemberId,
    pub family_id: FamilyId,
    pub gender: Gender,
    pub birth_date: Option<NaiveDate>,
    pub birth_order: Option<u32>,
}

impl PathNode {
    pub fn birth_rank(&self) -> (Option<u32>, Option<NaiveDate>) {
        (self.birth_order, self.birth_date)
    }
}

/// A traversed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    /// Seniority of the reached member; meaningful for sibling steps.
    pub seniority: Seniority,
    pub special: Option<SpecialRelation>,
    /// The stored edge this step came from.
    pub edge: RelId,
}

impl Step {
    pub fn inverse(self) -> Self {
        Self {
            kind: self.kind.inverse(),
            seniority: self.seniority.inverse(),
            ..self
        }
    }
}

/// A path in the kinship graph: member -[step]-> member -[step]-> member ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    /// Members along the path. Always has one more element than `steps`.
    pub nodes: Vec<PathNode>,
    /// Steps connecting consecutive members.
    pub steps: Vec<Step>,
}

impl Path {
    pub fn single(node: PathNode) -> Self {
        Self { nodes: vec![node], steps: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn start(&self) -> &PathNode {
        &self.nodes[0]
    }

    pub fn end(&self) -> &PathNode {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Extend path with a step and the member it reaches.
    pub fn append(&mut self, step: Step, node: PathNode) {
        self.steps.push(step);
        self.nodes.push(node);
    }

    pub fn kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(|s| s.kind).collect()
    }

    /// Member ids strictly between the endpoints.
    pub fn intermediates(&self) -> impl Iterator<Item = MemberId> + '_ {
        let inner = self.nodes.len().saturating_sub(2);
        self.nodes.iter().skip(1).take(inner).map(|n| n.id)
    }

    /// Net generation change from start to end (ancestors negative).
    pub fn generation_delta(&self) -> i32 {
        self.steps.iter().map(|s| s.kind.generation_delta()).sum()
    }

    /// The same path walked from the other end.
    pub fn reversed(&self) -> Self {
        Self {
            nodes: self.nodes.iter().rev().cloned().collect(),
            steps: self.steps.iter().rev().map(|s| s.inverse()).collect(),
        }
    }

    /// Whether the path leaves the family of its starting member.
    pub fn crosses_families(&self) -> bool {
        let home = self.start().family_id;
        self.nodes.iter().any(|n| n.family_id != home)
    }
}
