//! # Denormalization Recomputation
//!
//! Materializes per-member relationship summaries for fast list rendering.
//!
//! Recomputation is a batch, idempotent, full replacement: callers overwrite
//! whatever they stored before. Summaries are never patched incrementally,
//! since one new edge or link can change lineage and marriage status for
//! many unrelated pairs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::graph::{self, KinshipGraph};
use crate::model::*;
use crate::resolver::Resolver;
use crate::traversal;
use crate::Result;

/// A relative with a pre-resolved label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KinEntry {
    pub member_id: MemberId,
    pub label: RelationshipLabel,
}

/// Cached relationship summary for one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenormalizedSummary {
    pub member_id: MemberId,
    /// Nearest-ancestor chain: father first, mother when no father is known.
    pub lineage_chain: Vec<MemberId>,
    /// Ancestors within the configured number of generations, nearest first.
    pub ancestors: Vec<KinEntry>,
    /// Descendants within the configured number of generations, nearest first.
    pub descendants: Vec<KinEntry>,
    /// Parents, siblings, spouses and children.
    pub immediate: Vec<KinEntry>,
}

/// Input for recomputing one family.
#[derive(Debug, Clone)]
pub struct FamilyInput {
    pub family_id: FamilyId,
    pub members: Vec<Member>,
    pub relationships: Vec<Relationship>,
    pub links: Vec<FamilyLink>,
}

/// Per-family outcome of a batch recomputation.
#[derive(Debug)]
pub struct FamilyRecompute {
    pub family_id: FamilyId,
    pub result: Result<BTreeMap<MemberId, DenormalizedSummary>>,
}

/// Summaries for every member of the graph's owning family.
///
/// Linked-family members take part in paths and labels but get no summary
/// of their own here; their family's recomputation produces those.
pub fn recompute_family(
    graph: &KinshipGraph,
    resolver: &Resolver,
    generations: usize,
) -> BTreeMap<MemberId, DenormalizedSummary> {
    graph
        .home_members()
        .into_iter()
        .map(|idx| {
            let id = graph.member(idx).id;
            (id, summarize(graph, resolver, id, generations))
        })
        .collect()
}

/// Build and recompute each family independently. A failing family is
/// reported in its own slot and does not stop the others.
pub fn recompute_families(
    inputs: impl IntoIterator<Item = FamilyInput>,
    resolver: &Resolver,
    generations: usize,
) -> Vec<FamilyRecompute> {
    inputs
        .into_iter()
        .map(|input| {
            let result = graph::build(input.family_id, &input.members, &input.relationships, &input.links)
                .map(|graph| recompute_family(&graph, resolver, generations));
            if let Err(err) = &result {
                warn!(family = %input.family_id, error = %err, "recompute failed");
            }
            FamilyRecompute { family_id: input.family_id, result }
        })
        .collect()
}

fn summarize(
    graph: &KinshipGraph,
    resolver: &Resolver,
    member: MemberId,
    generations: usize,
) -> DenormalizedSummary {
    let entries = |paths: Vec<Path>| -> Vec<KinEntry> {
        paths
            .iter()
            .map(|p| KinEntry { member_id: p.end().id, label: resolver.resolve(p) })
            .collect()
    };

    let ancestors = entries(traversal::walk(graph, member, StepKind::Up, generations));
    let descendants = entries(traversal::walk(graph, member, StepKind::Down, generations));
    let immediate = entries(immediate_paths(graph, member));

    debug!(
        member = %member,
        ancestors = ancestors.len(),
        descendants = descendants.len(),
        immediate = immediate.len(),
        "summarized member"
    );

    DenormalizedSummary {
        member_id: member,
        lineage_chain: traversal::lineage_chain(graph, member, generations),
        ancestors,
        descendants,
        immediate,
    }
}

/// One-step paths to each direct neighbour, in adjacency order.
fn immediate_paths(graph: &KinshipGraph, member: MemberId) -> Vec<Path> {
    let Some(idx) = graph.index_of(member) else {
        return Vec::new();
    };

    let mut seen = Vec::new();
    let mut paths = Vec::new();
    for adj in graph.neighbors(idx) {
        if seen.contains(&adj.to) {
            continue;
        }
        seen.push(adj.to);
        let mut path = Path::single(graph.path_node(idx));
        path.append(adj.step(), graph.path_node(adj.to));
        paths.push(path);
    }
    paths
}

// ============================================================================
// Tests
// ============================================================================
