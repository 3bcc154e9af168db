//! Graph builder: flat typed edges → arena-indexed kinship graph.
//!
//! Every stored edge yields a traversable step in both directions, so
//! traversal does not depend on which side the store persisted.

use hashbrown::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::model::*;
use crate::{Error, Result};
use super::{Adjacent, KinshipGraph, MemberNode, Neighbors};

/// Build the kinship graph for `family_id`.
///
/// `members`, `edges` and `links` may include data of other families; only
/// families reachable from `family_id` over active links take part.
/// Fails with [`Error::InvalidEdge`] when an edge belongs to an unreachable
/// family, references a member the graph does not know, or loops back on
/// its own source.
pub fn build(
    family_id: FamilyId,
    members: &[Member],
    edges: &[Relationship],
    links: &[FamilyLink],
) -> Result<KinshipGraph> {
    let reachable = reachable_families(family_id, links);

    let mut nodes: Vec<MemberNode> = Vec::with_capacity(members.len());
    let mut index: HashMap<MemberId, usize> = HashMap::with_capacity(members.len());

    for member in members {
        if !reachable.contains(&member.family_id) {
            debug!(member = %member.id, family = %member.family_id, "skipping member of unlinked family");
            continue;
        }
        if index.contains_key(&member.id) {
            warn!(member = %member.id, "duplicate member record, keeping the first");
            continue;
        }
        index.insert(member.id, nodes.len());
        nodes.push(MemberNode { member: member.clone() });
    }

    // Validate everything before touching adjacency: a bad edge aborts the build.
    let mut resolved: Vec<(&Relationship, usize, usize)> = Vec::with_capacity(edges.len());
    for edge in edges {
        if !reachable.contains(&edge.family_id) {
            return Err(invalid(
                edge,
                format!("family {} is not linked to family {family_id}", edge.family_id),
            ));
        }
        let src = index
            .get(&edge.source)
            .copied()
            .ok_or_else(|| invalid(edge, format!("unknown source member {}", edge.source)))?;
        let dst = index
            .get(&edge.target)
            .copied()
            .ok_or_else(|| invalid(edge, format!("unknown target member {}", edge.target)))?;
        if src == dst {
            return Err(invalid(edge, "source and target are the same member".into()));
        }
        resolved.push((edge, src, dst));
    }

    infer_genders(&mut nodes, &resolved);

    let mut adjacency: Vec<Neighbors> = vec![Neighbors::new(); nodes.len()];
    for &(edge, src, dst) in &resolved {
        let (kind, mut seniority) = edge.rel_type.step_to_source();
        if kind == StepKind::Sibling && seniority == Seniority::Unknown {
            seniority = Seniority::between(birth_rank(&nodes[dst]), birth_rank(&nodes[src]));
        }
        // target → source: what the source is to the target.
        adjacency[dst].push(Adjacent {
            to: src,
            kind,
            seniority,
            special: edge.special,
            edge: edge.id,
        });
        adjacency[src].push(Adjacent {
            to: dst,
            kind: kind.inverse(),
            seniority: seniority.inverse(),
            special: edge.special,
            edge: edge.id,
        });
    }

    for list in &mut adjacency {
        list.sort_by_key(|a| {
            (a.kind.rank(), nodes[a.to].member.id, a.kind as u8, a.special.is_some(), a.edge)
        });
        // Both directions of one relation are often stored; keep one step per (neighbour, kind).
        list.dedup_by_key(|a| (a.to, a.kind));
    }

    debug!(
        family = %family_id,
        families = reachable.len(),
        members = nodes.len(),
        edges = resolved.len(),
        "built kinship graph"
    );

    Ok(KinshipGraph {
        family_id,
        nodes,
        index,
        adjacency,
        edge_count: resolved.len(),
    })
}

/// `family_id` plus the transitive closure over active links.
pub fn reachable_families(family_id: FamilyId, links: &[FamilyLink]) -> HashSet<FamilyId> {
    let mut reachable = HashSet::new();
    reachable.insert(family_id);
    let mut queue = vec![family_id];

    while let Some(current) = queue.pop() {
        for link in links.iter().filter(|l| l.is_active()) {
            if let Some(other) = link.other_family(current) {
                if reachable.insert(other) {
                    queue.push(other);
                }
            }
        }
    }

    reachable
}

fn invalid(edge: &Relationship, reason: String) -> Error {
    Error::InvalidEdge { edge: edge.id, reason }
}

fn birth_rank(node: &MemberNode) -> (Option<u32>, Option<chrono::NaiveDate>) {
    (node.member.birth_order, node.member.birth_date)
}

/// Gendered edge types fill in members recorded as `Unknown`.
fn infer_genders(nodes: &mut [MemberNode], resolved: &[(&Relationship, usize, usize)]) {
    for &(edge, src, _) in resolved {
        let implied = edge.rel_type.source_gender();
        if !implied.is_known() {
            continue;
        }
        let member = &mut nodes[src].member;
        if member.gender == Gender::Unknown {
            member.gender = implied;
        } else if member.gender != implied {
            warn!(
                member = %member.id,
                edge = %edge.id,
                rel_type = %edge.rel_type,
                "edge type contradicts recorded gender, keeping the record"
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
