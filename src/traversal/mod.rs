//! # Path Finder
//!
//! Shortest generative path between two members via bidirectional BFS.
//!
//! ## Tie-breaking
//!
//! When several shortest paths exist the winner is fixed by, in order:
//!
//! 1. the rank of the first step (`Up`/`Down` < `Sibling` < `Spouse`),
//! 2. the lexicographically smallest sequence of intermediate member ids.
//!
//! Both are evaluated from the endpoint with the smaller member id, and the
//! result is reversed when the caller asked from the other end. This keeps
//! `find_path(a, b)` and `find_path(b, a)` on the same edges.
//!
//! The winner is traced greedily over nodes known to lie on some shortest
//! path, so every greedy choice can still be completed and the greedy
//! sequence is the lexicographic minimum.

use tracing::trace;

use crate::graph::{Adjacent, KinshipGraph};
use crate::model::*;

const UNSEEN: u32 = u32::MAX;

/// Find the preferred shortest path from `a` to `b`.
///
/// `a == b` yields a zero-length path. Returns `None` when either member is
/// not in the graph or the two are not connected.
pub fn find_path(graph: &KinshipGraph, a: MemberId, b: MemberId) -> Option<Path> {
    let ia = graph.index_of(a)?;
    let ib = graph.index_of(b)?;
    if ia == ib {
        return Some(Path::single(graph.path_node(ia)));
    }

    let (start, goal, flipped) = if a <= b { (ia, ib, false) } else { (ib, ia, true) };
    let meeting = Meeting::search(graph, start, goal)?;
    let path = meeting.trace(graph, start)?;

    Some(if flipped { path.reversed() } else { path })
}

/// Result of the bidirectional search: distances from both ends and the
/// layer where the frontiers met.
struct Meeting {
    dist_from: Vec<u32>,
    dist_to: Vec<u32>,
    /// Nodes of `layers_from[d]` are exactly `d` steps from the start.
    layers_from: Vec<Vec<usize>>,
    /// Meeting nodes, all `split` steps from the start.
    meet: Vec<usize>,
    split: u32,
    total: u32,
}

impl Meeting {
    fn search(graph: &KinshipGraph, start: usize, goal: usize) -> Option<Self> {
        let n = graph.len();
        let mut dist_from = vec![UNSEEN; n];
        let mut dist_to = vec![UNSEEN; n];
        dist_from[start] = 0;
        dist_to[goal] = 0;

        let mut front_from = vec![start];
        let mut front_to = vec![goal];
        let mut layers_from = vec![vec![start]];
        let mut depth_from = 0u32;
        let mut depth_to = 0u32;

        while !front_from.is_empty() && !front_to.is_empty() {
            // Expanding the smaller frontier keeps the search near O(b^(d/2)).
            let expand_from = front_from.len() <= front_to.len();
            let meet = if expand_from {
                depth_from += 1;
                front_from = expand_layer(graph, &front_from, &mut dist_from, depth_from);
                layers_from.push(front_from.clone());
                touching(&front_from, &dist_to)
            } else {
                depth_to += 1;
                front_to = expand_layer(graph, &front_to, &mut dist_to, depth_to);
                touching(&front_to, &dist_from)
            };

            if !meet.is_empty() {
                // A completed layer that touches the other side fixes the
                // shortest distance at depth_from + depth_to.
                trace!(depth_from, depth_to, meeting = meet.len(), "frontiers met");
                return Some(Self {
                    dist_from,
                    dist_to,
                    layers_from,
                    meet,
                    split: depth_from,
                    total: depth_from + depth_to,
                });
            }
        }

        None
    }

    /// Greedy walk from `start` over shortest-path nodes only.
    fn trace(&self, graph: &KinshipGraph, start: usize) -> Option<Path> {
        let on_path = self.shortest_prefix_nodes(graph);

        let mut path = Path::single(graph.path_node(start));
        let mut current = start;

        for pos in 0..self.total {
            let next_pos = pos + 1;
            let candidates = graph.neighbors(current).iter().filter(|adj| {
                if next_pos <= self.split {
                    self.dist_from[adj.to] == next_pos && on_path[adj.to]
                } else {
                    self.dist_to[adj.to] == self.total - next_pos
                }
            });

            let chosen: &Adjacent = candidates.min_by_key(|adj| {
                let first_rank = if pos == 0 { adj.kind.rank() } else { 0 };
                (first_rank, graph.member(adj.to).id, adj.kind.rank(), adj.special.is_some())
            })?;

            path.append(chosen.step(), graph.path_node(chosen.to));
            current = chosen.to;
        }

        Some(path)
    }

    /// Nodes on the start side that reach a meeting node by distance-increasing steps.
    fn shortest_prefix_nodes(&self, graph: &KinshipGraph) -> Vec<bool> {
        let mut on_path = vec![false; graph.len()];
        for &m in &self.meet {
            on_path[m] = true;
        }

        for layer in (0..self.split).rev() {
            for &node in &self.layers_from[layer as usize] {
                on_path[node] = graph.neighbors(node).iter().any(|adj| {
                    self.dist_from[adj.to] == layer + 1 && on_path[adj.to]
                });
            }
        }

        on_path
    }
}

fn expand_layer(graph: &KinshipGraph, front: &[usize], dist: &mut [u32], depth: u32) -> Vec<usize> {
    let mut next = Vec::new();
    for &node in front {
        for adj in graph.neighbors(node) {
            if dist[adj.to] == UNSEEN {
                dist[adj.to] = depth;
                next.push(adj.to);
            }
        }
    }
    next
}

fn touching(front: &[usize], other: &[u32]) -> Vec<usize> {
    front.iter().copied().filter(|&n| other[n] != UNSEEN).collect()
}

// ============================================================================
// Single-kind walks (ancestors / descendants)
// ============================================================================

/// BFS from `from` following only `kind` steps, up to `max_depth` hops.
///
/// Returns one path per reached member, ordered by (depth, member id). Each
/// member is reached by its first BFS discovery; adjacency order makes this
/// deterministic.
pub fn walk(graph: &KinshipGraph, from: MemberId, kind: StepKind, max_depth: usize) -> Vec<Path> {
    let Some(root) = graph.index_of(from) else {
        return Vec::new();
    };

    let mut parent: Vec<Option<(usize, Adjacent)>> = vec![None; graph.len()];
    let mut depth = vec![UNSEEN; graph.len()];
    depth[root] = 0;

    let mut front = vec![root];
    let mut reached = Vec::new();

    for level in 1..=max_depth as u32 {
        let mut next = Vec::new();
        for &node in &front {
            for adj in graph.neighbors(node).iter().filter(|a| a.kind == kind) {
                if depth[adj.to] == UNSEEN {
                    depth[adj.to] = level;
                    parent[adj.to] = Some((node, *adj));
                    next.push(adj.to);
                    reached.push(adj.to);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        front = next;
    }

    reached.sort_by_key(|&n| (depth[n], graph.member(n).id));
    reached
        .into_iter()
        .map(|target| {
            let mut hops = Vec::new();
            let mut cur = target;
            while let Some((prev, adj)) = parent[cur] {
                hops.push(adj);
                cur = prev;
            }
            let mut path = Path::single(graph.path_node(root));
            for adj in hops.into_iter().rev() {
                path.append(adj.step(), graph.path_node(adj.to));
            }
            path
        })
        .collect()
}

/// Nearest-ancestor chain: father first, mother when no father is
/// recorded, blood edges before special ones. Stops at `max_depth` or a cycle.
pub fn lineage_chain(graph: &KinshipGraph, from: MemberId, max_depth: usize) -> Vec<MemberId> {
    let Some(mut current) = graph.index_of(from) else {
        return Vec::new();
    };

    let mut chain = Vec::new();
    let mut seen = vec![false; graph.len()];
    seen[current] = true;

    while chain.len() < max_depth {
        let next = graph
            .neighbors(current)
            .iter()
            .filter(|a| a.kind == StepKind::Up && !seen[a.to])
            .min_by_key(|a| {
                let gender_rank = match graph.member(a.to).gender {
                    Gender::Male => 0,
                    Gender::Female => 1,
                    Gender::Unknown => 2,
                };
                (a.special.is_some(), gender_rank, graph.member(a.to).id)
            });

        let Some(next) = next else { break };
        seen[next.to] = true;
        chain.push(graph.member(next.to).id);
        current = next.to;
    }

    chain
}

// ============================================================================
// Tests
// ============================================================================
