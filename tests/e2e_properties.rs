//! Property tests over generated family trees.
//!
//! Path symmetry, determinism under input reordering, self paths, parent
//! edge complementarity and recomputation idempotence.

use kinship::denorm;
use kinship::graph::build;
use kinship::{
    find_path, FamilyId, Gender, KinshipGraph, Member, MemberId, RelId, Relationship,
    RelationshipType, Resolver,
};
use proptest::prelude::*;
use proptest::sample::Index;

const FAM: FamilyId = FamilyId(1);

#[derive(Debug, Clone)]
struct Tree {
    members: Vec<Member>,
    edges: Vec<Relationship>,
    /// (parent, child) pairs recorded as parent edges.
    parents: Vec<(MemberId, MemberId)>,
}

fn gender(code: u8) -> Gender {
    match code {
        0 => Gender::Male,
        1 => Gender::Female,
        _ => Gender::Unknown,
    }
}

fn parent_type(gender: Gender) -> RelationshipType {
    match gender {
        Gender::Male => RelationshipType::Father,
        Gender::Female => RelationshipType::Mother,
        Gender::Unknown => RelationshipType::Parent,
    }
}

/// Members 1..=n; each member after the first may have a parent among the
/// earlier members and may marry anyone.
fn family_tree() -> impl Strategy<Value = Tree> {
    (2usize..12)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(0u8..3, n),
                prop::collection::vec(prop::option::of(any::<Index>()), n),
                prop::collection::vec(prop::option::weighted(0.2, any::<Index>()), n),
            )
        })
        .prop_map(|(genders, parents, spouses)| {
            let n = genders.len();
            let members: Vec<Member> = genders
                .iter()
                .enumerate()
                .map(|(i, &g)| {
                    Member::new(MemberId(i as u64 + 1), FAM, format!("m{i}")).with_gender(gender(g))
                })
                .collect();

            let mut edges = Vec::new();
            let mut pairs = Vec::new();
            let mut next_id = 1;
            for i in 1..n {
                if let Some(idx) = &parents[i] {
                    let p = idx.index(i);
                    let rel_type = parent_type(members[p].gender);
                    edges.push(Relationship::new(RelId(next_id), FAM, members[p].id, members[i].id, rel_type));
                    pairs.push((members[p].id, members[i].id));
                    next_id += 1;
                }
            }
            for i in 0..n {
                if let Some(idx) = &spouses[i] {
                    let j = idx.index(n);
                    let related = pairs.iter().any(|&(a, b)| {
                        (a, b) == (members[i].id, members[j].id) || (b, a) == (members[i].id, members[j].id)
                    });
                    if j != i && !related {
                        edges.push(Relationship::new(
                            RelId(next_id), FAM, members[i].id, members[j].id, RelationshipType::Spouse,
                        ));
                        next_id += 1;
                    }
                }
            }

            Tree { members, edges, parents: pairs }
        })
}

fn graph_of(tree: &Tree) -> KinshipGraph {
    build(FAM, &tree.members, &tree.edges, &[]).unwrap()
}

fn ids(tree: &Tree) -> Vec<MemberId> {
    tree.members.iter().map(|m| m.id).collect()
}

proptest! {
    #[test]
    fn prop_path_is_symmetric(tree in family_tree()) {
        let graph = graph_of(&tree);
        for &a in &ids(&tree) {
            for &b in &ids(&tree) {
                let forward = find_path(&graph, a, b);
                let backward = find_path(&graph, b, a);
                prop_assert_eq!(forward.map(|p| p.reversed()), backward);
            }
        }
    }

    #[test]
    fn prop_generation_delta_is_antisymmetric(tree in family_tree()) {
        let graph = graph_of(&tree);
        let resolver = Resolver::default();
        for &a in &ids(&tree) {
            for &b in &ids(&tree) {
                if let (Some(ab), Some(ba)) = (find_path(&graph, a, b), find_path(&graph, b, a)) {
                    let ab = resolver.resolve(&ab);
                    let ba = resolver.resolve(&ba);
                    prop_assert_eq!(ab.generation_delta, -ba.generation_delta);
                }
            }
        }
    }

    #[test]
    fn prop_self_path(tree in family_tree()) {
        let graph = graph_of(&tree);
        let resolver = Resolver::default();
        for &a in &ids(&tree) {
            let path = find_path(&graph, a, a).unwrap();
            prop_assert!(path.is_empty());
            let label = resolver.resolve(&path);
            prop_assert!(label.is_self());
            prop_assert_eq!(label.gloss, "self");
            prop_assert_eq!(label.generation_delta, 0);
        }
    }

    #[test]
    fn prop_parent_edges_are_one_generation(tree in family_tree()) {
        let graph = graph_of(&tree);
        let resolver = Resolver::default();
        for &(parent, child) in &tree.parents {
            let up = resolver.resolve(&find_path(&graph, child, parent).unwrap());
            let down = resolver.resolve(&find_path(&graph, parent, child).unwrap());
            prop_assert_eq!(up.generation_delta, -1);
            prop_assert_eq!(down.generation_delta, 1);
        }
    }

    #[test]
    fn prop_input_order_does_not_matter(
        (tree, shuffled_members, shuffled_edges) in family_tree().prop_flat_map(|tree| {
            let members = Just(tree.members.clone()).prop_shuffle();
            let edges = Just(tree.edges.clone()).prop_shuffle();
            (Just(tree), members, edges)
        })
    ) {
        let original = graph_of(&tree);
        let reordered = build(FAM, &shuffled_members, &shuffled_edges, &[]).unwrap();
        let resolver = Resolver::default();

        for &a in &ids(&tree) {
            for &b in &ids(&tree) {
                let p = find_path(&original, a, b);
                let q = find_path(&reordered, a, b);
                prop_assert_eq!(
                    p.as_ref().map(|p| resolver.resolve(p)),
                    q.as_ref().map(|q| resolver.resolve(q))
                );
                prop_assert_eq!(p, q);
            }
        }
    }

    #[test]
    fn prop_recompute_is_idempotent(tree in family_tree()) {
        let graph = graph_of(&tree);
        let resolver = Resolver::default();
        let first = denorm::recompute_family(&graph, &resolver, 3);
        let second = denorm::recompute_family(&graph, &resolver, 3);
        prop_assert_eq!(first.len(), tree.members.len());
        prop_assert_eq!(first, second);
    }
}
