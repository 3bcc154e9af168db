//! End-to-end tests for paths that cross family links.
//!
//! Two families are joined by a marriage recorded under the bride's family.
//! Only an ACTIVE link makes the other family's members reachable.

use kinship::{
    Classification, EngineConfig, Family, FamilyId, FamilyLink, Gender, Kinship, LinkId,
    LinkStatus, Member, MemberId, MemoryStore, RelId, Relationship, RelationshipType,
};
use pretty_assertions::assert_eq;

const NGUYEN: FamilyId = FamilyId(1);
const TRAN: FamilyId = FamilyId(2);
const LE: FamilyId = FamilyId(3);

fn member(id: u64, family: FamilyId, gender: Gender) -> Member {
    Member::new(MemberId(id), family, format!("member-{id}")).with_gender(gender)
}

fn rel(id: u64, family: FamilyId, source: u64, target: u64, rel_type: RelationshipType) -> Relationship {
    Relationship::new(RelId(id), family, MemberId(source), MemberId(target), rel_type)
}

// ============================================================================
// Helper: Nguyễn (grandfather 1, son 2, grandson 3) and Trần (father 10,
// daughter 11). Linking the families is left to each test.
// ============================================================================

fn two_families() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert_family(Family::new(NGUYEN, "Nguyễn"));
    store.insert_family(Family::new(TRAN, "Trần"));

    store.insert_member(member(1, NGUYEN, Gender::Male));
    store.insert_member(member(2, NGUYEN, Gender::Male));
    store.insert_member(member(3, NGUYEN, Gender::Male));
    store.insert_relationship(rel(1, NGUYEN, 1, 2, RelationshipType::Father));
    store.insert_relationship(rel(2, NGUYEN, 2, 3, RelationshipType::Father));

    store.insert_member(member(10, TRAN, Gender::Male));
    store.insert_member(member(11, TRAN, Gender::Female));
    store.insert_relationship(rel(10, TRAN, 10, 11, RelationshipType::Father));

    store
}

/// 11 marries 3; the edge lives with the Trần family.
fn marry(store: &MemoryStore) {
    store.insert_relationship(rel(11, TRAN, 11, 3, RelationshipType::Wife));
}

// ============================================================================
// 1. No link / pending link
// ============================================================================

#[tokio::test]
async fn test_disconnected_families_are_not_found() {
    let engine = Kinship::with_store(two_families());
    let label = engine
        .detect_relationship(NGUYEN, MemberId(3), MemberId(11))
        .await
        .unwrap();
    assert_eq!(label, None);
}

#[tokio::test]
async fn test_pending_link_is_not_traversed() {
    let store = two_families();
    marry(&store);
    store.insert_link(FamilyLink::new(LinkId(1), NGUYEN, TRAN, LinkStatus::Pending));
    let engine = Kinship::with_store(store);

    let label = engine
        .detect_relationship(NGUYEN, MemberId(3), MemberId(11))
        .await
        .unwrap();
    assert_eq!(label, None);
}

// ============================================================================
// 2. Active link
// ============================================================================

#[tokio::test]
async fn test_active_link_joins_families() {
    let store = two_families();
    marry(&store);
    store.insert_link(FamilyLink::active(LinkId(1), NGUYEN, TRAN));
    let engine = Kinship::with_store(store);

    let wife = engine
        .detect_relationship(NGUYEN, MemberId(3), MemberId(11))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(wife.text, "Vợ");
    assert!(wife.cross_family);

    // 10 is the father of 3's wife.
    let father_in_law = engine
        .detect_relationship(NGUYEN, MemberId(3), MemberId(10))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(father_in_law.text, "Bố vợ");
    assert_eq!(father_in_law.classification, Classification::ByMarriage);
    assert_eq!(father_in_law.generation_delta, -1);

    // Same answer when asked from the other family.
    let from_tran = engine
        .detect_relationship(TRAN, MemberId(3), MemberId(10))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(from_tran, father_in_law);
}

#[tokio::test]
async fn test_generic_template_across_link() {
    let store = two_families();
    marry(&store);
    store.insert_link(FamilyLink::active(LinkId(1), NGUYEN, TRAN));
    let engine = Kinship::with_store(store);

    // Down, down, spouse, up: no dedicated shape.
    let label = engine
        .detect_relationship(NGUYEN, MemberId(1), MemberId(10))
        .await
        .unwrap()
        .unwrap();
    assert!(label.cross_family);
    assert_eq!(label.classification, Classification::ByMarriage);
    assert_eq!(label.generation_delta, 1);
}

#[tokio::test]
async fn test_links_are_transitive() {
    let store = two_families();
    marry(&store);
    store.insert_family(Family::new(LE, "Lê"));
    store.insert_member(member(20, LE, Gender::Female));
    store.insert_relationship(rel(20, LE, 20, 11, RelationshipType::Mother));
    store.insert_link(FamilyLink::active(LinkId(1), NGUYEN, TRAN));
    store.insert_link(FamilyLink::active(LinkId(2), TRAN, LE));
    let engine = Kinship::with_store(store);

    // Nguyễn reaches Lê only through Trần.
    let label = engine
        .detect_relationship(NGUYEN, MemberId(3), MemberId(20))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(label.text, "Mẹ vợ");
}

#[tokio::test]
async fn test_links_can_be_ignored() {
    let store = two_families();
    marry(&store);
    store.insert_link(FamilyLink::active(LinkId(1), NGUYEN, TRAN));
    let config = EngineConfig { follow_links: false, ..EngineConfig::default() };
    let engine = Kinship::new(store, config).unwrap();

    let label = engine
        .detect_relationship(TRAN, MemberId(11), MemberId(10))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(label.text, "Bố");

    let across = engine
        .detect_relationship(TRAN, MemberId(11), MemberId(3))
        .await
        .unwrap();
    assert_eq!(across, None);
}
