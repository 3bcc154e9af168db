//! End-to-end tests for relationship detection.
//!
//! Each test exercises: store -> cache -> build -> find path -> resolve,
//! against a `MemoryStore` holding one three-generation family.

use chrono::NaiveDate;
use kinship::{
    Classification, Error, Family, FamilyId, Gender, Kinship, Lineage, Member, MemberId,
    MemoryStore, RelId, Relationship, RelationshipType, SpecialRelation,
};
use pretty_assertions::assert_eq;

const NGUYEN: FamilyId = FamilyId(1);

fn date(y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, 1, 1).unwrap()
}

fn person(id: u64, name: &str, gender: Gender) -> Member {
    Member::new(MemberId(id), NGUYEN, name).with_gender(gender)
}

fn rel(id: u64, source: u64, target: u64, rel_type: RelationshipType) -> Relationship {
    Relationship::new(RelId(id), NGUYEN, MemberId(source), MemberId(target), rel_type)
}

// ============================================================================
// Helper: the Nguyễn family.
//
//   1 Ông Tư ═ 2 Bà Tư
//          ├── 3 Hùng (1st) ═ 5 Mai
//          │        └── 6 Lan (1985)
//          └── 4 Dũng (2nd) ═ 8 Thảo
//                   └── 7 Minh (1980)
// ============================================================================

fn nguyen_family() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert_family(Family::new(NGUYEN, "Nguyễn"));

    for m in [
        person(1, "Ông Tư", Gender::Male).with_birth_date(date(1930)),
        person(2, "Bà Tư", Gender::Female).with_birth_date(date(1932)),
        person(3, "Hùng", Gender::Male).with_birth_order(1),
        person(4, "Dũng", Gender::Male).with_birth_order(2),
        person(5, "Mai", Gender::Female),
        person(6, "Lan", Gender::Female).with_birth_date(date(1985)),
        person(7, "Minh", Gender::Male).with_birth_date(date(1980)),
        person(8, "Thảo", Gender::Female),
    ] {
        store.insert_member(m);
    }

    for r in [
        rel(1, 1, 2, RelationshipType::Husband),
        rel(2, 1, 3, RelationshipType::Father),
        rel(3, 2, 3, RelationshipType::Mother),
        rel(4, 1, 4, RelationshipType::Father),
        rel(5, 2, 4, RelationshipType::Mother),
        rel(6, 3, 5, RelationshipType::Husband),
        rel(7, 3, 6, RelationshipType::Father),
        rel(8, 5, 6, RelationshipType::Mother),
        rel(9, 4, 7, RelationshipType::Father),
        rel(10, 8, 4, RelationshipType::Wife),
    ] {
        store.insert_relationship(r);
    }

    store
}

async fn detect(engine: &Kinship<MemoryStore>, a: u64, b: u64) -> kinship::RelationshipLabel {
    engine
        .detect_relationship(NGUYEN, MemberId(a), MemberId(b))
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("no relationship between {a} and {b}"))
}

// ============================================================================
// 1. Self
// ============================================================================

#[tokio::test]
async fn test_self() {
    let engine = Kinship::with_store(nguyen_family());
    let label = detect(&engine, 6, 6).await;
    assert_eq!(label.gloss, "self");
    assert_eq!(label.text, "Bản thân");
    assert_eq!(label.generation_delta, 0);
    assert!(label.is_self());
}

// ============================================================================
// 2. Parents and grandparents
// ============================================================================

#[tokio::test]
async fn test_parent_edges_are_complementary() {
    let engine = Kinship::with_store(nguyen_family());

    let father = detect(&engine, 6, 3).await;
    let daughter = detect(&engine, 3, 6).await;
    assert_eq!((father.text.as_str(), father.generation_delta), ("Bố", -1));
    assert_eq!((daughter.text.as_str(), daughter.generation_delta), ("Con gái", 1));

    assert_eq!(detect(&engine, 6, 5).await.text, "Mẹ");
}

#[tokio::test]
async fn test_grandparent_and_grandchild() {
    let engine = Kinship::with_store(nguyen_family());

    let grandfather = detect(&engine, 6, 1).await;
    assert_eq!(grandfather.text, "Ông nội");
    assert_eq!(grandfather.gloss, "paternal grandfather");
    assert_eq!(grandfather.generation_delta, -2);
    assert_eq!(grandfather.lineage, Lineage::Paternal);
    assert_eq!(grandfather.classification, Classification::Blood);

    let granddaughter = detect(&engine, 1, 6).await;
    assert_eq!(granddaughter.text, "Cháu nội");
    assert_eq!(granddaughter.generation_delta, 2);

    assert_eq!(detect(&engine, 6, 2).await.text, "Bà nội");
}

// ============================================================================
// 3. Collateral relatives
// ============================================================================

#[tokio::test]
async fn test_cousins_rank_by_parents() {
    let engine = Kinship::with_store(nguyen_family());

    // Minh is born first, but his father is the younger brother.
    let minh = detect(&engine, 6, 7).await;
    assert_eq!(minh.text, "Em họ");
    assert_eq!(minh.gloss, "paternal cousin");
    assert_eq!(minh.generation_delta, 0);

    let lan = detect(&engine, 7, 6).await;
    assert_eq!(lan.text, "Chị họ");
    assert_eq!(lan.generation_delta, 0);
}

#[tokio::test]
async fn test_uncle_and_his_wife() {
    let engine = Kinship::with_store(nguyen_family());

    let uncle = detect(&engine, 6, 4).await;
    assert_eq!(uncle.text, "Chú");
    assert_eq!(uncle.generation_delta, -1);

    let aunt = detect(&engine, 6, 8).await;
    assert_eq!(aunt.text, "Thím");
    assert_eq!(aunt.classification, Classification::ByMarriage);

    // And the other way round: Dũng is Hùng's younger brother.
    assert_eq!(detect(&engine, 3, 4).await.text, "Em trai");
    assert_eq!(detect(&engine, 4, 3).await.text, "Anh trai");
}

#[tokio::test]
async fn test_in_laws() {
    let engine = Kinship::with_store(nguyen_family());

    let father_in_law = detect(&engine, 5, 1).await;
    assert_eq!(father_in_law.text, "Bố chồng");
    assert_eq!(father_in_law.gloss, "father-in-law");
    assert_eq!(father_in_law.classification, Classification::ByMarriage);

    assert_eq!(detect(&engine, 1, 5).await.text, "Con dâu");
    assert_eq!(detect(&engine, 2, 1).await.text, "Chồng");
}

// ============================================================================
// 4. Special edges
// ============================================================================

#[tokio::test]
async fn test_step_father() {
    let store = nguyen_family();
    store.insert_member(person(9, "Tâm", Gender::Male));
    store.insert_relationship(
        rel(11, 9, 6, RelationshipType::Father).with_special(SpecialRelation::Step),
    );
    let engine = Kinship::with_store(store);

    let label = detect(&engine, 6, 9).await;
    assert_eq!(label.text, "Bố dượng");
    assert!(label.gloss.starts_with("step-"));
    assert_eq!(label.special, Some(SpecialRelation::Step));
    assert_eq!(label.classification, Classification::Special);
}

// ============================================================================
// 5. Not found and errors
// ============================================================================

#[tokio::test]
async fn test_unknown_member_is_an_error() {
    let engine = Kinship::with_store(nguyen_family());
    let err = engine
        .detect_relationship(NGUYEN, MemberId(6), MemberId(999))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownMember(MemberId(999))));
}

#[tokio::test]
async fn test_unknown_family_is_an_error() {
    let engine = Kinship::with_store(nguyen_family());
    let err = engine
        .detect_relationship(FamilyId(42), MemberId(6), MemberId(1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownFamily(FamilyId(42))));
}

#[tokio::test]
async fn test_unconnected_members() {
    let store = nguyen_family();
    store.insert_member(person(20, "Khách", Gender::Unknown));
    let engine = Kinship::with_store(store);

    let label = engine
        .detect_relationship(NGUYEN, MemberId(6), MemberId(20))
        .await
        .unwrap();
    assert_eq!(label, None);
}

// ============================================================================
// 6. Regions and cache
// ============================================================================

#[tokio::test]
async fn test_southern_names() {
    let config = kinship::EngineConfig::from_json(r#"{"region": "south"}"#).unwrap();
    let engine = Kinship::new(nguyen_family(), config).unwrap();
    assert_eq!(detect(&engine, 6, 3).await.text, "Ba");
    assert_eq!(detect(&engine, 6, 5).await.text, "Má");
}

#[tokio::test]
async fn test_cached_until_cleared() {
    let engine = Kinship::with_store(nguyen_family());
    assert_eq!(detect(&engine, 6, 3).await.text, "Bố");
    let reads = engine.store().read_count();

    engine.store().insert_member(person(9, "Bé", Gender::Male));
    engine.store().insert_relationship(rel(11, 6, 9, RelationshipType::Mother));

    // Served from the cached snapshot: the new child is not visible yet.
    assert!(engine.detect_relationship(NGUYEN, MemberId(6), MemberId(9)).await.unwrap().is_none());
    assert!(engine.cache_stats().hits > 0);

    engine.clear_cache();
    assert_eq!(detect(&engine, 6, 9).await.text, "Con trai");
    assert!(engine.store().read_count() > reads);
}
