//! In-memory family store.
//!
//! This is the reference implementation of `FamilyStore`.
//! It uses simple HashMaps protected by RwLock.
//!
//! ## Limitations
//!
//! - **No persistence**: everything is lost on drop.
//! - **Per-collection locks**: inserting a family and its members is not
//!   atomic. Populate the store before serving requests.
//!
//! Use this store for:
//! - Testing the graph builder, resolver and recomputation end to end
//! - Embedding the engine in applications that already hold records in memory

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::FamilyStore;
use crate::denorm::DenormalizedSummary;
use crate::model::*;
use crate::Result;

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory family records. Cloning shares the same records.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    families: RwLock<HashMap<FamilyId, Family>>,
    members: RwLock<HashMap<MemberId, Member>>,
    /// family → relationships recorded under it
    relationships: RwLock<HashMap<FamilyId, Vec<Relationship>>>,
    links: RwLock<Vec<FamilyLink>>,
    summaries: RwLock<HashMap<FamilyId, BTreeMap<MemberId, DenormalizedSummary>>>,
    /// Read calls served, for observing cache behaviour.
    reads: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_family(&self, family: Family) {
        self.inner.families.write().insert(family.id, family);
    }

    pub fn insert_member(&self, member: Member) {
        self.inner.members.write().insert(member.id, member);
    }

    pub fn insert_relationship(&self, rel: Relationship) {
        self.inner.relationships.write().entry(rel.family_id).or_default().push(rel);
    }

    /// Insert a link, replacing any link with the same id.
    pub fn insert_link(&self, link: FamilyLink) {
        let mut links = self.inner.links.write();
        links.retain(|l| l.id != link.id);
        links.push(link);
    }

    /// Load a whole snapshot.
    pub fn insert_snapshot(&self, snapshot: FamilySnapshot) {
        let FamilySnapshot { family, members, relationships, links } = snapshot;
        self.insert_family(family);
        for m in members {
            self.insert_member(m);
        }
        for r in relationships {
            self.insert_relationship(r);
        }
        for l in links {
            self.insert_link(l);
        }
    }

    /// Stored summaries of `family`, as last written by `replace_summaries`.
    pub fn summaries(&self, family: FamilyId) -> Option<BTreeMap<MemberId, DenormalizedSummary>> {
        self.inner.summaries.read().get(&family).cloned()
    }

    /// Number of read calls served so far.
    pub fn read_count(&self) -> u64 {
        self.inner.reads.load(Ordering::Relaxed)
    }

    fn count_read(&self) {
        self.inner.reads.fetch_add(1, Ordering::Relaxed);
    }
}

// ============================================================================
// FamilyStore impl
// ============================================================================

#[async_trait]
impl FamilyStore for MemoryStore {
    async fn family(&self, id: FamilyId) -> Result<Option<Family>> {
        self.count_read();
        Ok(self.inner.families.read().get(&id).cloned())
    }

    async fn member(&self, id: MemberId) -> Result<Option<Member>> {
        self.count_read();
        Ok(self.inner.members.read().get(&id).cloned())
    }

    async fn members(&self, family: FamilyId) -> Result<Vec<Member>> {
        self.count_read();
        let mut out: Vec<Member> = self
            .inner
            .members
            .read()
            .values()
            .filter(|m| m.family_id == family)
            .cloned()
            .collect();
        out.sort_by_key(|m| m.id);
        Ok(out)
    }

    async fn relationships(&self, family: FamilyId) -> Result<Vec<Relationship>> {
        self.count_read();
        Ok(self.inner.relationships.read().get(&family).cloned().unwrap_or_default())
    }

    async fn links(&self, family: FamilyId) -> Result<Vec<FamilyLink>> {
        self.count_read();
        Ok(self
            .inner
            .links
            .read()
            .iter()
            .filter(|l| l.families.0 == family || l.families.1 == family)
            .cloned()
            .collect())
    }

    async fn replace_summaries(
        &self,
        family: FamilyId,
        summaries: BTreeMap<MemberId, DenormalizedSummary>,
    ) -> Result<()> {
        self.inner.summaries.write().insert(family, summaries);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
