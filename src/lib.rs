//! # kinship-rs: Kinship Graph Engine
//!
//! Answers "how is B related to A?" over family-tree records, with
//! Vietnamese kinship names: paternal (Nội) and maternal (Ngoại) lineage,
//! elder/younger seniority and North/Central/South regional variants.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `FamilyStore` is the contract between engine and records
//! 2. **Clean DTOs**: `Member`, `Relationship`, `Path`, `RelationshipLabel` cross all boundaries
//! 3. **Graphs are values**: built per request from flat edges, never mutated
//! 4. **Closed vocabularies**: path shapes and terms are enums matched exhaustively
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kinship::{Kinship, MemoryStore, Family, FamilyId, Member, MemberId, Gender,
//!               Relationship, RelId, RelationshipType};
//!
//! # async fn example() -> kinship::Result<()> {
//! let store = MemoryStore::new();
//! store.insert_family(Family::new(FamilyId(1), "Nguyễn"));
//! store.insert_member(Member::new(MemberId(1), FamilyId(1), "Ông Tư").with_gender(Gender::Male));
//! store.insert_member(Member::new(MemberId(2), FamilyId(1), "Ba").with_gender(Gender::Male));
//! store.insert_member(Member::new(MemberId(3), FamilyId(1), "Lan").with_gender(Gender::Female));
//! store.insert_relationship(Relationship::new(
//!     RelId(1), FamilyId(1), MemberId(1), MemberId(2), RelationshipType::Father));
//! store.insert_relationship(Relationship::new(
//!     RelId(2), FamilyId(1), MemberId(2), MemberId(3), RelationshipType::Father));
//!
//! let engine = Kinship::with_store(store);
//! let label = engine.detect_relationship(FamilyId(1), MemberId(3), MemberId(1)).await?;
//! assert_eq!(label.map(|l| l.text), Some("Ông nội".to_string()));
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod traversal;
pub mod dict;
pub mod resolver;
pub mod denorm;
pub mod cache;
pub mod storage;
pub mod config;

use std::sync::Arc;

use tracing::{debug, info, warn};

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Member, MemberId, Gender,
    Relationship, RelId, RelationshipType, SpecialRelation,
    Family, FamilyId, FamilyLink, LinkId, LinkStatus, FamilySnapshot,
    Path, PathNode, Step, StepKind, Seniority,
    RelationshipLabel, Classification, Lineage,
};

// ============================================================================
// Re-exports: Engine parts
// ============================================================================

pub use graph::KinshipGraph;
pub use traversal::find_path;
pub use dict::{FamilyDict, NameOverride, Region, Term};
pub use resolver::Resolver;
pub use denorm::{DenormalizedSummary, FamilyInput, KinEntry};
pub use cache::{CacheStats, LookupCache};
pub use storage::{FamilyStore, MemoryStore};
pub use config::EngineConfig;

// ============================================================================
// Top-level Kinship handle
// ============================================================================

/// The primary entry point. A `Kinship` wraps a family store behind a
/// lookup cache and answers relationship queries.
pub struct Kinship<S: FamilyStore> {
    store: Arc<S>,
    cache: LookupCache<S>,
    resolver: Resolver,
    config: EngineConfig,
}

/// Outcome of recomputing one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecomputeReport {
    pub family_id: FamilyId,
    /// Members that received a summary.
    pub members: usize,
    /// Labelled entries written across all summaries.
    pub entries: usize,
}

/// Per-family slot of a batch recomputation.
#[derive(Debug)]
pub struct FamilyOutcome {
    pub family_id: FamilyId,
    pub result: Result<RecomputeReport>,
}

impl<S: FamilyStore> Kinship<S> {
    /// Create an engine with a validated configuration.
    pub fn new(store: S, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let store = Arc::new(store);
        Ok(Self {
            cache: LookupCache::new(Arc::clone(&store)),
            resolver: config.resolver(),
            store,
            config,
        })
    }

    /// Create an engine with the default configuration.
    pub fn with_store(store: S) -> Self {
        let config = EngineConfig::default();
        let store = Arc::new(store);
        Self {
            cache: LookupCache::new(Arc::clone(&store)),
            resolver: config.resolver(),
            store,
            config,
        }
    }

    /// Name how `b` relates to `a`.
    ///
    /// `Ok(None)` when both members exist but no path joins them within the
    /// families reachable from `family`. Fails with [`Error::UnknownMember`]
    /// when an id does not exist at all.
    pub async fn detect_relationship(
        &self,
        family: FamilyId,
        a: MemberId,
        b: MemberId,
    ) -> Result<Option<RelationshipLabel>> {
        let path = self.path_between(family, a, b).await?;
        Ok(path.map(|p| self.resolver.resolve(&p)))
    }

    /// The canonical shortest path from `a` to `b`.
    pub async fn path_between(
        &self,
        family: FamilyId,
        a: MemberId,
        b: MemberId,
    ) -> Result<Option<Path>> {
        let graph = self.graph(family).await?;

        let mut outside = false;
        for id in [a, b] {
            if graph.contains(id) {
                continue;
            }
            if self.cache.member(id).await?.is_none() {
                return Err(Error::UnknownMember(id));
            }
            debug!(member = %id, family = %family, "member outside reachable families");
            outside = true;
        }
        if outside {
            return Ok(None);
        }

        Ok(find_path(&graph, a, b))
    }

    /// Rebuild and overwrite every denormalized summary of `family`.
    pub async fn recompute_denormalized_fields(&self, family: FamilyId) -> Result<RecomputeReport> {
        let graph = self.graph(family).await?;
        let summaries = denorm::recompute_family(&graph, &self.resolver, self.config.summary_generations);

        let report = RecomputeReport {
            family_id: family,
            members: summaries.len(),
            entries: summaries
                .values()
                .map(|s| s.ancestors.len() + s.descendants.len() + s.immediate.len())
                .sum(),
        };

        self.store.replace_summaries(family, summaries).await?;
        info!(family = %family, members = report.members, entries = report.entries, "recomputed summaries");
        Ok(report)
    }

    /// Recompute several families. One family failing does not stop the
    /// rest; results come back in request order.
    pub async fn recompute_families(&self, families: &[FamilyId]) -> Vec<FamilyOutcome> {
        let mut outcomes = Vec::with_capacity(families.len());
        for &family_id in families {
            let result = self.recompute_denormalized_fields(family_id).await;
            outcomes.push(FamilyOutcome { family_id, result });
        }
        outcomes
    }

    /// The graph for `family` and, when links are followed, every family
    /// reachable from it over active links.
    pub async fn graph(&self, family: FamilyId) -> Result<KinshipGraph> {
        let input = self.load_scope(family).await?;
        graph::build(input.family_id, &input.members, &input.relationships, &input.links)
    }

    /// Drop every cached lookup. Call after the store's records change.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Access the underlying store (for advanced use).
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn load_scope(&self, family: FamilyId) -> Result<FamilyInput> {
        let root = self.cache.family(family).await?;
        let mut input = FamilyInput {
            family_id: family,
            members: root.members.clone(),
            relationships: root.relationships.clone(),
            links: Vec::new(),
        };

        if !self.config.follow_links {
            let before = input.relationships.len();
            input.relationships.retain(|r| {
                [r.source, r.target]
                    .iter()
                    .all(|id| root.members.iter().any(|m| m.id == *id))
            });
            debug!(
                family = %family,
                dropped = before - input.relationships.len(),
                "links not followed, dropped cross-family edges"
            );
            return Ok(input);
        }

        let mut visited = vec![family];
        let mut queue: Vec<FamilyId> = root.linked_families().collect();
        add_links(&mut input.links, &root.links);

        while let Some(next) = queue.pop() {
            if visited.contains(&next) {
                continue;
            }
            visited.push(next);

            let snapshot = match self.cache.family(next).await {
                Ok(s) => s,
                Err(Error::UnknownFamily(id)) => {
                    warn!(family = %id, "active link to a missing family");
                    continue;
                }
                Err(e) => return Err(e),
            };
            input.members.extend(snapshot.members.iter().cloned());
            input.relationships.extend(snapshot.relationships.iter().cloned());
            add_links(&mut input.links, &snapshot.links);
            queue.extend(snapshot.linked_families());
        }

        debug!(
            family = %family,
            families = visited.len(),
            members = input.members.len(),
            "loaded family scope"
        );
        Ok(input)
    }
}

fn add_links(into: &mut Vec<FamilyLink>, from: &[FamilyLink]) {
    for link in from {
        if !into.iter().any(|l| l.id == link.id) {
            into.push(link.clone());
        }
    }
}

/// In-memory engine for testing and embedding.
impl Kinship<MemoryStore> {
    pub fn open_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid edge {edge}: {reason}")]
    InvalidEdge { edge: RelId, reason: String },

    #[error("Unknown member: {0}")]
    UnknownMember(MemberId),

    #[error("Unknown family: {0}")]
    UnknownFamily(FamilyId),

    /// A failure inside the record supplier, passed through unchanged.
    #[error(transparent)]
    Source(Box<dyn std::error::Error + Send + Sync>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
