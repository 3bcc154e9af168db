//! # Family Store Trait
//!
//! This is the contract between the kinship engine and whatever holds the
//! family records. The engine only reads members, relationships and links,
//! and writes back denormalized summaries as a full replacement.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | In-memory for testing/embedding |

pub mod memory;

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::denorm::DenormalizedSummary;
use crate::model::*;
use crate::Result;

pub use memory::MemoryStore;

// ============================================================================
// FamilyStore Trait
// ============================================================================

/// The record supplier contract.
///
/// Lookups of ids that do not exist return `Ok(None)` or an empty list.
/// `Err` is reserved for the store itself failing; such errors reach the
/// caller unchanged (wrap foreign errors in [`crate::Error::Source`]).
#[async_trait]
pub trait FamilyStore: Send + Sync + 'static {
    async fn family(&self, id: FamilyId) -> Result<Option<Family>>;

    async fn member(&self, id: MemberId) -> Result<Option<Member>>;

    /// Members owned by `family`.
    async fn members(&self, family: FamilyId) -> Result<Vec<Member>>;

    /// Relationships recorded under `family`.
    async fn relationships(&self, family: FamilyId) -> Result<Vec<Relationship>>;

    /// Links touching `family`, in any status.
    async fn links(&self, family: FamilyId) -> Result<Vec<FamilyLink>>;

    /// Overwrite every stored summary of `family` with `summaries`.
    async fn replace_summaries(
        &self,
        family: FamilyId,
        summaries: BTreeMap<MemberId, DenormalizedSummary>,
    ) -> Result<()>;

    /// One family's records in a single value. `None` when the family does
    /// not exist.
    async fn snapshot(&self, id: FamilyId) -> Result<Option<FamilySnapshot>> {
        let Some(family) = self.family(id).await? else {
            return Ok(None);
        };
        Ok(Some(FamilySnapshot {
            family,
            members: self.members(id).await?,
            relationships: self.relationships(id).await?,
            links: self.links(id).await?,
        }))
    }
}
