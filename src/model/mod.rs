//! # Kinship Model
//!
//! Clean DTOs for family-tree data. These types cross every boundary:
//! store ↔ cache ↔ graph builder ↔ resolver ↔ caller.
//!
//! Design rule: this module is pure data, with no I/O, state or async.

pub mod member;
pub mod relationship;
pub mod family;
pub mod path;
pub mod label;

pub use member::{Member, MemberId, Gender};
pub use relationship::{Relationship, RelId, RelationshipType, SpecialRelation};
pub use family::{Family, FamilyId, FamilyLink, LinkId, LinkStatus, FamilySnapshot};
pub use path::{Path, PathNode, Step, StepKind, Seniority};
pub use label::{RelationshipLabel, Classification, Lineage};
