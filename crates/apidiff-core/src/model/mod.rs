//! Snapshot data model
//!
//! Read-only inputs to the diff engine, deserialized from the extractor's
//! JSON documents. Nothing here is mutated once loaded.

pub mod attr;
pub mod category;
pub mod class;
mod entries;
pub mod member;
pub mod snapshot;

pub use attr::{AttrValue, AttributeKey, Attributed, EntityFlags};
pub use category::Category;
pub use class::{ClassAttr, ClassAttributes, ClassSnapshot, EntryKind, MemberGroup};
pub use member::{Member, MemberAttr, MemberAttributes, MemberKind};
pub use snapshot::Snapshot;
