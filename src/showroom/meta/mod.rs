//! # Document Metadata
//!
//! Keeps the document head in step with navigation so every location carries
//! the right title, description and social-preview tags.
//!
//! ```text
//! Location ──► RouteTable::resolve ──► ResolvedMeta ──► HeadWriter
//!              first match wins         absolute URLs     upsert by selector
//! ```
//!
//! - [`routes`]: the ordered route table and its default record
//! - [`head`]: tag selectors, the [`HeadWriter`] seam and the in-memory
//!   [`DocumentHead`]
//! - [`sync`]: resolution and the `Idle`/`Synced` navigation state machine
//!
//! Writes are upserts keyed by a selector that never includes the tag's
//! value, so syncing any number of times leaves exactly one tag per selector.

pub mod head;
pub mod routes;
pub mod sync;

pub use head::{DocumentHead, HeadTag, HeadWriter, Selector};
pub use routes::{MatchKind, MetaRecord, OgType, Route, RouteMatcher, RouteTable};
pub use sync::{absolute_url, MetadataSync, ResolvedMeta, SyncState};
