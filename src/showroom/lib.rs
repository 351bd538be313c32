//! # Showroom Architecture
//!
//! Showroom is the **content core** of a product and blog showcase site: the
//! view models that decide what a listing page shows, which item its detail
//! modal opens, and what the document head says about the current location.
//! It is a library first; the `showroom` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, installs logging       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, parses kinds and locations                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Drives the view models, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - listing: filter + paginate      - detail: selection      │
//! │  - meta: route metadata + head     - site: HTML rendering   │
//! │  - store: ContentSource (JSON file, in-memory)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Three View Models
//!
//! - [`listing::ListingModel`]: distinct sorted categories, category filter,
//!   fixed-size pages. Changing the category always returns to page 1.
//! - [`detail::DetailSelection`]: explicit pick beats deep link; closing a
//!   deep-linked item keeps it closed until the link changes.
//! - [`meta::MetadataSync`]: first-match route lookup, then an upsert of every
//!   head tag by stable selector.
//!
//! All three are synchronous and total. Errors only come from the edges
//! (files, JSON, templates, configuration) and share [`error::ShowroomError`].
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; the CLI decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade
//! - [`commands`]: one module per operation
//! - [`listing`], [`detail`], [`meta`]: view models
//! - [`site`]: page primitives rendered to HTML
//! - [`store`]: content sources
//! - [`model`]: `ContentItem`, `ItemId`, `ContentKind`, `Catalog`
//! - [`nav`]: locations and query strings
//! - [`format`], [`markdown`]: display helpers
//! - [`config`]: `site.json`
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod detail;
pub mod error;
pub mod format;
pub mod listing;
pub mod markdown;
pub mod meta;
pub mod model;
pub mod nav;
pub mod site;
pub mod store;
