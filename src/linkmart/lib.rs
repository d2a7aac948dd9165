//! # Linkmart Architecture
//!
//! Linkmart is a **UI-agnostic data-management library** for link pages and
//! shortened links, with a CLI client on top. The library came first; the
//! CLI is just one way to drive it.
//!
//! ## The Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes  │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                          │
//! │  - Thin facade over commands                                 │
//! │  - Wires collaborators: config, mock auth                    │
//! │  - Returns structured Result types                           │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                               │
//! │  - Pure business logic, one file per operation               │
//! │  - No I/O assumptions whatsoever                             │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Database + Storage (db.rs, store/)                          │
//! │  - Database owns the canonical in-memory collections         │
//! │  - DataStore trait persists them as whole JSON blobs         │
//! │  - FileStore (production), InMemoryStore (testing)           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Discipline
//!
//! The database mirrors both collections to storage after **every**
//! mutation, rewriting each blob in full. Writes are fire-and-forget: a
//! failed write keeps the in-memory change and surfaces as a warning on
//! the command result, so memory and disk can diverge. There is no schema
//! versioning; a missing or unreadable blob falls back to the seed data.
//!
//! ## Key Invariants
//!
//! - Page and link ids are unique; `createdAt` never changes.
//! - Deleting a page cascades to its links, enforced inside
//!   [`db::Database::remove_page`] so no call path can orphan links.
//! - Page drafts never fail creation: malformed fields degrade to
//!   defaults, reported field by field (see [`draft`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`db`]: Canonical state, seeding, persistence, change notification
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Page`, `Link`, `Record`)
//! - [`draft`]: Loosely-typed drafts and their normalization
//! - [`ingest`]: Read-only text-file ingestion for the database table
//! - [`auth`]: The login gate and its mock implementation
//! - [`config`]: Default link base and admin secret
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod db;
pub mod draft;
pub mod error;
pub mod ingest;
pub mod model;
pub mod store;
