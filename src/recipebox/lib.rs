//! # Recipebox Architecture
//!
//! Recipebox is a **UI-agnostic recipe library**. The command-line client is
//! one presentation layer on top of it; a GUI or a web service could sit in
//! the same place without the library changing.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables/cards, handles I/O      │
//! │  - Owns presentation state such as the table/cards view     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (indexes / ids / titles → selectors)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per user action, returns `CmdResult`      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + Filtering (filter.rs)             │
//! │  - `RecipeStore` trait, `InMemoryStore`                     │
//! │  - `RecipeFilter` predicate, lazy `Filtered` view           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. The only file the library touches is the config file.
//! Diagnostics go through `tracing`; installing a subscriber is the
//! binary's job.
//!
//! ## Recipes Live in Memory
//!
//! The store is not persisted. Every process starts from an empty store,
//! optionally seeded with [`samples`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage trait and in-memory implementation
//! - [`filter`]: The filter predicate
//! - [`model`]: `Recipe` and `DietaryTags`
//! - [`index`]: Display indexes and recipe selectors
//! - [`config`]: Configuration file
//! - [`init`]: Config directory lookup and API setup
//! - [`clipboard`]: Sharing text and clipboard support
//! - [`samples`]: Sample recipes
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod init;
pub mod model;
pub mod samples;
pub mod store;
