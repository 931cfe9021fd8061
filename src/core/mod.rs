//! # Core Application Logic
//!
//! Everything the CLI needs that isn't menu data or fake-db helpers.
//!
//! ```text
//!          ┌─────────────┐
//!          │    main     │  clap args, logger
//!          └──────┬──────┘
//!                 ▼
//!          ┌─────────────┐      ┌──────────────┐
//!          │   config    │ ───► │   commands   │
//!          └─────────────┘      └──────┬───────┘
//!                                      │
//!            ┌─────────────────────────┼───────────────────┐
//!            ▼                         ▼                   ▼
//!     ┌────────────┐           ┌────────────┐       ┌────────────┐
//!     │ navigation │           │    acl     │       │  fake_db   │
//!     └────────────┘           └────────────┘       └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`]: `~/.dashkit/config.toml`, env vars and CLI overrides
//! - [`commands`]: one function per CLI subcommand, returning what to print

pub mod commands;
pub mod config;
