//! # Commands
//!
//! One function per CLI subcommand. Each returns the text to print so the
//! binary stays a thin shell and everything here is testable without a
//! terminal.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use crate::OutputFormat;
use crate::core::config::ResolvedConfig;
use crate::fake_db::{gen_id, page_count, paginate_array};
use crate::navigation::{
    self, NavEntry, NavError, horizontal_navigation, render::render_outline, route_names,
    validate_unique_routes, visible_for,
};

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CommandError {
    Nav(NavError),
    Io(std::io::Error),
    Json(serde_json::Error),
    /// A records file whose top level is not a JSON array.
    NotAnArray,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Nav(e) => write!(f, "{e}"),
            CommandError::Io(e) => write!(f, "I/O error: {e}"),
            CommandError::Json(e) => write!(f, "JSON error: {e}"),
            CommandError::NotAnArray => write!(f, "records file must contain a JSON array"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<NavError> for CommandError {
    fn from(e: NavError) -> Self {
        CommandError::Nav(e)
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// The configured menu file, or the built-in horizontal menu.
pub fn load_navigation(config: &ResolvedConfig) -> Result<Vec<NavEntry>, CommandError> {
    match &config.nav_file {
        Some(path) => Ok(navigation::load_from_path(path)?),
        None => {
            debug!("Using built-in horizontal navigation");
            Ok(horizontal_navigation().to_vec())
        }
    }
}

/// `dashkit nav`: the menu as the configured role sees it.
pub fn nav(config: &ResolvedConfig, format: OutputFormat) -> Result<String, CommandError> {
    let entries = load_navigation(config)?;
    let visible = visible_for(&entries, &config.ability());
    info!(
        "Role '{}' sees {} of {} routes",
        config.role,
        route_names(&visible).len(),
        route_names(&entries).len()
    );

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&visible).map_err(CommandError::Json),
        OutputFormat::Tree => Ok(render_outline(&visible)),
    }
}

/// `dashkit check`: route names must be unique across the menu.
pub fn check(config: &ResolvedConfig) -> Result<String, CommandError> {
    let entries = load_navigation(config)?;
    validate_unique_routes(&entries)?;
    Ok(format!("{} routes, all unique", route_names(&entries).len()))
}

/// `dashkit schema`: JSON schema of a JSON navigation file.
pub fn schema() -> Result<String, CommandError> {
    let schema = schemars::schema_for!(Vec<NavEntry>);
    serde_json::to_string_pretty(&schema).map_err(CommandError::Json)
}

// ============================================================================
// Fake DB
// ============================================================================

/// One page of records plus enough context to render a pager.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub items: &'a [Value],
}

pub fn read_records(path: &Path) -> Result<Vec<Value>, CommandError> {
    let text = fs::read_to_string(path).map_err(CommandError::Io)?;
    parse_records(&text)
}

pub fn parse_records(text: &str) -> Result<Vec<Value>, CommandError> {
    match serde_json::from_str(text).map_err(CommandError::Json)? {
        Value::Array(records) => Ok(records),
        _ => Err(CommandError::NotAnArray),
    }
}

pub fn page_view(records: &[Value], per_page: usize, page: usize) -> PageView<'_> {
    PageView {
        page,
        per_page,
        total: records.len(),
        total_pages: page_count(records.len(), per_page),
        items: paginate_array(records, per_page, page),
    }
}

/// `dashkit paginate`
pub fn paginate(records: &[Value], per_page: usize, page: usize) -> Result<String, CommandError> {
    let view = page_view(records, per_page, page);
    debug!(
        "Page {}/{} holds {} of {} records",
        view.page,
        view.total_pages,
        view.items.len(),
        view.total
    );
    serde_json::to_string_pretty(&view).map_err(CommandError::Json)
}

/// `dashkit gen-id`
pub fn next_id(records: &[Value]) -> i64 {
    let id = gen_id(records);
    debug!("Next id after {} records: {}", records.len(), id);
    id
}
