//! # Navigation
//!
//! The dashboard's menu as data. A menu is an ordered list of [`NavEntry`]
//! values; each entry is either a leaf [`MenuItem`] pointing at a route or a
//! [`MenuGroup`] holding more entries.
//!
//! ```text
//! Vec<NavEntry>
//! └── Group "Dashboards"
//!     ├── Item "CRM"        to: dashboards-crm        read : Auth
//!     ├── Item "Analytics"  to: dashboards-analytics  read : Admin
//!     └── Item "eCommerce"  to: dashboards-ecommerce  read : Admin
//! ```
//!
//! Rendering and routing belong to the front end. This module only holds the
//! tree, answers questions about it, and prunes it to what an
//! [`Ability`](crate::acl::Ability) allows.
//!
//! ## Modules
//!
//! - [`horizontal`]: the built-in horizontal menu
//! - [`tree`]: lookups, route validation, visibility filtering
//! - [`render`]: plain-text outline for terminals

pub mod horizontal;
pub mod render;
pub mod tree;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use horizontal::horizontal_navigation;
pub use tree::{find_by_route, items, route_names, validate_unique_routes, visible_for};

// ============================================================================
// Data Model
// ============================================================================

/// Icon identifier understood by the front end's icon set (e.g. `mdi-home-outline`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IconRef {
    pub icon: String,
}

impl IconRef {
    pub fn new(icon: impl Into<String>) -> Self {
        Self { icon: icon.into() }
    }
}

/// A navigable leaf. `action`/`subject` decide who may see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MenuItem {
    pub title: String,
    /// Symbolic route the router resolves to a page.
    #[serde(rename = "to")]
    pub route_name: String,
    pub icon: IconRef,
    pub action: String,
    pub subject: String,
}

/// A collapsible entry holding child entries.
///
/// Without its own `action`/`subject` a group is visible whenever any child is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MenuGroup {
    pub title: String,
    pub icon: IconRef,
    pub children: Vec<NavEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// One node of the menu. Objects with `children` are groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum NavEntry {
    Group(MenuGroup),
    Item(MenuItem),
}

impl NavEntry {
    pub fn title(&self) -> &str {
        match self {
            NavEntry::Group(group) => &group.title,
            NavEntry::Item(item) => &item.title,
        }
    }

    pub fn icon(&self) -> &IconRef {
        match self {
            NavEntry::Group(group) => &group.icon,
            NavEntry::Item(item) => &item.icon,
        }
    }
}

/// On-disk shape of a TOML navigation file: `[[entries]]` tables.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct NavFile {
    #[serde(default)]
    pub entries: Vec<NavEntry>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum NavError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    UnknownFormat(PathBuf),
    DuplicateRoute(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::Io(e) => write!(f, "navigation I/O error: {e}"),
            NavError::Toml(e) => write!(f, "navigation TOML error: {e}"),
            NavError::Json(e) => write!(f, "navigation JSON error: {e}"),
            NavError::UnknownFormat(path) => {
                write!(f, "unknown navigation file format: {}", path.display())
            }
            NavError::DuplicateRoute(name) => write!(f, "duplicate route name: {name}"),
        }
    }
}

impl std::error::Error for NavError {}

// ============================================================================
// Loading
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavFormat {
    /// Top-level `[[entries]]` array.
    Toml,
    /// Bare array of entries.
    Json,
}

impl NavFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(NavFormat::Toml),
            "json" => Some(NavFormat::Json),
            _ => None,
        }
    }
}

pub fn load_from_str(text: &str, format: NavFormat) -> Result<Vec<NavEntry>, NavError> {
    match format {
        NavFormat::Toml => {
            let file: NavFile = toml::from_str(text).map_err(NavError::Toml)?;
            Ok(file.entries)
        }
        NavFormat::Json => serde_json::from_str(text).map_err(NavError::Json),
    }
}

/// Load a navigation tree from a `.toml` or `.json` file.
pub fn load_from_path(path: &Path) -> Result<Vec<NavEntry>, NavError> {
    let format =
        NavFormat::from_path(path).ok_or_else(|| NavError::UnknownFormat(path.to_path_buf()))?;
    let text = fs::read_to_string(path).map_err(NavError::Io)?;
    let entries = load_from_str(&text, format)?;
    info!("Loaded {} navigation entries from {}", entries.len(), path.display());
    debug!("Navigation: {:?}", entries);
    Ok(entries)
}
