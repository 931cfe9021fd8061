//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dashkit/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::acl::{ADMIN_ROLE, Ability, Rule};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DashkitConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub roles: Vec<RoleEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_role: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigationConfig {
    /// Menu file replacing the built-in horizontal menu (`.toml` or `.json`).
    pub file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PaginationConfig {
    pub per_page: Option<usize>,
}

/// A role defined in the config file. Shadows a built-in role of the same name.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoleEntry {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PER_PAGE: usize = 10;
pub const DEFAULT_ROLE: &str = ADMIN_ROLE;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub role: String,
    pub nav_file: Option<PathBuf>,
    pub per_page: usize,
    pub roles: Vec<RoleEntry>,
}

impl ResolvedConfig {
    /// Rules for the resolved role: config-defined roles first, then built-ins.
    pub fn ability(&self) -> Ability {
        match self.roles.iter().find(|r| r.name == self.role) {
            Some(entry) => Ability::new(entry.rules.clone()),
            None => Ability::for_role(&self.role),
        }
    }
}

/// Values given on the command line. `None` = flag not given.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub role: Option<&'a str>,
    pub nav_file: Option<&'a Path>,
    pub per_page: Option<usize>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.dashkit/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dashkit").join("config.toml"))
}

/// Load config from `~/.dashkit/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DashkitConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DashkitConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DashkitConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DashkitConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. The file must exist.
pub fn load_config_from(path: &Path) -> Result<DashkitConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DashkitConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# dashkit Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_role = "admin"             # Or set DASHKIT_ROLE env var

# [navigation]
# file = "/path/to/menu.toml"        # Or set DASHKIT_NAV_FILE env var

# [pagination]
# per_page = 10                      # Or set DASHKIT_PER_PAGE env var

# [[roles]]
# name = "editor"
# rules = [
#   { action = "read", subject = "Auth" },
#   { action = "read", subject = "Admin" },
# ]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// `DASHKIT_*` environment variables, read once so resolution stays pure.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub role: Option<String>,
    pub nav_file: Option<PathBuf>,
    pub per_page: Option<usize>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            role: std::env::var("DASHKIT_ROLE").ok(),
            nav_file: std::env::var("DASHKIT_NAV_FILE").ok().map(PathBuf::from),
            per_page: std::env::var("DASHKIT_PER_PAGE")
                .ok()
                .and_then(|raw| parse_per_page(&raw)),
        }
    }
}

fn parse_per_page(raw: &str) -> Option<usize> {
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("Ignoring DASHKIT_PER_PAGE={:?}: {}", raw, e);
            None
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &DashkitConfig,
    env: &EnvOverrides,
    cli: &CliOverrides<'_>,
) -> ResolvedConfig {
    // Role: CLI → env → config → default
    let role = cli
        .role
        .map(|s| s.to_string())
        .or_else(|| env.role.clone())
        .or_else(|| config.general.default_role.clone())
        .unwrap_or_else(|| DEFAULT_ROLE.to_string());

    // Navigation file: CLI → env → config → built-in menu
    let nav_file = cli
        .nav_file
        .map(Path::to_path_buf)
        .or_else(|| env.nav_file.clone())
        .or_else(|| config.navigation.file.clone());

    // Page size: CLI → env → config → default. Zero is treated as unset.
    let per_page = cli
        .per_page
        .or(env.per_page)
        .or(config.pagination.per_page)
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_PER_PAGE);

    ResolvedConfig {
        role,
        nav_file,
        per_page,
        roles: config.roles.clone(),
    }
}
