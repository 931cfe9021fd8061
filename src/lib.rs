//! dashkit library exports for testing

use clap::ValueEnum;

pub mod acl;
pub mod core;
pub mod fake_db;
pub mod navigation;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Tree,
}
