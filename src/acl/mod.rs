//! # Access Control
//!
//! Decides which `action`/`subject` pairs a role may use. Navigation entries
//! carry such a pair and are shown only when the current [`Ability`] allows it.
//!
//! Two wildcards are understood:
//!
//! - action `manage` matches every action
//! - subject `all` matches every subject
//!
//! ```text
//! admin   →  manage : all
//! client  →  read   : ACL
//!            read   : Auth
//! ```

use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const MANAGE: &str = "manage";
pub const ALL: &str = "all";

pub const ADMIN_ROLE: &str = "admin";
pub const CLIENT_ROLE: &str = "client";

/// One permission grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Rule {
    pub action: String,
    pub subject: String,
}

impl Rule {
    pub fn new(action: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            subject: subject.into(),
        }
    }

    pub fn matches(&self, action: &str, subject: &str) -> bool {
        (self.action == MANAGE || self.action == action)
            && (self.subject == ALL || self.subject == subject)
    }
}

/// The set of rules granted to the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ability {
    rules: Vec<Rule>,
}

impl Ability {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Rules for a built-in role. Unknown roles get no rules at all.
    pub fn for_role(role: &str) -> Self {
        let rules = match role {
            ADMIN_ROLE => vec![Rule::new(MANAGE, ALL)],
            CLIENT_ROLE => vec![Rule::new("read", "ACL"), Rule::new("read", "Auth")],
            other => {
                debug!("No built-in rules for role '{}'", other);
                Vec::new()
            }
        };
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn can(&self, action: &str, subject: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(action, subject))
    }
}
