//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::navigation::{IconRef, MenuGroup, MenuItem, NavEntry};

pub fn item(title: &str, route_name: &str, action: &str, subject: &str) -> NavEntry {
    NavEntry::Item(MenuItem {
        title: title.to_string(),
        route_name: route_name.to_string(),
        icon: IconRef::new("mdi-circle-outline"),
        action: action.to_string(),
        subject: subject.to_string(),
    })
}

pub fn group(title: &str, children: Vec<NavEntry>) -> NavEntry {
    NavEntry::Group(MenuGroup {
        title: title.to_string(),
        icon: IconRef::new("mdi-folder-outline"),
        children,
        action: None,
        subject: None,
    })
}

/// A three-level menu:
///
/// ```text
/// Home                  home            read Auth
/// Apps
/// ├── Email             apps-email      read Email
/// └── Messaging
///     └── Chat          apps-chat       read Chat
/// Settings
/// └── Roles             settings-roles  read Settings
/// ```
pub fn nested_tree() -> Vec<NavEntry> {
    vec![
        item("Home", "home", "read", "Auth"),
        group(
            "Apps",
            vec![
                item("Email", "apps-email", "read", "Email"),
                group("Messaging", vec![item("Chat", "apps-chat", "read", "Chat")]),
            ],
        ),
        group(
            "Settings",
            vec![item("Roles", "settings-roles", "read", "Settings")],
        ),
    ]
}
