//! # Tree Queries
//!
//! Read-only questions about a navigation tree, plus pruning it down to the
//! entries an [`Ability`] may see.
//!
//! Visibility rules:
//!
//! - an item is visible when `ability.can(item.action, item.subject)`
//! - a group is visible when at least one child is visible and, if the group
//!   carries its own `action`/`subject`, that pair is allowed too
//!
//! Empty groups are dropped, so an admin never sees a heading with nothing
//! under it.

use std::collections::HashSet;

use log::debug;

use super::{MenuGroup, MenuItem, NavEntry, NavError};
use crate::acl::Ability;

/// Every item in the tree, depth-first, in menu order.
pub fn items(entries: &[NavEntry]) -> Vec<&MenuItem> {
    let mut out = Vec::new();
    collect_items(entries, &mut out);
    out
}

fn collect_items<'a>(entries: &'a [NavEntry], out: &mut Vec<&'a MenuItem>) {
    for entry in entries {
        match entry {
            NavEntry::Item(item) => out.push(item),
            NavEntry::Group(group) => collect_items(&group.children, out),
        }
    }
}

pub fn route_names(entries: &[NavEntry]) -> Vec<&str> {
    items(entries)
        .into_iter()
        .map(|item| item.route_name.as_str())
        .collect()
}

pub fn find_by_route<'a>(entries: &'a [NavEntry], route_name: &str) -> Option<&'a MenuItem> {
    items(entries)
        .into_iter()
        .find(|item| item.route_name == route_name)
}

/// Fails on the first route name that appears twice.
pub fn validate_unique_routes(entries: &[NavEntry]) -> Result<(), NavError> {
    let mut seen = HashSet::new();
    for name in route_names(entries) {
        if !seen.insert(name) {
            return Err(NavError::DuplicateRoute(name.to_string()));
        }
    }
    Ok(())
}

/// The part of the tree `ability` may see, order preserved.
pub fn visible_for(entries: &[NavEntry], ability: &Ability) -> Vec<NavEntry> {
    entries
        .iter()
        .filter_map(|entry| prune(entry, ability))
        .collect()
}

fn prune(entry: &NavEntry, ability: &Ability) -> Option<NavEntry> {
    match entry {
        NavEntry::Item(item) => ability
            .can(&item.action, &item.subject)
            .then(|| NavEntry::Item(item.clone())),
        NavEntry::Group(group) => {
            if let (Some(action), Some(subject)) = (&group.action, &group.subject)
                && !ability.can(action, subject)
            {
                debug!("Hiding group '{}': {} {} not allowed", group.title, action, subject);
                return None;
            }

            let children = visible_for(&group.children, ability);
            if children.is_empty() {
                debug!("Hiding group '{}': no visible children", group.title);
                return None;
            }

            Some(NavEntry::Group(MenuGroup {
                title: group.title.clone(),
                icon: group.icon.clone(),
                children,
                action: group.action.clone(),
                subject: group.subject.clone(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acl::{ADMIN_ROLE, CLIENT_ROLE, Rule};
    use crate::navigation::horizontal_navigation;
    use crate::test_support::{group, item, nested_tree};

    #[test]
    fn test_route_names_depth_first() {
        assert_eq!(
            route_names(&nested_tree()),
            ["home", "apps-email", "apps-chat", "settings-roles"]
        );
    }

    #[test]
    fn test_find_by_route() {
        let tree = nested_tree();
        let chat = find_by_route(&tree, "apps-chat").unwrap();
        assert_eq!(chat.title, "Chat");
        assert!(find_by_route(&tree, "missing").is_none());
    }

    #[test]
    fn test_builtin_routes_are_unique() {
        assert!(validate_unique_routes(horizontal_navigation()).is_ok());
    }

    #[test]
    fn test_duplicate_route_detected() {
        let tree = vec![
            item("A", "same", "read", "Auth"),
            group("G", vec![item("B", "same", "read", "Auth")]),
        ];
        match validate_unique_routes(&tree) {
            Err(NavError::DuplicateRoute(name)) => assert_eq!(name, "same"),
            other => panic!("expected duplicate route, got {other:?}"),
        }
    }

    #[test]
    fn test_admin_sees_everything() {
        let tree = nested_tree();
        let visible = visible_for(&tree, &Ability::for_role(ADMIN_ROLE));
        assert_eq!(visible, tree);
    }

    #[test]
    fn test_client_sees_crm_only() {
        let visible = visible_for(horizontal_navigation(), &Ability::for_role(CLIENT_ROLE));
        assert_eq!(route_names(&visible), ["dashboards-crm"]);
        assert_eq!(visible[0].title(), "Dashboards");
    }

    #[test]
    fn test_empty_groups_are_dropped() {
        let visible = visible_for(horizontal_navigation(), &Ability::for_role("guest"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_group_permission_gates_children() {
        let mut tree = nested_tree();
        if let NavEntry::Group(settings) = &mut tree[2] {
            settings.action = Some("manage".to_string());
            settings.subject = Some("Settings".to_string());
        }
        let ability = Ability::new(vec![Rule::new("read", "all")]);
        let visible = visible_for(&tree, &ability);
        assert_eq!(route_names(&visible), ["home", "apps-email", "apps-chat"]);
    }

    #[test]
    fn test_nested_groups_pruned_recursively() {
        let ability = Ability::new(vec![Rule::new("read", "Chat")]);
        let visible = visible_for(&nested_tree(), &ability);
        assert_eq!(visible.len(), 1);
        let NavEntry::Group(apps) = &visible[0] else {
            panic!("expected Apps group");
        };
        assert_eq!(apps.children.len(), 1);
        assert_eq!(route_names(&visible), ["apps-chat"]);
    }
}
