use std::fs;
use std::path::PathBuf;

use dashkit::acl::{Ability, Rule};
use dashkit::navigation::{
    NavEntry, NavError, NavFormat, find_by_route, horizontal_navigation, load_from_path,
    load_from_str, route_names, validate_unique_routes, visible_for,
};

// ============================================================================
// Helper Functions
// ============================================================================

const DASHBOARDS_JSON: &str = r#"[
  {
    "title": "Dashboards",
    "icon": { "icon": "mdi-home-outline" },
    "children": [
      { "title": "CRM", "to": "dashboards-crm",
        "icon": { "icon": "mdi-monitor-dashboard" }, "action": "read", "subject": "Auth" },
      { "title": "Analytics", "to": "dashboards-analytics",
        "icon": { "icon": "mdi-chart-timeline-variant" }, "action": "read", "subject": "Admin" },
      { "title": "eCommerce", "to": "dashboards-ecommerce",
        "icon": { "icon": "mdi-cart-outline" }, "action": "read", "subject": "Admin" }
    ]
  }
]"#;

const DASHBOARDS_TOML: &str = r#"
[[entries]]
title = "Dashboards"
icon = { icon = "mdi-home-outline" }

[[entries.children]]
title = "CRM"
to = "dashboards-crm"
icon = { icon = "mdi-monitor-dashboard" }
action = "read"
subject = "Auth"

[[entries.children]]
title = "Analytics"
to = "dashboards-analytics"
icon = { icon = "mdi-chart-timeline-variant" }
action = "read"
subject = "Admin"

[[entries.children]]
title = "eCommerce"
to = "dashboards-ecommerce"
icon = { icon = "mdi-cart-outline" }
action = "read"
subject = "Admin"
"#;

/// Writes `contents` to a per-test file under the system temp dir.
fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dashkit-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Built-in Menu
// ============================================================================

#[test]
fn test_builtin_menu_routes() {
    assert_eq!(
        route_names(horizontal_navigation()),
        ["dashboards-crm", "dashboards-analytics", "dashboards-ecommerce"]
    );
    assert!(validate_unique_routes(horizontal_navigation()).is_ok());
}

#[test]
fn test_builtin_item_fields() {
    let analytics = find_by_route(horizontal_navigation(), "dashboards-analytics").unwrap();
    assert_eq!(analytics.title, "Analytics");
    assert_eq!(analytics.icon.icon, "mdi-chart-timeline-variant");
    assert_eq!(analytics.action, "read");
    assert_eq!(analytics.subject, "Admin");
}

#[test]
fn test_builtin_menu_serializes_like_source_data() {
    let expected: serde_json::Value = serde_json::from_str(DASHBOARDS_JSON).unwrap();
    let actual = serde_json::to_value(horizontal_navigation()).unwrap();
    assert_eq!(actual, expected);
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_json_and_toml_load_the_same_tree() {
    let from_json = load_from_str(DASHBOARDS_JSON, NavFormat::Json).unwrap();
    let from_toml = load_from_str(DASHBOARDS_TOML, NavFormat::Toml).unwrap();
    assert_eq!(from_json, from_toml);
    assert_eq!(from_json, horizontal_navigation());
}

#[test]
fn test_load_from_path_by_extension() {
    let json_path = temp_file("menu.json", DASHBOARDS_JSON);
    let toml_path = temp_file("menu.toml", DASHBOARDS_TOML);
    assert_eq!(load_from_path(&json_path).unwrap(), horizontal_navigation());
    assert_eq!(load_from_path(&toml_path).unwrap(), horizontal_navigation());
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("dashkit-no-such-menu.json");
    assert!(matches!(load_from_path(&path), Err(NavError::Io(_))));
}

#[test]
fn test_load_malformed_toml() {
    let err = load_from_str("[[entries]]\ntitle = 3", NavFormat::Toml).unwrap_err();
    assert!(matches!(err, NavError::Toml(_)));
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_visibility_per_role() {
    let admin = visible_for(horizontal_navigation(), &Ability::for_role("admin"));
    let client = visible_for(horizontal_navigation(), &Ability::for_role("client"));
    let guest = visible_for(horizontal_navigation(), &Ability::for_role("guest"));

    assert_eq!(route_names(&admin).len(), 3);
    assert_eq!(route_names(&client), ["dashboards-crm"]);
    assert!(guest.is_empty());
}

#[test]
fn test_visibility_does_not_touch_source_tree() {
    let before = horizontal_navigation().to_vec();
    let _ = visible_for(horizontal_navigation(), &Ability::for_role("client"));
    assert_eq!(horizontal_navigation(), before.as_slice());
}

#[test]
fn test_custom_rules_select_admin_pages() {
    let ability = Ability::new(vec![Rule::new("read", "Admin")]);
    let visible = visible_for(horizontal_navigation(), &ability);
    assert_eq!(
        route_names(&visible),
        ["dashboards-analytics", "dashboards-ecommerce"]
    );
    assert!(matches!(&visible[0], NavEntry::Group(g) if g.children.len() == 2));
}
