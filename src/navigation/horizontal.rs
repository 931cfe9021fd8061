//! Built-in horizontal menu.

use std::sync::LazyLock;

use super::{IconRef, MenuGroup, MenuItem, NavEntry};

static HORIZONTAL: LazyLock<Vec<NavEntry>> = LazyLock::new(|| vec![dashboards()]);

/// The horizontal menu, built on first use and shared afterwards.
pub fn horizontal_navigation() -> &'static [NavEntry] {
    &HORIZONTAL
}

/// The "Dashboards" group.
pub fn dashboards() -> NavEntry {
    NavEntry::Group(MenuGroup {
        title: "Dashboards".to_string(),
        icon: IconRef::new("mdi-home-outline"),
        children: vec![
            item("CRM", "dashboards-crm", "mdi-monitor-dashboard", "read", "Auth"),
            item(
                "Analytics",
                "dashboards-analytics",
                "mdi-chart-timeline-variant",
                "read",
                "Admin",
            ),
            item("eCommerce", "dashboards-ecommerce", "mdi-cart-outline", "read", "Admin"),
        ],
        action: None,
        subject: None,
    })
}

fn item(title: &str, route_name: &str, icon: &str, action: &str, subject: &str) -> NavEntry {
    NavEntry::Item(MenuItem {
        title: title.to_string(),
        route_name: route_name.to_string(),
        icon: IconRef::new(icon),
        action: action.to_string(),
        subject: subject.to_string(),
    })
}
