//! Plain-text outline of a navigation tree, for terminals.
//!
//! ```text
//! Dashboards
//! ├── CRM        dashboards-crm        read Auth
//! ├── Analytics  dashboards-analytics  read Admin
//! └── eCommerce  dashboards-ecommerce  read Admin
//! ```
//!
//! Columns are padded by display width so wide titles still line up.

use unicode_width::UnicodeWidthStr;

use super::{NavEntry, items};

const GAP: usize = 2;

pub fn render_outline(entries: &[NavEntry]) -> String {
    let layout = Layout::measure(entries);
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        render_entry(entry, "", i + 1 == entries.len(), true, &layout, &mut out);
    }
    out
}

/// Column widths shared by every row.
struct Layout {
    label: usize,
    route: usize,
}

impl Layout {
    fn measure(entries: &[NavEntry]) -> Self {
        let mut label = 0;
        measure_labels(entries, 0, &mut label);
        let route = items(entries)
            .iter()
            .map(|item| item.route_name.width())
            .max()
            .unwrap_or(0);
        Self { label, route }
    }
}

/// Widest prefix + title across all rows. Each nesting level adds four columns.
fn measure_labels(entries: &[NavEntry], depth: usize, widest: &mut usize) {
    for entry in entries {
        *widest = (*widest).max(depth * 4 + entry.title().width());
        if let NavEntry::Group(group) = entry {
            measure_labels(&group.children, depth + 1, widest);
        }
    }
}

fn render_entry(
    entry: &NavEntry,
    indent: &str,
    is_last: bool,
    is_root: bool,
    layout: &Layout,
    out: &mut String,
) {
    let branch = match (is_root, is_last) {
        (true, _) => "",
        (false, true) => "└── ",
        (false, false) => "├── ",
    };
    let label = format!("{indent}{branch}{}", entry.title());

    match entry {
        NavEntry::Item(item) => {
            out.push_str(&label);
            pad(out, (layout.label + GAP).saturating_sub(label.width()));
            out.push_str(&item.route_name);
            pad(out, (layout.route + GAP).saturating_sub(item.route_name.width()));
            out.push_str(&item.action);
            out.push(' ');
            out.push_str(&item.subject);
        }
        NavEntry::Group(group) => {
            out.push_str(&label);
            if let (Some(action), Some(subject)) = (&group.action, &group.subject) {
                pad(
                    out,
                    (layout.label + GAP).saturating_sub(label.width()) + layout.route + GAP,
                );
                out.push_str(action);
                out.push(' ');
                out.push_str(subject);
            }
        }
    }
    out.push('\n');

    if let NavEntry::Group(group) = entry {
        let child_indent = match (is_root, is_last) {
            (true, _) => indent.to_string(),
            (false, true) => format!("{indent}    "),
            (false, false) => format!("{indent}│   "),
        };
        for (i, child) in group.children.iter().enumerate() {
            render_entry(
                child,
                &child_indent,
                i + 1 == group.children.len(),
                false,
                layout,
                out,
            );
        }
    }
}

fn pad(out: &mut String, n: usize) {
    out.extend(std::iter::repeat_n(' ', n));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::horizontal_navigation;
    use crate::test_support::nested_tree;

    #[test]
    fn test_outline_of_builtin_menu() {
        let expected = "\
Dashboards
├── CRM        dashboards-crm        read Auth
├── Analytics  dashboards-analytics  read Admin
└── eCommerce  dashboards-ecommerce  read Admin
";
        assert_eq!(render_outline(horizontal_navigation()), expected);
    }

    #[test]
    fn test_outline_nests_groups() {
        let outline = render_outline(&nested_tree());
        let lines: Vec<&str> = outline.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Home"));
        assert_eq!(lines[1], "Apps");
        assert!(lines[3].starts_with("└── Messaging"));
        assert!(lines[4].starts_with("    └── Chat"));
    }

    #[test]
    fn test_empty_outline() {
        assert_eq!(render_outline(&[]), "");
    }
}
