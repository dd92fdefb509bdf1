use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tree::{NavEntry, NavIcon, NavTree};

/// Names of the groups currently expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandState {
    expanded: BTreeSet<String>,
}

impl ExpandState {
    /// Start from the tree's default expansion.
    pub fn for_tree(tree: &NavTree) -> Self {
        Self {
            expanded: tree.default_expanded().iter().cloned().collect(),
        }
    }

    pub fn is_expanded(&self, group: &str) -> bool {
        self.expanded.contains(group)
    }

    /// Flip a group's expansion. Returns whether it is now expanded.
    pub fn toggle(&mut self, group: &str) -> bool {
        if self.expanded.remove(group) {
            false
        } else {
            self.expanded.insert(group.to_string());
            true
        }
    }

    pub fn expanded(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

/// Desktop sidebar state: collapsed flag plus group expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    collapsed: bool,
    expand: ExpandState,
}

impl SidebarState {
    pub fn new(tree: &NavTree) -> Self {
        Self {
            collapsed: false,
            expand: ExpandState::for_tree(tree),
        }
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    pub fn expand_state(&self) -> &ExpandState {
        &self.expand
    }

    /// Toggle a group. Ignored (returns `None`) while the sidebar is collapsed.
    pub fn toggle_group(&mut self, group: &str) -> Option<bool> {
        if self.collapsed {
            debug!(group, "Ignoring group toggle while sidebar is collapsed");
            return None;
        }
        Some(self.expand.toggle(group))
    }
}

/// What a flattened row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRowKind<'a> {
    Link { path: &'a str, active: bool },
    Group { expanded: bool },
}

/// One selectable row of a flattened navigation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRow<'a> {
    pub name: &'a str,
    pub icon: Option<NavIcon>,
    /// 0 for top-level entries, 1 for group children.
    pub depth: u8,
    pub kind: NavRowKind<'a>,
    pub footer: bool,
}

impl NavRow<'_> {
    pub fn is_active(&self) -> bool {
        matches!(self.kind, NavRowKind::Link { active: true, .. })
    }

    pub fn path(&self) -> Option<&str> {
        match self.kind {
            NavRowKind::Link { path, .. } => Some(path),
            NavRowKind::Group { .. } => None,
        }
    }
}

/// Flatten `tree` into the rows currently visible.
///
/// Group children appear only when the group is expanded and the sidebar is
/// not collapsed. Footer links come last and are never active.
pub fn visible_rows<'a>(
    tree: &'a NavTree,
    expand: &ExpandState,
    collapsed: bool,
    current_path: &str,
) -> Vec<NavRow<'a>> {
    let mut rows = Vec::new();
    for entry in tree.entries() {
        match entry {
            NavEntry::Link(link) => rows.push(NavRow {
                name: &link.name,
                icon: link.icon,
                depth: 0,
                kind: NavRowKind::Link {
                    path: &link.path,
                    active: link.is_active(current_path),
                },
                footer: false,
            }),
            NavEntry::Group {
                name,
                icon,
                children,
            } => {
                let expanded = expand.is_expanded(name);
                rows.push(NavRow {
                    name,
                    icon: Some(*icon),
                    depth: 0,
                    kind: NavRowKind::Group { expanded },
                    footer: false,
                });
                if expanded && !collapsed {
                    rows.extend(children.iter().map(|child| NavRow {
                        name: &child.name,
                        icon: child.icon,
                        depth: 1,
                        kind: NavRowKind::Link {
                            path: &child.path,
                            active: child.is_active(current_path),
                        },
                        footer: false,
                    }));
                }
            }
        }
    }
    rows.extend(tree.footer().iter().map(|link| NavRow {
        name: &link.name,
        icon: link.icon,
        depth: 0,
        kind: NavRowKind::Link {
            path: &link.path,
            active: false,
        },
        footer: true,
    }));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(rows: &[NavRow<'a>]) -> Vec<&'a str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_sidebar_starts_with_device_management_expanded() {
        let tree = NavTree::sidebar();
        let state = SidebarState::new(&tree);
        assert!(state.expand_state().is_expanded("Device Management"));
        let rows = visible_rows(&tree, state.expand_state(), false, "/dashboard");
        assert_eq!(
            names(&rows)[..5],
            ["Dashboard", "Device Management", "Devices", "Add Device", "Discovery"]
        );
        assert_eq!(rows.last().map(|r| r.footer), Some(true));
    }

    #[test]
    fn test_toggle_hides_children() {
        let tree = NavTree::sidebar();
        let mut state = SidebarState::new(&tree);
        assert_eq!(state.toggle_group("Device Management"), Some(false));
        let rows = visible_rows(&tree, state.expand_state(), false, "/dashboard");
        assert!(!names(&rows).contains(&"Add Device"));
        assert_eq!(state.toggle_group("Device Management"), Some(true));
    }

    #[test]
    fn test_collapsed_sidebar_ignores_toggles_and_hides_children() {
        let tree = NavTree::sidebar();
        let mut state = SidebarState::new(&tree);
        state.toggle_collapsed();
        assert_eq!(state.toggle_group("Device Management"), None);
        assert!(state.expand_state().is_expanded("Device Management"));
        let rows = visible_rows(&tree, state.expand_state(), state.is_collapsed(), "/devices");
        assert!(rows.iter().all(|r| r.depth == 0));
        // The active child is hidden, so nothing is highlighted.
        assert!(!rows.iter().any(NavRow::is_active));
    }

    #[test]
    fn test_single_active_row() {
        let tree = NavTree::sidebar();
        let state = SidebarState::new(&tree);
        let rows = visible_rows(&tree, state.expand_state(), false, "/settings");
        let active: Vec<_> = rows.iter().filter(|r| r.is_active()).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "System Settings");
        assert!(!active[0].footer);
    }

    #[test]
    fn test_navigation_does_not_expand_parent_group() {
        let tree = NavTree::mobile();
        let expand = ExpandState::for_tree(&tree);
        let rows = visible_rows(&tree, &expand, false, "/devices/discovery");
        assert!(!rows.iter().any(NavRow::is_active));
        assert!(!expand.is_expanded("Device Management"));
    }

    #[test]
    fn test_expand_state_toggle_round_trip() {
        let mut expand = ExpandState::default();
        assert!(expand.toggle("Security"));
        assert_eq!(expand.expanded().collect::<Vec<_>>(), vec!["Security"]);
        assert!(!expand.toggle("Security"));
        assert_eq!(expand.expanded().count(), 0);
    }

    #[test]
    fn test_row_path() {
        let tree = NavTree::sidebar();
        let rows = visible_rows(&tree, &ExpandState::default(), false, "/");
        assert_eq!(rows[0].path(), Some("/dashboard"));
        assert_eq!(rows[1].path(), None);
    }
}
