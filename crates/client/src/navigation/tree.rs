use std::collections::HashSet;

use serde::Serialize;

use crate::error::NavError;

/// Icon identifiers; the terminal UI maps each to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Dashboard,
    Radio,
    Database,
    Chart,
    Shield,
    Cloud,
    Wrench,
    Sparkles,
    Activity,
    Settings,
}

impl NavIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            NavIcon::Dashboard => "▦",
            NavIcon::Radio => "◉",
            NavIcon::Database => "⛁",
            NavIcon::Chart => "▤",
            NavIcon::Shield => "⛨",
            NavIcon::Cloud => "☁",
            NavIcon::Wrench => "⚒",
            NavIcon::Sparkles => "✦",
            NavIcon::Activity => "∿",
            NavIcon::Settings => "⚙",
        }
    }
}

/// A navigable leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<NavIcon>,
}

impl NavLink {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: NavIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Exact path equality; no prefix matching.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Top-level navigation entry: a leaf link or a group of leaf links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavEntry {
    Link(NavLink),
    Group {
        name: String,
        icon: NavIcon,
        children: Vec<NavLink>,
    },
}

impl NavEntry {
    pub fn name(&self) -> &str {
        match self {
            NavEntry::Link(link) => &link.name,
            NavEntry::Group { name, .. } => name,
        }
    }

    /// Leaves reachable from this entry: itself, or its children.
    pub fn links(&self) -> &[NavLink] {
        match self {
            NavEntry::Link(link) => std::slice::from_ref(link),
            NavEntry::Group { children, .. } => children,
        }
    }
}

fn link(name: &str, path: &str, icon: NavIcon) -> NavEntry {
    NavEntry::Link(NavLink::new(name, path).with_icon(icon))
}

fn group(name: &str, icon: NavIcon, children: &[(&str, &str)]) -> NavEntry {
    NavEntry::Group {
        name: name.to_string(),
        icon,
        children: children
            .iter()
            .map(|(name, path)| NavLink::new(*name, *path))
            .collect(),
    }
}

/// An immutable, validated navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavTree {
    entries: Vec<NavEntry>,
    footer: Vec<NavLink>,
    default_expanded: Vec<String>,
}

impl NavTree {
    /// Build a tree, rejecting empty groups, blank names, relative paths and
    /// duplicate leaf paths. Footer links are never highlighted and are
    /// excluded from the uniqueness check.
    pub fn new(
        entries: Vec<NavEntry>,
        footer: Vec<NavLink>,
        default_expanded: Vec<String>,
    ) -> Result<Self, NavError> {
        let tree = Self {
            entries,
            footer,
            default_expanded,
        };
        tree.validate()?;
        Ok(tree)
    }

    fn validate(&self) -> Result<(), NavError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.name().trim().is_empty() {
                return Err(NavError::BlankName);
            }
            if let NavEntry::Group { name, children, .. } = entry
                && children.is_empty()
            {
                return Err(NavError::EmptyGroup(name.clone()));
            }
            for link in entry.links() {
                check_link(link)?;
                if !seen.insert(link.path.as_str()) {
                    return Err(NavError::DuplicatePath(link.path.clone()));
                }
            }
        }
        self.footer.iter().try_for_each(check_link)
    }

    /// The desktop sidebar: one group ("Device Management", expanded by
    /// default) and a footer Settings link.
    pub fn sidebar() -> Self {
        Self {
            entries: vec![
                link("Dashboard", "/dashboard", NavIcon::Dashboard),
                group(
                    "Device Management",
                    NavIcon::Radio,
                    &[
                        ("Devices", "/devices"),
                        ("Add Device", "/devices/add"),
                        ("Discovery", "/devices/discovery"),
                    ],
                ),
                link("Protocols", "/protocols", NavIcon::Activity),
                link("Data Management", "/data", NavIcon::Database),
                link("Alarms & Events", "/alarms", NavIcon::Chart),
                link("Reports", "/reports", NavIcon::Chart),
                link("Integration", "/integrations", NavIcon::Cloud),
                link("Users & Roles", "/users", NavIcon::Shield),
                link("System Settings", "/settings", NavIcon::Settings),
            ],
            footer: vec![NavLink::new("Settings", "/settings").with_icon(NavIcon::Settings)],
            default_expanded: vec!["Device Management".to_string()],
        }
    }

    /// The mobile drawer: a wider catalogue of groups, all collapsed.
    /// Most of these paths have no page and resolve to not-found.
    pub fn mobile() -> Self {
        Self {
            entries: vec![
                link("Dashboard", "/dashboard", NavIcon::Dashboard),
                group(
                    "Device Management",
                    NavIcon::Radio,
                    &[
                        ("Discovery", "/devices/discovery"),
                        ("Drivers", "/devices/drivers"),
                        ("Connection Tester", "/devices/tester"),
                        ("Tag Browser", "/devices/tags"),
                        ("Protocol Converter", "/devices/converter"),
                    ],
                ),
                group(
                    "Data Management",
                    NavIcon::Database,
                    &[
                        ("Transformation", "/data/transformer"),
                        ("Buffer", "/data/buffer"),
                        ("Database Integration", "/data/database"),
                        ("Alarms", "/data/alarms"),
                        ("Edge Analytics", "/data/analytics"),
                    ],
                ),
                group(
                    "Monitoring",
                    NavIcon::Chart,
                    &[
                        ("Traffic Monitor", "/monitor/traffic"),
                        ("Health", "/monitor/health"),
                        ("Alerts", "/monitor/alerts"),
                        ("Topology", "/monitor/topology"),
                    ],
                ),
                group(
                    "Security",
                    NavIcon::Shield,
                    &[
                        ("Certificates", "/security/certificates"),
                        ("Access Control", "/security/access"),
                        ("Audit Trail", "/security/audit"),
                        ("Updates", "/security/update"),
                    ],
                ),
                group(
                    "Integration",
                    NavIcon::Cloud,
                    &[
                        ("Cloud Platforms", "/integration/cloud"),
                        ("Edge Deployment", "/integration/edge"),
                        ("API Management", "/integration/api"),
                        ("Multi-Gateway", "/integration/multi-gateway"),
                    ],
                ),
                group(
                    "Productivity",
                    NavIcon::Wrench,
                    &[
                        ("Configuration", "/tools/config"),
                        ("Templates", "/tools/templates"),
                        ("Scheduler", "/tools/scheduler"),
                        ("Simulator", "/tools/simulator"),
                    ],
                ),
                group(
                    "Enterprise",
                    NavIcon::Sparkles,
                    &[
                        ("High Availability", "/enterprise/ha"),
                        ("ML/AI Integration", "/enterprise/ai"),
                        ("Data Governance", "/enterprise/governance"),
                        ("Rules Engine", "/enterprise/rules"),
                        ("OEE Dashboard", "/enterprise/oee"),
                    ],
                ),
            ],
            footer: Vec::new(),
            default_expanded: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn footer(&self) -> &[NavLink] {
        &self.footer
    }

    pub fn default_expanded(&self) -> &[String] {
        &self.default_expanded
    }

    /// Every leaf in the main tree, in display order (footer excluded).
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.entries.iter().flat_map(NavEntry::links)
    }

    /// The single leaf whose path equals `current_path`, if any.
    pub fn active_link(&self, current_path: &str) -> Option<&NavLink> {
        self.links().find(|link| link.is_active(current_path))
    }

    /// Name of the group containing `path`, if the path is a group child.
    pub fn parent_group(&self, path: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            NavEntry::Group { name, children, .. } if children.iter().any(|c| c.path == path) => {
                Some(name.as_str())
            }
            _ => None,
        })
    }

    pub fn is_group(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, NavEntry::Group { name: n, .. } if n == name))
    }
}

fn check_link(link: &NavLink) -> Result<(), NavError> {
    if link.name.trim().is_empty() {
        return Err(NavError::BlankName);
    }
    if !link.path.starts_with('/') {
        return Err(NavError::InvalidPath {
            name: link.name.clone(),
            path: link.path.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rebuild(tree: &NavTree) -> Result<NavTree, NavError> {
        NavTree::new(
            tree.entries().to_vec(),
            tree.footer().to_vec(),
            tree.default_expanded().to_vec(),
        )
    }

    #[test]
    fn test_builtin_trees_are_valid() {
        assert!(rebuild(&NavTree::sidebar()).is_ok());
        assert!(rebuild(&NavTree::mobile()).is_ok());
    }

    #[test]
    fn test_active_link_is_exact_match() {
        let tree = NavTree::sidebar();
        assert_eq!(tree.active_link("/devices").map(|l| l.name.as_str()), Some("Devices"));
        assert_eq!(
            tree.active_link("/devices/add").map(|l| l.name.as_str()),
            Some("Add Device")
        );
        assert!(tree.active_link("/devices/unknown").is_none());
        assert!(tree.active_link("/").is_none());
    }

    #[test]
    fn test_group_is_never_active() {
        let tree = NavTree::sidebar();
        assert!(tree.active_link("Device Management").is_none());
        assert_eq!(tree.parent_group("/devices/discovery"), Some("Device Management"));
        assert_eq!(tree.parent_group("/alarms"), None);
    }

    #[test]
    fn test_rejects_empty_group() {
        let entries = vec![NavEntry::Group {
            name: "Monitoring".to_string(),
            icon: NavIcon::Chart,
            children: vec![],
        }];
        assert_eq!(
            NavTree::new(entries, vec![], vec![]),
            Err(NavError::EmptyGroup("Monitoring".to_string()))
        );
    }

    #[test]
    fn test_rejects_duplicate_paths() {
        let entries = vec![
            NavEntry::Link(NavLink::new("Devices", "/devices")),
            NavEntry::Link(NavLink::new("All Devices", "/devices")),
        ];
        assert_eq!(
            NavTree::new(entries, vec![], vec![]),
            Err(NavError::DuplicatePath("/devices".to_string()))
        );
    }

    #[test]
    fn test_rejects_relative_path_and_blank_name() {
        let relative = vec![NavEntry::Link(NavLink::new("Devices", "devices"))];
        assert!(matches!(
            NavTree::new(relative, vec![], vec![]),
            Err(NavError::InvalidPath { .. })
        ));
        let blank = vec![NavEntry::Link(NavLink::new("  ", "/x"))];
        assert_eq!(NavTree::new(blank, vec![], vec![]), Err(NavError::BlankName));
    }

    #[test]
    fn test_footer_may_repeat_a_main_path() {
        let tree = NavTree::sidebar();
        assert_eq!(tree.footer()[0].path, "/settings");
        assert_eq!(
            tree.active_link("/settings").map(|l| l.name.as_str()),
            Some("System Settings")
        );
    }

    #[test]
    fn test_mobile_has_no_default_expanded_groups() {
        let tree = NavTree::mobile();
        assert!(tree.default_expanded().is_empty());
        assert!(tree.is_group("Enterprise"));
        assert!(!tree.is_group("Dashboard"));
        assert_eq!(tree.links().count(), 1 + 5 + 5 + 4 + 4 + 4 + 4 + 5);
    }
}
