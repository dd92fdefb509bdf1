//! Print a navigation tree as the console would show it for one page.

use anyhow::Result;
use gateway_client::{ExpandState, GatewayError, NavEntry, NavTree, Route, visible_rows};
use tracing::info;

use super::Output;
use crate::formatters::NavRowOutput;

pub fn run(
    path: &str,
    mobile: bool,
    toggles: &[String],
    collapsed: bool,
    out: &Output<'_>,
) -> Result<()> {
    let tree = if mobile {
        NavTree::mobile()
    } else {
        NavTree::sidebar()
    };

    let mut expand = ExpandState::for_tree(&tree);
    for group in toggles {
        if !tree.is_group(group) {
            let groups: Vec<&str> = tree
                .entries()
                .iter()
                .filter(|e| matches!(e, NavEntry::Group { .. }))
                .map(NavEntry::name)
                .collect();
            return Err(GatewayError::invalid_value("navigation group", group, &groups).into());
        }
        expand.toggle(group);
    }

    let route = Route::from_path(path);
    let rows: Vec<NavRowOutput> = visible_rows(&tree, &expand, collapsed, route.path())
        .iter()
        .map(NavRowOutput::from)
        .collect();
    info!(path = route.path(), mobile, rows = rows.len(), "Printing navigation tree");

    out.emit(&out.formatter().format_nav(&rows)?)
}
