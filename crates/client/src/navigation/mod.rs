//! Navigation state for the desktop sidebar and the mobile drawer.
//!
//! Responsibilities:
//! - Define the static route trees (leaf links and one-level groups).
//! - Decide which leaf is active for the current path (exact match).
//! - Track which groups are expanded and whether the sidebar is collapsed.
//! - Flatten a tree into the rows a cursor can move over.
//! - Map paths to typed pages, including the not-found page.
//!
//! Does NOT handle:
//! - Rendering, or deciding when to show the drawer instead of the sidebar.
//!
//! Invariants:
//! - At most one leaf is active for any path (paths are unique per tree).
//! - Groups are never active and have at least one child.
//! - Expansion changes only through explicit toggles; route changes never
//!   expand a group.

mod route;
mod state;
mod tree;

pub use route::{NOT_FOUND_LINKS, Route};
pub use state::{ExpandState, NavRow, NavRowKind, SidebarState, visible_rows};
pub use tree::{NavEntry, NavIcon, NavLink, NavTree};
