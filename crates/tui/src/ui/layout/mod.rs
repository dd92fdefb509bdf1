//! The shell around each page: header, navigation panes, overlays, footer.

pub mod footer;
pub mod header;
pub mod nav;
pub mod overlays;

pub use footer::render_footer;
pub use header::{HeaderConfig, render_header};
pub use nav::{NavPaneConfig, render_drawer, render_nav_pane};
pub use overlays::{GatewayMenuConfig, NotificationsConfig, render_gateway_menu, render_notifications};
