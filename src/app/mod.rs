mod layout;
pub mod mount;
mod state;
mod ui;

pub use layout::{
    card, CardNode, CardRegions, DashboardTree, DashboardView, GridNode, HeadingNode,
    MountedDashboard, PageGeometry, PageNode, Rect, DASHBOARD_HEADING,
};
pub use mount::{resolve_anchor, Anchor, Host, HostPage, Viewport, DEFAULT_ANCHOR};
pub use state::{ChartTextures, DashboardApp, TextureKey};
pub use ui::draw_ui;
