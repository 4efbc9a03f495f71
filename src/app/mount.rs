use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};

/// Identifier of the anchor the dashboard attaches to unless told otherwise
pub const DEFAULT_ANCHOR: &str = "root";

/// Pixel size of the surface behind an anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// A host-provided place the dashboard can attach to
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub id: String,
    pub viewport: Viewport,
}

/// Something that provides mount anchors: a window, an export canvas, a test page
pub trait Host {
    fn anchor(&self, id: &str) -> Option<Anchor>;
}

/// An in-memory host page holding named anchors
#[derive(Clone, Debug, Default)]
pub struct HostPage {
    anchors: BTreeMap<String, Viewport>,
}

impl HostPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, id: impl Into<String>, viewport: Viewport) -> Self {
        self.anchors.insert(id.into(), viewport);
        self
    }

    /// Host page exposing every identifier in `ids` with the same viewport.
    pub fn from_ids<I, S>(ids: I, viewport: Viewport) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter()
            .fold(Self::new(), |page, id| page.with_anchor(id, viewport))
    }

    pub fn anchor_ids(&self) -> impl Iterator<Item = &str> {
        self.anchors.keys().map(String::as_str)
    }
}

impl Host for HostPage {
    fn anchor(&self, id: &str) -> Option<Anchor> {
        self.anchors.get(id).map(|viewport| Anchor {
            id: id.to_string(),
            viewport: *viewport,
        })
    }
}

/// Look up the mount anchor; a missing anchor is fatal for startup.
pub fn resolve_anchor<H: Host + ?Sized>(host: &H, id: &str) -> DashboardResult<Anchor> {
    host.anchor(id)
        .ok_or_else(|| DashboardError::MountNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1200,
        height: 800,
    };

    #[test]
    fn test_resolve_present_anchor() {
        let page = HostPage::new().with_anchor(DEFAULT_ANCHOR, VIEWPORT);
        let anchor = resolve_anchor(&page, DEFAULT_ANCHOR).unwrap();
        assert_eq!(anchor.id, "root");
        assert_eq!(anchor.viewport, VIEWPORT);
    }

    #[test]
    fn test_missing_anchor_is_mount_not_found() {
        let page = HostPage::new().with_anchor("sidebar", VIEWPORT);
        let err = resolve_anchor(&page, DEFAULT_ANCHOR).unwrap_err();
        assert!(matches!(err, DashboardError::MountNotFound(ref id) if id == "root"));
    }

    #[test]
    fn test_from_ids() {
        let page = HostPage::from_ids(["root", "preview"], VIEWPORT);
        let ids: Vec<&str> = page.anchor_ids().collect();
        assert_eq!(ids, vec!["preview", "root"]);
        assert!(page.anchor("preview").is_some());
    }
}
