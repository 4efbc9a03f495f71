//! # Customer Churn Dashboard
//!
//! `churn_dashboard` renders a static customer churn analytics dashboard: six
//! predefined charts over built-in sample data, laid out in a two-column grid
//! on a dark theme.
//!
//! ## Features
//!
//! - Chart registry with a shared base style and per-chart overrides
//! - Line charts with optional spline smoothing, grouped bar charts with a zero
//!   baseline, and ring charts
//! - A pure visual tree that can be shown in a native window or exported
//! - SVG and raster export
//! - Fail-fast mounting on a named host anchor
//!
//! ## Example
//!
//! ```no_run
//! use churn_dashboard::app::{DashboardApp, DashboardView, HostPage, Viewport};
//! use churn_dashboard::plotting::Theme;
//! use churn_dashboard::registry::ChartConfigRegistry;
//!
//! let theme = Theme::default();
//! let registry = ChartConfigRegistry::new(&theme);
//! let host = HostPage::new().with_anchor("root", Viewport { width: 1200, height: 800 });
//! let mounted = DashboardView::new(&registry, &theme).mount(&host, "root")?;
//!
//! eframe::run_native(
//!     "Customer Churn Analytics",
//!     eframe::NativeOptions::default(),
//!     Box::new(|_cc| Ok(Box::new(DashboardApp::new(mounted)))),
//! )
//! .unwrap();
//! # Ok::<(), churn_dashboard::DashboardError>(())
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod plotting;
pub mod registry;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::{DashboardView, MountedDashboard};
pub use error::{DashboardError, DashboardResult};
pub use registry::ChartConfigRegistry;
pub use types::{ChartDefinition, ChartId, ChartKind};
