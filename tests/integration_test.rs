use churn_dashboard::app::{HostPage, Viewport};
use churn_dashboard::config::Config;
use churn_dashboard::plotting::{export_svg, export_to_file, Theme};
use churn_dashboard::{ChartConfigRegistry, ChartId, DashboardError, DashboardView};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const VIEWPORT: Viewport = Viewport {
    width: 1200,
    height: 800,
};

#[test]
fn test_full_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "mount = \"dashboard\"\n\n[host]\nanchors = [\"dashboard\"]\n\n[export]\nwidth = 1000\n",
    )
    .unwrap();

    // Load configuration and mount
    let config = Config::load(Some(&config_path)).unwrap();
    let theme = Theme::default();
    let registry = ChartConfigRegistry::new(&theme);
    let view = DashboardView::new(&registry, &theme);

    let mounted = view
        .mount(&config.export_host(config.export.width), &config.mount)
        .unwrap();
    assert_eq!(mounted.anchor.id, "dashboard");
    assert_eq!(mounted.tree.page.grid.cards.len(), 6);

    // Cards carry the registry definitions in order
    let ids: Vec<ChartId> = mounted
        .tree
        .page
        .grid
        .cards
        .iter()
        .map(|card| card.chart.id)
        .collect();
    assert_eq!(ids, ChartId::ALL.to_vec());

    // Export to both formats
    let svg_path = temp_dir.path().join("dashboard.svg");
    let png_path = temp_dir.path().join("dashboard.png");
    export_to_file(&mounted.tree, mounted.anchor.viewport.width, &svg_path).unwrap();
    export_to_file(&mounted.tree, mounted.anchor.viewport.width, &png_path).unwrap();

    let svg = fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("Customer Churn Analytics Dashboard"));
    assert!(fs::metadata(&png_path).unwrap().len() > 0);
}

#[test]
fn test_missing_anchor_is_fatal() {
    let theme = Theme::default();
    let registry = ChartConfigRegistry::new(&theme);
    let view = DashboardView::new(&registry, &theme);

    let host = HostPage::new().with_anchor("sidebar", VIEWPORT);
    match view.mount(&host, "root") {
        Err(DashboardError::MountNotFound(id)) => assert_eq!(id, "root"),
        other => panic!("expected MountNotFound, got {:?}", other),
    }

    // A configuration naming an anchor the host does not provide fails the same way
    let config = Config::parse("mount = \"missing\"").unwrap();
    let result = view.mount(&config.window_host(), &config.mount);
    assert!(matches!(result, Err(DashboardError::MountNotFound(_))));
}

#[test]
fn test_render_is_idempotent() {
    let theme = Theme::default();
    let registry = ChartConfigRegistry::new(&theme);
    let view = DashboardView::new(&registry, &theme);
    let host = HostPage::from_ids(["first", "second"], VIEWPORT);

    let first = view.mount(&host, "first").unwrap();
    let second = view.mount(&host, "second").unwrap();
    assert_eq!(first.tree, second.tree);

    let first_svg = export_svg(&first.tree, 1200).unwrap();
    let second_svg = export_svg(&second.tree, 1200).unwrap();
    assert_eq!(first_svg, second_svg);
}

#[test]
fn test_definitions_serialize() {
    let registry = ChartConfigRegistry::default();
    let json = serde_json::to_value(registry.definitions()).unwrap();
    let charts = json.as_array().unwrap();

    assert_eq!(charts.len(), 6);
    assert_eq!(charts[0]["id"], "revenue-risk");
    assert_eq!(charts[0]["kind"], "line");
    assert_eq!(charts[0]["accent"], "#B71C1C");
    assert_eq!(charts[4]["kind"], "doughnut");
    assert_eq!(charts[4]["style"]["legend_position"], "right");
    assert_eq!(charts[2]["series"]["datasets"][0]["tension"], 0.4);
}
