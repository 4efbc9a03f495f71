/// Benchmark module for the dashboard rendering paths.
/// Measures tree construction, single chart rasterisation and full page export.
use criterion::{criterion_group, criterion_main, Criterion};
use churn_dashboard::plotting::{export_svg, render_chart_rgb, render_page_rgb, Theme};
use churn_dashboard::{ChartConfigRegistry, ChartId, DashboardView};

/// Benchmark building the registry and the visual tree
///
/// # Arguments
/// * `c` - Criterion benchmark configuration
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let theme = Theme::default();

    group.bench_function("build_registry", |b| {
        b.iter(|| ChartConfigRegistry::new(&theme))
    });

    let registry = ChartConfigRegistry::new(&theme);
    group.bench_function("render_tree", |b| {
        b.iter(|| DashboardView::new(&registry, &theme).render())
    });

    group.finish();
}

/// Benchmark chart and page rasterisation
///
/// # Arguments
/// * `c` - Criterion benchmark configuration
fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.sample_size(20);

    let theme = Theme::default();
    let registry = ChartConfigRegistry::new(&theme);
    let tree = DashboardView::new(&registry, &theme).render();

    for id in [ChartId::CustomerJourney, ChartId::AcquisitionVsLoss, ChartId::RiskDistribution] {
        let definition = registry.get(id);
        group.bench_function(format!("chart_{}", id), |b| {
            b.iter(|| render_chart_rgb(definition, theme.card.background, (720, 300)).unwrap())
        });
    }

    group.bench_function("page_bitmap", |b| {
        b.iter(|| render_page_rgb(&tree, 1600).unwrap())
    });

    group.bench_function("page_svg", |b| b.iter(|| export_svg(&tree, 1600).unwrap()));

    group.finish();
}

criterion_group!(benches, bench_layout, bench_rendering);
criterion_main!(benches);
