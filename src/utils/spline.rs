/// Smooth a polyline with a cardinal Bezier spline that passes through every point.
///
/// Control points around each point are placed along the line joining its
/// neighbours, scaled by `tension` and by the relative distance to each
/// neighbour. Distances are measured after normalising both axes to the points'
/// bounding box so that axes with very different units weigh equally. The first
/// and last points use themselves as the missing neighbour.
///
/// Each segment is sampled `samples_per_segment` times, so the result holds
/// `(n - 1) * samples_per_segment + 1` points for `n >= 2` inputs.
pub fn smooth_points(
    points: &[(f64, f64)],
    tension: f64,
    samples_per_segment: usize,
) -> Vec<(f64, f64)> {
    if points.len() < 2 || samples_per_segment == 0 {
        return points.to_vec();
    }

    let (sx, sy) = axis_spans(points);
    let norm = |(x, y): (f64, f64)| (x / sx, y / sy);
    let denorm = |(x, y): (f64, f64)| (x * sx, y * sy);

    let normalized: Vec<(f64, f64)> = points.iter().copied().map(norm).collect();
    let controls: Vec<((f64, f64), (f64, f64))> = (0..normalized.len())
        .map(|i| {
            let prev = normalized[i.saturating_sub(1)];
            let cur = normalized[i];
            let next = normalized[(i + 1).min(normalized.len() - 1)];
            control_points(prev, cur, next, tension)
        })
        .collect();

    let mut smoothed = Vec::with_capacity((points.len() - 1) * samples_per_segment + 1);
    smoothed.push(points[0]);

    for i in 0..normalized.len() - 1 {
        let p0 = normalized[i];
        let p1 = controls[i].1;
        let p2 = controls[i + 1].0;
        let p3 = normalized[i + 1];

        for step in 1..=samples_per_segment {
            let t = step as f64 / samples_per_segment as f64;
            let sample = if step == samples_per_segment {
                points[i + 1]
            } else {
                denorm(cubic_bezier(p0, p1, p2, p3, t))
            };
            smoothed.push(sample);
        }
    }

    smoothed
}

/// Control points before and after `cur`.
fn control_points(
    prev: (f64, f64),
    cur: (f64, f64),
    next: (f64, f64),
    tension: f64,
) -> ((f64, f64), (f64, f64)) {
    let d01 = distance(prev, cur);
    let d12 = distance(cur, next);
    let total = d01 + d12;

    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let fa = tension * s01;
    let fb = tension * s12;

    let dx = next.0 - prev.0;
    let dy = next.1 - prev.1;
    (
        (cur.0 - fa * dx, cur.1 - fa * dy),
        (cur.0 + fb * dx, cur.1 + fb * dy),
    )
}

fn cubic_bezier(
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
    t: f64,
) -> (f64, f64) {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
        a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
    )
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

fn axis_spans(points: &[(f64, f64)]) -> (f64, f64) {
    let span = |values: &mut dyn Iterator<Item = f64>| {
        let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        let span = hi - lo;
        if span > 0.0 && span.is_finite() {
            span
        } else {
            1.0
        }
    };
    (
        span(&mut points.iter().map(|p| p.0)),
        span(&mut points.iter().map(|p| p.1)),
    )
}
