use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Start and end angle (radians) of each ring slice.
///
/// Slices start at twelve o'clock and run clockwise in screen coordinates.
/// Negative and non-finite values count as zero.
pub fn ring_segments(values: &[f64]) -> Vec<(f64, f64)> {
    let weights: Vec<f64> = values
        .iter()
        .map(|v| if v.is_finite() && *v > 0.0 { *v } else { 0.0 })
        .collect();
    let total: f64 = weights.iter().sum();

    let mut angle = -FRAC_PI_2;
    weights
        .iter()
        .map(|w| {
            let sweep = if total > 0.0 { w / total * TAU } else { 0.0 };
            let segment = (angle, angle + sweep);
            angle += sweep;
            segment
        })
        .collect()
}

/// Closed outline of a ring slice in pixel coordinates.
pub fn arc_polygon(
    center: (i32, i32),
    outer_radius: f64,
    inner_radius: f64,
    start: f64,
    end: f64,
) -> Vec<(i32, i32)> {
    let steps = ((end - start).abs() / (PI / 90.0)).ceil().max(1.0) as usize;
    let point = |radius: f64, angle: f64| {
        (
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        )
    };

    let mut outline = Vec::with_capacity(2 * (steps + 1));
    for i in 0..=steps {
        let angle = start + (end - start) * i as f64 / steps as f64;
        outline.push(point(outer_radius, angle));
    }
    for i in (0..=steps).rev() {
        let angle = start + (end - start) * i as f64 / steps as f64;
        outline.push(point(inner_radius, angle));
    }
    outline
}

/// Outline of a rectangle with rounded corners, clockwise from the top edge.
pub fn rounded_rect(x: i32, y: i32, width: u32, height: u32, radius: u32) -> Vec<(i32, i32)> {
    let r = radius.min(width / 2).min(height / 2) as f64;
    let (x0, y0) = (x as f64, y as f64);
    let (x1, y1) = (x0 + width as f64, y0 + height as f64);

    let corners = [
        ((x1 - r, y0 + r), -FRAC_PI_2),
        ((x1 - r, y1 - r), 0.0),
        ((x0 + r, y1 - r), FRAC_PI_2),
        ((x0 + r, y0 + r), PI),
    ];

    const CORNER_STEPS: usize = 6;
    let mut outline = Vec::with_capacity(4 * (CORNER_STEPS + 1));
    for ((cx, cy), start) in corners {
        for i in 0..=CORNER_STEPS {
            let angle = start + FRAC_PI_2 * i as f64 / CORNER_STEPS as f64;
            outline.push((
                (cx + r * angle.cos()).round() as i32,
                (cy + r * angle.sin()).round() as i32,
            ));
        }
    }
    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_cover_the_circle() {
        let segments = ring_segments(&[30.0, 45.0, 25.0]);
        assert_eq!(segments.len(), 3);
        assert!((segments[0].0 + FRAC_PI_2).abs() < 1e-9);
        assert!((segments[2].1 - (TAU - FRAC_PI_2)).abs() < 1e-9);

        for pair in segments.windows(2) {
            assert!((pair[0].1 - pair[1].0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_segment_sweep_is_proportional() {
        let segments = ring_segments(&[120.0, 200.0, 300.0]);
        let sweep = |(a, b): (f64, f64)| b - a;
        assert!((sweep(segments[2]) / TAU - 300.0 / 620.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_gives_empty_slices() {
        let segments = ring_segments(&[0.0, -5.0]);
        assert!(segments.iter().all(|(a, b)| a == b));
    }

    #[test]
    fn test_arc_polygon_stays_inside_ring() {
        let outline = arc_polygon((100, 100), 50.0, 25.0, -FRAC_PI_2, 0.0);
        for (x, y) in outline {
            let r = (((x - 100).pow(2) + (y - 100).pow(2)) as f64).sqrt();
            assert!((24.0..=51.0).contains(&r));
        }
    }

    #[test]
    fn test_rounded_rect_bounds() {
        let outline = rounded_rect(10, 20, 200, 100, 15);
        assert!(outline.iter().all(|&(x, y)| (10..=210).contains(&x) && (20..=120).contains(&y)));
        assert!(outline.contains(&(195, 20)));
        assert!(!outline.contains(&(10, 20)));
    }
}
