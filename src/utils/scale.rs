/// Value axis range for a set of values.
///
/// Adds ten percent of headroom on each side. With `begin_at_zero` the range
/// always contains the zero baseline, which is what bar charts with negative
/// values rely on.
pub fn value_range(values: &[f64], begin_at_zero: bool) -> (f64, f64) {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return (0.0, 1.0);
    }

    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if begin_at_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }

    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.1 } else { hi.abs().max(1.0) * 0.1 };

    let lo = if begin_at_zero && lo == 0.0 { 0.0 } else { lo - pad };
    let hi = if begin_at_zero && hi == 0.0 { 0.0 } else { hi + pad };
    (lo, hi)
}

/// Horizontal extent of one bar inside its category.
///
/// Categories are centred on integer positions and one unit wide. Bars of the
/// same category share 80% of it, and each bar fills 90% of its slot.
pub fn grouped_bar_bounds(category: usize, dataset: usize, dataset_count: usize) -> (f64, f64) {
    const CATEGORY_PERCENTAGE: f64 = 0.8;
    const BAR_PERCENTAGE: f64 = 0.9;

    let count = dataset_count.max(1) as f64;
    let slot = CATEGORY_PERCENTAGE / count;
    let start = category as f64 - CATEGORY_PERCENTAGE / 2.0 + dataset as f64 * slot;
    let inset = slot * (1.0 - BAR_PERCENTAGE) / 2.0;
    (start + inset, start + slot - inset)
}

/// Short axis label: `250.0K`, `1.2M`, `35`.
pub fn format_value(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

/// Category label at an axis position, or an empty string between categories.
pub fn category_label(labels: &[String], position: f64) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_range_leaves_baseline_free() {
        let (lo, hi) = value_range(&[200000.0, 300000.0], false);
        assert_eq!(lo, 190000.0);
        assert_eq!(hi, 310000.0);
    }

    #[test]
    fn test_bar_range_starts_at_zero() {
        let (lo, hi) = value_range(&[25.0, 15.0, 10.0, 18.0, 35.0], true);
        assert_eq!(lo, 0.0);
        assert!(hi > 35.0);
    }

    #[test]
    fn test_negative_bars_extend_below_zero() {
        let (lo, hi) = value_range(&[45.0, 52.0, -20.0, -22.0], true);
        assert!(lo < -22.0);
        assert!(hi > 52.0);
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(value_range(&[], true), (0.0, 1.0));
        assert_eq!(value_range(&[f64::NAN], false), (0.0, 1.0));
    }

    #[test]
    fn test_single_value_gets_headroom() {
        let (lo, hi) = value_range(&[10.0], false);
        assert!(lo < 10.0 && hi > 10.0);
    }

    #[test]
    fn test_grouped_bars_do_not_overlap() {
        let (a0, a1) = grouped_bar_bounds(2, 0, 2);
        let (b0, b1) = grouped_bar_bounds(2, 1, 2);

        assert!(a0 > 1.5 && b1 < 2.5);
        assert!(a1 <= b0);
        assert!(((a1 - a0) - (b1 - b0)).abs() < 1e-9);
    }

    #[test]
    fn test_single_bar_is_centred() {
        let (x0, x1) = grouped_bar_bounds(0, 0, 1);
        assert!((x0 + x1).abs() < 1e-9);
        assert!((x1 - x0 - 0.72).abs() < 1e-9);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(250000.0), "250.0K");
        assert_eq!(format_value(1_500_000.0), "1.5M");
        assert_eq!(format_value(-20.0), "-20");
    }

    #[test]
    fn test_category_label() {
        let labels = vec!["Jan".to_string(), "Feb".to_string()];
        assert_eq!(category_label(&labels, 1.0), "Feb");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }
}
