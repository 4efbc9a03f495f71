mod geometry;
mod scale;
mod spline;

pub use geometry::{arc_polygon, ring_segments, rounded_rect};
pub use scale::{category_label, format_value, grouped_bar_bounds, value_range};
pub use spline::smooth_points;
