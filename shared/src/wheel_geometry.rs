use std::f64::consts::PI;

use crate::constants::FULL_TURNS;

/// Where labels sit, as a fraction of the wheel radius from the center.
pub const LABEL_RADIUS_RATIO: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Angle spanned by each slice, in degrees.
pub fn slice_angle(wheel_len: usize) -> f64 {
    360.0 / wheel_len as f64
}

/// Point on a circle centred at the origin. Angles are in degrees and grow
/// clockwise in screen space (y points down).
pub fn point_on_circle(radius: f64, degrees: f64) -> Point {
    let radians = PI * degrees / 180.0;
    Point {
        x: radius * radians.cos(),
        y: radius * radians.sin(),
    }
}

/// SVG path of the wedge for slice `index`, relative to the wheel center.
pub fn wedge_path(index: usize, wheel_len: usize, radius: f64) -> String {
    let angle = slice_angle(wheel_len);
    let start = point_on_circle(radius, index as f64 * angle);
    let end = point_on_circle(radius, (index + 1) as f64 * angle);
    let large_arc = if angle > 180.0 { 1 } else { 0 };

    format!(
        "M0,0 L{:.3},{:.3} A{},{} 0 {} 1 {:.3},{:.3} Z",
        start.x, start.y, radius, radius, large_arc, end.x, end.y
    )
}

pub fn label_position(index: usize, wheel_len: usize, radius: f64) -> Point {
    let angle = slice_angle(wheel_len);
    point_on_circle(LABEL_RADIUS_RATIO * radius, index as f64 * angle + angle / 2.0)
}

/// Final rotation of the wheel graphic for a drawn target: a fixed number of
/// full turns plus the offset that brings the target's center to angle 0.
pub fn spin_rotation(target: usize, wheel_len: usize) -> f64 {
    let angle = slice_angle(wheel_len);
    360.0 * FULL_TURNS + (360.0 - target as f64 * angle - angle / 2.0)
}

/// Slice sitting at angle 0 once the wheel has been rotated by `rotation` degrees.
pub fn slice_at_origin(rotation: f64, wheel_len: usize) -> usize {
    let unrotated = (-rotation).rem_euclid(360.0);
    ((unrotated / slice_angle(wheel_len)) as usize).min(wheel_len - 1)
}
