use std::f64::consts::{FRAC_PI_2, TAU};

use crate::foundation::core::{Point, Vec2};

/// Angular width of one month slice (`2π / 12`).
pub const RADIANS_PER_MONTH: f64 = TAU / 12.0;

/// Convert a wheel angle (0 = 12 o'clock, clockwise) to a screen point.
///
/// Screen space is y-down, so a plain `(cos, sin)` walks clockwise from 3 o'clock; the `-π/2`
/// rotation moves angle 0 to the top.
pub fn polar_to_cartesian(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::from_angle(to_screen_angle(angle)) * radius
}

/// Wheel angle to the `kurbo` / screen angle measured from the +x axis.
#[inline]
pub(crate) fn to_screen_angle(angle: f64) -> f64 {
    angle - FRAC_PI_2
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
