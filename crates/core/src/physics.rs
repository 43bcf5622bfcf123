//! Bounce geometry.
//!
//! All directions returned here are unit vectors in screen space (`y` down),
//! so "up" has a negative `dy`.

use std::f64::consts::PI;

/// Launch direction used at reset: 45° up and to the right.
pub fn initial_direction() -> (f64, f64) {
    let angle = PI / 4.0;
    (angle.cos(), -angle.sin())
}

/// Direction after striking the paddle at `hit_position` (0 = left edge, 1 = right edge).
///
/// The bounce angle runs from π/4 at the left edge to 3π/4 at the right edge,
/// passing π/2 (straight up) at the center. The horizontal component keeps a
/// positive magnitude and takes its sign from the half that was struck, so
/// the left half steers left and the right half steers right.
pub fn paddle_bounce(hit_position: f64) -> (f64, f64) {
    let angle = PI * (0.25 + 0.5 * hit_position);
    let sign = if hit_position >= 0.5 { 1.0 } else { -1.0 };
    (angle.cos().abs() * sign, -angle.sin())
}

/// Respawn direction for a unit sample `t ∈ [0, 1)`.
///
/// The angle is spread uniformly over `π/6..5π/6`; `rightward` flips the
/// horizontal sign.
pub fn launch_direction(t: f64, rightward: bool) -> (f64, f64) {
    let angle = PI * (1.0 / 6.0 + 2.0 / 3.0 * t);
    let sign = if rightward { 1.0 } else { -1.0 };
    (angle.cos() * sign, -angle.sin())
}

pub fn unit_length(dx: f64, dy: f64) -> f64 {
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn center_hit_goes_straight_up() {
        let (dx, dy) = paddle_bounce(0.5);
        assert!(dx.abs() < EPS);
        assert!((dy + 1.0).abs() < EPS);
    }

    #[test]
    fn halves_steer_outwards() {
        let (left_dx, left_dy) = paddle_bounce(0.0);
        assert!(left_dx < 0.0);
        assert!(left_dy < 0.0);
        assert!((left_dx + (PI / 4.0).cos()).abs() < EPS);

        let (right_dx, right_dy) = paddle_bounce(0.99);
        assert!(right_dx > 0.0);
        assert!(right_dy < 0.0);
    }

    #[test]
    fn quarter_hits_mirror_each_other() {
        let expected = (PI * 0.625).cos().abs();

        let (right_dx, right_dy) = paddle_bounce(0.75);
        assert!((right_dx - expected).abs() < EPS);
        assert!((right_dx - 0.3827).abs() < 1e-4);

        let (left_dx, left_dy) = paddle_bounce(0.25);
        assert!((left_dx + expected).abs() < EPS);
        assert!((left_dy - right_dy).abs() < EPS);
    }

    #[test]
    fn bounce_is_always_unit_and_upwards() {
        for i in 0..=100 {
            let hit = i as f64 / 100.0;
            let (dx, dy) = paddle_bounce(hit);
            assert!((unit_length(dx, dy) - 1.0).abs() < EPS, "hit {hit}");
            assert!(dy < 0.0, "hit {hit}");
        }
    }

    #[test]
    fn launch_stays_within_thirty_degrees_of_horizontal() {
        let min_up = (PI / 6.0).sin();
        for i in 0..100 {
            let t = i as f64 / 100.0;
            for rightward in [true, false] {
                let (dx, dy) = launch_direction(t, rightward);
                assert!((unit_length(dx, dy) - 1.0).abs() < EPS);
                assert!(-dy >= min_up - EPS);
            }
        }
    }

    #[test]
    fn initial_direction_is_up_right() {
        let (dx, dy) = initial_direction();
        assert!((dx - 0.5f64.sqrt()).abs() < EPS);
        assert!((dy + 0.5f64.sqrt()).abs() < EPS);
    }
}
