//! Shape-vs-shape hit tests
//!
//! Three primitives cover every interaction in the arena:
//! circle vs circle (bullets, turret), oriented rectangle vs circle (beam
//! echoes) and ring vs circle (wave echoes). All are pure.

use glam::Vec2;

/// Check whether two circles overlap (touching counts as a hit)
#[inline]
pub fn circle_circle_hit(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    let rsum = radius_a + radius_b;
    center_a.distance_squared(center_b) <= rsum * rsum
}

/// Check whether a circle overlaps a rotated rectangle
///
/// The circle center is pulled into the rectangle's local frame with the
/// inverse of the rectangle's world transform (translate, then rotate by
/// `-rotation`), clamped onto the rectangle to get the closest point, and the
/// remaining distance is compared against the circle radius.
///
/// `rotation` is in radians. Degenerate rectangles (any half extent <= 0)
/// never hit.
pub fn oriented_rect_circle_hit(
    rect_center: Vec2,
    half_extents: Vec2,
    rotation: f32,
    circle_center: Vec2,
    circle_radius: f32,
) -> bool {
    if half_extents.x <= 0.0 || half_extents.y <= 0.0 {
        return false;
    }

    let local = (circle_center - rect_center).rotate(Vec2::from_angle(-rotation));
    let closest = local.clamp(-half_extents, half_extents);

    local.distance_squared(closest) <= circle_radius * circle_radius
}

/// Check whether a circle touches a wave echo
///
/// The ring is tested as a solid disk of `wave_radius` grown by the target's
/// radius, so the drawn stroke can be thinner than the logical hit area.
/// A ring with radius <= 0 is spent and never hits.
#[inline]
pub fn expanding_circle_circle_hit(
    wave_center: Vec2,
    wave_radius: f32,
    circle_center: Vec2,
    circle_radius: f32,
) -> bool {
    if wave_radius <= 0.0 {
        return false;
    }
    circle_circle_hit(wave_center, wave_radius, circle_center, circle_radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_circle_circle_touching_counts() {
        assert!(circle_circle_hit(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0));
        assert!(!circle_circle_hit(Vec2::ZERO, 5.0, Vec2::new(10.1, 0.0), 5.0));
    }

    #[test]
    fn test_rect_hit_axis_aligned() {
        // Length 20, thickness 6, centered at origin
        let half = Vec2::new(10.0, 3.0);
        assert!(oriented_rect_circle_hit(Vec2::ZERO, half, 0.0, Vec2::ZERO, 5.0));
        assert!(!oriented_rect_circle_hit(Vec2::ZERO, half, 0.0, Vec2::new(150.0, 150.0), 5.0));
    }

    #[test]
    fn test_rect_hit_uses_inverse_rotation() {
        // Long axis rotated to point along +y
        let half = Vec2::new(50.0, 3.0);
        let center = Vec2::new(100.0, 100.0);

        // On the rotated long axis: hit
        assert!(oriented_rect_circle_hit(center, half, FRAC_PI_2, Vec2::new(100.0, 145.0), 2.0));
        // Where the unrotated long axis would have been: miss
        assert!(!oriented_rect_circle_hit(center, half, FRAC_PI_2, Vec2::new(145.0, 100.0), 2.0));
    }

    #[test]
    fn test_rect_hit_edge_and_corner() {
        let half = Vec2::new(10.0, 3.0);
        // Just beyond the short edge, within radius
        assert!(oriented_rect_circle_hit(Vec2::ZERO, half, 0.0, Vec2::new(14.0, 0.0), 4.0));
        // Diagonal from the corner: distance sqrt(18) > 4
        assert!(!oriented_rect_circle_hit(Vec2::ZERO, half, 0.0, Vec2::new(13.0, 6.0), 4.0));
    }

    #[test]
    fn test_degenerate_rect_never_hits() {
        assert!(!oriented_rect_circle_hit(Vec2::ZERO, Vec2::new(0.0, 3.0), 0.0, Vec2::ZERO, 5.0));
        assert!(!oriented_rect_circle_hit(Vec2::ZERO, Vec2::new(-4.0, 3.0), 0.0, Vec2::ZERO, 5.0));
    }

    #[test]
    fn test_wave_hit() {
        let center = Vec2::new(100.0, 100.0);
        assert!(expanding_circle_circle_hit(center, 50.0, Vec2::new(100.0, 100.0), 5.0));
        assert!(!expanding_circle_circle_hit(center, 50.0, Vec2::new(200.0, 200.0), 5.0));
    }

    #[test]
    fn test_spent_wave_never_hits() {
        assert!(!expanding_circle_circle_hit(Vec2::ZERO, 0.0, Vec2::ZERO, 5.0));
        assert!(!expanding_circle_circle_hit(Vec2::ZERO, -3.0, Vec2::ZERO, 5.0));
    }

    proptest! {
        #[test]
        fn prop_circle_hit_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, ar in 0.0f32..50.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, br in 0.0f32..50.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(circle_circle_hit(a, ar, b, br), circle_circle_hit(b, br, a, ar));
        }

        #[test]
        fn prop_rect_center_always_hits(
            cx in -500.0f32..500.0, cy in -500.0f32..500.0,
            hx in 0.1f32..100.0, hy in 0.1f32..100.0,
            rot in -6.3f32..6.3, r in 0.0f32..20.0,
        ) {
            let c = Vec2::new(cx, cy);
            prop_assert!(oriented_rect_circle_hit(c, Vec2::new(hx, hy), rot, c, r));
        }
    }
}
