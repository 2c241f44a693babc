//! Ordering of transparent objects.
//!
//! Blending is order dependent: a transparent surface only lets through what was drawn before
//! it. Opaque geometry is drawn first, then transparent objects from the farthest to the
//! nearest.

use cgmath::{MetricSpace, Point3};
use glium::draw_parameters::DepthTest;
use glium::{Blend, Depth, DrawParameters};

/// Sorts `positions` by decreasing distance from `eye`.
///
/// The sort is stable, so objects at the same distance keep their relative order.
pub fn sort_back_to_front(positions: &mut [Point3<f32>], eye: Point3<f32>) {
    positions.sort_by(|a, b| eye.distance2(*b).total_cmp(&eye.distance2(*a)));
}

/// Draw parameters for transparent geometry: standard alpha blending, depth tested against
/// the opaque scene.
pub fn blended() -> DrawParameters<'static> {
    DrawParameters {
        depth: Depth { test: DepthTest::IfLess, write: true, ..Default::default() },
        blend: Blend::alpha_blending(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn farthest_first() {
        let eye = Point3::new(0.0, 0.0, 3.0);
        let mut positions = [
            Point3::new(-1.5, 0.0, -0.48),
            Point3::new(1.5, 0.0, 0.51),
            Point3::new(0.0, 0.0, 0.7),
            Point3::new(-0.3, 0.0, -2.3),
            Point3::new(0.5, 0.0, -0.6),
        ];
        sort_back_to_front(&mut positions, eye);

        assert_eq!(positions[0], Point3::new(-0.3, 0.0, -2.3));
        assert_eq!(positions[4], Point3::new(0.0, 0.0, 0.7));
        for pair in positions.windows(2) {
            assert!(eye.distance2(pair[0]) >= eye.distance2(pair[1]));
        }
    }

    #[test]
    fn ties_keep_their_order() {
        let eye = Point3::new(0.0, 0.0, 0.0);
        let mut positions = [Point3::new(1.0, 0.0, 0.0), Point3::new(-1.0, 0.0, 0.0), Point3::new(0.0, 2.0, 0.0)];
        sort_back_to_front(&mut positions, eye);
        assert_eq!(positions, [Point3::new(0.0, 2.0, 0.0), Point3::new(1.0, 0.0, 0.0), Point3::new(-1.0, 0.0, 0.0)]);
    }
}
