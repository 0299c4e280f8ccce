//! Axis-aligned bounding boxes
//!
//! Every collider in the demos is a rectangle that never rotates: paddles,
//! the Pong ball, platformer entities. Overlap is strict, so boxes that only
//! share an edge are not colliding.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box stored as center + half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    /// Build a box from its center and full size
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
        }
    }

    /// Signed gap between the boxes on each axis (negative = overlapping)
    #[inline]
    pub fn gap(&self, other: &Aabb) -> Vec2 {
        (self.center - other.center).abs() - (self.half_extents + other.half_extents)
    }

    /// True if the boxes overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let gap = self.gap(other);
        gap.x < 0.0 && gap.y < 0.0
    }
}

/// Overlap test for two boxes given as position + full size
#[inline]
pub fn boxes_overlap(pos_a: Vec2, size_a: Vec2, pos_b: Vec2, size_b: Vec2) -> bool {
    Aabb::new(pos_a, size_a).overlaps(&Aabb::new(pos_b, size_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(1.0));
        let b = Aabb::new(Vec2::new(0.5, 0.5), Vec2::splat(1.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // Ball (0.2) against paddle (1.0): centers exactly 0.6 apart
        assert!(!boxes_overlap(
            Vec2::new(0.6, 0.0),
            Vec2::splat(0.2),
            Vec2::ZERO,
            Vec2::splat(1.0)
        ));
        assert!(boxes_overlap(
            Vec2::new(0.59, 0.0),
            Vec2::splat(0.2),
            Vec2::ZERO,
            Vec2::splat(1.0)
        ));
    }

    #[test]
    fn test_needs_overlap_on_both_axes() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(1.0));
        let b = Aabb::new(Vec2::new(0.2, 3.0), Vec2::splat(1.0));
        assert!(!a.overlaps(&b));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -10.0f32..10.0, ay in -10.0f32..10.0,
            bx in -10.0f32..10.0, by in -10.0f32..10.0,
            aw in 0.1f32..3.0, ah in 0.1f32..3.0,
            bw in 0.1f32..3.0, bh in 0.1f32..3.0,
        ) {
            let a = Aabb::new(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Aabb::new(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn box_overlaps_itself(x in -10.0f32..10.0, y in -10.0f32..10.0, s in 0.1f32..3.0) {
            let a = Aabb::new(Vec2::new(x, y), Vec2::splat(s));
            prop_assert!(a.overlaps(&a));
        }
    }
}
