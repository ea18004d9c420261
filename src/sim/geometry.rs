//! Ring geometry helpers
//!
//! A ring is a slice of points where the last point repeats the first.
//! Screen coordinates: +x right, +y down.

use glam::DVec2;

/// Area-weighted centroid of a ring.
///
/// Coordinates are taken relative to the first vertex so large screen
/// coordinates don't eat into precision. Needs at least 3 distinct vertices;
/// a ring with zero area yields non-finite coordinates.
pub fn centroid(ring: &[DVec2]) -> DVec2 {
    let Some(&off) = ring.first() else {
        return DVec2::ZERO;
    };

    let mut twice_area = 0.0;
    let mut acc = DVec2::ZERO;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let p1 = ring[i] - off;
        let p2 = ring[j] - off;
        let f = p1.x * p2.y - p2.x * p1.y;
        twice_area += f;
        acc += (p1 + p2) * f;
        j = i;
    }

    acc / (twice_area * 3.0) + off
}

/// Absolute shoelace area of a closed ring.
///
/// Rings with fewer than 4 points (3 vertices + closing repeat) have no area.
pub fn area(ring: &[DVec2]) -> f64 {
    if ring.len() < 4 {
        return 0.0;
    }

    let n = ring.len();
    let total: f64 = (0..n)
        .map(|i| {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();

    (total * 0.5).abs()
}

/// Rotate `point` about `pivot` by `angle_degrees`.
///
/// With +y pointing down, a positive angle turns counter-clockwise on screen.
#[inline]
pub fn rotate(pivot: DVec2, point: DVec2, angle_degrees: f64) -> DVec2 {
    if angle_degrees == 0.0 {
        return point;
    }

    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let d = point - pivot;
    DVec2::new(
        cos * d.x + sin * d.y + pivot.x,
        cos * d.y - sin * d.x + pivot.y,
    )
}

/// Smallest and largest x over the ring, or `None` for an empty ring
pub fn horizontal_extent(ring: &[DVec2]) -> Option<(f64, f64)> {
    if ring.is_empty() {
        return None;
    }
    Some(ring.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.x), hi.max(p.x))
    }))
}

/// Append the first point if the ring isn't already closed
pub fn close_ring(ring: &mut Vec<DVec2>) {
    if let (Some(&first), Some(&last)) = (ring.first(), ring.last()) {
        if first != last || ring.len() == 1 {
            ring.push(first);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(x0, y0),
            DVec2::new(x1, y0),
            DVec2::new(x1, y1),
            DVec2::new(x0, y1),
            DVec2::new(x0, y0),
        ]
    }

    #[test]
    fn test_area_unit_square() {
        assert_eq!(area(&rect(0.0, 0.0, 1.0, 1.0)), 1.0);
    }

    #[test]
    fn test_area_short_ring_is_zero() {
        let tri_open = [DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0)];
        assert_eq!(area(&tri_open), 0.0);
        assert_eq!(area(&[]), 0.0);
    }

    #[test]
    fn test_area_ignores_winding() {
        let mut ring = rect(100.0, 250.0, 300.0, 350.0);
        assert_eq!(area(&ring), 20000.0);
        ring.reverse();
        assert_eq!(area(&ring), 20000.0);
    }

    #[test]
    fn test_centroid_rectangle() {
        let c = centroid(&rect(100.0, 250.0, 300.0, 350.0));
        assert!((c - DVec2::new(200.0, 300.0)).length() < 1e-9);
    }

    #[test]
    fn test_centroid_triangle() {
        let ring = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(6.0, 0.0),
            DVec2::new(0.0, 3.0),
            DVec2::new(0.0, 0.0),
        ];
        let c = centroid(&ring);
        assert!((c - DVec2::new(2.0, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let p = DVec2::new(0.1, 0.7);
        assert_eq!(rotate(DVec2::new(0.3, -5.0), p, 0.0), p);
    }

    #[test]
    fn test_rotate_quarter_turn_screen_convention() {
        // +90 degrees takes a point right of the pivot to above it (smaller y)
        let p = rotate(DVec2::ZERO, DVec2::new(1.0, 0.0), 90.0);
        assert!((p - DVec2::new(0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_horizontal_extent() {
        assert_eq!(horizontal_extent(&[]), None);
        assert_eq!(
            horizontal_extent(&rect(-50.0, 0.0, 20.0, 5.0)),
            Some((-50.0, 20.0))
        );
    }

    #[test]
    fn test_close_ring() {
        let mut ring = vec![DVec2::ZERO, DVec2::X, DVec2::Y];
        close_ring(&mut ring);
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], ring[3]);

        // Already closed: unchanged
        close_ring(&mut ring);
        assert_eq!(ring.len(), 4);
    }

    proptest! {
        #[test]
        fn prop_rotate_full_turn_returns(
            px in -500.0f64..500.0, py in -500.0f64..500.0,
            x in -500.0f64..500.0, y in -500.0f64..500.0,
        ) {
            let pivot = DVec2::new(px, py);
            let start = DVec2::new(x, y);
            let mut p = start;
            for _ in 0..360 {
                p = rotate(pivot, p, 1.0);
            }
            prop_assert!((p - start).length() < 1e-9 * (1.0 + (start - pivot).length()));
        }

        #[test]
        fn prop_rotate_preserves_distance(
            x in -500.0f64..500.0, y in -500.0f64..500.0, angle in -360.0f64..360.0,
        ) {
            let pivot = DVec2::new(12.0, -7.0);
            let p = DVec2::new(x, y);
            let q = rotate(pivot, p, angle);
            prop_assert!(((q - pivot).length() - (p - pivot).length()).abs() < 1e-9);
        }

        #[test]
        fn prop_rect_centroid_independent_of_start_and_winding(
            x0 in -1000.0f64..1000.0, y0 in -1000.0f64..1000.0,
            w in 1.0f64..500.0, h in 1.0f64..500.0, shift in 0usize..4, reverse: bool,
        ) {
            let mut verts = rect(x0, y0, x0 + w, y0 + h);
            verts.pop();
            verts.rotate_left(shift);
            if reverse {
                verts.reverse();
            }
            close_ring(&mut verts);

            let c = centroid(&verts);
            let expected = DVec2::new(x0 + w / 2.0, y0 + h / 2.0);
            prop_assert!((c - expected).length() < 1e-6);
            prop_assert!((area(&verts) - w * h).abs() < 1e-6 * w * h);
        }
    }
}
