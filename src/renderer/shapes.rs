//! Shape generation for 2D primitives
//!
//! Everything here emits triangle lists in surface pixels.

use earcutr::earcut;
use glam::{DVec2, Vec2};

use super::vertex::Vertex;

/// Axis-aligned filled rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, min.y, color),
    ]
}

/// Filled polygon from a (possibly closed) ring.
///
/// Concave rings are fine. A ring earcut can't handle yields no triangles.
pub fn polygon_fill(ring: &[DVec2], color: [f32; 4]) -> Vec<Vertex> {
    let open = match ring {
        [first, .., last] if first == last => &ring[..ring.len() - 1],
        _ => ring,
    };
    if open.len() < 3 {
        return Vec::new();
    }

    let flat: Vec<f64> = open.iter().flat_map(|p| [p.x, p.y]).collect();
    let indices = match earcut(&flat, &[], 2) {
        Ok(indices) => indices,
        Err(e) => {
            log::debug!("Fill triangulation failed: {:?}", e);
            return Vec::new();
        }
    };

    indices
        .into_iter()
        .map(|i| Vertex::new(open[i].x as f32, open[i].y as f32, color))
        .collect()
}

/// Thick line through `points`, one quad per segment
pub fn polyline(points: &[DVec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let half = width * 0.5;
    let mut vertices = Vec::with_capacity((points.len() - 1) * 6);

    for pair in points.windows(2) {
        let p1 = pair[0].as_vec2();
        let p2 = pair[1].as_vec2();

        let dir = (p2 - p1).normalize_or_zero();
        if dir == Vec2::ZERO {
            continue;
        }
        // Extend each end by half the width so corners overlap
        let p1 = p1 - dir * half;
        let p2 = p2 + dir * half;
        let perp = Vec2::new(-dir.y, dir.x) * half;

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}
