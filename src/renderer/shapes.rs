//! Unit meshes for 2D primitives
//!
//! Both meshes span -0.5..0.5 so an instance's `size` is the object's full
//! width and height.

use std::f32::consts::PI;

use super::vertex::Vertex;

/// Indexed triangle mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Two triangles covering the unit square
pub fn unit_quad() -> Mesh {
    Mesh {
        vertices: vec![
            Vertex::new(-0.5, -0.5),
            Vertex::new(0.5, -0.5),
            Vertex::new(0.5, 0.5),
            Vertex::new(-0.5, 0.5),
        ],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

/// Triangle fan around the center of a unit-diameter circle
///
/// Vertex 0 is the center, vertices `1..=segments` lie on the rim. The last
/// triangle closes back onto vertex 1.
pub fn unit_circle(segments: u32) -> Mesh {
    let segments = segments.clamp(3, 1024) as u16;
    let radius = 0.5;

    let mut vertices = Vec::with_capacity(segments as usize + 1);
    vertices.push(Vertex::new(0.0, 0.0));
    for i in 0..segments {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        vertices.push(Vertex::new(radius * theta.cos(), radius * theta.sin()));
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        let next = if i + 1 == segments { 1 } else { i + 2 };
        indices.extend_from_slice(&[0, i + 1, next]);
    }

    Mesh { vertices, indices }
}
