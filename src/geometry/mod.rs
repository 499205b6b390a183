//! Procedural geometry for the hammer action.
//!
//! A [`Shape`] is built once from a [`MeshSource`] and a single color and never
//! changes afterwards. The sources in [`primitives`] cover everything the
//! assembly needs: cuboids, a tetrahedron and a cylinder.

pub mod primitives;

pub use primitives::*;

use glam::{Vec3, Vec4};

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Topology {
    TriangleList,
    TriangleFan,
    TriangleStrip,
}

/// A contiguous run of vertices drawn with one topology.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DrawRange {
    pub topology: Topology,
    pub first: u32,
    pub count: u32,
}

impl DrawRange {
    pub const fn list(first: u32, count: u32) -> Self {
        Self {
            topology: Topology::TriangleList,
            first,
            count,
        }
    }

    pub const fn fan(first: u32, count: u32) -> Self {
        Self {
            topology: Topology::TriangleFan,
            first,
            count,
        }
    }

    pub const fn strip(first: u32, count: u32) -> Self {
        Self {
            topology: Topology::TriangleStrip,
            first,
            count,
        }
    }

    pub fn end(&self) -> u32 {
        self.first + self.count
    }

    /// Expand the range into triangle-list indices.
    ///
    /// Fans pivot on their first vertex; strips flip every other triangle so
    /// the winding stays consistent with the list form.
    pub fn triangle_indices(&self) -> Vec<u32> {
        let (a, n) = (self.first, self.count);
        match self.topology {
            Topology::TriangleList => (a..a + n - n % 3).collect(),
            Topology::TriangleFan => (1..n.saturating_sub(1))
                .flat_map(|i| [a, a + i, a + i + 1])
                .collect(),
            Topology::TriangleStrip => (0..n.saturating_sub(2))
                .flat_map(|i| {
                    if i % 2 == 0 {
                        [a + i, a + i + 1, a + i + 2]
                    } else {
                        [a + i + 1, a + i, a + i + 2]
                    }
                })
                .collect(),
        }
    }
}

/// Capability shared by every primitive: produce positions and normals from
/// typed dimensions.
pub trait MeshSource {
    /// Vertex positions, in draw order.
    fn positions(&self) -> Vec<Vec3>;

    /// Per-vertex normals for `positions`. Defaults to one normal per triangle.
    /// `Shape::build` zero-pads or truncates the result to one per position.
    fn normals(&self, positions: &[Vec3]) -> Vec<Vec3> {
        face_normals(positions)
    }

    /// Nominal width, height and depth.
    fn extents(&self) -> Vec3;

    /// How the vertex list is meant to be drawn.
    fn draw_ranges(&self, vertex_count: u32) -> Vec<DrawRange> {
        vec![DrawRange::list(0, vertex_count)]
    }
}

/// Immutable generated mesh with nominal extents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    colors: Vec<Vec4>,
    draws: Vec<DrawRange>,
    width: f32,
    height: f32,
    depth: f32,
}

/// Returned by lookups that fall outside an assembly.
pub static EMPTY_SHAPE: Shape = Shape {
    vertices: Vec::new(),
    normals: Vec::new(),
    colors: Vec::new(),
    draws: Vec::new(),
    width: 0.0,
    height: 0.0,
    depth: 0.0,
};

impl Shape {
    pub fn build<S: MeshSource + ?Sized>(source: &S, color: Vec4) -> Self {
        let vertices = source.positions();
        let mut normals = source.normals(&vertices);
        if normals.len() != vertices.len() {
            log::warn!(
                "[geometry] {} normals for {} vertices, resizing to match",
                normals.len(),
                vertices.len()
            );
            normals.resize(vertices.len(), Vec3::ZERO);
        }
        let colors = vec![color; vertices.len()];
        let draws = source.draw_ranges(vertices.len() as u32);
        let extents = source.extents();
        Self {
            vertices,
            normals,
            colors,
            draws,
            width: extents.x,
            height: extents.y,
            depth: extents.z,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    pub fn draw_ranges(&self) -> &[DrawRange] {
        &self.draws
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn interleaved(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .zip(&self.normals)
            .zip(&self.colors)
            .map(|((p, n), c)| Vertex {
                position: p.to_array(),
                normal: n.to_array(),
                color: c.to_array(),
            })
            .collect()
    }

    /// All draw ranges flattened into a single triangle list.
    pub fn triangle_indices(&self) -> Vec<u32> {
        self.draws
            .iter()
            .flat_map(DrawRange::triangle_indices)
            .collect()
    }
}

/// Negated cross product of each triangle's edges, repeated for its three
/// vertices. Normals keep the magnitude of the cross product.
pub fn face_normals(positions: &[Vec3]) -> Vec<Vec3> {
    let mut normals = Vec::with_capacity(positions.len());
    for tri in positions.chunks(3) {
        match tri {
            [a, b, c] => {
                let n = -(*b - *a).cross(*c - *a);
                normals.extend([n, n, n]);
            }
            rest => normals.extend(rest.iter().map(|_| Vec3::ZERO)),
        }
    }
    normals
}
