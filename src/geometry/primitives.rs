//! Primitive mesh sources.
//!
//! Every primitive is centred on the origin. Triangle order and corner naming
//! are fixed so that normals and draw ranges are reproducible.

use super::{DrawRange, MeshSource, Shape};
use crate::constants::{EDGE_POINTS, TRUNCATED_PI};
use glam::{Vec3, Vec4};

/// Axis-aligned box, 12 triangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

/// Four-faced pyramid with its apex on +Y and a triangular base in the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tetrahedron {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

/// Upright cylinder: lid fan, base fan and a tube strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    pub diameter: f32,
    pub height: f32,
}

/// Tagged variant over the primitive kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Cuboid(Cuboid),
    Tetrahedron(Tetrahedron),
    Cylinder(Cylinder),
}

impl Cuboid {
    pub const VERTEX_COUNT: usize = 36;

    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

impl Tetrahedron {
    pub const VERTEX_COUNT: usize = 12;

    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

impl Cylinder {
    pub const VERTEX_COUNT: usize = 4 * EDGE_POINTS + 6;
    pub const FAN_LEN: usize = EDGE_POINTS + 2;
    pub const TUBE_LEN: usize = 2 * EDGE_POINTS + 2;

    pub const fn new(diameter: f32, height: f32) -> Self {
        Self { diameter, height }
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// Points on the circumference as (x, z) pairs, 360/EDGE_POINTS degrees apart.
    pub fn edge_points(&self) -> [(f32, f32); EDGE_POINTS] {
        let step = (360 / EDGE_POINTS) as f32;
        let r = self.radius();
        std::array::from_fn(|i| {
            let angle = step * i as f32 * (TRUNCATED_PI / 180.0);
            (r * angle.cos(), r * angle.sin())
        })
    }
}

impl MeshSource for Cuboid {
    fn positions(&self) -> Vec<Vec3> {
        let (x, y, z) = (self.width / 2.0, self.height / 2.0, self.depth / 2.0);
        let a = Vec3::new(-x, y, -z);
        let b = Vec3::new(-x, -y, -z);
        let c = Vec3::new(x, -y, -z);
        let d = Vec3::new(x, y, -z);
        let e = Vec3::new(x, -y, z);
        let f = Vec3::new(x, y, z);
        let g = Vec3::new(-x, -y, z);
        let h = Vec3::new(-x, y, z);
        vec![
            a, b, c, c, d, a, // back
            c, e, d, e, f, d, // right
            e, g, f, g, h, f, // front
            g, b, h, b, a, h, // left
            g, e, c, c, b, g, // bottom
            a, d, f, f, h, a, // top
        ]
    }

    fn extents(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }
}

impl MeshSource for Tetrahedron {
    fn positions(&self) -> Vec<Vec3> {
        let a = Vec3::new(0.0, self.height / 2.0, 0.0);
        let b = Vec3::new(0.0, 0.0, -self.depth / 2.0);
        let c = Vec3::new(-self.width / 2.0, 0.0, self.depth / 2.0);
        let d = Vec3::new(self.width / 2.0, 0.0, self.depth / 2.0);
        vec![a, d, c, a, b, d, d, b, c, a, c, b]
    }

    fn extents(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }
}

impl MeshSource for Cylinder {
    fn positions(&self) -> Vec<Vec3> {
        let edges = self.edge_points();
        let top = self.height / 2.0;
        let bottom = -top;
        let mut out = Vec::with_capacity(Self::VERTEX_COUNT);

        for y in [top, bottom] {
            out.push(Vec3::new(0.0, y, 0.0));
            out.extend(edges.iter().map(|&(x, z)| Vec3::new(x, y, z)));
            let (x, z) = edges[0];
            out.push(Vec3::new(x, y, z));
        }

        for &(x, z) in edges.iter().chain(std::iter::once(&edges[0])) {
            out.push(Vec3::new(x, top, z));
            out.push(Vec3::new(x, bottom, z));
        }
        out
    }

    /// Lid and base face straight up and down; the tube uses the radial vector
    /// from the axis, which is radius-long rather than unit-length.
    fn normals(&self, positions: &[Vec3]) -> Vec<Vec3> {
        let fan = Self::FAN_LEN.min(positions.len());
        let base = (2 * Self::FAN_LEN).min(positions.len());
        let mut normals = Vec::with_capacity(positions.len());
        normals.extend(std::iter::repeat(Vec3::Y).take(fan));
        normals.extend(std::iter::repeat(Vec3::NEG_Y).take(base - fan));
        normals.extend(positions[base..].iter().map(|p| Vec3::new(p.x, 0.0, p.z)));
        normals
    }

    fn extents(&self) -> Vec3 {
        Vec3::new(self.diameter, self.height, self.diameter)
    }

    fn draw_ranges(&self, _vertex_count: u32) -> Vec<DrawRange> {
        let fan = Self::FAN_LEN as u32;
        vec![
            DrawRange::fan(0, fan),
            DrawRange::fan(fan, fan),
            DrawRange::strip(2 * fan, Self::TUBE_LEN as u32),
        ]
    }
}

impl MeshSource for Primitive {
    fn positions(&self) -> Vec<Vec3> {
        match self {
            Primitive::Cuboid(p) => p.positions(),
            Primitive::Tetrahedron(p) => p.positions(),
            Primitive::Cylinder(p) => p.positions(),
        }
    }

    fn normals(&self, positions: &[Vec3]) -> Vec<Vec3> {
        match self {
            Primitive::Cuboid(p) => p.normals(positions),
            Primitive::Tetrahedron(p) => p.normals(positions),
            Primitive::Cylinder(p) => p.normals(positions),
        }
    }

    fn extents(&self) -> Vec3 {
        match self {
            Primitive::Cuboid(p) => p.extents(),
            Primitive::Tetrahedron(p) => p.extents(),
            Primitive::Cylinder(p) => p.extents(),
        }
    }

    fn draw_ranges(&self, vertex_count: u32) -> Vec<DrawRange> {
        match self {
            Primitive::Cuboid(p) => p.draw_ranges(vertex_count),
            Primitive::Tetrahedron(p) => p.draw_ranges(vertex_count),
            Primitive::Cylinder(p) => p.draw_ranges(vertex_count),
        }
    }
}

impl Primitive {
    pub fn shape(&self, color: Vec4) -> Shape {
        Shape::build(self, color)
    }
}

impl From<Cuboid> for Primitive {
    fn from(value: Cuboid) -> Self {
        Primitive::Cuboid(value)
    }
}

impl From<Tetrahedron> for Primitive {
    fn from(value: Tetrahedron) -> Self {
        Primitive::Tetrahedron(value)
    }
}

impl From<Cylinder> for Primitive {
    fn from(value: Cylinder) -> Self {
        Primitive::Cylinder(value)
    }
}
