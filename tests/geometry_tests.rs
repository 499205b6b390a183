// Host-side tests for the procedural primitives and the Shape contract.

use glam::{Vec3, Vec4};
use piano_hammer::geometry::*;
use piano_hammer::EDGE_POINTS;

const RED: Vec4 = Vec4::new(0.9, 0.3, 0.3, 1.0);

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn cuboid_has_36_vertices_normals_and_colors() {
    for (w, h, d) in [(1.0, 1.0, 1.0), (1.2, 0.2, 0.2), (3.8, 0.05, 0.05), (0.0, 2.0, -1.0)] {
        let shape = Shape::build(&Cuboid::new(w, h, d), RED);
        assert_eq!(shape.vertices().len(), 36);
        assert_eq!(shape.normals().len(), 36);
        assert_eq!(shape.colors().len(), 36);
        assert!(shape.colors().iter().all(|c| *c == RED));
        assert_eq!((shape.width(), shape.height(), shape.depth()), (w, h, d));
    }
}

#[test]
fn cuboid_corners_span_half_extents() {
    let shape = Shape::build(&Cuboid::new(2.0, 4.0, 6.0), RED);
    for v in shape.vertices() {
        assert_eq!(v.x.abs(), 1.0);
        assert_eq!(v.y.abs(), 2.0);
        assert_eq!(v.z.abs(), 3.0);
    }
}

#[test]
fn cuboid_normals_are_negated_cross_products() {
    let shape = Shape::build(&Cuboid::new(2.0, 4.0, 6.0), RED);
    // First face is the back (-z) face; magnitude is kept
    assert!(approx(shape.normals()[0], Vec3::new(0.0, 0.0, -8.0)));
    assert!(approx(shape.normals()[6], Vec3::new(24.0, 0.0, 0.0)));
    // Each triangle shares one normal
    for tri in shape.normals().chunks(3) {
        assert_eq!(tri[0], tri[1]);
        assert_eq!(tri[1], tri[2]);
    }
}

#[test]
fn cuboid_normals_point_outward() {
    let shape = Shape::build(&Cuboid::new(2.0, 4.0, 6.0), RED);
    for (tri, n) in shape.vertices().chunks(3).zip(shape.normals().chunks(3)) {
        let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
        assert!(
            n[0].dot(centroid) > 0.0,
            "normal {:?} faces inward at {:?}",
            n[0],
            centroid
        );
    }
}

#[test]
fn tetrahedron_has_12_vertices_and_outward_normals() {
    let shape = Shape::build(&Tetrahedron::new(2.0, 4.0, 6.0), RED);
    assert_eq!(shape.vertices().len(), 12);
    assert_eq!(shape.normals().len(), 12);
    assert_eq!(shape.colors().len(), 12);

    // Triangles ADC and ABD between them hold all four corners
    let v = shape.vertices();
    let centre = (v[0] + v[1] + v[2] + v[4]) / 4.0;
    for (tri, n) in shape.vertices().chunks(3).zip(shape.normals().chunks(3)) {
        let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
        assert!(n[0].dot(centroid - centre) > 0.0);
    }
    assert_eq!(shape.vertices()[0], Vec3::new(0.0, 2.0, 0.0));
}

#[test]
fn cylinder_vertex_count_and_cap_normals() {
    for (diameter, height) in [(0.05, 5.0), (1.0, 1.0), (2.0, 0.5)] {
        let shape = Shape::build(&Cylinder::new(diameter, height), RED);
        assert_eq!(shape.vertices().len(), 4 * EDGE_POINTS + 6);
        assert_eq!(shape.normals().len(), 4 * EDGE_POINTS + 6);
        assert_eq!(shape.colors().len(), 4 * EDGE_POINTS + 6);

        let fan = EDGE_POINTS + 2;
        assert!(shape.normals()[..fan].iter().all(|n| *n == Vec3::Y));
        assert!(shape.normals()[fan..2 * fan].iter().all(|n| *n == Vec3::NEG_Y));
        assert_eq!(shape.width(), diameter);
        assert_eq!(shape.depth(), diameter);
        assert_eq!(shape.height(), height);
    }
}

#[test]
fn cylinder_tube_normals_are_radius_long_and_radial() {
    let cylinder = Cylinder::new(2.0, 3.0);
    let shape = Shape::build(&cylinder, RED);
    let tube = 2 * (EDGE_POINTS + 2);
    for (v, n) in shape.vertices()[tube..].iter().zip(&shape.normals()[tube..]) {
        assert!((n.length() - cylinder.radius()).abs() < 1e-5, "normal {n:?}");
        assert_eq!(n.y, 0.0);
        assert!(approx(*n, Vec3::new(v.x, 0.0, v.z)));
    }
}

#[test]
fn cylinder_fans_and_strip_are_closed() {
    let shape = Shape::build(&Cylinder::new(1.0, 2.0), RED);
    let v = shape.vertices();
    let fan = EDGE_POINTS + 2;
    // Lid and base centres
    assert_eq!(v[0], Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(v[fan], Vec3::new(0.0, -1.0, 0.0));
    // Each fan repeats its first edge point
    assert_eq!(v[fan - 1], v[1]);
    assert_eq!(v[2 * fan - 1], v[fan + 1]);
    // The strip alternates top/bottom and ends where it started
    let tube = &v[2 * fan..];
    assert_eq!(tube.len(), 2 * EDGE_POINTS + 2);
    for pair in tube.chunks(2) {
        assert_eq!(pair[0].y, 1.0);
        assert_eq!(pair[1].y, -1.0);
        assert_eq!((pair[0].x, pair[0].z), (pair[1].x, pair[1].z));
    }
    assert_eq!(tube[tube.len() - 2], tube[0]);
    assert_eq!(tube[tube.len() - 1], tube[1]);
}

#[test]
fn cylinder_edge_points_sit_on_the_circle() {
    let cylinder = Cylinder::new(3.0, 1.0);
    let edges = cylinder.edge_points();
    assert!((edges[0].0 - 1.5).abs() < 1e-6);
    assert!(edges[0].1.abs() < 1e-6);
    for (x, z) in edges {
        assert!(((x * x + z * z).sqrt() - 1.5).abs() < 1e-5);
    }
}

#[test]
fn draw_ranges_cover_every_vertex() {
    let shapes = [
        Shape::build(&Cuboid::new(1.0, 1.0, 1.0), RED),
        Shape::build(&Tetrahedron::new(1.0, 1.0, 1.0), RED),
        Shape::build(&Cylinder::new(1.0, 1.0), RED),
    ];
    for shape in &shapes {
        let mut next = 0;
        for range in shape.draw_ranges() {
            assert_eq!(range.first, next);
            next = range.end();
        }
        assert_eq!(next as usize, shape.vertex_count());
    }

    assert_eq!(shapes[0].draw_ranges(), &[DrawRange::list(0, 36)]);
    assert_eq!(shapes[1].draw_ranges(), &[DrawRange::list(0, 12)]);
    let fan = (EDGE_POINTS + 2) as u32;
    assert_eq!(
        shapes[2].draw_ranges(),
        &[
            DrawRange::fan(0, fan),
            DrawRange::fan(fan, fan),
            DrawRange::strip(2 * fan, 2 * EDGE_POINTS as u32 + 2),
        ]
    );
}

#[test]
fn fan_and_strip_expand_to_count_minus_two_triangles() {
    let fan = DrawRange::fan(10, 6).triangle_indices();
    assert_eq!(fan.len(), 4 * 3);
    assert_eq!(&fan[..6], &[10, 11, 12, 10, 12, 13]);

    let strip = DrawRange::strip(0, 5).triangle_indices();
    assert_eq!(strip, vec![0, 1, 2, 2, 1, 3, 2, 3, 4]);

    assert!(DrawRange::fan(0, 2).triangle_indices().is_empty());
    assert!(DrawRange::strip(0, 0).triangle_indices().is_empty());
    assert_eq!(DrawRange::list(3, 6).triangle_indices(), vec![3, 4, 5, 6, 7, 8]);
}

#[test]
fn cylinder_triangle_indices_stay_in_bounds() {
    let shape = Shape::build(&Cylinder::new(0.05, 5.0), RED);
    let indices = shape.triangle_indices();
    let triangles = 2 * EDGE_POINTS + 2 * EDGE_POINTS;
    assert_eq!(indices.len(), triangles * 3);
    assert!(indices.iter().all(|&i| (i as usize) < shape.vertex_count()));
}

#[test]
fn interleaved_matches_separate_streams() {
    let shape = Primitive::from(Tetrahedron::new(1.0, 2.0, 3.0)).shape(RED);
    let verts = shape.interleaved();
    assert_eq!(verts.len(), shape.vertex_count());
    for (i, v) in verts.iter().enumerate() {
        assert_eq!(v.position, shape.vertices()[i].to_array());
        assert_eq!(v.normal, shape.normals()[i].to_array());
        assert_eq!(v.color, RED.to_array());
    }
    assert_eq!(std::mem::size_of::<Vertex>(), 40);
}

#[test]
fn primitive_variant_delegates_to_its_source() {
    let direct = Shape::build(&Cylinder::new(1.0, 2.0), RED);
    let tagged = Primitive::Cylinder(Cylinder::new(1.0, 2.0)).shape(RED);
    assert_eq!(direct, tagged);
}

#[test]
fn zero_dimensions_give_degenerate_but_complete_geometry() {
    let shape = Shape::build(&Cuboid::new(0.0, 0.0, 0.0), RED);
    assert_eq!(shape.vertex_count(), 36);
    assert!(shape.normals().iter().all(|n| *n == Vec3::ZERO));

    let wire = Shape::build(&Cylinder::new(0.0, 0.0), RED);
    assert_eq!(wire.vertex_count(), 4 * EDGE_POINTS + 6);
}

#[test]
fn empty_shape_has_nothing_to_draw() {
    assert!(EMPTY_SHAPE.is_empty());
    assert!(EMPTY_SHAPE.draw_ranges().is_empty());
    assert!(EMPTY_SHAPE.triangle_indices().is_empty());
    assert_eq!(EMPTY_SHAPE, Shape::default());
}

struct LopsidedNormals {
    extra: bool,
}

impl MeshSource for LopsidedNormals {
    fn positions(&self) -> Vec<Vec3> {
        vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE, Vec3::NEG_X]
    }

    fn normals(&self, _positions: &[Vec3]) -> Vec<Vec3> {
        if self.extra {
            vec![Vec3::Y; 9]
        } else {
            vec![Vec3::Y; 2]
        }
    }

    fn extents(&self) -> Vec3 {
        Vec3::ONE
    }
}

#[test]
fn shape_keeps_one_normal_per_vertex_for_any_source() {
    let short = Shape::build(&LopsidedNormals { extra: false }, RED);
    assert_eq!(short.normals().len(), 6);
    assert_eq!(&short.normals()[..2], &[Vec3::Y, Vec3::Y]);
    assert!(short.normals()[2..].iter().all(|n| *n == Vec3::ZERO));
    assert_eq!(short.interleaved().len(), 6);

    let long = Shape::build(&LopsidedNormals { extra: true }, RED);
    assert_eq!(long.normals().len(), 6);
    assert_eq!(long.colors().len(), 6);
    assert_eq!(long.interleaved().len(), 6);
}

#[test]
fn cylinder_edges_use_the_truncated_pi() {
    let cylinder = Cylinder::new(2.0, 1.0);
    let edges = cylinder.edge_points();
    for (i, (x, z)) in edges.iter().enumerate() {
        let angle = 18.0 * i as f32 * (piano_hammer::TRUNCATED_PI / 180.0);
        assert_eq!((*x, *z), (angle.cos(), angle.sin()), "edge {i}");
    }
}
