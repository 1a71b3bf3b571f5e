use glam::Vec3;

use shapeview::geometry::curves::{HEART_START, heart_outline, lathe_profile};
use shapeview::geometry::extrude::{ExtrudeOptions, Region, extrude_regions, signed_area};
use shapeview::geometry::generators::{
    BoxGenerator, ConeGenerator, CylinderGenerator, LatheGenerator, ParametricGenerator,
    ShapeGeneratorFlat, TextGenerator, TubeGenerator,
};
use shapeview::geometry::primitives::{Polyhedron, polyhedron_mesh};
use shapeview::geometry::sweep::tube_mesh;
use shapeview::geometry::text::{FontData, classify_contours};
use shapeview::geometry::{GeometryError, MeshData, ShapeGenerator, ShapeKind, create_generator};

const EPS: f32 = 1.0e-4;

fn unique_positions(mesh: &MeshData) -> Vec<Vec3> {
    let mut unique: Vec<Vec3> = Vec::new();
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i);
        if !unique.iter().any(|q| q.distance(p) < EPS) {
            unique.push(p);
        }
    }
    unique
}

fn surface_area(mesh: &MeshData) -> f32 {
    mesh.indices
        .chunks_exact(3)
        .map(|tri| {
            let a = mesh.position(tri[0] as usize);
            let b = mesh.position(tri[1] as usize);
            let c = mesh.position(tri[2] as usize);
            (b - a).cross(c - a).length() / 2.0
        })
        .sum()
}

#[test]
fn box_has_eight_corners_and_twelve_triangles() {
    let mesh = BoxGenerator::default().generate().unwrap();
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(unique_positions(&mesh).len(), 8);
}

#[test]
fn box_extent_follows_width() {
    let generator = BoxGenerator {
        width: 2.0,
        ..Default::default()
    };
    let mesh = generator.generate().unwrap();
    let (min, max) = mesh.bounds();
    assert!((max.x - 1.0).abs() < EPS);
    assert!((min.x + 1.0).abs() < EPS);
    assert!((max.y - 0.5).abs() < EPS);
}

#[test]
fn generation_is_deterministic() {
    let generator = CylinderGenerator::default();
    let a = generator.generate().unwrap();
    let b = generator.generate().unwrap();
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.indices, b.indices);
}

#[test]
fn cylinder_full_turn_closes_the_seam() {
    let generator = CylinderGenerator::default();
    let mesh = generator.generate().unwrap();
    // First and last torso column sample theta 0 and 2pi.
    let stride = generator.radial_segments as usize + 1;
    for row in 0..=generator.height_segments as usize {
        let first = mesh.position(row * stride);
        let last = mesh.position(row * stride + stride - 1);
        assert!(first.distance(last) < EPS);
    }
}

#[test]
fn cone_apex_sits_at_half_height() {
    let mesh = ConeGenerator::default().generate().unwrap();
    let (min, max) = mesh.bounds();
    assert!((max.y - 0.5).abs() < EPS);
    assert!((min.y + 0.5).abs() < EPS);
}

#[test]
fn circle_is_a_fan_with_z_normals() {
    let mesh = create_generator(ShapeKind::Circle, "").generate().unwrap();
    assert_eq!(mesh.vertex_count(), 34);
    assert_eq!(mesh.triangle_count(), 32);
    for n in mesh.normals.chunks_exact(3) {
        assert!((n[2] - 1.0).abs() < EPS);
    }
}

#[test]
fn polyhedron_vertices_sit_on_the_sphere() {
    for kind in [
        ShapeKind::Icosahedron,
        ShapeKind::Octahedron,
        ShapeKind::Dodecahedron,
        ShapeKind::Tetrahedron,
    ] {
        let mesh = create_generator(kind, "").generate().unwrap();
        for i in 0..mesh.vertex_count() {
            assert!((mesh.position(i).length() - 0.5).abs() < EPS);
        }
    }
}

#[test]
fn polyhedron_subdivision_multiplies_faces() {
    let base = polyhedron_mesh(Polyhedron::Icosahedron, 1.0, 0);
    assert_eq!(base.triangle_count(), 20);

    let subdivided = polyhedron_mesh(Polyhedron::Icosahedron, 1.0, 1);
    assert_eq!(subdivided.triangle_count(), 80);
}

#[test]
fn tube_grid_matches_segment_counts() {
    let generator = TubeGenerator::default();
    let mesh = generator.generate().unwrap();
    let expected =
        (generator.segments as usize + 1) * (generator.radial_segments as usize + 1);
    assert_eq!(mesh.vertex_count(), expected);
}

#[test]
fn tube_over_degenerate_curve_fails() {
    let result = tube_mesh(|_| Vec3::splat(f32::NAN), 10, 0.1, 8, false);
    assert!(matches!(result, Err(GeometryError::NonFinite { .. })));
}

#[test]
fn lathe_full_revolution_closes_the_seam() {
    let generator = LatheGenerator::default();
    let mesh = generator.generate().unwrap();
    let stride = lathe_profile().len();
    let last_ring = generator.segments as usize * stride;
    for j in 0..stride {
        let first = mesh.position(j);
        let last = mesh.position(last_ring + j);
        assert!(first.distance(last) < EPS);
    }
}

#[test]
fn parametric_surface_is_centered() {
    let mesh = ParametricGenerator::default().generate().unwrap();
    let mut mean = Vec3::ZERO;
    for i in 0..mesh.vertex_count() {
        mean += mesh.position(i);
    }
    mean /= mesh.vertex_count() as f32;
    assert!(mean.length() < 1.0e-3);
}

#[test]
fn zero_segment_counts_are_rejected() {
    let generator = BoxGenerator {
        width_segments: 0,
        ..Default::default()
    };
    assert!(matches!(
        generator.generate(),
        Err(GeometryError::InvalidSegmentCount { .. })
    ));

    let generator = CylinderGenerator {
        radial_segments: 0,
        ..Default::default()
    };
    assert!(matches!(
        generator.generate(),
        Err(GeometryError::InvalidSegmentCount { .. })
    ));
}

#[test]
fn placeholder_shapes_fail_fast() {
    for kind in [
        ShapeKind::Sphere,
        ShapeKind::Torus,
        ShapeKind::Ring,
        ShapeKind::Plane,
        ShapeKind::TorusKnot,
    ] {
        let mut generator = create_generator(kind, "");
        assert!(matches!(
            generator.generate(),
            Err(GeometryError::Unimplemented(_))
        ));
        assert!(generator.controls().is_empty());
    }
}

#[test]
fn box_wireframe_has_twelve_edges() {
    let mesh = BoxGenerator::default().generate().unwrap();
    let lines = mesh.edge_lines(1.0);
    // Two endpoints of three floats per edge.
    assert_eq!(lines.len(), 12 * 6);
}

#[test]
fn heart_outline_is_closed_without_duplicate() {
    let outline = heart_outline(12);
    assert_eq!(outline.len(), 6 * 12);
    assert!((outline[0].x - HEART_START[0]).abs() < EPS);
    assert!((outline[0].y - HEART_START[1]).abs() < EPS);
    let last = outline[outline.len() - 1];
    assert!(last.distance(outline[0]) > EPS);
}

#[test]
fn extrude_default_heart_generates() {
    use shapeview::geometry::generators::ExtrudeGenerator;
    let mesh = ExtrudeGenerator::default().generate().unwrap();
    assert!(mesh.triangle_count() > 0);
    assert!(mesh.positions.iter().all(|v| v.is_finite()));
}

#[test]
fn square_prism_has_expected_face_count() {
    let square = vec![
        glam::Vec2::new(0.0, 0.0),
        glam::Vec2::new(1.0, 0.0),
        glam::Vec2::new(1.0, 1.0),
        glam::Vec2::new(0.0, 1.0),
    ];
    let region = Region::normalized(square, Vec::new());
    let mesh = extrude_regions(
        &[region],
        &ExtrudeOptions {
            steps: 1,
            depth: 1.0,
            bevel_enabled: false,
            bevel_thickness: 0.0,
            bevel_size: 0.0,
            bevel_offset: 0.0,
            bevel_segments: 0,
        },
    )
    .unwrap();
    // Four walls of two triangles plus two triangles per cap.
    assert_eq!(mesh.triangle_count(), 12);
    assert!((surface_area(&mesh) - 6.0).abs() < 1.0e-3);
}

#[test]
fn rect_plate_area_matches_dimensions() {
    let mesh = ShapeGeneratorFlat::default().generate().unwrap();
    assert!((surface_area(&mesh) - 1.2 * 0.8).abs() < 1.0e-3);
}

#[test]
fn contours_split_into_outlines_and_holes() {
    let outer = vec![
        glam::Vec2::new(0.0, 0.0),
        glam::Vec2::new(4.0, 0.0),
        glam::Vec2::new(4.0, 4.0),
        glam::Vec2::new(0.0, 4.0),
    ];
    let inner = vec![
        glam::Vec2::new(1.0, 1.0),
        glam::Vec2::new(3.0, 1.0),
        glam::Vec2::new(3.0, 3.0),
        glam::Vec2::new(1.0, 3.0),
    ];
    let regions = classify_contours(vec![outer, inner]);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].holes.len(), 1);
    assert!(signed_area(&regions[0].outline) > 0.0);
    assert!(signed_area(&regions[0].holes[0]) < 0.0);
}

#[test]
fn missing_font_reports_load_error() {
    assert!(matches!(
        FontData::load("no/such/font.ttf"),
        Err(GeometryError::FontLoad { .. })
    ));

    let mut generator = TextGenerator::new("no/such/font.ttf");
    assert!(matches!(
        generator.generate(),
        Err(GeometryError::FontLoad { .. })
    ));
    // Controls stay available so the path can be corrected.
    assert!(!generator.controls().is_empty());
}
