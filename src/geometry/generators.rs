//! One generator per shape in the picker. Each generator owns its tunable
//! parameters, declares panel controls for them and builds a fresh mesh on
//! demand. Angles are edited in degrees and converted here, at the mesh
//! builder boundary.

use super::GeometryError;
use super::curves::{self, SineCurve};
use super::extrude::{ExtrudeOptions, Region, extrude_regions, flat_region_mesh};
use super::mesh::MeshData;
use super::params::Control;
use super::primitives::{self, Polyhedron};
use super::sweep;
use super::text::{FontData, text_regions};

/// A shape generator: immutable label, current parameters, controls that
/// borrow those parameters for the panel, and a pure rebuild.
pub trait ShapeGenerator {
    fn label(&self) -> &'static str;
    fn generate(&self) -> Result<MeshData, GeometryError>;
    fn controls(&mut self) -> Vec<Control<'_>>;
}

/// Every entry in the shape picker, in menu order. Kinds without a mesh
/// builder stay listed and fail fast when selected.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    Box,
    Sphere,
    Cylinder,
    Cone,
    Circle,
    Torus,
    Ring,
    Plane,
    TorusKnot,
    Icosahedron,
    Octahedron,
    Dodecahedron,
    Tetrahedron,
    Tube,
    Parametric,
    Lathe,
    Extrude,
    Shape,
    Text,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 19] = [
        ShapeKind::Box,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Circle,
        ShapeKind::Torus,
        ShapeKind::Ring,
        ShapeKind::Plane,
        ShapeKind::TorusKnot,
        ShapeKind::Icosahedron,
        ShapeKind::Octahedron,
        ShapeKind::Dodecahedron,
        ShapeKind::Tetrahedron,
        ShapeKind::Tube,
        ShapeKind::Parametric,
        ShapeKind::Lathe,
        ShapeKind::Extrude,
        ShapeKind::Shape,
        ShapeKind::Text,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Box => "Box",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::Circle => "Circle",
            ShapeKind::Torus => "Torus",
            ShapeKind::Ring => "Ring",
            ShapeKind::Plane => "Plane",
            ShapeKind::TorusKnot => "TorusKnot",
            ShapeKind::Icosahedron => "Icosahedron",
            ShapeKind::Octahedron => "Octahedron",
            ShapeKind::Dodecahedron => "Dodecahedron",
            ShapeKind::Tetrahedron => "Tetrahedron",
            ShapeKind::Tube => "Tube",
            ShapeKind::Parametric => "Parametric",
            ShapeKind::Lathe => "Lathe",
            ShapeKind::Extrude => "Extrude",
            ShapeKind::Shape => "Shape",
            ShapeKind::Text => "Text",
        }
    }
}

/// Builds the generator for a picker entry with its default parameters.
/// `font_path` only matters for text.
pub fn create_generator(kind: ShapeKind, font_path: &str) -> Box<dyn ShapeGenerator> {
    match kind {
        ShapeKind::Box => Box::new(BoxGenerator::default()),
        ShapeKind::Cylinder => Box::new(CylinderGenerator::default()),
        ShapeKind::Cone => Box::new(ConeGenerator::default()),
        ShapeKind::Circle => Box::new(CircleGenerator::default()),
        ShapeKind::Icosahedron => Box::new(PolyhedronGenerator::new(
            "Icosahedron",
            Polyhedron::Icosahedron,
        )),
        ShapeKind::Octahedron => {
            Box::new(PolyhedronGenerator::new("Octahedron", Polyhedron::Octahedron))
        }
        ShapeKind::Dodecahedron => Box::new(PolyhedronGenerator::new(
            "Dodecahedron",
            Polyhedron::Dodecahedron,
        )),
        ShapeKind::Tetrahedron => Box::new(PolyhedronGenerator::new(
            "Tetrahedron",
            Polyhedron::Tetrahedron,
        )),
        ShapeKind::Tube => Box::new(TubeGenerator::default()),
        ShapeKind::Parametric => Box::new(ParametricGenerator::default()),
        ShapeKind::Lathe => Box::new(LatheGenerator::default()),
        ShapeKind::Extrude => Box::new(ExtrudeGenerator::default()),
        ShapeKind::Shape => Box::new(ShapeGeneratorFlat::default()),
        ShapeKind::Text => Box::new(TextGenerator::new(font_path)),
        other => Box::new(UnimplementedGenerator {
            label: other.label(),
        }),
    }
}

/// Picker entries whose mesh builder does not exist yet. Selecting one
/// reports the gap instead of rendering something misleading.
struct UnimplementedGenerator {
    label: &'static str,
}

impl ShapeGenerator for UnimplementedGenerator {
    fn label(&self) -> &'static str {
        self.label
    }

    fn generate(&self) -> Result<MeshData, GeometryError> {
        Err(GeometryError::Unimplemented(self.label))
    }

    fn controls(&mut self) -> Vec<Control<'_>> {
        Vec::new()
    }
}

pub struct BoxGenerator {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub depth_segments: u32,
}

impl Default for BoxGenerator {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            width_segments: 1,
            height_segments: 1,
            depth_segments: 1,
        }
    }
}

impl ShapeGenerator for BoxGenerator {
    fn label(&self) -> &'static str {
        "Box"
    }

    fn generate(&self) -> Result<MeshData, GeometryError> {
        primitives::box_mesh(
            self.width,
            self.height,
            self.depth,
            self.width_segments,
            self.height_segments,
            self.depth_segments,
        )
    }

    fn controls(&mut self) -> Vec<Control<'_>> {
        vec![
            Control::slider("width", &mut self.width, 0.1, 10.0, 0.01),
            Control::slider("height", &mut self.height, 0.1, 10.0, 0.01),
            Control::slider("depth", &mut self.depth, 0.1, 10.0, 0.01),
            Control::int_slider("widthSegments", &mut self.width_segments, 1, 10),
            Control::int_slider("heightSegments", &mut self.height_segments, 1, 10),
            Control::int_slider("depthSegments", &mut self.depth_segments, 1, 10),
        ]
    }
}

pub struct CylinderGenerator {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
    pub open_ended: bool,
    pub theta_start_deg: f32,
    pub theta_length_deg: f32,
}

impl Default for CylinderGenerator {
    fn default() -> Self {
        Self {
            radius_top: 0.5,
            radius_bottom: 0.5,
            height: 1.0,
            radial_segments: 8,
            height_segments: 1,
            open_ended: false,
            theta_start_deg: 0.0,
            theta_length_deg: 360.0,
        }
    }
}

impl ShapeGenerator for CylinderGenerator {
    fn label(&self) -> &'static str {
        "Cylinder"
    }

    fn generate(&self) -> Result<MeshData, GeometryError> {
        primitives::cylinder_mesh(
            self.radius_top,
            self.radius_bottom,
            self.height,
            self.radial_segments,
            self.height_segments,
            self.open_ended,
            self.theta_start_deg.to_radians(),
            self.theta_length_deg.to_radians(),
        )
    }

    fn controls(&mut self) -> Vec<Control<'_>> {
        vec![
            Control::slider("radiusTop", &mut self.radius_top, 0.1, 1.0, 0.01),
            Control::slider("radiusBottom", &mut self.radius_bottom, 0.1, 1.0, 0.01),
            Control::slider("height", &mut self.height, 0.1, 2.0, 0.01),
            Control::int_slider("radialSegments", &mut self.radial_segments, 1, 64),
            Control::int_slider("heightSegments", &mut self.height_segments, 1, 64),
            Control::toggle("openEnded", &mut self.open_ended),
            Control::slider("thetaStart", &mut self.theta_start_deg, 0.0, 360.0, 0.01),
            Control::slider("thetaLength", &mut self.theta_length_deg, 0.0, 360.0, 0.1),
        ]
    }
}

pub struct ConeGenerator {
    pub radius: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
    pub open_ended: bool,
    pub theta_start_deg: f32,
    pub theta_length_deg: f32,
}

impl Default for ConeGenerator {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 1.0,
            radial_segments: 8,
            height_segments: 1,
            open_ended: false,
            theta_start_deg: 0.0,
            theta_length_deg: 360.0,
        }
    }
}

impl ShapeGenerator for ConeGenerator {
    fn label(&self) -> &'static str {
        "Cone"
    }

    fn generate(&self) -> Result<MeshData, GeometryError> {
        // A cone is the zero-top-radius cylinder frustum.
        primitives::cylinder_mesh(
            0.0,
            self.radius,
            self.height,
            self.radial_segments,
            self.height_segments,
            self.open_ended,
            self.theta_start_deg.to_radians(),
            self.theta_length_deg.to_radians(),
        )
    }

    fn controls(&mut self) -> Vec<Control<'_>> {
        vec![
            Control::slider("radius", &mut self.radius, 0.1, 1.0, 0.01),
            Control::slider("height", &mut self.height, 0.1, 2.0, 0.01),
            Control::int_slider("radialSegments", &mut self.radial_segments, 1, 64),
            Control::int_slider("heightSegments", &mut self.height_segments, 1, 64),
            Control::toggle("openEnded", &mut self.open_ended),
            Control::slider("thetaStart", &mut self.theta_start_deg, 0.0, 360.0, 0.01),
            Control::slider("thetaLength", &mut self.theta_length_deg, 0.0, 360.0, 0.1),
        ]
    }
}

pub struct CircleGenerator {
    pub radius: f32,
    pub segments: u32,
    pub theta_start_deg: f32,
    pub theta_length_deg: f32,
}

impl Default for CircleGenerator {
    fn default() -> Self {
        Self {
            radius: 1.0,
            segments: 32,
            theta_start_deg: 0.0,
            theta_length_deg: 360.0,
        }
    }
}

impl ShapeGenerator for CircleGenerator {
    fn label(&self) -> &'static str {
        "Circle"
    }

    fn generate(&self) -> Result<MeshData, GeometryError> {
        primitives::circle_mesh(
            self.radius,
            self.segments,
            self.theta_start_deg.to_radians(),
            self.theta_length_deg.to_radians(),
        )
    }

    fn controls(&mut self) -> Vec<Control<'_>> {
        vec![
            Control::slider("radius", &mut self.radius, 0.1, 1.0, 0.01),
            Control::int_slider("segments", &mut self.segments, 1, 64),
            Control::slider("thetaStart", &mut self.theta_start_deg, 0.0, 360.0, 0.01),
            Control::slider("thetaLength", &mut self.theta_length_deg, 0.0, 360.0, 0.1),
        ]
    }
}

pub struct PolyhedronGenerator {
    label: &'static str,
    kind: Polyhedron,
    pub radius: f32,
    pub detail: u32,
}

impl PolyhedronGenerator {
    pub fn new(label: &'static str, kind: Polyhedron) -> Self {
        Self {
            label,
            kind,
            radius: 0.5,
            detail: 0,
        }
    }
}

impl ShapeGenerator for PolyhedronGenerator {
    fn label(&self) -> &'static str {
        self.label
    }

    fn generate(&self) -> Result<MeshData, GeometryError> {
        let mesh = primitives::polyhedron_mesh(self.kind, self.radius, self.detail);
        mesh.ensure_finite("polyhedron")?;
        Ok(mesh)
    }

    fn controls(&mut self) -> Vec<Control<'_>> {
        Vec::new()
    }
}

pub struct TubeGenerator {
    pub segments: u32,
    pub radius: f32,
    pub radial_segments: u32,
    pub closed: bool,
}

impl Default for TubeGenerator {
    fn default() -> Self {
        Self {
            segments: 20,
            radius: 0.15,
            radial_segments: 8,
            closed: false,
        }
    }
}

impl ShapeGenerator for TubeGenerator {
    fn label(&self) -> &'static str {
        "Tube"
    }

    fn generate(&self) -> Result<MeshData, GeometryError> {
        let curve = SineCurve { scale: 0.7 };
        sweep::tube_mesh(
            |t| curve.point(t),
            self.segments,
            self.radius,
            self.radial_segments,
            self.closed,
        )
    }

    fn controls(&mut self) -> Vec<Control<'_>> {
        Vec::new()
    }
}

pub struct ParametricGenerator {
    pub slices: u32,
    pub stacks: u32,
}

impl Default for ParametricGenerator {
    fn default() -> Self {
        Self {
            slices: 25,
            stacks: 25,
        }
    }
}

impl ShapeGenerator for ParametricGenerator {
    fn label(&self) -> &'static str {
        "Parametric"
    }

    fn generate(&self) -> Result<MeshData, GeometryError> {
        let mut mesh = sweep::parametric_mesh(curves::klein, self.slices, self.stacks)?;
        mesh.center();
        mesh.scale(0.1, 0.1, 0.1);
        Ok(mesh)
    }

    fn controls(&mut self) -> Vec<Control<'_>> {
        Vec::new()
    }
}

pub struct LatheGenerator {
    pub segments: u32,
    pub phi_start_deg: f32,
    pub phi_length_deg: f32,
}

impl Default for LatheGenerator {
    fn default() -> Self {
        Self {
            segments: 12,
            phi_start_deg: 0.0,
            phi_length_deg: 360.0,
        }
    }
}

impl ShapeGenerator for LatheGenerator {
    fn label(&self) -> &'static str {
        "Lathe"
    }

    fn generate(&self) -> Result<MeshData, GeometryError> {
        let profile = curves::lathe_profile();
        let mut mesh = sweep::lathe_mesh(
            &profile,
            self.segments,
            self.phi_start_deg.to_radians(),
            self.phi_length_deg.to_radians(),
        )?;
        mesh.center();
        mesh.scale(0.04, 0.04, 0.04);
        Ok(mesh)
    }

    fn controls(&mut self) -> Vec<Control<'_>> {
        vec![
            Control::int_slider("segments", &mut self.segments, 1, 30),
            Control::slider("phiStart", &mut self.phi_start_deg, 0.0, 360.0, 0.0),
            Control::slider("phiLength", &mut self.phi_length_deg, 0.0, 360.0, 0.0),
        ]
    }
}

pub struct ExtrudeGenerator {
    pub steps: u32,
    pub depth: f32,
    pub bevel_enabled: bool,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_offset: f32,
    pub curve_segments: u32,
    pub bevel_segments: u32,
}

impl Default for ExtrudeGenerator {
    fn default() -> Self {
        Self {
            steps: 2,
            depth: 0.5,
            bevel_enabled: true,
            bevel_thickness: 0.2,
            bevel_size: 0.1,
            bevel_offset: 0.0,
            curve_segments: 12,
            bevel_segments: 1,
        }
    }
}

impl ShapeGenerator for ExtrudeGenerator {
    fn label(&self) -> &'static str {
        "Extrude"
    }

    fn generate(&self) -> Result<MeshData, GeometryError> {
        let outline = curves::heart_outline(self.curve_segments);
        let region = Region::normalized(outline, Vec::new());
        let mut mesh = extrude_regions(
            &[region],
            &ExtrudeOptions {
                steps: self.steps,
                depth: self.depth,
                bevel_enabled: self.bevel_enabled,
                bevel_thickness: self.bevel_thickness,
                bevel_size: self.bevel_size,
                bevel_offset: self.bevel_offset,
                bevel_segments: self.bevel_segments,
            },
        )?;
        mesh.center();
        // The heart contour is authored y-down; the mirror flip rights it.
        mesh.scale(0.1, -0.1, 1.0);
        Ok(mesh)
    }

    fn controls(&mut self) -> Vec<Control<'_>> {
        vec![
            Control::int_slider("steps", &mut self.steps, 1, 10),
            Control::slider("depth", &mut self.depth, 0.0, 2.0, 0.01),
            Control::toggle("bevelEnabled", &mut self.bevel_enabled),
            Control::slider("bevelThickness", &mut self.bevel_thickness, 0.0, 1.0, 0.01),
            Control::slider("bevelSize", &mut self.bevel_size, 0.0, 1.0, 0.01),
            Control::slider("bevelOffset", &mut self.bevel_offset, -4.0, 5.0, 0.01),
            Control::int_slider("curveSegments", &mut self.curve_segments, 1, 32),
            Control::int_slider("bevelSegments", &mut self.bevel_segments, 1, 32),
        ]
    }
}

/// Flat triangulated rectangle plate.
pub struct ShapeGeneratorFlat {
    pub segments: u32,
}

impl Default for ShapeGeneratorFlat {
    fn default() -> Self {
        Self { segments: 12 }
    }
}

impl ShapeGenerator for ShapeGeneratorFlat {
    fn label(&self) -> &'static str {
        "Shape"
    }

    fn generate(&self) -> Result<MeshData, GeometryError> {
        let outline = curves::rect_outline(self.segments);
        let region = Region::normalized(outline, Vec::new());
        let mut mesh = flat_region_mesh(&[region])?;
        mesh.center();
        Ok(mesh)
    }

    fn controls(&mut self) -> Vec<Control<'_>> {
        vec![Control::int_slider("segments", &mut self.segments, 1, 100)]
    }
}

pub struct TextGenerator {
    pub text: String,
    pub font_path: String,
    pub size: f32,
    pub height: f32,
    pub curve_segments: u32,
    pub bevel_enabled: bool,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_offset: f32,
    pub bevel_segments: u32,
}

impl TextGenerator {
    pub fn new(font_path: &str) -> Self {
        Self {
            text: "Hello".to_string(),
            font_path: font_path.to_string(),
            size: 0.5,
            height: 0.1,
            curve_segments: 2,
            bevel_enabled: true,
            bevel_thickness: 0.1,
            bevel_size: 0.01,
            bevel_offset: 0.0,
            bevel_segments: 3,
        }
    }
}

impl ShapeGenerator for TextGenerator {
    fn label(&self) -> &'static str {
        "Text"
    }

    fn generate(&self) -> Result<MeshData, GeometryError> {
        let font = FontData::load(&self.font_path)?;
        let regions = text_regions(&font, &self.text, self.size, self.curve_segments)?;
        let mut mesh = extrude_regions(
            &regions,
            &ExtrudeOptions {
                steps: 1,
                depth: self.height,
                bevel_enabled: self.bevel_enabled,
                bevel_thickness: self.bevel_thickness,
                bevel_size: self.bevel_size,
                bevel_offset: self.bevel_offset,
                bevel_segments: self.bevel_segments,
            },
        )?;
        mesh.center();
        Ok(mesh)
    }

    fn controls(&mut self) -> Vec<Control<'_>> {
        vec![
            Control::text("text", &mut self.text),
            Control::slider("size", &mut self.size, 0.1, 1.0, 0.01),
            Control::slider("height", &mut self.height, 0.1, 1.0, 0.01),
            Control::int_slider("curveSegments", &mut self.curve_segments, 1, 32),
            Control::toggle("bevelEnabled", &mut self.bevel_enabled),
            Control::slider("bevelThickness", &mut self.bevel_thickness, 0.01, 1.0, 0.001),
            Control::slider("bevelSize", &mut self.bevel_size, 0.01, 1.0, 0.001),
            Control::slider("bevelOffset", &mut self.bevel_offset, -1.0, 1.0, 0.001),
            Control::int_slider("bevelSegments", &mut self.bevel_segments, 1, 32),
        ]
    }
}
