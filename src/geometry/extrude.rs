//! Prism extrusion of 2D regions with optional bevelled rims, plus flat
//! triangulated plates for un-extruded shapes. Triangulation of the caps
//! goes through earcutr.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::GeometryError;
use super::mesh::MeshData;

/// One closed 2D area: an outer contour plus zero or more holes.
/// `normalized` fixes the winding so the outline runs counter-clockwise
/// and every hole clockwise.
pub struct Region {
    pub outline: Vec<Vec2>,
    pub holes: Vec<Vec<Vec2>>,
}

impl Region {
    pub fn normalized(mut outline: Vec<Vec2>, mut holes: Vec<Vec<Vec2>>) -> Self {
        if signed_area(&outline) < 0.0 {
            outline.reverse();
        }
        for hole in &mut holes {
            if signed_area(hole) > 0.0 {
                hole.reverse();
            }
        }
        Self { outline, holes }
    }
}

#[derive(Clone, Copy)]
pub struct ExtrudeOptions {
    pub steps: u32,
    pub depth: f32,
    pub bevel_enabled: bool,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_offset: f32,
    pub bevel_segments: u32,
}

/// Twice the enclosed area, positive for counter-clockwise contours.
pub fn signed_area(contour: &[Vec2]) -> f32 {
    let mut sum = 0.0;
    for i in 0..contour.len() {
        let a = contour[i];
        let b = contour[(i + 1) % contour.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum
}

/// Even-odd ray cast along +x.
pub fn point_in_polygon(point: Vec2, contour: &[Vec2]) -> bool {
    let mut inside = false;
    for i in 0..contour.len() {
        let a = contour[i];
        let b = contour[(i + 1) % contour.len()];
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Miter offset direction per contour vertex. Moving a vertex by
/// `movement * d` shifts both adjacent edges outward by `d`; holes wind
/// clockwise, so the same formula shrinks them and the material grows.
fn contour_movements(contour: &[Vec2]) -> Vec<Vec2> {
    let len = contour.len();
    let mut movements = Vec::with_capacity(len);
    for i in 0..len {
        let prev = contour[(i + len - 1) % len];
        let here = contour[i];
        let next = contour[(i + 1) % len];
        let e1 = (here - prev).normalize_or_zero();
        let e2 = (next - here).normalize_or_zero();
        let n1 = Vec2::new(e1.y, -e1.x);
        let n2 = Vec2::new(e2.y, -e2.x);
        let denom = 1.0 + n1.dot(n2);
        // Near-reversal corners get a plain edge normal instead of an
        // unbounded miter.
        if denom.abs() < 1.0e-4 {
            movements.push(n1);
        } else {
            movements.push((n1 + n2) / denom);
        }
    }
    movements
}

fn triangulate(region: &Region) -> Result<Vec<u32>, GeometryError> {
    let mut coords: Vec<f64> = Vec::new();
    let mut hole_starts = Vec::new();
    for p in &region.outline {
        coords.push(p.x as f64);
        coords.push(p.y as f64);
    }
    for hole in &region.holes {
        hole_starts.push(coords.len() / 2);
        for p in hole {
            coords.push(p.x as f64);
            coords.push(p.y as f64);
        }
    }
    let triangles = earcutr::earcut(&coords, &hole_starts, 2)
        .map_err(|e| GeometryError::Triangulation(format!("{e:?}")))?;
    Ok(triangles.into_iter().map(|i| i as u32).collect())
}

/// Extrudes each region along +z, layering the cross-section through the
/// bottom bevel, the straight middle span and the top bevel, then closing
/// both ends with triangulated caps. Output is flat-shaded.
pub fn extrude_regions(
    regions: &[Region],
    options: &ExtrudeOptions,
) -> Result<MeshData, GeometryError> {
    if options.steps == 0 {
        return Err(GeometryError::InvalidSegmentCount {
            name: "steps",
            value: 0,
        });
    }
    let bevel_segments = if options.bevel_enabled {
        options.bevel_segments.max(1)
    } else {
        0
    };

    // (offset distance, z) per cross-section layer, bottom to top.
    let mut layers: Vec<(f32, f32)> = Vec::new();
    for b in 0..bevel_segments {
        let t = b as f32 / bevel_segments as f32;
        layers.push((
            options.bevel_offset + options.bevel_size * (t * FRAC_PI_2).sin(),
            -options.bevel_thickness * (t * FRAC_PI_2).cos(),
        ));
    }
    let mid_offset = if options.bevel_enabled {
        options.bevel_size + options.bevel_offset
    } else {
        0.0
    };
    for s in 0..=options.steps {
        layers.push((mid_offset, options.depth * s as f32 / options.steps as f32));
    }
    for b in (0..bevel_segments).rev() {
        let t = b as f32 / bevel_segments as f32;
        layers.push((
            options.bevel_offset + options.bevel_size * (t * FRAC_PI_2).sin(),
            options.depth + options.bevel_thickness * (t * FRAC_PI_2).cos(),
        ));
    }
    let layer_count = layers.len() as u32;

    let mut positions: Vec<f32> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for region in regions {
        let base = (positions.len() / 3) as u32;

        // Outline then holes, concatenated; cap triangulation indexes the
        // same layout.
        let mut contour_points: Vec<Vec2> = region.outline.clone();
        let mut movements = contour_movements(&region.outline);
        let mut contour_ranges = vec![(0u32, region.outline.len() as u32)];
        for hole in &region.holes {
            contour_ranges.push((contour_points.len() as u32, hole.len() as u32));
            contour_points.extend_from_slice(hole);
            movements.extend(contour_movements(hole));
        }
        let layer_stride = contour_points.len() as u32;

        for &(offset, z) in &layers {
            for (p, m) in contour_points.iter().zip(&movements) {
                let shifted = *p + *m * offset;
                positions.extend_from_slice(&[shifted.x, shifted.y, z]);
            }
        }

        // Side walls between consecutive layers, facing outward.
        for &(start, len) in &contour_ranges {
            for e in 0..len {
                let i = start + e;
                let j = start + (e + 1) % len;
                for l in 0..layer_count - 1 {
                    let a = base + l * layer_stride + i;
                    let b = base + l * layer_stride + j;
                    let c = base + (l + 1) * layer_stride + j;
                    let d = base + (l + 1) * layer_stride + i;
                    indices.extend_from_slice(&[a, b, c, a, c, d]);
                }
            }
        }

        let cap = triangulate(region)?;
        let top_base = base + (layer_count - 1) * layer_stride;
        for tri in cap.chunks_exact(3) {
            // Bottom cap faces -z, so its winding is reversed.
            indices.extend_from_slice(&[base + tri[0], base + tri[2], base + tri[1]]);
            indices.extend_from_slice(&[top_base + tri[0], top_base + tri[1], top_base + tri[2]]);
        }
    }

    let mesh = MeshData::flat_shaded(&positions, &indices);
    mesh.ensure_finite("extrusion")?;
    Ok(mesh)
}

/// Flat plate in the XY plane: the regions triangulated once, normals +z.
pub fn flat_region_mesh(regions: &[Region]) -> Result<MeshData, GeometryError> {
    let mut positions: Vec<f32> = Vec::new();
    let mut normals: Vec<f32> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for region in regions {
        let base = (positions.len() / 3) as u32;
        for p in region.outline.iter().chain(region.holes.iter().flatten()) {
            positions.extend_from_slice(&[p.x, p.y, 0.0]);
            normals.extend_from_slice(&[0.0, 0.0, 1.0]);
        }
        for i in triangulate(region)? {
            indices.push(base + i);
        }
    }

    let mesh = MeshData {
        positions,
        normals,
        indices,
    };
    mesh.ensure_finite("shape plate")?;
    Ok(mesh)
}
