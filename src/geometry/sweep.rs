//! Swept surfaces: tubes along a space curve, lathes around the Y axis
//! and sampled parametric patches.

use std::f32::consts::TAU;

use glam::{Quat, Vec2, Vec3};

use super::mesh::MeshData;
use super::{GeometryError, require_positive};

/// Tube around a sampled space curve. Frames are parallel-transported
/// along the curve so the cross-section never twists abruptly.
pub fn tube_mesh<F>(
    curve: F,
    segments: u32,
    radius: f32,
    radial_segments: u32,
    closed: bool,
) -> Result<MeshData, GeometryError>
where
    F: Fn(f32) -> Vec3,
{
    require_positive("tubularSegments", segments)?;
    require_positive("radialSegments", radial_segments)?;

    let points: Vec<Vec3> = (0..=segments)
        .map(|i| curve(i as f32 / segments as f32))
        .collect();

    // Central-difference tangents, one-sided at the ends.
    let mut tangents = Vec::with_capacity(points.len());
    for i in 0..points.len() {
        let prev = if i == 0 { points[0] } else { points[i - 1] };
        let next = if i + 1 == points.len() {
            points[i]
        } else {
            points[i + 1]
        };
        let t = (next - prev).normalize_or_zero();
        if t == Vec3::ZERO {
            return Err(GeometryError::NonFinite { context: "tube" });
        }
        tangents.push(t);
    }

    // Initial normal picked against the smallest tangent component, then
    // rotated forward frame by frame.
    let mut normals = Vec::with_capacity(points.len());
    let mut binormals = Vec::with_capacity(points.len());
    let t0 = tangents[0];
    let abs = t0.abs();
    let axis = if abs.x <= abs.y && abs.x <= abs.z {
        Vec3::X
    } else if abs.y <= abs.z {
        Vec3::Y
    } else {
        Vec3::Z
    };
    let mut normal = t0.cross(t0.cross(axis)).normalize_or_zero();
    if normal == Vec3::ZERO {
        normal = t0.any_orthonormal_vector();
    }
    normals.push(normal);
    binormals.push(t0.cross(normal));
    for i in 1..points.len() {
        let mut n = normals[i - 1];
        let rotation_axis = tangents[i - 1].cross(tangents[i]);
        if rotation_axis.length() > 1.0e-6 {
            let angle = tangents[i - 1].dot(tangents[i]).clamp(-1.0, 1.0).acos();
            n = Quat::from_axis_angle(rotation_axis.normalize(), angle) * n;
        }
        normals.push(n);
        binormals.push(tangents[i].cross(n));
    }

    let mut positions = Vec::new();
    let mut vertex_normals = Vec::new();
    let mut indices = Vec::new();

    for i in 0..=segments {
        // A closed tube reuses the first frame for its last ring so the
        // seam is watertight.
        let ring = if closed && i == segments { 0 } else { i as usize };
        let p = points[ring];
        let n = normals[ring];
        let b = binormals[ring];
        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -radius * v.cos();
            let cy = radius * v.sin();
            let pos = p + n * cx + b * cy;
            positions.extend_from_slice(&[pos.x, pos.y, pos.z]);
            let vn = (pos - p).normalize_or_zero();
            vertex_normals.extend_from_slice(&[vn.x, vn.y, vn.z]);
        }
    }

    let row = radial_segments + 1;
    for i in 0..segments {
        for j in 0..radial_segments {
            let a = row * i + j;
            let b = row * (i + 1) + j;
            let c = row * (i + 1) + j + 1;
            let d = row * i + j + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    let mesh = MeshData {
        positions,
        normals: vertex_normals,
        indices,
    };
    mesh.ensure_finite("tube")?;
    Ok(mesh)
}

/// Revolves a 2D profile (x = radius, y = height) around the Y axis.
pub fn lathe_mesh(
    profile: &[Vec2],
    segments: u32,
    phi_start: f32,
    phi_length: f32,
) -> Result<MeshData, GeometryError> {
    require_positive("segments", segments)?;
    if profile.len() < 2 {
        return Err(GeometryError::InvalidSegmentCount {
            name: "profile points",
            value: profile.len() as i64,
        });
    }
    let phi_length = phi_length.clamp(0.0, TAU);

    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for i in 0..=segments {
        let phi = phi_start + i as f32 / segments as f32 * phi_length;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for p in profile {
            positions.extend_from_slice(&[p.x * sin_phi, p.y, p.x * cos_phi]);
        }
    }

    let stride = profile.len() as u32;
    for i in 0..segments {
        for j in 0..stride - 1 {
            let a = i * stride + j;
            let b = (i + 1) * stride + j;
            let c = (i + 1) * stride + j + 1;
            let d = i * stride + j + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    let mesh = MeshData::with_smooth_normals(positions, indices);
    mesh.ensure_finite("lathe")?;
    Ok(mesh)
}

/// Samples `surface` over the unit square and derives normals from
/// central-difference tangents along both parameters.
pub fn parametric_mesh<F>(surface: F, slices: u32, stacks: u32) -> Result<MeshData, GeometryError>
where
    F: Fn(f32, f32) -> Vec3,
{
    require_positive("slices", slices)?;
    require_positive("stacks", stacks)?;

    let eps = 1.0e-5f32;
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    for i in 0..=stacks {
        let v = i as f32 / stacks as f32;
        for j in 0..=slices {
            let u = j as f32 / slices as f32;
            let p = surface(u, v);
            positions.extend_from_slice(&[p.x, p.y, p.z]);

            let tangent_u = if u + eps <= 1.0 {
                surface(u + eps, v) - p
            } else {
                p - surface(u - eps, v)
            };
            let tangent_v = if v + eps <= 1.0 {
                surface(u, v + eps) - p
            } else {
                p - surface(u, v - eps)
            };
            let n = tangent_u.cross(tangent_v).normalize_or_zero();
            normals.extend_from_slice(&[n.x, n.y, n.z]);
        }
    }

    let row = slices + 1;
    for i in 0..stacks {
        for j in 0..slices {
            let a = i * row + j;
            let b = i * row + j + 1;
            let c = (i + 1) * row + j + 1;
            let d = (i + 1) * row + j;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    let mesh = MeshData {
        positions,
        normals,
        indices,
    };
    mesh.ensure_finite("parametric surface")?;
    Ok(mesh)
}
