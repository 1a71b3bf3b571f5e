//! Closed-form primitive surfaces: box, cylinder/cone, circle and the
//! subdivided platonic solids. All angular arguments are radians; the
//! degree-to-radian conversion happens at the generator boundary.

use glam::Vec3;

use super::mesh::MeshData;
use super::{GeometryError, require_positive};

/// Axis-aligned box built as six independent face grids so each face
/// carries its own normal.
pub fn box_mesh(
    width: f32,
    height: f32,
    depth: f32,
    width_segments: u32,
    height_segments: u32,
    depth_segments: u32,
) -> Result<MeshData, GeometryError> {
    require_positive("widthSegments", width_segments)?;
    require_positive("heightSegments", height_segments)?;
    require_positive("depthSegments", depth_segments)?;

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // (u, v, w) are component indices into the output vertex; each face
    // grid spans u and v while w holds the face offset.
    let mut build_plane = |u: usize,
                           v: usize,
                           w: usize,
                           udir: f32,
                           vdir: f32,
                           plane_w: f32,
                           plane_h: f32,
                           plane_d: f32,
                           grid_x: u32,
                           grid_y: u32| {
        let seg_w = plane_w / grid_x as f32;
        let seg_h = plane_h / grid_y as f32;
        let half_w = plane_w / 2.0;
        let half_h = plane_h / 2.0;
        let half_d = plane_d / 2.0;
        let base = (positions.len() / 3) as u32;

        for iy in 0..=grid_y {
            let y = iy as f32 * seg_h - half_h;
            for ix in 0..=grid_x {
                let x = ix as f32 * seg_w - half_w;
                let mut pos = [0.0f32; 3];
                pos[u] = x * udir;
                pos[v] = y * vdir;
                pos[w] = half_d;
                positions.extend_from_slice(&pos);

                let mut normal = [0.0f32; 3];
                normal[w] = if plane_d > 0.0 { 1.0 } else { -1.0 };
                normals.extend_from_slice(&normal);
            }
        }

        let row = grid_x + 1;
        for iy in 0..grid_y {
            for ix in 0..grid_x {
                let a = base + ix + row * iy;
                let b = base + ix + row * (iy + 1);
                let c = base + (ix + 1) + row * (iy + 1);
                let d = base + (ix + 1) + row * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
    };

    build_plane(2, 1, 0, -1.0, -1.0, depth, height, width, depth_segments, height_segments);
    build_plane(2, 1, 0, 1.0, -1.0, depth, height, -width, depth_segments, height_segments);
    build_plane(0, 2, 1, 1.0, 1.0, width, depth, height, width_segments, depth_segments);
    build_plane(0, 2, 1, 1.0, -1.0, width, depth, -height, width_segments, depth_segments);
    build_plane(0, 1, 2, 1.0, -1.0, width, height, depth, width_segments, height_segments);
    build_plane(0, 1, 2, -1.0, -1.0, width, height, -depth, width_segments, height_segments);

    let mesh = MeshData {
        positions,
        normals,
        indices,
    };
    mesh.ensure_finite("box")?;
    Ok(mesh)
}

/// Open or capped cylinder frustum; a cone is the top-radius-zero case.
pub fn cylinder_mesh(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
    open_ended: bool,
    theta_start: f32,
    theta_length: f32,
) -> Result<MeshData, GeometryError> {
    require_positive("radialSegments", radial_segments)?;
    require_positive("heightSegments", height_segments)?;

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    let half_height = height / 2.0;
    let slope = (radius_bottom - radius_top) / height;

    // Torso grid.
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let radius = v * (radius_bottom - radius_top) + radius_top;
        for ix in 0..=radial_segments {
            let u = ix as f32 / radial_segments as f32;
            let theta = u * theta_length + theta_start;
            let (sin_t, cos_t) = theta.sin_cos();

            positions.extend_from_slice(&[
                radius * sin_t,
                -v * height + half_height,
                radius * cos_t,
            ]);
            let n = Vec3::new(sin_t, slope, cos_t).normalize();
            normals.extend_from_slice(&[n.x, n.y, n.z]);
        }
    }
    let row = radial_segments + 1;
    for iy in 0..height_segments {
        for ix in 0..radial_segments {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = (ix + 1) + row * (iy + 1);
            let d = (ix + 1) + row * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    let mut build_cap = |top: bool| {
        let radius = if top { radius_top } else { radius_bottom };
        if radius <= 0.0 {
            return;
        }
        let sign = if top { 1.0f32 } else { -1.0 };
        let center = (positions.len() / 3) as u32;
        positions.extend_from_slice(&[0.0, half_height * sign, 0.0]);
        normals.extend_from_slice(&[0.0, sign, 0.0]);

        let ring = (positions.len() / 3) as u32;
        for ix in 0..=radial_segments {
            let u = ix as f32 / radial_segments as f32;
            let theta = u * theta_length + theta_start;
            let (sin_t, cos_t) = theta.sin_cos();
            positions.extend_from_slice(&[radius * sin_t, half_height * sign, radius * cos_t]);
            normals.extend_from_slice(&[0.0, sign, 0.0]);
        }
        for ix in 0..radial_segments {
            if top {
                indices.extend_from_slice(&[center, ring + ix + 1, ring + ix]);
            } else {
                indices.extend_from_slice(&[center, ring + ix, ring + ix + 1]);
            }
        }
    };

    if !open_ended {
        build_cap(true);
        build_cap(false);
    }

    let mesh = MeshData {
        positions,
        normals,
        indices,
    };
    mesh.ensure_finite("cylinder")?;
    Ok(mesh)
}

/// Flat disc fan in the XY plane.
pub fn circle_mesh(
    radius: f32,
    segments: u32,
    theta_start: f32,
    theta_length: f32,
) -> Result<MeshData, GeometryError> {
    require_positive("segments", segments)?;

    let mut positions = vec![0.0, 0.0, 0.0];
    let mut normals = vec![0.0, 0.0, 1.0];
    let mut indices = Vec::new();

    for i in 0..=segments {
        let theta = theta_start + i as f32 / segments as f32 * theta_length;
        positions.extend_from_slice(&[radius * theta.cos(), radius * theta.sin(), 0.0]);
        normals.extend_from_slice(&[0.0, 0.0, 1.0]);
    }
    for i in 1..=segments {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    let mesh = MeshData {
        positions,
        normals,
        indices,
    };
    mesh.ensure_finite("circle")?;
    Ok(mesh)
}

#[derive(Clone, Copy)]
pub enum Polyhedron {
    Tetrahedron,
    Octahedron,
    Icosahedron,
    Dodecahedron,
}

/// Subdivides each base face `detail + 1` times per edge and projects
/// every vertex onto the sphere of the given radius. Flat-shaded soup at
/// detail 0; sphere normals otherwise.
pub fn polyhedron_mesh(kind: Polyhedron, radius: f32, detail: u32) -> MeshData {
    let (base_vertices, base_indices) = base_data(&kind);

    let cols = detail + 1;
    let mut positions: Vec<f32> = Vec::new();

    for face in base_indices.chunks_exact(3) {
        let a = vertex(base_vertices, face[0]);
        let b = vertex(base_vertices, face[1]);
        let c = vertex(base_vertices, face[2]);

        // Rows of interpolated points between edges a->c and b->c.
        let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols as usize + 1);
        for i in 0..=cols {
            let t = i as f32 / cols as f32;
            let aj = a.lerp(c, t);
            let bj = b.lerp(c, t);
            let rows = cols - i;
            let mut row = Vec::with_capacity(rows as usize + 1);
            for j in 0..=rows {
                if rows == 0 {
                    row.push(aj);
                } else {
                    row.push(aj.lerp(bj, j as f32 / rows as f32));
                }
            }
            grid.push(row);
        }

        for i in 0..cols as usize {
            for j in 0..(2 * (cols as usize - i) - 1) {
                let k = j / 2;
                let tri = if j % 2 == 0 {
                    [grid[i][k + 1], grid[i + 1][k], grid[i][k]]
                } else {
                    [grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]
                };
                for p in tri {
                    let p = p.normalize() * radius;
                    positions.extend_from_slice(&[p.x, p.y, p.z]);
                }
            }
        }
    }

    let indices: Vec<u32> = (0..(positions.len() / 3) as u32).collect();
    if detail == 0 {
        MeshData::flat_shaded(&positions, &indices)
    } else {
        let normals = positions
            .chunks_exact(3)
            .flat_map(|p| {
                let n = Vec3::new(p[0], p[1], p[2]).normalize_or_zero();
                [n.x, n.y, n.z]
            })
            .collect();
        MeshData {
            positions,
            normals,
            indices,
        }
    }
}

fn vertex(data: &[f32], i: u32) -> Vec3 {
    let i = i as usize;
    Vec3::new(data[i * 3], data[i * 3 + 1], data[i * 3 + 2])
}

fn base_data(kind: &Polyhedron) -> (&'static [f32], &'static [u32]) {
    match kind {
        Polyhedron::Tetrahedron => (&TETRA_VERTICES, &TETRA_INDICES),
        Polyhedron::Octahedron => (&OCTA_VERTICES, &OCTA_INDICES),
        Polyhedron::Icosahedron => (&ICOSA_VERTICES, &ICOSA_INDICES),
        Polyhedron::Dodecahedron => (&DODECA_VERTICES, &DODECA_INDICES),
    }
}

const TETRA_VERTICES: [f32; 12] = [
    1.0, 1.0, 1.0, //
    -1.0, -1.0, 1.0, //
    -1.0, 1.0, -1.0, //
    1.0, -1.0, -1.0,
];
const TETRA_INDICES: [u32; 12] = [2, 1, 0, 0, 3, 2, 1, 3, 0, 2, 3, 1];

const OCTA_VERTICES: [f32; 18] = [
    1.0, 0.0, 0.0, //
    -1.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, //
    0.0, -1.0, 0.0, //
    0.0, 0.0, 1.0, //
    0.0, 0.0, -1.0,
];
const OCTA_INDICES: [u32; 24] = [
    0, 2, 4, 0, 4, 3, 0, 3, 5, 0, 5, 2, //
    1, 2, 5, 1, 5, 3, 1, 3, 4, 1, 4, 2,
];

// Golden ratio and friends.
const T: f32 = 1.618_034;
const R: f32 = 0.618_034; // 1 / T

const ICOSA_VERTICES: [f32; 36] = [
    -1.0, T, 0.0, 1.0, T, 0.0, -1.0, -T, 0.0, 1.0, -T, 0.0, //
    0.0, -1.0, T, 0.0, 1.0, T, 0.0, -1.0, -T, 0.0, 1.0, -T, //
    T, 0.0, -1.0, T, 0.0, 1.0, -T, 0.0, -1.0, -T, 0.0, 1.0,
];
const ICOSA_INDICES: [u32; 60] = [
    0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, //
    1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7, 1, 8, //
    3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, //
    4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9, 8, 1,
];

const DODECA_VERTICES: [f32; 60] = [
    -1.0, -1.0, -1.0, -1.0, -1.0, 1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, //
    1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, 1.0, -1.0, 1.0, 1.0, 1.0, //
    0.0, -R, -T, 0.0, -R, T, 0.0, R, -T, 0.0, R, T, //
    -R, -T, 0.0, -R, T, 0.0, R, -T, 0.0, R, T, 0.0, //
    -T, 0.0, -R, T, 0.0, -R, -T, 0.0, R, T, 0.0, R,
];
const DODECA_INDICES: [u32; 108] = [
    3, 11, 7, 3, 7, 15, 3, 15, 13, //
    7, 19, 17, 7, 17, 6, 7, 6, 15, //
    17, 4, 8, 17, 8, 10, 17, 10, 6, //
    8, 0, 16, 8, 16, 2, 8, 2, 10, //
    0, 12, 1, 0, 1, 18, 0, 18, 16, //
    6, 10, 2, 6, 2, 13, 6, 13, 15, //
    2, 16, 18, 2, 18, 3, 2, 3, 13, //
    18, 1, 9, 18, 9, 11, 18, 11, 3, //
    4, 14, 12, 4, 12, 0, 4, 0, 8, //
    11, 9, 5, 11, 5, 19, 11, 19, 7, //
    19, 5, 14, 19, 14, 4, 19, 4, 17, //
    1, 12, 14, 1, 14, 5, 1, 5, 9,
];
