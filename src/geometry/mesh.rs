use std::collections::HashMap;

use glam::Vec3;

use super::GeometryError;

/// Triangle surface as flat xyz triplets plus a triangle index list.
/// Built once by a generator and never mutated afterwards.
pub struct MeshData {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        )
    }

    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for i in 0..self.vertex_count() {
            let p = self.position(i);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    /// Translates the mesh so the mean vertex position sits at the origin.
    pub fn center(&mut self) {
        let count = self.vertex_count();
        if count == 0 {
            return;
        }
        let mut mean = Vec3::ZERO;
        for i in 0..count {
            mean += self.position(i);
        }
        mean /= count as f32;
        for i in 0..count {
            self.positions[i * 3] -= mean.x;
            self.positions[i * 3 + 1] -= mean.y;
            self.positions[i * 3 + 2] -= mean.z;
        }
    }

    /// Per-axis scale. Normals are rescaled by the inverse factors and
    /// renormalized; a negative determinant flips triangle winding so the
    /// surface keeps facing outward.
    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) {
        for i in 0..self.vertex_count() {
            self.positions[i * 3] *= sx;
            self.positions[i * 3 + 1] *= sy;
            self.positions[i * 3 + 2] *= sz;
        }
        for i in 0..self.normals.len() / 3 {
            let n = Vec3::new(
                self.normals[i * 3] / sx,
                self.normals[i * 3 + 1] / sy,
                self.normals[i * 3 + 2] / sz,
            )
            .normalize_or_zero();
            self.normals[i * 3] = n.x;
            self.normals[i * 3 + 1] = n.y;
            self.normals[i * 3 + 2] = n.z;
        }
        if sx * sy * sz < 0.0 {
            for tri in self.indices.chunks_exact_mut(3) {
                tri.swap(1, 2);
            }
        }
    }

    pub fn ensure_finite(&self, context: &'static str) -> Result<(), GeometryError> {
        if self.positions.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite { context });
        }
        Ok(())
    }

    /// Area-weighted smooth vertex normals from positions and indices.
    pub fn with_smooth_normals(positions: Vec<f32>, indices: Vec<u32>) -> Self {
        let mut normals = vec![0.0f32; positions.len()];
        for tri in indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let a = vec_at(&positions, ia);
            let b = vec_at(&positions, ib);
            let c = vec_at(&positions, ic);
            let face = (b - a).cross(c - a);
            for &i in &[ia, ib, ic] {
                normals[i * 3] += face.x;
                normals[i * 3 + 1] += face.y;
                normals[i * 3 + 2] += face.z;
            }
        }
        for i in 0..normals.len() / 3 {
            let n = vec_at(&normals, i).normalize_or_zero();
            normals[i * 3] = n.x;
            normals[i * 3 + 1] = n.y;
            normals[i * 3 + 2] = n.z;
        }
        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Expands an indexed mesh into a triangle soup with one face normal
    /// per corner. Used where hard edges should stay hard.
    pub fn flat_shaded(positions: &[f32], indices: &[u32]) -> Self {
        let mut out_positions = Vec::with_capacity(indices.len() * 3);
        let mut out_normals = Vec::with_capacity(indices.len() * 3);
        let mut out_indices = Vec::with_capacity(indices.len());
        for tri in indices.chunks_exact(3) {
            let a = vec_at(positions, tri[0] as usize);
            let b = vec_at(positions, tri[1] as usize);
            let c = vec_at(positions, tri[2] as usize);
            let n = (b - a).cross(c - a).normalize_or_zero();
            for p in [a, b, c] {
                out_indices.push((out_positions.len() / 3) as u32);
                out_positions.extend_from_slice(&[p.x, p.y, p.z]);
                out_normals.extend_from_slice(&[n.x, n.y, n.z]);
            }
        }
        Self {
            positions: out_positions,
            normals: out_normals,
            indices: out_indices,
        }
    }

    /// Edge segments for the wireframe overlay: boundary edges plus edges
    /// whose adjacent face normals differ by more than `threshold_deg`.
    /// Returns flat xyz pairs (two endpoints per edge).
    pub fn edge_lines(&self, threshold_deg: f32) -> Vec<f32> {
        let cos_threshold = threshold_deg.to_radians().cos();

        // Vertices are welded by quantized position so flat-shaded soups
        // still share edges.
        let mut canonical: HashMap<(i64, i64, i64), u32> = HashMap::new();
        let mut canon_of = Vec::with_capacity(self.vertex_count());
        let mut canon_pos: Vec<Vec3> = Vec::new();
        for i in 0..self.vertex_count() {
            let p = self.position(i);
            let key = quantize(p);
            let id = *canonical.entry(key).or_insert_with(|| {
                canon_pos.push(p);
                (canon_pos.len() - 1) as u32
            });
            canon_of.push(id);
        }

        struct EdgeInfo {
            normal: Vec3,
            count: u32,
            keep: bool,
        }
        let mut edges: HashMap<(u32, u32), EdgeInfo> = HashMap::new();

        for tri in self.indices.chunks_exact(3) {
            let a = self.position(tri[0] as usize);
            let b = self.position(tri[1] as usize);
            let c = self.position(tri[2] as usize);
            let n = (b - a).cross(c - a).normalize_or_zero();
            if n == Vec3::ZERO {
                continue;
            }
            for k in 0..3 {
                let ia = canon_of[tri[k] as usize];
                let ib = canon_of[tri[(k + 1) % 3] as usize];
                if ia == ib {
                    continue;
                }
                let key = (ia.min(ib), ia.max(ib));
                edges
                    .entry(key)
                    .and_modify(|e| {
                        if n.dot(e.normal) < cos_threshold {
                            e.keep = true;
                        }
                        e.count += 1;
                    })
                    .or_insert(EdgeInfo {
                        normal: n,
                        count: 1,
                        keep: false,
                    });
            }
        }

        let mut lines = Vec::new();
        for ((ia, ib), info) in &edges {
            if info.count != 2 || info.keep {
                let a = canon_pos[*ia as usize];
                let b = canon_pos[*ib as usize];
                lines.extend_from_slice(&[a.x, a.y, a.z, b.x, b.y, b.z]);
            }
        }
        lines
    }
}

fn vec_at(data: &[f32], i: usize) -> Vec3 {
    Vec3::new(data[i * 3], data[i * 3 + 1], data[i * 3 + 2])
}

fn quantize(p: Vec3) -> (i64, i64, i64) {
    (
        (p.x as f64 * 1.0e4).round() as i64,
        (p.y as f64 * 1.0e4).round() as i64,
        (p.z as f64 * 1.0e4).round() as i64,
    )
}
