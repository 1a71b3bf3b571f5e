//! Glyph outline extraction. A TrueType face is flattened into closed 2D
//! contours, contours are sorted into outlines and holes by containment
//! depth, and the resulting regions feed the extrusion pipeline.

use glam::Vec2;
use ttf_parser::{Face, OutlineBuilder};

use super::GeometryError;
use super::curves::sample_cubic;
use super::extrude::{Region, point_in_polygon, signed_area};

/// Raw font bytes plus the path they came from, kept for error reporting.
pub struct FontData {
    path: String,
    bytes: Vec<u8>,
}

impl FontData {
    pub fn load(path: &str) -> Result<Self, GeometryError> {
        let bytes = std::fs::read(path).map_err(|e| GeometryError::FontLoad {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        // Parse once up front so a corrupt file fails at load time.
        Face::parse(&bytes, 0).map_err(|e| GeometryError::FontLoad {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            path: path.to_string(),
            bytes,
        })
    }

    fn face(&self) -> Result<Face<'_>, GeometryError> {
        Face::parse(&self.bytes, 0).map_err(|e| GeometryError::FontLoad {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

/// Flattens one glyph's outline into polylines in scaled text space.
struct OutlineCollector {
    contours: Vec<Vec<Vec2>>,
    current: Vec<Vec2>,
    scale: f32,
    offset_x: f32,
    segments: u32,
}

impl OutlineCollector {
    fn point(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x * self.scale + self.offset_x, y * self.scale)
    }
}

impl OutlineBuilder for OutlineCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        self.close();
        self.current.push(self.point(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.current.push(self.point(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let p0 = *self.current.last().unwrap_or(&Vec2::ZERO);
        let c = self.point(x1, y1);
        let p1 = self.point(x, y);
        let segments = self.segments.max(1);
        for i in 1..=segments {
            let t = i as f32 / segments as f32;
            let s = 1.0 - t;
            self.current
                .push(p0 * (s * s) + c * (2.0 * s * t) + p1 * (t * t));
        }
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let p0 = *self.current.last().unwrap_or(&Vec2::ZERO);
        self.current.extend(sample_cubic(
            p0,
            self.point(x1, y1),
            self.point(x2, y2),
            self.point(x, y),
            self.segments,
        ));
    }

    fn close(&mut self) {
        if self.current.len() >= 3 {
            // Drop an explicit closing point that repeats the start.
            if let (Some(first), Some(last)) = (self.current.first(), self.current.last()) {
                if first.distance(*last) < 1.0e-6 {
                    self.current.pop();
                }
            }
            if self.current.len() >= 3 {
                self.contours.push(std::mem::take(&mut self.current));
            }
        }
        self.current.clear();
    }
}

/// Lays out `text` left to right and returns one region per glyph outline,
/// holes attached to their enclosing contour. Characters without a glyph
/// are skipped.
pub fn text_regions(
    font: &FontData,
    text: &str,
    size: f32,
    curve_segments: u32,
) -> Result<Vec<Region>, GeometryError> {
    let face = font.face()?;
    let units_per_em = face.units_per_em().max(1) as f32;
    let scale = size / units_per_em;

    let mut contours: Vec<Vec<Vec2>> = Vec::new();
    let mut cursor_x = 0.0f32;

    for ch in text.chars() {
        let Some(glyph) = face.glyph_index(ch) else {
            continue;
        };
        let mut collector = OutlineCollector {
            contours: Vec::new(),
            current: Vec::new(),
            scale,
            offset_x: cursor_x,
            segments: curve_segments,
        };
        if face.outline_glyph(glyph, &mut collector).is_some() {
            collector.close();
            contours.extend(collector.contours);
        }
        let advance = face.glyph_hor_advance(glyph).unwrap_or(0) as f32;
        cursor_x += advance * scale;
    }

    Ok(classify_contours(contours))
}

/// Splits a flat contour list into regions by containment depth: even
/// depth means outline, odd depth means hole of the tightest enclosing
/// outline.
pub fn classify_contours(contours: Vec<Vec<Vec2>>) -> Vec<Region> {
    let depths: Vec<usize> = contours
        .iter()
        .enumerate()
        .map(|(i, contour)| {
            contours
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && point_in_polygon(contour[0], other))
                .count()
        })
        .collect();

    let mut outlines: Vec<(Vec<Vec2>, Vec<Vec<Vec2>>)> = Vec::new();
    let mut holes: Vec<Vec<Vec2>> = Vec::new();
    for (contour, depth) in contours.into_iter().zip(&depths) {
        if depth % 2 == 0 {
            outlines.push((contour, Vec::new()));
        } else {
            holes.push(contour);
        }
    }

    for hole in holes {
        let mut owner: Option<(usize, f32)> = None;
        for (i, (outline, _)) in outlines.iter().enumerate() {
            if point_in_polygon(hole[0], outline) {
                let area = signed_area(outline).abs();
                if owner.is_none_or(|(_, best)| area < best) {
                    owner = Some((i, area));
                }
            }
        }
        if let Some((i, _)) = owner {
            outlines[i].1.push(hole);
        }
    }

    outlines
        .into_iter()
        .map(|(outline, holes)| Region::normalized(outline, holes))
        .collect()
}
