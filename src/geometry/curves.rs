//! Pure parametric functions and the fixed 2D profiles that define the
//! default visual output.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

/// Sine-wave space curve swept by the tube generator:
/// `(3t - 1.5, sin 2πt, 0)` scaled.
pub struct SineCurve {
    pub scale: f32,
}

impl SineCurve {
    pub fn point(&self, t: f32) -> Vec3 {
        Vec3::new(t * 3.0 - 1.5, (TAU * t).sin(), 0.0) * self.scale
    }
}

/// Klein bottle over (u, v) in [0, 1]².
pub fn klein(u: f32, v: f32) -> Vec3 {
    let u = u * PI * 2.0;
    let v = v * TAU;

    let x;
    let z;
    if u < PI {
        x = 3.0 * u.cos() * (1.0 + u.sin()) + (2.0 * (1.0 - u.cos() / 2.0)) * u.cos() * v.cos();
        z = -8.0 * u.sin() - 2.0 * (1.0 - u.cos() / 2.0) * u.sin() * v.cos();
    } else {
        x = 3.0 * u.cos() * (1.0 + u.sin()) + (2.0 * (1.0 - u.cos() / 2.0)) * (v + PI).cos();
        z = -8.0 * u.sin();
    }
    let y = -2.0 * (1.0 - u.cos() / 2.0) * v.sin();
    Vec3::new(x, y, z)
}

/// Lathe profile: `x = sin(i·0.2)·7·(i/20) + 5, y = (i - 10)·2` for i in 0..20.
pub fn lathe_profile() -> Vec<Vec2> {
    (0..20)
        .map(|i| {
            let i = i as f32;
            Vec2::new((i * 0.2).sin() * 7.0 * (i / 20.0) + 5.0, (i - 10.0) * 2.0)
        })
        .collect()
}

/// Heart outline: start point plus six cubic Bézier segments
/// (control1, control2, end).
pub const HEART_START: [f32; 2] = [5.0, 5.0];
pub const HEART_BEZIERS: [[[f32; 2]; 3]; 6] = [
    [[5.0, 5.0], [4.0, 0.0], [0.0, 0.0]],
    [[-6.0, 0.0], [-6.0, 7.0], [-6.0, 7.0]],
    [[-6.0, 11.0], [-3.0, 15.4], [5.0, 19.0]],
    [[12.0, 15.4], [16.0, 11.0], [16.0, 7.0]],
    [[16.0, 7.0], [16.0, 0.0], [10.0, 0.0]],
    [[7.0, 0.0], [5.0, 5.0], [5.0, 5.0]],
];

/// Rectangle outline triangulated by the shape generator.
pub const RECT_LENGTH: f32 = 1.2;
pub const RECT_WIDTH: f32 = 0.8;

/// Samples a cubic Bézier with `segments` subdivisions, excluding the
/// start point (so consecutive segments chain without duplicates).
pub fn sample_cubic(p0: Vec2, c1: Vec2, c2: Vec2, p1: Vec2, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(1);
    (1..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let s = 1.0 - t;
            p0 * (s * s * s)
                + c1 * (3.0 * s * s * t)
                + c2 * (3.0 * s * t * t)
                + p1 * (t * t * t)
        })
        .collect()
}

/// The closed heart contour sampled with `curve_segments` per Bézier.
/// The final point coincides with the start and is dropped.
pub fn heart_outline(curve_segments: u32) -> Vec<Vec2> {
    let mut points = vec![Vec2::from(HEART_START)];
    let mut cursor = Vec2::from(HEART_START);
    for [c1, c2, end] in HEART_BEZIERS {
        let sampled = sample_cubic(
            cursor,
            Vec2::from(c1),
            Vec2::from(c2),
            Vec2::from(end),
            curve_segments,
        );
        cursor = Vec2::from(end);
        points.extend(sampled);
    }
    // Closing point duplicates the start.
    points.pop();
    points
}

/// Rectangle contour with each edge split into `segments` pieces.
pub fn rect_outline(segments: u32) -> Vec<Vec2> {
    let corners = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, RECT_WIDTH),
        Vec2::new(RECT_LENGTH, RECT_WIDTH),
        Vec2::new(RECT_LENGTH, 0.0),
    ];
    let segments = segments.max(1);
    let mut points = Vec::with_capacity(4 * segments as usize);
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        for s in 0..segments {
            points.push(a.lerp(b, s as f32 / segments as f32));
        }
    }
    points
}
