use glam::{Vec2, Vec3, Vec4};

use shapeview::renderer::{Camera, generate_grid_vertices};

const EPS: f32 = 1.0e-4;

#[test]
fn camera_starts_on_the_z_axis() {
    let camera = Camera::default();
    let pos = camera.position();
    assert!(pos.distance(Vec3::new(0.0, 0.0, 2.0)) < EPS);
    assert!((camera.fov - 75.0f32.to_radians()).abs() < EPS);
    assert!((camera.near - 0.1).abs() < EPS);
    assert!((camera.far - 100.0).abs() < EPS);
}

#[test]
fn resize_updates_the_aspect_ratio() {
    let mut camera = Camera::default();
    camera.set_aspect(800.0, 600.0);
    assert!((camera.aspect - 800.0 / 600.0).abs() < EPS);

    // A zero-height frame keeps the previous aspect.
    camera.set_aspect(800.0, 0.0);
    assert!((camera.aspect - 800.0 / 600.0).abs() < EPS);
}

#[test]
fn orbit_pitch_is_clamped_at_the_poles() {
    let mut camera = Camera::default();
    camera.orbit(Vec2::new(0.0, 1.0e6));
    assert!(camera.pitch <= 89.0f32.to_radians() + EPS);
    camera.orbit(Vec2::new(0.0, -1.0e6));
    assert!(camera.pitch >= -(89.0f32.to_radians()) - EPS);
}

#[test]
fn zoom_keeps_the_distance_bounded() {
    let mut camera = Camera::default();
    for _ in 0..100 {
        camera.zoom(1.0);
    }
    assert!(camera.distance >= 0.2 - EPS);

    for _ in 0..100 {
        camera.zoom(-1.0);
    }
    assert!(camera.distance <= 50.0 + EPS);
}

#[test]
fn view_projection_maps_the_target_in_front_of_the_camera() {
    let camera = Camera::default();
    let clip = camera.view_projection_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    // The focus point lands on the view axis inside the depth range.
    assert!(clip.x.abs() < EPS);
    assert!(clip.y.abs() < EPS);
    assert!(clip.w > 0.0);
    assert!(clip.z / clip.w > 0.0 && clip.z / clip.w < 1.0);
}

#[test]
fn grid_vertices_cover_lines_and_axes() {
    let vertices = generate_grid_vertices(2.0, 20);
    // 21 lines in each direction plus three axis lines, two points each.
    assert_eq!(vertices.len() / 3, (21 * 2 + 3) * 2);
    assert!(vertices.iter().all(|v| v.abs() <= 2.0 + EPS));
}
