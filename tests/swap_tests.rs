use shapeview::geometry::generators::BoxGenerator;
use shapeview::geometry::{GeometryError, MeshData, ShapeKind, create_generator};
use shapeview::scene::{ACTIVE_MODEL, Scene, SurfaceAllocator, show_generated};

/// Allocator that only counts; handles are plain ids.
#[derive(Default)]
struct CountingAllocator {
    created: usize,
    released: usize,
    next_id: u32,
}

impl SurfaceAllocator for CountingAllocator {
    type Handle = u32;

    fn create_solid(&mut self, _mesh: &MeshData) -> u32 {
        self.created += 1;
        self.next_id += 1;
        self.next_id
    }

    fn create_wireframe(&mut self, _lines: &[f32]) -> u32 {
        self.created += 1;
        self.next_id += 1;
        self.next_id
    }

    fn release(&mut self, _handle: u32) {
        self.released += 1;
    }
}

#[test]
fn swap_inserts_one_tagged_model() {
    let mut scene: Scene<u32> = Scene::default();
    let mut alloc = CountingAllocator::default();
    let generator = BoxGenerator::default();

    show_generated(&generator, &mut scene, &mut alloc).unwrap();

    assert_eq!(scene.len(), 1);
    assert_eq!(scene.models()[0].name, ACTIVE_MODEL);
    assert_eq!(alloc.created, 2);
    assert_eq!(alloc.released, 0);
}

#[test]
fn repeated_swaps_release_predecessors_exactly_once() {
    let mut scene: Scene<u32> = Scene::default();
    let mut alloc = CountingAllocator::default();
    let generator = BoxGenerator::default();

    for _ in 0..10 {
        show_generated(&generator, &mut scene, &mut alloc).unwrap();
    }

    assert_eq!(scene.len(), 1);
    // Everything created except the live pair has been released.
    assert_eq!(alloc.created, 20);
    assert_eq!(alloc.released, 18);
}

#[test]
fn failed_generation_leaves_scene_untouched() {
    let mut scene: Scene<u32> = Scene::default();
    let mut alloc = CountingAllocator::default();

    show_generated(&BoxGenerator::default(), &mut scene, &mut alloc).unwrap();
    let live_handle = scene.models()[0].solid;

    let failing = create_generator(ShapeKind::Sphere, "");
    let result = show_generated(failing.as_ref(), &mut scene, &mut alloc);

    assert!(matches!(result, Err(GeometryError::Unimplemented(_))));
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.models()[0].solid, live_handle);
    assert_eq!(alloc.created, 2);
    assert_eq!(alloc.released, 0);
}

#[test]
fn clear_releases_every_handle() {
    let mut scene: Scene<u32> = Scene::default();
    let mut alloc = CountingAllocator::default();

    show_generated(&BoxGenerator::default(), &mut scene, &mut alloc).unwrap();
    scene.clear(&mut alloc);

    assert!(scene.is_empty());
    assert_eq!(alloc.released, alloc.created);
}

#[test]
fn foreign_models_survive_the_swap() {
    let mut scene: Scene<u32> = Scene::default();
    let mut alloc = CountingAllocator::default();

    scene.insert("backdrop", 100, 101);
    show_generated(&BoxGenerator::default(), &mut scene, &mut alloc).unwrap();
    show_generated(&BoxGenerator::default(), &mut scene, &mut alloc).unwrap();

    assert_eq!(scene.len(), 2);
    assert_eq!(scene.models()[0].name, "backdrop");
    assert_eq!(alloc.released, 2);
}
