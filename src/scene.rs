//! Model registry and the swap contract between geometry generation and
//! GPU residency. `show_generated` is the only path that replaces the
//! displayed model: the new surfaces are built and inserted before any
//! previous model is touched, and each replaced model releases its GPU
//! handles exactly once.

use log::{debug, warn};

use crate::geometry::{GeometryError, ShapeGenerator};

/// Tag shared by every generator-produced model so replacement can find
/// its predecessor.
pub const ACTIVE_MODEL: &str = "activeModel";

/// Wireframe edges sharper than this many degrees are drawn.
pub const EDGE_THRESHOLD_DEG: f32 = 1.0;

/// Owner of GPU-resident surface data. The renderer implements this over
/// real buffers; tests implement it over counters.
pub trait SurfaceAllocator {
    type Handle;

    fn create_solid(&mut self, mesh: &crate::geometry::MeshData) -> Self::Handle;
    fn create_wireframe(&mut self, lines: &[f32]) -> Self::Handle;
    fn release(&mut self, handle: Self::Handle);
}

/// One displayed model: a solid surface plus its wireframe overlay.
pub struct SceneModel<H> {
    pub name: String,
    pub solid: H,
    pub wireframe: H,
}

/// Ordered list of displayed models. Insertion order is draw order.
pub struct Scene<H> {
    models: Vec<SceneModel<H>>,
}

impl<H> Default for Scene<H> {
    fn default() -> Self {
        Self { models: Vec::new() }
    }
}

impl<H> Scene<H> {
    pub fn models(&self) -> &[SceneModel<H>] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn insert(&mut self, name: &str, solid: H, wireframe: H) {
        self.models.push(SceneModel {
            name: name.to_string(),
            solid,
            wireframe,
        });
    }

    /// Removes every model with `name` except the most recently inserted
    /// one and releases its handles.
    fn remove_older<A>(&mut self, name: &str, alloc: &mut A) -> usize
    where
        A: SurfaceAllocator<Handle = H>,
    {
        let mut removed = 0;
        let mut i = 0;
        let mut end = self.models.len().saturating_sub(1);
        while i < end {
            if self.models[i].name == name {
                let model = self.models.remove(i);
                alloc.release(model.solid);
                alloc.release(model.wireframe);
                removed += 1;
                end -= 1;
            } else {
                i += 1;
            }
        }
        removed
    }

    /// Releases everything. Used at shutdown.
    pub fn clear<A>(&mut self, alloc: &mut A)
    where
        A: SurfaceAllocator<Handle = H>,
    {
        for model in self.models.drain(..) {
            alloc.release(model.solid);
            alloc.release(model.wireframe);
        }
    }
}

/// Regenerates the active model. The generator runs first; on failure the
/// scene is left exactly as it was. On success the new model is inserted
/// under [`ACTIVE_MODEL`] and only then are the older ones removed and
/// released.
pub fn show_generated<A, H>(
    generator: &dyn ShapeGenerator,
    scene: &mut Scene<H>,
    alloc: &mut A,
) -> Result<(), GeometryError>
where
    A: SurfaceAllocator<Handle = H>,
{
    let mesh = generator.generate()?;
    let lines = mesh.edge_lines(EDGE_THRESHOLD_DEG);

    let solid = alloc.create_solid(&mesh);
    let wireframe = alloc.create_wireframe(&lines);

    scene.insert(ACTIVE_MODEL, solid, wireframe);
    let removed = scene.remove_older(ACTIVE_MODEL, alloc);

    debug!(
        "swapped in {} ({} vertices, {} triangles), released {} predecessor(s)",
        generator.label(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        removed
    );
    if removed > 1 {
        warn!("found {removed} stale active models, expected at most 1");
    }
    Ok(())
}
