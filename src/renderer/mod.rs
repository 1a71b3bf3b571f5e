pub mod camera;
pub mod gpu;
pub mod model;

pub use camera::{Camera, FrameUniforms};
pub use gpu::{GpuState, generate_grid_vertices};
pub use model::GpuSurface;
