pub mod geometry;
pub mod renderer;
pub mod scene;
pub mod ui;
