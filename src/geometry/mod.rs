pub mod curves;
pub mod extrude;
pub mod generators;
pub mod mesh;
pub mod params;
pub mod primitives;
pub mod sweep;
pub mod text;

pub use generators::{ShapeGenerator, ShapeKind, create_generator};
pub use mesh::MeshData;
pub use params::{Control, ParamBinding, ParamDomain, ParamSpec};

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("{context} produced a non-finite coordinate")]
    NonFinite { context: &'static str },
    #[error("{name} must be positive (got {value})")]
    InvalidSegmentCount { name: &'static str, value: i64 },
    #[error("triangulation failed: {0}")]
    Triangulation(String),
    #[error("failed to load font {path}: {reason}")]
    FontLoad { path: String, reason: String },
    #[error("{0} geometry is not implemented")]
    Unimplemented(&'static str),
}

/// Rejects a segment/step count of zero before it reaches a mesh builder.
pub(crate) fn require_positive(name: &'static str, value: u32) -> Result<(), GeometryError> {
    if value == 0 {
        return Err(GeometryError::InvalidSegmentCount {
            name,
            value: value as i64,
        });
    }
    Ok(())
}
