use thiserror::Error;

/// Top-level error type for the floorplanner.
#[derive(Debug, Error)]
pub enum FloorplanError {
    /// The floorplan has no corners, so it has no bounding box to center on.
    #[error("floorplan is empty: draw at least one segment first")]
    EmptyFloorplan,

    #[error("wall {wall} references corner {corner}, but only {corner_count} corners exist")]
    InvalidWall {
        wall: usize,
        corner: usize,
        corner_count: usize,
    },

    #[error("wall {wall} does not exist; the floorplan has {wall_count} walls")]
    WallNotFound { wall: usize, wall_count: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to load texture {path}: {reason}")]
    Texture { path: String, reason: String },

    #[error("triangulation failed: {0}")]
    Triangulation(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`FloorplanError`].
pub type Result<T> = std::result::Result<T, FloorplanError>;
