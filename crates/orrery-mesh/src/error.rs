//! Mesh generation error types.

/// Invalid parameters passed to the sphere generator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// Fewer sectors than needed to close a ring.
    #[error("sector count must be at least {min}, got {got}")]
    TooFewSectors {
        /// Smallest accepted sector count.
        min: u32,
        /// Value that was passed.
        got: u32,
    },

    /// Fewer stacks than needed to span pole to pole.
    #[error("stack count must be at least {min}, got {got}")]
    TooFewStacks {
        /// Smallest accepted stack count.
        min: u32,
        /// Value that was passed.
        got: u32,
    },

    /// Radius is zero, negative, or not finite.
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}
