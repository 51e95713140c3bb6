//! Errors raised while setting up bodies.

use orrery_mesh::MeshError;

/// Setup-time failures. Nothing in the per-frame path returns these.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    /// The body's sphere could not be generated.
    #[error("invalid mesh for body '{name}': {source}")]
    Mesh {
        name: String,
        #[source]
        source: MeshError,
    },

    /// A rest pose was built with a radius that is not positive.
    #[error("rest pose radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    /// Two bodies share a name.
    #[error("duplicate body name '{0}'")]
    DuplicateName(String),

    /// A placement or pivot names a body that does not exist (placements may
    /// only reference bodies declared earlier).
    #[error("body '{body}' references unknown body '{reference}'")]
    UnknownReference { body: String, reference: String },

    /// A fixed body was given a placement. Fixed bodies are drawn scaled
    /// about the origin, so their position must stay there.
    #[error("fixed body '{0}' cannot be placed away from the origin")]
    PlacedFixedBody(String),

    /// A body was asked to orbit or be placed relative to itself.
    #[error("body '{0}' cannot reference itself")]
    SelfReference(String),
}
