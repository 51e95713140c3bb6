//! Celestial bodies and the per-frame transform pipeline.
//!
//! Each [`Body`] owns an immutable [`RestPose`] generated once at startup and
//! a render [`Mesh`](orrery_mesh::Mesh) that is recomputed from it every
//! frame. The [`orbit`] module advances spin and revolution, [`transform`]
//! turns the rest pose plus current state into world-space buffers, and
//! [`SolarSystem`] ties both into a frame loop that feeds a [`Renderer`].

mod body;
mod error;
mod flags;
pub mod orbit;
mod rest_pose;
mod system;
pub mod transform;

pub use body::{Body, BodyMotion, MIN_SCALING_FACTOR};
pub use error::BodyError;
pub use flags::{MAX_SPEED, MIN_SPEED, ParseEventError, SimulationEvent, SimulationFlags};
pub use rest_pose::{FixupAngles, OrientationFixups, RestPose};
pub use system::{BodySpec, Placement, Renderer, SolarSystem};
