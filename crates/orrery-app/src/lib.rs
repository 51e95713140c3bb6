//! Headless driver for the orrery simulation.
//!
//! Builds the scene from configuration, replays scripted key presses into the
//! simulation flags, and runs the frame loop against a renderer that records
//! what would be uploaded to the GPU.

pub mod error;
pub mod frame_loop;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod run;
pub mod scene;

pub use error::AppError;
pub use run::{RunSummary, run};
