//! The simulation run: setup, scripted input, frame loop.

use glam::Vec3;
use orrery_body::SimulationFlags;
use orrery_config::Config;
use tracing::info;

use crate::error::AppError;
use crate::frame_loop::FrameLoop;
use crate::input::KeyBindings;
use crate::renderer::StatsRenderer;
use crate::scene;

/// Final state of one body after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySummary {
    pub name: String,
    pub position: Vec3,
    /// Rotation angle wrapped into `[0, 2π)`.
    pub angle: f32,
    pub draws: u64,
}

/// Outcome of [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub flags: SimulationFlags,
    pub bodies: Vec<BodySummary>,
    pub uploaded_bytes: u64,
}

/// Build the scene from `config`, replay `presses`, then run the frame loop.
pub fn run(config: &Config, presses: &[String]) -> Result<RunSummary, AppError> {
    config.validate()?;
    let bindings = KeyBindings::from_config(&config.input)?;

    let sim = &config.simulation;
    let mut flags = SimulationFlags::new(sim.rotation, sim.orbit, sim.speed);
    for key in presses {
        bindings.press(key, &mut flags);
    }

    let mut system = scene::build(config)?;
    info!(
        bodies = system.len(),
        sectors = config.mesh.sector_count,
        stacks = config.mesh.stack_count,
        "Scene ready"
    );
    for line in flags.status_lines() {
        info!("{line}");
    }

    let mut renderer = StatsRenderer::new(config.debug.log_frames);
    let mut frame_loop = FrameLoop::new(sim.target_fps, sim.frames);
    frame_loop.run(|_| system.frame(&flags, &mut renderer));

    info!(
        frames = frame_loop.frame_count(),
        seconds = frame_loop.elapsed().as_secs_f64(),
        "Simulation finished"
    );

    let bodies = system
        .bodies()
        .iter()
        .map(|body| BodySummary {
            name: body.name().to_string(),
            position: body.position,
            angle: body.display_angle(),
            draws: renderer.body(body.name()).map_or(0, |stats| stats.draws),
        })
        .collect();

    Ok(RunSummary {
        frames: frame_loop.frame_count(),
        flags,
        bodies,
        uploaded_bytes: renderer.uploaded_bytes(),
    })
}
