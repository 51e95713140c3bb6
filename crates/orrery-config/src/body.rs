//! Per-body settings: scale, orientation fixups, motion and placement.

use serde::{Deserialize, Serialize};

/// How a body moves each frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum MotionConfig {
    /// Scales in place at the origin.
    Fixed,
    /// Spins and, when `pivot` is set, revolves about that body.
    Orbiting {
        /// Spin rate relative to the primary (1.0 = same rate).
        relative_rate: f32,
        /// Name of the body to revolve around.
        pivot: Option<String>,
    },
}

/// Initial placement on an inclined orbit around an earlier body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacementConfig {
    /// Body to place relative to. Must be declared earlier.
    pub reference: String,
    /// Distance from the reference in scene units.
    pub distance: f32,
    /// Elevation angle in radians.
    pub pitch_rad: f32,
    /// Heading angle in radians.
    pub yaw_rad: f32,
}

/// One body of the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    /// Unique name, also used for pivot and placement references.
    pub name: String,
    /// Radius of the generated sphere.
    pub radius: f32,
    /// Render scale. Must be positive.
    pub scaling_factor: f32,
    /// Linear RGB vertex color.
    pub color: [f32; 3],
    /// Angular rate constant; the sign picks the spin direction.
    pub spin_rate: f32,
    /// Straightening rotation as `(z_deg, x_deg)`.
    pub straighten: (f32, f32),
    /// Axial tilt as `(z_deg, x_deg)`.
    pub axial_tilt: (f32, f32),
    /// Extra re-centering rotation as `(z_deg, x_deg)`, used for backdrops.
    pub center: (f32, f32),
    pub motion: MotionConfig,
    pub placement: Option<PlacementConfig>,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            radius: 1.0,
            scaling_factor: 1.0,
            color: [1.0, 0.0, 0.0],
            spin_rate: -0.0053,
            straighten: (75.0, -90.0),
            axial_tilt: (-23.0, 10.0),
            center: (0.0, 0.0),
            motion: MotionConfig::Fixed,
            placement: None,
        }
    }
}

/// The default scene: a skybox, the sun, the earth and its moon.
///
/// Earth and moon both revolve about the sun, so the moon keeps its
/// offset from the earth while the pair orbits.
pub fn default_bodies() -> Vec<BodyConfig> {
    vec![
        BodyConfig {
            name: "space".to_string(),
            scaling_factor: 4.0,
            ..BodyConfig::default()
        },
        BodyConfig {
            name: "sun".to_string(),
            scaling_factor: 0.15,
            ..BodyConfig::default()
        },
        BodyConfig {
            name: "earth".to_string(),
            scaling_factor: 0.017,
            motion: MotionConfig::Orbiting {
                relative_rate: 1.0,
                pivot: Some("sun".to_string()),
            },
            placement: Some(PlacementConfig {
                reference: "sun".to_string(),
                distance: 1.0,
                pitch_rad: -25.0,
                yaw_rad: -25.0,
            }),
            ..BodyConfig::default()
        },
        BodyConfig {
            name: "moon".to_string(),
            scaling_factor: 0.0085,
            motion: MotionConfig::Orbiting {
                relative_rate: 0.5,
                pivot: Some("sun".to_string()),
            },
            placement: Some(PlacementConfig {
                reference: "earth".to_string(),
                distance: 0.6,
                pitch_rad: -25.0,
                yaw_rad: -25.0,
            }),
            ..BodyConfig::default()
        },
    ]
}
