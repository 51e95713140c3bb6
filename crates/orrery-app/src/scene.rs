//! Turns configured bodies into a [`SolarSystem`].

use glam::Vec3;
use orrery_body::{
    BodyError, BodyMotion, BodySpec, FixupAngles, OrientationFixups, Placement, SolarSystem,
};
use orrery_config::{BodyConfig, Config, MeshConfig, MotionConfig};

fn angles((z_deg, x_deg): (f32, f32)) -> FixupAngles {
    FixupAngles::new(z_deg, x_deg)
}

/// Build the simulation spec for one configured body.
pub fn body_spec(body: &BodyConfig, mesh: &MeshConfig) -> BodySpec {
    let motion = match &body.motion {
        MotionConfig::Fixed => BodyMotion::Fixed,
        MotionConfig::Orbiting {
            relative_rate,
            pivot,
        } => BodyMotion::Orbiting {
            relative_rate: *relative_rate,
            pivot: pivot.clone(),
        },
    };
    let placement = body.placement.as_ref().map(|p| Placement {
        reference: p.reference.clone(),
        distance: p.distance,
        pitch: p.pitch_rad,
        yaw: p.yaw_rad,
    });

    BodySpec {
        name: body.name.clone(),
        radius: body.radius,
        sector_count: mesh.sector_count,
        stack_count: mesh.stack_count,
        scaling_factor: body.scaling_factor,
        spin_rate: body.spin_rate,
        color: Vec3::from_array(body.color),
        fixups: OrientationFixups {
            straighten: angles(body.straighten),
            axial_tilt: angles(body.axial_tilt),
            center: angles(body.center),
        },
        motion,
        placement,
    }
}

/// Generate every configured body.
pub fn build(config: &Config) -> Result<SolarSystem, BodyError> {
    let specs: Vec<BodySpec> = config
        .bodies
        .iter()
        .map(|body| body_spec(body, &config.mesh))
        .collect();
    SolarSystem::from_specs(&specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_config::PlacementConfig;

    #[test]
    fn test_default_scene_builds() {
        let mut config = Config::default();
        config.mesh.sector_count = 8;
        config.mesh.stack_count = 4;
        let system = build(&config).unwrap();
        assert_eq!(system.len(), 4);

        let sun = system.body("sun").unwrap();
        assert_eq!(sun.motion, BodyMotion::Fixed);
        assert!((sun.scaling_factor() - 0.15).abs() < 1e-7);

        let earth = system.body("earth").unwrap().position;
        let moon = system.body("moon").unwrap().position;
        assert!((earth.length() - 1.0).abs() < 1e-5);
        assert!(((moon - earth).length() - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_body_spec_conversion() {
        let body = BodyConfig {
            name: "mars".to_string(),
            radius: 2.0,
            color: [0.8, 0.3, 0.1],
            straighten: (10.0, 20.0),
            motion: MotionConfig::Orbiting {
                relative_rate: 0.9,
                pivot: Some("sun".to_string()),
            },
            placement: Some(PlacementConfig {
                reference: "sun".to_string(),
                distance: 1.5,
                pitch_rad: 0.1,
                yaw_rad: 0.2,
            }),
            ..BodyConfig::default()
        };
        let spec = body_spec(&body, &MeshConfig::default());
        assert_eq!(spec.name, "mars");
        assert_eq!(spec.radius, 2.0);
        assert_eq!(spec.sector_count, 36);
        assert_eq!(spec.color, Vec3::new(0.8, 0.3, 0.1));
        assert_eq!(spec.fixups.straighten, FixupAngles::new(10.0, 20.0));
        assert_eq!(
            spec.motion,
            BodyMotion::Orbiting {
                relative_rate: 0.9,
                pivot: Some("sun".to_string())
            }
        );
        let placement = spec.placement.unwrap();
        assert_eq!(placement.distance, 1.5);
        assert_eq!(placement.yaw, 0.2);
    }

    #[test]
    fn test_unknown_pivot_fails() {
        let mut config = Config::default();
        config.mesh.sector_count = 4;
        config.mesh.stack_count = 2;
        config.bodies[3].motion = MotionConfig::Orbiting {
            relative_rate: 0.5,
            pivot: Some("jupiter".to_string()),
        };
        assert!(matches!(build(&config), Err(BodyError::UnknownReference { .. })));
    }
}
