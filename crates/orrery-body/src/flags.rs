//! Toggles and speed read by the integrator each frame.

use std::fmt;
use std::str::FromStr;

/// Slowest speed level.
pub const MIN_SPEED: u8 = 1;
/// Fastest speed level.
pub const MAX_SPEED: u8 = 5;

/// A discrete input that changes [`SimulationFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationEvent {
    ToggleRotation,
    ToggleOrbit,
    SpeedUp,
    SpeedDown,
}

impl SimulationEvent {
    pub const ALL: [Self; 4] = [
        Self::ToggleRotation,
        Self::ToggleOrbit,
        Self::SpeedUp,
        Self::SpeedDown,
    ];

    /// Stable snake_case name, as used in key binding configs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleRotation => "toggle_rotation",
            Self::ToggleOrbit => "toggle_orbit",
            Self::SpeedUp => "speed_up",
            Self::SpeedDown => "speed_down",
        }
    }
}

impl fmt::Display for SimulationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An event name that matches no [`SimulationEvent`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown simulation event '{0}'")]
pub struct ParseEventError(pub String);

impl FromStr for SimulationEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.name() == s)
            .ok_or_else(|| ParseEventError(s.to_string()))
    }
}

/// Process-wide simulation toggles.
///
/// Passed by reference into each frame's update; only
/// [`apply`](Self::apply) changes it, so the speed stays in
/// [`MIN_SPEED`]`..=`[`MAX_SPEED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationFlags {
    rotation: bool,
    orbit: bool,
    speed: u8,
}

impl SimulationFlags {
    /// Build flags, clamping `speed` into range.
    pub fn new(rotation: bool, orbit: bool, speed: u8) -> Self {
        Self {
            rotation,
            orbit,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
        }
    }

    /// Self-rotation enabled.
    pub fn rotation(&self) -> bool {
        self.rotation
    }

    /// Orbital revolution enabled.
    pub fn orbit(&self) -> bool {
        self.orbit
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Apply one input event. Returns whether anything changed.
    pub fn apply(&mut self, event: SimulationEvent) -> bool {
        let before = *self;
        match event {
            SimulationEvent::ToggleRotation => self.rotation = !self.rotation,
            SimulationEvent::ToggleOrbit => self.orbit = !self.orbit,
            SimulationEvent::SpeedUp => {
                if self.speed < MAX_SPEED {
                    self.speed += 1;
                }
            }
            SimulationEvent::SpeedDown => {
                if self.speed > MIN_SPEED {
                    self.speed -= 1;
                }
            }
        }
        *self != before
    }

    /// Human-readable status, one line per toggle.
    pub fn status_lines(&self) -> [String; 3] {
        let state = |on: bool| if on { "Ongoing" } else { "Paused" };
        [
            format!("Orbital Rotation: {}", state(self.orbit)),
            format!("Rotation: {}", state(self.rotation)),
            format!("Speed: {}/{}", self.speed, MAX_SPEED),
        ]
    }
}

impl Default for SimulationFlags {
    fn default() -> Self {
        Self::new(true, false, MIN_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let flags = SimulationFlags::default();
        assert!(flags.rotation());
        assert!(!flags.orbit());
        assert_eq!(flags.speed(), 1);
    }

    #[test]
    fn test_toggles() {
        let mut flags = SimulationFlags::default();
        assert!(flags.apply(SimulationEvent::ToggleRotation));
        assert!(!flags.rotation());
        assert!(flags.apply(SimulationEvent::ToggleOrbit));
        assert!(flags.orbit());
        flags.apply(SimulationEvent::ToggleOrbit);
        assert!(!flags.orbit());
    }

    #[test]
    fn test_speed_bounds() {
        let mut flags = SimulationFlags::default();
        assert!(!flags.apply(SimulationEvent::SpeedDown));
        assert_eq!(flags.speed(), MIN_SPEED);
        for _ in 0..10 {
            flags.apply(SimulationEvent::SpeedUp);
        }
        assert_eq!(flags.speed(), MAX_SPEED);
        assert!(!flags.apply(SimulationEvent::SpeedUp));
        assert!(flags.apply(SimulationEvent::SpeedDown));
        assert_eq!(flags.speed(), 4);
    }

    #[test]
    fn test_new_clamps_speed() {
        assert_eq!(SimulationFlags::new(true, true, 0).speed(), MIN_SPEED);
        assert_eq!(SimulationFlags::new(true, true, 200).speed(), MAX_SPEED);
    }

    #[test]
    fn test_event_names_roundtrip() {
        for event in SimulationEvent::ALL {
            assert_eq!(event.name().parse::<SimulationEvent>(), Ok(event));
        }
        assert_eq!(
            "warp".parse::<SimulationEvent>(),
            Err(ParseEventError("warp".to_string()))
        );
    }

    #[test]
    fn test_status_lines() {
        let flags = SimulationFlags::new(false, true, 3);
        let lines = flags.status_lines();
        assert_eq!(lines[0], "Orbital Rotation: Ongoing");
        assert_eq!(lines[1], "Rotation: Paused");
        assert_eq!(lines[2], "Speed: 3/5");
    }
}
