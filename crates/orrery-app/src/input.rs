//! Key names to simulation events.

use std::collections::HashMap;

use orrery_body::{ParseEventError, SimulationEvent, SimulationFlags};
use orrery_config::InputConfig;
use tracing::{info, warn};

/// Resolved key bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyBindings {
    bindings: HashMap<String, SimulationEvent>,
}

impl KeyBindings {
    /// Parse the configured bindings, failing on unknown event names.
    pub fn from_config(input: &InputConfig) -> Result<Self, ParseEventError> {
        let bindings = input
            .keybindings
            .iter()
            .map(|(key, event)| Ok((key.clone(), event.parse::<SimulationEvent>()?)))
            .collect::<Result<HashMap<_, _>, ParseEventError>>()?;
        Ok(Self { bindings })
    }

    /// The event bound to `key`, if any.
    pub fn event_for(&self, key: &str) -> Option<SimulationEvent> {
        self.bindings.get(key).copied()
    }

    /// Feed one key press into `flags`. Returns whether the flags changed.
    pub fn press(&self, key: &str, flags: &mut SimulationFlags) -> bool {
        let Some(event) = self.event_for(key) else {
            warn!(key, "No binding for key");
            return false;
        };
        let changed = flags.apply(event);
        if changed {
            let [orbit, rotation, speed] = flags.status_lines();
            info!(key, %event, "{orbit} | {rotation} | {speed}");
        }
        changed
    }
}
