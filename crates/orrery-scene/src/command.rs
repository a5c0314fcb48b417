//! User commands and the key bindings that trigger them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use orrery_config::InputConfig;
use tracing::warn;

/// A user command affecting view or animation state.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Command {
    ToggleLabels,
    ToggleOrbits,
    /// Step the speed multiplier through 0.5, 1, 2, 5.
    CycleSpeed,
    ResetCamera,
    TogglePause,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::ToggleLabels,
        Command::ToggleOrbits,
        Command::CycleSpeed,
        Command::ResetCamera,
        Command::TogglePause,
    ];

    /// Snake-case name used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::ToggleLabels => "toggle_labels",
            Command::ToggleOrbits => "toggle_orbits",
            Command::CycleSpeed => "cycle_speed",
            Command::ResetCamera => "reset_camera",
            Command::TogglePause => "toggle_pause",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command `{0}`")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        Command::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Key name to command lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyBindings {
    bindings: HashMap<String, Command>,
}

impl KeyBindings {
    /// Build from the configured map. Entries naming an unknown command are
    /// skipped with a warning.
    pub fn from_config(input: &InputConfig) -> Self {
        let mut bindings = HashMap::new();
        for (key, name) in &input.keybindings {
            match name.parse::<Command>() {
                Ok(command) => {
                    bindings.insert(key.clone(), command);
                }
                Err(err) => warn!(key = %key, %err, "ignoring key binding"),
            }
        }
        Self { bindings }
    }

    pub fn bind(&mut self, key: impl Into<String>, command: Command) {
        self.bindings.insert(key.into(), command);
    }

    /// The command bound to `key`, if any.
    pub fn resolve(&self, key: &str) -> Option<Command> {
        self.bindings.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names_round_trip() {
        for command in Command::ALL {
            assert_eq!(command.as_str().parse::<Command>(), Ok(command));
        }
        assert_eq!("Reset-Camera".parse::<Command>(), Ok(Command::ResetCamera));
        assert!("warp_drive".parse::<Command>().is_err());
    }

    #[test]
    fn test_space_toggles_labels_by_default() {
        let bindings = KeyBindings::from_config(&InputConfig::default());
        assert_eq!(bindings.resolve("Space"), Some(Command::ToggleLabels));
        assert_eq!(bindings.resolve("KeyQ"), None);
    }

    #[test]
    fn test_unknown_binding_is_skipped() {
        let mut input = InputConfig::default();
        input.keybindings.insert("KeyX".into(), "self_destruct".into());
        input.keybindings.insert("KeyO".into(), "toggle_orbits".into());
        let mut bindings = KeyBindings::from_config(&input);
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.resolve("KeyX"), None);
        assert_eq!(bindings.resolve("KeyO"), Some(Command::ToggleOrbits));

        bindings.bind("KeyP", Command::TogglePause);
        assert_eq!(bindings.resolve("KeyP"), Some(Command::TogglePause));
    }
}
