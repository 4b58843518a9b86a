//! Configurable keybindings for the keyboard adapter.
//!
//! Arrow keys are fixed (they are the keyboard cursor); the action keys for
//! confirm, finish and delete can be rebound. Binding strings use the
//! familiar `"Ctrl+Enter"` form, modifiers in any order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions the keyboard adapter can trigger besides panning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Place a vertex / toggle selection / insert on an edge
    Confirm,
    /// Close the ring and enter editing
    Finish,
    /// Cancel the draw or remove the selected vertex
    Delete,
}

/// A single keybinding: a key name with optional modifiers.
///
/// Shift is deliberately not part of a binding; it is reserved as the pan
/// precision modifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parses a binding string like `"Ctrl+Enter"` or `"Delete"`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty keybinding string".to_string());
        }

        let mut ctrl = false;
        let mut alt = false;
        let mut key = None;

        for part in s.split('+').map(str::trim) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "alt" => alt = true,
                "shift" => {
                    return Err(format!(
                        "'{s}': Shift is reserved as the pan precision modifier"
                    ));
                }
                "" => return Err(format!("'{s}': empty component")),
                _ => {
                    if key.is_some() {
                        return Err(format!("'{s}': more than one key"));
                    }
                    key = Some(part.to_string());
                }
            }
        }

        match key {
            Some(key) => Ok(Self { key, ctrl, alt }),
            None => Err(format!("'{s}': no key, only modifiers")),
        }
    }

    pub fn matches(&self, key: &str, ctrl: bool, alt: bool) -> bool {
        self.ctrl == ctrl && self.alt == alt && self.key.eq_ignore_ascii_case(key)
    }
}

/// The `[keys]` config section: binding strings per action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_confirm")]
    pub confirm: Vec<String>,
    #[serde(default = "default_finish")]
    pub finish: Vec<String>,
    #[serde(default = "default_delete")]
    pub delete: Vec<String>,
}

fn default_confirm() -> Vec<String> {
    vec!["Enter".to_string(), "Space".to_string()]
}

fn default_finish() -> Vec<String> {
    vec!["f".to_string()]
}

fn default_delete() -> Vec<String> {
    vec![
        "Delete".to_string(),
        "Backspace".to_string(),
        "Escape".to_string(),
    ]
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            confirm: default_confirm(),
            finish: default_finish(),
            delete: default_delete(),
        }
    }
}

impl KeybindingsConfig {
    /// Parses all binding strings into a lookup map.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, KeyAction>, String> {
        let mut map = HashMap::new();
        for (strings, action) in [
            (&self.confirm, KeyAction::Confirm),
            (&self.finish, KeyAction::Finish),
            (&self.delete, KeyAction::Delete),
        ] {
            for s in strings {
                let binding = KeyBinding::parse(s)?;
                if let Some(previous) = map.insert(binding, action) {
                    if previous != action {
                        return Err(format!("'{s}' is bound to two different actions"));
                    }
                }
            }
        }
        Ok(map)
    }
}
