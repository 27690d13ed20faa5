//! Interaction settings loaded from `config/interaction.toml`.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use super::errors::InteractionConfigError;

const CONFIG_PATH: &str = "config/interaction.toml";
const DEFAULT_KEY: KeyCode = KeyCode::KeyE;

#[derive(Debug, Clone, Deserialize, Default)]
struct RawInteractionConfig {
    #[serde(default)]
    input: RawInputSection,
    #[serde(default)]
    prompt: RawPromptSection,
    #[serde(default)]
    door: RawDoorSection,
    #[serde(default)]
    player: RawPlayerSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawInputSection {
    interact_key: String,
}

impl Default for RawInputSection {
    fn default() -> Self {
        Self {
            interact_key: "E".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPromptSection {
    candle_text: String,
    door_text: String,
    font_size: f32,
}

impl Default for RawPromptSection {
    fn default() -> Self {
        Self {
            candle_text: "Press {key} to light or snuff the candle".to_string(),
            door_text: "Press {key} to open the door".to_string(),
            font_size: 18.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawDoorSection {
    swing_degrees: f32,
    swing_seconds: f32,
}

impl Default for RawDoorSection {
    fn default() -> Self {
        Self {
            swing_degrees: 95.0,
            swing_seconds: 0.8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPlayerSection {
    collider_radius: f32,
}

impl Default for RawPlayerSection {
    fn default() -> Self {
        Self {
            collider_radius: 0.4,
        }
    }
}

/// Runtime interaction settings.
#[derive(Resource, Debug, Clone)]
pub struct InteractionSettings {
    pub interact_key: KeyCode,
    pub candle_prompt: String,
    pub door_prompt: String,
    pub prompt_font_size: f32,
    pub door_swing_radians: f32,
    pub door_swing_seconds: f32,
    pub player_collider_radius: f32,
}

impl InteractionSettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match Self::from_toml_str(&data) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(
                        "Failed to load {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                Self::default()
            }
        }
    }

    pub fn from_toml_str(data: &str) -> Result<Self, InteractionConfigError> {
        let raw = toml::from_str::<RawInteractionConfig>(data)
            .map_err(|err| InteractionConfigError::parse(err.to_string()))?;
        Self::try_from(raw)
    }
}

impl Default for InteractionSettings {
    fn default() -> Self {
        let raw = RawInteractionConfig::default();
        let key_name = raw.input.interact_key.clone();
        Self::from_sections(DEFAULT_KEY, &key_name, raw)
    }
}

impl InteractionSettings {
    fn from_sections(interact_key: KeyCode, key_name: &str, raw: RawInteractionConfig) -> Self {
        let prompt = raw.prompt;
        let door = raw.door;

        Self {
            interact_key,
            candle_prompt: prompt.candle_text.replace("{key}", key_name),
            door_prompt: prompt.door_text.replace("{key}", key_name),
            prompt_font_size: prompt.font_size.max(1.0),
            door_swing_radians: door.swing_degrees.clamp(-180.0, 180.0).to_radians(),
            door_swing_seconds: door.swing_seconds.max(0.01),
            player_collider_radius: raw.player.collider_radius.max(0.0),
        }
    }
}

impl TryFrom<RawInteractionConfig> for InteractionSettings {
    type Error = InteractionConfigError;

    fn try_from(value: RawInteractionConfig) -> Result<Self, Self::Error> {
        let key_name = value.input.interact_key.trim().to_string();
        let interact_key = parse_key_code(&key_name)?;
        Ok(Self::from_sections(interact_key, &key_name, value))
    }
}

/// Resolves a human-readable key name ("E", "f", "Space", "Enter") into a key code.
pub fn parse_key_code(name: &str) -> Result<KeyCode, InteractionConfigError> {
    let upper = name.trim().to_ascii_uppercase();
    let code = match upper.as_str() {
        "A" => KeyCode::KeyA,
        "B" => KeyCode::KeyB,
        "C" => KeyCode::KeyC,
        "D" => KeyCode::KeyD,
        "E" => KeyCode::KeyE,
        "F" => KeyCode::KeyF,
        "G" => KeyCode::KeyG,
        "H" => KeyCode::KeyH,
        "I" => KeyCode::KeyI,
        "J" => KeyCode::KeyJ,
        "K" => KeyCode::KeyK,
        "L" => KeyCode::KeyL,
        "M" => KeyCode::KeyM,
        "N" => KeyCode::KeyN,
        "O" => KeyCode::KeyO,
        "P" => KeyCode::KeyP,
        "Q" => KeyCode::KeyQ,
        "R" => KeyCode::KeyR,
        "S" => KeyCode::KeyS,
        "T" => KeyCode::KeyT,
        "U" => KeyCode::KeyU,
        "V" => KeyCode::KeyV,
        "W" => KeyCode::KeyW,
        "X" => KeyCode::KeyX,
        "Y" => KeyCode::KeyY,
        "Z" => KeyCode::KeyZ,
        "SPACE" => KeyCode::Space,
        "ENTER" | "RETURN" => KeyCode::Enter,
        "TAB" => KeyCode::Tab,
        _ => return Err(InteractionConfigError::unknown_key(name)),
    };
    Ok(code)
}
