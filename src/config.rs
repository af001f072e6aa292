use std::fs;
use std::path::Path;

use egui::Color32;
use log::info;
use serde::{Deserialize, Serialize};

use crate::element::{FINDRULE_VARIATION, TEXT_MAX_LENGTH, TextStyle};
use crate::error::ConfigError;
use crate::layout::{SCREEN_MIN_HEIGHT, SCREEN_MIN_WIDTH};

/// Opaque color stored as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color32 {
    fn from(rgb: Rgb) -> Self {
        Color32::from_rgb(rgb.0, rgb.1, rgb.2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub shape: Rgb,
    /// Highlight for the shape being edited
    pub edit: Rgb,
    pub assist: Rgb,
    pub canvas_background: Rgb,
    pub menu_background: Rgb,
    pub button_active_fill: Rgb,
    pub button_inactive_fill: Rgb,
    pub button_active_fg: Rgb,
    pub button_inactive_fg: Rgb,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            shape: Rgb(255, 255, 255),
            edit: Rgb(192, 192, 192),
            assist: Rgb(192, 192, 192),
            canvas_background: Rgb(0, 0, 0),
            menu_background: Rgb(56, 56, 56),
            button_active_fill: Rgb(40, 40, 40),
            button_inactive_fill: Rgb(56, 56, 56),
            button_active_fg: Rgb(255, 255, 255),
            button_inactive_fg: Rgb(245, 245, 245),
        }
    }
}

/// Editor settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pixel tolerance for hit tests, handle picking and size rejection
    pub tolerance: i32,
    pub assist_radius: i32,
    pub colors: ColorScheme,
    /// Placeholder content and font for new text boxes
    pub text: TextStyle,
    pub button_font_size: f32,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tolerance: FINDRULE_VARIATION,
            assist_radius: 4,
            colors: ColorScheme::default(),
            text: TextStyle::default(),
            button_font_size: 18.0,
            window_width: 1280,
            window_height: 800,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!("Loaded editor configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tolerance <= 0 {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.assist_radius <= 0 {
            return Err(ConfigError::Invalid(format!(
                "assist radius must be positive, got {}",
                self.assist_radius
            )));
        }
        if self.text.font.width <= 0 || self.text.font.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "font size must be positive, got {}x{}",
                self.text.font.width, self.text.font.height
            )));
        }
        let len = self.text.content.chars().count();
        if len > TEXT_MAX_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "text placeholder has {len} characters, limit is {TEXT_MAX_LENGTH}"
            )));
        }
        if self.button_font_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "button font size must be positive, got {}",
                self.button_font_size
            )));
        }
        if self.window_width < SCREEN_MIN_WIDTH || self.window_height < SCREEN_MIN_HEIGHT {
            return Err(ConfigError::Invalid(format!(
                "window {}x{} is below the minimum {SCREEN_MIN_WIDTH}x{SCREEN_MIN_HEIGHT}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EditorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tolerance, FINDRULE_VARIATION);
        assert_eq!(Color32::from(config.colors.shape), Color32::WHITE);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EditorConfig::from_json(r#"{ "tolerance": 6, "colors": { "shape": [255, 0, 0] } }"#).unwrap();
        assert_eq!(config.tolerance, 6);
        assert_eq!(config.colors.shape, Rgb(255, 0, 0));
        assert_eq!(config.colors.edit, ColorScheme::default().edit);
        assert_eq!(config.text, TextStyle::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            EditorConfig::from_json(r#"{ "tolerance": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "window_width": 320 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json("{ tolerance"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = EditorConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(EditorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            EditorConfig::load("/nonexistent/shape_editor.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
