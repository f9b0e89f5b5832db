//! Game constants, kept as data in `tuning.toml` and baked in at build time.

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use engine::{Color, WindowConfig};
use serde::Deserialize;

const BUILTIN: &str = include_str!("../tuning.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tuning {
    pub window: WindowConfig,
    pub render: RenderTuning,
    pub player: SpriteTuning,
    pub shot: SpriteTuning,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderTuning {
    pub background: [u8; 3],
}

impl RenderTuning {
    pub fn background_color(&self) -> Color {
        let [r, g, b] = self.background;
        Color::rgb8(r, g, b)
    }
}

/// An entity drawn with one image and moved a fixed number of pixels per tick.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpriteTuning {
    pub sprite: PathBuf,
    pub speed: i32,
}

impl Tuning {
    /// The tuning shipped with the game.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN).context("built-in tuning.toml is invalid")
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let tuning: Tuning = toml::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be non-zero, got {}x{}",
            self.window.width,
            self.window.height
        );
        ensure!(self.window.tick_delay_ms > 0, "tick delay must be non-zero");
        ensure!(self.player.speed > 0, "player speed must be positive");
        ensure!(self.shot.speed > 0, "shot speed must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_matches_classic_values() {
        let tuning = Tuning::builtin().unwrap();
        assert_eq!(tuning.window.width, 800);
        assert_eq!(tuning.window.height, 600);
        assert_eq!(tuning.window.tick_delay_ms, 5);
        assert_eq!(tuning.player.speed, 2);
        assert_eq!(tuning.shot.speed, 5);
        assert_eq!(tuning.player.sprite, PathBuf::from("player.png"));
        assert_eq!(tuning.shot.sprite, PathBuf::from("basic_shot.png"));
        assert_eq!(tuning.render.background_color(), Color::BLACK);
    }

    #[test]
    fn rejects_non_positive_speed() {
        let text = BUILTIN.replace("speed = 5", "speed = 0");
        let err = Tuning::from_toml(&text).unwrap_err();
        assert!(err.to_string().contains("shot speed"), "{err}");
    }

    #[test]
    fn rejects_missing_section() {
        assert!(Tuning::from_toml("[window]\ntitle = \"x\"").is_err());
    }
}
