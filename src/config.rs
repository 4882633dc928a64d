use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::colors::Color;

/// Tuning for the gradient generators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// Brightness of the first shade sample
    pub shade_min_value: f32,
    /// Brightness of the last shade sample
    pub shade_max_value: f32,
    pub shade_saturation: f32,
    /// Saturation below this counts as gray when blending
    pub achromatic_epsilon: f32,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            shade_min_value: 0.3,
            shade_max_value: 1.0,
            shade_saturation: 1.0,
            achromatic_epsilon: 1e-6,
        }
    }
}

impl GradientConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("shade_min_value", self.shade_min_value),
            ("shade_max_value", self.shade_max_value),
            ("shade_saturation", self.shade_saturation),
        ] {
            if !(0.0..=1.0).contains(&value) {
                bail!("{} must be within [0, 1], got {}", name, value);
            }
        }
        if self.shade_min_value > self.shade_max_value {
            bail!(
                "shade_min_value {} is above shade_max_value {}",
                self.shade_min_value,
                self.shade_max_value
            );
        }
        if !self.achromatic_epsilon.is_finite() || self.achromatic_epsilon < 0.0 {
            bail!("achromatic_epsilon must be a non-negative number");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaletteKind {
    /// Hue-aware blend between two colors (`#RRGGBB` or `0xNNNN`)
    Blend { start: String, end: String },
    /// Brightness ramp of a single hue
    Shade { hue: f32 },
}

/// A gauge palette definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub name: String,
    #[serde(flatten)]
    pub kind: PaletteKind,
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default)]
    pub min: f32,
    #[serde(default = "default_max")]
    pub max: f32,
}

fn default_steps() -> usize {
    8
}

fn default_max() -> f32 {
    100.0
}

impl PaletteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("palette name must not be empty");
        }
        if !(self.min.is_finite() && self.max.is_finite()) || self.min >= self.max {
            bail!(
                "palette '{}' has an invalid range {}..{}",
                self.name,
                self.min,
                self.max
            );
        }
        match &self.kind {
            PaletteKind::Blend { start, end } => {
                if self.steps < 2 {
                    bail!("blend palette '{}' needs at least 2 steps", self.name);
                }
                Color::parse(start)
                    .with_context(|| format!("palette '{}' start color", self.name))?;
                Color::parse(end).with_context(|| format!("palette '{}' end color", self.name))?;
            }
            PaletteKind::Shade { hue } => {
                if self.steps < 1 {
                    bail!("shade palette '{}' needs at least 1 step", self.name);
                }
                if !hue.is_finite() {
                    bail!("shade palette '{}' has a non-finite hue", self.name);
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gradient: GradientConfig,
    pub palettes: Vec<PaletteConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gradient: GradientConfig::default(),
            palettes: vec![
                PaletteConfig {
                    name: "temperature".to_string(),
                    kind: PaletteKind::Blend {
                        start: "#00FF00".to_string(),
                        end: "#FF0000".to_string(),
                    },
                    steps: 8,
                    min: 0.0,
                    max: 100.0,
                },
                PaletteConfig {
                    name: "pressure".to_string(),
                    kind: PaletteKind::Shade { hue: 0.6 },
                    steps: 6,
                    min: 0.0,
                    max: 10.0,
                },
            ],
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json).context("invalid palette config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to load {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.gradient.validate()?;
        for palette in &self.palettes {
            palette.validate()?;
        }
        Ok(())
    }
}

/// Load the config at `path`, falling back to the built-in defaults.
///
/// A missing file is created with the defaults. A file that fails to parse is
/// left untouched.
pub fn load_or_default(path: &Path) -> Result<Config> {
    match Config::load(path) {
        Ok(config) => {
            log::info!(
                "Loaded configuration from {} ({} palettes)",
                path.display(),
                config.palettes.len()
            );
            Ok(config)
        }
        Err(e) => {
            let missing = e
                .downcast_ref::<std::io::Error>()
                .map(|io| io.kind() == ErrorKind::NotFound)
                .unwrap_or(false);
            let config = Config::default();

            if missing {
                log::warn!("No config at {}, using defaults", path.display());
                if let Err(save_err) = config.save(path) {
                    log::warn!("Failed to save default config: {:?}", save_err);
                }
            } else {
                log::warn!("Failed to load config: {:?}, using defaults", e);
            }

            Ok(config)
        }
    }
}
