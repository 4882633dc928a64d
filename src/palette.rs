// Value-to-color lookup for gauge and chart widgets

use anyhow::{bail, Context, Result};

use crate::colors::Color;
use crate::config::{Config, GradientConfig, PaletteConfig, PaletteKind};
use crate::gradient::{blend_colors_with, shade_gradient_with};

/// An ordered set of colors spread evenly over a value range
#[derive(Debug, Clone, PartialEq)]
pub struct GaugePalette {
    name: String,
    colors: Vec<Color>,
    min_value: f32,
    max_value: f32,
}

impl GaugePalette {
    pub fn blend(name: &str, start: Color, end: Color, steps: usize, min: f32, max: f32) -> Result<Self> {
        Self::blend_with(name, start, end, steps, min, max, &GradientConfig::default())
    }

    pub fn shade(name: &str, hue: f32, steps: usize, min: f32, max: f32) -> Result<Self> {
        Self::shade_with(name, hue, steps, min, max, &GradientConfig::default())
    }

    fn blend_with(
        name: &str,
        start: Color,
        end: Color,
        steps: usize,
        min: f32,
        max: f32,
        gradient: &GradientConfig,
    ) -> Result<Self> {
        let colors = blend_colors_with(start, end, steps, gradient);
        if colors.is_empty() {
            bail!("blend palette '{}' needs at least 2 steps, got {}", name, steps);
        }
        Self::new(name, colors, min, max)
    }

    fn shade_with(
        name: &str,
        hue: f32,
        steps: usize,
        min: f32,
        max: f32,
        gradient: &GradientConfig,
    ) -> Result<Self> {
        let colors = shade_gradient_with(hue, steps, gradient);
        if colors.is_empty() {
            bail!("shade palette '{}' needs at least 1 step", name);
        }
        Self::new(name, colors, min, max)
    }

    pub fn from_config(config: &PaletteConfig, gradient: &GradientConfig) -> Result<Self> {
        config.validate()?;

        match &config.kind {
            PaletteKind::Blend { start, end } => {
                let start = Color::parse(start)?;
                let end = Color::parse(end)?;
                Self::blend_with(&config.name, start, end, config.steps, config.min, config.max, gradient)
            }
            PaletteKind::Shade { hue } => {
                Self::shade_with(&config.name, *hue, config.steps, config.min, config.max, gradient)
            }
        }
    }

    /// Use an explicit list of colors, lowest range bucket first
    pub fn new(name: &str, colors: Vec<Color>, min: f32, max: f32) -> Result<Self> {
        if colors.is_empty() {
            bail!("palette '{}' has no colors", name);
        }
        if !(min.is_finite() && max.is_finite()) || min >= max {
            bail!("palette '{}' has an invalid range {}..{}", name, min, max);
        }

        Ok(Self {
            name: name.to_string(),
            colors,
            min_value: min,
            max_value: max,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min_value, self.max_value)
    }

    /// Color for a reading. Values outside the range stick to the end colors.
    pub fn color_for(&self, value: f32) -> Color {
        if value.is_nan() {
            return self.colors[0];
        }

        let normalized = ((value - self.min_value) / (self.max_value - self.min_value)).clamp(0.0, 1.0);
        let index = (normalized * self.colors.len() as f32) as usize;
        self.colors[index.min(self.colors.len() - 1)]
    }
}

/// Build every palette a config defines
pub fn palettes_from_config(config: &Config) -> Result<Vec<GaugePalette>> {
    config
        .palettes
        .iter()
        .map(|palette| {
            GaugePalette::from_config(palette, &config.gradient)
                .with_context(|| format!("failed to build palette '{}'", palette.name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_clamps_to_ends() {
        let palette = GaugePalette::blend("temp", Color::GREEN, Color::RED, 4, 0.0, 100.0).unwrap();
        let colors = palette.colors().to_vec();

        assert_eq!(palette.color_for(-40.0), colors[0]);
        assert_eq!(palette.color_for(0.0), colors[0]);
        assert_eq!(palette.color_for(100.0), colors[3]);
        assert_eq!(palette.color_for(1000.0), colors[3]);
        assert_eq!(palette.color_for(f32::NAN), colors[0]);
        assert_eq!(palette.color_for(f32::INFINITY), colors[3]);
    }

    #[test]
    fn test_color_for_buckets() {
        let colors = vec![Color::BLUE, Color::GREEN, Color::YELLOW, Color::RED];
        let palette = GaugePalette::new("zones", colors, 0.0, 40.0).unwrap();

        assert_eq!(palette.color_for(5.0), Color::BLUE);
        assert_eq!(palette.color_for(9.99), Color::BLUE);
        assert_eq!(palette.color_for(10.0), Color::GREEN);
        assert_eq!(palette.color_for(25.0), Color::YELLOW);
        assert_eq!(palette.color_for(39.0), Color::RED);
    }

    #[test]
    fn test_invalid_palettes() {
        assert!(GaugePalette::blend("x", Color::GREEN, Color::RED, 1, 0.0, 1.0).is_err());
        assert!(GaugePalette::shade("x", 0.5, 0, 0.0, 1.0).is_err());
        assert!(GaugePalette::shade("x", 0.5, 4, 1.0, 1.0).is_err());
        assert!(GaugePalette::shade("x", 0.5, 4, 0.0, f32::NAN).is_err());
        assert!(GaugePalette::new("x", Vec::new(), 0.0, 1.0).is_err());
    }

    #[test]
    fn test_palettes_from_default_config() {
        let palettes = palettes_from_config(&Config::default()).unwrap();
        assert_eq!(palettes.len(), 2);

        let temperature = &palettes[0];
        assert_eq!(temperature.name(), "temperature");
        assert_eq!(temperature.colors().len(), 8);
        assert_eq!(temperature.colors()[0], Color::GREEN);
        assert_eq!(temperature.colors()[7], Color::RED);
        assert_eq!(temperature.range(), (0.0, 100.0));

        let pressure = &palettes[1];
        assert_eq!(pressure.colors().len(), 6);
        assert_eq!(pressure.range(), (0.0, 10.0));
    }

    #[test]
    fn test_from_config_reports_bad_colors() {
        let mut config = Config::default();
        config.palettes[0].kind = PaletteKind::Blend {
            start: "#00FF00".to_string(),
            end: "not-a-color".to_string(),
        };
        assert!(palettes_from_config(&config).is_err());
    }
}
