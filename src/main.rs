use anyhow::{bail, Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;

use log::{info, warn};
use panel_color::config::{load_or_default, Config};
use panel_color::palette::{palettes_from_config, GaugePalette};
use panel_color::{logging, Color};

/// `panel-color-preview [--log LEVEL] [config.json]`
#[derive(Debug, Default, PartialEq)]
struct Args {
    log_level: Option<String>,
    config_path: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = OsString>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg == "--log" {
            let level = args.next().context("--log needs a level")?;
            parsed.log_level = Some(level.to_string_lossy().into_owned());
        } else if parsed.config_path.is_none() {
            parsed.config_path = Some(PathBuf::from(arg));
        } else {
            bail!("unexpected argument {:?}", arg);
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    logging::init_logger().context("failed to install logger")?;

    let args = parse_args(std::env::args_os().skip(1))?;
    if let Some(level) = &args.log_level {
        if !logging::set_max_level_from_str(level) {
            warn!("Unknown log level '{}', keeping the current one", level);
        }
    }

    let config = match args.config_path {
        Some(path) => load_or_default(&path)?,
        None => {
            info!("No config given, using built-in palettes");
            Config::default()
        }
    };

    let palettes = palettes_from_config(&config)?;
    info!("Previewing {} palettes", palettes.len());

    for palette in &palettes {
        print_palette(palette);
    }

    Ok(())
}

fn print_palette(palette: &GaugePalette) {
    let (min, max) = palette.range();
    println!("{} ({} .. {})", palette.name(), min, max);

    let swatches: Vec<String> = palette.colors().iter().map(|c| swatch(*c)).collect();
    println!("  {}", swatches.join(""));

    for color in palette.colors() {
        println!("  {} {} {}", swatch(*color), color, color.to_hex_string());
    }

    // Sample readings across the range, including one past each end
    let span = max - min;
    let readings = [min - span * 0.1, min, min + span * 0.5, max, max + span * 0.1];
    for reading in readings {
        let color = palette.color_for(reading);
        info!("{}: {:.2} -> {}", palette.name(), reading, color);
    }
}

/// Two-cell block in 24-bit terminal color
fn swatch(color: Color) -> String {
    let (r, g, b) = color.to_rgb888();
    format!("\x1b[48;2;{};{};{}m  \x1b[0m", r, g, b)
}
