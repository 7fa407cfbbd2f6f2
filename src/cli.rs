// Command-line flags. Anything given here wins over the config file.

use crate::config::AnimationConfig;
use crate::error::Error;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "glyph-pressure", version, about = "Variable-font text that swells under the pointer")]
pub struct Args {
    /// TOML file with animation settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Text to animate
    #[arg(long)]
    pub text: Option<String>,

    /// Gradient stops, comma separated (e.g. "#3b82f6,#9333ea")
    #[arg(long, value_delimiter = ',')]
    pub colors: Option<Vec<String>>,

    /// Seconds per gradient loop
    #[arg(long)]
    pub animation_speed: Option<f64>,

    /// Width axis follows the pointer
    #[arg(long, action = ArgAction::Set)]
    pub width: Option<bool>,

    /// Weight axis follows the pointer
    #[arg(long, action = ArgAction::Set)]
    pub weight: Option<bool>,

    /// Italic axis follows the pointer
    #[arg(long, action = ArgAction::Set)]
    pub italic: Option<bool>,

    /// Baseline font size in pixels
    #[arg(long)]
    pub min_font_size: Option<f32>,

    /// Window (or snapshot) size, WIDTHxHEIGHT
    #[arg(long, default_value = "1280x480", value_parser = parse_size)]
    pub size: (usize, usize),

    /// Render headlessly and write a PNG here instead of opening a window
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Snapshot pointer position, X,Y
    #[arg(long, value_parser = parse_point, requires = "snapshot")]
    pub pointer: Option<(f64, f64)>,

    /// Snapshot frame count
    #[arg(long, default_value_t = 120)]
    pub frames: u32,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied, validated.
    pub fn resolve_config(&self) -> Result<AnimationConfig, Error> {
        let mut config = match &self.config {
            Some(path) => AnimationConfig::load(path)?,
            None => AnimationConfig::default(),
        };
        if let Some(text) = &self.text { config.text = text.clone(); }
        if let Some(colors) = &self.colors { config.colors = colors.clone(); }
        if let Some(v) = self.animation_speed { config.animation_speed = v; }
        if let Some(v) = self.width { config.width = v; }
        if let Some(v) = self.weight { config.weight = v; }
        if let Some(v) = self.italic { config.italic = v; }
        if let Some(v) = self.min_font_size { config.min_font_size = v; }
        config.validate()?;
        Ok(config)
    }
}

fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let w: usize = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let h: usize = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    if w == 0 || h == 0 {
        return Err("size must be non-zero".into());
    }
    Ok((w, h))
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_without_flags() {
        let args = Args::try_parse_from(["glyph-pressure"]).unwrap();
        assert_eq!(args.size, (1280, 480));
        assert_eq!(args.resolve_config().unwrap(), AnimationConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from([
            "glyph-pressure",
            "--text", "Hey",
            "--colors", "#000,#fff",
            "--width", "false",
            "--italic", "true",
            "--min-font-size", "64",
        ])
        .unwrap();
        let c = args.resolve_config().unwrap();
        assert_eq!(c.text, "Hey");
        assert_eq!(c.colors, vec!["#000", "#fff"]);
        assert!(!c.width && c.weight && c.italic);
        assert_eq!(c.min_font_size, 64.0);
    }

    #[test]
    fn snapshot_flags() {
        let args = Args::try_parse_from([
            "glyph-pressure", "--snapshot", "out.png", "--pointer", "10,20.5", "--size", "320x200",
        ])
        .unwrap();
        assert_eq!(args.pointer, Some((10.0, 20.5)));
        assert_eq!(args.size, (320, 200));
        assert_eq!(args.frames, 120);
    }

    #[test]
    fn pointer_needs_snapshot() {
        assert!(Args::try_parse_from(["glyph-pressure", "--pointer", "1,2"]).is_err());
    }

    #[test]
    fn bad_override_fails_validation() {
        let args = Args::try_parse_from(["glyph-pressure", "--animation-speed", "0"]).unwrap();
        assert!(matches!(args.resolve_config(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn parses_sizes() {
        assert_eq!(parse_size("800x600"), Ok((800, 600)));
        assert!(parse_size("800").is_err());
        assert!(parse_size("0x10").is_err());
    }
}
