//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{NoiseParameters, SceneParams, TerrainConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Driftland")]
#[command(about = "Scrolling procedural noise terrain", long_about = None)]
pub struct Args {
    /// Noise seed
    #[arg(long, default_value_t = 0)]
    pub seed: u32,

    /// Number of noise octaves (0..=10)
    #[arg(
        long,
        default_value_t = 5,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(0..=10)
    )]
    pub octaves: i32,

    /// Amplitude shared by all octaves (1..=10)
    #[arg(
        long,
        default_value_t = 5.0,
        allow_negative_numbers = true,
        value_parser = parse_amplitude
    )]
    pub amplitude: f64,

    /// Per-octave persistence (0..=1)
    #[arg(
        long,
        default_value_t = 0.67,
        allow_negative_numbers = true,
        value_parser = parse_complexity
    )]
    pub complexity: f64,

    /// Scroll speed in planar units per second (0..=25)
    #[arg(
        long,
        default_value_t = 5.0,
        allow_negative_numbers = true,
        value_parser = parse_scroll_speed
    )]
    pub scroll_speed: f64,

    /// Grid segments per side (1..=2048)
    #[arg(long, default_value_t = 100, value_parser = parse_segments)]
    pub segments: usize,

    /// Start with filled triangles instead of wireframe
    #[arg(long)]
    pub solid: bool,

    /// Terrain color as hex RRGGBB (with or without 0x / #)
    #[arg(long, value_name = "HEX", value_parser = parse_hex_color)]
    pub color: Option<u32>,

    /// Write a grayscale heightmap PNG and exit without opening a window
    #[arg(long, value_name = "PATH")]
    pub export_heightmap: Option<PathBuf>,

    /// Elapsed time to evaluate for the heightmap export (seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = 0.0,
        value_parser = parse_export_time
    )]
    pub export_time: f64,
}

impl Args {
    pub fn terrain_config(&self) -> TerrainConfig {
        TerrainConfig {
            segments_x: self.segments,
            segments_y: self.segments,
            noise_seed: self.seed,
            ..Default::default()
        }
    }

    pub fn noise_parameters(&self) -> NoiseParameters {
        NoiseParameters {
            octaves: self.octaves,
            base_scale: self.amplitude,
            complexity: self.complexity,
            scroll_speed: self.scroll_speed,
        }
    }

    pub fn scene_params(&self) -> SceneParams {
        let defaults = SceneParams::default();
        SceneParams {
            color: self.color.unwrap_or(defaults.color),
            wireframe: !self.solid,
            ..defaults
        }
    }
}

fn parse_in_range(s: &str, (min, max): (f64, f64)) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|e| format!("invalid number '{}': {}", s, e))?;
    if !(min..=max).contains(&value) {
        return Err(format!("{} is not in {}..={}", value, min, max));
    }
    Ok(value)
}

fn parse_amplitude(s: &str) -> Result<f64, String> {
    parse_in_range(s, NoiseParameters::BASE_SCALE_RANGE)
}

fn parse_complexity(s: &str) -> Result<f64, String> {
    parse_in_range(s, (0.0, 1.0))
}

fn parse_scroll_speed(s: &str) -> Result<f64, String> {
    parse_in_range(s, NoiseParameters::SCROLL_SPEED_RANGE)
}

fn parse_export_time(s: &str) -> Result<f64, String> {
    parse_in_range(s, (0.0, f64::MAX))
}

fn parse_segments(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|e| format!("invalid segment count '{}': {}", s, e))?;
    if !(1..=TerrainConfig::MAX_SEGMENTS).contains(&value) {
        return Err(format!(
            "{} is not in 1..={}",
            value,
            TerrainConfig::MAX_SEGMENTS
        ));
    }
    Ok(value)
}

fn parse_hex_color(s: &str) -> Result<u32, String> {
    let digits = s
        .trim_start_matches('#')
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    let value = u32::from_str_radix(digits, 16).map_err(|e| format!("invalid color '{}': {}", s, e))?;
    if value > 0xffffff {
        return Err(format!("color '{}' exceeds 0xFFFFFF", s));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_params() {
        let args = Args::parse_from(["driftland"]);
        assert_eq!(args.noise_parameters(), NoiseParameters::default());
        assert_eq!(args.terrain_config().segments_x, 100);
        assert!(args.scene_params().wireframe);
        assert!(args.export_heightmap.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "driftland",
            "--octaves",
            "3",
            "--complexity",
            "0.4",
            "--segments",
            "32",
            "--solid",
            "--color",
            "#00ff00",
        ]);
        let params = args.noise_parameters();
        assert_eq!(params.octaves, 3);
        assert_eq!(params.complexity, 0.4);
        assert_eq!(args.terrain_config().segments_y, 32);

        let scene = args.scene_params();
        assert!(!scene.wireframe);
        assert_eq!(scene.color, 0x00ff00);
    }

    #[test]
    fn test_out_of_range_noise_parameters_rejected() {
        assert!(Args::try_parse_from(["driftland", "--octaves", "-1"]).is_err());
        assert!(Args::try_parse_from(["driftland", "--octaves", "11"]).is_err());
        assert!(Args::try_parse_from(["driftland", "--amplitude=-3"]).is_err());
        assert!(Args::try_parse_from(["driftland", "--amplitude", "0"]).is_err());
        assert!(Args::try_parse_from(["driftland", "--scroll-speed=-5"]).is_err());
        assert!(Args::try_parse_from(["driftland", "--scroll-speed", "26"]).is_err());
        assert!(Args::try_parse_from(["driftland", "--complexity", "1.5"]).is_err());
        assert!(Args::try_parse_from(["driftland", "--complexity", "abc"]).is_err());
        assert!(Args::try_parse_from(["driftland", "--export-time=-1"]).is_err());
    }

    #[test]
    fn test_range_bounds_accepted() {
        let args = Args::try_parse_from([
            "driftland",
            "--octaves",
            "0",
            "--amplitude",
            "10",
            "--scroll-speed",
            "0",
            "--complexity",
            "1",
        ])
        .unwrap();
        let params = args.noise_parameters();
        assert_eq!(params.octaves, 0);
        assert_eq!(params.base_scale, 10.0);
        assert_eq!(params.scroll_speed, 0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_segments_capped() {
        let max = TerrainConfig::MAX_SEGMENTS.to_string();
        let over = (TerrainConfig::MAX_SEGMENTS + 1).to_string();

        let args = Args::try_parse_from(["driftland", "--segments", max.as_str()]).unwrap();
        assert_eq!(args.terrain_config().segments_x, TerrainConfig::MAX_SEGMENTS);
        assert!(Args::try_parse_from(["driftland", "--segments", over.as_str()]).is_err());
        assert!(Args::try_parse_from(["driftland", "--segments", "5000"]).is_err());
        assert!(Args::try_parse_from(["driftland", "--segments", "0"]).is_err());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("0xff0004"), Ok(0xff0004));
        assert_eq!(parse_hex_color("ABCDEF"), Ok(0xabcdef));
        assert!(parse_hex_color("1000000").is_err());
        assert!(parse_hex_color("zz").is_err());
    }
}
