//! `ripple`: render pooled circle textures from the command line.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rayon::prelude::*;
use ripple_texture::canvas::save_png;
use ripple_texture::{
    create_circle_texture, BufferPool, CpuSurface, PixelSurface, Rgba, RippleConfig,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "ripple")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// JSON config with texture settings and circle defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Host surface backing the textures
    #[arg(long, value_enum, default_value = "cpu", global = true)]
    host: HostArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HostArg {
    Cpu,
    #[cfg(feature = "skia")]
    Skia,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render one circle to a PNG file
    Circle {
        /// Output file path (PNG)
        #[arg(short, long)]
        output: PathBuf,

        /// Fill color (#rrggbb or #rrggbbaa); overrides the config
        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        width: Option<u32>,

        #[arg(long)]
        height: Option<u32>,

        /// Center x (defaults to width / 2)
        #[arg(long, allow_hyphen_values = true)]
        x: Option<i32>,

        /// Center y (defaults to height / 2)
        #[arg(long, allow_hyphen_values = true)]
        y: Option<i32>,

        #[arg(short, long, allow_hyphen_values = true)]
        radius: Option<i32>,
    },
    /// Acquire, paint and release textures from many threads at once
    Stress {
        /// Number of circles to render
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .parse_filters(&cli.log_level)
        .init();

    let mut config = match &cli.config {
        Some(path) => RippleConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RippleConfig::default(),
    };

    match cli.command {
        Commands::Circle {
            output,
            color,
            width,
            height,
            x,
            y,
            radius,
        } => {
            if let Some(c) = color {
                config.color = c;
            }
            config.width = width.unwrap_or(config.width);
            config.height = height.unwrap_or(config.height);
            config.radius = radius.unwrap_or(config.radius);
            let cx = x.unwrap_or_else(|| default_center(config.width));
            let cy = y.unwrap_or_else(|| default_center(config.height));
            match cli.host {
                HostArg::Cpu => render_one::<CpuSurface>(&config, cx, cy, &output),
                #[cfg(feature = "skia")]
                HostArg::Skia => render_one::<ripple_texture::canvas::SkiaSurface>(
                    &config, cx, cy, &output,
                ),
            }
        }
        Commands::Stress { count } => match cli.host {
            HostArg::Cpu => stress::<CpuSurface>(&config, count),
            #[cfg(feature = "skia")]
            HostArg::Skia => stress::<ripple_texture::canvas::SkiaSurface>(&config, count),
        },
    }
}

/// Both subcommands reject a malformed `color` instead of guessing.
fn parse_fill(config: &RippleConfig) -> Result<Rgba> {
    Rgba::from_hex(&config.color).ok_or_else(|| anyhow!("invalid color {:?}", config.color))
}

/// Half of `size`; always fits in `i32` since `u32::MAX / 2 == i32::MAX`.
fn default_center(size: u32) -> i32 {
    i32::try_from(size / 2).unwrap_or(i32::MAX)
}

/// Base size plus 0, 8, 16 or 24 so reuse has to resize.
fn stress_size(base: u32, i: usize) -> u32 {
    base.saturating_add((i % 4) as u32 * 8)
}

fn render_one<S: PixelSurface>(
    config: &RippleConfig,
    cx: i32,
    cy: i32,
    output: &Path,
) -> Result<()> {
    let color = parse_fill(config)?;
    let pool = BufferPool::<S>::with_settings(config.texture.clone());
    let tex = create_circle_texture(
        &pool,
        color,
        config.width,
        config.height,
        cx,
        cy,
        config.radius,
    )
    .context("rendering circle")?;
    save_png(&tex, output).with_context(|| format!("writing {}", output.display()))?;
    pool.release(tex);
    Ok(())
}

fn stress<S: PixelSurface>(config: &RippleConfig, count: usize) -> Result<()> {
    let pool = BufferPool::<S>::with_settings(config.texture.clone());
    let color = parse_fill(config)?;
    let start = std::time::Instant::now();

    (0..count)
        .into_par_iter()
        .try_for_each(|i| -> Result<()> {
            let size = stress_size(config.width, i);
            let half = default_center(size);
            let tex = create_circle_texture(&pool, color, size, size, half, half, config.radius)?;
            pool.release(tex);
            Ok(())
        })?;

    let stats = pool.stats();
    info!(
        "{} circles in {:.2?}: allocated={} reused={} resized={} rejected={} pooled={}",
        count,
        start.elapsed(),
        stats.allocated,
        stats.reused,
        stats.resized,
        stats.rejected,
        pool.available()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_and_centers_saturate() {
        assert_eq!(stress_size(u32::MAX, 3), u32::MAX);
        assert_eq!(stress_size(100, 5), 108);
        assert_eq!(default_center(u32::MAX), i32::MAX);
        assert_eq!(default_center(129), 64);
    }

    #[test]
    fn malformed_color_is_rejected() {
        let mut config = RippleConfig::default();
        assert_eq!(parse_fill(&config).unwrap(), Rgba::opaque(120, 200, 255));
        config.color = "blue".into();
        assert!(parse_fill(&config).is_err());
    }
}
