//! glyphgrid - Main Entry Point

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use glyphgrid::{CellResolution, GridConfig, GridShape, Overrides};
use tracing_subscriber::EnvFilter;

/// Render the 256 single-byte characters of a font into a 1-bit grid
#[derive(Parser, Debug)]
#[command(name = "glyphgrid", version, about)]
struct Cli {
    /// TOML config file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Scalable font to rasterize
    #[arg(short, long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Grid image output (.png, .bmp, .gif, .webp)
    #[arg(short, long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// Text dump output
    #[arg(short, long, value_name = "PATH")]
    text: Option<PathBuf>,

    /// Cell size in pixels [default: 64x64]
    #[arg(long, value_name = "WxH")]
    cell: Option<CellResolution>,

    /// Grid shape in cells [default: 16x16]
    #[arg(long, value_name = "CxR")]
    grid: Option<GridShape>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<GridConfig> {
        let base = match &self.config {
            Some(path) => GridConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GridConfig::default(),
        };

        Ok(base.with_overrides(Overrides {
            font: self.font,
            image: self.image,
            text: self.text,
            cell: self.cell,
            grid: self.grid,
        }))
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config()?;
    tracing::debug!(?config, "resolved configuration");

    glyphgrid::generate(&config, |artifact| println!("{artifact}"))
        .with_context(|| format!("rendering {}", config.font.display()))?;

    Ok(())
}
