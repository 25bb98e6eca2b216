//! svg-icons - build SVG icon sprites from the command line.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use svg_icons::SvgIconsConfig;
use svg_icons::cli::{self, Cli, Commands};
use svg_icons::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.command.common().verbose);

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config = SvgIconsConfig::load(&cli.config, &cwd)?;

    match &cli.command {
        Commands::Build { out_dir, .. } => cli::build::build_sprites(config, out_dir.as_deref()),
        Commands::Load { id, output, .. } => cli::load::load_module(config, id, output.as_deref()),
        Commands::Ids { .. } => cli::ids::list_ids(config),
    }
}
