//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

/// SVG icon sprite builder
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build one sprite document per icon directory
    #[command(visible_alias = "b")]
    Build {
        /// Output directory (overrides `out_dir` from the config)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        out_dir: Option<PathBuf>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Print the development module served for a virtual id
    #[command(visible_alias = "l")]
    Load {
        /// Virtual module id, e.g. `virtual:svg-icons-register-app`
        id: String,

        /// Write the module to a file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// List symbol ids of every icon directory
    Ids {
        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Arguments shared by all commands
#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Commands {
    pub const fn common(&self) -> &CommonArgs {
        match self {
            Self::Build { common, .. } | Self::Load { common, .. } | Self::Ids { common } => common,
        }
    }
}
