//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, FaceSetting};

/// Globe command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "globe", about = "Generate a UV-mapped cubesphere mesh")]
pub struct CliArgs {
    /// Subdivision level (each face row has 2^n + 1 vertices).
    #[arg(long, short = 's', allow_negative_numbers = true)]
    pub subdivision: Option<i32>,

    /// Emit positions only, without texture coordinates.
    #[arg(long)]
    pub positions_only: bool,

    /// Generate all faces or a single one.
    #[arg(long, value_enum)]
    pub face: Option<FaceSetting>,

    /// Fill faces on parallel threads.
    #[arg(long)]
    pub parallel: Option<bool>,

    /// Write the mesh as Wavefront OBJ to this path.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(level) = args.subdivision {
            self.mesh.subdivision = level;
        }
        if args.positions_only {
            self.mesh.uv = false;
        }
        if let Some(face) = args.face {
            self.mesh.faces = face;
        }
        if let Some(parallel) = args.parallel {
            self.mesh.parallel = parallel;
        }
        if let Some(ref path) = args.output {
            self.export.obj_path = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
