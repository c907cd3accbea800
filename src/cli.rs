//! Command-line interface implementation for Whittle.
//! Provides argument parsing and help text formatting using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for Whittle.
#[derive(Parser, Debug)]
#[command(author, version, about = "Whittle: finishes scaffolded project trees", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate raw template option values before generation
    Validate(ValidateArgs),

    /// Prune and restructure a rendered project tree
    Reconcile(ReconcileArgs),
}

/// Raw option values exactly as the templating front-end collected
/// them; validation happens before any file is rendered.
#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Package/module name of the generated project
    #[arg(long)]
    pub package_name: String,

    /// Target Python minor version (e.g. 3.12)
    #[arg(long)]
    pub python_version: String,

    /// Project type: fastapi_app or empty
    #[arg(long)]
    pub project_type: String,

    /// Database option: sqlalchemy_orm, sqlalchemy_queries, sqlmodel,
    /// beanie or none
    #[arg(long)]
    pub db_option: String,

    /// Whether to keep the ML experimentation folder: y or n
    #[arg(long)]
    pub include_ml_exp_folder: String,
}

/// Resolved option values for the post-generation reconciliation.
/// Either every option flag is given explicitly, or `--stdin` reads
/// them as one JSON answers object.
#[derive(clap::Args, Debug)]
pub struct ReconcileArgs {
    /// Root of the rendered project tree
    #[arg(value_name = "PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Human-readable project name
    #[arg(long)]
    pub project_name: Option<String>,

    /// URL of the repository the project will be pushed to
    #[arg(long)]
    pub git_repo_url: Option<String>,

    /// CI platform: github, gitlab or none
    #[arg(long)]
    pub ci_platform: Option<String>,

    /// Project type: fastapi_app or empty
    #[arg(long)]
    pub project_type: Option<String>,

    /// Database option: sqlalchemy_orm, sqlalchemy_queries, sqlmodel,
    /// beanie or none
    #[arg(long)]
    pub db_option: Option<String>,

    /// Whether to keep the ML experimentation folder: y or n
    #[arg(long)]
    pub include_ml_exp_folder: Option<String>,

    /// Read the answers as a JSON object from stdin
    #[arg(short, long)]
    pub stdin: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
