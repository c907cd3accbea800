//! Whittle's main application entry point and orchestration logic.
//! Handles command-line argument parsing and dispatches to the
//! pre-generation validator or the post-generation tree reconciler.

use whittle::{
    cli::{get_args, Args, Command, ReconcileArgs},
    config::{self, ProjectOptions, RawOptions},
    error::{default_error_handler, Error, Result},
    reconciler, validator,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn require(value: Option<String>, flag: &str) -> Result<String> {
    value.ok_or_else(|| Error::ConfigError(format!("missing required option --{}", flag)))
}

/// Collects the raw answers for a reconciliation run, either from the
/// explicit flags or as a JSON object on stdin.
fn collect_answers(args: ReconcileArgs) -> Result<RawOptions> {
    if args.stdin {
        return config::load_answers_from_stdin();
    }
    Ok(RawOptions {
        project_name: require(args.project_name, "project-name")?,
        git_repo_url: require(args.git_repo_url, "git-repo-url")?,
        ci_platform: require(args.ci_platform, "ci-platform")?,
        project_type: require(args.project_type, "project-type")?,
        db_option: require(args.db_option, "db-option")?,
        include_ml_exp_folder: require(args.include_ml_exp_folder, "include-ml-exp-folder")?,
    })
}

/// Main application logic execution.
///
/// # Flow
/// * `validate` checks the raw option values and stays silent on success
/// * `reconcile` resolves the answers into [`ProjectOptions`] and runs
///   the reconciliation passes over the rendered tree
fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Validate(v) => validator::validate_options(
            &v.package_name,
            &v.python_version,
            &v.project_type,
            &v.db_option,
            &v.include_ml_exp_folder,
        ),
        Command::Reconcile(r) => {
            let project_dir = r.project_dir.clone();
            let raw = collect_answers(r)?;
            let options = ProjectOptions::resolve(&raw)?;
            reconciler::reconcile(&project_dir, &options)
        }
    }
}
