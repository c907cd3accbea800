//! Well-known names inside the rendered template tree.
//! The reconciler addresses everything it touches through these, so a
//! template layout change stays a one-line edit here.

/// Application package directory at the project root
pub const APP_DIR: &str = "app";

/// Top-level entry-point script of the rendered template
pub const ENTRY_POINT_FILE: &str = "run.py";

/// GitHub CI configuration directory
pub const GITHUB_CI_DIR: &str = ".github";

/// GitLab CI configuration file
pub const GITLAB_CI_FILE: &str = ".gitlab-ci.yml";

/// Option-qualified roots under the application directory; each holds
/// one subdirectory per database backend until reconciliation.
pub const DB_LAYOUT_ROOTS: [&str; 3] = ["db", "models", "repositories"];

/// Backend subdirectory names the template uses inside the
/// option-qualified roots. Both SQLAlchemy variants share `sqlalchemy`.
pub const BACKEND_DIRS: [&str; 3] = ["sqlalchemy", "sqlmodel", "beanie"];

/// Raw-query helper file of the SQLAlchemy layouts
pub const RAW_QUERIES_FILE: &str = "queries.py";

/// The only files the `sqlalchemy_queries` variant keeps in `db`
pub const QUERY_LAYER_FILES: [&str; 2] = ["session.py", "queries.py"];

/// Alembic configuration file name
pub const ALEMBIC_INI: &str = "alembic.ini";

/// Alembic migrations directory name
pub const MIGRATIONS_DIR: &str = "migrations";

/// ML experimentation directory at the project root
pub const ML_EXP_DIR: &str = "ml_experiments";

/// Python minor versions the generated project may target
pub const PYTHON_VERSIONS: [&str; 5] = ["3.8", "3.9", "3.10", "3.11", "3.12"];
