//! Tree reconciliation passes.
//! Rewrites an already-rendered template tree into its final shape, driven
//! purely by the resolved [`ProjectOptions`]: unrelated CI configuration
//! goes away, the project-type layout is normalized, the database layout
//! is merged down to the chosen backend, and optional folders are pruned.
//!
//! The passes run strictly in sequence and each is a no-op when its
//! preconditions are already satisfied, so re-running a pass over an
//! already-reconciled tree changes nothing.

use crate::config::{CiPlatform, DatabaseOption, ProjectOptions, ProjectType};
use crate::constants::{
    ALEMBIC_INI, APP_DIR, BACKEND_DIRS, DB_LAYOUT_ROOTS, ENTRY_POINT_FILE, GITHUB_CI_DIR,
    GITLAB_CI_FILE, MIGRATIONS_DIR, ML_EXP_DIR, QUERY_LAYER_FILES, RAW_QUERIES_FILE,
};
use crate::error::{Error, Result};
use crate::fsops;
use crate::instructions;
use log::debug;
use std::fs;
use std::path::Path;

/// Runs the full reconciliation sequence over the rendered tree at
/// `root`. There is no rollback: a defensive failure mid-way leaves the
/// tree partially transformed and aborts the remaining passes.
pub fn reconcile(root: &Path, options: &ProjectOptions) -> Result<()> {
    println!(
        "{}",
        instructions::further_instructions(&options.project_name, &options.git_repo_url)
    );
    remove_unrelated_ci_config(root, options.ci_platform)?;
    normalize_project_layout(root, options.project_type)?;
    reconcile_database_layout(root, options)?;
    prune_optional_folders(root, options)?;
    Ok(())
}

/// Pass A: removes the CI configuration of every platform other than
/// the chosen one.
pub fn remove_unrelated_ci_config(root: &Path, platform: CiPlatform) -> Result<()> {
    debug!("CI normalization for {:?}", platform);
    match platform {
        CiPlatform::Github => {
            fsops::remove_file_if_present(&root.join(GITLAB_CI_FILE))?;
        }
        CiPlatform::Gitlab => {
            fsops::remove_dir_if_present(&root.join(GITHUB_CI_DIR))?;
        }
        CiPlatform::None => {
            fsops::remove_file_if_present(&root.join(GITLAB_CI_FILE))?;
            fsops::remove_dir_if_present(&root.join(GITHUB_CI_DIR))?;
        }
    }
    Ok(())
}

/// Pass B: normalizes the tree to the chosen project type.
///
/// An `empty` project keeps only a bare application directory holding
/// the entry-point script; a full application drops the top-level
/// entry point because the application package itself is the entry.
pub fn normalize_project_layout(root: &Path, project_type: ProjectType) -> Result<()> {
    debug!("Project-type normalization for {:?}", project_type);
    let app_dir = root.join(APP_DIR);
    let entry_point = root.join(ENTRY_POINT_FILE);
    match project_type {
        ProjectType::Empty => {
            fsops::remove_dir_if_present(&app_dir)?;
            fs::create_dir_all(&app_dir)?;
            if !entry_point.is_file() {
                return Err(Error::LayoutError(format!(
                    "expected entry point '{}' at {}",
                    ENTRY_POINT_FILE,
                    root.display()
                )));
            }
            fsops::move_entry(&entry_point, &app_dir.join(ENTRY_POINT_FILE))?;
        }
        ProjectType::FastapiApp => {
            fsops::remove_file_if_present(&entry_point)?;
        }
    }
    Ok(())
}

/// Pass C: merges the option-qualified database layout down to the
/// chosen backend. Skipped for `empty` projects, which have no
/// database layer left after pass B.
pub fn reconcile_database_layout(root: &Path, options: &ProjectOptions) -> Result<()> {
    if options.project_type != ProjectType::FastapiApp {
        return Ok(());
    }
    debug!("Database reconciliation for {:?}", options.database);

    let app_dir = root.join(APP_DIR);
    let layout_roots = DB_LAYOUT_ROOTS.map(|name| app_dir.join(name));
    let [db_root, models_root, repositories_root] = &layout_roots;

    match options.database {
        DatabaseOption::None => {
            for dir in &layout_roots {
                fsops::remove_dir_if_present(dir)?;
            }
            return Ok(());
        }
        DatabaseOption::SqlalchemyOrm => {
            for dir in &layout_roots {
                promote_backend_subtree(dir, options.database)?;
            }
            fsops::remove_file_if_present(&db_root.join(RAW_QUERIES_FILE))?;
            relocate_migration_files(root, db_root)?;
        }
        DatabaseOption::SqlalchemyQueries => {
            promote_backend_subtree(db_root, options.database)?;
            retain_only(db_root, &QUERY_LAYER_FILES)?;
            fsops::remove_dir_if_present(models_root)?;
            fsops::remove_dir_if_present(repositories_root)?;
        }
        DatabaseOption::Sqlmodel | DatabaseOption::Beanie => {
            for dir in &layout_roots {
                promote_backend_subtree(dir, options.database)?;
            }
        }
    }

    for dir in &layout_roots {
        fsops::remove_dir_if_empty(dir)?;
    }

    if options.database != DatabaseOption::SqlalchemyOrm {
        fsops::remove_file_if_present(&root.join(ALEMBIC_INI))?;
    }
    Ok(())
}

/// Pass D: drops folders the user opted out of.
pub fn prune_optional_folders(root: &Path, options: &ProjectOptions) -> Result<()> {
    if !options.include_ml_folder {
        fsops::remove_dir_if_present(&root.join(ML_EXP_DIR))?;
    }
    Ok(())
}

/// Promotes the chosen backend's subtree within one option-qualified
/// root: the sibling backend subdirectories are deleted first, then the
/// chosen subdirectory's entries move up into the root and the emptied
/// subdirectory goes away. A missing root or missing backend
/// subdirectory makes this a no-op.
fn promote_backend_subtree(option_root: &Path, database: DatabaseOption) -> Result<()> {
    let Some(backend) = database.template_dir_name() else {
        return Ok(());
    };
    if !option_root.is_dir() {
        return Ok(());
    }
    for sibling in BACKEND_DIRS {
        if sibling != backend {
            fsops::remove_dir_if_present(&option_root.join(sibling))?;
        }
    }
    let chosen = option_root.join(backend);
    if chosen.is_dir() {
        fsops::move_dir_contents(&chosen, option_root)?;
    }
    Ok(())
}

/// Deletes every entry of `dir` whose name is not on the allow-list.
/// Anything unexpected in the promoted directory is destroyed, files
/// and subdirectories alike.
fn retain_only(dir: &Path, keep: &[&str]) -> Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_str().is_some_and(|n| keep.contains(&n)) {
            continue;
        }
        if entry.file_type()?.is_dir() {
            fsops::remove_dir_if_present(&entry.path())?;
        } else {
            fsops::remove_file_if_present(&entry.path())?;
        }
    }
    Ok(())
}

/// Moves the Alembic configuration and migrations directory from the
/// promoted `db` root to the project root, where the migration tool
/// expects them. The configuration file moves first, before the
/// directory that contained it.
fn relocate_migration_files(root: &Path, db_root: &Path) -> Result<()> {
    let migrations_dir = db_root.join(MIGRATIONS_DIR);
    let bundled_ini = migrations_dir.join(ALEMBIC_INI);
    if bundled_ini.is_file() {
        fsops::move_entry(&bundled_ini, &root.join(ALEMBIC_INI))?;
    }
    if migrations_dir.is_dir() {
        fsops::move_entry(&migrations_dir, &root.join(MIGRATIONS_DIR))?;
    }
    Ok(())
}
