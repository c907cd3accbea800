//! Pre-condition validation of raw template option values.
//! Runs before any file is rendered, so a rejected configuration leaves
//! no partial output. Each check is independent; the first violation
//! wins and aborts generation.

use crate::constants::PYTHON_VERSIONS;
use crate::error::{Error, Result};
use regex::Regex;

/// Valid package names start with a lowercase letter, continue with
/// lowercase letters, digits, hyphens or underscores, and end with a
/// lowercase letter or digit (three characters minimum).
const PACKAGE_NAME_PATTERN: &str = r"^[a-z][a-z0-9\-_]+[a-z0-9]$";

const PROJECT_TYPES: [&str; 2] = ["fastapi_app", "empty"];
const DB_OPTIONS: [&str; 5] =
    ["sqlalchemy_orm", "sqlalchemy_queries", "sqlmodel", "beanie", "none"];
const YES_NO: [&str; 2] = ["y", "n"];

fn invalid(field: &str, value: &str, allowed: &str) -> Error {
    Error::ValidationError(format!(
        "ERROR: {} '{}' is not valid. Choose from {}.",
        field, value, allowed
    ))
}

fn validate_enum(field: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, value, &allowed.join(", ")))
    }
}

/// Ensures the package/module name is a valid importable name.
pub fn validate_package_name(package_name: &str) -> Result<()> {
    // The pattern is a compile-time constant; building it cannot fail.
    let re = Regex::new(PACKAGE_NAME_PATTERN)
        .map_err(|e| Error::ValidationError(e.to_string()))?;
    if re.is_match(package_name) {
        Ok(())
    } else {
        Err(invalid(
            "package name",
            package_name,
            "lowercase names matching [a-z][a-z0-9-_]+[a-z0-9]",
        ))
    }
}

/// Ensures the target Python version is one of the supported minors.
pub fn validate_python_version(python_version: &str) -> Result<()> {
    validate_enum("Python version", python_version, &PYTHON_VERSIONS)
}

/// Ensures the project type is one of the supported layouts.
pub fn validate_project_type(project_type: &str) -> Result<()> {
    validate_enum("project type", project_type, &PROJECT_TYPES)
}

/// Ensures the database option is one of the supported backends.
pub fn validate_db_option(db_option: &str) -> Result<()> {
    validate_enum("database option", db_option, &DB_OPTIONS)
}

/// Ensures the ml-folder inclusion flag is a y/n answer.
pub fn validate_include_ml_exp_folder(include_ml_exp_folder: &str) -> Result<()> {
    validate_enum(
        "include_ml_exp_folder option",
        include_ml_exp_folder,
        &YES_NO,
    )
}

/// Runs every pre-condition check, stopping at the first violation.
pub fn validate_options(
    package_name: &str,
    python_version: &str,
    project_type: &str,
    db_option: &str,
    include_ml_exp_folder: &str,
) -> Result<()> {
    validate_package_name(package_name)?;
    validate_python_version(python_version)?;
    validate_project_type(project_type)?;
    validate_db_option(db_option)?;
    validate_include_ml_exp_folder(include_ml_exp_folder)?;
    Ok(())
}
