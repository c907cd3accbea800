//! Resolved project options for the reconciliation run.
//! The option values arrive as plain strings (CLI flags or a JSON answers
//! object on stdin) and are parsed once into closed enums; every pass then
//! receives the same immutable [`ProjectOptions`] by reference.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

/// CI platform the generated project will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiPlatform {
    Github,
    Gitlab,
    None,
}

impl FromStr for CiPlatform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "github" => Ok(Self::Github),
            "gitlab" => Ok(Self::Gitlab),
            "none" => Ok(Self::None),
            other => Err(Error::ConfigError(format!(
                "unsupported CI platform '{}'",
                other
            ))),
        }
    }
}

/// Overall shape of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    FastapiApp,
    Empty,
}

impl FromStr for ProjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fastapi_app" => Ok(Self::FastapiApp),
            "empty" => Ok(Self::Empty),
            other => Err(Error::ConfigError(format!(
                "unsupported project type '{}'",
                other
            ))),
        }
    }
}

/// Database backend of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseOption {
    None,
    SqlalchemyOrm,
    SqlalchemyQueries,
    Sqlmodel,
    Beanie,
}

impl DatabaseOption {
    /// Name of the backend subdirectory inside the option-qualified
    /// roots (`db`, `models`, `repositories`). Both SQLAlchemy variants
    /// share one subtree; `None` has no subtree at all.
    pub fn template_dir_name(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::SqlalchemyOrm | Self::SqlalchemyQueries => Some("sqlalchemy"),
            Self::Sqlmodel => Some("sqlmodel"),
            Self::Beanie => Some("beanie"),
        }
    }
}

impl FromStr for DatabaseOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Self::None),
            "sqlalchemy_orm" => Ok(Self::SqlalchemyOrm),
            "sqlalchemy_queries" => Ok(Self::SqlalchemyQueries),
            "sqlmodel" => Ok(Self::Sqlmodel),
            "beanie" => Ok(Self::Beanie),
            other => Err(Error::ConfigError(format!(
                "unsupported database option '{}'",
                other
            ))),
        }
    }
}

/// Raw answers as the templating front-end hands them over, either as
/// CLI flags or as a JSON object on stdin. Field names match the
/// template's answer keys.
#[derive(Debug, Deserialize)]
pub struct RawOptions {
    pub project_name: String,
    pub git_repo_url: String,
    pub ci_platform: String,
    pub project_type: String,
    pub db_option: String,
    pub include_ml_exp_folder: String,
}

/// Fully resolved options driving one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub project_name: String,
    pub git_repo_url: String,
    pub ci_platform: CiPlatform,
    pub project_type: ProjectType,
    pub database: DatabaseOption,
    pub include_ml_folder: bool,
}

impl ProjectOptions {
    /// Resolves raw string answers into typed options.
    ///
    /// # Errors
    /// * `Error::ConfigError` for any value outside its enumerated
    ///   domain. The validator rejects these before generation, so a
    ///   failure here means the front-end bypassed validation.
    pub fn resolve(raw: &RawOptions) -> Result<Self> {
        let include_ml_folder = match raw.include_ml_exp_folder.as_str() {
            "y" => true,
            "n" => false,
            other => {
                return Err(Error::ConfigError(format!(
                    "unsupported include_ml_exp_folder value '{}'",
                    other
                )))
            }
        };

        Ok(Self {
            project_name: raw.project_name.clone(),
            git_repo_url: raw.git_repo_url.clone(),
            ci_platform: raw.ci_platform.parse()?,
            project_type: raw.project_type.parse()?,
            database: raw.db_option.parse()?,
            include_ml_folder,
        })
    }
}

/// Reads a JSON answers object from stdin, the same shape the
/// templating front-end feeds to its post-generation hooks.
pub fn load_answers_from_stdin() -> Result<RawOptions> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    load_answers(&buffer)
}

/// Parses a JSON answers object into [`RawOptions`].
pub fn load_answers(content: &str) -> Result<RawOptions> {
    serde_json::from_str(content.trim())
        .map_err(|e| Error::ConfigError(format!("invalid answers JSON: {}", e)))
}
