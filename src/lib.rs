//! Whittle is the finishing stage of a project-scaffolding pipeline.
//! It validates raw template option values before generation and, once a
//! template tree has been rendered, prunes and restructures that tree so
//! only the files relevant to the chosen configuration survive.

/// Command-line interface module for the Whittle application
pub mod cli;

/// Resolved project options and the closed option enums
/// (CI platform, project type, database backend)
pub mod config;

/// Well-known file and directory names of the rendered template tree
pub mod constants;

/// Error types and handling for the Whittle application
pub mod error;

/// Filesystem primitives with explicit present/absent outcomes
pub mod fsops;

/// Post-generation instructions printed for the user
pub mod instructions;

/// Tree reconciliation passes
/// Transforms the rendered template tree into the final project:
/// - CI configuration normalization
/// - project-type layout normalization
/// - database layout reconciliation
/// - optional-folder pruning
pub mod reconciler;

/// Pre-condition validation of raw template option values
pub mod validator;
