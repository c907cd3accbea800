//! Filesystem primitives for the reconciliation passes.
//! Every "remove/move if present" helper reports whether it actually did
//! anything through [`OpOutcome`], so an absent target stays an ordinary
//! no-op while real failures (permissions, races) still propagate as
//! errors instead of being swallowed.

use crate::error::Result;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Outcome of an idempotent filesystem operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpOutcome {
    /// The target existed and the operation ran
    Performed,
    /// The target was absent; nothing to do
    Absent,
}

fn absent_is_ok(err: io::Error) -> io::Result<OpOutcome> {
    if err.kind() == io::ErrorKind::NotFound {
        Ok(OpOutcome::Absent)
    } else {
        Err(err)
    }
}

/// Removes a file if it exists.
pub fn remove_file_if_present(path: &Path) -> Result<OpOutcome> {
    let outcome = match fs::remove_file(path) {
        Ok(()) => OpOutcome::Performed,
        Err(e) => absent_is_ok(e)?,
    };
    if outcome == OpOutcome::Performed {
        debug!("Removed file: {}", path.display());
    }
    Ok(outcome)
}

/// Removes a directory and its contents if it exists.
pub fn remove_dir_if_present(path: &Path) -> Result<OpOutcome> {
    let outcome = match fs::remove_dir_all(path) {
        Ok(()) => OpOutcome::Performed,
        Err(e) => absent_is_ok(e)?,
    };
    if outcome == OpOutcome::Performed {
        debug!("Removed directory: {}", path.display());
    }
    Ok(outcome)
}

/// Removes a directory only when it exists and has no entries.
pub fn remove_dir_if_empty(path: &Path) -> Result<OpOutcome> {
    if !path.is_dir() {
        return Ok(OpOutcome::Absent);
    }
    if fs::read_dir(path)?.next().is_some() {
        return Ok(OpOutcome::Absent);
    }
    fs::remove_dir(path)?;
    debug!("Removed empty directory: {}", path.display());
    Ok(OpOutcome::Performed)
}

/// Moves a file or directory, creating the destination's parent
/// directories first.
pub fn move_entry(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::rename(src, dst)?;
    debug!("Moved {} -> {}", src.display(), dst.display());
    Ok(())
}

/// Moves every entry of `src` into `dst`, then removes the emptied
/// `src` directory. `dst` must already exist.
pub fn move_dir_contents(src: &Path, dst: &Path) -> Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        fs::rename(entry.path(), dst.join(entry.file_name()))?;
    }
    fs::remove_dir(src)?;
    debug!("Promoted contents of {} into {}", src.display(), dst.display());
    Ok(())
}
