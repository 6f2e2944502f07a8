//! Python interpreter lookup on the search path.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use crate::error::LaunchError;

/// Find `name` on the inherited `PATH`.
pub fn locate_interpreter(name: &str) -> Result<PathBuf, LaunchError> {
    tracing::debug!(name, "looking up interpreter on PATH");
    let found = which::which(name).map_err(|err| {
        tracing::debug!(name, %err, "interpreter lookup failed");
        LaunchError::InterpreterNotFound { name: name.to_string() }
    })?;
    tracing::info!(path = %found.display(), "interpreter found");
    Ok(found)
}

/// Find `name` on an explicit search path, resolving relative entries against `cwd`.
pub fn locate_interpreter_in<P, C>(
    name: &str,
    search_path: P,
    cwd: C,
) -> Result<PathBuf, LaunchError>
where
    P: AsRef<OsStr>,
    C: AsRef<Path>,
{
    tracing::debug!(name, "looking up interpreter on explicit search path");
    let found = which::which_in(name, Some(search_path), cwd)
        .map_err(|_| LaunchError::InterpreterNotFound { name: name.to_string() })?;
    tracing::info!(path = %found.display(), "interpreter found");
    Ok(found)
}

/// Guidance printed when the interpreter is missing.
pub fn not_found_message(min_version: &str, download_url: &str) -> String {
    format!(
        "Python not found in PATH.\n\
         Please install Python {min_version} or newer from {download_url}\n\
         and make sure it is added to PATH."
    )
}
