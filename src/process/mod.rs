//! Interpreter process management: lookup, spawn and exit status.

use std::{
    path::{Path, PathBuf},
    process::{ExitStatus, Stdio},
};

use tokio::process::Command;

use crate::error::LaunchError;

pub mod python;

pub use python::{locate_interpreter, locate_interpreter_in};

/// Exit outcome of the target script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetStatus {
    code: Option<i32>,
}

impl TargetStatus {
    pub const SUCCESS: Self = Self { code: Some(0) };

    pub fn new(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Status of a child that was terminated by a signal.
    pub fn killed() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for TargetStatus {
    fn from(status: ExitStatus) -> Self {
        Self { code: status.code() }
    }
}

/// Run `interpreter script` with inherited stdio and wait for it to exit.
pub async fn run_target(interpreter: &Path, script: &Path) -> Result<TargetStatus, LaunchError> {
    if !script.exists() {
        tracing::warn!(script = %script.display(), "target script not found in working directory");
    }

    tracing::info!(
        interpreter = %interpreter.display(),
        script = %script.display(),
        "spawning target"
    );
    let status = Command::new(interpreter)
        .arg(script)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|source| LaunchError::Spawn {
            interpreter: PathBuf::from(interpreter),
            source,
        })?;

    let status = TargetStatus::from(status);
    tracing::info!(code = ?status.code(), "target exited");
    Ok(status)
}
