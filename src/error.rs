use std::{io, path::PathBuf};

/// Exit status when the interpreter is missing or cannot be started.
pub const EXIT_LAUNCH_FAILED: i32 = 1;
/// Exit status for a target that names no profile or script.
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("{name} not found in PATH")]
    InterpreterNotFound { name: String },

    #[error("failed to start {}", .interpreter.display())]
    Spawn {
        interpreter: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown profile or script: {0}")]
    UnknownProfile(String),

    #[error("invalid profiles file {}", .path.display())]
    Profiles {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LaunchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownProfile(_) => EXIT_USAGE,
            _ => EXIT_LAUNCH_FAILED,
        }
    }
}
