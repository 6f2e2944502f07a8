//! Launchers that check for a Python interpreter on `PATH`, run a target
//! script with inherited stdio, report failure, and pause before exit.

pub mod app;
pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod printer;
pub mod process;
pub mod profile;

pub use error::LaunchError;
pub use launcher::{Launcher, Pause, StdinPause};
pub use process::TargetStatus;
pub use profile::{Profile, ProfileRegistry};
