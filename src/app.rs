//! Entry points shared by the `pylaunch` binary and the fixed launchers.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::{
    config::{Config, Overrides, Settings},
    error::{LaunchError, EXIT_LAUNCH_FAILED},
    launcher::{hold_open, Launcher, StdinPause},
    printer::Printer,
    profile::{Profile, ProfileRegistry},
};

pub fn load_settings(overrides: &Overrides) -> Settings {
    Settings::from_config(&Config::load()).apply(overrides)
}

/// Resolve `target` against the profile registry and launch it.
pub async fn launch(target: &str, overrides: &Overrides) -> ExitCode {
    let settings = load_settings(overrides);
    let result = match resolve(target, &settings) {
        Ok(profile) => run_profile(&settings, &profile).await,
        Err(err) => Err(err),
    };
    finish(result, &settings)
}

/// Main body of a launcher bound to one built-in profile. Arguments are ignored.
pub async fn run_fixed(name: &str) -> ExitCode {
    crate::logging::init(0);
    let settings = load_settings(&Overrides::default());
    let result = match Profile::builtin_named(name) {
        Some(profile) => run_profile(&settings, &profile).await,
        None => Err(LaunchError::UnknownProfile(name.to_string()).into()),
    };
    finish(result, &settings)
}

fn resolve(target: &str, settings: &Settings) -> Result<Profile> {
    let registry = ProfileRegistry::load(settings)?;
    let profile = registry.resolve(target)?;
    tracing::debug!(
        profile = %profile.name,
        script = %profile.script.display(),
        "resolved target"
    );
    Ok(profile)
}

async fn run_profile(settings: &Settings, profile: &Profile) -> Result<i32> {
    let printer = Printer::stdout(settings.color);
    let mut launcher = Launcher::new(settings.clone(), printer, StdinPause);
    let code = launcher
        .run(profile)
        .await
        .with_context(|| format!("launching {}", profile.title()))?;
    Ok(code)
}

/// Like [`exit_code`], but errors are held on screen until acknowledged.
pub fn finish(result: Result<i32>, settings: &Settings) -> ExitCode {
    if result.is_ok() || !settings.pause {
        return exit_code(result);
    }
    let code = exit_code(result);
    let mut printer = Printer::stdout(settings.color);
    if let Err(err) = hold_open(&mut printer, &mut StdinPause) {
        tracing::debug!(%err, "pause after error failed");
    }
    code
}

/// Map a launch result onto a process exit code, printing any error.
pub fn exit_code(result: Result<i32>) -> ExitCode {
    match result {
        Ok(code) => to_exit_code(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<LaunchError>()
                .map(LaunchError::exit_code)
                .unwrap_or(EXIT_LAUNCH_FAILED);
            to_exit_code(code)
        }
    }
}

fn to_exit_code(code: i32) -> ExitCode {
    u8::try_from(code)
        .map(ExitCode::from)
        .unwrap_or_else(|_| ExitCode::from(EXIT_LAUNCH_FAILED as u8))
}
