//! The launch flow: locate the interpreter, run the target, report, pause.

use std::{
    ffi::OsString,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crate::{
    config::Settings,
    error::{LaunchError, EXIT_LAUNCH_FAILED},
    printer::Printer,
    process::{self, python, TargetStatus},
    profile::Profile,
};

pub const PAUSE_PROMPT: &str = "Press Enter to continue...";

/// Blocks until the user acknowledges the output.
pub trait Pause {
    fn wait(&mut self) -> io::Result<()>;
}

/// Waits for one line on stdin. EOF counts as acknowledgment.
pub struct StdinPause;

impl Pause for StdinPause {
    fn wait(&mut self) -> io::Result<()> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

pub struct Launcher<W, P> {
    settings: Settings,
    printer: Printer<W>,
    pause: P,
    search_path: Option<(OsString, PathBuf)>,
}

impl<W: Write, P: Pause> Launcher<W, P> {
    pub fn new(settings: Settings, printer: Printer<W>, pause: P) -> Self {
        Self { settings, printer, pause, search_path: None }
    }

    /// Search `path` (resolved against `cwd`) instead of the inherited `PATH`.
    pub fn with_search_path(mut self, path: impl Into<OsString>, cwd: impl Into<PathBuf>) -> Self {
        self.search_path = Some((path.into(), cwd.into()));
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run `profile` start to finish and return the launcher's exit code.
    pub async fn run(&mut self, profile: &Profile) -> Result<i32, LaunchError> {
        let code = match self.launch(profile).await {
            Ok(status) => {
                self.report(profile, status)?;
                self.exit_code_for(status)
            }
            Err(LaunchError::InterpreterNotFound { .. }) => {
                let msg = python::not_found_message(
                    &self.settings.min_version,
                    &self.settings.download_url,
                );
                self.printer.error(&msg)?;
                EXIT_LAUNCH_FAILED
            }
            Err(LaunchError::Spawn { interpreter, source }) => {
                self.printer.error(&failure_notice(profile))?;
                self.printer
                    .error(&format!("failed to start {}: {}", interpreter.display(), source))?;
                EXIT_LAUNCH_FAILED
            }
            Err(err) => return Err(err),
        };
        self.pause()?;
        Ok(code)
    }

    async fn launch(&mut self, profile: &Profile) -> Result<TargetStatus, LaunchError> {
        let interpreter = self.locate_interpreter()?;
        self.printer.announce(&format!("Starting {}...", profile.title()))?;
        process::run_target(&interpreter, &profile.script).await
    }

    pub fn locate_interpreter(&self) -> Result<PathBuf, LaunchError> {
        match &self.search_path {
            Some((path, cwd)) => {
                python::locate_interpreter_in(&self.settings.interpreter, path, cwd)
            }
            None => python::locate_interpreter(&self.settings.interpreter),
        }
    }

    /// Print the failure notice for a non-zero status.
    pub fn report(&mut self, profile: &Profile, status: TargetStatus) -> io::Result<()> {
        if !status.is_success() {
            self.printer.error(&failure_notice(profile))?;
        }
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        if !self.settings.pause {
            return Ok(());
        }
        hold_open(&mut self.printer, &mut self.pause)
    }

    fn exit_code_for(&self, status: TargetStatus) -> i32 {
        if self.settings.propagate_exit {
            status.code().unwrap_or(EXIT_LAUNCH_FAILED)
        } else {
            0
        }
    }

    pub fn into_parts(self) -> (W, P) {
        (self.printer.into_inner(), self.pause)
    }
}

/// Show the pause prompt and wait for acknowledgment.
pub fn hold_open<W: Write, P: Pause>(printer: &mut Printer<W>, pause: &mut P) -> io::Result<()> {
    printer.prompt(PAUSE_PROMPT)?;
    pause.wait()?;
    printer.line("")
}

fn failure_notice(profile: &Profile) -> String {
    format!(
        "An error occurred while running {}. Review the output above for details.",
        profile.title()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[derive(Default)]
    struct CountingPause(usize);

    impl Pause for CountingPause {
        fn wait(&mut self) -> io::Result<()> {
            self.0 += 1;
            Ok(())
        }
    }

    fn launcher(pause: bool) -> Launcher<Vec<u8>, CountingPause> {
        let cfg = Config::from_map([("PYLAUNCH_PAUSE", if pause { "true" } else { "false" })]);
        Launcher::new(
            Settings::from_config(&cfg),
            Printer::new(Vec::new(), false),
            CountingPause::default(),
        )
    }

    fn output(l: Launcher<Vec<u8>, CountingPause>) -> (String, usize) {
        let (out, pause) = l.into_parts();
        (String::from_utf8(out).unwrap(), pause.0)
    }

    #[test]
    fn report_is_silent_on_success() {
        let mut l = launcher(true);
        let profile = Profile::builtin().remove(0);
        l.report(&profile, TargetStatus::SUCCESS).unwrap();
        let (text, pauses) = output(l);
        assert!(text.is_empty());
        assert_eq!(pauses, 0);
    }

    #[test]
    fn report_prints_generic_notice_on_failure() {
        let mut l = launcher(true);
        let profile = Profile::builtin().remove(0);
        l.report(&profile, TargetStatus::new(2)).unwrap();
        l.report(&profile, TargetStatus::killed()).unwrap();
        let (text, _) = output(l);
        let expected = "An error occurred while running Auto Filing Bot. \
                        Review the output above for details.\n";
        assert_eq!(text, expected.repeat(2));
    }

    #[tokio::test]
    async fn missing_interpreter_exits_one_after_pausing() {
        let dir = tempfile::tempdir().unwrap();
        let mut l = launcher(true).with_search_path(dir.path(), dir.path());
        let code = l.run(&Profile::builtin().remove(0)).await.unwrap();
        assert_eq!(code, 1);
        let (text, pauses) = output(l);
        assert!(text.contains("Python not found in PATH"));
        assert!(text.contains("https://www.python.org/downloads/"));
        assert!(!text.contains("Starting"));
        assert!(text.contains(PAUSE_PROMPT));
        assert_eq!(pauses, 1);
    }

    #[tokio::test]
    async fn pause_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut l = launcher(false).with_search_path(dir.path(), dir.path());
        l.run(&Profile::builtin().remove(0)).await.unwrap();
        let (text, pauses) = output(l);
        assert!(!text.contains(PAUSE_PROMPT));
        assert_eq!(pauses, 0);
    }

    #[test]
    fn hold_open_prompts_then_waits() {
        let mut printer = Printer::new(Vec::new(), false);
        let mut pause = CountingPause::default();
        hold_open(&mut printer, &mut pause).unwrap();
        assert_eq!(pause.0, 1);
        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(text, "Press Enter to continue...\n");
    }

    #[test]
    fn exit_code_follows_propagation_setting() {
        let l = launcher(true);
        assert_eq!(l.exit_code_for(TargetStatus::new(3)), 0);

        let cfg = Config::from_map([("PYLAUNCH_PROPAGATE_EXIT", "true")]);
        let l = Launcher::new(
            Settings::from_config(&cfg),
            Printer::new(Vec::new(), false),
            CountingPause::default(),
        );
        assert_eq!(l.exit_code_for(TargetStatus::new(3)), 3);
        assert_eq!(l.exit_code_for(TargetStatus::SUCCESS), 0);
        assert_eq!(l.exit_code_for(TargetStatus::killed()), 1);
    }
}
