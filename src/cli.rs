use clap::{ArgAction, Parser};

use pylaunch::{config::Overrides, profile::AUTO_FILING_BOT};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pylaunch",
    about = "Run a Python script after checking the interpreter is on PATH",
    version
)]
pub struct Cli {
    /// Profile name or path to a Python script.
    #[arg(value_name = "TARGET", default_value = AUTO_FILING_BOT)]
    pub target: String,

    /// Interpreter command to look up on PATH.
    #[arg(long)]
    pub interpreter: Option<String>,

    /// Exit without waiting for Enter.
    #[arg(long = "no-pause")]
    pub no_pause: bool,

    /// Exit with the target script's exit code instead of 0.
    #[arg(long = "propagate-exit")]
    pub propagate_exit: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// List available profiles and exit.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            interpreter: self.interpreter.clone(),
            no_pause: self.no_pause,
            propagate_exit: self.propagate_exit,
            no_color: self.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_auto_filing_bot() {
        let cli = Cli::try_parse_from(["pylaunch"]).unwrap();
        assert_eq!(cli.target, AUTO_FILING_BOT);
        assert!(!cli.no_pause);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "pylaunch",
            "master-control-system",
            "--interpreter",
            "python3",
            "--no-pause",
            "--propagate-exit",
            "--no-color",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.target, "master-control-system");
        assert_eq!(cli.verbose, 2);
        let o = cli.overrides();
        assert_eq!(o.interpreter.as_deref(), Some("python3"));
        assert!(o.no_pause && o.propagate_exit && o.no_color);
    }
}
