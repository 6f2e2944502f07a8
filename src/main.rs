mod cli;

use std::process::ExitCode;

use anyhow::Result;
use pylaunch::{app, logging, profile::ProfileRegistry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::Cli::parse();
    logging::init(args.verbose);

    if args.list {
        return app::exit_code(list_profiles(&args).map(|_| 0));
    }

    app::launch(&args.target, &args.overrides()).await
}

fn list_profiles(args: &cli::Cli) -> Result<()> {
    let settings = app::load_settings(&args.overrides());
    let registry = ProfileRegistry::load(&settings)?;
    for p in registry.list() {
        println!("{}  {}  ({})", p.name, p.title(), p.script.display());
    }
    Ok(())
}
