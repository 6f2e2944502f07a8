use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pylaunch::app::run_fixed(pylaunch::profile::MASTER_CONTROL_SYSTEM).await
}
