// Entrypoint for the CLI.
// - Keeps `main` small: read config, parse args, upload, print the status.
// - Every failure prints its cause chain to stderr and exits with 1.

use std::io;
use std::process::ExitCode;

use send_image::{api::Uploader, cli::Cli, config::Config, ui};

fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let cli = Cli::parse_args(std::env::args_os())?;
    let uploader = Uploader::new(config)?;

    let status = ui::with_spinner("Uploading...", || {
        uploader.upload(cli.x, cli.y, &cli.image_path)
    })?;

    // A 4xx/5xx answer is still a completed exchange; report it and exit 0.
    ui::print_status(&mut io::stdout().lock(), &status)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
