use clap::Parser;
use log::error;

use mandelbrot_explorer::{HeadlessArgs, RunHeadlessCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = HeadlessArgs::parse();

    let config = args.viewer.load_config().inspect_err(|e| error!("{e}"))?;
    let command = RunHeadlessCommand::new(config, args.frames, args.commands);

    command.execute().inspect_err(|e| error!("{e}"))?;

    Ok(())
}
