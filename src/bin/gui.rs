use clap::Parser;
use log::error;

use mandelbrot_explorer::{GuiArgs, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = GuiArgs::parse();

    let config = args.viewer.load_config().inspect_err(|e| error!("{e}"))?;

    RunGuiCommand::new(config)
        .execute()
        .inspect_err(|e| error!("{e}"))?;

    Ok(())
}
