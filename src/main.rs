use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use make_icons::cli::Cli;
use make_icons::generator;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config()?;

    println!("Image source     : {}", config.source.display());
    println!("Output directory : {}", config.output_dir.display());

    generator::run(&config)?;
    info!("icon generation complete");
    Ok(())
}
