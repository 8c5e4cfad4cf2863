mod args;
mod config;
mod main_lib;

use args::Cli;
use clap::Parser;
use config::Config;
use main_lib::{init_tracing, run};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(&cli);
    init_tracing(&config);

    let output = run(&cli, &config)?;
    println!("{}", output);
    Ok(())
}
