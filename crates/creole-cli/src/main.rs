mod args;
mod macros;

use anyhow::{Context, Result, bail};
use args::Args;
use clap::Parser as _;
use creole_config::Config;
use creole_engine::Parser;
use std::{
    io::{self, Read, Write},
    process,
};

fn main() {
    // Usage errors exit with status 2, help and version with 0
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = load_config(args)?;
    if let Some(url) = &args.base_url {
        config.base_url = Some(url.clone());
    }
    if let Some(url) = &args.image_base_url {
        config.image_base_url = Some(url.clone());
    }
    if let Some(dir) = &args.pages {
        config.pages_dir = Some(dir.clone());
    }

    let mut parser = Parser::with_options(config.to_options()?);
    macros::register_builtin(&mut parser)?;

    let input = match args.input_file() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            input
        }
    };

    let rendered = parser.parse_with_report(&input);
    for warning in &rendered.warnings {
        eprintln!("warning: {warning}");
    }

    match &args.output {
        Some(path) => std::fs::write(path, &rendered.html)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => io::stdout().write_all(rendered.html.as_bytes())?,
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file not found: {}", path.display()),
        },
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!("No config file at {}", Config::config_path().display());
            }
            Ok(config.unwrap_or_default())
        }
    }
}
