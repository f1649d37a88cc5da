use clap::{value_parser, Arg, Command};

use chrono::prelude::*;
use log::error;
use simplelog::*;

use std::fs::File;
use std::path::PathBuf;
use std::process;

pub mod commands;
pub mod dashboard;
pub mod passphrase;
pub mod utils;

use utils::config::{AppConfig, DEFAULT_CONFIG_PATH};

fn init_logger(
    name: &str,
    config: &AppConfig,
    term_level: LevelFilter,
    mode: TerminalMode,
) -> utils::error::Result<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        Config::default(),
        mode,
        ColorChoice::Auto,
    )];
    if config.log_to_file {
        let dt = Local::now();
        let path = config.log_dir.join(format!(
            "oxiguard_{}_{}.log",
            name,
            dt.format("%Y_%m_%d_%H_%M_%S")
        ));
        loggers.push(WriteLogger::new(
            LevelFilter::Info,
            Config::default(),
            File::create(path)?,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

/// Terminal log level and stream for a subcommand.
fn term_settings(subcommand: &str) -> (LevelFilter, TerminalMode) {
    match subcommand {
        // stdout carries only the password
        "password" => (LevelFilter::Info, TerminalMode::Stderr),
        _ => (LevelFilter::Debug, TerminalMode::Mixed),
    }
}

fn main() {
    let app = Command::new("oxiguard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Host dashboards and passphrase generation for Linux administrators")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .takes_value(true)
                .value_parser(value_parser!(PathBuf))
                .help("Provides a config file to refer to"),
        )
        .subcommand(commands::dashboard::command())
        .subcommand(commands::password::command())
        .get_matches();

    let (name, cmd) = match app.subcommand() {
        Some(sub) => sub,
        None => panic!("No Subcommand Provided!"),
    };
    let config_path = cmd
        .get_one::<PathBuf>("config")
        .or_else(|| app.get_one::<PathBuf>("config"))
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = match AppConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let (level, mode) = term_settings(name);
    if let Err(e) = init_logger(name, &config, level, mode) {
        eprintln!("Failed to set up logging: {}", e);
        process::exit(1);
    }

    let result = match name {
        "dashboard" => commands::dashboard::main(cmd, &config),
        "password" => commands::password::main(cmd, &config),
        x => panic!("Unknown Command: {}", x),
    };
    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
