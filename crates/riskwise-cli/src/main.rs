// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use riskwise_app::{AppCommand, AppState};
use riskwise_catalog::Catalog;
use runtime::RelayGateway;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `riskwise --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let client = riskwise_relay::Client::new(
        config.relay_base_url(),
        config.relay_credentials(),
        config.relay_timeout()?,
    )
    .with_context(|| {
        format!(
            "invalid [relay] config in {}; fix base_url/timeout values",
            options.config_path.display()
        )
    })?;
    if options.check_only {
        return Ok(());
    }

    let catalog = Catalog::builtin();
    let mut gateway = RelayGateway::new(client);

    let mut state = AppState::default();
    state.dispatch(AppCommand::SetSort(config.default_sort()));
    state.dispatch(AppCommand::SetCategory(config.default_category()));
    if !gateway.is_configured() {
        log::info!("no relay credentials; lead submissions run in demo mode");
        state.dispatch(AppCommand::SetStatus(
            "demo mode: relay not configured, leads will not be sent".to_owned(),
        ));
    }

    riskwise_tui::run_app(&mut state, &catalog, &mut gateway)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("riskwise");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config and relay settings");
    println!("  --help                   Show this help");
}
