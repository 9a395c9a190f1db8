//! `childhealth` - console front end
//!
//! Starts the interactive menu by default; the `vaccines` and `config`
//! subcommands answer one question and exit.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;

use childhealth::cli::{Cli, Command, ConfigCommand, VaccinesCommand};
use childhealth::{init_logging, Config, HealthCareApp, Shell, VaccineKnowledgeBase};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    // Validation of an explicit file must not depend on the active config loading.
    if let Some(Command::Config(ConfigCommand::Validate { file })) = &cli.command {
        handle_validate(file.clone());
        return Ok(());
    }

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        None | Some(Command::Run) => run_shell(&config),
        Some(Command::Vaccines(cmd)) => handle_vaccines(&config, &cmd),
        Some(Command::Config(cmd)) => handle_config(&config, &cmd),
    }
}

fn run_shell(config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(config, stdin.lock(), stdout.lock())
}

/// The session error is returned as is so the report leads with its message.
fn run_session(config: &Config, reader: impl BufRead, out: impl Write) -> anyhow::Result<()> {
    let mut app = HealthCareApp::from_config(config);
    Shell::new(&mut app, reader, out, config.shell.clone()).run()?;
    Ok(())
}

fn handle_vaccines(config: &Config, cmd: &VaccinesCommand) -> anyhow::Result<()> {
    let kb = VaccineKnowledgeBase::with_extra(config.vaccines.extra.clone());

    match (&cmd.disease, cmd.json) {
        (Some(disease), false) => println!("{}", kb.lookup(disease)),
        (Some(disease), true) => {
            let entry = serde_json::json!({
                "disease": disease,
                "known": kb.contains(disease),
                "information": kb.lookup(disease),
            });
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        (None, false) => {
            for disease in kb.diseases() {
                println!("{disease}");
            }
        }
        (None, true) => {
            let names: Vec<&str> = kb.diseases().collect();
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json: true } => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigCommand::Show { json: false } => {
            println!("Current Configuration");
            println!("=====================");
            println!();
            println!("[Shell]");
            println!("  Invalid number:     {}", config.shell.invalid_number);
            println!("  Show banner:        {}", config.shell.show_banner);
            println!();
            println!("[Seed]");
            println!("  Demo account:       {}", config.seed.demo_account);
            println!("  Demo username:      {}", config.seed.demo_username);
            println!();
            println!("[Vaccines]");
            println!("  Extra entries:      {}", config.vaccines.extra.len());
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => handle_validate(file.clone()),
    }
    Ok(())
}

fn handle_validate(file: Option<std::path::PathBuf>) {
    let path = file.unwrap_or_else(Config::default_config_path);
    println!("Validating configuration: {}", path.display());
    match Config::load_from(Some(path)) {
        Ok(_) => println!("Configuration is valid."),
        Err(e) => println!("Configuration error: {e}"),
    }
}
