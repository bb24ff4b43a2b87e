#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
#![warn(clippy::expect_used)]

use crate::app_config::AppConfig;
use api::ApiClient;
use args::{CliArgs, Command};
use clap::{CommandFactory, Parser};
use commands::{
    auth::auth_cmd, completions::completions_cmd, config::config_cmd, init::init_cmd,
    profile::profile_cmd, resource::resource_cmd, sms::sms_cmd, AlreadyReported,
};
use formatters::TerminalNotifier;
use listing::{Consultations, Contracts, Customers, Properties};
use profile::{get_profile_config_path, resolve_profile_name, Profile};
use tracing_subscriber::EnvFilter;

mod api;
mod app_config;
mod args;
mod browse;
mod commands;
mod formatters;
mod listing;
mod messages;
mod profile;

#[cfg(test)]
mod test;

fn main() {
    if let Err(err) = run() {
        if err.downcast_ref::<AlreadyReported>().is_none() {
            eprintln!("Error: {:#}", err);
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    setup_tracing();

    let args = CliArgs::parse();

    let Some(command) = args.command else {
        CliArgs::command().print_help()?;
        return Ok(());
    };

    // Neither needs a resolved profile
    let command = match command {
        Command::Profile(subcommand) => return profile_cmd(subcommand),
        Command::Completions { shell } => {
            completions_cmd(shell);
            return Ok(());
        }
        command => command,
    };

    let profile_name = resolve_profile_name(&args.config.profile);
    let profile_path = get_profile_config_path(&profile_name);
    let profile = Profile::from_path(&profile_path)?;
    let config = AppConfig::from_args(args.config, &profile_name, &profile_path, profile.as_ref());

    let notifier = TerminalNotifier::stderr();

    match command {
        Command::Config => config_cmd(&config)?,
        Command::Init(init_args) => init_cmd(&config, init_args, &profile_path)?,
        Command::Contract(subcommand) => {
            resource_cmd::<Contracts>(&ApiClient::from_config(&config)?, &config, subcommand, &notifier)?
        }
        Command::Customer(subcommand) => {
            resource_cmd::<Customers>(&ApiClient::from_config(&config)?, &config, subcommand, &notifier)?
        }
        Command::Property(subcommand) => {
            resource_cmd::<Properties>(&ApiClient::from_config(&config)?, &config, subcommand, &notifier)?
        }
        Command::Consultation(subcommand) => resource_cmd::<Consultations>(
            &ApiClient::from_config(&config)?,
            &config,
            subcommand,
            &notifier,
        )?,
        Command::Sms(subcommand) => {
            sms_cmd(&ApiClient::from_config(&config)?, &config, subcommand, &notifier)?
        }
        Command::Auth(subcommand) => auth_cmd(&ApiClient::from_config(&config)?, subcommand, &notifier)?,
        Command::Profile(_) | Command::Completions { .. } => {}
    }

    Ok(())
}

/// Logs go to stderr so list output on stdout stays pipeable
fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("broker=warn,broker_core=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
