use anyhow::Result;
use clap::Parser;
use core_runtime::logging::init_logging;
use tracing::debug;

use onboard::cli::{Cli, Commands};
use onboard::commands;
use onboard::OnboardFlags;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (logging, warning) = commands::logging_config(&cli)?;
    if let Err(e) = init_logging(logging) {
        if !cli.command.is_best_effort() {
            return Err(e.into());
        }
        eprintln!("{}", e);
    }
    if let Some(warning) = warning {
        eprintln!("{}", warning);
    }
    debug!(command = ?cli.command, "Starting onboard");

    match &cli.command {
        Commands::AuthOptions(args) => {
            let flags = commands::auth_options_flags(args);
            let config = commands::build_config(cli.root.as_deref(), None, flags)?;
            println!("{}", commands::auth_options(&config, args)?);
        }
        Commands::AuthHint(args) => {
            let flags = commands::auth_hint_flags(args);
            let config = commands::build_config(cli.root.as_deref(), None, flags)?;
            println!("{}", commands::auth_hint(&config, args));
        }
        Commands::PatchModels(args) => {
            // Post-install step: report problems but always exit 0.
            let config = match commands::build_config(
                cli.root.as_deref(),
                args.models_path.as_deref(),
                OnboardFlags::default(),
            ) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Could not patch models: {:#}", e);
                    return Ok(());
                }
            };

            let outcome = commands::patch_models(&config);
            if args.json {
                println!("{}", serde_json::to_string(&outcome)?);
            } else if outcome.is_failed() {
                eprintln!(
                    "{}",
                    commands::render_patch_outcome(config.style_renderer.as_ref(), &outcome)
                );
            } else {
                println!(
                    "{}",
                    commands::render_patch_outcome(config.style_renderer.as_ref(), &outcome)
                );
            }
        }
    }

    Ok(())
}
