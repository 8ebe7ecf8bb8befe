use clap::Parser;
use std::io;
use std::path::Path;

mod cli;
mod api;
mod core;
mod models;
mod generators;
mod upstream;
mod logging;

use crate::cli::{Args, CliCommand};
use crate::cli::handlers::{generation_options, handle_generate, handle_score, read_password};
use crate::core::config::Config;
use crate::core::service::PasswordService;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let command = args.command.unwrap_or(CliCommand::Serve { port: None });

    let (mut config, warnings) = Config::load();
    if let CliCommand::Serve { port: Some(port) } = command {
        config.web_port = port;
    }

    if let Err(e) = config.validate() {
        for warning in &warnings {
            eprintln!("⚠️  {warning}");
        }
        eprintln!("❌ Invalid configuration: {e}");
        std::process::exit(1);
    }

    logging::init(&config)?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    match command {
        CliCommand::Serve { .. } => serve(config).await,

        CliCommand::Generate(args) => {
            let options = generation_options(&args, config.default_password_length);

            match handle_generate(&options, args.count, args.strength) {
                Ok(lines) => {
                    for line in lines {
                        println!("{line}");
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        CliCommand::Score { password } => {
            let password = match password {
                Some(password) => password,
                None => read_password(io::stdin().lock()).unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }),
            };
            println!("{}", handle_score(&password));
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<(), io::Error> {
    log::info!("🔐 Starting Passforge password service");

    let service = PasswordService::from_config(&config).map_err(|e| {
        log::error!("Failed to set up upstream generator: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    api::start_server(config, service).await.map_err(|e| {
        log::error!("API server failed: {}", e);
        e
    })?;

    log::info!("✅ Passforge shutdown complete.");
    Ok(())
}
