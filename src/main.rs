use std::process::ExitCode;

use clap::Parser;
use inquiry_core::SubmissionStatus;
use tracing_subscriber::EnvFilter;

use nirvana_studio::{
    Config,
    cli::{Cli, Commands, ConfigCommands},
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // The TUI owns the terminal, so its logs go to a file
    let browsing = matches!(cli.command, None | Some(Commands::Browse { .. }));
    if let Err(e) = init_logging(filter, browsing) {
        eprintln!("warning: file logging unavailable ({e}), logging to stderr");
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .init();
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(filter: &str, to_file: bool) -> anyhow::Result<()> {
    if !to_file {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .init();
        return Ok(());
    }

    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load()?;

    // No subcommand = browse the brochure
    let Some(command) = cli.command else {
        nirvana_studio::tui::run(config, false).await?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Browse { simulate } => {
            nirvana_studio::tui::run(config, simulate).await?;
        }

        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            nirvana_studio::api::serve(&config, &host, port).await?;
        }

        Commands::Inquire(args) => {
            return Ok(
                match nirvana_studio::cli::inquire::run(&args, &config).await {
                    SubmissionStatus::Succeeded => {
                        println!("Request received. The studio will reach out within 24 hours.");
                        ExitCode::SUCCESS
                    }
                    SubmissionStatus::Failed(message) => {
                        eprintln!("error: {message}");
                        ExitCode::FAILURE
                    }
                    SubmissionStatus::Idle | SubmissionStatus::Submitting => ExitCode::FAILURE,
                },
            );
        }

        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let mut shown = config;
                if shown.relay.api_key.is_some() {
                    shown.relay.api_key = Some("<redacted>".to_string());
                }
                println!("{}", toml::to_string_pretty(&shown)?);
            }
            ConfigCommands::Path => {
                let path = Config::config_path()?;
                println!("{}", path.display());
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
