//! CLI command parsing.

pub mod inquire;

use clap::{Parser, Subcommand};
use inquiry_core::ProjectType;

/// Nirvana Interiors - studio brochure and consultation relay.
#[derive(Parser)]
#[command(name = "nirvana")]
#[command(about = "Studio brochure and consultation relay for Nirvana Interiors")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the studio brochure.
    #[command(visible_alias = "b")]
    Browse {
        /// Answer booking requests locally instead of calling the endpoint.
        #[arg(long)]
        simulate: bool,
    },

    /// Start the consultation relay endpoint.
    Serve {
        /// Host to bind to (defaults to the configured host).
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (defaults to the configured port).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Send one consultation request and report the outcome.
    Inquire(InquireArgs),

    /// Manage configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Fields of a consultation request.
#[derive(Debug, Clone, clap::Args)]
pub struct InquireArgs {
    /// Client name.
    #[arg(long)]
    pub name: String,

    /// Client email, used as the reply-to address.
    #[arg(long)]
    pub email: String,

    /// Project type (Residential, Commercial, "Bespoke Art", Other).
    #[arg(short = 't', long = "type", default_value = "Residential")]
    pub project_type: ProjectType,

    /// Budget range, free text.
    #[arg(long, default_value = "")]
    pub budget: String,

    /// Space, timeline and aspirations.
    #[arg(short, long)]
    pub message: String,

    /// Endpoint URL (overrides the configured endpoint).
    #[arg(long, env = "NIRVANA_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Answer locally instead of calling the endpoint.
    #[arg(long)]
    pub simulate: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration.
    Show,

    /// Show the configuration file path.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_no_args() {
        let cli = Cli::parse_from(["nirvana"]);
        assert_eq!(cli.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::parse_from(["nirvana", "-v"]);
        assert_eq!(cli.verbose, 1);

        let cli = Cli::parse_from(["nirvana", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn cli_parses_browse_alias() {
        let cli = Cli::parse_from(["nirvana", "b", "--simulate"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Browse { simulate: true })
        ));
    }

    #[test]
    fn cli_parses_serve_without_overrides() {
        let cli = Cli::parse_from(["nirvana", "serve"]);
        match cli.command {
            Some(Commands::Serve { host, port }) => {
                assert!(host.is_none());
                assert!(port.is_none());
            }
            _ => panic!("expected Serve command"),
        }
    }

    #[test]
    fn cli_parses_serve_with_custom_host_port() {
        let cli = Cli::parse_from(["nirvana", "serve", "-H", "0.0.0.0", "-p", "8080"]);
        match cli.command {
            Some(Commands::Serve { host, port }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            _ => panic!("expected Serve command"),
        }
    }

    #[test]
    fn cli_parses_inquire() {
        let cli = Cli::parse_from([
            "nirvana",
            "inquire",
            "--name",
            "Asha",
            "--email",
            "asha@x.com",
            "--type",
            "bespoke art",
            "-m",
            "Need a kitchen redesign",
        ]);
        match cli.command {
            Some(Commands::Inquire(args)) => {
                assert_eq!(args.name, "Asha");
                assert_eq!(args.project_type, ProjectType::BespokeArt);
                assert!(args.budget.is_empty());
                assert!(!args.simulate);
            }
            _ => panic!("expected Inquire command"),
        }
    }

    #[test]
    fn cli_rejects_unknown_project_type() {
        let result = Cli::try_parse_from([
            "nirvana", "inquire", "--name", "A", "--email", "a@b.c", "--type", "warehouse", "-m",
            "hi",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_config_show() {
        let cli = Cli::parse_from(["nirvana", "config", "show"]);
        match cli.command {
            Some(Commands::Config { command }) => {
                assert!(matches!(command, ConfigCommands::Show));
            }
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn cli_verbose_is_global() {
        let cli = Cli::parse_from(["nirvana", "serve", "-v"]);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
