use buildcheck::cli::{self, Cli, Commands};
use buildcheck::errors::CheckError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let result = match cli.command {
        Some(Commands::Validate(args)) => cli::validate::handle_validate(args).await,
        Some(Commands::Run(args)) => cli::run::handle_run(args, cli.config, !cli.quiet).await,
        None => cli::run::handle_run(Default::default(), cli.config, !cli.quiet).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let exit_code = match &e {
            CheckError::Config(_) | CheckError::Yaml(_) => 2,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}
