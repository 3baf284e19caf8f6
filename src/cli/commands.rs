use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "buildcheck", version, about = "Advisory build-quality checks for a web frontend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Hide the progress spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML configuration file (default: buildcheck.yaml in the project directory)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the project and run all checks (default)
    Run(RunArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct RunArgs {
    /// Project directory; commands run here and relative paths resolve against it
    #[arg(long, default_value = ".")]
    pub project_dir: String,

    /// Print the report as JSON instead of styled text
    #[arg(long)]
    pub json: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            project_dir: ".".to_string(),
            json: false,
        }
    }
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_default_run() {
        let cli = Cli::try_parse_from(["buildcheck"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from(["buildcheck", "-vv", "run", "--json", "--project-dir", "web"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Run(args)) => {
                assert!(args.json);
                assert_eq!(args.project_dir, "web");
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_default_run_args_match_flag_defaults() {
        let cli = Cli::try_parse_from(["buildcheck", "run"]).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => assert_eq!(args.project_dir, RunArgs::default().project_dir),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_validate_requires_path() {
        assert!(Cli::try_parse_from(["buildcheck", "validate"]).is_err());
    }
}
