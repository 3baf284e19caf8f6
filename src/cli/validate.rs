use std::path::PathBuf;
use crate::cli::commands::ValidateArgs;
use crate::config::parse_config;
use crate::errors::CheckError;

pub async fn handle_validate(args: ValidateArgs) -> Result<(), CheckError> {
    let path = PathBuf::from(&args.config);
    let config = parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    println!(
        "  bundle thresholds: excellent < {} KB, warning > {} KB, critical > {} KB",
        config.bundle.excellent_kb, config.bundle.warning_kb, config.bundle.critical_kb
    );
    Ok(())
}
