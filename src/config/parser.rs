use std::path::Path;
use crate::errors::CheckError;
use super::types::CheckConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_FILE: &str = "buildcheck.yaml";

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<CheckConfig, CheckError> {
    if !path.exists() {
        return Err(CheckError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await.map_err(|e| unreadable(path, e))?;
    if !metadata.is_file() {
        return Err(CheckError::Config(format!("Config path is not a file: {}", path.display())));
    }
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(CheckError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await.map_err(|e| unreadable(path, e))?;
    if content.trim().is_empty() {
        return Ok(CheckConfig::default());
    }
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    validate_schema(&yaml)?;

    let config: CheckConfig = serde_yaml::from_value(yaml)?;

    validate_config(&config)?;

    Ok(config)
}

fn unreadable(path: &Path, e: std::io::Error) -> CheckError {
    CheckError::Config(format!("Cannot read config file {}: {}", path.display(), e))
}

/// Load an explicitly requested config file, or `buildcheck.yaml` from the
/// project directory when present, or fall back to built-in defaults.
pub async fn load_or_default(
    explicit: Option<&Path>,
    project_dir: &Path,
) -> Result<CheckConfig, CheckError> {
    if let Some(path) = explicit {
        return parse_config(path).await;
    }

    let default_path = project_dir.join(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        info!(path = %default_path.display(), "Loading project config");
        parse_config(&default_path).await
    } else {
        Ok(CheckConfig::default())
    }
}

/// Schema violations are logged, not fatal.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), CheckError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| CheckError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| CheckError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

/// Semantic checks the schema cannot express.
pub fn validate_config(config: &CheckConfig) -> Result<(), CheckError> {
    let bundle = &config.bundle;
    for (name, value) in [
        ("excellent_kb", bundle.excellent_kb),
        ("warning_kb", bundle.warning_kb),
        ("critical_kb", bundle.critical_kb),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(CheckError::Config(format!(
                "bundle.{} must be a non-negative number, got {}",
                name, value
            )));
        }
    }
    if bundle.warning_kb >= bundle.critical_kb {
        return Err(CheckError::Config(format!(
            "bundle.warning_kb ({}) must be below bundle.critical_kb ({})",
            bundle.warning_kb, bundle.critical_kb
        )));
    }
    if bundle.excellent_kb > bundle.warning_kb {
        return Err(CheckError::Config(format!(
            "bundle.excellent_kb ({}) must not exceed bundle.warning_kb ({})",
            bundle.excellent_kb, bundle.warning_kb
        )));
    }

    let audit = &config.audit;
    for (name, value) in [
        ("performance_good", audit.performance_good),
        ("accessibility_good", audit.accessibility_good),
        ("best_practices_good", audit.best_practices_good),
        ("seo_good", audit.seo_good),
    ] {
        if !(0.0..=100.0).contains(&value) {
            return Err(CheckError::Config(format!(
                "audit.{} must be between 0 and 100, got {}",
                name, value
            )));
        }
    }

    let scan = &config.scan;
    if scan.file_patterns.is_empty() {
        return Err(CheckError::Config("scan.file_patterns must not be empty".into()));
    }
    for pattern in &scan.file_patterns {
        glob::Pattern::new(pattern).map_err(|e| {
            CheckError::Config(format!("Invalid file pattern '{}': {}", pattern, e))
        })?;
    }
    regex::Regex::new(&scan.pattern).map_err(|e| {
        CheckError::Config(format!("Invalid scan pattern '{}': {}", scan.pattern, e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&CheckConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_inverted_thresholds() {
        let mut config = CheckConfig::default();
        config.bundle.warning_kb = 600.0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("warning_kb"));
    }

    #[test]
    fn test_validate_excellent_above_warning() {
        let mut config = CheckConfig::default();
        config.bundle.excellent_kb = 300.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_score_out_of_range() {
        let mut config = CheckConfig::default();
        config.audit.seo_good = 120.0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("seo_good"));
    }

    #[test]
    fn test_validate_bad_regex() {
        let mut config = CheckConfig::default();
        config.scan.pattern = "console.log(".to_string();
        assert!(matches!(validate_config(&config), Err(CheckError::Config(_))));
    }

    #[test]
    fn test_validate_empty_file_patterns() {
        let mut config = CheckConfig::default();
        config.scan.file_patterns.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_nan_threshold() {
        let mut config = CheckConfig::default();
        config.bundle.critical_kb = f64::NAN;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("critical_kb"));
    }

    #[test]
    fn test_validate_nan_score() {
        let mut config = CheckConfig::default();
        config.audit.performance_good = f64::NAN;
        assert!(validate_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_parse_config_rejects_yaml_nan() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("buildcheck.yaml");
        std::fs::write(&path, "bundle:\n  warning_kb: .nan\n").unwrap();
        assert!(matches!(parse_config(&path).await, Err(CheckError::Config(_))));
    }

    #[tokio::test]
    async fn test_parse_config_directory_is_config_error() {
        let dir = TempDir::new().unwrap();
        let result = parse_config(dir.path()).await;
        assert!(matches!(result, Err(CheckError::Config(_))));
    }

    #[tokio::test]
    async fn test_parse_config_non_utf8_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("buildcheck.yaml");
        std::fs::write(&path, [0xff, 0xfe, b'a', b':', 0x80]).unwrap();
        let err = parse_config(&path).await.unwrap_err();
        assert!(matches!(err, CheckError::Config(_)));
        assert!(err.to_string().contains("Cannot read config file"));
    }

    #[tokio::test]
    async fn test_parse_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = parse_config(&dir.path().join("nope.yaml")).await;
        assert!(matches!(result, Err(CheckError::Config(_))));
    }

    #[tokio::test]
    async fn test_parse_config_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("buildcheck.yaml");
        std::fs::write(&path, "bundle:\n  critical_kb: 800\naudit:\n  performance_good: 70\n").unwrap();
        let config = parse_config(&path).await.unwrap();
        assert_eq!(config.bundle.critical_kb, 800.0);
        assert_eq!(config.audit.performance_good, 70.0);
        assert_eq!(config.audit.seo_good, 90.0);
    }

    #[tokio::test]
    async fn test_parse_config_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("buildcheck.yaml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(parse_config(&path).await.unwrap(), CheckConfig::default());
    }

    #[tokio::test]
    async fn test_load_or_default_without_file() {
        let dir = TempDir::new().unwrap();
        let config = load_or_default(None, dir.path()).await.unwrap();
        assert_eq!(config, CheckConfig::default());
    }

    #[tokio::test]
    async fn test_load_or_default_picks_up_project_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "build:\n  command: make dist\n").unwrap();
        let config = load_or_default(None, dir.path()).await.unwrap();
        assert_eq!(config.build.command, "make dist");
    }

    #[tokio::test]
    async fn test_parse_config_rejects_conflicting_thresholds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("buildcheck.yaml");
        std::fs::write(&path, "bundle:\n  warning_kb: 500\n  critical_kb: 400\n").unwrap();
        assert!(parse_config(&path).await.is_err());
    }
}
