use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct CheckConfig {
    pub build: BuildConfig,
    pub bundle: BundleConfig,
    pub scan: ScanConfig,
    pub audit: AuditConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BuildConfig {
    pub command: String,
    pub timeout_secs: u64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: "npm run build".to_string(),
            timeout_secs: 600,
        }
    }
}

impl BuildConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Size thresholds in kilobytes for the main bundle.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BundleConfig {
    pub artifact_glob: String,
    pub excellent_kb: f64,
    pub warning_kb: f64,
    pub critical_kb: f64,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            artifact_glob: "dist/assets/index-*.js".to_string(),
            excellent_kb: 100.0,
            warning_kb: 200.0,
            critical_kb: 500.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    pub source_dir: String,
    pub file_patterns: Vec<String>,
    pub pattern: String,
    pub exclude_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_dir: "src".to_string(),
            file_patterns: ["*.js", "*.jsx", "*.ts", "*.tsx"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            pattern: r"console\.log\(".to_string(),
            exclude_dirs: ["node_modules", "dist", "build", ".git", "coverage"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AuditConfig {
    pub command: String,
    pub result_path: String,
    pub timeout_secs: u64,
    pub performance_good: f64,
    pub accessibility_good: f64,
    pub best_practices_good: f64,
    pub seo_good: f64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            command: "npx lighthouse http://localhost:4173 --output=json \
                      --output-path=./lighthouse-report.json \
                      --chrome-flags=\"--headless\" --quiet"
                .to_string(),
            result_path: "lighthouse-report.json".to_string(),
            timeout_secs: 300,
            performance_good: 80.0,
            accessibility_good: 90.0,
            best_practices_good: 90.0,
            seo_good: 90.0,
        }
    }
}

impl AuditConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Resolve a configured path against the project directory unless it is absolute.
pub fn resolve_path(project_dir: &Path, configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_dir.join(path)
    }
}
