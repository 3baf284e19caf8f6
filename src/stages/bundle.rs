use std::path::PathBuf;
use crate::config::BundleConfig;
use crate::errors::CheckError;
use crate::models::{Finding, Severity, StageName};
use crate::utils::formatting::{bytes_to_kb, format_kb};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl Artifact {
    pub fn size_kb(&self) -> f64 {
        bytes_to_kb(self.size_bytes)
    }
}

/// Check the main bundle against the size thresholds.
///
/// When the glob matches several files (e.g. multiple hashed chunks), the
/// largest one is treated as the main bundle.
pub fn inspect(artifact_glob: &str, thresholds: &BundleConfig) -> Vec<Finding> {
    match locate_artifact(artifact_glob) {
        Ok(artifact) => {
            let size_kb = artifact.size_kb();
            info!(path = %artifact.path.display(), size_kb, "Inspected bundle");
            vec![classify_size(size_kb, thresholds)]
        }
        Err(e) => {
            warn!(error_type = e.classify(), error = %e, "Bundle inspection failed");
            vec![Finding::warning(
                StageName::BundleSize,
                format!("Could not analyze bundle size: {}", e),
            )]
        }
    }
}

pub fn classify_size(size_kb: f64, thresholds: &BundleConfig) -> Finding {
    let size = format_kb(size_kb);
    let finding = if size_kb > thresholds.critical_kb {
        Finding::new(
            StageName::BundleSize,
            Severity::Critical,
            format!(
                "Main bundle is {} (limit {} KB); consider code splitting with dynamic import() and lazy-loaded routes",
                size, thresholds.critical_kb
            ),
        )
    } else if size_kb > thresholds.warning_kb {
        Finding::warning(
            StageName::BundleSize,
            format!("Main bundle is large: {} (warning above {} KB)", size, thresholds.warning_kb),
        )
    } else if size_kb < thresholds.excellent_kb {
        Finding::info(StageName::BundleSize, format!("Main bundle size is excellent: {}", size))
    } else {
        Finding::info(StageName::BundleSize, format!("Main bundle size is acceptable: {}", size))
    };
    finding.with_value(size_kb)
}

fn locate_artifact(artifact_glob: &str) -> Result<Artifact, CheckError> {
    let entries = glob::glob(artifact_glob)
        .map_err(|e| CheckError::Pattern(format!("Invalid artifact glob '{}': {}", artifact_glob, e)))?;

    let mut largest: Option<Artifact> = None;
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                debug!(error = %e, "Skipping unreadable glob entry");
                continue;
            }
        };
        let metadata = match std::fs::metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping unreadable artifact");
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }
        debug!(path = %path.display(), size = metadata.len(), "Matched artifact");
        let candidate = Artifact { path, size_bytes: metadata.len() };
        if largest.as_ref().map_or(true, |l| candidate.size_bytes > l.size_bytes) {
            largest = Some(candidate);
        }
    }

    largest.ok_or_else(|| CheckError::ArtifactNotFound(artifact_glob.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn write_sized(dir: &TempDir, name: &str, bytes: u64) -> PathBuf {
        let path = dir.path().join(name);
        File::create(&path).unwrap().set_len(bytes).unwrap();
        path
    }

    fn glob_in(dir: &TempDir, pattern: &str) -> String {
        dir.path().join(pattern).to_string_lossy().into_owned()
    }

    #[test]
    fn test_critical_bundle_recommends_code_splitting() {
        let dir = TempDir::new().unwrap();
        write_sized(&dir, "index-a1b2c3.js", 750 * 1024);
        let findings = inspect(&glob_in(&dir, "index-*.js"), &BundleConfig::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Critical);
        assert!(findings[0].message.contains("code splitting"));
        assert_eq!(findings[0].value, Some(750.0));
    }

    #[test]
    fn test_threshold_boundaries() {
        let t = BundleConfig::default();
        assert_eq!(classify_size(500.0, &t).severity, Severity::Warning);
        assert_eq!(classify_size(500.01, &t).severity, Severity::Critical);
        assert_eq!(classify_size(200.0, &t).severity, Severity::Info);
        assert_eq!(classify_size(200.01, &t).severity, Severity::Warning);
    }

    #[test]
    fn test_warning_is_flagged_large() {
        let finding = classify_size(320.0, &BundleConfig::default());
        assert_eq!(finding.severity, Severity::Warning);
        assert!(finding.message.contains("large"));
    }

    #[test]
    fn test_info_tiers() {
        let t = BundleConfig::default();
        let excellent = classify_size(42.0, &t);
        assert_eq!(excellent.severity, Severity::Info);
        assert!(excellent.message.contains("excellent"));

        let acceptable = classify_size(150.0, &t);
        assert_eq!(acceptable.severity, Severity::Info);
        assert!(acceptable.message.contains("acceptable"));

        // At the excellent threshold itself the stronger tier no longer applies
        assert!(classify_size(100.0, &t).message.contains("acceptable"));
    }

    #[test]
    fn test_missing_artifact_is_single_warning() {
        let dir = TempDir::new().unwrap();
        let findings = inspect(&glob_in(&dir, "index-*.js"), &BundleConfig::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("Could not analyze bundle size"));
    }

    #[test]
    fn test_largest_match_is_main_bundle() {
        let dir = TempDir::new().unwrap();
        write_sized(&dir, "index-small.js", 10 * 1024);
        let big = write_sized(&dir, "index-big.js", 300 * 1024);
        write_sized(&dir, "vendor-huge.js", 900 * 1024);

        let artifact = locate_artifact(&glob_in(&dir, "index-*.js")).unwrap();
        assert_eq!(artifact.path, big);
        assert_eq!(artifact.size_kb(), 300.0);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_match_does_not_hide_real_bundle() {
        let dir = TempDir::new().unwrap();
        write_sized(&dir, "index-real.js", 750 * 1024);
        std::os::unix::fs::symlink(dir.path().join("gone.js"), dir.path().join("index-stale.js")).unwrap();

        let findings = inspect(&glob_in(&dir, "index-*.js"), &BundleConfig::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[0].value, Some(750.0));
    }

    #[test]
    fn test_directories_are_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("index-dir.js")).unwrap();
        let result = locate_artifact(&glob_in(&dir, "index-*.js"));
        assert!(matches!(result, Err(CheckError::ArtifactNotFound(_))));
    }

    #[test]
    fn test_invalid_glob() {
        let result = locate_artifact("dist/[assets/*.js");
        assert!(matches!(result, Err(CheckError::Pattern(_))));
    }
}
