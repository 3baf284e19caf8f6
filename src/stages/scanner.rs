use std::path::Path;
use regex::Regex;
use crate::errors::CheckError;
use crate::models::{Finding, StageName};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanTotals {
    pub matches: usize,
    pub files_scanned: usize,
    pub files_with_matches: usize,
}

/// Count debug statements across the source tree. A clean tree yields no
/// findings; any match yields exactly one Warning carrying the total.
pub fn scan(
    root_dir: &Path,
    file_patterns: &[String],
    pattern: &Regex,
    exclude_dirs: &[String],
) -> Vec<Finding> {
    match count_matches(root_dir, file_patterns, pattern, exclude_dirs) {
        Ok(totals) => {
            info!(
                root = %root_dir.display(),
                matches = totals.matches,
                files = totals.files_scanned,
                "Pattern scan complete"
            );
            if totals.matches == 0 {
                return Vec::new();
            }
            vec![Finding::warning(
                StageName::PatternScan,
                format!(
                    "Found {} debug statement(s) matching `{}` in {} file(s); these should not ship to production",
                    totals.matches,
                    pattern.as_str(),
                    totals.files_with_matches
                ),
            )
            .with_value(totals.matches as f64)]
        }
        Err(e) => {
            warn!(error_type = e.classify(), error = %e, "Pattern scan failed");
            vec![Finding::warning(
                StageName::PatternScan,
                format!("Could not check for debug statements: {}", e),
            )]
        }
    }
}

pub fn count_matches(
    root_dir: &Path,
    file_patterns: &[String],
    pattern: &Regex,
    exclude_dirs: &[String],
) -> Result<ScanTotals, CheckError> {
    if !root_dir.is_dir() {
        return Err(CheckError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("source directory not found: {}", root_dir.display()),
        )));
    }

    let globs = file_patterns
        .iter()
        .map(|p| {
            glob::Pattern::new(p)
                .map_err(|e| CheckError::Pattern(format!("Invalid file pattern '{}': {}", p, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut totals = ScanTotals::default();
    // The root must be readable; unreadable subdirectories are skipped.
    let entries = std::fs::read_dir(root_dir)?;
    walk_entries(entries, root_dir, &globs, pattern, exclude_dirs, &mut totals);
    Ok(totals)
}

fn walk_entries(
    entries: std::fs::ReadDir,
    root: &Path,
    globs: &[glob::Pattern],
    pattern: &Regex,
    exclude: &[String],
    totals: &mut ScanTotals,
) {
    for entry in entries.flatten() {
        let path = entry.path();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        // file_type() does not follow symlinks; symlinked directories can form cycles.
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        if file_type.is_symlink() && path.is_dir() {
            debug!(path = %path.display(), "Skipping symlinked directory");
            continue;
        }

        if file_type.is_dir() {
            if exclude.iter().any(|e| e.as_str() == name) {
                continue;
            }
            match std::fs::read_dir(&path) {
                Ok(sub) => walk_entries(sub, root, globs, pattern, exclude, totals),
                Err(e) => debug!(path = %path.display(), error = %e, "Skipping unreadable directory"),
            }
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(&path);
        if !globs.iter().any(|g| g.matches(name) || g.matches_path(relative)) {
            continue;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping unreadable file");
                continue;
            }
        };

        totals.files_scanned += 1;
        let count = pattern.find_iter(&content).count();
        if count > 0 {
            debug!(path = %relative.display(), count, "Debug statements found");
            totals.matches += count;
            totals.files_with_matches += 1;
        }
    }
}
