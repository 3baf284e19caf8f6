const MAX_ERROR_LENGTH: usize = 2_000;

/// Truncate captured stderr for inclusion in an error message.
pub fn truncate_error(error: &str) -> String {
    let trimmed = error.trim();
    if trimmed.len() <= MAX_ERROR_LENGTH {
        return trimmed.to_string();
    }
    let mut end = MAX_ERROR_LENGTH;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}

/// First non-empty line of a command's output, for one-line finding messages.
pub fn first_line(output: &str) -> &str {
    output.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_error_is_trimmed() {
        assert_eq!(truncate_error("  boom\n"), "boom");
    }

    #[test]
    fn test_truncate_long_error() {
        let long = "é".repeat(MAX_ERROR_LENGTH);
        let out = truncate_error(&long);
        assert!(out.ends_with("..."));
        assert!(out.len() <= MAX_ERROR_LENGTH + 3);
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("\n\n  npm ERR! missing script: build\nmore"), "npm ERR! missing script: build");
        assert_eq!(first_line(""), "");
    }
}
