//! Credentials file for the `linkctl` client.
//!
//! The file holds `KEY=value` lines; only `API_TOKEN` is read:
//!
//! ```text
//! API_TOKEN=change-me
//! ```
//!
//! A missing file is not an error, the token then has to come from the
//! environment.

use std::path::{Path, PathBuf};

use super::error::Result;

/// Default location of the credentials file.
pub const DEFAULT_CONFIG_FILE: &str = "~/.config/kvlink";

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches('/')),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

/// Extracts the last `API_TOKEN=` value from file contents.
pub fn parse_api_token(contents: &str) -> Option<String> {
    contents
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix("API_TOKEN="))
        .last()
        .map(str::to_string)
        .filter(|token| !token.is_empty())
}

/// Reads the API token from `path`.
///
/// Returns `Ok(None)` when the file does not exist or holds no token.
///
/// # Errors
///
/// Returns an IO error if the file exists but cannot be read.
pub fn load_api_token(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(parse_api_token(&contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_token() {
        let contents = "# credentials\nAPI_TOKEN=abc123\nOTHER=x\n";

        assert_eq!(parse_api_token(contents).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_parse_api_token_trims_lines() {
        assert_eq!(
            parse_api_token("   API_TOKEN=abc  \n").as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_parse_api_token_last_wins() {
        let contents = "API_TOKEN=old\nAPI_TOKEN=new\n";

        assert_eq!(parse_api_token(contents).as_deref(), Some("new"));
    }

    #[test]
    fn test_parse_api_token_missing_or_empty() {
        assert_eq!(parse_api_token("OTHER=x"), None);
        assert_eq!(parse_api_token("API_TOKEN="), None);
    }

    #[test]
    fn test_expand_home_leaves_absolute_path() {
        assert_eq!(expand_home("/etc/kvlink"), PathBuf::from("/etc/kvlink"));
    }

    #[test]
    fn test_expand_home_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/.config/kvlink"), home.join(".config/kvlink"));
        }
    }

    #[test]
    fn test_load_api_token_missing_file() {
        let path = std::env::temp_dir().join("kvlink-test-does-not-exist");

        assert_eq!(load_api_token(&path).unwrap(), None);
    }

    #[test]
    fn test_load_api_token_from_file() {
        let path = std::env::temp_dir().join(format!("kvlink-test-{}", std::process::id()));
        std::fs::write(&path, "API_TOKEN=from-file\n").unwrap();

        let token = load_api_token(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(token.as_deref(), Some("from-file"));
    }
}
