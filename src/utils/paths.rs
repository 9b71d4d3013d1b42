use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Quote file used when neither the command line nor the config names one.
pub const DEFAULT_QUOTE_FILE: &str = "../Quotes.txt";

pub fn get_quote_clip_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".quote-clip"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let quote_clip_dir = get_quote_clip_dir()?;
    Ok(quote_clip_dir.join("config.toml"))
}

/// Command-line path first, then the configured one, then the built-in default.
///
/// A leading `~` in the configured path refers to the home directory.
pub fn resolve_quote_file(cli_path: Option<&Path>, config: &Config) -> PathBuf {
    if let Some(path) = cli_path {
        return path.to_path_buf();
    }

    config
        .quote_file
        .as_deref()
        .map(expand_home)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_QUOTE_FILE))
}

pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_quote_clip_dir() {
        let dir = get_quote_clip_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".quote-clip"));
    }

    #[test]
    fn test_get_config_path() {
        let path = get_config_path().unwrap();
        assert!(path.to_string_lossy().contains(".quote-clip"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_resolve_defaults_to_builtin_path() {
        let path = resolve_quote_file(None, &Config::default());
        assert_eq!(path, PathBuf::from("../Quotes.txt"));
    }

    #[test]
    fn test_resolve_prefers_config_over_default() {
        let config = Config {
            quote_file: Some(PathBuf::from("mine.txt")),
            ..Default::default()
        };
        assert_eq!(resolve_quote_file(None, &config), PathBuf::from("mine.txt"));
    }

    #[test]
    fn test_resolve_expands_home_in_config_path() {
        let config = Config {
            quote_file: Some(PathBuf::from("~/notes/quotes.txt")),
            ..Default::default()
        };
        let home = dirs::home_dir().unwrap();
        assert_eq!(
            resolve_quote_file(None, &config),
            home.join("notes").join("quotes.txt")
        );
    }

    #[test]
    fn test_expand_home_leaves_other_paths_alone() {
        assert_eq!(expand_home(Path::new("/srv/q.txt")), PathBuf::from("/srv/q.txt"));
        assert_eq!(expand_home(Path::new("q.txt")), PathBuf::from("q.txt"));
        assert_eq!(expand_home(Path::new("~user/q.txt")), PathBuf::from("~user/q.txt"));
    }

    #[test]
    fn test_expand_home_bare_tilde() {
        assert_eq!(expand_home(Path::new("~")), dirs::home_dir().unwrap());
    }

    #[test]
    fn test_resolve_prefers_cli_over_config() {
        let config = Config {
            quote_file: Some(PathBuf::from("mine.txt")),
            ..Default::default()
        };
        let path = resolve_quote_file(Some(Path::new("given.txt")), &config);
        assert_eq!(path, PathBuf::from("given.txt"));
    }
}
