use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::domain::{FeedFormat, SortMode};
use crate::errors::{PicfeedError, PicfeedResult};

pub const DEFAULT_BASE_URL: &str = "http://www.reddit.com";
pub const DEFAULT_OUTPUT_DIR: &str = "Saved Reddit Pics";
pub const DEFAULT_SOURCES: &[&str] = &["Pics", "WTF"];
pub const DEFAULT_MAX_REDIRECTS: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub sources: Vec<String>,
    pub sort_mode: SortMode,
    pub limit: Option<u32>,
    pub output_dir: PathBuf,
    pub base_url: String,
    pub feed_format: FeedFormat,
    pub max_redirects: usize,
    pub timeout: Duration,
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            sort_mode: SortMode::default(),
            limit: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            feed_format: FeedFormat::default(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            dry_run: false,
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Load `.env` into the process environment so the `PICFEED_*`
    /// variables are visible to the argument parser.
    pub fn load_env_file() {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();
    }

    /// Start from the defaults and override whatever the command line
    /// (or its environment variables) provided.
    pub fn from_cli(cli: &Cli) -> PicfeedResult<Self> {
        let mut config = Self::default();

        if let Some(ref sources) = cli.sources {
            config.sources = sources
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(sort) = cli.sort {
            config.sort_mode = sort;
        }
        if cli.limit.is_some() {
            config.limit = cli.limit;
        }
        if let Some(ref dir) = cli.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(ref base_url) = cli.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(format) = cli.format {
            config.feed_format = format;
        }
        if let Some(max_redirects) = cli.max_redirects {
            config.max_redirects = max_redirects;
        }
        if let Some(secs) = cli.timeout {
            config.timeout = Duration::from_secs(secs);
        }
        config.dry_run = cli.dry_run;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PicfeedResult<()> {
        if self.sources.is_empty() {
            return Err(PicfeedError::Config(
                "at least one source is required".to_string(),
            ));
        }
        if self.max_redirects == 0 {
            return Err(PicfeedError::Config(
                "max redirects must be at least 1".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(PicfeedError::Config(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        if self.limit == Some(0) {
            return Err(PicfeedError::Config(
                "limit must be a positive integer".to_string(),
            ));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| PicfeedError::Config(format!("base URL {}: {}", self.base_url, e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["picfeed"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = Config::from_cli(&cli(&[])).unwrap();

        assert_eq!(config.sources, vec!["Pics", "WTF"]);
        assert_eq!(config.sort_mode, SortMode::Hot);
        assert_eq!(config.limit, None);
        assert_eq!(config.output_dir, PathBuf::from("Saved Reddit Pics"));
        assert_eq!(config.max_redirects, 10);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::from_cli(&cli(&[
            "--sources",
            "aww,EarthPorn",
            "--sort",
            "top",
            "--limit",
            "25",
            "--output-dir",
            "/tmp/pics",
            "--format",
            "html",
        ]))
        .unwrap();

        assert_eq!(config.sources, vec!["aww", "EarthPorn"]);
        assert_eq!(config.sort_mode, SortMode::Top);
        assert_eq!(config.limit, Some(25));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/pics"));
        assert_eq!(config.feed_format, FeedFormat::Html);
    }

    #[test]
    fn test_blank_sources_rejected() {
        let result = Config::from_cli(&cli(&["--sources", " , "]));
        assert!(matches!(result, Err(PicfeedError::Config(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Config::from_cli(&cli(&["--timeout", "0"]));
        assert!(matches!(result, Err(PicfeedError::Config(_))));

        let config = Config::from_cli(&cli(&["--timeout", "5"])).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_zero_max_redirects_rejected() {
        let result = Config::from_cli(&cli(&["--max-redirects", "0"]));
        assert!(matches!(result, Err(PicfeedError::Config(_))));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = Config::from_cli(&cli(&["--base-url", "not a url"]));
        assert!(matches!(result, Err(PicfeedError::Config(_))));
    }
}
