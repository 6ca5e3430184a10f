pub mod toml_config;

pub use toml_config::{ApiConfig, LoggingConfig, RunConfig, RunSection, Settings};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Command-line flags. Each flag given overrides the config file (or the
/// built-in default when no file is used).
#[cfg(feature = "cli")]
#[derive(Clone, Parser)]
#[command(name = "review-etl")]
#[command(about = "Collect Google Maps reviews for the top companies in a city into a dated CSV")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub city: Option<String>,

    /// Search query; defaults to "Top IT Companies in <city>"
    #[arg(long)]
    pub query: Option<String>,

    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[arg(long)]
    pub max_companies: Option<usize>,

    #[arg(long)]
    pub max_reviews: Option<usize>,

    /// Pause between companies, in seconds
    #[arg(long)]
    pub request_delay_secs: Option<u64>,

    #[arg(long)]
    pub api_base_url: Option<String>,

    #[arg(long, env = "SERPAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub language: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    fn apply_overrides(&self, settings: &mut Settings) {
        let run = &mut settings.run;
        if let Some(city) = &self.city {
            run.city = city.clone();
        }
        if let Some(query) = &self.query {
            run.query = Some(query.clone());
        }
        if let Some(dir) = &self.output_dir {
            run.output_dir = dir.clone();
        }
        if let Some(n) = self.max_companies {
            run.max_companies = n;
        }
        if let Some(n) = self.max_reviews {
            run.max_reviews_per_company = n;
        }
        if let Some(secs) = self.request_delay_secs {
            run.request_delay_secs = secs;
        }

        let api = &mut settings.api;
        if let Some(url) = &self.api_base_url {
            api.base_url = url.clone();
        }
        if let Some(key) = &self.api_key {
            api.api_key = Some(key.clone());
        }
        if let Some(language) = &self.language {
            api.language = language.clone();
        }
        if let Some(secs) = self.timeout_seconds {
            api.timeout_seconds = Some(secs);
        }

        if let Some(file) = &self.log_file {
            settings.logging.file = Some(file.clone());
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::parse_from([
            "review-etl",
            "--city",
            "Indore",
            "--max-reviews",
            "25",
            "--request-delay-secs",
            "0",
            "--api-key",
            "k",
        ]);

        let settings = cli.load_settings().unwrap();
        let run = settings.run_config();

        assert_eq!(run.city, "Indore");
        assert_eq!(run.query, "Top IT Companies in Indore");
        assert_eq!(run.max_reviews_per_company, 25);
        assert_eq!(run.max_companies, 10);
        assert_eq!(run.request_delay, Duration::ZERO);
        assert_eq!(settings.api.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[run]\ncity = \"Nagpur\"\nquery = \"Fintech in Nagpur\"\nmax_companies = 4\n",
            )
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["review-etl", "--config", &path, "--max-companies", "2"]);
        let run = cli.load_settings().unwrap().run_config();

        assert_eq!(run.city, "Nagpur");
        assert_eq!(run.query, "Fintech in Nagpur");
        assert_eq!(run.max_companies, 2);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig::parse_from(["review-etl", "--config", "/definitely/not/here.toml"]);
        assert!(cli.load_settings().is_err());
    }
}
