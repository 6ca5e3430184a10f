use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CITY: &str = "Ahmehdabad";
pub const DEFAULT_BASE_URL: &str = "https://serpapi.com/search";

/// Everything a run needs, as read from a TOML file. Every key is optional.
///
/// ```toml
/// [run]
/// city = "Pune"
/// output_dir = "./google_reviews_data"
/// request_delay_secs = 5
///
/// [api]
/// api_key = "${SERPAPI_KEY}"
///
/// [logging]
/// file = "scrap.log"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub run: RunSection,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSection {
    pub city: String,
    /// Falls back to "Top IT Companies in <city>".
    pub query: Option<String>,
    pub output_dir: PathBuf,
    pub max_companies: usize,
    pub max_reviews_per_company: usize,
    pub request_delay_secs: u64,
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            query: None,
            output_dir: PathBuf::from("./google_reviews_data"),
            max_companies: 10,
            max_reviews_per_company: 100,
            request_delay_secs: 5,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Sent as the `hl` parameter.
    pub language: String,
    /// No deadline is applied when unset.
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            language: "en".to_string(),
            timeout_seconds: None,
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("language", &self.language)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: Some(PathBuf::from("scrap.log")),
            json: false,
        }
    }
}

/// Parameters of one run, fixed when the pipeline is built.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub city: String,
    pub query: String,
    pub output_dir: PathBuf,
    pub max_companies: usize,
    pub max_reviews_per_company: usize,
    pub request_delay: Duration,
}

impl RunConfig {
    /// Defaults for `city`, with the query derived from it.
    pub fn for_city(city: &str) -> Self {
        RunSection {
            city: city.to_string(),
            ..RunSection::default()
        }
        .into()
    }
}

impl From<RunSection> for RunConfig {
    fn from(section: RunSection) -> Self {
        let query = section
            .query
            .unwrap_or_else(|| format!("Top IT Companies in {}", section.city));
        Self {
            city: section.city,
            query,
            output_dir: section.output_dir,
            max_companies: section.max_companies,
            max_reviews_per_company: section.max_reviews_per_company,
            request_delay: Duration::from_secs(section.request_delay_secs),
        }
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment; unknown variables stay literal.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn run_config(&self) -> RunConfig {
        self.run.clone().into()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        let run = self.run_config();

        validation::validate_non_empty_string("run.city", &run.city)?;
        validation::validate_file_name_part("run.city", &run.city)?;
        validation::validate_non_empty_string("run.query", &run.query)?;
        validation::validate_path("run.output_dir", &run.output_dir.to_string_lossy())?;
        validation::validate_positive_number("run.max_companies", run.max_companies, 1)?;
        validation::validate_positive_number(
            "run.max_reviews_per_company",
            run.max_reviews_per_company,
            1,
        )?;

        validation::validate_url("api.base_url", &self.api.base_url)?;
        validation::validate_non_empty_string("api.language", &self.api.language)?;

        if let Some(file) = &self.logging.file {
            validation::validate_path("logging.file", &file.to_string_lossy())?;
        }

        Ok(())
    }
}
