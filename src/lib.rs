pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{http::SerpApiClient, storage::LocalStorage};
pub use crate::app::pipelines::ReviewPipeline;
pub use crate::config::{RunConfig, Settings};
pub use crate::core::etl::EtlEngine;
pub use crate::domain::model::{CompanyDirectory, CompanyRecord, ReviewRecord, RunOutcome};
pub use crate::utils::error::{EtlError, Result};
