use crate::config::RunConfig;
use crate::core::csv_output::{output_file_name, render_csv};
use crate::core::{fetcher, resolver};
use crate::core::{CompanyDirectory, CompanyRecord, Pipeline, PlacesSource, ReviewRecord, Storage};
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::time::Duration;

/// Google Maps reviews pipeline: companies for a city query, their reviews,
/// one dated CSV.
pub struct ReviewPipeline<S: Storage, A: PlacesSource> {
    pub(crate) storage: S,
    pub(crate) api: A,
    pub(crate) config: RunConfig,
    run_date: NaiveDate,
}

impl<S: Storage, A: PlacesSource> ReviewPipeline<S, A> {
    pub fn new(storage: S, api: A, config: RunConfig) -> Self {
        Self {
            storage,
            api,
            config,
            run_date: chrono::Local::now().date_naive(),
        }
    }

    /// Pins the date used in the output file name.
    pub fn with_run_date(mut self, run_date: NaiveDate) -> Self {
        self.run_date = run_date;
        self
    }

    pub fn output_file_name(&self) -> String {
        output_file_name(&self.config.city, self.run_date)
    }
}

#[async_trait::async_trait]
impl<S: Storage, A: PlacesSource> Pipeline for ReviewPipeline<S, A> {
    async fn resolve_companies(&self) -> CompanyDirectory {
        resolver::resolve_companies(&self.api, &self.config.query, self.config.max_companies).await
    }

    async fn fetch_reviews(&self, company: &CompanyRecord) -> Vec<ReviewRecord> {
        fetcher::fetch_reviews(
            &self.api,
            &company.place_id,
            self.config.max_reviews_per_company,
            &self.config.city,
        )
        .await
    }

    async fn load(&self, records: &[ReviewRecord]) -> Result<String> {
        let file_name = self.output_file_name();
        tracing::debug!("Writing {} rows to {}", records.len(), file_name);

        let data = render_csv(records)?;
        self.storage.write_file(&file_name, &data).await
    }

    fn request_delay(&self) -> Duration {
        self.config.request_delay
    }
}
