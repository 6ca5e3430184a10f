use crate::core::Pipeline;
use crate::domain::model::RunOutcome;

/// Runs one resolve → fetch → write pass over a [`Pipeline`].
///
/// Nothing escapes `run`: upstream problems shrink the output and a failed
/// write is reported through [`RunOutcome::WriteFailed`].
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> RunOutcome {
        tracing::info!("🚀 Starting review scraping");

        let companies = self.pipeline.resolve_companies().await;
        if companies.is_empty() {
            tracing::error!("❌ No companies found. Exiting...");
            return RunOutcome::NoCompanies;
        }

        tracing::info!(
            "Found {} top companies. Scraping reviews...",
            companies.len()
        );

        let delay = self.pipeline.request_delay();
        let mut all_reviews = Vec::new();

        for (position, company) in companies.iter().enumerate() {
            if position > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            tracing::info!("Scraping reviews for {}...", company.name);
            let reviews = self.pipeline.fetch_reviews(company).await;
            tracing::debug!("{} reviews collected for {}", reviews.len(), company.name);

            all_reviews.extend(reviews.into_iter().map(|r| r.with_company(&company.name)));
        }

        let rows = all_reviews.len();
        match self.pipeline.load(&all_reviews).await {
            Ok(output_path) => {
                tracing::info!("✅ Scraping completed! Data saved in: {}", output_path);
                RunOutcome::Completed {
                    output_path,
                    companies: companies.len(),
                    rows,
                }
            }
            Err(e) => {
                tracing::error!("❌ Error saving data to CSV: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                RunOutcome::WriteFailed {
                    companies: companies.len(),
                    rows,
                    error: e.to_string(),
                }
            }
        }
    }
}
