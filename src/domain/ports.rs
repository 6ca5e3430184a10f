use crate::domain::places::{LocalResult, RawReview};
use crate::domain::model::{CompanyDirectory, CompanyRecord, ReviewRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    /// Writes `data` to `path` relative to the storage root, replacing any
    /// existing file. Returns the full location written.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Upstream places-search service.
#[async_trait]
pub trait PlacesSource: Send + Sync {
    async fn search_places(&self, query: &str, num_results: usize) -> Result<Vec<LocalResult>>;
    async fn place_reviews(&self, place_id: &str, limit: usize) -> Result<Vec<RawReview>>;
}

/// Stages of one run. Resolution and fetching never fail outward: upstream
/// errors degrade to empty results inside the implementation.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn resolve_companies(&self) -> CompanyDirectory;
    async fn fetch_reviews(&self, company: &CompanyRecord) -> Vec<ReviewRecord>;
    async fn load(&self, records: &[ReviewRecord]) -> Result<String>;
    fn request_delay(&self) -> Duration;
}
