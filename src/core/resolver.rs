use crate::domain::model::CompanyDirectory;
use crate::domain::places::LocalResult;
use crate::domain::ports::PlacesSource;

/// Looks up companies matching `query`. Upstream failures are logged and
/// yield an empty directory.
pub async fn resolve_companies<A: PlacesSource + ?Sized>(
    api: &A,
    query: &str,
    num_results: usize,
) -> CompanyDirectory {
    let results = match api.search_places(query, num_results).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("❌ Error fetching company place IDs: {}", e);
            return CompanyDirectory::new();
        }
    };

    let directory = build_directory(&results);
    tracing::debug!("Companies found: {:?}", directory.names());

    if directory.is_empty() {
        tracing::error!("❌ No company data found in API response.");
    }
    directory
}

/// Keeps entries carrying both a title and a place id.
pub fn build_directory(results: &[LocalResult]) -> CompanyDirectory {
    let mut directory = CompanyDirectory::new();

    for (name, place_id) in results.iter().filter_map(LocalResult::identity) {
        if let Some(previous) = directory.insert(name.to_string(), place_id.to_string()) {
            tracing::warn!(
                "Duplicate company name '{}': place id {} replaced by {}",
                name,
                previous,
                place_id
            );
        }
    }

    directory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::places::RawReview;
    use crate::utils::error::{EtlError, Result};
    use async_trait::async_trait;

    fn result(title: Option<&str>, place_id: Option<&str>) -> LocalResult {
        LocalResult {
            title: title.map(str::to_string),
            place_id: place_id.map(str::to_string),
        }
    }

    struct FixedSearch(Option<Vec<LocalResult>>);

    #[async_trait]
    impl PlacesSource for FixedSearch {
        async fn search_places(&self, _query: &str, _num: usize) -> Result<Vec<LocalResult>> {
            self.0.clone().ok_or_else(|| EtlError::ConfigError {
                message: "simulated outage".to_string(),
            })
        }

        async fn place_reviews(&self, _place_id: &str, _limit: usize) -> Result<Vec<RawReview>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_incomplete_entries_are_skipped() {
        let results = vec![
            result(Some("Acme"), Some("p1")),
            result(None, Some("p2")),
            result(Some("No Id"), None),
            result(Some(""), Some("p4")),
            result(Some("Globex"), Some("p5")),
        ];

        let directory = build_directory(&results);

        assert_eq!(directory.names(), vec!["Acme", "Globex"]);
        assert_eq!(directory.get("Globex"), Some("p5"));
    }

    #[test]
    fn test_duplicate_titles_appear_once() {
        let results = vec![
            result(Some("Acme"), Some("p1")),
            result(Some("Initech"), Some("p2")),
            result(Some("Acme"), Some("p3")),
        ];

        let directory = build_directory(&results);

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.names(), vec!["Acme", "Initech"]);
        assert_eq!(directory.get("Acme"), Some("p3"));
    }

    #[tokio::test]
    async fn test_upstream_failure_yields_empty_directory() {
        let api = FixedSearch(None);
        let directory = resolve_companies(&api, "Top IT Companies in Pune", 10).await;
        assert!(directory.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_companies_preserves_response_order() {
        let api = FixedSearch(Some(vec![
            result(Some("Zeta"), Some("z")),
            result(Some("Alpha"), Some("a")),
        ]));

        let directory = resolve_companies(&api, "q", 10).await;

        assert_eq!(directory.names(), vec!["Zeta", "Alpha"]);
    }
}
