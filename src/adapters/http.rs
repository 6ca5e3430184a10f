use crate::config::ApiConfig;
use crate::domain::places::{LocalResult, RawReview, ReviewsResponse, SearchResponse};
use crate::domain::ports::PlacesSource;
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const SEARCH_ENGINE: &str = "google_maps";
const REVIEWS_ENGINE: &str = "google_maps_reviews";

/// SerpApi client for the Google Maps search and reviews engines.
pub struct SerpApiClient {
    client: Client,
    config: ApiConfig,
}

impl SerpApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        if config.api_key.is_none() {
            tracing::warn!("⚠️ SERPAPI_KEY is not set; requests will be sent without an api_key");
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        mut params: Vec<(&str, String)>,
        context: &str,
    ) -> Result<T> {
        if let Some(key) = &self.config.api_key {
            params.push(("api_key", key.clone()));
        }
        params.push(("hl", self.config.language.clone()));

        tracing::debug!("Making API request for {} to: {}", context, self.config.base_url);

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(EtlError::UnexpectedStatus {
                status,
                context: context.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl PlacesSource for SerpApiClient {
    async fn search_places(&self, query: &str, num_results: usize) -> Result<Vec<LocalResult>> {
        let params = vec![
            ("engine", SEARCH_ENGINE.to_string()),
            ("q", query.to_string()),
            ("num", num_results.to_string()),
        ];

        let response: SearchResponse = self
            .get_json(params, &format!("search \"{}\"", query))
            .await?;
        Ok(response.local_results)
    }

    async fn place_reviews(&self, place_id: &str, limit: usize) -> Result<Vec<RawReview>> {
        let params = vec![
            ("engine", REVIEWS_ENGINE.to_string()),
            ("place_id", place_id.to_string()),
            ("limit", limit.to_string()),
        ];

        let response: ReviewsResponse = self
            .get_json(params, &format!("reviews of {}", place_id))
            .await?;
        Ok(response.reviews)
    }
}
