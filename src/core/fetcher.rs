use crate::domain::model::ReviewRecord;
use crate::domain::places::RawReview;
use crate::domain::ports::PlacesSource;

/// Fetches up to `limit` reviews of one place, stamped with `city`.
/// Upstream failures are logged and yield no reviews.
pub async fn fetch_reviews<A: PlacesSource + ?Sized>(
    api: &A,
    place_id: &str,
    limit: usize,
    city: &str,
) -> Vec<ReviewRecord> {
    match api.place_reviews(place_id, limit).await {
        Ok(reviews) => reviews.iter().map(|r| normalize_review(r, city)).collect(),
        Err(e) => {
            tracing::error!("❌ Error fetching data for {}: {}", place_id, e);
            Vec::new()
        }
    }
}

/// The company column is left empty; the orchestrator fills it in.
pub fn normalize_review(review: &RawReview, city: &str) -> ReviewRecord {
    ReviewRecord {
        username: review.username(),
        rating: review.rating(),
        text: review.text(),
        date: review.date(),
        city: city.to_string(),
        company: String::new(),
    }
}
