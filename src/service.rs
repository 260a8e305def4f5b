//! Service layer: one operation per provider endpoint.
//!
//! Each method maps its typed parameters onto the fixed upstream path and
//! returns the uniform [`UpstreamReply`], so the handlers only ever branch on
//! `status_code`. A provider error status is a normal reply here; only a call
//! with no response at all comes back as `Err`.

use serde::Serialize;
use tokio::time::Instant;

use crate::error::AppError;
use crate::metrics::Metrics;
use crate::model::{
    CityParams, CollectionParams, CuisineParams, DailyMenuParams, EstablishmentParams,
    GeocodeParams, LocationDetailParams, LocationParams, RestaurantParams, ReviewParams,
    SearchParams, UpstreamReply,
};
use crate::upstream::ZomatoClient;

const NO_PARAMS: [(&str, &str); 0] = [];

#[derive(Clone)]
pub struct ZomatoService {
    client: ZomatoClient,
    metrics: Metrics,
}

impl ZomatoService {
    pub fn new(client: ZomatoClient, metrics: Metrics) -> Self {
        Self { client, metrics }
    }

    async fn forward<P>(&self, endpoint: &str, params: &P) -> Result<UpstreamReply, AppError>
    where
        P: Serialize + ?Sized,
    {
        self.metrics.record_upstream_request();
        let start = Instant::now();
        let result = self.client.request(endpoint, params).await;
        self.metrics.record_upstream_latency(start.elapsed().as_secs_f64());

        match &result {
            Ok(reply) => {
                tracing::debug!(endpoint, status = reply.status_code, "provider replied");
            }
            Err(_) => self.metrics.record_upstream_failure(),
        }

        result
    }

    /// City lookup by name fragment or explicit IDs.
    pub async fn cities(&self, params: &CityParams) -> Result<UpstreamReply, AppError> {
        self.forward("cities", params).await
    }

    /// Restaurant category list. Takes no parameters.
    pub async fn categories(&self) -> Result<UpstreamReply, AppError> {
        self.forward("categories", &NO_PARAMS).await
    }

    /// Curated restaurant collections in a city, by city ID or coordinates.
    pub async fn collections(&self, params: &CollectionParams) -> Result<UpstreamReply, AppError> {
        self.forward("collections", params).await
    }

    /// Cuisines available in a city, by city ID or coordinates.
    pub async fn cuisines(&self, params: &CuisineParams) -> Result<UpstreamReply, AppError> {
        self.forward("cuisines", params).await
    }

    /// Restaurant types in a city.
    ///
    /// Routes to the `cuisines` upstream path, not `establishments`. Existing
    /// callers depend on this behaviour; a regression test pins it.
    pub async fn establishments(
        &self,
        params: &EstablishmentParams,
    ) -> Result<UpstreamReply, AppError> {
        self.forward("cuisines", params).await
    }

    /// Popularity data and nearby restaurants for a set of coordinates.
    pub async fn geocode(&self, params: &GeocodeParams) -> Result<UpstreamReply, AppError> {
        self.forward("geocode", params).await
    }

    /// Location search by keyword, optionally biased by coordinates.
    pub async fn locations(&self, params: &LocationParams) -> Result<UpstreamReply, AppError> {
        self.forward("locations", params).await
    }

    /// Detailed scores and best-rated restaurants for one location entity.
    pub async fn location_details(
        &self,
        params: &LocationDetailParams,
    ) -> Result<UpstreamReply, AppError> {
        self.forward("location_details", params).await
    }

    /// Full detail record for one restaurant.
    pub async fn restaurant(&self, params: &RestaurantParams) -> Result<UpstreamReply, AppError> {
        self.forward("restaurant", params).await
    }

    /// Daily menu for one restaurant, where the provider has one.
    pub async fn daily_menu(&self, params: &DailyMenuParams) -> Result<UpstreamReply, AppError> {
        self.forward("daily_menu", params).await
    }

    /// Paged reviews for one restaurant.
    pub async fn reviews(&self, params: &ReviewParams) -> Result<UpstreamReply, AppError> {
        self.forward("reviews", params).await
    }

    /// Restaurant search across every filter the provider accepts.
    pub async fn search(&self, params: &SearchParams) -> Result<UpstreamReply, AppError> {
        self.forward("search", params).await
    }
}
