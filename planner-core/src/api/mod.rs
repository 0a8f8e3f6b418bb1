//! Travel API
//!
//! Client side of the recommendation service and the user's saved places.
//! Every non-2xx answer is a single [`ApiError`] regardless of status code.

mod http;
mod wire;

pub use http::HttpTravelApi;
pub use wire::{
    EnrichPlaceRequest, PlacesRequest, PlacesResponse, RecommendationsRequest,
    RecommendationsResponse, SavePlaceRequest,
};

use async_trait::async_trait;

use crate::domain::{ApiError, PlaceId, RemotePlace};

/// Remote operations the planner relies on.
///
/// Futures are not `Send`: everything runs on the UI event loop.
#[async_trait(?Send)]
pub trait TravelApi {
    /// `POST /ai/places`
    async fn suggest_places(&self, request: &PlacesRequest) -> Result<Vec<RemotePlace>, ApiError>;

    /// `POST /ai/enrich-place`
    async fn enrich_place(&self, request: &EnrichPlaceRequest) -> Result<RemotePlace, ApiError>;

    /// `POST /user/places`
    async fn save_place(&self, request: &SavePlaceRequest) -> Result<RemotePlace, ApiError>;

    /// `DELETE /user/places/{id}`
    async fn delete_place(&self, id: &PlaceId) -> Result<(), ApiError>;

    /// `POST /ai/recommendations`
    async fn recommendations(
        &self,
        request: &RecommendationsRequest,
    ) -> Result<Vec<RemotePlace>, ApiError>;
}
