//! reqwest-backed [`TravelApi`]

use async_trait::async_trait;
use log::{debug, error};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::wire::{
    EnrichPlaceRequest, PlacesRequest, PlacesResponse, RecommendationsRequest,
    RecommendationsResponse, SavePlaceRequest,
};
use super::TravelApi;
use crate::config::PlannerConfig;
use crate::domain::{ApiError, PlaceId, RemotePlace};

/// Travel API client over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpTravelApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTravelApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let result = async {
            let resp = self.send(path, self.request(Method::POST, path).json(body)).await?;
            resp.json::<R>().await.map_err(|e| ApiError::Decode {
                endpoint: path.to_string(),
                reason: e.to_string(),
            })
        }
        .await;
        if let Err(e) = &result {
            error!("Error calling API {}: {}", path, e);
        }
        result
    }

    async fn send(&self, path: &str, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let resp = builder.send().await.map_err(|e| ApiError::Transport {
            endpoint: path.to_string(),
            reason: e.to_string(),
        })?;
        let status = resp.status();
        debug!("{} -> {}", path, status);
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp)
    }
}

#[async_trait(?Send)]
impl TravelApi for HttpTravelApi {
    async fn suggest_places(&self, request: &PlacesRequest) -> Result<Vec<RemotePlace>, ApiError> {
        let resp: PlacesResponse = self.post_json("/ai/places", request).await?;
        Ok(resp.places)
    }

    async fn enrich_place(&self, request: &EnrichPlaceRequest) -> Result<RemotePlace, ApiError> {
        self.post_json("/ai/enrich-place", request).await
    }

    async fn save_place(&self, request: &SavePlaceRequest) -> Result<RemotePlace, ApiError> {
        self.post_json("/user/places", request).await
    }

    async fn delete_place(&self, id: &PlaceId) -> Result<(), ApiError> {
        let path = format!(
            "/user/places/{}",
            utf8_percent_encode(&id.to_string(), NON_ALPHANUMERIC)
        );
        self.send(&path, self.request(Method::DELETE, &path))
            .await
            .map(|_| ())
            .map_err(|e| {
                error!("Error calling API {}: {}", path, e);
                e
            })
    }

    async fn recommendations(
        &self,
        request: &RecommendationsRequest,
    ) -> Result<Vec<RemotePlace>, ApiError> {
        let resp: RecommendationsResponse = self.post_json("/ai/recommendations", request).await?;
        Ok(resp.recommendations)
    }
}
