//! Request and response bodies (JSON, camelCase)

use serde::{Deserialize, Serialize};

use crate::config::RecommendationPreferences;
use crate::domain::RemotePlace;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacesRequest {
    pub destination: String,
    pub count: u32,
    pub include_coordinates: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub places: Vec<RemotePlace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichPlaceRequest {
    pub place_name: String,
    pub destination: String,
}

/// Enriched place plus the `userAdded` marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePlaceRequest {
    #[serde(flatten)]
    pub place: RemotePlace,
    pub user_added: bool,
}

impl SavePlaceRequest {
    pub fn user_added(mut place: RemotePlace) -> Self {
        // the marker is ours to set; drop any copy echoed back in the enrichment
        place.details.remove("userAdded");
        Self {
            place,
            user_added: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    pub destination: String,
    pub existing_places: Vec<String>,
    pub preferences: RecommendationPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RemotePlace>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_places_request_body() {
        let body = serde_json::to_value(PlacesRequest {
            destination: "Manali".to_string(),
            count: 5,
            include_coordinates: true,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"destination": "Manali", "count": 5, "includeCoordinates": true})
        );
    }

    #[test]
    fn test_save_request_spreads_enriched_place() {
        let mut place = RemotePlace::named("Jogini Falls");
        place.latitude = Some(32.27);
        place.details.insert("category".to_string(), json!("nature"));
        place.details.insert("userAdded".to_string(), json!(false));

        let body = serde_json::to_value(SavePlaceRequest::user_added(place)).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Jogini Falls",
                "latitude": 32.27,
                "category": "nature",
                "userAdded": true
            })
        );
    }

    #[test]
    fn test_recommendations_request_body() {
        let body = serde_json::to_value(RecommendationsRequest {
            destination: "Manali".to_string(),
            existing_places: vec!["Solang Valley".to_string()],
            preferences: RecommendationPreferences::default(),
        })
        .unwrap();
        assert_eq!(body["existingPlaces"], json!(["Solang Valley"]));
        assert_eq!(body["preferences"]["includeHistorical"], json!(true));
    }
}
