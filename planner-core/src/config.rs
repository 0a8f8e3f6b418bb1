//! Planner configuration
//!
//! Everything the views used to hard-code (API location, fallback data,
//! palette) is passed in at construction time. Every field has a default,
//! so a partial JSON document is enough.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Cuisine, GeoPoint, PlannerError, PlannerResult, Trip};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Base URL every API path is appended to
    pub api_base_url: String,
    /// How many places to ask for on refresh
    pub place_count: u32,
    pub include_coordinates: bool,
    /// Colour classes handed out to places in order
    pub palette: Vec<String>,
    /// Place names shown when the bulk fetch fails
    pub fallback_places: Vec<String>,
    pub default_trip: Trip,
    /// Days from today used by a manual reschedule
    pub reschedule_days: u64,
    pub map_center: GeoPoint,
    pub cuisines: Vec<Cuisine>,
    /// Starting packing checklist
    pub packing_items: Vec<String>,
    pub recommendation_preferences: RecommendationPreferences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPreferences {
    pub include_historical: bool,
    pub include_nature: bool,
    pub include_local: bool,
}

impl Default for RecommendationPreferences {
    fn default() -> Self {
        Self {
            include_historical: true,
            include_nature: true,
            include_local: true,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3001/api".to_string(),
            place_count: 5,
            include_coordinates: true,
            palette: [
                "text-red-500",
                "text-teal-500",
                "text-amber-500",
                "text-sky-500",
                "text-purple-500",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            fallback_places: ["Solang Valley", "Rohtang Pass", "Hadimba Temple", "Manali Sanctuary"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            default_trip: Trip::new(
                "Manali",
                NaiveDate::from_ymd_opt(2025, 4, 10).unwrap_or_default(),
            ),
            reschedule_days: 3,
            map_center: GeoPoint { lat: 32.2396, lng: 77.1887 },
            cuisines: default_cuisines(),
            packing_items: [
                "Warm clothing (jackets, thermals)",
                "Hiking boots",
                "Rain gear",
                "First-aid kit",
                "Light backpack",
                "Water bottle",
                "Camping gear (if camping)",
                "Personal hygiene items",
                "Sunglasses and sunscreen",
                "Camera",
            ]
            .iter()
            .map(|i| i.to_string())
            .collect(),
            recommendation_preferences: RecommendationPreferences::default(),
        }
    }
}

impl PlannerConfig {
    /// Parse a JSON document and validate it
    pub fn from_json(json: &str) -> PlannerResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PlannerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with a different API base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn validate(&self) -> PlannerResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(PlannerError::Config("apiBaseUrl must not be empty".to_string()));
        }
        if self.palette.is_empty() {
            return Err(PlannerError::Config("palette must contain at least one colour".to_string()));
        }
        if self.place_count == 0 {
            return Err(PlannerError::Config("placeCount must be positive".to_string()));
        }
        Ok(())
    }

    /// Palette colour for a list position
    pub fn color_at(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return "";
        }
        &self.palette[index % self.palette.len()]
    }
}

fn default_cuisines() -> Vec<Cuisine> {
    vec![
        Cuisine::new(
            1,
            "Siddu",
            "Steamed wheat bread stuffed with a mixture of lentils and spices, served with ghee and chutney.",
            4.8,
        ),
        Cuisine::new(
            2,
            "Trout Fish",
            "Fresh river trout cooked with local herbs and spices, a specialty of Manali.",
            4.9,
        ),
        Cuisine::new(
            3,
            "Chha Gosht",
            "A traditional lamb curry cooked with yogurt and aromatic spices.",
            4.7,
        ),
        Cuisine::new(
            4,
            "Babru",
            "A local bread stuffed with black gram paste and deep-fried, served with sweet and tangy tamarind chutney.",
            4.6,
        ),
        Cuisine::new(
            5,
            "Tudkiya Bhath",
            "A flavorful rice dish cooked with lentils and spices, similar to a pulao.",
            4.5,
        ),
    ]
}
