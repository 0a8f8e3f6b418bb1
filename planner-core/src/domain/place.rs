//! Place Entity
//!
//! A point of interest shown in the "places to visit" list.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Place identifier.
///
/// Local ids are numeric; the server may answer with either form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceId {
    Num(i64),
    Text(String),
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceId::Num(n) => write!(f, "{}", n),
            PlaceId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PlaceId {
    fn from(n: i64) -> Self {
        PlaceId::Num(n)
    }
}

impl From<&str> for PlaceId {
    fn from(s: &str) -> Self {
        PlaceId::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Place as it travels over the wire.
///
/// Anything beyond the well-known fields is kept in `details` so that an
/// enriched place can be saved back without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePlace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PlaceId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl RemotePlace {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            latitude: None,
            longitude: None,
            details: Map::new(),
        }
    }
}

/// Render-ready place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    /// Presentation colour class, assigned locally and never taken from the server
    pub color: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub ai_recommended: bool,
    /// Enrichment fields returned by the server
    pub details: Map<String, Value>,
}

impl Place {
    /// Create a locally-added place before any server round trip
    pub fn new(id: PlaceId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            latitude: None,
            longitude: None,
            ai_recommended: false,
            details: Map::new(),
        }
    }

    /// Build a place from a server record, using `fallback_id` when the server sent none
    pub fn from_remote(remote: RemotePlace, fallback_id: PlaceId, color: impl Into<String>) -> Self {
        Self {
            id: remote.id.unwrap_or(fallback_id),
            name: remote.name,
            color: color.into(),
            latitude: remote.latitude,
            longitude: remote.longitude,
            ai_recommended: false,
            details: remote.details,
        }
    }

    /// Replace server-owned fields with a confirmed record, keeping the colour
    pub fn merge_confirmed(&mut self, confirmed: RemotePlace) {
        if let Some(id) = confirmed.id {
            self.id = id;
        }
        self.name = confirmed.name;
        self.latitude = confirmed.latitude;
        self.longitude = confirmed.longitude;
        self.details = confirmed.details;
    }

    /// Coordinates, when both halves are known
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        }
    }
}
