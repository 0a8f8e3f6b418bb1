//! Optimistic place list

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, error, info, warn};
use serde::Serialize;

use super::state::{transition, SyncEvent, SyncState, Transition};
use super::ticket::{AddTicket, RecommendTicket, RefreshTicket, RemoveTicket};
use crate::api::{EnrichPlaceRequest, PlacesRequest, RecommendationsRequest};
use crate::clock::{system_clock, SharedClock};
use crate::config::PlannerConfig;
use crate::domain::{
    ApiError, GeoPoint, Place, PlaceId, PlannerError, PlannerResult, RemotePlace,
};
use crate::ids::LocalIdGenerator;
use crate::session::SessionContext;

pub const FETCH_FALLBACK_MESSAGE: &str =
    "Failed to generate places. Using default recommendations instead.";
pub const RECOMMEND_FAILED_MESSAGE: &str =
    "Failed to generate new recommendations. Please try again later.";

/// Result of a finished remote call, ready to be applied
#[derive(Debug)]
pub enum SyncOutcome {
    Added {
        local_id: PlaceId,
        result: Result<RemotePlace, ApiError>,
    },
    Removed {
        local_id: PlaceId,
        result: Result<(), ApiError>,
    },
    Refreshed(Result<Vec<RemotePlace>, ApiError>),
    Recommended(Result<Vec<RemotePlace>, ApiError>),
}

/// What applying an outcome did to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Confirmed,
    AddFailed,
    RemoveConfirmed,
    RemoveFailed,
    Replaced(usize),
    FellBack(usize),
    Appended(usize),
    RecommendFailed,
    /// Outcome no longer matches anything shown
    Discarded,
}

/// One visible place with its sync state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncedPlace {
    /// Id assigned when the entry first appeared; unique within the session
    /// and the only key view operations use
    pub local_id: PlaceId,
    pub place: Place,
    pub state: SyncState,
}

impl SyncedPlace {
    fn matches(&self, id: &PlaceId) -> bool {
        self.local_id == *id
    }

    /// Id the server knows this place by, if it ever issued one
    pub fn remote_id(&self) -> Option<&PlaceId> {
        (self.place.id != self.local_id).then_some(&self.place.id)
    }
}

/// Render-ready list of places, edited optimistically.
///
/// Every operation changes the visible sequence synchronously and hands back a
/// ticket for the remote half. Results come back through [`PlaceList::apply`]
/// in whatever order they complete.
#[derive(Debug, Clone)]
pub struct PlaceList {
    config: Arc<PlannerConfig>,
    clock: SharedClock,
    destination: String,
    ids: LocalIdGenerator,
    entries: Vec<SyncedPlace>,
    /// Removed entries by local id, until the next refresh replaces the list
    tombstones: HashMap<PlaceId, SyncState>,
    error: Option<String>,
    in_flight: u32,
}

impl Default for PlaceList {
    fn default() -> Self {
        let config = PlannerConfig::default();
        let destination = config.default_trip.destination.clone();
        Self::new(Arc::new(config), destination, system_clock())
    }
}

impl PlaceList {
    pub fn new(config: Arc<PlannerConfig>, destination: impl Into<String>, clock: SharedClock) -> Self {
        Self {
            config,
            clock,
            destination: destination.into(),
            ids: LocalIdGenerator::new(),
            entries: Vec::new(),
            tombstones: HashMap::new(),
            error: None,
            in_flight: 0,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn entries(&self) -> &[SyncedPlace] {
        &self.entries
    }

    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.entries.iter().map(|e| &e.place)
    }

    pub fn names(&self) -> Vec<String> {
        self.places().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &PlaceId) -> bool {
        self.entries.iter().any(|e| e.matches(id))
    }

    /// State of a visible entry, or the tombstone of a removed one
    pub fn state_of(&self, id: &PlaceId) -> Option<SyncState> {
        self.entries
            .iter()
            .find(|e| e.matches(id))
            .map(|e| e.state)
            .or_else(|| self.tombstones.get(id).copied())
    }

    /// User-facing message from the last refresh or recommendation
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// First place with coordinates, else the configured default
    pub fn map_center(&self) -> GeoPoint {
        self.places()
            .find_map(Place::position)
            .unwrap_or(self.config.map_center)
    }

    /// Switch destination; the caller is expected to refresh afterwards
    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    // ========================
    // Operations
    // ========================

    /// Append a place immediately and return the ticket that confirms it
    pub fn add(&mut self, name: &str, session: &SessionContext) -> PlannerResult<AddTicket> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::Validation("place name must not be empty".to_string()));
        }
        session.require_user()?;

        let local_id = self.ids.next(self.clock.as_ref());
        let color = self.config.color_at(self.entries.len()).to_string();
        let state = match transition(None, SyncEvent::AddRequested) {
            Transition::To(state) => state,
            Transition::Discard => SyncState::PendingAdd,
        };
        self.entries.push(SyncedPlace {
            local_id: local_id.clone(),
            place: Place::new(local_id.clone(), name, color),
            state,
        });
        info!("Added place {:?} as {}", name, local_id);

        Ok(AddTicket {
            local_id,
            request: EnrichPlaceRequest {
                place_name: name.to_string(),
                destination: self.destination.clone(),
            },
        })
    }

    /// Drop a place from view immediately and return the ticket that deletes it
    pub fn remove(&mut self, id: &PlaceId, session: &SessionContext) -> PlannerResult<RemoveTicket> {
        session.require_user()?;
        let index = self
            .entries
            .iter()
            .position(|e| e.matches(id))
            .ok_or_else(|| PlannerError::Validation(format!("no place with id {}", id)))?;

        let Transition::To(state) = transition(Some(self.entries[index].state), SyncEvent::RemoveRequested)
        else {
            return Err(PlannerError::Validation(format!("place {} is already being removed", id)));
        };
        let entry = self.entries.remove(index);
        self.tombstones.insert(entry.local_id.clone(), state);
        info!("Removed place {:?} ({})", entry.place.name, entry.local_id);

        Ok(RemoveTicket {
            remote_id: entry.remote_id().cloned(),
            local_id: entry.local_id,
        })
    }

    /// Start a bulk fetch; the list keeps showing what it has until the result lands
    pub fn refresh(&mut self) -> RefreshTicket {
        self.in_flight += 1;
        self.error = None;
        RefreshTicket {
            request: PlacesRequest {
                destination: self.destination.clone(),
                count: self.config.place_count,
                include_coordinates: self.config.include_coordinates,
            },
        }
    }

    /// Ask for recommendations that do not repeat what is already listed
    pub fn recommend(&mut self) -> RecommendTicket {
        self.in_flight += 1;
        self.error = None;
        RecommendTicket {
            request: RecommendationsRequest {
                destination: self.destination.clone(),
                existing_places: self.names(),
                preferences: self.config.recommendation_preferences,
            },
        }
    }

    /// Fold a finished remote call into the list
    pub fn apply(&mut self, outcome: SyncOutcome) -> Applied {
        match outcome {
            SyncOutcome::Added { local_id, result } => self.apply_added(local_id, result),
            SyncOutcome::Removed { local_id, result } => self.apply_removed(local_id, result),
            SyncOutcome::Refreshed(result) => {
                self.finish_request();
                self.apply_refreshed(result)
            }
            SyncOutcome::Recommended(result) => {
                self.finish_request();
                self.apply_recommended(result)
            }
        }
    }

    fn apply_added(&mut self, local_id: PlaceId, result: Result<RemotePlace, ApiError>) -> Applied {
        let event = if result.is_ok() {
            SyncEvent::AddConfirmed
        } else {
            SyncEvent::AddFailed
        };
        let Some(entry) = self.entries.iter_mut().find(|e| e.local_id == local_id) else {
            // removed meanwhile (tombstoned), or wiped by a refresh
            let tombstone = self.tombstones.get(&local_id).copied();
            debug_assert_eq!(transition(tombstone, event), Transition::Discard);
            info!("Discarding add result for {}: no longer listed", local_id);
            return Applied::Discarded;
        };
        let Transition::To(state) = transition(Some(entry.state), event) else {
            return Applied::Discarded;
        };
        entry.state = state;
        match result {
            Ok(confirmed) => {
                entry.place.merge_confirmed(confirmed);
                Applied::Confirmed
            }
            Err(e) => {
                error!("Error processing place {}: {}", local_id, e);
                Applied::AddFailed
            }
        }
    }

    fn apply_removed(&mut self, local_id: PlaceId, result: Result<(), ApiError>) -> Applied {
        let event = if result.is_ok() {
            SyncEvent::RemoveConfirmed
        } else {
            SyncEvent::RemoveFailed
        };
        let current = self.tombstones.get(&local_id).copied();
        let Transition::To(state) = transition(current, event) else {
            return Applied::Discarded;
        };
        self.tombstones.insert(local_id.clone(), state);
        match result {
            Ok(()) => Applied::RemoveConfirmed,
            Err(e) => {
                // no rollback: the place stays out of view
                error!("Error removing place {}: {}", local_id, e);
                Applied::RemoveFailed
            }
        }
    }

    fn apply_refreshed(&mut self, result: Result<Vec<RemotePlace>, ApiError>) -> Applied {
        match result {
            Ok(remote) => {
                let entries = self.build_entries(remote, SyncEvent::Fetched);
                let count = entries.len();
                self.replace_entries(entries);
                Applied::Replaced(count)
            }
            Err(e) => {
                error!("Error fetching places for {}: {}", self.destination, e);
                let fallback = self.config.fallback_places.iter().map(RemotePlace::named).collect();
                let entries = self.build_entries(fallback, SyncEvent::FellBack);
                let count = entries.len();
                self.replace_entries(entries);
                self.error = Some(FETCH_FALLBACK_MESSAGE.to_string());
                Applied::FellBack(count)
            }
        }
    }

    fn apply_recommended(&mut self, result: Result<Vec<RemotePlace>, ApiError>) -> Applied {
        match result {
            Ok(remote) => {
                let count = remote.len();
                let base = self.ids.reserve(self.clock.as_ref(), count);
                let start = self.entries.len();
                for (i, rec) in remote.into_iter().enumerate() {
                    let local_id = PlaceId::Num(base + i as i64);
                    let color = self.config.color_at(start + i).to_string();
                    let mut place = Place::from_remote(rec, local_id.clone(), color);
                    // suggestions get fresh local ids even when the server sent one
                    place.id = local_id.clone();
                    place.ai_recommended = true;
                    self.entries.push(SyncedPlace {
                        local_id,
                        place,
                        state: SyncState::Idle,
                    });
                }
                Applied::Appended(count)
            }
            Err(e) => {
                warn!("Error generating recommendations for {}: {}", self.destination, e);
                self.error = Some(RECOMMEND_FAILED_MESSAGE.to_string());
                Applied::RecommendFailed
            }
        }
    }

    /// Entries for a freshly fetched list. The place id is the server's, or its
    /// 1-based position; the local id always comes from the generator.
    fn build_entries(&mut self, remote: Vec<RemotePlace>, event: SyncEvent) -> Vec<SyncedPlace> {
        let state = match transition(None, event) {
            Transition::To(state) => state,
            Transition::Discard => SyncState::Idle,
        };
        let base = self.ids.reserve(self.clock.as_ref(), remote.len());
        remote
            .into_iter()
            .enumerate()
            .map(|(i, rec)| SyncedPlace {
                local_id: PlaceId::Num(base + i as i64),
                place: Place::from_remote(rec, PlaceId::Num(i as i64 + 1), self.config.color_at(i)),
                state,
            })
            .collect()
    }

    /// Swap in a new list; results for anything it dropped are discarded by absence
    fn replace_entries(&mut self, entries: Vec<SyncedPlace>) {
        self.entries = entries;
        if !self.tombstones.is_empty() {
            debug!("Clearing {} tombstones", self.tombstones.len());
            self.tombstones.clear();
        }
    }

    fn finish_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
