//! Remote halves of list operations
//!
//! A ticket carries everything the network call needs, so the list is not
//! borrowed while the request is in flight. Feed the outcome back through
//! [`PlaceList::apply`](super::PlaceList::apply).

use log::{debug, warn};

use super::SyncOutcome;
use crate::api::{
    EnrichPlaceRequest, PlacesRequest, RecommendationsRequest, SavePlaceRequest, TravelApi,
};
use crate::domain::PlaceId;

/// Enrich then persist a place that is already shown
#[derive(Debug, Clone)]
pub struct AddTicket {
    pub(crate) local_id: PlaceId,
    pub(crate) request: EnrichPlaceRequest,
}

impl AddTicket {
    pub fn local_id(&self) -> &PlaceId {
        &self.local_id
    }

    pub async fn execute(self, api: &dyn TravelApi) -> SyncOutcome {
        let result = async {
            let enriched = api.enrich_place(&self.request).await?;
            api.save_place(&SavePlaceRequest::user_added(enriched)).await
        }
        .await;
        if let Err(e) = &result {
            warn!("Error processing place {:?}: {}", self.request.place_name, e);
        }
        SyncOutcome::Added {
            local_id: self.local_id,
            result,
        }
    }
}

/// Delete a place that is already gone from view
#[derive(Debug, Clone)]
pub struct RemoveTicket {
    pub(crate) local_id: PlaceId,
    /// None when the server never issued an id (still pending, failed or suggested)
    pub(crate) remote_id: Option<PlaceId>,
}

impl RemoveTicket {
    pub fn local_id(&self) -> &PlaceId {
        &self.local_id
    }

    pub fn remote_id(&self) -> Option<&PlaceId> {
        self.remote_id.as_ref()
    }

    pub async fn execute(self, api: &dyn TravelApi) -> SyncOutcome {
        let result = match &self.remote_id {
            Some(remote_id) => api.delete_place(remote_id).await,
            None => {
                debug!("Place {} was never saved, nothing to delete", self.local_id);
                Ok(())
            }
        };
        SyncOutcome::Removed {
            local_id: self.local_id,
            result,
        }
    }
}

/// Replace the whole list with fresh suggestions
#[derive(Debug, Clone)]
pub struct RefreshTicket {
    pub(crate) request: PlacesRequest,
}

impl RefreshTicket {
    pub async fn execute(self, api: &dyn TravelApi) -> SyncOutcome {
        SyncOutcome::Refreshed(api.suggest_places(&self.request).await)
    }
}

/// Ask for more places on top of the current ones
#[derive(Debug, Clone)]
pub struct RecommendTicket {
    pub(crate) request: RecommendationsRequest,
}

impl RecommendTicket {
    pub async fn execute(self, api: &dyn TravelApi) -> SyncOutcome {
        SyncOutcome::Recommended(api.recommendations(&self.request).await)
    }
}
