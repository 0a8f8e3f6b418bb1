//! Planner State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use planner_core::{CuisineList, FeedbackScheduler, PackingList, PlaceList, Trip};
use reactive_stores::Store;

use crate::context::PlannerContext;

/// Trip planner view state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct PlannerState {
    /// Trip the planner is showing
    pub trip: Trip,
    /// Places to visit, edited optimistically
    pub places: PlaceList,
    /// Local cuisine, local-only
    pub cuisines: CuisineList,
    /// Packing checklist, local-only
    pub packing: PackingList,
    /// Post-trip feedback email
    pub feedback: FeedbackScheduler,
}

impl PlannerState {
    pub fn new(ctx: &PlannerContext) -> Self {
        let trip = ctx.config.default_trip.clone();
        let places = PlaceList::new(ctx.config.clone(), trip.destination.clone(), ctx.clock.clone());
        let mut feedback = FeedbackScheduler::from_config(&ctx.config);
        feedback.set_trip(trip.clone(), ctx.clock.today());
        Self {
            trip,
            places,
            cuisines: CuisineList::from_config(&ctx.config),
            packing: PackingList::from_config(&ctx.config),
            feedback,
        }
    }
}

/// Type alias for the store
pub type PlannerStore = Store<PlannerState>;

/// Get the planner store from context
pub fn use_planner_store() -> PlannerStore {
    expect_context::<PlannerStore>()
}

/// Switch the trip; the feedback schedule follows it
pub fn store_set_trip(store: &PlannerStore, trip: Trip, ctx: &PlannerContext) {
    store.places().write().set_destination(trip.destination.clone());
    store.feedback().write().set_trip(trip.clone(), ctx.clock.today());
    *store.trip().write() = trip;
}
