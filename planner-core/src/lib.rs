//! PackUpPal planner core
//!
//! Layered like the app it serves:
//! - domain: entities and the error taxonomy
//! - feedback: post-trip email scheduling
//! - cuisine, packing: local-only lists
//! - sync: optimistic place list reconciled against the travel API
//! - api: the travel API trait and its HTTP client
//! - session: injected identity context
//!
//! Runs natively for tests and on wasm32 inside the frontend.

pub mod api;
pub mod clock;
pub mod config;
pub mod cuisine;
pub mod domain;
pub mod feedback;
pub mod ids;
pub mod packing;
pub mod session;
pub mod sync;

pub use api::{HttpTravelApi, TravelApi};
pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use config::PlannerConfig;
pub use cuisine::CuisineList;
pub use domain::{
    ApiError, Cuisine, EmailStatus, FeedbackSchedule, GeoPoint, PackingItem, Place, PlaceId,
    PlannerError, PlannerResult, RemotePlace, Trip,
};
pub use feedback::{estimate, FeedbackEmail, FeedbackScheduler, FeedbackSettings, FeedbackTiming};
pub use packing::PackingList;
pub use session::{AuthProvider, IdentityProvider, SessionContext, Subscription, User};
pub use sync::{Applied, PlaceList, SyncOutcome, SyncState};
