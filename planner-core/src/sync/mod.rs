//! Optimistic List Synchronizer
//!
//! Local edits show up at once; the network confirms later. Each visible
//! entry runs through the [`SyncState`] machine, and removed entries leave
//! a tombstone so late confirmations cannot resurrect them. No operation
//! is retried, cancelled, or allowed to block rendering.

mod state;
mod list;
mod ticket;

#[cfg(test)]
mod tests;

pub use state::{transition, SyncEvent, SyncState, Transition};
pub use list::{
    Applied, PlaceList, SyncOutcome, SyncedPlace, FETCH_FALLBACK_MESSAGE, RECOMMEND_FAILED_MESSAGE,
};
pub use ticket::{AddTicket, RecommendTicket, RefreshTicket, RemoveTicket};
