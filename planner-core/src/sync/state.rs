//! Per-entry sync state machine

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SyncState {
    /// Shown but never confirmed by the server (fallback data, AI suggestions)
    Idle,
    PendingAdd,
    PendingRemove,
    Confirmed,
    /// Last remote operation failed; the entry stays where it is
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEvent {
    Fetched,
    FellBack,
    AddRequested,
    AddConfirmed,
    AddFailed,
    RemoveRequested,
    RemoveConfirmed,
    RemoveFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    To(SyncState),
    /// Event does not apply to the entry as it stands now
    Discard,
}

/// Transition table.
///
/// Add results are only accepted by an entry still waiting for them. Removed
/// entries keep a tombstone in `PendingRemove`, `Confirmed` or `Error`, so a
/// slow add confirmation arriving after a remove is discarded instead of
/// bringing the entry back.
pub fn transition(from: Option<SyncState>, event: SyncEvent) -> Transition {
    use SyncEvent::*;
    use SyncState::*;

    match (from, event) {
        (None, Fetched) => Transition::To(Confirmed),
        (None, FellBack) => Transition::To(Idle),
        (None, AddRequested) => Transition::To(PendingAdd),

        (Some(PendingAdd), AddConfirmed) => Transition::To(Confirmed),
        (Some(PendingAdd), AddFailed) => Transition::To(Error),

        (Some(Idle | PendingAdd | Confirmed | Error), RemoveRequested) => {
            Transition::To(PendingRemove)
        }
        (Some(PendingRemove), RemoveConfirmed) => Transition::To(Confirmed),
        (Some(PendingRemove), RemoveFailed) => Transition::To(Error),

        _ => Transition::Discard,
    }
}
