//! Remote State
//!
//! Lifecycle of one view's backend data, as a single tagged value instead of
//! separate loading/error/success flags.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RemoteState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
    Submitting,
    Succeeded,
}

impl<T> RemoteState<T> {
    /// A request is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading | Self::Submitting)
    }

    #[cfg(test)]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Start (or restart) a read. Previous data is dropped.
    pub fn begin_load(&mut self) {
        *self = Self::Loading;
    }

    /// Start a write.
    pub fn begin_submit(&mut self) {
        *self = Self::Submitting;
    }

    /// Finish a read, replacing whatever was there.
    pub fn finish_load(&mut self, outcome: Result<T, String>) {
        *self = match outcome {
            Ok(data) => Self::Ready(data),
            Err(message) => Self::Failed(message),
        };
    }

    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        *self = match outcome {
            Ok(()) => Self::Succeeded,
            Err(message) => Self::Failed(message),
        };
    }

    /// Drop an in-flight request without recording any outcome.
    ///
    /// Used when the user is being sent to the login view: no error, no data.
    pub fn abandon(&mut self) {
        *self = Self::Idle;
    }
}

/// Issues load tickets so only the latest request may write its result.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketCounter {
    latest: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl TicketCounter {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// Keys of actions currently in flight, e.g. product ids being added to the cart.
///
/// Only drives disabled controls; it does not block anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingActions<K: Eq + Hash> {
    keys: HashSet<K>,
}

impl<K: Eq + Hash> Default for PendingActions<K> {
    fn default() -> Self {
        Self { keys: HashSet::new() }
    }
}

impl<K: Eq + Hash> PendingActions<K> {
    pub fn begin(&mut self, key: K) {
        self.keys.insert(key);
    }

    pub fn finish(&mut self, key: &K) {
        self.keys.remove(key);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }
}
