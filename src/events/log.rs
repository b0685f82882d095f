//! Append-only event log.

use crate::types::{Account, Event};

/// Ordered record of every event the engine has emitted.
///
/// Only the engine appends; everyone else gets `&EventLog`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log with room for `capacity` events before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn extend(&mut self, events: impl IntoIterator<Item = Event>) {
        self.events.extend(events);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Event at `index`, in emission order
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    /// Most recent event
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    /// Events emitted at or after `index`.
    ///
    /// Observers keep the length they last saw and pass it back here to read
    /// only what is new. An index past the end yields an empty slice.
    pub fn since(&self, index: usize) -> &[Event] {
        self.events.get(index..).unwrap_or(&[])
    }

    /// `Transfer` events, mints included
    pub fn transfers(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|event| event.is_transfer())
    }

    pub fn approvals(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|event| event.is_approval())
    }

    /// Events naming `account` on either side
    pub fn involving<'a>(&'a self, account: &'a Account) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |event| event.involves(account))
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
