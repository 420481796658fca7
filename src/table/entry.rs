//! Sound entry and state types
//!
//! This module defines the per-sound state stored in the table.

use std::time::Instant;

/// State of a sound entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Entry holds a live handle
    Loaded,
    /// Handle was unloaded; the name stays registered
    Unloaded,
}

/// Entry for a single sound in the table
#[derive(Debug)]
pub(crate) struct SoundEntry<H> {
    /// Engine handle (None once unloaded)
    pub(super) handle: Option<H>,

    /// Number of successful `play` calls
    pub(super) play_count: u64,

    /// When the current handle was registered
    pub(super) registered_at: Instant,
}

impl<H> SoundEntry<H> {
    pub(super) fn new(handle: H) -> Self {
        Self {
            handle: Some(handle),
            play_count: 0,
            registered_at: Instant::now(),
        }
    }

    pub(super) fn state(&self) -> EntryState {
        if self.handle.is_some() {
            EntryState::Loaded
        } else {
            EntryState::Unloaded
        }
    }

    pub(super) fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }

    pub(super) fn stats(&self) -> SoundStats {
        SoundStats {
            state: self.state(),
            play_count: self.play_count,
            registered_at: self.registered_at,
        }
    }
}

/// Statistics for a single sound
#[derive(Debug, Clone)]
pub struct SoundStats {
    /// Current entry state
    pub state: EntryState,
    /// Successful plays since registration
    pub play_count: u64,
    /// When the sound was registered
    pub registered_at: Instant,
}

/// Table-wide statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Registrations through `add_sound` (same as `size()`)
    pub added: usize,
    /// Entries holding a live handle
    pub loaded: usize,
    /// Entries whose handle was unloaded
    pub unloaded: usize,
    /// Registrations that replaced an existing entry
    pub overwritten: usize,
}
