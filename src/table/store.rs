//! Sound table implementation
//!
//! The central table that owns every registered sound handle and forwards
//! control calls to the audio engine.

use std::collections::HashMap;

use crate::engine::{AudioEngine, AudioHandle};

use super::config::TableConfig;
use super::def::SoundDef;
use super::entry::{SoundEntry, SoundStats, TableStats};
use super::error::{Operation, TableError};

/// Token returned by an engine's `play`
pub type PlayToken<E> = <<E as AudioEngine>::Handle as AudioHandle>::Token;

/// Result type for table operations over engine `E`
pub type TableResult<T, E> = Result<T, TableError<<E as AudioEngine>::Error>>;

fn not_found<E>(op: Operation, name: &str) -> TableError<E> {
    TableError::NotFound {
        op,
        name: name.to_string(),
    }
}

/// Registry of named sounds
///
/// Not thread-safe on its own; wrap it in a
/// [`SharedSoundTable`](super::SharedSoundTable) when several tasks need it.
pub struct SoundTable<E: AudioEngine> {
    /// Engine that builds handles
    engine: E,

    /// Map of sound name to entry
    sounds: HashMap<String, SoundEntry<E::Handle>>,

    /// Registrations through `add_sound`, never decremented
    total_added: usize,

    /// Registrations that replaced an existing entry
    overwritten: usize,

    /// Configuration
    config: TableConfig,
}

impl<E: AudioEngine> SoundTable<E> {
    /// Create a new sound table with default configuration
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, TableConfig::default())
    }

    /// Create a new sound table with custom configuration
    pub fn with_config(engine: E, config: TableConfig) -> Self {
        Self {
            engine,
            sounds: HashMap::with_capacity(config.initial_capacity),
            total_added: 0,
            overwritten: 0,
            config,
        }
    }

    /// Get the table configuration
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Get the underlying audio engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Register a sound under `name`
    ///
    /// The engine builds the handle first; if that fails the table is left
    /// untouched. An existing entry under the same name is replaced. With
    /// `unload_on_overwrite` set, the replaced handle is unloaded afterwards.
    /// If that unload fails the new sound is still registered and counted,
    /// and the failure comes back as `TableError::ReplacedUnload`.
    pub fn add_sound(&mut self, name: impl Into<String>, config: E::Config) -> TableResult<(), E> {
        let name = name.into();
        if name.is_empty() {
            return Err(TableError::EmptyName);
        }

        let handle = self.engine.create_handle(config)?;
        let previous = self.sounds.insert(name.clone(), SoundEntry::new(handle));
        self.total_added += 1;

        let Some(previous) = previous else {
            tracing::info!(sound = %name, total = self.total_added, "Sound registered");
            return Ok(());
        };

        self.overwritten += 1;
        tracing::info!(
            sound = %name,
            total = self.total_added,
            unload_previous = self.config.unload_on_overwrite,
            "Sound replaced"
        );

        if self.config.unload_on_overwrite {
            if let Some(mut old) = previous.handle {
                if let Err(err) = old.unload() {
                    return Err(TableError::ReplacedUnload(vec![(name, err)]));
                }
            }
        }

        Ok(())
    }

    /// Register every sound in `sounds`, in order
    ///
    /// Stops at the first sound that fails to register; sounds registered
    /// before it remain. A replaced handle that fails to unload does not stop
    /// the batch: those failures are collected and returned together as
    /// `TableError::ReplacedUnload` once every sound is registered.
    pub fn add_sound_collection<I>(&mut self, sounds: I) -> TableResult<(), E>
    where
        I: IntoIterator,
        I::Item: Into<SoundDef<E::Config>>,
    {
        let mut added = 0usize;
        let mut unload_failures = Vec::new();

        for def in sounds {
            let def = def.into();
            match self.add_sound(def.name, def.config) {
                Ok(()) => {}
                Err(TableError::ReplacedUnload(failures)) => unload_failures.extend(failures),
                Err(err) => return Err(err),
            }
            added += 1;
        }

        tracing::debug!(
            added = added,
            unload_failures = unload_failures.len(),
            "Sound collection registered"
        );

        if unload_failures.is_empty() {
            Ok(())
        } else {
            Err(TableError::ReplacedUnload(unload_failures))
        }
    }

    /// Unload a sound and clear its entry
    ///
    /// The name stays registered and `size()` is unchanged. Unloading a name
    /// that is unknown or already unloaded is a `NotFound` error. If the
    /// engine fails to unload, the entry keeps its handle.
    pub fn unload(&mut self, name: &str) -> TableResult<(), E> {
        let entry = self
            .sounds
            .get_mut(name)
            .ok_or_else(|| not_found(Operation::Unload, name))?;
        let handle = entry
            .handle
            .as_mut()
            .ok_or_else(|| not_found(Operation::Unload, name))?;

        handle.unload()?;
        entry.handle = None;

        tracing::info!(sound = %name, "Sound unloaded");
        Ok(())
    }

    /// Play a sound, optionally a named sprite of it
    ///
    /// Returns whatever the engine's `play` returns.
    pub fn play(&mut self, name: &str, sprite: Option<&str>) -> TableResult<PlayToken<E>, E> {
        let entry = self
            .sounds
            .get_mut(name)
            .ok_or_else(|| not_found(Operation::Play, name))?;
        let handle = entry
            .handle
            .as_mut()
            .ok_or_else(|| not_found(Operation::Play, name))?;

        let token = handle.play(sprite)?;
        entry.play_count += 1;

        tracing::debug!(sound = %name, sprite = ?sprite, "Sound playing");
        Ok(token)
    }

    /// Pause a sound
    pub fn pause(&mut self, name: &str) -> TableResult<(), E> {
        self.loaded_mut(Operation::Pause, name)?.pause()?;
        tracing::debug!(sound = %name, "Sound paused");
        Ok(())
    }

    /// Stop a sound
    pub fn stop(&mut self, name: &str) -> TableResult<(), E> {
        self.loaded_mut(Operation::Stop, name)?.stop()?;
        tracing::debug!(sound = %name, "Sound stopped");
        Ok(())
    }

    /// Call `visitor` once for every loaded sound
    ///
    /// Order is unspecified. Unloaded entries are skipped.
    pub fn iterate<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&str, &mut E::Handle),
    {
        for (name, entry) in self.sounds.iter_mut() {
            if let Some(handle) = entry.handle.as_mut() {
                visitor(name.as_str(), handle);
            }
        }
    }

    /// Iterate over loaded sounds without mutating them
    pub fn iter(&self) -> impl Iterator<Item = (&str, &E::Handle)> + '_ {
        self.sounds
            .iter()
            .filter_map(|(name, entry)| entry.handle.as_ref().map(|h| (name.as_str(), h)))
    }

    /// Stop every loaded sound
    ///
    /// Keeps going when a handle fails to stop, then reports every failure
    /// together as `TableError::StopAll`.
    pub fn stop_all_sounds(&mut self) -> TableResult<(), E> {
        let mut stopped = 0usize;
        let mut failures = Vec::new();

        self.iterate(|name, handle| match handle.stop() {
            Ok(()) => stopped += 1,
            Err(err) => failures.push((name.to_string(), err)),
        });

        tracing::debug!(
            stopped = stopped,
            failed = failures.len(),
            "Stopped all sounds"
        );

        if failures.is_empty() {
            Ok(())
        } else {
            Err(TableError::StopAll(failures))
        }
    }

    /// Number of sounds registered through `add_sound`
    ///
    /// Calls that returned `ReplacedUnload` registered their sound and are
    /// counted; every other `add_sound` error leaves the count unchanged.
    ///
    /// This counts registrations, not live entries: it does not go down on
    /// unload and goes up when a name is overwritten. See [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.total_added
    }

    /// Number of loaded sounds
    pub fn len(&self) -> usize {
        self.sounds.values().filter(|e| e.is_loaded()).count()
    }

    /// Check if no loaded sounds remain
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a loaded sound is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.sounds.get(name).is_some_and(|e| e.is_loaded())
    }

    /// Borrow a loaded sound's handle
    pub fn get(&self, name: &str) -> Option<&E::Handle> {
        self.sounds.get(name).and_then(|e| e.handle.as_ref())
    }

    /// Mutably borrow a loaded sound's handle
    pub fn get_mut(&mut self, name: &str) -> Option<&mut E::Handle> {
        self.sounds.get_mut(name).and_then(|e| e.handle.as_mut())
    }

    /// Get statistics for one sound, loaded or not
    pub fn sound_stats(&self, name: &str) -> Option<SoundStats> {
        self.sounds.get(name).map(|e| e.stats())
    }

    /// Get table-wide statistics
    pub fn stats(&self) -> TableStats {
        let loaded = self.len();
        TableStats {
            added: self.total_added,
            loaded,
            unloaded: self.sounds.len() - loaded,
            overwritten: self.overwritten,
        }
    }

    fn loaded_mut(&mut self, op: Operation, name: &str) -> TableResult<&mut E::Handle, E> {
        self.get_mut(name).ok_or_else(|| not_found(op, name))
    }
}

impl<E: AudioEngine + Default> Default for SoundTable<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}
