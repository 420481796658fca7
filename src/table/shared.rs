//! Lock-guarded sound table
//!
//! Wraps a [`SoundTable`] in a single `tokio::sync::Mutex`. Every operation
//! takes the lock once and holds it across the lookup, the table mutation
//! and the engine call, so a handle is never driven while another task is
//! unloading it.

use tokio::sync::{Mutex, MutexGuard};

use crate::engine::AudioEngine;

use super::def::SoundDef;
use super::entry::{SoundStats, TableStats};
use super::store::{PlayToken, SoundTable, TableResult};

/// Sound table shared between tasks
///
/// Usually held in an `Arc`.
pub struct SharedSoundTable<E: AudioEngine> {
    inner: Mutex<SoundTable<E>>,
}

impl<E: AudioEngine> SharedSoundTable<E> {
    /// Wrap an existing table
    pub fn new(table: SoundTable<E>) -> Self {
        Self {
            inner: Mutex::new(table),
        }
    }

    /// Lock the table for a sequence of operations
    pub async fn lock(&self) -> MutexGuard<'_, SoundTable<E>> {
        self.inner.lock().await
    }

    /// Consume the wrapper and return the table
    pub fn into_inner(self) -> SoundTable<E> {
        self.inner.into_inner()
    }

    /// Register a sound under `name`
    pub async fn add_sound(&self, name: impl Into<String>, config: E::Config) -> TableResult<(), E> {
        self.inner.lock().await.add_sound(name, config)
    }

    /// Register every sound in `sounds`, in order
    pub async fn add_sound_collection<I>(&self, sounds: I) -> TableResult<(), E>
    where
        I: IntoIterator,
        I::Item: Into<SoundDef<E::Config>>,
    {
        self.inner.lock().await.add_sound_collection(sounds)
    }

    /// Unload a sound and clear its entry
    pub async fn unload(&self, name: &str) -> TableResult<(), E> {
        self.inner.lock().await.unload(name)
    }

    /// Play a sound, optionally a named sprite of it
    pub async fn play(&self, name: &str, sprite: Option<&str>) -> TableResult<PlayToken<E>, E> {
        self.inner.lock().await.play(name, sprite)
    }

    /// Pause a sound
    pub async fn pause(&self, name: &str) -> TableResult<(), E> {
        self.inner.lock().await.pause(name)
    }

    /// Stop a sound
    pub async fn stop(&self, name: &str) -> TableResult<(), E> {
        self.inner.lock().await.stop(name)
    }

    /// Visit every loaded sound while holding the lock
    pub async fn iterate<F>(&self, visitor: F)
    where
        F: FnMut(&str, &mut E::Handle),
    {
        self.inner.lock().await.iterate(visitor)
    }

    /// Stop every loaded sound
    pub async fn stop_all_sounds(&self) -> TableResult<(), E> {
        self.inner.lock().await.stop_all_sounds()
    }

    /// Number of sounds registered through `add_sound`
    pub async fn size(&self) -> usize {
        self.inner.lock().await.size()
    }

    /// Number of loaded sounds
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Check if no loaded sounds remain
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    /// Check if a loaded sound is registered under `name`
    pub async fn contains(&self, name: &str) -> bool {
        self.inner.lock().await.contains(name)
    }

    /// Get statistics for one sound, loaded or not
    pub async fn sound_stats(&self, name: &str) -> Option<SoundStats> {
        self.inner.lock().await.sound_stats(name)
    }

    /// Get table-wide statistics
    pub async fn stats(&self) -> TableStats {
        self.inner.lock().await.stats()
    }
}

impl<E: AudioEngine> From<SoundTable<E>> for SharedSoundTable<E> {
    fn from(table: SoundTable<E>) -> Self {
        Self::new(table)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bytes::Bytes;

    use super::*;
    use crate::engine::null::{ClipConfig, NullEngine, PlaybackState};
    use crate::table::{Operation, TableError};

    fn clip() -> ClipConfig {
        ClipConfig::new(Bytes::from_static(b"fLaC"))
    }

    fn shared() -> Arc<SharedSoundTable<NullEngine>> {
        Arc::new(SoundTable::new(NullEngine::new()).into())
    }

    #[tokio::test]
    async fn test_add_and_play() {
        let table = shared();

        table.add_sound("click", clip()).await.unwrap();
        table.play("click", None).await.unwrap();

        assert_eq!(table.size().await, 1);
        let guard = table.lock().await;
        assert_eq!(guard.get("click").unwrap().state(), PlaybackState::Playing);
    }

    #[tokio::test]
    async fn test_missing_sound() {
        let table = shared();

        let result = table.stop("music").await;
        assert!(matches!(
            result,
            Err(TableError::NotFound { op: Operation::Stop, .. })
        ));
    }

    #[tokio::test]
    async fn test_concurrent_registration() {
        let table = shared();

        let mut tasks = Vec::new();
        for i in 0..8 {
            let table = Arc::clone(&table);
            tasks.push(tokio::spawn(async move {
                let name = format!("sound_{}", i);
                table.add_sound(name.clone(), clip()).await.unwrap();
                table.play(&name, None).await.unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(table.size().await, 8);
        assert_eq!(table.len().await, 8);

        table.stop_all_sounds().await.unwrap();

        let mut stopped = 0;
        table
            .iterate(|_, handle| {
                assert_eq!(handle.state(), PlaybackState::Stopped);
                stopped += 1;
            })
            .await;
        assert_eq!(stopped, 8);
    }

    #[tokio::test]
    async fn test_unload_and_stats() {
        let table = shared();
        table
            .add_sound_collection(vec![("a", clip()), ("b", clip())])
            .await
            .unwrap();

        table.unload("a").await.unwrap();

        assert!(!table.contains("a").await);
        assert!(table.contains("b").await);
        assert!(!table.is_empty().await);
        assert!(table.pause("a").await.unwrap_err().is_not_found());

        let stats = table.stats().await;
        assert_eq!(stats.added, 2);
        assert_eq!(stats.loaded, 1);
        assert_eq!(stats.unloaded, 1);
        assert_eq!(table.sound_stats("b").await.unwrap().play_count, 0);

        let inner = Arc::try_unwrap(table).ok().unwrap().into_inner();
        assert_eq!(inner.size(), 2);
    }
}
