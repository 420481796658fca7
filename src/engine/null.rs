//! Silent in-process engine
//!
//! `NullEngine` produces handles that never touch an audio device. Each
//! handle tracks its playback state so hosts without sound output, and
//! tests, can observe what the table asked for.

use bytes::Bytes;

use super::{AudioEngine, AudioHandle};

/// Configuration for a clip played by the null engine
#[derive(Debug, Clone, Default)]
pub struct ClipConfig {
    /// Encoded clip data (shared, not copied, between handles)
    pub data: Bytes,
    /// Sprite names defined on the clip
    pub sprites: Vec<String>,
}

impl ClipConfig {
    /// Create a config for a clip with no sprites
    pub fn new(data: Bytes) -> Self {
        Self {
            data,
            sprites: Vec::new(),
        }
    }

    /// Define a named sprite on the clip
    pub fn sprite(mut self, name: impl Into<String>) -> Self {
        self.sprites.push(name.into());
        self
    }
}

/// Playback state of a null handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
    Unloaded,
}

/// Errors raised by the null engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NullEngineError {
    /// Clip data was empty
    EmptyClip,
    /// Requested sprite is not defined on the clip
    UnknownSprite(String),
    /// Handle was already unloaded
    Unloaded,
}

impl std::fmt::Display for NullEngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NullEngineError::EmptyClip => write!(f, "Clip has no data"),
            NullEngineError::UnknownSprite(name) => write!(f, "Unknown sprite: {}", name),
            NullEngineError::Unloaded => write!(f, "Sound already unloaded"),
        }
    }
}

impl std::error::Error for NullEngineError {}

/// Engine that accepts every non-empty clip and plays nothing
#[derive(Debug, Default)]
pub struct NullEngine {
    handles_created: u64,
}

impl NullEngine {
    /// Create an engine that has built no handles yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles built so far
    pub fn handles_created(&self) -> u64 {
        self.handles_created
    }
}

impl AudioEngine for NullEngine {
    type Config = ClipConfig;
    type Handle = NullHandle;
    type Error = NullEngineError;

    fn create_handle(&mut self, config: ClipConfig) -> Result<NullHandle, NullEngineError> {
        if config.data.is_empty() {
            return Err(NullEngineError::EmptyClip);
        }

        self.handles_created += 1;

        Ok(NullHandle {
            id: self.handles_created,
            clip: config,
            state: PlaybackState::Stopped,
            sprite: None,
            next_play_id: 1,
            stop_count: 0,
        })
    }
}

/// Handle to a clip loaded in the null engine
#[derive(Debug)]
pub struct NullHandle {
    id: u64,
    clip: ClipConfig,
    state: PlaybackState,
    sprite: Option<String>,
    next_play_id: u32,
    stop_count: u32,
}

impl NullHandle {
    /// Engine-wide id of this handle
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Sprite selected by the last `play`, if any
    pub fn sprite(&self) -> Option<&str> {
        self.sprite.as_deref()
    }

    /// Number of times `stop` has been called
    pub fn stop_count(&self) -> u32 {
        self.stop_count
    }

    /// Size of the clip data in bytes
    pub fn clip_len(&self) -> usize {
        self.clip.data.len()
    }

    fn ensure_loaded(&self) -> Result<(), NullEngineError> {
        if self.state == PlaybackState::Unloaded {
            Err(NullEngineError::Unloaded)
        } else {
            Ok(())
        }
    }
}

impl AudioHandle for NullHandle {
    type Token = u32;
    type Error = NullEngineError;

    fn play(&mut self, sprite: Option<&str>) -> Result<u32, NullEngineError> {
        self.ensure_loaded()?;

        if let Some(name) = sprite {
            if !self.clip.sprites.iter().any(|s| s == name) {
                return Err(NullEngineError::UnknownSprite(name.to_string()));
            }
        }

        self.sprite = sprite.map(str::to_string);
        self.state = PlaybackState::Playing;

        let play_id = self.next_play_id;
        self.next_play_id = self.next_play_id.wrapping_add(1);
        Ok(play_id)
    }

    fn pause(&mut self) -> Result<(), NullEngineError> {
        self.ensure_loaded()?;
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), NullEngineError> {
        self.ensure_loaded()?;
        self.state = PlaybackState::Stopped;
        self.stop_count += 1;
        Ok(())
    }

    fn unload(&mut self) -> Result<(), NullEngineError> {
        self.ensure_loaded()?;
        self.state = PlaybackState::Unloaded;
        self.sprite = None;
        self.clip.data = Bytes::new();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip() -> ClipConfig {
        ClipConfig::new(Bytes::from_static(&[0x52, 0x49, 0x46, 0x46]))
    }

    #[test]
    fn test_create_handle() {
        let mut engine = NullEngine::new();
        let handle = engine.create_handle(clip()).unwrap();

        assert_eq!(handle.id(), 1);
        assert_eq!(handle.state(), PlaybackState::Stopped);
        assert_eq!(handle.clip_len(), 4);
        assert_eq!(engine.handles_created(), 1);
    }

    #[test]
    fn test_empty_clip_rejected() {
        let mut engine = NullEngine::new();
        let result = engine.create_handle(ClipConfig::default());

        assert_eq!(result.unwrap_err(), NullEngineError::EmptyClip);
        assert_eq!(engine.handles_created(), 0);
    }

    #[test]
    fn test_play_pause_stop() {
        let mut engine = NullEngine::new();
        let mut handle = engine.create_handle(clip()).unwrap();

        assert_eq!(handle.play(None).unwrap(), 1);
        assert_eq!(handle.state(), PlaybackState::Playing);

        handle.pause().unwrap();
        assert_eq!(handle.state(), PlaybackState::Paused);

        assert_eq!(handle.play(None).unwrap(), 2);
        handle.stop().unwrap();
        assert_eq!(handle.state(), PlaybackState::Stopped);
        assert_eq!(handle.stop_count(), 1);
    }

    #[test]
    fn test_pause_when_stopped_is_noop() {
        let mut engine = NullEngine::new();
        let mut handle = engine.create_handle(clip()).unwrap();

        handle.pause().unwrap();
        assert_eq!(handle.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_sprites() {
        let mut engine = NullEngine::new();
        let mut handle = engine.create_handle(clip().sprite("intro")).unwrap();

        handle.play(Some("intro")).unwrap();
        assert_eq!(handle.sprite(), Some("intro"));

        let err = handle.play(Some("outro")).unwrap_err();
        assert_eq!(err, NullEngineError::UnknownSprite("outro".into()));
        // Failed play leaves the previous sprite selected
        assert_eq!(handle.sprite(), Some("intro"));
    }

    #[test]
    fn test_unload() {
        let mut engine = NullEngine::new();
        let mut handle = engine.create_handle(clip()).unwrap();

        handle.play(None).unwrap();
        handle.unload().unwrap();

        assert_eq!(handle.state(), PlaybackState::Unloaded);
        assert_eq!(handle.clip_len(), 0);
        assert_eq!(handle.play(None).unwrap_err(), NullEngineError::Unloaded);
        assert_eq!(handle.unload().unwrap_err(), NullEngineError::Unloaded);
    }

    #[test]
    fn test_shared_clip_data() {
        let data = Bytes::from(vec![1u8; 1024]);
        let mut engine = NullEngine::new();

        let a = engine.create_handle(ClipConfig::new(data.clone())).unwrap();
        let b = engine.create_handle(ClipConfig::new(data)).unwrap();

        assert_eq!(a.clip_len(), b.clip_len());
        assert_ne!(a.id(), b.id());
    }
}
