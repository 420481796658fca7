//! Audio engine interface
//!
//! The table never decodes or mixes audio itself. It asks an [`AudioEngine`]
//! for a handle per registered sound and drives that handle through the
//! [`AudioHandle`] trait.
//!
//! Engine configuration is an associated type so the table can pass it
//! through without knowing anything about its contents.

pub mod null;

pub use null::{ClipConfig, NullEngine, NullEngineError, NullHandle, PlaybackState};

/// Factory for playable sound handles
pub trait AudioEngine {
    /// Construction parameters for one sound, opaque to the table
    type Config;

    /// Handle produced for each registered sound
    type Handle: AudioHandle<Error = Self::Error>;

    /// Error raised by the engine and its handles
    type Error: std::error::Error + 'static;

    /// Build a handle from its configuration
    fn create_handle(&mut self, config: Self::Config) -> Result<Self::Handle, Self::Error>;
}

/// A single loaded sound owned by the engine
pub trait AudioHandle {
    /// Value returned by `play` (for example a playback id)
    type Token;

    /// Error raised by handle operations
    type Error: std::error::Error + 'static;

    /// Start or resume playback, optionally of a named sprite
    fn play(&mut self, sprite: Option<&str>) -> Result<Self::Token, Self::Error>;

    /// Pause playback
    fn pause(&mut self) -> Result<(), Self::Error>;

    /// Stop playback and rewind
    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Stop playback and release the sound's resources
    fn unload(&mut self) -> Result<(), Self::Error>;
}
