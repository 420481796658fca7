//! Sound definitions for bulk registration

/// A named sound configuration, as accepted by `add_sound_collection`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundDef<C> {
    /// Key the sound is registered under
    pub name: String,
    /// Engine configuration for the sound
    pub config: C,
}

impl<C> SoundDef<C> {
    /// Create a definition for `name`
    pub fn new(name: impl Into<String>, config: C) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

impl<N: Into<String>, C> From<(N, C)> for SoundDef<C> {
    fn from((name, config): (N, C)) -> Self {
        Self::new(name, config)
    }
}
