//! Named registry of sound-playback handles
//!
//! `soundtable` keeps playable sounds under string keys and forwards
//! play/pause/stop/unload calls to an external audio engine. Decoding,
//! mixing and output are the engine's business; the table only owns the
//! handles the engine produces.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use soundtable::engine::null::{ClipConfig, NullEngine};
//! use soundtable::SoundTable;
//!
//! let mut table = SoundTable::new(NullEngine::new());
//! table
//!     .add_sound("click", ClipConfig::new(Bytes::from_static(b"RIFF")))
//!     .unwrap();
//!
//! table.play("click", None).unwrap();
//! assert!(table.pause("music").is_err());
//! assert_eq!(table.size(), 1);
//! ```

pub mod engine;
pub mod table;

pub use engine::{AudioEngine, AudioHandle};
pub use table::{
    EntryState, Operation, SharedSoundTable, SoundDef, SoundStats, SoundTable, TableConfig,
    TableError, TableStats,
};
