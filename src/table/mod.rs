//! Sound table
//!
//! The table maps sound names to handles built by an audio engine and
//! forwards control calls to them.
//!
//! # Architecture
//!
//! ```text
//!                 SoundTable<E: AudioEngine>
//!          ┌──────────────────────────────────┐
//!          │ engine: E                        │
//!          │ sounds: HashMap<String,          │
//!          │   SoundEntry {                   │
//!          │     handle: Option<E::Handle>,   │
//!          │   }                              │
//!          │ >                                │
//!          │ total_added                      │
//!          └────────────────┬─────────────────┘
//!                           │
//!       add_sound() ──► engine.create_handle(config)
//!       play()/pause()/stop()/unload() ──► handle
//! ```
//!
//! # Counting
//!
//! `size()` counts successful registrations and never decreases, even when a
//! name is overwritten or unloaded. `len()` counts entries that still hold a
//! handle.
//!
//! # Unloaded entries
//!
//! `unload` keeps the name registered but drops its handle. Such entries are
//! treated as missing by `play`, `pause`, `stop` and `unload`, and are skipped
//! by `iterate` and `stop_all_sounds`.

pub mod config;
pub mod def;
pub mod entry;
pub mod error;
pub mod shared;
pub mod store;

pub use config::TableConfig;
pub use def::SoundDef;
pub use entry::{EntryState, SoundStats, TableStats};
pub use error::{Operation, TableError};
pub use shared::SharedSoundTable;
pub use store::{PlayToken, SoundTable, TableResult};
