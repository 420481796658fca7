//! Soundboard demo driving a shared sound table
//!
//! Run with: cargo run --example soundboard
//!
//! Set `RUST_LOG=soundtable=debug` to see every table operation.
//!
//! Registers a handful of clips with the silent engine, plays them from
//! several tasks, then stops everything and prints the table statistics.

use std::sync::Arc;

use bytes::Bytes;
use soundtable::engine::null::{ClipConfig, NullEngine};
use soundtable::{SharedSoundTable, SoundDef, SoundTable, TableConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("soundtable=info".parse()?)
                .add_directive("soundboard=debug".parse()?),
        )
        .init();

    // Clip data is reference-counted, so every sound can share one buffer
    let data = Bytes::from(vec![0u8; 4096]);

    let table = SoundTable::with_config(
        NullEngine::new(),
        TableConfig::default().initial_capacity(8),
    );
    let table: Arc<SharedSoundTable<NullEngine>> = Arc::new(table.into());

    table
        .add_sound_collection([
            SoundDef::new("click", ClipConfig::new(data.clone())),
            SoundDef::new("beep", ClipConfig::new(data.clone())),
            SoundDef::new(
                "voice",
                ClipConfig::new(data.clone()).sprite("hello").sprite("bye"),
            ),
        ])
        .await?;

    let mut tasks = Vec::new();
    for (name, sprite) in [("click", None), ("beep", None), ("voice", Some("hello"))] {
        let table = Arc::clone(&table);
        tasks.push(tokio::spawn(async move {
            match table.play(name, sprite).await {
                Ok(id) => tracing::debug!(sound = name, play_id = id, "Started"),
                Err(e) => eprintln!("play {} failed: {}", name, e),
            }
        }));
    }
    for task in tasks {
        task.await?;
    }

    if let Err(e) = table.pause("music").await {
        println!("Expected failure: {}", e);
    }

    table.unload("beep").await?;
    table.stop_all_sounds().await?;

    let stats = table.stats().await;
    println!(
        "registered: {}  loaded: {}  unloaded: {}  overwritten: {}",
        stats.added, stats.loaded, stats.unloaded, stats.overwritten
    );

    let guard = table.lock().await;
    for (name, handle) in guard.iter() {
        println!("{:<8} {:?} (handle #{})", name, handle.state(), handle.id());
    }

    Ok(())
}
