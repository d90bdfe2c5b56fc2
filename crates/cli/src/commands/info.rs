use reelbase::{MovieCollection, PersistenceMode};
use serde::Serialize;
use tracing::debug;

use crate::commands::{print_json, CollectionOptions};

/// Summary of a collection file.
#[derive(Serialize)]
struct CollectionInfo {
    path:             String,
    movies:           usize,
    loaded_at:        String,
    persistence_mode: PersistenceMode,
    atomic_writes:    bool,
}

impl CollectionInfo {
    fn describe(collection: &MovieCollection) -> Self {
        Self {
            path:             collection.path().display().to_string(),
            movies:           collection.count(),
            loaded_at:        collection.loaded_at().to_rfc3339(),
            persistence_mode: collection.config().persistence_mode,
            atomic_writes:    collection.config().atomic_writes,
        }
    }
}

/// Print the collection path, movie count, load time and write options as JSON.
///
/// # Arguments
/// * `options` - The collection file and write options.
///
/// # Returns
/// Returns `Ok(())` on success, or a `ReelbaseError` on failure.
pub async fn run(options: CollectionOptions) -> reelbase::Result<()> {
    let collection = options.open().await?;
    debug!("Describing collection {:?}", collection.path());

    print_json(&CollectionInfo::describe(&collection))
}
