use clap::Args;
use reelbase::MovieCollection;
use tracing::{error, info};

use crate::commands::CollectionOptions;

/// Arguments for the init command.
#[derive(Args, Clone, Default)]
pub struct InitArgs {}

/// Create a new, empty collection file.
///
/// The file selected with `--file` must not exist yet; an existing collection
/// is never overwritten.
///
/// # Arguments
/// * `options` - The collection file and write options.
/// * `_args` - The parsed command-line arguments for init.
///
/// # Returns
/// Returns `Ok(())` on success, or a `ReelbaseError` on failure.
pub async fn run(options: CollectionOptions, _args: InitArgs) -> reelbase::Result<()> {
    let path = options.resolve_path()?;
    info!("Initializing movie collection at {:?}", path);

    match MovieCollection::create_with_config(&path, options.to_config()).await {
        Ok(_) => {
            info!("Collection initialized successfully at {:?}", path);
            Ok(())
        },
        Err(e) => {
            error!("Failed to initialize collection at {:?}: {}", path, e);
            Err(e)
        },
    }
}
