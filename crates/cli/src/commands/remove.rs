use clap::Args;
use tracing::{error, info};

use crate::commands::{print_json, report_persistence, CollectionOptions};

/// Arguments for the remove command.
#[derive(Args, Clone, Default)]
pub struct RemoveArgs {
    /// Title of the movie to remove (case-insensitive)
    #[arg(short, long)]
    pub title: String,
}

/// Remove the first movie with the given title.
///
/// The removed movie is printed to stdout as JSON. A title that matches no
/// movie is an error.
///
/// # Arguments
/// * `options` - The collection file and write options.
/// * `args` - The parsed command-line arguments for remove.
///
/// # Returns
/// Returns `Ok(())` on success, or a `ReelbaseError` on failure.
pub async fn run(options: CollectionOptions, args: RemoveArgs) -> reelbase::Result<()> {
    let mut collection = options.open().await?;
    info!(
        "Removing movie '{}' from {:?}",
        args.title,
        collection.path()
    );

    match collection.remove(&args.title).await {
        Ok(mutation) => {
            report_persistence(&mutation.persistence);
            info!("Movie '{}' removed successfully", mutation.value.title);
            print_json(&mutation.value)
        },
        Err(e) => {
            error!("Failed to remove movie '{}': {}", args.title, e);
            Err(e)
        },
    }
}
