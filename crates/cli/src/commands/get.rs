use clap::Args;
use tracing::debug;

use crate::commands::{print_json, CollectionOptions};

/// Arguments for the get command.
#[derive(Args, Clone, Default)]
pub struct GetArgs {
    /// Title of the movie to print (case-insensitive)
    #[arg(short, long)]
    pub title: String,
}

/// Print the movie with the given title as JSON.
///
/// A missing title is not an error: nothing is printed and the library logs
/// a warning.
///
/// # Arguments
/// * `options` - The collection file and write options.
/// * `args` - The parsed command-line arguments for get.
///
/// # Returns
/// Returns `Ok(())` on success, or a `ReelbaseError` on failure.
pub async fn run(options: CollectionOptions, args: GetArgs) -> reelbase::Result<()> {
    let collection = options.open().await?;
    debug!("Getting movie '{}' from {:?}", args.title, collection.path());

    if let Some(movie) = collection.find_by_title(&args.title) {
        print_json(movie)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_collection;

    #[tokio::test]
    async fn test_get_existing_movie() {
        let (_temp_dir, _path, options) = sample_collection().await;
        let args = GetArgs {
            title: "heat".to_string(),
        };

        let result = run(options, args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_missing_movie_is_not_an_error() {
        let (_temp_dir, _path, options) = sample_collection().await;
        let args = GetArgs {
            title: "Vertigo".to_string(),
        };

        let result = run(options, args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_from_malformed_collection() {
        let (_temp_dir, path, options) = sample_collection().await;
        tokio::fs::write(&path, "{\"title\": \"Heat\"}").await.unwrap();

        let result = run(
            options,
            GetArgs {
                title: "Heat".to_string(),
            },
        )
        .await;
        assert!(matches!(
            result,
            Err(reelbase::ReelbaseError::MalformedCollection { .. })
        ));
    }
}
