use clap::Args;
use reelbase::MovieCollection;
use tracing::debug;

use crate::commands::{print_line, CollectionOptions};

/// Arguments for the list command.
#[derive(Args, Clone, Default)]
pub struct ListArgs {
    /// Print only the titles, one per line
    #[arg(long)]
    pub titles_only: bool,
}

impl ListArgs {
    /// Render the collection in the selected format.
    fn render(&self, collection: &MovieCollection) -> reelbase::Result<String> {
        if self.titles_only {
            Ok(collection.titles().join("\n"))
        }
        else {
            Ok(serde_json::to_string_pretty(collection.movies())?)
        }
    }
}

/// Print every movie in insertion order.
///
/// By default the movies are printed as a JSON array; with `--titles-only`
/// each title is printed on its own line.
///
/// # Arguments
/// * `options` - The collection file and write options.
/// * `args` - The parsed command-line arguments for list.
///
/// # Returns
/// Returns `Ok(())` on success, or a `ReelbaseError` on failure.
pub async fn run(options: CollectionOptions, args: ListArgs) -> reelbase::Result<()> {
    let collection = options.open().await?;
    debug!(
        "Listing {} movies from {:?}",
        collection.count(),
        collection.path()
    );

    if args.titles_only && collection.is_empty() {
        return Ok(());
    }
    print_line(args.render(&collection)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use reelbase::Movie;

    use super::*;
    use crate::commands::test_support::sample_collection;

    #[tokio::test]
    async fn test_list_movies() {
        let (_temp_dir, _path, options) = sample_collection().await;
        let collection = options.open().await.unwrap();

        let output = ListArgs::default().render(&collection).unwrap();
        let movies: Vec<Movie> = serde_json::from_str(&output).unwrap();
        assert_eq!(movies, collection.movies());
        assert!(run(options, ListArgs::default()).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_titles_only() {
        let (_temp_dir, _path, options) = sample_collection().await;
        let collection = options.open().await.unwrap();
        let args = ListArgs {
            titles_only: true,
        };

        assert_eq!(
            args.render(&collection).unwrap(),
            "Alien\nBlade Runner\nHeat"
        );
        assert!(run(options, args).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_empty_collection() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("empty.json");
        tokio::fs::write(&path, "[]").await.unwrap();
        let options = CollectionOptions {
            file: Some(path),
            ..CollectionOptions::default()
        };
        let collection = options.open().await.unwrap();

        assert_eq!(ListArgs::default().render(&collection).unwrap(), "[]");
        assert!(run(options, ListArgs::default()).await.is_ok());
    }
}
