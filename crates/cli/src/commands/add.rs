use clap::Args;
use reelbase::Movie;
use tracing::{error, info};

use crate::commands::{report_persistence, CollectionOptions};

/// Arguments for the add command.
#[derive(Args, Clone, Default)]
pub struct AddArgs {
    /// Movie title
    #[arg(short, long)]
    pub title:    String,
    /// Director name
    #[arg(short, long)]
    pub director: String,
    /// Release year
    #[arg(short, long, allow_negative_numbers = true)]
    pub year:     i32,
    /// Genre label (repeat for several genres)
    #[arg(short, long = "genre")]
    pub genres:   Vec<String>,
}

/// Append a movie to the collection.
///
/// Titles are not checked for duplicates: adding a title that is already
/// present stores a second record.
///
/// # Arguments
/// * `options` - The collection file and write options.
/// * `args` - The parsed command-line arguments for add.
///
/// # Returns
/// Returns `Ok(())` on success, or a `ReelbaseError` on failure.
pub async fn run(options: CollectionOptions, args: AddArgs) -> reelbase::Result<()> {
    let mut collection = options.open().await?;
    let movie = Movie::new(args.title, args.director, args.year, args.genres);
    info!(
        "Adding movie '{}' to {:?}",
        movie.title,
        collection.path()
    );

    let title = movie.title.clone();
    match collection.add(movie).await {
        Ok(mutation) => {
            report_persistence(&mutation.persistence);
            info!("Movie '{}' added successfully", title);
            Ok(())
        },
        Err(e) => {
            error!("Failed to add movie '{}': {}", title, e);
            Err(e)
        },
    }
}

#[cfg(test)]
mod tests {
    use reelbase::MovieCollection;

    use super::*;
    use crate::commands::test_support::sample_collection;

    #[tokio::test]
    async fn test_add_appends_movie() {
        let (_temp_dir, path, options) = sample_collection().await;
        let args = AddArgs {
            title:    "Thief".to_string(),
            director: "Michael Mann".to_string(),
            year:     1981,
            genres:   vec!["Crime".to_string()],
        };

        let result = run(options, args).await;
        assert!(result.is_ok());

        let collection = MovieCollection::load(&path).await.unwrap();
        assert_eq!(collection.count(), 4);
        assert_eq!(collection.titles().last(), Some(&"Thief"));
        assert_eq!(collection.count_by_director("michael mann"), 2);
    }

    #[tokio::test]
    async fn test_add_to_missing_collection_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let options = CollectionOptions {
            file: Some(temp_dir.path().join("missing.json")),
            ..CollectionOptions::default()
        };

        let result = run(options, AddArgs::default()).await;
        assert!(matches!(
            result,
            Err(reelbase::ReelbaseError::FileNotFound { .. })
        ));
    }
}
