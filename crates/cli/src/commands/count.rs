use clap::Args;
use reelbase::MovieCollection;
use tracing::debug;

use crate::commands::{print_line, CollectionOptions};

/// Arguments for the count command.
#[derive(Args, Clone, Default)]
pub struct CountArgs {
    /// Count only the movies of this director (case-insensitive)
    #[arg(short, long)]
    pub director: Option<String>,
}

impl CountArgs {
    /// Count the movies selected by these arguments.
    fn count(&self, collection: &MovieCollection) -> usize {
        match &self.director {
            Some(director) => {
                debug!("Counting movies directed by '{}'", director);
                collection.count_by_director(director)
            },
            None => collection.count(),
        }
    }
}

/// Print the number of movies in the collection.
///
/// # Arguments
/// * `options` - The collection file and write options.
/// * `args` - The parsed command-line arguments for count.
///
/// # Returns
/// Returns `Ok(())` on success, or a `ReelbaseError` on failure.
pub async fn run(options: CollectionOptions, args: CountArgs) -> reelbase::Result<()> {
    let collection = options.open().await?;
    print_line(args.count(&collection));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_collection;

    #[tokio::test]
    async fn test_count_all() {
        let (_temp_dir, _path, options) = sample_collection().await;
        let collection = options.open().await.unwrap();

        assert_eq!(CountArgs::default().count(&collection), 3);
        assert!(run(options, CountArgs::default()).await.is_ok());
    }

    #[tokio::test]
    async fn test_count_by_director() {
        let (_temp_dir, _path, options) = sample_collection().await;
        let collection = options.open().await.unwrap();

        let args = CountArgs {
            director: Some("RIDLEY SCOTT".to_string()),
        };
        assert_eq!(args.count(&collection), 2);

        let args = CountArgs {
            director: Some("Ridley".to_string()),
        };
        assert_eq!(args.count(&collection), 0);
    }
}
