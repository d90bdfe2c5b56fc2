use clap::Args;
use reelbase::{Movie, MovieCollection};
use tracing::debug;

use crate::commands::{print_json, CollectionOptions};

/// Arguments for the search command.
///
/// Exactly one criterion must be given.
#[derive(Args, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct SearchArgs {
    /// Match titles containing this text (case-sensitive)
    #[arg(long)]
    pub contains: Option<String>,
    /// Match movies released in this year
    #[arg(long, allow_negative_numbers = true)]
    pub year:     Option<i32>,
    /// Match movies tagged with this genre (case-insensitive)
    #[arg(long)]
    pub genre:    Option<String>,
}

impl SearchArgs {
    /// Run the selected lookup against a collection.
    fn matches<'a>(&self, collection: &'a MovieCollection) -> Vec<&'a Movie> {
        if let Some(substring) = &self.contains {
            collection.find_by_title_substring(substring)
        }
        else if let Some(year) = self.year {
            collection.find_by_year(year)
        }
        else if let Some(genre) = &self.genre {
            collection.find_by_genre(genre)
        }
        else {
            Vec::new()
        }
    }
}

/// Print the matching movies as a JSON array, in insertion order.
///
/// # Arguments
/// * `options` - The collection file and write options.
/// * `args` - The parsed command-line arguments for search.
///
/// # Returns
/// Returns `Ok(())` on success, or a `ReelbaseError` on failure.
pub async fn run(options: CollectionOptions, args: SearchArgs) -> reelbase::Result<()> {
    let collection = options.open().await?;
    let movies = args.matches(&collection);
    debug!("Search matched {} movies", movies.len());
    print_json(&movies)
}
