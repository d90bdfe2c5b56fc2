use clap::Args;
use reelbase::MovieUpdate;
use tracing::{error, info, warn};

use crate::commands::{print_json, report_persistence, CollectionOptions};

/// Arguments for the update command.
#[derive(Args, Clone, Default)]
pub struct UpdateArgs {
    /// Title of the movie to update (case-insensitive)
    #[arg(short, long)]
    pub title:        String,
    /// New director name
    #[arg(short, long)]
    pub director:     Option<String>,
    /// New release year
    #[arg(short, long, allow_negative_numbers = true)]
    pub year:         Option<i32>,
    /// New genre label (repeat for several genres; replaces the whole list)
    #[arg(short, long = "genre", conflicts_with = "clear_genres")]
    pub genres:       Vec<String>,
    /// Replace the genre list with an empty one
    #[arg(long)]
    pub clear_genres: bool,
}

impl UpdateArgs {
    /// Convert CLI arguments to a movie update.
    fn to_update(&self) -> MovieUpdate {
        let mut update = MovieUpdate::new();
        if let Some(director) = &self.director {
            update = update.with_director(director.clone());
        }
        if let Some(year) = self.year {
            update = update.with_year(year);
        }
        if self.clear_genres {
            update = update.with_genres(Vec::new());
        }
        else if !self.genres.is_empty() {
            update = update.with_genres(self.genres.clone());
        }
        update
    }
}

/// Change the director, year or genres of a movie.
///
/// Fields that are not given keep their current value. The title itself
/// cannot be changed. The updated movie is printed to stdout as JSON.
///
/// # Arguments
/// * `options` - The collection file and write options.
/// * `args` - The parsed command-line arguments for update.
///
/// # Returns
/// Returns `Ok(())` on success, or a `ReelbaseError` on failure.
pub async fn run(options: CollectionOptions, args: UpdateArgs) -> reelbase::Result<()> {
    let update = args.to_update();
    if update.is_empty() {
        warn!("No fields to update were given for '{}'", args.title);
    }

    let mut collection = options.open().await?;
    info!(
        "Updating movie '{}' in {:?}",
        args.title,
        collection.path()
    );

    match collection.update(&args.title, update).await {
        Ok(mutation) => {
            report_persistence(&mutation.persistence);
            info!("Movie '{}' updated successfully", mutation.value.title);
            print_json(&mutation.value)
        },
        Err(e) => {
            error!("Failed to update movie '{}': {}", args.title, e);
            Err(e)
        },
    }
}
